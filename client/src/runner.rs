use common::games::tictactoe::TicTacToeSettings;
use common::log;
use common::session::{
    GameBroadcaster, GameOverNotification, TicTacToeSessionState, run_game_loop,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use crate::command::{ClientCommand, HELP_TEXT, parse_command};
use crate::terminal::TerminalBroadcaster;

type GameLoopHandle = JoinHandle<GameOverNotification>;

fn spawn_game_loop<B: GameBroadcaster>(
    session: &TicTacToeSessionState,
    broadcaster: &B,
) -> GameLoopHandle {
    tokio::spawn(run_game_loop(session.clone(), broadcaster.clone()))
}

/// Resets the board and returns a loop that serves the new game. The old
/// loop is always replaced, whether or not it has already finished.
async fn restart_game<B: GameBroadcaster>(
    session: &TicTacToeSessionState,
    broadcaster: &B,
    game_handle: GameLoopHandle,
) -> GameLoopHandle {
    game_handle.abort();
    session.restart().await;
    spawn_game_loop(session, broadcaster)
}

/// Runs games until the user quits or stdin closes.
pub async fn run(settings: TicTacToeSettings) -> Result<(), String> {
    let session = TicTacToeSessionState::create(&settings)?;
    let broadcaster = TerminalBroadcaster::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP_TEXT);

    let mut game_handle = spawn_game_loop(&session, &broadcaster);
    let mut game_running = true;

    loop {
        tokio::select! {
            result = &mut game_handle, if game_running => {
                game_running = false;
                result.map_err(|e| format!("Game loop failed: {}", e))?;
            }
            line = lines.next_line() => {
                let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
                let Some(line) = line else {
                    break;
                };

                match parse_command(&line) {
                    Ok(ClientCommand::Place(index)) => {
                        if let Err(e) = session.place_human_mark(index).await {
                            println!("{}", e);
                        }
                    }
                    Ok(ClientCommand::Restart) => {
                        log!("Starting a new game");
                        game_handle = restart_game(&session, &broadcaster, game_handle).await;
                        game_running = true;
                    }
                    Ok(ClientCommand::Quit) => break,
                    Ok(ClientCommand::Help) => println!("{}", HELP_TEXT),
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    game_handle.abort();

    Ok(())
}
