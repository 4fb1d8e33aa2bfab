mod command;
mod config;
mod runner;
mod terminal;

use clap::Parser;
use common::config::Validate;
use common::games::tictactoe::{FirstPlayer, TicTacToeSettings};
use common::{log, logger};

use config::{ClientConfig, get_config_manager};

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax computer")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    thinking_delay_ms: Option<u64>,

    #[arg(long)]
    computer_first: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log the computer's candidate move scores.
    #[arg(long)]
    verbose: bool,
}

fn game_settings(config: &ClientConfig, args: &Args) -> TicTacToeSettings {
    let mut settings = config.game.clone();
    if let Some(delay) = args.thinking_delay_ms {
        settings.thinking_delay_ms = delay;
    }
    if args.computer_first {
        settings.first_player = FirstPlayer::Computer;
    }
    settings
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let prefix = if args.use_log_prefix || config.logging.use_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose || config.logging.verbose);

    let settings = game_settings(&config, &args);
    settings.validate()?;

    log!(
        "Starting tic-tac-toe: first player {:?}, thinking delay {} ms",
        settings.first_player,
        settings.thinking_delay_ms
    );

    runner::run(settings).await?;

    log!("Bye");
    Ok(())
}
