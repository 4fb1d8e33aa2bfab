use common::games::tictactoe::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    /// Board index 0..=8; the user types 1..=9.
    Place(Move),
    Restart,
    Quit,
    Help,
}

pub const HELP_TEXT: &str = "Enter a cell number 1-9 (1 is top-left), r to restart, q to quit, h for help.";

pub fn parse_command(input: &str) -> Result<ClientCommand, String> {
    let input = input.trim();

    match input.to_ascii_lowercase().as_str() {
        "r" | "restart" => return Ok(ClientCommand::Restart),
        "q" | "quit" | "exit" => return Ok(ClientCommand::Quit),
        "h" | "help" | "?" => return Ok(ClientCommand::Help),
        _ => {}
    }

    match input.parse::<usize>() {
        Ok(cell @ 1..=9) => Ok(ClientCommand::Place(cell - 1)),
        Ok(cell) => Err(format!("Cell {} does not exist. {}", cell, HELP_TEXT)),
        Err(_) => Err(format!("Unknown command '{}'. {}", input, HELP_TEXT)),
    }
}
