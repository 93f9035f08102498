// app/controls.rs

use crate::app::{ControlChange, WidgetEvent};
use crate::model::ControlError;
use crate::render::page::PRICE_RANGES;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

pub const HELP: &str = "📋 Available commands:\n\
    arrondissement <value> - set the district filter (empty clears it)\n\
    priceRange <value> - set the price filter: $, $$, $$$, $$$$ or empty\n\
    clear - reset both filters\n\
    help - command list\n\
    quit - stop";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlCommand {
    Change(ControlChange),
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ControlCommand>, ControlError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (name, value) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let value = value.trim();

    let command = match name {
        "arrondissement" => ControlCommand::Change(ControlChange::District(value.to_string())),
        "priceRange" => {
            if !PRICE_RANGES.contains(&value) {
                return Err(ControlError::InvalidPriceRange(value.to_string()));
            }
            ControlCommand::Change(ControlChange::PriceRange(value.to_string()))
        }
        "clear" => ControlCommand::Change(ControlChange::Clear),
        "help" => ControlCommand::Help,
        "quit" | "exit" => ControlCommand::Quit,
        other => return Err(ControlError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

/// Reads commands line by line and forwards control changes as events.
/// Returns at end of input or after `quit`.
pub async fn listen_for_commands<R>(input: R, events: UnboundedSender<WidgetEvent>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read controls input: {}", e);
                break;
            }
        };

        info!("Handling command: {}", line.trim());
        let event = match parse_command(&line) {
            Ok(Some(ControlCommand::Change(change))) => WidgetEvent::ControlChanged(change),
            Ok(Some(ControlCommand::Help)) => {
                info!("{}", HELP);
                continue;
            }
            Ok(Some(ControlCommand::Quit)) => WidgetEvent::Shutdown,
            Ok(None) => continue,
            Err(e) => {
                warn!("⚠️ {}", e);
                continue;
            }
        };

        let quitting = matches!(event, WidgetEvent::Shutdown);
        if events.send(event).is_err() || quitting {
            break;
        }
    }
    info!("🛑 Controls listener ended.");
}
