//! Command dispatch for the interactive prompt.

use booth_core::announce::Audience;
use booth_transport::application::query_handlers::list_buttons;
use booth_transport::domain::commands::PressButton;
use tracing::debug;
use uuid::Uuid;

use crate::state::AppState;

/// Whether the prompt keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Quit,
}

/// Runs one line of player input.
pub async fn dispatch(state: &AppState, line: &str) -> Outcome {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    match verb.to_lowercase().as_str() {
        "" => {}
        "press" | "push" => press(state, rest).await,
        "buttons" => {
            for button in list_buttons(state.coordinator.registry()) {
                say(state, &format!("{:>2}. {}", button.ordinal, button.label));
            }
        }
        "quit" | "exit" => return Outcome::Quit,
        other => {
            debug!(verb = other, "unknown command");
            say(state, "What?");
        }
    }
    Outcome::Continue
}

async fn press(state: &AppState, selector: &str) {
    let command = PressButton {
        correlation_id: Uuid::new_v4(),
        traveler: state.player.clone(),
        selector: selector.to_owned(),
    };
    // Failures have already been announced to the player.
    if let Ok(accepted) = state.coordinator.press(&command).await {
        debug!(
            sequence_id = %accepted.sequence_id,
            destination = accepted.destination.label(),
            "transport under way"
        );
    }
}

fn say(state: &AppState, text: &str) {
    state
        .announcer
        .announce(&Audience::Entity(state.player.id), text);
}
