use bevy::prelude::*;

/// Top-level session mode.
/// MainMenu -> (EnteringName | Instructions | Playing) -> GameOver -> Scoreboard -> MainMenu
///
/// Exactly one mode is active at a time; per-mode systems are gated with
/// `run_if(in_state(..))`, so a key press can never reach a handler belonging
/// to another mode (confirm in `Playing` fires the ship, it never re-enters
/// the menu).
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameMode {
    /// Scrollable four-entry menu over the drifting asteroid field.
    #[default]
    MainMenu,
    /// Free-text gamer tag capture.
    EnteringName,
    /// Static help screen.
    Instructions,
    /// Live round: ship under player control.
    Playing,
    /// Round ended; waiting on confirm to record the result.
    GameOver,
    /// Chronological table of recorded rounds.
    Scoreboard,
}
