use bevy::prelude::*;

use super::name_entry::NameBuffer;
use super::state::GameMode;
use crate::core::records::GamerLedger;
use crate::core::system_order::SessionFlowSet;
use crate::gameplay::{PlayerScore, RoundTimerFired, RoundTimerTag, ScoreChanged};

pub struct GameOverPlugin;

impl Plugin for GameOverPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GamerLedger>()
            .add_systems(
                Update,
                enter_game_over_on_timer
                    .in_set(SessionFlowSet)
                    .run_if(in_state(GameMode::Playing)),
            )
            .add_systems(
                Update,
                record_round_on_confirm.run_if(in_state(GameMode::GameOver)),
            );
    }
}

fn enter_game_over_on_timer(
    mut ev_timer: EventReader<RoundTimerFired>,
    mut next_mode: ResMut<NextState<GameMode>>,
) {
    for ev in ev_timer.read() {
        if ev.0 == RoundTimerTag::ShowGameOver {
            info!(target: "session", "=== GAME OVER ===");
            next_mode.set(GameMode::GameOver);
        }
    }
}

/// One confirm press books the round: the current tag and score go into the
/// ledger, the score resets, and the scoreboard comes up. Booking exactly once
/// falls out of the mode change.
fn record_round_on_confirm(
    keys: Res<ButtonInput<KeyCode>>,
    buffer: Res<NameBuffer>,
    mut score: ResMut<PlayerScore>,
    mut ledger: ResMut<GamerLedger>,
    mut ev_score: EventWriter<ScoreChanged>,
    mut next_mode: ResMut<NextState<GameMode>>,
) {
    if !keys.just_pressed(KeyCode::Enter) {
        return;
    }
    info!(
        target: "session",
        "round recorded: {:?} scored {}",
        buffer.0,
        score.0
    );
    ledger.record(buffer.0.clone(), score.0);
    score.0 = 0;
    ev_score.write(ScoreChanged(0));
    next_mode.set(GameMode::Scoreboard);
}
