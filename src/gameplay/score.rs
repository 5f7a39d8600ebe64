use bevy::prelude::*;

use crate::app::state::GameMode;
use crate::core::config::GameConfig;
use crate::core::system_order::WorldEventSet;
use crate::gameplay::combat::detect_combat_collisions;
use crate::gameplay::events::{DestroyedKind, ObjectDestroyed, PlayerKilled, ScoreChanged};

/// Running score for the active round. Reset exactly once per round, when
/// the result is recorded on the game-over confirm.
#[derive(Resource, Default, Debug, Deref, DerefMut)]
pub struct PlayerScore(pub i32);

/// Ships left, counting the one in play. Re-armed from config at round start.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct ShipLives(pub u32);

impl Default for ShipLives {
    fn default() -> Self {
        Self(3)
    }
}

pub struct ScoreTrackerPlugin;

impl Plugin for ScoreTrackerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerScore>()
            .init_resource::<ShipLives>()
            .add_systems(OnEnter(GameMode::Playing), arm_lives_for_round)
            .add_systems(
                Update,
                (score_destroyed_asteroids, track_ship_deaths)
                    .in_set(WorldEventSet)
                    .after(detect_combat_collisions)
                    .run_if(in_state(GameMode::Playing)),
            );
    }
}

fn arm_lives_for_round(cfg: Res<GameConfig>, mut lives: ResMut<ShipLives>) {
    lives.0 = cfg.session.start_lives;
}

/// Every destroyed rock is worth the configured flat score.
pub fn score_destroyed_asteroids(
    cfg: Res<GameConfig>,
    mut score: ResMut<PlayerScore>,
    mut ev_destroyed: EventReader<ObjectDestroyed>,
    mut ev_score: EventWriter<ScoreChanged>,
) {
    for ev in ev_destroyed.read() {
        if ev.kind == DestroyedKind::Asteroid {
            score.0 += cfg.session.asteroid_score;
            ev_score.write(ScoreChanged(score.0));
        }
    }
}

/// Decrement lives on a ship loss and pass the remainder along; the session
/// decides between a respawn and the end of the round.
pub fn track_ship_deaths(
    mut lives: ResMut<ShipLives>,
    mut ev_destroyed: EventReader<ObjectDestroyed>,
    mut ev_killed: EventWriter<PlayerKilled>,
) {
    for ev in ev_destroyed.read() {
        if ev.kind == DestroyedKind::Ship {
            lives.0 = lives.0.saturating_sub(1);
            info!(target: "session", "ship lost, {} lives left", lives.0);
            ev_killed.write(PlayerKilled {
                lives_left: lives.0,
            });
        }
    }
}
