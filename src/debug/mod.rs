//! Debug module: feature gated session logging & physics wireframe toggle.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use bevy_rapier2d::render::DebugRenderContext;

#[cfg(feature = "debug")]
use crate::app::state::GameMode;
#[cfg(feature = "debug")]
use crate::core::components::{Asteroid, Bullet, Explosion, Ship};
#[cfg(feature = "debug")]
use crate::gameplay::{PlayerScore, RoundTimers, ShipLives, WaveState};

#[cfg(feature = "debug")]
#[derive(Resource)]
pub struct DebugState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (debug_key_input_system, debug_logging_system));
    }
}

/// F1 flips the rapier wireframe overlay at runtime, independent of the
/// `rapier_debug` config switch that sets its initial state.
#[cfg(feature = "debug")]
fn debug_key_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    ctx: Option<ResMut<DebugRenderContext>>,
) {
    if keys.just_pressed(KeyCode::F1) {
        if let Some(mut c) = ctx {
            c.enabled = !c.enabled;
            info!(target: "debug", "rapier wireframe {}", if c.enabled { "on" } else { "off" });
        }
    }
}

#[cfg(feature = "debug")]
#[allow(clippy::too_many_arguments)]
fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mode: Res<State<GameMode>>,
    wave: Res<WaveState>,
    score: Res<PlayerScore>,
    lives: Res<ShipLives>,
    timers: Res<RoundTimers>,
    q_ships: Query<(), With<Ship>>,
    q_asteroids: Query<(), With<Asteroid>>,
    q_bullets: Query<(), With<Bullet>>,
    q_explosions: Query<(), With<Explosion>>,
) {
    state.frame_counter += 1;
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(
            "SESSION frame={} t={:.3}s mode={:?} level={} rocks={}/{} ships={} bullets={} booms={} score={} lives={} timers={}",
            state.frame_counter,
            time.elapsed_secs(),
            mode.get(),
            wave.level,
            q_asteroids.iter().count(),
            wave.remaining,
            q_ships.iter().count(),
            q_bullets.iter().count(),
            q_explosions.iter().count(),
            score.0,
            lives.0,
            timers.pending_count(),
        );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
