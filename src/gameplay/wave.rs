use bevy::prelude::*;

use crate::app::state::GameMode;
use crate::core::config::GameConfig;
use crate::core::system_order::SessionFlowSet;
use crate::gameplay::asteroid::spawn_asteroid;
use crate::gameplay::events::{DestroyedKind, ObjectDestroyed};
use crate::gameplay::timers::{RoundTimerFired, RoundTimerTag, RoundTimers};

/// Level counter and the live-rock count for the current wave. Both persist
/// across rounds; only the process knows level 0 twice.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct WaveState {
    pub level: u32,
    pub remaining: u32,
}

/// Wave population grows linearly with the level.
pub fn wave_size(cfg: &GameConfig, level: u32) -> u32 {
    cfg.session.base_wave_size + cfg.session.wave_growth * level
}

pub fn spawn_wave(commands: &mut Commands, cfg: &GameConfig, wave: &mut WaveState) {
    let count = wave_size(cfg, wave.level);
    for _ in 0..count {
        spawn_asteroid(commands, cfg);
    }
    wave.remaining = count;
    info!(target: "wave", "level {} wave: {} asteroids", wave.level, count);
}

pub struct WavePlugin;

impl Plugin for WavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WaveState>()
            .add_systems(Startup, spawn_menu_field)
            .add_systems(OnEnter(GameMode::Playing), ensure_live_field)
            .add_systems(
                Update,
                (handle_asteroid_removed, advance_wave_on_timer)
                    .in_set(SessionFlowSet)
                    .run_if(in_state(GameMode::Playing)),
            );
    }
}

/// The level-0 field doubles as the menu backdrop; starting a round drops
/// the ship straight into it.
fn spawn_menu_field(mut commands: Commands, cfg: Res<GameConfig>, mut wave: ResMut<WaveState>) {
    spawn_wave(&mut commands, &cfg, &mut wave);
}

/// A round that begins over an empty field (the previous one ended during
/// the inter-wave grace) advances to the next wave immediately instead of
/// idling forever.
fn ensure_live_field(mut commands: Commands, cfg: Res<GameConfig>, mut wave: ResMut<WaveState>) {
    if wave.remaining == 0 {
        wave.level += 1;
        spawn_wave(&mut commands, &cfg, &mut wave);
    }
}

fn handle_asteroid_removed(
    cfg: Res<GameConfig>,
    mut wave: ResMut<WaveState>,
    mut ev_destroyed: EventReader<ObjectDestroyed>,
    mut timers: ResMut<RoundTimers>,
) {
    for ev in ev_destroyed.read() {
        if ev.kind != DestroyedKind::Asteroid {
            continue;
        }
        if wave.remaining > 0 {
            wave.remaining -= 1;
            if wave.remaining == 0 {
                info!(target: "wave", "level {} cleared", wave.level);
                timers.schedule(cfg.session.next_wave_delay, RoundTimerTag::StartNextLevel);
            }
        }
    }
}

fn advance_wave_on_timer(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut wave: ResMut<WaveState>,
    mut ev_fired: EventReader<RoundTimerFired>,
) {
    for ev in ev_fired.read() {
        if ev.0 == RoundTimerTag::StartNextLevel {
            wave.level += 1;
            spawn_wave(&mut commands, &cfg, &mut wave);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_sizes_grow_linearly() {
        let cfg = GameConfig::default();
        assert_eq!(wave_size(&cfg, 0), 10);
        assert_eq!(wave_size(&cfg, 1), 12);
        assert_eq!(wave_size(&cfg, 2), 14);
        assert_eq!(wave_size(&cfg, 7), 24);
    }
}
