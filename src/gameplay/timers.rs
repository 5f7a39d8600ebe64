use bevy::prelude::*;
use smallvec::SmallVec;

use crate::app::state::GameMode;
use crate::core::system_order::WorldEventSet;

/// Why a deferred transition was scheduled. The tag is carried through the
/// timer and matched by the consumer when it fires, so a stale timer can
/// never drive a transition the current mode has no edge for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundTimerTag {
    /// Replacement ship due after a death with lives in hand.
    CreateNewPlayer,
    /// Next wave due after the field was cleared.
    StartNextLevel,
    /// GAME OVER card due after the last life was lost.
    ShowGameOver,
}

/// A deferred timer elapsed. Consumers match on the tag; anything with no
/// handler in the current mode is dropped unread.
#[derive(Event, Debug, Clone, Copy)]
pub struct RoundTimerFired(pub RoundTimerTag);

/// Pending fire-once timers. Never more than a couple in flight at a time.
/// Individual entries cannot be cancelled; the whole set is dropped when a
/// round ends or a new one begins.
#[derive(Resource, Default, Debug)]
pub struct RoundTimers {
    pending: SmallVec<[(Timer, RoundTimerTag); 4]>,
}

impl RoundTimers {
    pub fn schedule(&mut self, secs: f32, tag: RoundTimerTag) {
        self.pending
            .push((Timer::from_seconds(secs.max(0.0), TimerMode::Once), tag));
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_scheduled(&self, tag: RoundTimerTag) -> bool {
        self.pending.iter().any(|(_, t)| *t == tag)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Advance all pending timers, draining the ones that elapsed.
    fn tick(&mut self, delta: std::time::Duration) -> SmallVec<[RoundTimerTag; 4]> {
        let mut fired = SmallVec::new();
        self.pending.retain(|(timer, tag)| {
            if timer.tick(delta).just_finished() {
                fired.push(*tag);
                false
            } else {
                true
            }
        });
        fired
    }
}

pub struct RoundTimersPlugin;

impl Plugin for RoundTimersPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoundTimers>()
            .add_event::<RoundTimerFired>()
            .add_systems(
                Update,
                tick_round_timers
                    .in_set(WorldEventSet)
                    .run_if(in_state(GameMode::Playing)),
            )
            // Stale timers must not leak across rounds in either direction.
            .add_systems(OnEnter(GameMode::GameOver), clear_round_timers)
            .add_systems(OnEnter(GameMode::Playing), clear_round_timers);
    }
}

fn tick_round_timers(
    time: Res<Time>,
    mut timers: ResMut<RoundTimers>,
    mut ev_fired: EventWriter<RoundTimerFired>,
) {
    for tag in timers.tick(time.delta()) {
        info!(target: "session", "round timer fired: {tag:?}");
        ev_fired.write(RoundTimerFired(tag));
    }
}

fn clear_round_timers(mut timers: ResMut<RoundTimers>) {
    timers.clear();
}
