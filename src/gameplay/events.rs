use bevy::prelude::*;

/// What kind of world object a destruction notice refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestroyedKind {
    Asteroid,
    Ship,
}

/// A combat despawn happened: something was shot or rammed out of the world.
/// Carries the pose at the moment of death so an explosion can be placed
/// there. Screen-cleanup despawns never raise this.
#[derive(Event, Debug, Clone, Copy)]
pub struct ObjectDestroyed {
    pub kind: DestroyedKind,
    pub pose: Transform,
}

/// The ship was lost; `lives_left` is the count after the decrement.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerKilled {
    pub lives_left: u32,
}

/// The score total changed; carries the new value.
#[derive(Event, Debug, Clone, Copy)]
pub struct ScoreChanged(pub i32);

/// Registers the session-facing message types. Gameplay systems write them,
/// session systems read them; tests inject them directly.
pub struct SessionEventsPlugin;

impl Plugin for SessionEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ObjectDestroyed>()
            .add_event::<PlayerKilled>()
            .add_event::<ScoreChanged>();
    }
}
