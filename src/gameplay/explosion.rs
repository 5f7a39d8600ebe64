use bevy::prelude::*;

use crate::app::state::GameMode;
use crate::core::components::Explosion;
use crate::core::system_order::SessionFlowSet;
use crate::gameplay::events::ObjectDestroyed;
use crate::rendering::sprites::{SheetKind, SheetRef};

/// One-shot explosion effect at the given pose. It removes itself when its
/// animation completes; that is the animation system's job, not the
/// factory's.
pub fn spawn_explosion(commands: &mut Commands, pose: &Transform) -> Entity {
    commands
        .spawn((
            Explosion,
            SheetRef(SheetKind::Explosion),
            Transform::from_translation(pose.translation),
            GlobalTransform::default(),
        ))
        .id()
}

pub struct ExplosionPlugin;

impl Plugin for ExplosionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            explode_destroyed_objects
                .in_set(SessionFlowSet)
                .run_if(in_state(GameMode::Playing)),
        );
    }
}

/// Place an explosion wherever combat removed something, rock or ship alike.
fn explode_destroyed_objects(
    mut commands: Commands,
    mut ev_destroyed: EventReader<ObjectDestroyed>,
) {
    for ev in ev_destroyed.read() {
        spawn_explosion(&mut commands, &ev.pose);
    }
}
