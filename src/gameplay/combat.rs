use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use std::collections::HashSet;

use crate::app::state::GameMode;
use crate::core::components::{Asteroid, Bullet, Ship};
use crate::core::system_order::WorldEventSet;
use crate::gameplay::events::{DestroyedKind, ObjectDestroyed};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            detect_combat_collisions
                .in_set(WorldEventSet)
                .run_if(in_state(GameMode::Playing)),
        );
    }
}

/// Translate physics contacts into session destruction notices.
///
/// Shot x rock: both despawn and the rock raises a notice at its pose.
/// Ship x rock: the ship despawns, the rock survives the ram. Everything
/// else (including cleanup despawns) stays silent.
pub fn detect_combat_collisions(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    mut destroyed: EventWriter<ObjectDestroyed>,
    q_ship: Query<&Transform, With<Ship>>,
    q_asteroid: Query<&Transform, With<Asteroid>>,
    q_bullet: Query<(), With<Bullet>>,
) {
    // One entity can show up in several contact pairs on the same frame;
    // it must raise at most one notice.
    let mut gone: HashSet<Entity> = HashSet::new();
    for ev in collisions.read() {
        let CollisionEvent::Started(a, b, _flags) = ev else {
            continue;
        };
        let (a, b) = (*a, *b);
        if gone.contains(&a) || gone.contains(&b) {
            continue;
        }

        let shot = if q_bullet.get(a).is_ok() && q_asteroid.get(b).is_ok() {
            Some((a, b))
        } else if q_bullet.get(b).is_ok() && q_asteroid.get(a).is_ok() {
            Some((b, a))
        } else {
            None
        };
        if let Some((bullet, rock)) = shot {
            let Ok(pose) = q_asteroid.get(rock) else {
                continue;
            };
            commands.entity(bullet).despawn();
            commands.entity(rock).despawn();
            gone.insert(bullet);
            gone.insert(rock);
            destroyed.write(ObjectDestroyed {
                kind: DestroyedKind::Asteroid,
                pose: *pose,
            });
            continue;
        }

        let rammed = if q_ship.get(a).is_ok() && q_asteroid.get(b).is_ok() {
            Some(a)
        } else if q_ship.get(b).is_ok() && q_asteroid.get(a).is_ok() {
            Some(b)
        } else {
            None
        };
        if let Some(ship) = rammed {
            let Ok(pose) = q_ship.get(ship) else {
                continue;
            };
            commands.entity(ship).despawn();
            gone.insert(ship);
            destroyed.write(ObjectDestroyed {
                kind: DestroyedKind::Ship,
                pose: *pose,
            });
        }
    }
}
