use bevy::prelude::*;

/// Marker component identifying the player ship (holds physics body & collider).
#[derive(Component)]
pub struct Ship;

/// Marker component identifying a drifting rock.
#[derive(Component)]
pub struct Asteroid;

/// Marker component identifying a live shot.
#[derive(Component)]
pub struct Bullet;

/// Marker component identifying a one-shot explosion effect.
#[derive(Component)]
pub struct Explosion;

/// Remaining time before the entity is silently despawned (no destruction
/// notification is raised for it).
#[derive(Component, Debug, Deref, DerefMut)]
pub struct Lifespan(pub Timer);

impl Lifespan {
    pub fn new(secs: f32) -> Self {
        Self(Timer::from_seconds(secs, TimerMode::Once))
    }
}

/// Entities with this marker teleport across the opposite window edge instead
/// of leaving the single-screen world.
#[derive(Component)]
pub struct ScreenWrap;
