use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Lifespan, ScreenWrap};
use crate::core::config::GameConfig;

/// Collision membership groups. Rocks never collide with each other, shots
/// only ever meet rocks, the ship only meets rocks.
pub const GROUP_SHIP: Group = Group::GROUP_1;
pub const GROUP_ASTEROID: Group = Group::GROUP_2;
pub const GROUP_BULLET: Group = Group::GROUP_3;

pub fn ship_collision_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_SHIP, GROUP_ASTEROID)
}

pub fn asteroid_collision_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_ASTEROID, GROUP_SHIP | GROUP_BULLET)
}

pub fn bullet_collision_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_BULLET, GROUP_ASTEROID)
}

pub struct SpacePhysicsPlugin; // wrapper configuring Rapier for open space

impl Plugin for SpacePhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            RapierPhysicsPlugin::<NoUserData>::default(),
            RapierDebugRenderPlugin::default(),
        ))
        .add_systems(Startup, configure_physics)
        .add_systems(Update, (wrap_positions, tick_lifespans));
    }
}

fn configure_physics(
    mut q_cfg: Query<&mut RapierConfiguration>,
    debug_ctx: Option<ResMut<DebugRenderContext>>,
    game_cfg: Res<GameConfig>,
) {
    // RapierConfiguration lives on the context entity (single world here).
    if let Ok(mut cfg) = q_cfg.single_mut() {
        // Open space: no global gravity.
        cfg.gravity = Vect::new(0.0, 0.0);
    }
    if let Some(mut ctx) = debug_ctx {
        ctx.enabled = game_cfg.rapier_debug;
    }
}

/// Teleport wrapped entities across the opposite window edge so nothing
/// leaves the single-screen world.
fn wrap_positions(cfg: Res<GameConfig>, mut q: Query<&mut Transform, With<ScreenWrap>>) {
    let half_w = cfg.window.width * 0.5;
    let half_h = cfg.window.height * 0.5;
    for mut tf in q.iter_mut() {
        let p = &mut tf.translation;
        if p.x > half_w {
            p.x -= cfg.window.width;
        } else if p.x < -half_w {
            p.x += cfg.window.width;
        }
        if p.y > half_h {
            p.y -= cfg.window.height;
        } else if p.y < -half_h {
            p.y += cfg.window.height;
        }
    }
}

/// Expire entities whose lifespan ran out. A silent removal: no destruction
/// notice is raised for a shot that simply fizzles.
fn tick_lifespans(
    time: Res<Time>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut Lifespan)>,
) {
    for (e, mut life) in q.iter_mut() {
        if life.tick(time.delta()).just_finished() {
            commands.entity(e).despawn();
        }
    }
}
