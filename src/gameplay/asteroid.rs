use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::core::components::{Asteroid, ScreenWrap};
use crate::core::config::GameConfig;
use crate::gameplay::physics::asteroid_collision_groups;
use crate::rendering::sprites::{SheetKind, SheetRef};

/// Randomized wave member: pose anywhere outside the central clear zone,
/// drift and spin sampled from the configured ranges.
pub fn spawn_asteroid(commands: &mut Commands, cfg: &GameConfig) -> Entity {
    let mut rng = rand::thread_rng();
    let half_w = cfg.window.width * 0.5;
    let half_h = cfg.window.height * 0.5;
    let mut pos = Vec2::new(
        rng.gen_range(-half_w..half_w),
        rng.gen_range(-half_h..half_h),
    );
    // Keep the center clear so a respawned ship never materializes inside a rock.
    let clear = cfg.asteroid.spawn_clear_radius.max(0.0);
    if pos.length() < clear {
        let dir = if pos.length_squared() > 1e-6 {
            pos.normalize()
        } else {
            Vec2::X
        };
        pos = dir * clear;
    }
    let speed = sample_range(&mut rng, cfg.asteroid.speed_range.min, cfg.asteroid.speed_range.max);
    let drift = Vec2::from_angle(rng.gen_range(0.0..std::f32::consts::TAU)) * speed;
    let spin = sample_range(&mut rng, cfg.asteroid.spin_range.min, cfg.asteroid.spin_range.max)
        .to_radians();

    commands
        .spawn((
            Asteroid,
            ScreenWrap,
            SheetRef(SheetKind::Asteroid),
            Transform::from_xyz(pos.x, pos.y, 0.0),
            GlobalTransform::default(),
            RigidBody::Dynamic,
            Collider::ball(cfg.asteroid.collider_radius),
            Velocity {
                linvel: drift,
                angvel: spin,
            },
            ActiveEvents::COLLISION_EVENTS,
            asteroid_collision_groups(),
        ))
        .id()
}

fn sample_range(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if min < max {
        rng.gen_range(min..max)
    } else {
        min
    }
}
