use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::GameMode;
use crate::core::components::{Bullet, Lifespan, ScreenWrap, Ship};
use crate::core::config::GameConfig;
use crate::core::system_order::SessionFlowSet;
use crate::gameplay::events::PlayerKilled;
use crate::gameplay::physics::{bullet_collision_groups, ship_collision_groups};
use crate::gameplay::timers::{RoundTimerFired, RoundTimerTag, RoundTimers};
use crate::rendering::sprites::{SheetKind, SheetRef};

pub struct ShipControlPlugin;

impl Plugin for ShipControlPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameMode::Playing), deploy_ship)
            .add_systems(
                Update,
                (steer_ship, fire_bullets).run_if(in_state(GameMode::Playing)),
            )
            .add_systems(
                Update,
                (handle_player_killed, respawn_ship_on_timer)
                    .in_set(SessionFlowSet)
                    .run_if(in_state(GameMode::Playing)),
            );
    }
}

/// Ready-to-fly ship at the world center: zero velocity, forward heading.
pub fn spawn_ship(commands: &mut Commands, cfg: &GameConfig) -> Entity {
    commands
        .spawn((
            Ship,
            ScreenWrap,
            SheetRef(SheetKind::Ship),
            Transform::IDENTITY,
            GlobalTransform::default(),
            RigidBody::Dynamic,
            Collider::ball(cfg.ship.collider_radius),
            Velocity::zero(),
            ActiveEvents::COLLISION_EVENTS,
            ship_collision_groups(),
        ))
        .id()
}

fn deploy_ship(mut commands: Commands, cfg: Res<GameConfig>, q_ship: Query<Entity, With<Ship>>) {
    // A leftover ship would put two hulls under one set of controls.
    for e in &q_ship {
        commands.entity(e).despawn();
    }
    spawn_ship(&mut commands, &cfg);
}

/// Up accelerates along the current heading; left/right hold a fixed turn
/// rate, released keys stop the turn. The hull coasts, there is no brake.
fn steer_ship(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    mut q_ship: Query<(&Transform, &mut Velocity), With<Ship>>,
) {
    let Ok((tf, mut vel)) = q_ship.single_mut() else {
        return;
    };
    if keys.pressed(KeyCode::ArrowUp) {
        let heading = (tf.rotation * Vec3::Y).truncate();
        vel.linvel += heading * cfg.ship.acceleration * time.delta_secs();
    }
    let turn = cfg.ship.turn_rate.to_radians();
    vel.angvel = if keys.pressed(KeyCode::ArrowLeft) {
        turn
    } else if keys.pressed(KeyCode::ArrowRight) {
        -turn
    } else {
        0.0
    };
}

/// Confirm doubles as the trigger while a round is live; it can never reach
/// a menu handler from here.
fn fire_bullets(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    q_ship: Query<(&Transform, &Velocity), With<Ship>>,
) {
    if !(keys.just_pressed(KeyCode::Space) || keys.just_pressed(KeyCode::Enter)) {
        return;
    }
    let Ok((tf, vel)) = q_ship.single() else {
        return;
    };
    let heading = (tf.rotation * Vec3::Y).truncate();
    let muzzle = tf.translation
        + (heading * (cfg.ship.collider_radius + cfg.bullet.collider_radius + 2.0)).extend(0.0);
    commands.spawn((
        Bullet,
        ScreenWrap,
        Lifespan::new(cfg.bullet.lifespan),
        Sprite::from_color(Color::WHITE, Vec2::splat(cfg.bullet.collider_radius * 2.0)),
        Transform::from_translation(muzzle).with_rotation(tf.rotation),
        GlobalTransform::default(),
        RigidBody::Dynamic,
        Collider::ball(cfg.bullet.collider_radius),
        Velocity::linear(vel.linvel + heading * cfg.bullet.speed),
        ActiveEvents::COLLISION_EVENTS,
        bullet_collision_groups(),
    ));
}

/// Schedule the follow-up to a lost ship: a replacement while lives remain,
/// the GAME OVER card otherwise.
fn handle_player_killed(
    cfg: Res<GameConfig>,
    mut ev_killed: EventReader<PlayerKilled>,
    mut timers: ResMut<RoundTimers>,
) {
    for ev in ev_killed.read() {
        if ev.lives_left > 0 {
            info!(
                target: "session",
                "respawn in {}s ({} lives left)", cfg.session.respawn_delay, ev.lives_left
            );
            timers.schedule(cfg.session.respawn_delay, RoundTimerTag::CreateNewPlayer);
        } else {
            info!(
                target: "session",
                "out of ships; game over in {}s", cfg.session.game_over_delay
            );
            timers.schedule(cfg.session.game_over_delay, RoundTimerTag::ShowGameOver);
        }
    }
}

fn respawn_ship_on_timer(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut ev_fired: EventReader<RoundTimerFired>,
) {
    for ev in ev_fired.read() {
        if ev.0 == RoundTimerTag::CreateNewPlayer {
            spawn_ship(&mut commands, &cfg);
        }
    }
}
