use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimePlugin;
use bevy_rapier2d::prelude::Velocity;

use astro_rocks::app::state::GameMode;
use astro_rocks::core::components::{Bullet, Lifespan, Ship};
use astro_rocks::core::system_order::{SessionFlowSet, WorldEventSet};
use astro_rocks::gameplay::events::SessionEventsPlugin;
use astro_rocks::gameplay::ship::ShipControlPlugin;
use astro_rocks::gameplay::timers::RoundTimersPlugin;
use astro_rocks::gameplay::{PlayerKilled, RoundTimerTag, RoundTimers};
use astro_rocks::GameConfig;

fn ship_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins.build().disable::<TimePlugin>());
    app.add_plugins(StatesPlugin);
    app.init_resource::<Time>();
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.insert_resource(GameConfig::default());
    app.init_state::<GameMode>();
    app.configure_sets(
        Update,
        (WorldEventSet, SessionFlowSet.after(WorldEventSet)),
    );
    app.add_plugins((SessionEventsPlugin, RoundTimersPlugin, ShipControlPlugin));
    app.world_mut()
        .resource_mut::<NextState<GameMode>>()
        .set(GameMode::Playing);
    app.update();
    app
}

fn hold(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

fn release_all(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .reset_all();
}

fn tick(app: &mut App, ms: u64) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(ms));
    app.update();
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::ZERO);
}

fn ship_velocity(app: &mut App) -> Velocity {
    let mut q = app.world_mut().query_filtered::<&Velocity, With<Ship>>();
    *q.single(app.world()).unwrap()
}

fn ship_count(app: &mut App) -> usize {
    let mut q = app.world_mut().query_filtered::<(), With<Ship>>();
    q.iter(app.world()).count()
}

#[test]
fn round_start_deploys_exactly_one_ship() {
    let mut app = ship_app();
    assert_eq!(ship_count(&mut app), 1);

    // Bounce through the menu and back in; still exactly one hull.
    app.world_mut()
        .resource_mut::<NextState<GameMode>>()
        .set(GameMode::MainMenu);
    app.update();
    app.world_mut()
        .resource_mut::<NextState<GameMode>>()
        .set(GameMode::Playing);
    app.update();
    assert_eq!(ship_count(&mut app), 1);
}

#[test]
fn thrust_accelerates_along_the_heading() {
    let mut app = ship_app();
    hold(&mut app, KeyCode::ArrowUp);
    tick(&mut app, 100);

    let vel = ship_velocity(&mut app);
    // 300 px/s^2 for 0.1 s along +Y.
    assert!((vel.linvel.y - 30.0).abs() < 1e-3, "linvel {:?}", vel.linvel);
    assert!(vel.linvel.x.abs() < 1e-3);

    // Coasting: releasing thrust keeps the velocity.
    release_all(&mut app);
    tick(&mut app, 100);
    let vel = ship_velocity(&mut app);
    assert!((vel.linvel.y - 30.0).abs() < 1e-3);
}

#[test]
fn turn_keys_hold_a_fixed_spin_rate() {
    let mut app = ship_app();
    hold(&mut app, KeyCode::ArrowLeft);
    tick(&mut app, 16);
    assert!((ship_velocity(&mut app).angvel - FRAC_PI_2).abs() < 1e-4);

    release_all(&mut app);
    app.update();
    assert_eq!(ship_velocity(&mut app).angvel, 0.0);

    hold(&mut app, KeyCode::ArrowRight);
    tick(&mut app, 16);
    assert!((ship_velocity(&mut app).angvel + FRAC_PI_2).abs() < 1e-4);
}

#[test]
fn firing_spawns_a_bullet_ahead_of_the_ship() {
    let mut app = ship_app();
    hold(&mut app, KeyCode::Space);
    app.update();
    release_all(&mut app);
    app.update();

    let mut q = app
        .world_mut()
        .query_filtered::<(&Transform, &Velocity, &Lifespan), With<Bullet>>();
    let bullets: Vec<_> = q.iter(app.world()).collect();
    assert_eq!(bullets.len(), 1);
    let (tf, vel, _lifespan) = bullets[0];
    // Muzzle offset: ship radius + bullet radius + clearance, along +Y.
    assert!((tf.translation.y - 22.0).abs() < 1e-3);
    assert!((vel.linvel.y - 480.0).abs() < 1e-3);
}

#[test]
fn confirm_also_fires_while_playing() {
    let mut app = ship_app();
    hold(&mut app, KeyCode::Enter);
    app.update();
    release_all(&mut app);
    app.update();

    let mut q = app.world_mut().query_filtered::<(), With<Bullet>>();
    assert_eq!(q.iter(app.world()).count(), 1);
}

#[test]
fn replacement_ship_arrives_only_after_the_delay() {
    let mut app = ship_app();
    let ship = {
        let mut q = app.world_mut().query_filtered::<Entity, With<Ship>>();
        q.single(app.world()).unwrap()
    };
    app.world_mut().despawn(ship);
    app.world_mut().send_event(PlayerKilled { lives_left: 2 });
    app.update();

    assert!(app
        .world()
        .resource::<RoundTimers>()
        .is_scheduled(RoundTimerTag::CreateNewPlayer));
    tick(&mut app, 500);
    assert_eq!(ship_count(&mut app), 0);
    tick(&mut app, 500);
    assert_eq!(ship_count(&mut app), 1);
}
