use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimePlugin;

use astro_rocks::app::instructions::InstructionsPlugin;
use astro_rocks::app::menu::{Difficulty, MenuPlugin, MenuSelection};
use astro_rocks::app::name_entry::{NameBuffer, NameEntryPlugin};
use astro_rocks::app::state::GameMode;

fn menu_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins.build().disable::<TimePlugin>());
    app.add_plugins(StatesPlugin);
    app.init_resource::<Time>();
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.add_event::<KeyboardInput>();
    app.init_state::<GameMode>();
    app.add_plugins((MenuPlugin, InstructionsPlugin, NameEntryPlugin));
    // First update runs Startup plus the initial transition into MainMenu.
    app.update();
    app
}

/// One full key press: systems see just_pressed for a single update, then the
/// input is wiped and the pending mode change (if any) is applied.
fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .reset_all();
    app.update();
}

fn type_key(app: &mut App, key_code: KeyCode, logical: Key) {
    app.world_mut().send_event(KeyboardInput {
        key_code,
        logical_key: logical,
        state: ButtonState::Pressed,
        text: None,
        repeat: false,
        window: Entity::PLACEHOLDER,
    });
    app.update();
}

fn mode(app: &App) -> GameMode {
    *app.world().resource::<State<GameMode>>().get()
}

fn ui_text_exists(app: &mut App, needle: &str) -> bool {
    let mut q = app.world_mut().query::<&Text>();
    q.iter(app.world()).any(|t| t.0.contains(needle))
}

#[test]
fn space_cycles_the_highlight() {
    let mut app = menu_app();
    assert_eq!(app.world().resource::<MenuSelection>().0, 0);

    for expected in [1, 2, 3, 0] {
        press(&mut app, KeyCode::Space);
        assert_eq!(app.world().resource::<MenuSelection>().0, expected);
    }
    assert_eq!(mode(&app), GameMode::MainMenu);
}

#[test]
fn enter_on_start_game_begins_a_round() {
    let mut app = menu_app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(mode(&app), GameMode::Playing);
    // The menu labels are gone once the round is live.
    assert!(!ui_text_exists(&mut app, "Start Screen"));
}

#[test]
fn hard_mode_toggles_without_leaving_the_menu() {
    let mut app = menu_app();
    press(&mut app, KeyCode::Space); // highlight "Hard Mode"
    press(&mut app, KeyCode::Enter);
    assert!(app.world().resource::<Difficulty>().hard);
    assert_eq!(mode(&app), GameMode::MainMenu);
    assert!(ui_text_exists(&mut app, "Hard Mode: on"));

    press(&mut app, KeyCode::Enter);
    assert!(!app.world().resource::<Difficulty>().hard);
    assert!(ui_text_exists(&mut app, "Hard Mode: off"));
}

#[test]
fn instructions_screen_round_trip() {
    let mut app = menu_app();
    press(&mut app, KeyCode::Space);
    press(&mut app, KeyCode::Space); // highlight "Instructions"
    press(&mut app, KeyCode::Enter);
    assert_eq!(mode(&app), GameMode::Instructions);
    assert!(ui_text_exists(&mut app, "How to Play"));

    // Space backs out; the highlight position survives the detour.
    press(&mut app, KeyCode::Space);
    assert_eq!(mode(&app), GameMode::MainMenu);
    assert!(!ui_text_exists(&mut app, "How to Play"));
    assert!(ui_text_exists(&mut app, "Start Screen"));
    assert_eq!(app.world().resource::<MenuSelection>().0, 2);
}

#[test]
fn name_entry_captures_and_returns() {
    let mut app = menu_app();
    for _ in 0..3 {
        press(&mut app, KeyCode::Space); // highlight "Enter Gamer Tag"
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(mode(&app), GameMode::EnteringName);

    // Backspace on an empty buffer is a no-op.
    type_key(&mut app, KeyCode::Backspace, Key::Backspace);
    assert_eq!(app.world().resource::<NameBuffer>().0, "");

    type_key(&mut app, KeyCode::KeyA, Key::Character("a".into()));
    type_key(&mut app, KeyCode::KeyN, Key::Character("n".into()));
    type_key(&mut app, KeyCode::KeyA, Key::Character("a".into()));
    assert_eq!(app.world().resource::<NameBuffer>().0, "ana");

    type_key(&mut app, KeyCode::Space, Key::Space);
    assert_eq!(app.world().resource::<NameBuffer>().0, "ana ");
    type_key(&mut app, KeyCode::Backspace, Key::Backspace);
    assert_eq!(app.world().resource::<NameBuffer>().0, "ana");

    // Confirm returns to the menu with the buffer intact.
    type_key(&mut app, KeyCode::Enter, Key::Enter);
    app.update();
    assert_eq!(mode(&app), GameMode::MainMenu);
    assert_eq!(app.world().resource::<NameBuffer>().0, "ana");
}
