use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimePlugin;

use astro_rocks::app::game_over::GameOverPlugin;
use astro_rocks::app::name_entry::{NameBuffer, NameEntryPlugin};
use astro_rocks::app::scoreboard::ScoreboardPlugin;
use astro_rocks::app::state::GameMode;
use astro_rocks::gameplay::events::SessionEventsPlugin;
use astro_rocks::gameplay::score::ScoreTrackerPlugin;
use astro_rocks::gameplay::{PlayerScore, ScoreChanged};
use astro_rocks::{GameConfig, GamerLedger};

fn records_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins.build().disable::<TimePlugin>());
    app.add_plugins(StatesPlugin);
    app.init_resource::<Time>();
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.insert_resource(GameConfig::default());
    app.init_state::<GameMode>();
    app.add_plugins((
        SessionEventsPlugin,
        ScoreTrackerPlugin,
        NameEntryPlugin,
        GameOverPlugin,
        ScoreboardPlugin,
    ));
    app.update();
    app
}

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

fn set_mode(app: &mut App, mode: GameMode) {
    app.world_mut()
        .resource_mut::<NextState<GameMode>>()
        .set(mode);
    app.update();
}

fn mode(app: &App) -> GameMode {
    *app.world().resource::<State<GameMode>>().get()
}

/// Play out the end of a round: name and score in place, confirm on the
/// game-over card.
fn finish_round(app: &mut App, name: &str, score: i32) {
    app.world_mut().resource_mut::<NameBuffer>().0 = name.into();
    app.world_mut().resource_mut::<PlayerScore>().0 = score;
    set_mode(app, GameMode::GameOver);
    press(app, KeyCode::Enter);
}

#[test]
fn rounds_are_recorded_in_play_order() {
    let mut app = records_app();

    finish_round(&mut app, "ana", 120);
    assert_eq!(mode(&app), GameMode::Scoreboard);
    press(&mut app, KeyCode::Enter);
    assert_eq!(mode(&app), GameMode::MainMenu);

    finish_round(&mut app, "bo", 40);

    let ledger = app.world().resource::<GamerLedger>();
    assert_eq!(ledger.len(), 2);
    // Chronological, not sorted: the lower score stays second.
    assert_eq!(ledger[0].name, "ana");
    assert_eq!(ledger[0].score, 120);
    assert_eq!(ledger[1].name, "bo");
    assert_eq!(ledger[1].score, 40);
}

#[test]
fn recording_resets_the_score_and_keeps_the_name() {
    let mut app = records_app();
    finish_round(&mut app, "ana", 70);

    assert_eq!(app.world().resource::<PlayerScore>().0, 0);
    assert_eq!(app.world().resource::<NameBuffer>().0, "ana");

    // The reset is announced so the score label follows.
    let events = app.world().resource::<Events<ScoreChanged>>();
    let last = events.get_cursor().read(events).last().copied();
    assert_eq!(last.map(|e| e.0), Some(0));
}

#[test]
fn scoreboard_lists_every_recorded_round() {
    let mut app = records_app();
    finish_round(&mut app, "ana", 120);
    press(&mut app, KeyCode::Enter);
    finish_round(&mut app, "", 7);
    assert_eq!(mode(&app), GameMode::Scoreboard);

    let mut q = app.world_mut().query::<&Text>();
    let lines: Vec<String> = q.iter(app.world()).map(|t| t.0.clone()).collect();
    assert!(lines.iter().any(|l| l == "ana  120"));
    assert!(lines.iter().any(|l| l == "(anonymous)  7"));
}

#[test]
fn leaving_the_scoreboard_tears_down_the_table() {
    let mut app = records_app();
    finish_round(&mut app, "ana", 10);
    press(&mut app, KeyCode::Enter);
    assert_eq!(mode(&app), GameMode::MainMenu);

    let mut q = app.world_mut().query::<&Text>();
    assert_eq!(q.iter(app.world()).count(), 0);
}
