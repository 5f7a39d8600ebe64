use bevy::prelude::*;
use bevy::ui::{AlignItems, FlexDirection, JustifyContent, Node};

use super::state::GameMode;

pub const MENU_ENTRY_COUNT: usize = 4;

const MENU_HIGHLIGHT: Color = Color::srgb(1.0, 1.0, 0.0);

/// Index of the highlighted menu entry. Persists across menu visits, like a
/// cursor the player left behind.
#[derive(Resource, Default, Debug, Deref, DerefMut)]
pub struct MenuSelection(pub usize);

/// The "Hard Mode" toggle. Deliberately cosmetic: flipping it changes the
/// label and nothing else.
#[derive(Resource, Default, Debug)]
pub struct Difficulty {
    pub hard: bool,
}

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MenuSelection>()
            .init_resource::<Difficulty>()
            .add_systems(OnEnter(GameMode::MainMenu), spawn_menu_ui)
            .add_systems(
                Update,
                (handle_menu_input, highlight_menu_entries)
                    .run_if(in_state(GameMode::MainMenu)),
            )
            .add_systems(OnExit(GameMode::MainMenu), despawn_menu_ui);
    }
}

fn entry_label(index: usize, hard: bool) -> String {
    match index {
        0 => "Start Game".into(),
        1 if hard => "Hard Mode: on".into(),
        1 => "Hard Mode: off".into(),
        2 => "Instructions".into(),
        3 => "Enter Gamer Tag".into(),
        _ => String::new(),
    }
}

// === UI IMPLEMENTATION ===

#[derive(Component)]
struct MenuUiRoot;
#[derive(Component)]
struct MenuEntry(usize);

fn spawn_menu_ui(
    mut commands: Commands,
    selection: Res<MenuSelection>,
    difficulty: Res<Difficulty>,
) {
    info!(target: "menu", "=== MAIN MENU ===");
    // Transparent root: the drifting asteroid field stays visible behind it.
    commands
        .spawn((
            MenuUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(18.0),
                ..default()
            },
        ))
        .with_children(|p| {
            p.spawn((
                Text::new("Start Screen"),
                TextFont {
                    font_size: 42.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            for i in 0..MENU_ENTRY_COUNT {
                p.spawn((
                    MenuEntry(i),
                    Text::new(entry_label(i, difficulty.hard)),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(if i == selection.0 {
                        MENU_HIGHLIGHT
                    } else {
                        Color::WHITE
                    }),
                ));
            }
            p.spawn((
                Text::new("Space: next   Enter: select"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}

/// Space cycles the highlight, confirm acts on the highlighted entry.
/// Anything else falls through unhandled.
fn handle_menu_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<MenuSelection>,
    mut difficulty: ResMut<Difficulty>,
    mut next_mode: ResMut<NextState<GameMode>>,
) {
    if keys.just_pressed(KeyCode::Space) {
        selection.0 = (selection.0 + 1) % MENU_ENTRY_COUNT;
        info!(target: "menu", "selection -> {}", selection.0);
    }
    if keys.just_pressed(KeyCode::Enter) {
        match selection.0 {
            0 => {
                info!(target: "menu", "starting round");
                next_mode.set(GameMode::Playing);
            }
            1 => {
                difficulty.hard = !difficulty.hard;
                info!(
                    target: "menu",
                    "hard mode {}",
                    if difficulty.hard { "on" } else { "off" }
                );
            }
            2 => next_mode.set(GameMode::Instructions),
            3 => next_mode.set(GameMode::EnteringName),
            _ => {}
        }
    }
}

/// Exactly one entry is ever highlighted; the rest render white.
fn highlight_menu_entries(
    selection: Res<MenuSelection>,
    difficulty: Res<Difficulty>,
    mut q_entries: Query<(&MenuEntry, &mut Text, &mut TextColor)>,
) {
    if !selection.is_changed() && !difficulty.is_changed() {
        return;
    }
    for (entry, mut text, mut color) in q_entries.iter_mut() {
        let label = entry_label(entry.0, difficulty.hard);
        if text.0 != label {
            text.0 = label;
        }
        color.0 = if entry.0 == selection.0 {
            MENU_HIGHLIGHT
        } else {
            Color::WHITE
        };
    }
}

fn despawn_menu_ui(mut commands: Commands, q_root: Query<Entity, With<MenuUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
