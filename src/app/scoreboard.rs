use bevy::prelude::*;
use bevy::ui::{AlignItems, FlexDirection, JustifyContent, Node};

use super::state::GameMode;
use crate::core::records::GamerLedger;

pub struct ScoreboardPlugin;

impl Plugin for ScoreboardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameMode::Scoreboard), spawn_scoreboard_ui)
            .add_systems(
                Update,
                handle_scoreboard_input.run_if(in_state(GameMode::Scoreboard)),
            )
            .add_systems(OnExit(GameMode::Scoreboard), despawn_scoreboard_ui);
    }
}

#[derive(Component)]
struct ScoreboardUiRoot;

/// Lists every round of this process in the order it was played. No sorting,
/// no persistence: quit and the table is gone.
fn spawn_scoreboard_ui(mut commands: Commands, ledger: Res<GamerLedger>) {
    info!(target: "session", "scoreboard: {} rounds on record", ledger.len());
    commands
        .spawn((
            ScoreboardUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ))
        .with_children(|p| {
            p.spawn((
                Text::new("Scoreboard"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 0.0)),
            ));
            for record in ledger.iter() {
                let name = if record.name.is_empty() {
                    "(anonymous)"
                } else {
                    record.name.as_str()
                };
                p.spawn((
                    Text::new(format!("{}  {}", name, record.score)),
                    TextFont {
                        font_size: 24.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            }
            p.spawn((
                Text::new("Enter: back to menu"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}

fn handle_scoreboard_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_mode: ResMut<NextState<GameMode>>,
) {
    if keys.just_pressed(KeyCode::Enter) {
        next_mode.set(GameMode::MainMenu);
    }
}

fn despawn_scoreboard_ui(mut commands: Commands, q_root: Query<Entity, With<ScoreboardUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
