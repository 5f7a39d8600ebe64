use bevy::prelude::*;
use bevy::ui::{AlignItems, FlexDirection, JustifyContent, Node};

use super::state::GameMode;

const INSTRUCTION_LINES: [&str; 7] = [
    "How to Play",
    "Arrow Up thrusts the ship forward",
    "Arrow Left / Right rotate it",
    "Space or Enter fires",
    "Clear every asteroid to advance a level",
    "Each asteroid is worth 10 points",
    "Colliding with a rock costs a ship",
];

pub struct InstructionsPlugin;

impl Plugin for InstructionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameMode::Instructions), spawn_instructions_ui)
            .add_systems(
                Update,
                handle_instructions_input.run_if(in_state(GameMode::Instructions)),
            )
            .add_systems(OnExit(GameMode::Instructions), despawn_instructions_ui);
    }
}

#[derive(Component)]
struct InstructionsUiRoot;

fn spawn_instructions_ui(mut commands: Commands) {
    info!(target: "menu", "showing instructions");
    commands
        .spawn((
            InstructionsUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(14.0),
                ..default()
            },
        ))
        .with_children(|p| {
            for (i, line) in INSTRUCTION_LINES.iter().enumerate() {
                let (size, color) = if i == 0 {
                    (36.0, Color::srgb(1.0, 1.0, 0.0))
                } else {
                    (22.0, Color::WHITE)
                };
                p.spawn((
                    Text::new(*line),
                    TextFont {
                        font_size: size,
                        ..default()
                    },
                    TextColor(color),
                ));
            }
            p.spawn((
                Text::new("Space: back to menu"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}

fn handle_instructions_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_mode: ResMut<NextState<GameMode>>,
) {
    if keys.just_pressed(KeyCode::Space) {
        next_mode.set(GameMode::MainMenu);
    }
}

fn despawn_instructions_ui(
    mut commands: Commands,
    q_root: Query<Entity, With<InstructionsUiRoot>>,
) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
