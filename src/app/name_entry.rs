use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;
use bevy::ui::{AlignItems, FlexDirection, JustifyContent, Node};

use super::state::GameMode;

/// The gamer tag being typed. Lives for the whole process so a returning
/// player keeps their tag between rounds.
#[derive(Resource, Default, Debug, Deref, DerefMut)]
pub struct NameBuffer(pub String);

pub struct NameEntryPlugin;

impl Plugin for NameEntryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NameBuffer>()
            .add_systems(OnEnter(GameMode::EnteringName), spawn_name_entry_ui)
            .add_systems(
                Update,
                (capture_name_keys, echo_name_buffer)
                    .chain()
                    .run_if(in_state(GameMode::EnteringName)),
            )
            .add_systems(OnExit(GameMode::EnteringName), despawn_name_entry_ui);
    }
}

#[derive(Component)]
struct NameEntryUiRoot;
#[derive(Component)]
struct NameEchoText;

fn spawn_name_entry_ui(mut commands: Commands, buffer: Res<NameBuffer>) {
    info!(target: "menu", "entering gamer tag");
    commands
        .spawn((
            NameEntryUiRoot,
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
                Text::new("Enter Your Gamer Tag"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            p.spawn((
                Text::new("Type a name and press Enter"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
            p.spawn((
                NameEchoText,
                Text::new(buffer.0.clone()),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 0.0)),
            ));
        });
}

/// Builds the tag from logical key events. Printable characters append,
/// backspace removes (a no-op on an empty buffer), confirm returns to the
/// menu with the buffer intact.
fn capture_name_keys(
    mut ev_keys: EventReader<KeyboardInput>,
    mut buffer: ResMut<NameBuffer>,
    mut next_mode: ResMut<NextState<GameMode>>,
) {
    for ev in ev_keys.read() {
        if !ev.state.is_pressed() {
            continue;
        }
        match &ev.logical_key {
            Key::Character(typed) => {
                for ch in typed.chars().filter(|c| !c.is_control()) {
                    buffer.0.push(ch);
                }
            }
            Key::Space => buffer.0.push(' '),
            Key::Backspace => {
                buffer.0.pop();
            }
            Key::Enter => {
                info!(target: "menu", "gamer tag set: {:?}", buffer.0);
                next_mode.set(GameMode::MainMenu);
            }
            _ => {}
        }
    }
}

fn echo_name_buffer(
    buffer: Res<NameBuffer>,
    mut q_echo: Query<&mut Text, With<NameEchoText>>,
) {
    if !buffer.is_changed() {
        return;
    }
    for mut text in q_echo.iter_mut() {
        text.0 = buffer.0.clone();
    }
}

fn despawn_name_entry_ui(mut commands: Commands, q_root: Query<Entity, With<NameEntryUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
