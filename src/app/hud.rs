use bevy::prelude::*;
use bevy::ui::{AlignItems, JustifyContent, Node, PositionType};

use super::state::GameMode;
use crate::core::GameConfig;
use crate::core::system_order::SessionFlowSet;
use crate::gameplay::{PlayerKilled, ScoreChanged};

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameMode::Playing), spawn_hud)
            .add_systems(
                Update,
                (update_score_label, update_lives_label).in_set(SessionFlowSet),
            )
            .add_systems(OnEnter(GameMode::GameOver), reveal_game_over_banner)
            // The HUD outlives the round: it stays up behind the game-over
            // banner and the scoreboard, and comes down with them here.
            .add_systems(OnEnter(GameMode::MainMenu), despawn_hud);
    }
}

#[derive(Component)]
struct HudRoot;
#[derive(Component)]
struct ScoreText;
#[derive(Component)]
struct LivesText;
#[derive(Component)]
pub struct GameOverBanner;

fn spawn_hud(mut commands: Commands, cfg: Res<GameConfig>) {
    commands
        .spawn((
            HudRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
        ))
        .with_children(|p| {
            p.spawn((
                ScoreText,
                Text::new("Score: 0"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(12.0),
                    top: Val::Px(8.0),
                    ..default()
                },
            ));
            p.spawn((
                LivesText,
                Text::new(format!("Lives: {}", cfg.session.start_lives)),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(12.0),
                    bottom: Val::Px(8.0),
                    ..default()
                },
            ));
            // Pre-spawned hidden, revealed when the session ends.
            p.spawn((
                GameOverBanner,
                Visibility::Hidden,
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
            ))
            .with_children(|b| {
                b.spawn((
                    Text::new("GAME OVER"),
                    TextFont {
                        font_size: 64.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });
        });
}

fn update_score_label(
    mut ev_score: EventReader<ScoreChanged>,
    mut q_label: Query<&mut Text, With<ScoreText>>,
) {
    let Some(ev) = ev_score.read().last() else {
        return;
    };
    for mut text in q_label.iter_mut() {
        text.0 = format!("Score: {}", ev.0);
    }
}

fn update_lives_label(
    mut ev_killed: EventReader<PlayerKilled>,
    mut q_label: Query<&mut Text, With<LivesText>>,
) {
    let Some(ev) = ev_killed.read().last() else {
        return;
    };
    for mut text in q_label.iter_mut() {
        text.0 = format!("Lives: {}", ev.lives_left);
    }
}

fn reveal_game_over_banner(mut q_banner: Query<&mut Visibility, With<GameOverBanner>>) {
    for mut vis in q_banner.iter_mut() {
        *vis = Visibility::Visible;
    }
}

fn despawn_hud(mut commands: Commands, q_root: Query<Entity, With<HudRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
