use bevy::app::AppExit;
use bevy::prelude::*;

use crate::core::GameConfig;

/// Only inserted when the config asks for a timed exit, so the tick system
/// can treat its absence as "run forever".
#[derive(Resource, Deref, DerefMut)]
pub struct ExitCountdown(pub Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_exit_countdown)
            .add_systems(Update, tick_exit_countdown);
    }
}

fn setup_exit_countdown(mut commands: Commands, cfg: Res<GameConfig>) {
    if cfg.window.auto_close > 0.0 {
        info!(target: "session", "auto close after {}s", cfg.window.auto_close);
        commands.insert_resource(ExitCountdown(Timer::from_seconds(
            cfg.window.auto_close,
            TimerMode::Once,
        )));
    }
}

fn tick_exit_countdown(
    countdown: Option<ResMut<ExitCountdown>>,
    time: Res<Time>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut countdown) = countdown else {
        return;
    };
    if countdown.tick(time.delta()).just_finished() {
        info!(target: "session", "auto close elapsed, exiting");
        ev_exit.write(AppExit::Success);
    }
}
