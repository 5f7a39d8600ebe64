use bevy::prelude::*;

use super::auto_close::AutoClosePlugin;
use super::game_over::GameOverPlugin;
use super::hud::HudPlugin;
use super::instructions::InstructionsPlugin;
use super::menu::MenuPlugin;
use super::name_entry::NameEntryPlugin;
use super::scoreboard::ScoreboardPlugin;
use super::state::GameMode;
use crate::core::system_order::{SessionFlowSet, WorldEventSet};
use crate::debug::DebugPlugin;
use crate::gameplay::combat::CombatPlugin;
use crate::gameplay::events::SessionEventsPlugin;
use crate::gameplay::explosion::ExplosionPlugin;
use crate::gameplay::physics::SpacePhysicsPlugin;
use crate::gameplay::score::ScoreTrackerPlugin;
use crate::gameplay::ship::ShipControlPlugin;
use crate::gameplay::timers::RoundTimersPlugin;
use crate::gameplay::wave::WavePlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::sprites::SpriteSheetPlugin;

/// Top-level plugin wiring the whole session together: mode state, the
/// two-stage update order, and every world and screen plugin.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameMode>().configure_sets(
            Update,
            (WorldEventSet, SessionFlowSet.after(WorldEventSet)),
        );

        // World: physics, spawning, combat, scoring.
        app.add_plugins((
            CameraPlugin,
            SpriteSheetPlugin,
            SpacePhysicsPlugin,
            SessionEventsPlugin,
            RoundTimersPlugin,
            WavePlugin,
            ShipControlPlugin,
            CombatPlugin,
            ScoreTrackerPlugin,
            ExplosionPlugin,
        ));

        // Screens: one plugin per mode, plus the HUD that spans several.
        app.add_plugins((
            MenuPlugin,
            InstructionsPlugin,
            NameEntryPlugin,
            HudPlugin,
            GameOverPlugin,
            ScoreboardPlugin,
            AutoClosePlugin,
            DebugPlugin,
        ));
    }
}
