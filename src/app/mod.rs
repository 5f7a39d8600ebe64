pub mod auto_close;
pub mod game;
pub mod game_over;
pub mod hud;
pub mod instructions;
pub mod menu;
pub mod name_entry;
pub mod scoreboard;
pub mod state;

pub use game::GamePlugin;
pub use state::GameMode;
