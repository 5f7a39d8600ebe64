pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod rendering;

// Curated re-exports
pub use app::game::GamePlugin;
pub use app::state::GameMode;
pub use core::config::{GameConfig, WindowConfig};
pub use core::records::{GamerLedger, GamerRecord};
