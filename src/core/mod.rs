pub mod components;
pub mod config;
pub mod records;
pub mod system_order;

pub use config::GameConfig;
