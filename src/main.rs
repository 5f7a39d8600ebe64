use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use bevy::prelude::*;
use clap::Parser;

use astro_rocks::rendering::sprites::{
    ASTEROID_SHEET_PATH, EXPLOSION_SHEET_PATH, SHIP_SHEET_PATH,
};
use astro_rocks::{GameConfig, GamePlugin};

#[derive(Parser, Debug)]
#[command(version, about = "Single-screen asteroids arcade")]
struct Cli {
    /// Path to the RON config file.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: PathBuf,
    /// Exit automatically after this many seconds (overrides the config).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Pre-app reporting goes to stderr; the tracing subscriber only exists
    // once bevy_log is up.
    let (mut cfg, load_err) = GameConfig::load_or_default(&cli.config);
    match load_err {
        Some(err) => eprintln!("config: {err}; using defaults"),
        None => eprintln!("config: loaded {}", cli.config.display()),
    }
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    for warning in cfg.validate() {
        eprintln!("config warning: {warning}");
    }
    ensure_sprite_sheets_present()?;

    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}

/// Missing art is fatal here, before the window opens, never at spawn time.
fn ensure_sprite_sheets_present() -> Result<()> {
    for rel in [SHIP_SHEET_PATH, ASTEROID_SHEET_PATH, EXPLOSION_SHEET_PATH] {
        let path = Path::new("assets").join(rel);
        if !path.is_file() {
            bail!("missing sprite sheet: {}", path.display());
        }
    }
    Ok(())
}
