use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            title: "Astro Rocks".into(),
            auto_close: 0.0,
        }
    }
}

/// Session pacing: lives, wave sizing, and the three deferred-transition delays.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub start_lives: u32,
    /// Asteroids in the level-0 wave (also the field spawned behind the menu).
    pub base_wave_size: u32,
    /// Extra asteroids added per level beyond the base.
    pub wave_growth: u32,
    /// Seconds between clearing a wave and the next one spawning.
    pub next_wave_delay: f32,
    /// Seconds between losing a ship and the replacement appearing.
    pub respawn_delay: f32,
    /// Seconds between losing the last ship and the GAME OVER card.
    pub game_over_delay: f32,
    pub asteroid_score: i32,
}
impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_lives: 3,
            base_wave_size: 10,
            wave_growth: 2,
            next_wave_delay: 0.5,
            respawn_delay: 1.0,
            game_over_delay: 0.5,
            asteroid_score: 10,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ShipConfig {
    /// Forward acceleration while thrust is held (px/s^2).
    pub acceleration: f32,
    /// Turn speed while a rotate key is held (degrees/s).
    pub turn_rate: f32,
    pub collider_radius: f32,
    pub sprite_scale: f32,
}
impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            acceleration: 300.0,
            turn_rate: 90.0,
            collider_radius: 16.0,
            sprite_scale: 0.25,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BulletConfig {
    /// Muzzle speed added on top of the ship's own velocity (px/s).
    pub speed: f32,
    /// Seconds before an unspent bullet despawns silently.
    pub lifespan: f32,
    pub collider_radius: f32,
}
impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            speed: 480.0,
            lifespan: 1.1,
            collider_radius: 4.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AsteroidConfig {
    pub collider_radius: f32,
    pub sprite_scale: f32,
    /// Drift speed range for freshly spawned asteroids (px/s).
    pub speed_range: SpawnRange<f32>,
    /// Angular velocity range (degrees/s); sign picks the spin direction.
    pub spin_range: SpawnRange<f32>,
    /// Radius around the world center kept free of fresh spawns so a
    /// respawned ship is not created inside a rock.
    pub spawn_clear_radius: f32,
}
impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            collider_radius: 40.0,
            sprite_scale: 0.625,
            speed_range: SpawnRange {
                min: 30.0,
                max: 90.0,
            },
            spin_range: SpawnRange {
                min: -90.0,
                max: 90.0,
            },
            spawn_clear_radius: 120.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub session: SessionConfig,
    pub ship: ShipConfig,
    pub bullet: BulletConfig,
    pub asteroid: AsteroidConfig,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            session: Default::default(),
            ship: Default::default(),
            bullet: Default::default(),
            asteroid: Default::default(),
            rapier_debug: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Validate the configuration returning a list of human-readable warning strings.
    /// These represent suspicious / potentially unintended values but are not hard errors.
    /// Call at startup and report each warning before the app runs.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.session.start_lives == 0 {
            w.push("session.start_lives is 0; the first hit ends the round".into());
        }
        if self.session.base_wave_size == 0 {
            w.push("session.base_wave_size is 0; level 0 clears itself instantly".into());
        }
        if self.session.next_wave_delay < 0.0 {
            w.push("session.next_wave_delay negative -> treated as immediate".into());
        }
        if self.session.respawn_delay < 0.0 {
            w.push("session.respawn_delay negative -> treated as immediate".into());
        }
        if self.session.game_over_delay < 0.0 {
            w.push("session.game_over_delay negative -> treated as immediate".into());
        }
        if self.session.asteroid_score <= 0 {
            w.push(format!(
                "session.asteroid_score {} not positive; scores will never grow",
                self.session.asteroid_score
            ));
        }
        if self.ship.acceleration <= 0.0 {
            w.push("ship.acceleration must be > 0; thrust will do nothing".into());
        }
        if self.ship.turn_rate <= 0.0 {
            w.push("ship.turn_rate must be > 0; the ship cannot rotate".into());
        }
        if self.ship.collider_radius <= 0.0 {
            w.push("ship.collider_radius must be > 0".into());
        }
        if self.ship.sprite_scale <= 0.0 {
            w.push("ship.sprite_scale must be > 0".into());
        }
        if self.bullet.speed <= 0.0 {
            w.push("bullet.speed must be > 0; shots will hang at the muzzle".into());
        }
        if self.bullet.lifespan <= 0.0 {
            w.push("bullet.lifespan must be > 0; shots despawn on the frame they spawn".into());
        }
        if self.bullet.collider_radius <= 0.0 {
            w.push("bullet.collider_radius must be > 0".into());
        }
        if self.asteroid.collider_radius <= 0.0 {
            w.push("asteroid.collider_radius must be > 0".into());
        }
        if self.asteroid.sprite_scale <= 0.0 {
            w.push("asteroid.sprite_scale must be > 0".into());
        }
        fn check_range_f32(w: &mut Vec<String>, label: &str, r: &SpawnRange<f32>) {
            if r.min > r.max {
                w.push(format!(
                    "{label} min ({}) greater than max ({})",
                    r.min, r.max
                ));
            }
            if (r.max - r.min).abs() < f32::EPSILON {
                w.push(format!("{label} min == max ({}) -> zero variation", r.min));
            }
        }
        check_range_f32(&mut w, "asteroid.speed_range", &self.asteroid.speed_range);
        if self.asteroid.speed_range.min < 0.0 {
            w.push("asteroid.speed_range.min negative; speeds are magnitudes".into());
        }
        check_range_f32(&mut w, "asteroid.spin_range", &self.asteroid.spin_range);
        if self.asteroid.spawn_clear_radius < 0.0 {
            w.push("asteroid.spawn_clear_radius negative -> treated as 0".into());
        }
        if self.asteroid.spawn_clear_radius * 2.0 >= self.window.width.min(self.window.height) {
            w.push(format!(
                "asteroid.spawn_clear_radius {} leaves almost no room to spawn rocks",
                self.asteroid.spawn_clear_radius
            ));
        }
        w
    }
}
