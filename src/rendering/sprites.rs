use bevy::prelude::*;
use std::time::Duration;

use crate::core::config::GameConfig;

pub const SHIP_SHEET_PATH: &str = "sprites/spaceship.png";
pub const ASTEROID_SHEET_PATH: &str = "sprites/asteroid1.png";
pub const EXPLOSION_SHEET_PATH: &str = "sprites/explosion.png";

const EXPLOSION_DRAW_SCALE: f32 = 1.25;

/// Which sheet a freshly spawned entity should be dressed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    Ship,
    Asteroid,
    Explosion,
}

/// Dressing intent left by the entity factories. The dress system resolves
/// it against [`SpriteSheets`] once that registry exists, so factories never
/// touch assets and cannot fail at spawn time.
#[derive(Component, Debug, Clone, Copy)]
pub struct SheetRef(pub SheetKind);

/// Frame stepping state for a sprite-sheet animation. Ticks whether or not
/// the entity ever received a `Sprite`, so play-once effects still end on a
/// renderer-less run.
#[derive(Component, Debug)]
pub struct SpriteAnimation {
    timer: Timer,
    frames: usize,
    index: usize,
    looping: bool,
}

impl SpriteAnimation {
    pub fn looping(frames: usize, fps: f32) -> Self {
        Self::new(frames, fps, true)
    }

    pub fn play_once(frames: usize, fps: f32) -> Self {
        Self::new(frames, fps, false)
    }

    fn new(frames: usize, fps: f32, looping: bool) -> Self {
        Self {
            timer: Timer::from_seconds(1.0 / fps.max(1.0), TimerMode::Repeating),
            frames: frames.max(1),
            index: 0,
            looping,
        }
    }

    pub fn frame(&self) -> usize {
        self.index
    }

    /// Advance by `delta`; false once a play-once animation has shown its
    /// last frame and should leave the world.
    fn advance(&mut self, delta: Duration) -> bool {
        self.timer.tick(delta);
        for _ in 0..self.timer.times_finished_this_tick() {
            if self.index + 1 < self.frames {
                self.index += 1;
            } else if self.looping {
                self.index = 0;
            } else {
                return false;
            }
        }
        true
    }
}

/// Handles and geometry for one sheet.
pub struct SheetSpec {
    pub image: Handle<Image>,
    pub layout: Handle<TextureAtlasLayout>,
    pub frames: usize,
    pub fps: f32,
    pub looping: bool,
    /// Final on-screen size of one frame. Kept on the sprite (`custom_size`)
    /// rather than the transform so collider sizes stay untouched.
    pub draw_size: Vec2,
}

/// Registry of every sheet the factories can reference, built once at
/// startup and injected into the dress system as a plain resource. File
/// presence is verified before the app starts; a missing sheet aborts there,
/// never at spawn time.
#[derive(Resource)]
pub struct SpriteSheets {
    ship: SheetSpec,
    asteroid: SheetSpec,
    explosion: SheetSpec,
}

impl SpriteSheets {
    pub fn get(&self, kind: SheetKind) -> &SheetSpec {
        match kind {
            SheetKind::Ship => &self.ship,
            SheetKind::Asteroid => &self.asteroid,
            SheetKind::Explosion => &self.explosion,
        }
    }
}

pub struct SpriteSheetPlugin;

impl Plugin for SpriteSheetPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sprite_sheets)
            .add_systems(Update, (dress_new_entities, animate_sprites));
    }
}

fn load_sprite_sheets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    cfg: Res<GameConfig>,
) {
    // Sheet geometry: ship is a single 128x128 frame, the asteroid sheet is
    // a 128x8192 strip of 64 frames, the explosion a 64x1024 strip of 16.
    let single = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::splat(128),
        1,
        1,
        None,
        None,
    ));
    let asteroid_strip = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::splat(128),
        1,
        64,
        None,
        None,
    ));
    let explosion_strip = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::splat(64),
        1,
        16,
        None,
        None,
    ));

    commands.insert_resource(SpriteSheets {
        ship: SheetSpec {
            image: asset_server.load(SHIP_SHEET_PATH),
            layout: single,
            frames: 1,
            fps: 1.0,
            looping: true,
            draw_size: Vec2::splat(128.0 * cfg.ship.sprite_scale),
        },
        asteroid: SheetSpec {
            image: asset_server.load(ASTEROID_SHEET_PATH),
            layout: asteroid_strip,
            frames: 64,
            fps: 15.0,
            looping: true,
            draw_size: Vec2::splat(128.0 * cfg.asteroid.sprite_scale),
        },
        explosion: SheetSpec {
            image: asset_server.load(EXPLOSION_SHEET_PATH),
            layout: explosion_strip,
            frames: 16,
            fps: 24.0,
            looping: false,
            draw_size: Vec2::splat(64.0 * EXPLOSION_DRAW_SCALE),
        },
    });
}

/// Attach sprite + animation to anything a factory left a [`SheetRef`] on.
fn dress_new_entities(
    mut commands: Commands,
    sheets: Option<Res<SpriteSheets>>,
    q_bare: Query<(Entity, &SheetRef), Without<Sprite>>,
) {
    let Some(sheets) = sheets else {
        return;
    };
    for (entity, sheet_ref) in &q_bare {
        let spec = sheets.get(sheet_ref.0);
        let mut sprite = Sprite::from_atlas_image(
            spec.image.clone(),
            TextureAtlas {
                layout: spec.layout.clone(),
                index: 0,
            },
        );
        sprite.custom_size = Some(spec.draw_size);
        let mut ec = commands.entity(entity);
        ec.insert(sprite);
        if spec.frames > 1 {
            let anim = if spec.looping {
                SpriteAnimation::looping(spec.frames, spec.fps)
            } else {
                SpriteAnimation::play_once(spec.frames, spec.fps)
            };
            ec.insert(anim);
        }
    }
}

/// Step frames; a finished play-once animation removes its entity.
fn animate_sprites(
    time: Res<Time>,
    mut commands: Commands,
    mut q_anim: Query<(Entity, &mut SpriteAnimation, Option<&mut Sprite>)>,
) {
    for (entity, mut anim, sprite) in q_anim.iter_mut() {
        if !anim.advance(time.delta()) {
            commands.entity(entity).despawn();
            continue;
        }
        if let Some(mut sprite) = sprite {
            if let Some(atlas) = sprite.texture_atlas.as_mut() {
                atlas.index = anim.frame();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looping_animation_wraps_around() {
        let mut anim = SpriteAnimation::looping(4, 10.0);
        for expected in [1, 2, 3, 0, 1] {
            assert!(anim.advance(Duration::from_millis(100)));
            assert_eq!(anim.frame(), expected);
        }
    }

    #[test]
    fn play_once_signals_completion_after_last_frame() {
        let mut anim = SpriteAnimation::play_once(3, 10.0);
        assert!(anim.advance(Duration::from_millis(100)));
        assert_eq!(anim.frame(), 1);
        assert!(anim.advance(Duration::from_millis(100)));
        assert_eq!(anim.frame(), 2);
        // Next step would leave the sheet: time to go.
        assert!(!anim.advance(Duration::from_millis(100)));
    }

    #[test]
    fn single_frame_sheet_never_finishes() {
        let mut anim = SpriteAnimation::looping(1, 10.0);
        assert!(anim.advance(Duration::from_secs(5)));
        assert_eq!(anim.frame(), 0);
    }

    #[test]
    fn finished_play_once_despawns_entity() {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.add_systems(Update, animate_sprites);
        let e = app
            .world_mut()
            .spawn(SpriteAnimation::play_once(2, 10.0))
            .id();
        // First step shows the last frame, second one finishes the effect.
        for _ in 0..2 {
            app.world_mut()
                .resource_mut::<Time>()
                .advance_by(Duration::from_millis(100));
            app.update();
        }
        assert!(
            app.world().get_entity(e).is_err(),
            "expected finished explosion to despawn"
        );
    }
}
