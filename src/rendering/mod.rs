pub mod camera;
pub mod sprites;

pub use sprites::{SheetKind, SheetRef, SpriteAnimation, SpriteSheets};
