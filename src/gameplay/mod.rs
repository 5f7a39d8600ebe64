pub mod asteroid;
pub mod combat;
pub mod events;
pub mod explosion;
pub mod physics;
pub mod score;
pub mod ship;
pub mod timers;
pub mod wave;

pub use events::{DestroyedKind, ObjectDestroyed, PlayerKilled, ScoreChanged};
pub use score::{PlayerScore, ShipLives};
pub use timers::{RoundTimerFired, RoundTimerTag, RoundTimers};
pub use wave::WaveState;
