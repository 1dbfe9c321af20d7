//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (collection order, ids assigned at spawn)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{Landing, find_landing, is_landing, resolve_landing};
pub use field::PlatformField;
pub use input::{Control, InputState};
pub use state::{
    Doodler, GameEvent, GamePhase, GameState, Platform, PlatformId, ScoreTracker,
};
pub use tick::tick;
