//! Doodle Climb - an endless vertical platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, platforms, landing, score)
//! - `game_loop`: Per-frame orchestration, restart and shutdown
//! - `renderer`: Rectangle surfaces (in-memory and WebGPU)
//! - `ui`: Score and game-over overlay
//! - `tuning`: Data-driven game balance

pub mod game_loop;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game_loop::GameLoop;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Visible area in pixels (y grows downward)
    pub const VIEW_WIDTH: f32 = 400.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Downward acceleration, pixels/tick²
    pub const GRAVITY: f32 = 0.5;
    /// Horizontal speed while a direction is held, pixels/tick
    pub const MOVE_SPEED: f32 = 7.0;

    /// Doodler defaults
    pub const DOODLER_WIDTH: f32 = 40.0;
    pub const DOODLER_HEIGHT: f32 = 40.0;
    pub const JUMP_POWER: f32 = 11.0;
    /// Spawn offset from the bottom of the view
    pub const DOODLER_SPAWN_OFFSET: f32 = 60.0;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 60.0;
    pub const PLATFORM_HEIGHT: f32 = 10.0;
    /// Vertical distance between consecutively spawned platforms
    pub const PLATFORM_GAP: f32 = 100.0;
    /// The field is topped up to this many platforms every tick
    pub const MIN_PLATFORMS: usize = 5;

    /// Constant descent of the field while running, pixels/tick
    pub const SCROLL_RATE: f32 = 1.0;

    /// Points for the first landing on a platform
    pub const POINTS_PER_PLATFORM: u32 = 5;
    /// Subtracted from the raw score before display
    pub const SCORE_DISPLAY_OFFSET: i64 = 5;
}
