//! Game state and core simulation types
//!
//! Everything a run needs lives in [`GameState`], owned by the game loop.

use std::collections::BTreeSet;

use glam::Vec2;

use super::field::PlatformField;
use super::input::InputState;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first jump press
    NotStarted,
    /// Field is scrolling
    Running,
    /// Doodler fell off the bottom; waiting for a restart
    Frozen,
}

/// Something the host may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// First jump press of a run
    Started,
    /// Doodler came to rest on a platform this tick
    Landed { platform: PlatformId, credited: bool },
    /// Doodler left the view; score already offset for display
    GameOver { final_score: i64 },
}

/// Stable platform identity, assigned at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlatformId(pub u32);

/// A platform (top-left anchored, y grows downward)
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub id: PlatformId,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }
}

/// The player entity
#[derive(Debug, Clone, PartialEq)]
pub struct Doodler {
    pub pos: Vec2,
    pub vel: Vec2,
    size: Vec2,
    jump_power: f32,
}

impl Doodler {
    /// Fresh doodler at the spawn point, at rest
    pub fn new(tuning: &Tuning) -> Self {
        let (x, y) = tuning.doodler_spawn();
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            size: Vec2::new(tuning.doodler_width, tuning.doodler_height),
            jump_power: tuning.jump_power,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn jump_power(&self) -> f32 {
        self.jump_power
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Move back to the spawn point; size and jump power are kept
    pub fn respawn(&mut self, tuning: &Tuning) {
        let (x, y) = tuning.doodler_spawn();
        self.pos = Vec2::new(x, y);
        self.vel = Vec2::ZERO;
    }

    /// Horizontal control, wrap, then gravity
    pub fn step(&mut self, input: &InputState, tuning: &Tuning) {
        self.vel.x = input.horizontal() * tuning.move_speed;
        self.pos.x += self.vel.x;
        self.wrap(tuning.view_width);

        self.vel.y += tuning.gravity;
        self.pos.y += self.vel.y;
    }

    /// Leaving one side re-enters from the other
    pub fn wrap(&mut self, view_width: f32) {
        if self.pos.x < -self.size.x {
            self.pos.x = view_width;
        } else if self.pos.x > view_width {
            self.pos.x = -self.size.x;
        }
    }

    pub fn jump(&mut self) {
        self.vel.y = -self.jump_power;
    }

    #[inline]
    pub fn is_falling(&self) -> bool {
        self.vel.y > 0.0
    }
}

/// Raw score plus the platforms that already paid out
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTracker {
    score: u32,
    credited: BTreeSet<PlatformId>,
    points_per_platform: u32,
    display_offset: i64,
}

impl ScoreTracker {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            score: 0,
            credited: BTreeSet::new(),
            points_per_platform: tuning.points_per_platform,
            display_offset: tuning.score_display_offset,
        }
    }

    /// Award points for a landing. Only the first landing on a platform counts.
    pub fn credit(&mut self, platform: PlatformId) -> bool {
        if !self.credited.insert(platform) {
            return false;
        }
        self.score += self.points_per_platform;
        true
    }

    pub fn is_credited(&self, platform: PlatformId) -> bool {
        self.credited.contains(&platform)
    }

    #[inline]
    pub fn raw(&self) -> u32 {
        self.score
    }

    /// Score as shown to the player (raw minus the starting offset)
    #[inline]
    pub fn displayed(&self) -> i64 {
        self.score as i64 - self.display_offset
    }

    pub fn credited_count(&self) -> usize {
        self.credited.len()
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.credited.clear();
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the platform field was created with
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub doodler: Doodler,
    pub field: PlatformField,
    pub score: ScoreTracker,
    /// Ticks simulated since the last reset (frozen ticks excluded)
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::NotStarted,
            doodler: Doodler::new(&tuning),
            field: PlatformField::new(&tuning, seed),
            score: ScoreTracker::new(&tuning),
            time_ticks: 0,
            tuning,
        }
    }

    /// Back to the initial layout, keeping the RNG stream going
    pub fn reset(&mut self) {
        self.phase = GamePhase::NotStarted;
        self.doodler.respawn(&self.tuning);
        self.field.reset();
        self.score.reset();
        self.time_ticks = 0;
    }

    #[inline]
    pub fn displayed_score(&self) -> i64 {
        self.score.displayed()
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.phase == GamePhase::Frozen
    }
}
