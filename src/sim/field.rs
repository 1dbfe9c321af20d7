//! Procedural platform field
//!
//! Platforms are generated strictly upward, one gap above the highest live
//! platform, and dropped once they scroll past the bottom of the view.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Doodler, Platform, PlatformId};
use crate::tuning::Tuning;

/// Ordered platform collection with its own RNG
#[derive(Debug, Clone)]
pub struct PlatformField {
    platforms: Vec<Platform>,
    rng: Pcg32,
    next_id: u32,
    view: Vec2,
    platform_size: Vec2,
    gap: f32,
    min_count: usize,
}

impl PlatformField {
    /// Field in its initial layout
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        let mut field = Self {
            platforms: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 0,
            view: Vec2::new(tuning.view_width, tuning.view_height),
            platform_size: Vec2::new(tuning.platform_width, tuning.platform_height),
            gap: tuning.platform_gap,
            min_count: tuning.min_platforms,
        };
        field.reset();
        field
    }

    /// Ground across the full width, then generated platforms at fixed gaps
    /// above the bottom of the view until the minimum count is reached.
    pub fn reset(&mut self) {
        self.platforms.clear();
        self.next_id = 0;

        let id = self.allocate_id();
        self.platforms.push(Platform {
            id,
            pos: Vec2::new(0.0, self.view.y - self.platform_size.y),
            size: Vec2::new(self.view.x, self.platform_size.y),
        });

        for i in 1..self.min_count {
            self.spawn_above(self.view.y - i as f32 * self.gap);
        }
    }

    fn allocate_id(&mut self) -> PlatformId {
        let id = PlatformId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a platform at `y` with a uniformly random x
    pub fn spawn_above(&mut self, y: f32) -> PlatformId {
        let span = self.view.x - self.platform_size.x;
        let x = if span > 0.0 {
            self.rng.random_range(0.0..span)
        } else {
            0.0
        };
        let id = self.allocate_id();
        self.platforms.push(Platform {
            id,
            pos: Vec2::new(x, y),
            size: self.platform_size,
        });
        log::debug!("Spawned platform {} at ({:.1}, {:.1})", id.0, x, y);
        id
    }

    /// Smallest y among live platforms
    pub fn highest_y(&self) -> Option<f32> {
        self.platforms.iter().map(|p| p.pos.y).reduce(f32::min)
    }

    /// Top up to the minimum count, each new platform one gap above the
    /// current highest. Returns how many were spawned.
    pub fn replenish(&mut self) -> usize {
        let mut spawned = 0;
        while self.platforms.len() < self.min_count {
            let anchor = self.highest_y().unwrap_or(self.view.y);
            self.spawn_above(anchor - self.gap);
            spawned += 1;
        }
        spawned
    }

    /// Translate every platform downward
    pub fn scroll_down(&mut self, dy: f32) {
        for platform in &mut self.platforms {
            platform.pos.y += dy;
        }
    }

    /// Keep the doodler at or below the vertical midpoint, pushing the rest
    /// of its climb onto the field. Returns the extra scroll applied.
    pub fn follow(&mut self, doodler: &mut Doodler) -> f32 {
        let midpoint = self.view.y / 2.0;
        if doodler.pos.y >= midpoint {
            return 0.0;
        }
        let dy = midpoint - doodler.pos.y;
        doodler.pos.y = midpoint;
        self.scroll_down(dy);
        dy
    }

    /// Drop platforms at or below the bottom of the view. Returns how many.
    pub fn cull(&mut self) -> usize {
        let bottom = self.view.y;
        let before = self.platforms.len();
        self.platforms.retain(|p| p.pos.y < bottom);
        before - self.platforms.len()
    }

    #[inline]
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn get(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    #[inline]
    pub fn min_count(&self) -> usize {
        self.min_count
    }

    /// Append a platform at an exact position (scripted layouts)
    pub fn insert(&mut self, pos: Vec2, size: Vec2) -> PlatformId {
        let id = self.allocate_id();
        self.platforms.push(Platform { id, pos, size });
        id
    }

    /// Remove every platform
    pub fn clear(&mut self) {
        self.platforms.clear();
    }
}
