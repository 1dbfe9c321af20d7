//! Rendering module
//!
//! The game only ever draws filled rectangles in view pixels (y down).
//! [`Surface`] is that contract; [`RectBatch`] records draws in memory and
//! [`RenderState`] turns them into WebGPU quads.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use vertex::{Vertex, colors};

use crate::sim::GameState;

/// Axis-aligned rectangle in view pixels, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// A drawing target that can be cleared and filled
pub trait Surface {
    /// Start a new frame
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]);
}

/// Records draws for the current frame
#[derive(Debug, Clone, Default)]
pub struct RectBatch {
    pub rects: Vec<(Rect, [f32; 4])>,
    /// Frames started so far
    pub frames: u64,
}

impl Surface for RectBatch {
    fn clear(&mut self) {
        self.rects.clear();
        self.frames += 1;
    }

    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]) {
        self.rects.push((rect, color));
    }
}

/// Clear, then draw platforms and the doodler on top
pub fn draw_scene<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.clear();
    for platform in state.field.platforms() {
        surface.fill_rect(
            Rect::new(platform.pos.x, platform.pos.y, platform.size.x, platform.size.y),
            colors::PLATFORM,
        );
    }
    let doodler = &state.doodler;
    let size = doodler.size();
    surface.fill_rect(
        Rect::new(doodler.pos.x, doodler.pos.y, size.x, size.y),
        colors::DOODLER,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_draw_scene_order() {
        let state = GameState::new(3, Tuning::default());
        let mut batch = RectBatch::default();
        draw_scene(&state, &mut batch);
        draw_scene(&state, &mut batch);

        assert_eq!(batch.frames, 2);
        assert_eq!(batch.rects.len(), 6);
        assert_eq!(batch.rects[0], (Rect::new(0.0, 590.0, 400.0, 10.0), colors::PLATFORM));
        assert_eq!(batch.rects[5], (Rect::new(180.0, 540.0, 40.0, 40.0), colors::DOODLER));
    }
}
