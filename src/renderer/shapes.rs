//! Shape generation for 2D primitives

use super::Rect;
use super::vertex::Vertex;

/// Two triangles covering `rect`
pub fn quad(rect: Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.x + rect.w, rect.y + rect.h);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Map a point in view pixels (origin top-left, y down) to NDC
pub fn view_to_ndc(x: f32, y: f32, view_width: f32, view_height: f32) -> (f32, f32) {
    (x / view_width * 2.0 - 1.0, 1.0 - y / view_height * 2.0)
}
