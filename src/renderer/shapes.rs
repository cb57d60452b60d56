//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use super::{Surface, TextStyle};
use crate::sim::Rect;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(rect: Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
    ]
}

/// Generate vertices for a line segment of the given thickness, centered on
/// the segment like a canvas stroke
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> [Vertex; 6] {
    let dir = (to - from).normalize_or_zero();
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let b1 = from - perp;
    let a2 = to + perp;
    let b2 = to - perp;

    [
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Text queued for an overlay that can rasterize fonts
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub style: TextStyle,
}

/// A frame's worth of triangles plus text labels, in draw order
#[derive(Debug, Clone, Default)]
pub struct ShapeBatch {
    /// Frame size in canvas pixels
    pub size: Vec2,
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Surface for ShapeBatch {
    fn clear(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        self.vertices.clear();
        self.labels.clear();
    }

    fn fill_rect(&mut self, r: Rect, color: [f32; 4]) {
        self.vertices.extend_from_slice(&rect(r, color));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
        self.vertices.extend_from_slice(&line(from, to, width, color));
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.labels.push(TextLabel {
            text: text.to_owned(),
            pos,
            style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::TextAlign;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Rect::new(10.0, 20.0, 30.0, 50.0), WHITE);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 70.0);
    }

    #[test]
    fn test_vertical_line_thickness() {
        let verts = line(Vec2::new(100.0, 0.0), Vec2::new(100.0, 600.0), 5.0, WHITE);
        for v in &verts {
            assert!((v.position[0] - 100.0).abs() <= 2.5 + 1e-4);
        }
        let min_x = verts.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        let max_x = verts.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        assert!((max_x - min_x - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_batch_clear_starts_new_frame() {
        let mut batch = ShapeBatch::new();
        batch.clear(400.0, 600.0);
        batch.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), WHITE);
        batch.stroke_line(Vec2::ZERO, Vec2::new(0.0, 10.0), 1.0, WHITE);
        batch.fill_text(
            "hi",
            Vec2::new(1.0, 2.0),
            TextStyle {
                size_px: 20.0,
                align: TextAlign::Left,
                color: WHITE,
            },
        );
        assert_eq!(batch.triangle_count(), 4);
        assert_eq!(batch.labels.len(), 1);

        batch.clear(400.0, 600.0);
        assert!(batch.vertices.is_empty());
        assert!(batch.labels.is_empty());
        assert_eq!(batch.size, Vec2::new(400.0, 600.0));
    }
}
