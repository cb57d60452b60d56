//! Rendering module
//!
//! `scene::render` projects a `GameState` onto any `Surface`. The browser
//! build draws shapes with WebGPU (`ShapeBatch` + `RenderState`) and places
//! text as DOM labels over the canvas.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::sim::Rect;

pub use pipeline::RenderState;
pub use scene::render;
pub use shapes::{ShapeBatch, TextLabel};
pub use vertex::{Vertex, colors};

/// Horizontal anchoring of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Font size, anchoring and fill for a text draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_px: f32,
    pub align: TextAlign,
    pub color: [f32; 4],
}

/// A 2D raster target in canvas pixels (origin top-left, y down)
///
/// The renderer only issues draws; it never reads back from the surface.
pub trait Surface {
    /// Start a new frame of the given size
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]);
    /// `pos` is the text baseline point
    fn fill_text(&mut self, text: &str, pos: Vec2, style: TextStyle);
}
