//! Drawing surface contract.
//!
//! The crate never owns a window. Whatever the embedder draws on (a GUI
//! canvas, an immediate-mode painter, the retained [`Canvas`](super::canvas::Canvas)
//! shipped here) only has to provide these five primitives. All coordinates
//! are screen pixels, y growing downward.
//!
//! # Example Implementation
//!
//! ```ignore
//! struct EguiSurface<'a> {
//!     painter: &'a egui::Painter,
//!     // ...
//! }
//!
//! impl DrawSurface for EguiSurface<'_> {
//!     fn create_oval(&mut self, bounds: Rect, fill: Color) -> ShapeId {
//!         // Store a circle shape, hand back its key...
//!     }
//!     // ...
//! }
//! ```

use glam::DVec2;

use crate::api::types::{Color, LabelFont, ShapeId};

/// Axis-aligned box in screen pixels, `min` top-left and `max` bottom-right.
///
/// For line shapes the two corners are the endpoints and are not reordered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    pub const fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Bounding box of a circle.
    pub fn from_center_radius(center: DVec2, radius: f64) -> Self {
        let half = DVec2::splat(radius);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// True when the box has no overlap at all with `[0, width] x [0, height]`.
    /// Touching an edge still counts as visible.
    pub fn is_outside(&self, width: f64, height: f64) -> bool {
        self.max.x < 0.0 || self.min.x > width || self.max.y < 0.0 || self.min.y > height
    }
}

/// The primitives the visualisation needs from a drawing surface.
pub trait DrawSurface {
    /// Create a filled circle/ellipse inscribed in `bounds`.
    fn create_oval(&mut self, bounds: Rect, fill: Color) -> ShapeId;

    /// Create the text element tagged `tag`, or replace position, content and
    /// font of the existing one. Never yields two elements with the same tag.
    fn upsert_text(&mut self, tag: &str, pos: DVec2, text: &str, font: &LabelFont) -> ShapeId;

    /// Create a straight line segment.
    fn create_line(&mut self, from: DVec2, to: DVec2, width: f64, fill: Color) -> ShapeId;

    /// Create a filled rectangle.
    fn create_rectangle(&mut self, bounds: Rect, fill: Color) -> ShapeId;

    /// Move an existing shape to new coordinates.
    /// Returns `false` if the surface does not know `shape`.
    fn set_coords(&mut self, shape: ShapeId, coords: Rect) -> bool;
}
