use glam::DVec2;

use crate::api::types::{Color, LabelFont, ShapeId};
use crate::renderer::traits::{DrawSurface, Rect};

/// What a shape draws. Coordinates live on [`Shape::coords`].
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Oval { fill: Color },
    Rectangle { fill: Color },
    /// `coords.min` is the start point, `coords.max` the end point.
    Line { width: f64, fill: Color },
    /// Anchored at `coords.min` (`coords.max` is kept equal to it).
    Text { tag: String, text: String, font: LabelFont },
}

/// One retained item on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    pub coords: Rect,
    pub kind: ShapeKind,
}

/// Retained-mode display list implementing [`DrawSurface`].
///
/// Shapes are kept in creation order, which is also paint order: later
/// shapes cover earlier ones. Like a Tk canvas, nothing is ever dropped
/// implicitly; strokes accumulate until [`Canvas::clear`].
///
/// IDs are handed out in increasing order and shapes are only ever appended,
/// so the list stays sorted by ID and lookups are a binary search. A long
/// telemetry run still grows the list by three segments per sample; give the
/// telemetry panel its own canvas rather than sharing the main view's.
pub struct Canvas {
    width: u32,
    height: u32,
    shapes: Vec<Shape>,
    next_id: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            shapes: Vec::with_capacity(256),
            next_id: 1,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn push(&mut self, coords: Rect, kind: ShapeKind) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push(Shape { id, coords, kind });
        id
    }

    fn position(&self, id: ShapeId) -> Option<usize> {
        self.shapes.binary_search_by_key(&id.0, |s| s.id.0).ok()
    }

    /// Get a shape by ID.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.position(id).map(|i| &self.shapes[i])
    }

    /// Iterate over all shapes in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Find the text element with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Shape> {
        self.shapes
            .iter()
            .find(|s| matches!(&s.kind, ShapeKind::Text { tag: t, .. } if t == tag))
    }

    /// All line segments, as `(start, end)` pairs in paint order.
    pub fn lines(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.shapes.iter().filter_map(|s| match s.kind {
            ShapeKind::Line { .. } => Some((s.coords.min, s.coords.max)),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Drop every shape. Handles issued before stay invalid afterwards;
    /// IDs are never reused.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

impl DrawSurface for Canvas {
    fn create_oval(&mut self, bounds: Rect, fill: Color) -> ShapeId {
        self.push(bounds, ShapeKind::Oval { fill })
    }

    fn upsert_text(&mut self, tag: &str, pos: DVec2, text: &str, font: &LabelFont) -> ShapeId {
        let existing = self
            .shapes
            .iter_mut()
            .find(|s| matches!(&s.kind, ShapeKind::Text { tag: t, .. } if t == tag));
        if let Some(shape) = existing {
            shape.coords = Rect::new(pos, pos);
            if let ShapeKind::Text { text: t, font: f, .. } = &mut shape.kind {
                *t = text.to_string();
                *f = font.clone();
            }
            return shape.id;
        }

        self.push(
            Rect::new(pos, pos),
            ShapeKind::Text {
                tag: tag.to_string(),
                text: text.to_string(),
                font: font.clone(),
            },
        )
    }

    fn create_line(&mut self, from: DVec2, to: DVec2, width: f64, fill: Color) -> ShapeId {
        self.push(Rect::new(from, to), ShapeKind::Line { width, fill })
    }

    fn create_rectangle(&mut self, bounds: Rect, fill: Color) -> ShapeId {
        self.push(bounds, ShapeKind::Rectangle { fill })
    }

    fn set_coords(&mut self, shape: ShapeId, coords: Rect) -> bool {
        match self.position(shape) {
            Some(i) => {
                self.shapes[i].coords = coords;
                true
            }
            None => false,
        }
    }
}
