pub mod canvas;
pub mod scale;
pub mod traits;

// Re-export key types for convenient access
pub use canvas::{Canvas, Shape, ShapeKind};
pub use scale::ScaleModel;
pub use traits::{DrawSurface, Rect};
