//! Headless 2D visualisation for n-body simulations.
//!
//! Physical coordinates go in, drawing calls on a [`DrawSurface`] come out:
//! scaled body markers on the main view, a system name label, and three
//! streaming telemetry strips (speed/time, distance/time, speed/distance)
//! for one tracked body. Screen coordinates never leave the drawing calls.

pub mod api;
pub mod components;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::ViewConfig;
pub use api::context::VisContext;
pub use api::error::VisError;
pub use api::types::{Color, LabelFont, ShapeId};
pub use components::body::{BodyKind, CelestialBody, TrackedBody};
pub use renderer::canvas::{Canvas, Shape, ShapeKind};
pub use renderer::scale::ScaleModel;
pub use renderer::traits::{DrawSurface, Rect};
pub use systems::label::set_system_label;
pub use systems::markers::{create_marker, update_all_markers, update_marker_position};
pub use systems::telemetry::{AxisMaxima, StripRegion, TelemetryAxes, TelemetryPlotter};
