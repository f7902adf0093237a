use glam::DVec2;

use crate::api::types::{Color, ShapeId};

/// What a body is, for logging and for embedders that style by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyKind {
    Star,
    #[default]
    Planet,
}

/// Read-only view of a simulated body, plus the marker back-reference.
///
/// The renderer never touches physical state; the only thing it writes is
/// the marker handle through [`TrackedBody::attach_marker`].
pub trait TrackedBody {
    /// Current position in physical units.
    fn position(&self) -> DVec2;

    /// Position at the start of the run.
    fn initial_position(&self) -> DVec2;

    /// Marker radius in screen pixels (not scaled with the view).
    fn radius(&self) -> f64;

    fn color(&self) -> Color;

    /// Speed magnitude at the start of the run.
    fn initial_speed(&self) -> f64;

    /// Current speed magnitude.
    fn speed(&self) -> f64;

    fn kind(&self) -> BodyKind {
        BodyKind::Planet
    }

    /// Current distance to `other`.
    fn distance_to(&self, other: &Self) -> f64
    where
        Self: Sized,
    {
        self.position().distance(other.position())
    }

    /// Handle of the on-screen marker, once created.
    fn marker(&self) -> Option<ShapeId>;

    fn attach_marker(&mut self, marker: ShapeId);
}

/// Plain body record for embedders without a body type of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub kind: BodyKind,
    pub position: DVec2,
    pub velocity: DVec2,
    pub initial_position: DVec2,
    pub initial_velocity: DVec2,
    /// Marker radius in pixels.
    pub radius: f64,
    pub color: Color,
    marker: Option<ShapeId>,
}

impl CelestialBody {
    /// A body whose initial state is its current state.
    pub fn new(kind: BodyKind, position: DVec2, velocity: DVec2) -> Self {
        Self {
            kind,
            position,
            velocity,
            initial_position: position,
            initial_velocity: velocity,
            radius: 5.0,
            color: Color::WHITE,
            marker: None,
        }
    }

    pub fn star(position: DVec2, velocity: DVec2) -> Self {
        Self::new(BodyKind::Star, position, velocity)
    }

    pub fn planet(position: DVec2, velocity: DVec2) -> Self {
        Self::new(BodyKind::Planet, position, velocity)
    }

    // -- Builder pattern --

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Advance the body to a new physical state. Initial state is kept.
    pub fn set_state(&mut self, position: DVec2, velocity: DVec2) {
        self.position = position;
        self.velocity = velocity;
    }
}

impl TrackedBody for CelestialBody {
    fn position(&self) -> DVec2 {
        self.position
    }

    fn initial_position(&self) -> DVec2 {
        self.initial_position
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn color(&self) -> Color {
        self.color
    }

    fn initial_speed(&self) -> f64 {
        self.initial_velocity.length()
    }

    fn speed(&self) -> f64 {
        self.velocity.length()
    }

    fn kind(&self) -> BodyKind {
        self.kind
    }

    fn marker(&self) -> Option<ShapeId> {
        self.marker
    }

    fn attach_marker(&mut self, marker: ShapeId) {
        self.marker = Some(marker);
    }
}
