//! Streaming telemetry strips for one tracked body.
//!
//! The telemetry panel is `W` wide and `H` tall (the main view height) and is
//! split into three strips of `H/3`:
//!
//! | strip | rows          | x axis                 | y axis   |
//! |-------|---------------|------------------------|----------|
//! | 0     | `[0, H/3]`    | `elapsed / timestep`   | speed    |
//! | 1     | `[H/3, 2H/3]` | `elapsed / timestep`   | distance |
//! | 2     | `[2H/3, H]`   | distance               | speed    |
//!
//! Each plot call appends a single one-pixel diagonal stroke at the current
//! sample. No samples are retained: the curve exists only as accumulated
//! strokes on the surface, and [`TelemetryPlotter::clear_all`] paints over them.
//!
//! Axis maxima are fixed at three times the tracked body's initial speed and
//! initial distance to the reference body (`bodies[0]`). Samples beyond the
//! maximum are drawn outside their strip rather than rescaling the axis.

use glam::DVec2;

use crate::api::config::ViewConfig;
use crate::api::error::VisError;
use crate::api::types::{Color, ShapeId};
use crate::components::body::TrackedBody;
use crate::renderer::traits::{DrawSurface, Rect};

/// Inset of the axis lines from the strip edges, in pixels.
pub const AXIS_INSET: f64 = 5.0;

/// Headroom factor applied to initial speed/distance to get an axis maximum.
pub const AXIS_HEADROOM: f64 = 3.0;

/// One of the three stacked telemetry strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripRegion {
    SpeedTime,
    DistanceTime,
    SpeedDistance,
}

impl StripRegion {
    pub fn all() -> [StripRegion; 3] {
        [Self::SpeedTime, Self::DistanceTime, Self::SpeedDistance]
    }

    /// Position from the top, 0..=2.
    pub fn index(self) -> u32 {
        match self {
            Self::SpeedTime => 0,
            Self::DistanceTime => 1,
            Self::SpeedDistance => 2,
        }
    }

    pub fn top(self, panel_height: f64) -> f64 {
        panel_height * self.index() as f64 / 3.0
    }

    pub fn bottom(self, panel_height: f64) -> f64 {
        panel_height * (self.index() + 1) as f64 / 3.0
    }
}

/// Axis maxima used to normalise the speed-vs-distance strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMaxima {
    pub v_max: f64,
    pub r_max: f64,
}

/// Running axis maxima, seeded by the time-based plots.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TelemetryAxes {
    /// Set by every speed-vs-time sample.
    pub v_max: Option<f64>,
    /// Set by every distance-vs-time sample.
    pub r_max: Option<f64>,
}

impl TelemetryAxes {
    /// Both maxima, or `UnseededAxis` if either time plot has not run yet.
    pub fn seeded(&self) -> Result<AxisMaxima, VisError> {
        match (self.v_max, self.r_max) {
            (Some(v_max), Some(r_max)) => Ok(AxisMaxima { v_max, r_max }),
            _ => Err(VisError::UnseededAxis),
        }
    }
}

fn checked_axis(axis: &'static str, value: f64) -> Result<f64, VisError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(VisError::DegenerateAxis { axis, value })
    }
}

/// The tracked body and the reference body `bodies[0]`.
fn tracked<B>(bodies: &[B], index: usize) -> Result<(&B, &B), VisError> {
    match (bodies.get(index), bodies.first()) {
        (Some(body), Some(reference)) => Ok((body, reference)),
        _ => Err(VisError::BodyIndexOutOfRange {
            index,
            len: bodies.len(),
        }),
    }
}

fn time_cursor(elapsed: f64, timestep: f64) -> Result<f64, VisError> {
    if !(timestep > 0.0 && timestep.is_finite()) {
        return Err(VisError::InvalidTimestep(timestep));
    }
    Ok(AXIS_INSET + elapsed / timestep)
}

/// Draws the three telemetry strips onto a panel surface.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryPlotter {
    /// Panel width `W`.
    width: f64,
    /// Panel height `H`.
    height: f64,
    color: Color,
    background: Color,
    axis_width: f64,
    stroke_width: f64,
}

impl TelemetryPlotter {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            color: Color::WHITE,
            background: Color::BLACK,
            axis_width: 2.0,
            stroke_width: 1.0,
        }
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            width: config.graphics_width as f64,
            height: config.telemetry_height(),
            color: config.plot_color,
            background: config.plot_background,
            axis_width: config.axis_width,
            stroke_width: config.stroke_width,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Usable curve height of one strip.
    fn span(&self) -> f64 {
        self.height / 3.0 - AXIS_INSET
    }

    /// Draw the horizontal and vertical axis of `region`.
    pub fn draw_axes<S: DrawSurface + ?Sized>(&self, surface: &mut S, region: StripRegion) -> [ShapeId; 2] {
        let top = region.top(self.height);
        let bottom = region.bottom(self.height);
        let baseline = bottom - AXIS_INSET;

        let horizontal = surface.create_line(
            DVec2::new(0.0, baseline),
            DVec2::new(self.width, baseline),
            self.axis_width,
            self.color,
        );
        let vertical = surface.create_line(
            DVec2::new(AXIS_INSET, top),
            DVec2::new(AXIS_INSET, bottom),
            self.axis_width,
            self.color,
        );
        [horizontal, vertical]
    }

    fn stroke<S: DrawSurface + ?Sized>(&self, surface: &mut S, at: DVec2) -> ShapeId {
        surface.create_line(at, at + DVec2::ONE, self.stroke_width, self.color)
    }

    /// Append one speed-vs-time sample for `bodies[index]`.
    ///
    /// Reseeds `axes.v_max` from the body's initial speed.
    pub fn plot_speed_vs_time<S, B>(
        &self,
        surface: &mut S,
        axes: &mut TelemetryAxes,
        bodies: &[B],
        index: usize,
        elapsed: f64,
        timestep: f64,
    ) -> Result<ShapeId, VisError>
    where
        S: DrawSurface + ?Sized,
        B: TrackedBody,
    {
        let (body, _) = tracked(bodies, index)?;
        let x = time_cursor(elapsed, timestep)?;
        let v_max = checked_axis("speed", AXIS_HEADROOM * body.initial_speed())?;
        axes.v_max = Some(v_max);

        self.draw_axes(surface, StripRegion::SpeedTime);
        let y = self.span() * (1.0 - body.speed() / v_max);
        Ok(self.stroke(surface, DVec2::new(x, y)))
    }

    /// Append one distance-vs-time sample for `bodies[index]`, measured
    /// from the reference body `bodies[0]`.
    ///
    /// Reseeds `axes.r_max` from the initial separation of the two bodies.
    pub fn plot_distance_vs_time<S, B>(
        &self,
        surface: &mut S,
        axes: &mut TelemetryAxes,
        bodies: &[B],
        index: usize,
        elapsed: f64,
        timestep: f64,
    ) -> Result<ShapeId, VisError>
    where
        S: DrawSurface + ?Sized,
        B: TrackedBody,
    {
        let (body, reference) = tracked(bodies, index)?;
        let x = time_cursor(elapsed, timestep)?;
        let initial_separation = reference.initial_position().distance(body.initial_position());
        let r_max = checked_axis("distance", AXIS_HEADROOM * initial_separation)?;
        axes.r_max = Some(r_max);

        self.draw_axes(surface, StripRegion::DistanceTime);
        let y = self.span() * (2.0 - body.distance_to(reference) / r_max) + AXIS_INSET;
        Ok(self.stroke(surface, DVec2::new(x, y)))
    }

    /// Append one speed-vs-distance sample for `bodies[index]` using the
    /// maxima seeded by the time plots.
    pub fn plot_speed_vs_distance<S, B>(
        &self,
        surface: &mut S,
        bodies: &[B],
        index: usize,
        maxima: AxisMaxima,
    ) -> Result<ShapeId, VisError>
    where
        S: DrawSurface + ?Sized,
        B: TrackedBody,
    {
        let (body, reference) = tracked(bodies, index)?;
        let v_max = checked_axis("speed", maxima.v_max)?;
        let r_max = checked_axis("distance", maxima.r_max)?;

        self.draw_axes(surface, StripRegion::SpeedDistance);
        let x = AXIS_INSET + (self.width - AXIS_INSET) * body.distance_to(reference) / r_max;
        let y = self.span() * (3.0 - body.speed() / v_max) + 2.0 * AXIS_INSET;
        Ok(self.stroke(surface, DVec2::new(x, y)))
    }

    /// Paint the whole panel with the background, hiding every stroke.
    /// Axis maxima are left as they are.
    pub fn clear_all<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> ShapeId {
        surface.create_rectangle(
            Rect::new(DVec2::ZERO, DVec2::new(self.width, self.height)),
            self.background,
        )
    }
}
