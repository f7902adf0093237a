use crate::api::config::ViewConfig;
use crate::api::error::VisError;
use crate::api::types::ShapeId;
use crate::components::body::TrackedBody;
use crate::renderer::scale::ScaleModel;
use crate::renderer::traits::DrawSurface;
use crate::systems::label;
use crate::systems::markers;
use crate::systems::telemetry::{TelemetryAxes, TelemetryPlotter};

/// All mutable visualisation state, owned by the render loop and passed
/// explicitly to every drawing call.
///
/// The main view and the telemetry panel are separate surfaces; each method
/// takes the one it draws on.
///
/// ```
/// use glam::DVec2;
/// use solar_vis::{Canvas, CelestialBody, ViewConfig, VisContext};
///
/// let mut ctx = VisContext::new(ViewConfig::default()).unwrap();
/// let mut space = Canvas::new(600, 600);
/// let mut graphs = Canvas::new(400, 600);
///
/// let mut bodies = vec![
///     CelestialBody::star(DVec2::ZERO, DVec2::ZERO),
///     CelestialBody::planet(DVec2::new(1.5e11, 0.0), DVec2::new(0.0, 3.0e4)),
/// ];
/// ctx.compute_scale(1.5e11).unwrap();
/// for body in bodies.iter_mut() {
///     ctx.create_marker(&mut space, body).unwrap();
/// }
/// ctx.set_system_label(&mut space, "Sun-Earth");
///
/// ctx.plot_speed_vs_time(&mut graphs, &bodies, 1, 0.0, 3600.0).unwrap();
/// ctx.plot_distance_vs_time(&mut graphs, &bodies, 1, 0.0, 3600.0).unwrap();
/// ctx.plot_speed_vs_distance(&mut graphs, &bodies, 1).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct VisContext {
    config: ViewConfig,
    scale: ScaleModel,
    plotter: TelemetryPlotter,
    axes: TelemetryAxes,
}

impl VisContext {
    /// Validate `config` and build a context with no scale and unseeded axes.
    pub fn new(config: ViewConfig) -> Result<Self, VisError> {
        config.validate()?;
        Ok(Self {
            scale: ScaleModel::from_config(&config),
            plotter: TelemetryPlotter::from_config(&config),
            axes: TelemetryAxes::default(),
            config,
        })
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn scale(&self) -> &ScaleModel {
        &self.scale
    }

    pub fn plotter(&self) -> &TelemetryPlotter {
        &self.plotter
    }

    pub fn axes(&self) -> &TelemetryAxes {
        &self.axes
    }

    // -- Main view --

    /// See [`ScaleModel::compute_scale`].
    pub fn compute_scale(&mut self, characteristic_length: f64) -> Result<f64, VisError> {
        self.scale.compute_scale(characteristic_length)
    }

    pub fn create_marker<S, B>(&self, surface: &mut S, body: &mut B) -> Result<ShapeId, VisError>
    where
        S: DrawSurface + ?Sized,
        B: TrackedBody,
    {
        markers::create_marker(surface, &self.scale, body)
    }

    pub fn update_marker_position<S, B>(&self, surface: &mut S, body: &B) -> Result<(), VisError>
    where
        S: DrawSurface + ?Sized,
        B: TrackedBody,
    {
        markers::update_marker_position(surface, &self.scale, body)
    }

    pub fn update_all_markers<S, B>(&self, surface: &mut S, bodies: &[B]) -> Result<(), VisError>
    where
        S: DrawSurface + ?Sized,
        B: TrackedBody,
    {
        markers::update_all_markers(surface, &self.scale, bodies)
    }

    pub fn set_system_label<S: DrawSurface + ?Sized>(&self, surface: &mut S, name: &str) -> ShapeId {
        label::set_system_label(surface, &self.config, name)
    }

    // -- Telemetry panel --

    pub fn plot_speed_vs_time<S, B>(
        &mut self,
        surface: &mut S,
        bodies: &[B],
        index: usize,
        elapsed: f64,
        timestep: f64,
    ) -> Result<ShapeId, VisError>
    where
        S: DrawSurface + ?Sized,
        B: TrackedBody,
    {
        self.plotter
            .plot_speed_vs_time(surface, &mut self.axes, bodies, index, elapsed, timestep)
    }

    pub fn plot_distance_vs_time<S, B>(
        &mut self,
        surface: &mut S,
        bodies: &[B],
        index: usize,
        elapsed: f64,
        timestep: f64,
    ) -> Result<ShapeId, VisError>
    where
        S: DrawSurface + ?Sized,
        B: TrackedBody,
    {
        self.plotter
            .plot_distance_vs_time(surface, &mut self.axes, bodies, index, elapsed, timestep)
    }

    /// Speed-vs-distance sample using the maxima seeded by the two time plots.
    /// Fails with `UnseededAxis` until both have run at least once.
    pub fn plot_speed_vs_distance<S, B>(&self, surface: &mut S, bodies: &[B], index: usize) -> Result<ShapeId, VisError>
    where
        S: DrawSurface + ?Sized,
        B: TrackedBody,
    {
        let maxima = self.axes.seeded()?;
        self.plotter.plot_speed_vs_distance(surface, bodies, index, maxima)
    }

    /// Plot all three strips for one simulation sample.
    pub fn plot_sample<S, B>(
        &mut self,
        surface: &mut S,
        bodies: &[B],
        index: usize,
        elapsed: f64,
        timestep: f64,
    ) -> Result<(), VisError>
    where
        S: DrawSurface + ?Sized,
        B: TrackedBody,
    {
        self.plot_speed_vs_time(surface, bodies, index, elapsed, timestep)?;
        self.plot_distance_vs_time(surface, bodies, index, elapsed, timestep)?;
        self.plot_speed_vs_distance(surface, bodies, index)?;
        Ok(())
    }

    /// Paint over the telemetry panel. Axis maxima are kept.
    pub fn clear_telemetry<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> ShapeId {
        self.plotter.clear_all(surface)
    }
}
