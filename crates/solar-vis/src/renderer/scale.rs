use glam::{DVec2, IVec2};

use crate::api::config::ViewConfig;
use crate::api::error::VisError;

/// Share of the smaller view dimension the characteristic length spans.
pub const FILL_RATIO: f64 = 0.4;

/// Physical-to-screen transform for the main view.
///
/// Origin at the view center, physical Y-up mapped to screen Y-down.
/// Results are not clamped: bodies far from the origin map to pixels far
/// outside the view, and it is up to the caller to decide what that means.
/// Only values past the `i32` range saturate.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleModel {
    view_width: u32,
    view_height: u32,
    /// Pixels per physical distance unit. `None` until computed.
    factor: Option<f64>,
}

impl ScaleModel {
    pub fn new(view_width: u32, view_height: u32) -> Self {
        Self {
            view_width,
            view_height,
            factor: None,
        }
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(config.space_width, config.space_height)
    }

    /// Derive the scale so that `characteristic_length` (typically the
    /// outermost orbit radius) spans 40% of the smaller view dimension.
    ///
    /// Call once before the first render. Recomputing later is allowed but
    /// every existing marker jumps on its next update.
    pub fn compute_scale(&mut self, characteristic_length: f64) -> Result<f64, VisError> {
        if !(characteristic_length > 0.0 && characteristic_length.is_finite()) {
            return Err(VisError::InvalidCharacteristicLength(characteristic_length));
        }
        let min_side = self.view_width.min(self.view_height) as f64;
        let factor = FILL_RATIO * min_side / characteristic_length;

        if let Some(previous) = self.factor {
            log::warn!(
                "Scale factor recomputed mid-run: {} -> {} (markers will jump)",
                previous,
                factor
            );
        }
        log::info!("Scale factor: {}", factor);
        self.factor = Some(factor);
        Ok(factor)
    }

    /// Pixels per physical unit, if computed.
    pub fn scale_factor(&self) -> Option<f64> {
        self.factor
    }

    pub fn is_initialized(&self) -> bool {
        self.factor.is_some()
    }

    pub fn view_width(&self) -> u32 {
        self.view_width
    }

    pub fn view_height(&self) -> u32 {
        self.view_height
    }

    fn factor(&self) -> Result<f64, VisError> {
        self.factor.ok_or(VisError::UninitializedScale)
    }

    /// Screen x for a physical x.
    pub fn to_screen_x(&self, x: f64) -> Result<i32, VisError> {
        let factor = self.factor()?;
        Ok(((x * factor).round() + (self.view_width / 2) as f64) as i32)
    }

    /// Screen y for a physical y. The axis is flipped so physical +y renders upward.
    pub fn to_screen_y(&self, y: f64) -> Result<i32, VisError> {
        let factor = self.factor()?;
        Ok((-(y * factor).round() + (self.view_height / 2) as f64) as i32)
    }

    /// Both axes at once.
    pub fn to_screen(&self, pos: DVec2) -> Result<IVec2, VisError> {
        Ok(IVec2::new(self.to_screen_x(pos.x)?, self.to_screen_y(pos.y)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn scaled(length: f64) -> ScaleModel {
        let mut scale = ScaleModel::new(600, 600);
        scale.compute_scale(length).unwrap();
        scale
    }

    #[test]
    fn classic_scenario() {
        let scale = scaled(150.0);
        assert_abs_diff_eq!(scale.scale_factor().unwrap(), 1.6, epsilon = 1e-12);
        assert_eq!(scale.to_screen_x(100.0).unwrap(), 460);
        assert_eq!(scale.to_screen_y(100.0).unwrap(), 140);
    }

    #[test]
    fn origin_maps_to_view_center() {
        let mut scale = ScaleModel::new(801, 433);
        scale.compute_scale(3.0e11).unwrap();
        assert_eq!(scale.to_screen_x(0.0).unwrap(), 400);
        assert_eq!(scale.to_screen_y(0.0).unwrap(), 216);
        assert_eq!(scale.to_screen(DVec2::ZERO).unwrap(), IVec2::new(400, 216));
    }

    #[test]
    fn characteristic_length_stays_in_central_band() {
        let mut scale = ScaleModel::new(800, 600);
        let length = 7.5e10;
        scale.compute_scale(length).unwrap();

        let center = 400;
        for x in [length, -length] {
            let sx = scale.to_screen_x(x).unwrap();
            assert!((sx - center).abs() as f64 <= 0.4 * 800.0, "x={} out of band", sx);
        }
        // The smaller side drives the scale: L spans exactly 40% of 600
        assert_eq!(scale.to_screen_x(length).unwrap(), center + 240);
    }

    #[test]
    fn y_axis_points_up() {
        let scale = scaled(10.0);
        let up = scale.to_screen_y(5.0).unwrap();
        let down = scale.to_screen_y(-5.0).unwrap();
        assert!(up < 300 && down > 300);
    }

    #[test]
    fn far_bodies_are_not_clamped() {
        let scale = scaled(1.0);
        // 1 unit = 240px, so 10 units lands far right of a 600px view
        assert_eq!(scale.to_screen_x(10.0).unwrap(), 2700);
        assert_eq!(scale.to_screen_y(10.0).unwrap(), -2100);
    }

    #[test]
    fn ejected_bodies_saturate_instead_of_wrapping() {
        let scale = scaled(1.0);
        assert_eq!(scale.to_screen_x(1.0e8).unwrap(), i32::MAX);
        assert_eq!(scale.to_screen_x(-1.0e8).unwrap(), i32::MIN);
        // Flipped axis: far below the origin is far down the screen
        assert_eq!(scale.to_screen_y(-1.0e8).unwrap(), i32::MAX);
        assert_eq!(scale.to_screen_y(1.0e8).unwrap(), i32::MIN);
        // Just inside the i32 range nothing is lost to the cast
        assert_eq!(scale.to_screen_x(8.0e6).unwrap(), 1_920_000_300);
    }

    #[test]
    fn conversion_before_compute_fails() {
        let scale = ScaleModel::new(600, 600);
        assert!(!scale.is_initialized());
        assert!(matches!(scale.to_screen_x(1.0), Err(VisError::UninitializedScale)));
        assert!(matches!(scale.to_screen_y(1.0), Err(VisError::UninitializedScale)));
    }

    #[test]
    fn rejects_non_positive_length() {
        let mut scale = ScaleModel::new(600, 600);
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                scale.compute_scale(bad),
                Err(VisError::InvalidCharacteristicLength(_))
            ));
        }
        assert!(scale.scale_factor().is_none());
    }

    #[test]
    fn explicit_recompute_replaces_factor() {
        let mut scale = scaled(150.0);
        scale.compute_scale(300.0).unwrap();
        assert_abs_diff_eq!(scale.scale_factor().unwrap(), 0.8, epsilon = 1e-12);
    }
}
