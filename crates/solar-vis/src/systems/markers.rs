//! Body markers on the main view.
//!
//! A marker is a filled circle centred on the body's scaled position. Its
//! radius is the body radius in pixels and does not follow the scale.
//!
//! Markers are created once per body and repositioned every tick. A marker
//! whose box leaves the canvas entirely is still moved to its true
//! coordinates; the surface just does not show it.

use crate::api::error::VisError;
use crate::api::types::ShapeId;
use crate::components::body::TrackedBody;
use crate::renderer::scale::ScaleModel;
use crate::renderer::traits::{DrawSurface, Rect};

/// Screen bounding box of `body`'s marker for the current scale.
pub fn marker_bounds<B: TrackedBody>(scale: &ScaleModel, body: &B) -> Result<Rect, VisError> {
    let center = scale.to_screen(body.position())?;
    Ok(Rect::from_center_radius(center.as_dvec2(), body.radius()))
}

/// True when the marker box lies entirely outside the view.
pub fn is_off_canvas(bounds: &Rect, scale: &ScaleModel) -> bool {
    bounds.is_outside(scale.view_width() as f64, scale.view_height() as f64)
}

/// Create the marker for `body` and attach its handle to the body.
///
/// Calling this twice for the same body leaves the first circle orphaned on
/// the surface; the body only remembers the newest one.
pub fn create_marker<S, B>(surface: &mut S, scale: &ScaleModel, body: &mut B) -> Result<ShapeId, VisError>
where
    S: DrawSurface + ?Sized,
    B: TrackedBody,
{
    let bounds = marker_bounds(scale, body)?;
    let id = surface.create_oval(bounds, body.color());

    if let Some(previous) = body.marker() {
        log::debug!("{:?} marker {} replaced by {}", body.kind(), previous, id);
    } else {
        log::debug!("{:?} marker {} created at {:?}", body.kind(), id, bounds.center());
    }
    body.attach_marker(id);
    Ok(id)
}

/// Move `body`'s marker to the body's current position.
pub fn update_marker_position<S, B>(surface: &mut S, scale: &ScaleModel, body: &B) -> Result<(), VisError>
where
    S: DrawSurface + ?Sized,
    B: TrackedBody,
{
    let id = body.marker().ok_or(VisError::MissingMarker)?;
    let bounds = marker_bounds(scale, body)?;

    if is_off_canvas(&bounds, scale) {
        log::trace!("{} is off canvas at {:?}", id, bounds.center());
    }
    if !surface.set_coords(id, bounds) {
        return Err(VisError::StaleMarker(id));
    }
    Ok(())
}

/// Update every marker in `bodies`, stopping at the first failure.
pub fn update_all_markers<S, B>(surface: &mut S, scale: &ScaleModel, bodies: &[B]) -> Result<(), VisError>
where
    S: DrawSurface + ?Sized,
    B: TrackedBody,
{
    for body in bodies {
        update_marker_position(surface, scale, body)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Color;
    use crate::components::body::CelestialBody;
    use crate::renderer::canvas::{Canvas, ShapeKind};
    use glam::DVec2;

    fn setup() -> (Canvas, ScaleModel) {
        let mut scale = ScaleModel::new(600, 600);
        scale.compute_scale(150.0).unwrap(); // 1.6 px per unit
        (Canvas::new(600, 600), scale)
    }

    #[test]
    fn create_places_circle_at_scaled_position() {
        let (mut canvas, scale) = setup();
        let mut body = CelestialBody::planet(DVec2::new(100.0, 100.0), DVec2::ZERO)
            .with_radius(4.0)
            .with_color(Color::BLUE);

        let id = create_marker(&mut canvas, &scale, &mut body).unwrap();
        assert_eq!(body.marker(), Some(id));

        let shape = canvas.get(id).unwrap();
        assert_eq!(shape.coords.min, DVec2::new(456.0, 136.0));
        assert_eq!(shape.coords.max, DVec2::new(464.0, 144.0));
        assert_eq!(shape.kind, ShapeKind::Oval { fill: Color::BLUE });
    }

    #[test]
    fn radius_ignores_scale() {
        let (mut canvas, mut scale) = setup();
        scale.compute_scale(1.0e6).unwrap();
        let mut body = CelestialBody::star(DVec2::ZERO, DVec2::ZERO).with_radius(10.0);
        let id = create_marker(&mut canvas, &scale, &mut body).unwrap();
        assert_eq!(canvas.get(id).unwrap().coords.width(), 20.0);
    }

    #[test]
    fn update_without_movement_is_idempotent() {
        let (mut canvas, scale) = setup();
        let mut body = CelestialBody::planet(DVec2::new(-40.0, 25.0), DVec2::ZERO);
        let id = create_marker(&mut canvas, &scale, &mut body).unwrap();
        let before = canvas.get(id).unwrap().coords;

        update_marker_position(&mut canvas, &scale, &body).unwrap();
        assert_eq!(canvas.get(id).unwrap().coords, before);
    }

    #[test]
    fn update_follows_body() {
        let (mut canvas, scale) = setup();
        let mut body = CelestialBody::planet(DVec2::ZERO, DVec2::ZERO).with_radius(2.0);
        let id = create_marker(&mut canvas, &scale, &mut body).unwrap();

        body.set_state(DVec2::new(-100.0, -100.0), DVec2::ZERO);
        update_marker_position(&mut canvas, &scale, &body).unwrap();
        assert_eq!(canvas.get(id).unwrap().coords.center(), DVec2::new(140.0, 460.0));
    }

    #[test]
    fn off_canvas_marker_lands_on_true_coordinates() {
        let (mut canvas, scale) = setup();
        let mut body = CelestialBody::planet(DVec2::ZERO, DVec2::ZERO).with_radius(5.0);
        let id = create_marker(&mut canvas, &scale, &mut body).unwrap();

        body.set_state(DVec2::new(1000.0, 0.0), DVec2::ZERO);
        update_marker_position(&mut canvas, &scale, &body).unwrap();

        let coords = canvas.get(id).unwrap().coords;
        assert!(is_off_canvas(&coords, &scale));
        assert_eq!(coords, marker_bounds(&scale, &body).unwrap());
        assert_eq!(coords.center(), DVec2::new(1900.0, 300.0));
    }

    #[test]
    fn ejected_body_stays_on_its_side() {
        let (mut canvas, scale) = setup();
        let mut body = CelestialBody::planet(DVec2::ZERO, DVec2::ZERO).with_radius(5.0);
        let id = create_marker(&mut canvas, &scale, &mut body).unwrap();

        body.set_state(DVec2::new(1.0e12, -1.0e12), DVec2::ZERO);
        update_marker_position(&mut canvas, &scale, &body).unwrap();

        let coords = canvas.get(id).unwrap().coords;
        assert!(is_off_canvas(&coords, &scale));
        // Right of and below the view, not wrapped around to the left
        assert!(coords.min.x > 600.0);
        assert!(coords.min.y > 600.0);
    }

    #[test]
    fn update_without_marker_fails() {
        let (mut canvas, scale) = setup();
        let body = CelestialBody::planet(DVec2::ZERO, DVec2::ZERO);
        assert!(matches!(
            update_marker_position(&mut canvas, &scale, &body),
            Err(VisError::MissingMarker)
        ));
    }

    #[test]
    fn update_after_surface_reset_reports_stale_marker() {
        let (mut canvas, scale) = setup();
        let mut body = CelestialBody::planet(DVec2::ZERO, DVec2::ZERO);
        let id = create_marker(&mut canvas, &scale, &mut body).unwrap();
        canvas.clear();

        match update_marker_position(&mut canvas, &scale, &body) {
            Err(VisError::StaleMarker(stale)) => assert_eq!(stale, id),
            other => panic!("expected StaleMarker, got {:?}", other),
        }
    }

    #[test]
    fn create_before_scale_fails() {
        let mut canvas = Canvas::new(600, 600);
        let scale = ScaleModel::new(600, 600);
        let mut body = CelestialBody::planet(DVec2::ZERO, DVec2::ZERO);
        assert!(matches!(
            create_marker(&mut canvas, &scale, &mut body),
            Err(VisError::UninitializedScale)
        ));
        assert!(canvas.is_empty());
        assert!(body.marker().is_none());
    }

    #[test]
    fn recreate_replaces_back_reference() {
        let (mut canvas, scale) = setup();
        let mut body = CelestialBody::planet(DVec2::ZERO, DVec2::ZERO);
        let first = create_marker(&mut canvas, &scale, &mut body).unwrap();
        let second = create_marker(&mut canvas, &scale, &mut body).unwrap();
        assert_ne!(first, second);
        assert_eq!(body.marker(), Some(second));
        assert_eq!(canvas.len(), 2);
    }

    #[test]
    fn update_all_moves_every_body() {
        let (mut canvas, scale) = setup();
        let mut bodies = vec![
            CelestialBody::star(DVec2::ZERO, DVec2::ZERO),
            CelestialBody::planet(DVec2::new(50.0, 0.0), DVec2::ZERO),
        ];
        for body in bodies.iter_mut() {
            create_marker(&mut canvas, &scale, body).unwrap();
        }
        for body in bodies.iter_mut() {
            let p = body.position;
            body.set_state(p + DVec2::new(0.0, 10.0), DVec2::ZERO);
        }
        update_all_markers(&mut canvas, &scale, &bodies).unwrap();

        for body in &bodies {
            let id = body.marker().unwrap();
            assert_eq!(canvas.get(id).unwrap().coords, marker_bounds(&scale, body).unwrap());
        }
    }
}
