use approx::assert_relative_eq;
use crate::models::{Arena, Body, CoordinateScale, Vector2D};
use crate::utils::PhysicsError;

#[test]
fn test_body_new_rejects_non_positive_mass() {
    let result = Body::new(Vector2D::ZERO, Vector2D::ZERO, 1.0, 0.0);
    assert_eq!(result, Err(PhysicsError::InvalidMass));

    let result = Body::new(Vector2D::ZERO, Vector2D::ZERO, 1.0, -2.0);
    assert_eq!(result, Err(PhysicsError::InvalidMass));

    let result = Body::new(Vector2D::ZERO, Vector2D::ZERO, 1.0, f64::NAN);
    assert_eq!(result, Err(PhysicsError::InvalidMass));
}

#[test]
fn test_body_new_rejects_non_positive_radius() {
    let result = Body::new(Vector2D::ZERO, Vector2D::ZERO, 0.0, 1.0);
    assert_eq!(result, Err(PhysicsError::InvalidRadius));
}

#[test]
fn test_body_derived_quantities() {
    let body = Body::from_components(0.0, 0.0, 3.0, -4.0, 1.0, 2.0).unwrap();
    assert_relative_eq!(body.speed(), 5.0);
    assert_relative_eq!(body.kinetic_energy(), 25.0);
    assert_eq!(body.momentum(), Vector2D::new(6.0, -8.0));
}

#[test]
fn test_body_overlap_is_strict() {
    let a = Body::from_components(0.0, 0.0, 0.0, 0.0, 1.0, 1.0).unwrap();
    let touching = Body::from_components(2.0, 0.0, 0.0, 0.0, 1.0, 1.0).unwrap();
    let overlapping = Body::from_components(1.5, 0.0, 0.0, 0.0, 1.0, 1.0).unwrap();
    assert!(!a.overlaps(&touching));
    assert!(a.overlaps(&overlapping));
}

#[test]
fn test_vector_operations() {
    let a = Vector2D::new(1.0, 2.0);
    let b = Vector2D::new(3.0, -1.0);
    assert_eq!(a + b, Vector2D::new(4.0, 1.0));
    assert_eq!(a - b, Vector2D::new(-2.0, 3.0));
    assert_eq!(a * 2.0, Vector2D::new(2.0, 4.0));
    assert_relative_eq!(a.dot(b), 1.0);
    assert_eq!(a.perpendicular(), Vector2D::new(-2.0, 1.0));
    assert_relative_eq!(a.dot(a.perpendicular()), 0.0);
}

#[test]
fn test_arena_validation() {
    assert!(Arena::new(10.0, 5.0).is_ok());
    assert_eq!(Arena::new(0.0, 5.0), Err(PhysicsError::InvalidArena));
    assert_eq!(Arena::new(10.0, f64::INFINITY), Err(PhysicsError::InvalidArena));
}

#[test]
fn test_arena_contains_disc() {
    let arena = Arena::new(10.0, 10.0).unwrap();
    assert!(arena.contains_disc(Vector2D::new(1.0, 1.0), 1.0));
    assert!(!arena.contains_disc(Vector2D::new(0.5, 5.0), 1.0));
}

#[test]
fn test_display_transform_flips_y() {
    let transform = CoordinateScale::Metric.display_transform(600.0, 50.0);
    let (sx, sy) = transform.to_screen(Vector2D::new(2.0, 0.0));
    assert_relative_eq!(sx, 100.0);
    assert_relative_eq!(sy, 600.0);

    let pixel_transform = CoordinateScale::Pixels { pixels_per_meter: 100.0 }.display_transform(600.0, 50.0);
    assert_relative_eq!(pixel_transform.pixels_per_unit, 1.0);
}
