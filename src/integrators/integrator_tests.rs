use approx::assert_relative_eq;
use crate::assert_float_eq;
use crate::integrators::{integrate, integrate_force, substep_duration};
use crate::models::{Body, Vector2D};
use crate::utils::PhysicsError;

fn resting_body() -> Body {
    Body::from_components(0.0, 0.0, 0.0, 0.0, 1.0, 2.0).unwrap()
}

#[test]
fn test_integrate_updates_velocity_before_position() {
    let mut body = resting_body();
    integrate(&mut body, Vector2D::new(2.0, 0.0), 0.5).unwrap();
    // Explicit Euler would leave the position at 0.0 after the first step.
    assert_relative_eq!(body.velocity.x, 1.0);
    assert_relative_eq!(body.position.x, 0.5);
}

#[test]
fn test_integrate_rejects_bad_timestep() {
    let mut body = resting_body();
    let before = body;
    assert_eq!(integrate(&mut body, Vector2D::new(1.0, 1.0), 0.0), Err(PhysicsError::InvalidTimestep));
    assert_eq!(integrate(&mut body, Vector2D::new(1.0, 1.0), -0.1), Err(PhysicsError::InvalidTimestep));
    assert_eq!(integrate(&mut body, Vector2D::new(1.0, 1.0), f64::NAN), Err(PhysicsError::InvalidTimestep));
    assert_eq!(body, before);
}

#[test]
fn test_integrate_force_divides_by_mass() {
    let mut body = resting_body();
    integrate_force(&mut body, Vector2D::new(0.0, 4.0), 1.0).unwrap();
    assert_relative_eq!(body.velocity.y, 2.0);
    assert_relative_eq!(body.position.y, 2.0);
}

#[test]
fn test_integrate_force_rejects_massless_body() {
    let mut body = resting_body();
    body.mass = 0.0;
    assert_eq!(integrate_force(&mut body, Vector2D::new(1.0, 0.0), 0.1), Err(PhysicsError::InvalidMass));
}

#[test]
fn test_free_fall_matches_closed_form_within_first_order() {
    let mut body = resting_body();
    let dt = 0.001;
    for _ in 0..1000 {
        integrate(&mut body, Vector2D::new(0.0, -9.81), dt).unwrap();
    }
    // Closed form after 1 s: y = -4.905. Semi-implicit Euler overshoots by g*dt*t/2.
    assert_float_eq(body.velocity.y, -9.81, 1e-9, Some("free fall velocity"));
    assert_float_eq(body.position.y, -4.905, 0.01, Some("free fall height"));
}

#[test]
fn test_stiff_spring_stays_bounded() {
    // x'' = -k x with k = 400, dt = 0.01: explicit Euler grows ~2% per step here.
    let mut body = Body::from_components(1.0, 0.0, 0.0, 0.0, 0.1, 1.0).unwrap();
    let k = 400.0;
    let mut max_amplitude: f64 = 0.0;
    for _ in 0..10_000 {
        let acceleration = Vector2D::new(-k * body.position.x, 0.0);
        integrate(&mut body, acceleration, 0.01).unwrap();
        max_amplitude = max_amplitude.max(body.position.x.abs());
    }
    assert!(max_amplitude < 1.2, "amplitude grew to {}", max_amplitude);
}

#[test]
fn test_substep_duration() {
    assert_relative_eq!(substep_duration(0.03, 3).unwrap(), 0.01);
    assert_eq!(substep_duration(0.0, 3).unwrap(), 0.0);
    assert_eq!(substep_duration(-1.0, 3), Err(PhysicsError::InvalidTimestep));
    assert!(substep_duration(0.1, 0).is_err());
}
