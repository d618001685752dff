use crate::models::{Body, Vector2D};
use crate::utils::PhysicsError;

/// Advances `body` by `dt` seconds under a constant `acceleration` using semi-implicit Euler.
///
/// Velocity is updated first and the new velocity moves the position
/// (`v += a*dt; x += v*dt`). Stiff springs stay bounded with this ordering,
/// whereas position-first Euler gains energy every step.
///
/// # Errors
///
/// Returns [`PhysicsError::InvalidTimestep`] when `dt` is not a positive finite number.
/// The body is left untouched in that case.
///
/// # Examples
///
/// ```
/// use rs_particle_lab::integrators::integrate;
/// use rs_particle_lab::models::{Body, Vector2D};
///
/// let mut body = Body::from_components(0.0, 10.0, 1.0, 0.0, 0.5, 1.0).unwrap();
/// integrate(&mut body, Vector2D::new(0.0, -10.0), 0.1).unwrap();
///
/// assert!((body.velocity.y - -1.0).abs() < 1e-12);
/// assert!((body.position.y - 9.9).abs() < 1e-12);
/// assert!((body.position.x - 0.1).abs() < 1e-12);
/// ```
pub fn integrate(body: &mut Body, acceleration: Vector2D, dt: f64) -> Result<(), PhysicsError> {
    if !(dt > 0.0) || !dt.is_finite() {
        return Err(PhysicsError::InvalidTimestep);
    }
    body.velocity += acceleration * dt;
    body.position += body.velocity * dt;
    Ok(())
}

/// Advances `body` under a net `force`, dividing by the body's mass.
///
/// # Errors
///
/// Returns [`PhysicsError::InvalidMass`] for a body whose mass is not positive, and
/// [`PhysicsError::InvalidTimestep`] for a bad `dt`.
pub fn integrate_force(body: &mut Body, force: Vector2D, dt: f64) -> Result<(), PhysicsError> {
    if !(body.mass > 0.0) {
        return Err(PhysicsError::InvalidMass);
    }
    integrate(body, force * (1.0 / body.mass), dt)
}

/// Splits a frame of `elapsed` seconds into `substeps` equal slices.
///
/// # Errors
///
/// `elapsed` must be non-negative and finite, and `substeps` at least one.
pub fn substep_duration(elapsed: f64, substeps: usize) -> Result<f64, PhysicsError> {
    if !(elapsed >= 0.0) || !elapsed.is_finite() {
        return Err(PhysicsError::InvalidTimestep);
    }
    if substeps == 0 {
        return Err(PhysicsError::InvalidRange("substeps must be at least 1".to_string()));
    }
    Ok(elapsed / substeps as f64)
}
