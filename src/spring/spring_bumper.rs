use crate::integrators::integrate;
use crate::models::{Body, Vector2D};
use crate::utils::{is_positive_finite, PhysicsError};

/// A frictionless one-sided spring mounted on a vertical wall at `wall_x`.
///
/// Bodies approach from the left. While a body's right edge is past the wall the spring is
/// compressed by that penetration and pushes back with `-k * penetration`; otherwise the
/// body moves freely. Because `k / m` is scale-free, the same constant works in metric and
/// pixel-scaled worlds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringBumper {
    pub wall_x: f64,
    pub spring_constant: f64,
}

impl SpringBumper {
    /// # Errors
    ///
    /// [`PhysicsError::InvalidSpringConstant`] unless `spring_constant` is positive.
    pub fn new(wall_x: f64, spring_constant: f64) -> Result<Self, PhysicsError> {
        if !is_positive_finite(spring_constant) {
            return Err(PhysicsError::InvalidSpringConstant);
        }
        Ok(SpringBumper { wall_x, spring_constant })
    }

    /// How far `body` has pushed into the spring; zero when not touching.
    pub fn penetration(&self, body: &Body) -> f64 {
        (body.position.x + body.radius - self.wall_x).max(0.0)
    }

    /// Force the compressed spring exerts on `body` along x.
    pub fn restoring_force(&self, body: &Body) -> f64 {
        -self.spring_constant * self.penetration(body)
    }

    /// Advances `body` by `dt` under the bumper force and returns the force applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_particle_lab::models::Body;
    /// use rs_particle_lab::spring::SpringBumper;
    ///
    /// let bumper = SpringBumper::new(10.0, 50.0).unwrap();
    /// let mut body = Body::from_components(9.5, 0.0, 5.0, 0.0, 1.0, 1.0).unwrap();
    ///
    /// let force = bumper.step(&mut body, 0.01).unwrap();
    /// assert_eq!(force, -25.0);
    /// assert!(body.velocity.x < 5.0);
    /// ```
    pub fn step(&self, body: &mut Body, dt: f64) -> Result<f64, PhysicsError> {
        let force = self.restoring_force(body);
        integrate(body, Vector2D::new(force / body.mass, 0.0), dt)?;
        Ok(force)
    }
}
