use crate::models::Vector2D;
use crate::utils::PhysicsError;

/// A disc-shaped point mass.
///
/// Bodies have no identity of their own; a simulation refers to them by slot index.
/// `mass` and `radius` are strictly positive for any body built through [`Body::new`],
/// and the integrator and collision resolver rely on that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Centre of the disc in world units.
    pub position: Vector2D,
    /// Velocity in world units per second.
    pub velocity: Vector2D,
    pub radius: f64,
    pub mass: f64,
}

impl Body {
    /// Creates a new body.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidMass`] for a non-positive or non-finite mass and
    /// [`PhysicsError::InvalidRadius`] for a non-positive or non-finite radius.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_particle_lab::models::{Body, Vector2D};
    ///
    /// let body = Body::new(Vector2D::new(1.0, 2.0), Vector2D::new(3.0, 4.0), 0.5, 2.0).unwrap();
    /// assert_eq!(body.speed(), 5.0);
    /// assert_eq!(body.kinetic_energy(), 25.0);
    ///
    /// assert!(Body::new(Vector2D::ZERO, Vector2D::ZERO, 0.5, 0.0).is_err());
    /// ```
    pub fn new(position: Vector2D, velocity: Vector2D, radius: f64, mass: f64) -> Result<Self, PhysicsError> {
        if !(mass > 0.0) || !mass.is_finite() {
            return Err(PhysicsError::InvalidMass);
        }
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(PhysicsError::InvalidRadius);
        }
        Ok(Body {
            position,
            velocity,
            radius,
            mass,
        })
    }

    /// Convenience constructor from raw components.
    pub fn from_components(x: f64, y: f64, vx: f64, vy: f64, radius: f64, mass: f64) -> Result<Self, PhysicsError> {
        Body::new(Vector2D::new(x, y), Vector2D::new(vx, vy), radius, mass)
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn vx(&self) -> f64 {
        self.velocity.x
    }

    pub fn vy(&self) -> f64 {
        self.velocity.y
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// `½ m v²`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn momentum(&self) -> Vector2D {
        self.velocity * self.mass
    }

    /// True when the two discs strictly overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        let min_distance = self.radius + other.radius;
        (other.position - self.position).length_squared() < min_distance * min_distance
    }
}
