use rand::Rng;
use crate::models::{Arena, Vector2D};
use crate::utils::{closest_point_on_rect, is_positive_finite, validate_range, PhysicsError};

/// Axis-aligned target rectangle. `(x, y)` is the lower-left corner in the y-up world frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Where a target may be moved to. Ranges bound the lower-left corner and are further
/// narrowed so the whole rectangle stays inside the arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPlacement {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl Target {
    /// # Errors
    ///
    /// [`PhysicsError::InvalidRange`] for non-positive dimensions or a non-finite corner.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, PhysicsError> {
        if !is_positive_finite(width) || !is_positive_finite(height) || !x.is_finite() || !y.is_finite() {
            return Err(PhysicsError::InvalidRange("target must have a finite corner and positive size".to_string()));
        }
        Ok(Target { x, y, width, height })
    }

    pub fn min(&self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }

    pub fn max(&self) -> Vector2D {
        Vector2D::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Vector2D {
        Vector2D::new(self.x + 0.5 * self.width, self.y + 0.5 * self.height)
    }

    pub fn is_inside(&self, arena: &Arena) -> bool {
        arena.contains_rect(self.x, self.y, self.width, self.height)
    }

    /// Moves the target to a random spot allowed by `placement`, fully inside `arena`.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::InvalidRange`] when no position satisfies both; the target is not moved.
    pub fn relocate<R: Rng>(&mut self, placement: &TargetPlacement, arena: &Arena, rng: &mut R) -> Result<(), PhysicsError> {
        validate_range("target x", placement.x_range.0, placement.x_range.1)?;
        validate_range("target y", placement.y_range.0, placement.y_range.1)?;
        let x_min = placement.x_range.0.max(0.0);
        let x_max = placement.x_range.1.min(arena.width - self.width);
        let y_min = placement.y_range.0.max(0.0);
        let y_max = placement.y_range.1.min(arena.height - self.height);
        validate_range("target x within arena", x_min, x_max)?;
        validate_range("target y within arena", y_min, y_max)?;

        self.x = rng.random_range(x_min..=x_max);
        self.y = rng.random_range(y_min..=y_max);
        Ok(())
    }
}

/// Exact circle-versus-rectangle test.
///
/// The circle's centre is clamped onto the rectangle to find the rectangle's closest point;
/// the shot hits when that point lies within `radius` of the centre. Near corners this is
/// stricter than testing the centre against the rectangle grown by `radius`.
///
/// # Examples
///
/// ```
/// use rs_particle_lab::models::Vector2D;
/// use rs_particle_lab::projectile::{check_hit, Target};
///
/// let target = Target::new(10.0, 0.0, 1.0, 4.0).unwrap();
/// assert!(check_hit(Vector2D::new(9.5, 2.0), 0.6, &target));
/// // Inside the grown bounding box, but the corner is farther than the radius.
/// assert!(!check_hit(Vector2D::new(9.5, 4.5), 0.6, &target));
/// ```
pub fn check_hit(center: Vector2D, radius: f64, target: &Target) -> bool {
    let closest = closest_point_on_rect(center, target.min(), target.max());
    (center - closest).length_squared() <= radius * radius
}
