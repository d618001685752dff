use crate::models::Vector2D;
use crate::utils::PhysicsError;

#[inline]
pub fn is_positive_finite(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}

/// Closest point of the axis-aligned rectangle `[min, max]` to `point`.
///
/// Points inside the rectangle map to themselves.
///
/// # Example
/// ```
/// use rs_particle_lab::models::Vector2D;
/// use rs_particle_lab::utils::closest_point_on_rect;
///
/// let closest = closest_point_on_rect(Vector2D::new(5.0, -1.0), Vector2D::new(0.0, 0.0), Vector2D::new(2.0, 3.0));
/// assert_eq!(closest, Vector2D::new(2.0, 0.0));
/// ```
#[inline]
pub fn closest_point_on_rect(point: Vector2D, min: Vector2D, max: Vector2D) -> Vector2D {
    Vector2D::new(point.x.max(min.x).min(max.x), point.y.max(min.y).min(max.y))
}

/// Checks an inclusive `min..=max` sampling range.
pub fn validate_range(name: &str, min: f64, max: f64) -> Result<(), PhysicsError> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(PhysicsError::InvalidRange(format!("{} range [{}, {}] is malformed", name, min, max)));
    }
    Ok(())
}

/// Sign of `value` with zero mapped to `0`.
#[inline]
pub fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}
