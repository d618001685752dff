use crate::models::Vector2D;
use crate::utils::PhysicsError;

/// Axis-aligned rectangular play area with its lower-left corner at the origin.
///
/// The physics frame is y-up: `y = 0` is the floor and `y = height` the ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidArena`] unless both dimensions are positive and finite.
    pub fn new(width: f64, height: f64) -> Result<Self, PhysicsError> {
        let arena = Arena { width, height };
        arena.validate()?;
        Ok(arena)
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        let valid = |v: f64| v > 0.0 && v.is_finite();
        if !valid(self.width) || !valid(self.height) {
            return Err(PhysicsError::InvalidArena);
        }
        Ok(())
    }

    /// True when a disc of `radius` centred at `center` lies entirely inside the arena.
    pub fn contains_disc(&self, center: Vector2D, radius: f64) -> bool {
        center.x - radius >= 0.0
            && center.x + radius <= self.width
            && center.y - radius >= 0.0
            && center.y + radius <= self.height
    }

    /// True when `(x, y, width, height)` lies entirely inside the arena.
    pub fn contains_rect(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x + width <= self.width && y + height <= self.height
    }
}
