use crate::models::{Arena, CoordinateScale, Vector2D};
use crate::utils::{
    DEFAULT_SIMULATION_CONFIG, DEFAULT_SPRING_CONFIG, DEFAULT_TRAJECTORY_CONFIG,
    errors::PhysicsError,
    is_positive_finite,
};

/// Tuning for the multi-body collision sandbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Uniform acceleration applied to every body (world units/s²). Zero in the reference sandbox.
    pub gravity: Vector2D,
    /// Sub-steps per frame.
    pub substeps: usize,
    /// Fraction of normal speed kept on wall contact. `1.0` is perfectly elastic.
    pub wall_restitution: f64,
    /// Extra separation (world units) added to the penetration depth on contact.
    pub separation_bias: f64,
    /// Speeds above this are scaled back after wall reflection. `None` disables the cap.
    pub max_speed: Option<f64>,
    /// Longest frame (seconds) accepted by a single `step_frame`; longer frames are clamped.
    pub max_frame_time: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        DEFAULT_SIMULATION_CONFIG
    }
}

impl SimulationConfig {
    /// Builds a config, falling back to the defaults for every `None`.
    ///
    /// # Example
    /// ```
    /// use rs_particle_lab::utils::SimulationConfig;
    ///
    /// let config = SimulationConfig::new(None, Some(8), None, None, None);
    /// assert_eq!(config.substeps, 8);
    /// assert_eq!(config.wall_restitution, 1.0);
    /// ```
    pub fn new(
        gravity: Option<Vector2D>,
        substeps: Option<usize>,
        wall_restitution: Option<f64>,
        separation_bias: Option<f64>,
        max_speed: Option<Option<f64>>,
    ) -> Self {
        let default = DEFAULT_SIMULATION_CONFIG;
        Self {
            gravity: gravity.unwrap_or(default.gravity),
            substeps: substeps.unwrap_or(default.substeps),
            wall_restitution: wall_restitution.unwrap_or(default.wall_restitution),
            separation_bias: separation_bias.unwrap_or(default.separation_bias),
            max_speed: max_speed.unwrap_or(default.max_speed),
            max_frame_time: default.max_frame_time,
        }
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.substeps == 0 {
            return Err(PhysicsError::InvalidRange("substeps must be at least 1".to_string()));
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidRange("gravity must be finite".to_string()));
        }
        if !(0.0..=1.0).contains(&self.wall_restitution) {
            return Err(PhysicsError::InvalidRange("wall restitution must lie in [0, 1]".to_string()));
        }
        if !(self.separation_bias >= 0.0) || !self.separation_bias.is_finite() {
            return Err(PhysicsError::InvalidRange("separation bias must be non-negative".to_string()));
        }
        if let Some(max_speed) = self.max_speed {
            if !is_positive_finite(max_speed) {
                return Err(PhysicsError::InvalidRange("max speed must be positive".to_string()));
            }
        }
        if !is_positive_finite(self.max_frame_time) {
            return Err(PhysicsError::InvalidTimestep);
        }
        Ok(())
    }
}

/// Tuning for ballistic trajectory sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryConfig {
    /// Gravitational acceleration in m/s², scaled through `scale`.
    pub gravity: f64,
    /// Time between consecutive samples, in seconds.
    pub sample_increment: f64,
    pub scale: CoordinateScale,
    /// World position of the launcher. Heights are measured from its `y`.
    pub launch_origin: Vector2D,
    /// Drawable area; samples leaving it horizontally end the trajectory.
    pub arena: Arena,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        DEFAULT_TRAJECTORY_CONFIG
    }
}

impl TrajectoryConfig {
    /// The unscaled reference game: 800x600 pixel world, 0.1 s samples, launcher 50 px in from the corner.
    pub fn reference_pixels() -> Self {
        Self {
            gravity: crate::utils::STANDARD_GRAVITY,
            sample_increment: 0.1,
            scale: CoordinateScale::Pixels { pixels_per_meter: 1.0 },
            launch_origin: Vector2D::new(50.0, 50.0),
            arena: Arena { width: 800.0, height: 600.0 },
        }
    }

    /// Gravity in world units per second squared.
    pub fn world_gravity(&self) -> f64 {
        self.scale.scale_acceleration(self.gravity)
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !is_positive_finite(self.sample_increment) {
            return Err(PhysicsError::InvalidTimestep);
        }
        if !is_positive_finite(self.gravity) || !is_positive_finite(self.scale.units_per_meter()) {
            return Err(PhysicsError::InvalidRange("gravity and scale must be positive".to_string()));
        }
        self.arena.validate()
    }
}

/// How the spring oscillator decides that a half-oscillation has happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OscillationDetection {
    /// Count sign changes of (position - equilibrium), ignoring repeats in the same direction.
    #[default]
    PositionCrossing,
    /// Count sign changes of the velocity, i.e. turning points.
    VelocityReversal,
}

/// Tuning for the vertical spring oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Fixed suspension point.
    pub anchor: Vector2D,
    pub rest_length: f64,
    /// Hooke constant `k` in N/m.
    pub spring_constant: f64,
    pub mass: f64,
    pub radius: f64,
    /// Gravitational acceleration in m/s², scaled through `scale`.
    pub gravity: f64,
    pub scale: CoordinateScale,
    /// Height of the floor the bob bounces on.
    pub floor: f64,
    /// Fraction of speed kept on a floor bounce.
    pub restitution: f64,
    pub detection: OscillationDetection,
    pub substeps: usize,
    /// Number of recent bob positions kept for drawing a trail.
    pub trail_length: usize,
}

impl Default for SpringConfig {
    fn default() -> Self {
        DEFAULT_SPRING_CONFIG
    }
}

impl SpringConfig {
    /// The pixel-scaled vertical spring demo: anchor 100 px below the top of a 600 px window.
    pub fn reference_pixels() -> Self {
        Self {
            anchor: Vector2D::new(400.0, 500.0),
            rest_length: 150.0,
            radius: 15.0,
            scale: CoordinateScale::Pixels { pixels_per_meter: 100.0 },
            ..DEFAULT_SPRING_CONFIG
        }
    }

    /// Gravity in world units per second squared.
    pub fn world_gravity(&self) -> f64 {
        self.scale.scale_acceleration(self.gravity)
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !is_positive_finite(self.mass) {
            return Err(PhysicsError::InvalidMass);
        }
        if !is_positive_finite(self.radius) {
            return Err(PhysicsError::InvalidRadius);
        }
        if !is_positive_finite(self.spring_constant) {
            return Err(PhysicsError::InvalidSpringConstant);
        }
        if !(self.rest_length >= 0.0) || !self.rest_length.is_finite() {
            return Err(PhysicsError::InvalidRestLength);
        }
        if !self.gravity.is_finite() || !self.anchor.is_finite() || !self.floor.is_finite() {
            return Err(PhysicsError::InvalidRange("spring geometry must be finite".to_string()));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(PhysicsError::InvalidRange("restitution must lie in [0, 1]".to_string()));
        }
        if self.substeps == 0 {
            return Err(PhysicsError::InvalidRange("substeps must be at least 1".to_string()));
        }
        Ok(())
    }
}
