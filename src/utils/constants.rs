use crate::models::{Arena, CoordinateScale, Vector2D};
use crate::utils::{OscillationDetection, SimulationConfig, SpringConfig, TrajectoryConfig};

/// Standard gravitational acceleration used by the reference demos, in m/s².
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Placement attempts per body before random spawning gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

pub const DEFAULT_SIMULATION_CONFIG: SimulationConfig = SimulationConfig {
    gravity: Vector2D::ZERO,
    substeps: 3,
    wall_restitution: 1.0,
    separation_bias: 1.0,
    max_speed: Some(300.0),
    max_frame_time: 0.25,
};

pub const DEFAULT_TRAJECTORY_CONFIG: TrajectoryConfig = TrajectoryConfig {
    gravity: STANDARD_GRAVITY,
    sample_increment: 0.05,
    scale: CoordinateScale::Metric,
    launch_origin: Vector2D { x: 1.0, y: 1.0 },
    arena: Arena { width: 16.0, height: 12.0 },
};

pub const DEFAULT_SPRING_CONFIG: SpringConfig = SpringConfig {
    anchor: Vector2D { x: 5.0, y: 7.0 },
    rest_length: 1.5,
    spring_constant: 100.0,
    mass: 20.0,
    radius: 0.15,
    gravity: STANDARD_GRAVITY,
    scale: CoordinateScale::Metric,
    floor: 0.0,
    restitution: 0.8,
    detection: OscillationDetection::PositionCrossing,
    substeps: 3,
    trail_length: 100,
};
