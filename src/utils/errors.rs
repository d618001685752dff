use std::fmt;
use std::error::Error;

/// Represents errors that can occur while setting up or advancing a simulation.
///
/// Every variant is an invalid-parameter error: the operation that returned it
/// left the simulation state untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Indicates an invalid mass value (negative, zero or not finite).
    InvalidMass,
    /// Indicates an invalid time step (negative, zero where a positive step is required, or not finite).
    InvalidTimestep,
    /// Indicates an invalid launch angle (not finite).
    InvalidAngle,
    /// Indicates an invalid radius value (negative, zero or not finite).
    InvalidRadius,
    /// Indicates a spring constant that is not strictly positive.
    InvalidSpringConstant,
    /// Indicates a negative spring rest length.
    InvalidRestLength,
    /// Indicates arena dimensions that are not strictly positive.
    InvalidArena,
    /// Indicates a malformed sampling range (e.g. min greater than max).
    InvalidRange(String),
    /// Indicates an operation that is not allowed in the current lifecycle state.
    InvalidState(String),
    /// Random placement could not find room for every requested body.
    PlacementFailed { placed: usize, requested: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "Invalid mass value"),
            PhysicsError::InvalidTimestep => write!(f, "Invalid time step"),
            PhysicsError::InvalidAngle => write!(f, "Invalid angle value"),
            PhysicsError::InvalidRadius => write!(f, "Invalid radius value"),
            PhysicsError::InvalidSpringConstant => write!(f, "Invalid spring constant"),
            PhysicsError::InvalidRestLength => write!(f, "Invalid spring rest length"),
            PhysicsError::InvalidArena => write!(f, "Invalid arena dimensions"),
            PhysicsError::InvalidRange(msg) => write!(f, "Invalid range: {}", msg),
            PhysicsError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            PhysicsError::PlacementFailed { placed, requested } => write!(
                f,
                "Could only place {} of {} bodies without overlap",
                placed, requested
            ),
        }
    }
}

impl Error for PhysicsError {}
