#[cfg(feature = "spring")]
mod spring_system;
#[cfg(feature = "spring")]
mod spring_bumper;

#[cfg(feature = "spring")]
pub use spring_system::*;
#[cfg(feature = "spring")]
pub use spring_bumper::*;
