mod boundary;
mod collisions_2d;

pub use boundary::*;
pub use collisions_2d::*;
