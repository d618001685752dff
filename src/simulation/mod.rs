mod state;
mod clock;
mod spawn;
mod driver;

pub use state::*;
pub use clock::*;
pub use spawn::*;
pub use driver::*;

#[cfg(test)]
mod driver_tests;
