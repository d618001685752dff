mod integrator;

pub use integrator::*;

#[cfg(test)]
mod integrator_tests;
