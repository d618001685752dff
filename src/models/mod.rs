mod vector_2d;
mod body;
mod arena;
mod coordinates;

pub use vector_2d::*;
pub use body::*;
pub use arena::*;
pub use coordinates::*;

#[cfg(test)]
mod models_tests;
