mod particle_lab;

pub use particle_lab::*;
