#[cfg(feature = "projectile")]
mod trajectory;
#[cfg(feature = "projectile")]
mod target;
#[cfg(feature = "projectile")]
mod game;

#[cfg(feature = "projectile")]
pub use trajectory::*;
#[cfg(feature = "projectile")]
pub use target::*;
#[cfg(feature = "projectile")]
pub use game::*;

#[cfg(test)]
#[cfg(feature = "projectile")]
mod target_tests;
