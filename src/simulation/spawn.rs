use std::f64::consts::TAU;
use log::debug;
use rand::Rng;
use crate::models::{Arena, Body, Vector2D};
use crate::utils::{validate_range, PhysicsError, MAX_PLACEMENT_ATTEMPTS};

/// Parameters for populating the collision sandbox.
///
/// Ranges are inclusive `(min, max)` pairs. Defaults reproduce the reference sandbox:
/// ten discs of radius 10..20 moving at 50..150 units/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnConfig {
    pub count: usize,
    pub speed_range: (f64, f64),
    pub radius_range: (f64, f64),
}

impl Default for SpawnConfig {
    fn default() -> Self {
        SpawnConfig {
            count: 10,
            speed_range: (50.0, 150.0),
            radius_range: (10.0, 20.0),
        }
    }
}

/// Creates `count` bodies at random, non-overlapping positions inside `arena`.
///
/// Each body gets a radius drawn from `radius_range`, a mass equal to `radius²`, a centre
/// uniformly placed so the disc lies inside the arena, and a velocity with uniformly random
/// heading and a speed from `speed_range`. A candidate that overlaps an already placed body
/// is discarded and redrawn.
///
/// # Errors
///
/// * [`PhysicsError::InvalidRange`] for malformed ranges, a non-positive minimum radius, a
///   negative speed, or discs too large to fit the arena.
/// * [`PhysicsError::PlacementFailed`] when a body still overlaps after
///   `MAX_PLACEMENT_ATTEMPTS` draws, which means the arena is too crowded.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rs_particle_lab::models::Arena;
/// use rs_particle_lab::simulation::create_bodies;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let arena = Arena::new(800.0, 600.0).unwrap();
/// let bodies = create_bodies(10, &arena, (50.0, 150.0), (10.0, 20.0), &mut rng).unwrap();
///
/// assert_eq!(bodies.len(), 10);
/// for (i, a) in bodies.iter().enumerate() {
///     for b in &bodies[i + 1..] {
///         assert!(!a.overlaps(b));
///     }
/// }
/// ```
pub fn create_bodies<R: Rng>(
    count: usize,
    arena: &Arena,
    speed_range: (f64, f64),
    radius_range: (f64, f64),
    rng: &mut R,
) -> Result<Vec<Body>, PhysicsError> {
    arena.validate()?;
    validate_range("speed", speed_range.0, speed_range.1)?;
    validate_range("radius", radius_range.0, radius_range.1)?;
    if speed_range.0 < 0.0 {
        return Err(PhysicsError::InvalidRange("speeds must be non-negative".to_string()));
    }
    if radius_range.0 <= 0.0 {
        return Err(PhysicsError::InvalidRange("radii must be positive".to_string()));
    }
    if 2.0 * radius_range.1 > arena.width.min(arena.height) {
        return Err(PhysicsError::InvalidRange(format!(
            "radius {} does not fit a {}x{} arena",
            radius_range.1, arena.width, arena.height
        )));
    }

    let mut bodies: Vec<Body> = Vec::with_capacity(count);
    while bodies.len() < count {
        let mut placed = false;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = random_body(arena, speed_range, radius_range, rng)?;
            if bodies.iter().all(|existing| !existing.overlaps(&candidate)) {
                bodies.push(candidate);
                placed = true;
                break;
            }
        }
        if !placed {
            return Err(PhysicsError::PlacementFailed {
                placed: bodies.len(),
                requested: count,
            });
        }
    }
    debug!("spawned {} bodies in a {}x{} arena", count, arena.width, arena.height);
    Ok(bodies)
}

/// [`create_bodies`] driven by a [`SpawnConfig`].
pub fn create_bodies_from<R: Rng>(
    spawn: &SpawnConfig,
    arena: &Arena,
    rng: &mut R,
) -> Result<Vec<Body>, PhysicsError> {
    create_bodies(spawn.count, arena, spawn.speed_range, spawn.radius_range, rng)
}

fn random_body<R: Rng>(
    arena: &Arena,
    speed_range: (f64, f64),
    radius_range: (f64, f64),
    rng: &mut R,
) -> Result<Body, PhysicsError> {
    let radius = rng.random_range(radius_range.0..=radius_range.1);
    let position = Vector2D::new(
        rng.random_range(radius..=arena.width - radius),
        rng.random_range(radius..=arena.height - radius),
    );
    let heading = rng.random_range(0.0..TAU);
    let speed = rng.random_range(speed_range.0..=speed_range.1);
    Body::new(position, Vector2D::from_polar(speed, heading), radius, radius * radius)
}
