//! Ballistic trajectory sampling.
//!
//! A shot is described by the projectile mass, a launch angle in degrees and the launch
//! energy, which is taken to be all kinetic: `E = ½ m v0²`, so `v0 = sqrt(2E / m)`.
//! Without drag the flight is
//!
//! `x(t) = v0 cos(θ) t`, `y(t) = v0 sin(θ) t - ½ g t²`
//!
//! measured from the launcher. The path is sampled every `sample_increment` seconds until
//! the projectile drops below launch height or leaves the arena sideways. Leaving through
//! the top is allowed; the shot comes back down. Sampling always runs to one of those two
//! ends, so the last point is at or above launch height and the next one would not be.
use log::{debug, warn};
use crate::models::Vector2D;
use crate::utils::TrajectoryConfig;

/// Largest trajectory a shot may produce. Shots whose flight would need more samples are
/// rejected up front and yield an empty trajectory instead of a truncated one.
pub const MAX_TRAJECTORY_SAMPLES: usize = 1_000_000;

/// Launch speed for a shot carrying `energy` joules of kinetic energy.
///
/// Returns `None` when no real speed exists: non-positive mass, negative energy or
/// non-finite input.
///
/// # Example
/// ```
/// use rs_particle_lab::projectile::launch_speed;
///
/// assert_eq!(launch_speed(1.0, 50.0), Some(10.0));
/// assert_eq!(launch_speed(0.0, 50.0), None);
/// ```
pub fn launch_speed(mass: f64, energy: f64) -> Option<f64> {
    if !(mass > 0.0) || !mass.is_finite() || !(energy >= 0.0) || !energy.is_finite() {
        return None;
    }
    let speed = (2.0 * energy / mass).sqrt();
    speed.is_finite().then_some(speed)
}

/// The sampled path of a single shot, in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<Vector2D>,
    launch_speed: f64,
    angle_radians: f64,
    sample_increment: f64,
}

impl Trajectory {
    fn empty(sample_increment: f64) -> Self {
        Trajectory {
            points: Vec::new(),
            launch_speed: 0.0,
            angle_radians: 0.0,
            sample_increment,
        }
    }

    pub fn points(&self) -> &[Vector2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn launch_speed(&self) -> f64 {
        self.launch_speed
    }

    pub fn angle_radians(&self) -> f64 {
        self.angle_radians
    }

    /// Seconds of flight covered by the samples.
    pub fn duration(&self) -> f64 {
        self.points.len().saturating_sub(1) as f64 * self.sample_increment
    }

    /// Highest sampled point.
    pub fn apex(&self) -> Option<Vector2D> {
        self.points
            .iter()
            .copied()
            .fold(None, |best: Option<Vector2D>, p| match best {
                Some(b) if b.y >= p.y => Some(b),
                _ => Some(p),
            })
    }

    /// Consumes the trajectory into a one-shot, forward-only playback.
    pub fn into_playback(self) -> TrajectoryPlayback {
        TrajectoryPlayback {
            points: self.points.into_iter(),
        }
    }
}

/// Hands out a trajectory's points one at a time, one per rendered frame.
///
/// Once exhausted it stays exhausted; a new shot needs a new trajectory.
#[derive(Debug, Clone)]
pub struct TrajectoryPlayback {
    points: std::vec::IntoIter<Vector2D>,
}

impl TrajectoryPlayback {
    pub fn remaining(&self) -> usize {
        self.points.len()
    }
}

impl Iterator for TrajectoryPlayback {
    type Item = Vector2D;

    fn next(&mut self) -> Option<Vector2D> {
        self.points.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl ExactSizeIterator for TrajectoryPlayback {}

/// Samples the path of a shot.
///
/// Never fails: a non-positive mass, a negative energy or a non-finite angle produce an
/// empty trajectory, as does a flight longer than [`MAX_TRAJECTORY_SAMPLES`] samples.
///
/// # Examples
///
/// ```
/// use rs_particle_lab::projectile::sample_trajectory;
/// use rs_particle_lab::utils::TrajectoryConfig;
///
/// let config = TrajectoryConfig::default();
/// let shot = sample_trajectory(1.0, 45.0, 50.0, &config);
/// assert!(!shot.is_empty());
/// assert_eq!(shot.points()[0], config.launch_origin);
///
/// assert!(sample_trajectory(0.0, 45.0, 50.0, &config).is_empty());
/// ```
pub fn sample_trajectory(mass: f64, angle_degrees: f64, energy: f64, config: &TrajectoryConfig) -> Trajectory {
    let increment = config.sample_increment;
    let Some(v0) = launch_speed(mass, energy) else {
        debug!("shot rejected: mass={}, energy={}", mass, energy);
        return Trajectory::empty(increment);
    };
    if !angle_degrees.is_finite() || !(increment > 0.0) {
        debug!("shot rejected: angle={}, increment={}", angle_degrees, increment);
        return Trajectory::empty(increment);
    }

    let theta = angle_degrees.to_radians();
    let (vx, vy) = (v0 * theta.cos(), v0 * theta.sin());
    let g = config.world_gravity();
    let origin = config.launch_origin;

    let Some(last_index) = final_sample_index(vx, vy, g, increment, config) else {
        warn!(
            "shot rejected: flight at v0={:.3e} needs more than {} samples",
            v0, MAX_TRAJECTORY_SAMPLES
        );
        return Trajectory::empty(increment);
    };

    let mut points = Vec::with_capacity(last_index + 1);
    // Rounding can put the crossing one sample either side of the closed-form estimate.
    for i in 0..=last_index + 2 {
        let t = i as f64 * increment;
        let height = vy * t - 0.5 * g * t * t;
        let point = origin + Vector2D::new(vx * t, height);
        if height < 0.0 || point.x < 0.0 || point.x > config.arena.width {
            break;
        }
        points.push(point);
    }
    debug!(
        "sampled {} points (v0={:.3}, angle={}°)",
        points.len(),
        v0,
        angle_degrees
    );

    Trajectory {
        points,
        launch_speed: v0,
        angle_radians: theta,
        sample_increment: increment,
    }
}

/// Index of the last sample before the shot lands or leaves the arena sideways, from the
/// closed-form flight time. `None` when that exceeds [`MAX_TRAJECTORY_SAMPLES`] or the
/// flight never ends.
fn final_sample_index(vx: f64, vy: f64, g: f64, increment: f64, config: &TrajectoryConfig) -> Option<usize> {
    let mut end = 2.0 * vy.max(0.0) / g;
    let origin_x = config.launch_origin.x;
    if vx > 0.0 {
        end = end.min((config.arena.width - origin_x) / vx);
    } else if vx < 0.0 {
        end = end.min(origin_x / -vx);
    }
    let last = (end.max(0.0) / increment).floor();
    (last.is_finite() && last < MAX_TRAJECTORY_SAMPLES as f64).then_some(last as usize)
}
