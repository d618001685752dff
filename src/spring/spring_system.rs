//! Vertical mass-spring oscillator.
//!
//! A single bob hangs from a fixed anchor on a massless spring. The spring axis points
//! straight down from the anchor, and the extension `s` is measured along it, so in the
//! y-up world frame `s = anchor.y - bob.y`. The bob feels
//!
//! `F = -k (s - rest_length) + m g`   (along the downward axis)
//!
//! and is advanced with semi-implicit Euler. A floor below the anchor bounces the bob
//! back with a lossy restitution coefficient.
use std::collections::VecDeque;
use log::{debug, info};
use crate::integrators::integrate;
use crate::models::{Body, Vector2D};
use crate::simulation::{ResetMode, RunState};
use crate::utils::{is_positive_finite, sign, OscillationDetection, PhysicsError, SpringConfig};

/// Counts half-oscillations of the bob.
#[derive(Debug, Clone, PartialEq)]
pub struct OscillationCounter {
    policy: OscillationDetection,
    previous: Option<i8>,
    last_counted: Option<i8>,
    count: u32,
}

impl OscillationCounter {
    pub fn new(policy: OscillationDetection) -> Self {
        OscillationCounter {
            policy,
            previous: None,
            last_counted: None,
            count: 0,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn policy(&self) -> OscillationDetection {
        self.policy
    }

    pub fn reset(&mut self) {
        *self = OscillationCounter::new(self.policy);
    }

    /// Feeds one sample. `offset` is the bob's height above equilibrium.
    ///
    /// Returns `true` when the sample completed a new half-oscillation.
    ///
    /// A flip is only counted when it goes the other way from the last counted flip,
    /// so a bob hovering on the threshold cannot inflate the count.
    pub fn observe(&mut self, offset: f64, velocity: f64) -> bool {
        let current = match self.policy {
            // Exactly on equilibrium counts as below, matching a strict `above` test.
            OscillationDetection::PositionCrossing => if offset > 0.0 { 1 } else { -1 },
            OscillationDetection::VelocityReversal => match sign(velocity) {
                // A sample at rest carries no direction; wait for the next one.
                0 => return false,
                s => s,
            },
        };

        let mut counted = false;
        if let Some(previous) = self.previous {
            if previous != current && self.last_counted != Some(current) {
                self.count += 1;
                self.last_counted = Some(current);
                counted = true;
            }
        }
        self.previous = Some(current);
        counted
    }
}

/// A bob on a vertical spring hanging from a fixed anchor.
#[derive(Debug, Clone)]
pub struct SpringSystem {
    config: SpringConfig,
    body: Body,
    state: RunState,
    counter: OscillationCounter,
    trail: VecDeque<Vector2D>,
    elapsed: f64,
}

impl SpringSystem {
    /// Builds an idle oscillator with the bob at rest length below the anchor.
    ///
    /// # Errors
    ///
    /// Propagates [`SpringConfig::validate`] failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_particle_lab::spring::SpringSystem;
    /// use rs_particle_lab::utils::SpringConfig;
    ///
    /// let mut spring = SpringSystem::new(SpringConfig::default()).unwrap();
    /// spring.start();
    /// for _ in 0..600 {
    ///     spring.advance(1.0 / 60.0).unwrap();
    /// }
    /// assert!(spring.oscillation_count() > 0);
    /// ```
    pub fn new(config: SpringConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        let body = Body::new(
            Self::rest_position(&config),
            Vector2D::ZERO,
            config.radius,
            config.mass,
        )?;
        Ok(SpringSystem {
            config,
            body,
            state: RunState::Idle,
            counter: OscillationCounter::new(config.detection),
            trail: VecDeque::with_capacity(config.trail_length),
            elapsed: 0.0,
        })
    }

    fn rest_position(config: &SpringConfig) -> Vector2D {
        Vector2D::new(config.anchor.x, config.anchor.y - config.rest_length)
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn anchor(&self) -> Vector2D {
        self.config.anchor
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn oscillation_count(&self) -> u32 {
        self.counter.count()
    }

    /// Simulated seconds since the last start or reset.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Most recent bob positions, oldest first.
    pub fn trail(&self) -> impl Iterator<Item = &Vector2D> {
        self.trail.iter()
    }

    /// Signed spring extension along the downward axis.
    pub fn extension(&self) -> f64 {
        self.config.anchor.y - self.body.position.y
    }

    /// Spring force alone, `-k (s - rest_length)`, along the downward axis.
    pub fn restoring_force(&self) -> f64 {
        -self.config.spring_constant * (self.extension() - self.config.rest_length)
    }

    /// Extension at which the spring balances gravity: `rest_length + m g / k`.
    pub fn equilibrium_extension(&self) -> f64 {
        self.config.rest_length + self.config.mass * self.config.world_gravity() / self.config.spring_constant
    }

    /// World height of the equilibrium position.
    pub fn equilibrium_height(&self) -> f64 {
        self.config.anchor.y - self.equilibrium_extension()
    }

    /// Kinetic + gravitational (relative to the floor) + elastic energy.
    pub fn total_energy(&self) -> f64 {
        let stretch = self.extension() - self.config.rest_length;
        self.body.kinetic_energy()
            + self.config.mass * self.config.world_gravity() * (self.body.position.y - self.config.floor)
            + 0.5 * self.config.spring_constant * stretch * stretch
    }

    /// Changes `k` while running, as a slider would.
    pub fn set_spring_constant(&mut self, spring_constant: f64) -> Result<(), PhysicsError> {
        if !is_positive_finite(spring_constant) {
            return Err(PhysicsError::InvalidSpringConstant);
        }
        self.config.spring_constant = spring_constant;
        Ok(())
    }

    /// Changes the bob's mass while running.
    pub fn set_mass(&mut self, mass: f64) -> Result<(), PhysicsError> {
        if !is_positive_finite(mass) {
            return Err(PhysicsError::InvalidMass);
        }
        self.config.mass = mass;
        self.body.mass = mass;
        Ok(())
    }

    /// Moves the bob to `extension` below the anchor, at rest.
    ///
    /// The counter and trail are cleared; the run state is kept.
    pub fn place_at(&mut self, extension: f64) -> Result<(), PhysicsError> {
        if !extension.is_finite() {
            return Err(PhysicsError::InvalidRange("extension must be finite".to_string()));
        }
        self.body.position = Vector2D::new(self.config.anchor.x, self.config.anchor.y - extension);
        self.body.velocity = Vector2D::ZERO;
        self.counter.reset();
        self.trail.clear();
        self.elapsed = 0.0;
        Ok(())
    }

    /// Starts (or resumes) the run. Starting from idle releases the bob from rest length.
    pub fn start(&mut self) {
        if self.state == RunState::Idle {
            self.rewind();
        }
        self.state = self.state.started();
        info!("spring simulation running (k={}, m={})", self.config.spring_constant, self.config.mass);
    }

    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
            debug!("spring simulation paused");
        }
    }

    pub fn toggle_pause(&mut self) {
        self.state = self.state.toggled();
        debug!("spring simulation now {:?}", self.state);
    }

    /// Puts the bob back at rest length with zero velocity and clears the counter.
    pub fn reset(&mut self, mode: ResetMode) {
        self.rewind();
        self.state = RunState::after_reset(mode);
        info!("spring simulation reset to {:?}", self.state);
    }

    fn rewind(&mut self) {
        self.body.position = Self::rest_position(&self.config);
        self.body.velocity = Vector2D::ZERO;
        self.counter.reset();
        self.trail.clear();
        self.elapsed = 0.0;
    }

    /// Advances the oscillator by one frame of `elapsed` seconds, split into the configured
    /// number of sub-steps. Does nothing unless running.
    ///
    /// Returns the number of sub-steps taken.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::InvalidTimestep`] for a negative or non-finite `elapsed`.
    pub fn advance(&mut self, elapsed: f64) -> Result<usize, PhysicsError> {
        if !(elapsed >= 0.0) || !elapsed.is_finite() {
            return Err(PhysicsError::InvalidTimestep);
        }
        if !self.state.is_running() || elapsed == 0.0 {
            return Ok(0);
        }
        let substeps = self.config.substeps;
        let dt = elapsed / substeps as f64;
        for _ in 0..substeps {
            self.step(dt)?;
        }
        Ok(substeps)
    }

    /// One integration step of `dt` seconds, regardless of the run state.
    ///
    /// Order: Hooke + gravity force, semi-implicit Euler, oscillation counting,
    /// floor bounce, trail sample.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::InvalidTimestep`] for a non-positive `dt`; the state is unchanged.
    pub fn step(&mut self, dt: f64) -> Result<(), PhysicsError> {
        let g = self.config.world_gravity();
        let force_down = self.restoring_force() + self.config.mass * g;
        let acceleration = Vector2D::new(0.0, -force_down / self.config.mass);
        integrate(&mut self.body, acceleration, dt)?;
        self.elapsed += dt;

        let offset = self.body.position.y - self.equilibrium_height();
        if self.counter.observe(offset, self.body.velocity.y) {
            debug!("oscillation #{} at t={:.3}s", self.counter.count(), self.elapsed);
        }

        let floor = self.config.floor + self.body.radius;
        if self.body.position.y < floor {
            self.body.position.y = floor;
            self.body.velocity.y = -self.body.velocity.y * self.config.restitution;
        }

        if self.config.trail_length > 0 {
            if self.trail.len() == self.config.trail_length {
                self.trail.pop_front();
            }
            self.trail.push_back(self.body.position);
        }
        Ok(())
    }
}
