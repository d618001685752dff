//! Fixed-population collision sandbox.
//!
//! The driver owns every body for the duration of a run. One call to
//! [`Simulation::step_frame`] splits the frame time into equal sub-steps and, for each one,
//! integrates every body, reflects it off the arena walls, optionally caps its speed and
//! finally resolves every overlapping pair. Callers only ever observe the state after all
//! sub-steps of a frame have run.
use log::{debug, info, trace, warn};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use crate::integrators::integrate;
use crate::interactions::{reflect_with_restitution, resolve_all_with_bias};
use crate::models::{Arena, Body, Vector2D};
use crate::simulation::{create_bodies_from, FrameClock, ResetMode, RunState, SpawnConfig};
use crate::utils::{PhysicsError, SimulationConfig};

#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    arena: Arena,
    bodies: Vec<Body>,
    initial_bodies: Vec<Body>,
    state: RunState,
    frames_stepped: u64,
    simulated_time: f64,
    clock: FrameClock,
}

impl Simulation {
    /// Creates an idle simulation over a fixed set of bodies.
    ///
    /// # Errors
    ///
    /// Fails when the config or arena is invalid, or when any body has a non-positive mass
    /// or radius.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_particle_lab::models::{Arena, Body};
    /// use rs_particle_lab::simulation::Simulation;
    /// use rs_particle_lab::utils::SimulationConfig;
    ///
    /// let bodies = vec![
    ///     Body::from_components(20.0, 50.0, 30.0, 0.0, 10.0, 100.0).unwrap(),
    ///     Body::from_components(80.0, 50.0, -30.0, 0.0, 10.0, 100.0).unwrap(),
    /// ];
    /// let arena = Arena::new(100.0, 100.0).unwrap();
    /// let mut sim = Simulation::new(bodies, arena, SimulationConfig::default()).unwrap();
    ///
    /// sim.start();
    /// let energy = sim.total_kinetic_energy();
    /// for _ in 0..120 {
    ///     sim.step_frame(1.0 / 60.0).unwrap();
    /// }
    /// assert!((sim.total_kinetic_energy() - energy).abs() < 1e-6 * energy);
    /// ```
    pub fn new(bodies: Vec<Body>, arena: Arena, config: SimulationConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        arena.validate()?;
        for body in &bodies {
            if !(body.mass > 0.0) || !body.mass.is_finite() {
                return Err(PhysicsError::InvalidMass);
            }
            if !(body.radius > 0.0) || !body.radius.is_finite() {
                return Err(PhysicsError::InvalidRadius);
            }
        }
        Ok(Simulation {
            config,
            arena,
            initial_bodies: bodies.clone(),
            bodies,
            state: RunState::Idle,
            frames_stepped: 0,
            simulated_time: 0.0,
            clock: FrameClock::new(),
        })
    }

    /// Creates an idle simulation populated by [`create_bodies`](crate::simulation::create_bodies).
    pub fn with_random_bodies<R: Rng>(
        spawn: &SpawnConfig,
        arena: Arena,
        config: SimulationConfig,
        rng: &mut R,
    ) -> Result<Self, PhysicsError> {
        let bodies = create_bodies_from(spawn, &arena, rng)?;
        Simulation::new(bodies, arena, config)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn frames_stepped(&self) -> u64 {
        self.frames_stepped
    }

    pub fn simulated_time(&self) -> f64 {
        self.simulated_time
    }

    /// `Σ ½ m v²` over all bodies.
    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// `Σ m v` over all bodies.
    pub fn total_momentum(&self) -> Vector2D {
        self.bodies.iter().fold(Vector2D::ZERO, |acc, body| acc + body.momentum())
    }

    pub fn start(&mut self) {
        self.state = self.state.started();
        self.clock.restart();
        info!("simulation running with {} bodies", self.bodies.len());
    }

    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
            info!("simulation paused");
        }
    }

    pub fn resume(&mut self) {
        if self.state == RunState::Paused {
            self.state = RunState::Running;
            self.clock.restart();
            info!("simulation resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        self.state = self.state.toggled();
        self.clock.restart();
        debug!("simulation now {:?}", self.state);
    }

    /// Restores the bodies the simulation was created with.
    pub fn reset(&mut self, mode: ResetMode) {
        self.bodies.clone_from(&self.initial_bodies);
        self.rewind(mode);
    }

    /// Replaces the population with freshly randomised bodies, which become the new reset point.
    ///
    /// # Errors
    ///
    /// Spawning failures are returned and the current state is kept.
    pub fn reset_with<R: Rng>(&mut self, spawn: &SpawnConfig, mode: ResetMode, rng: &mut R) -> Result<(), PhysicsError> {
        let bodies = create_bodies_from(spawn, &self.arena, rng)?;
        self.initial_bodies.clone_from(&bodies);
        self.bodies = bodies;
        self.rewind(mode);
        Ok(())
    }

    fn rewind(&mut self, mode: ResetMode) {
        self.state = RunState::after_reset(mode);
        self.frames_stepped = 0;
        self.simulated_time = 0.0;
        self.clock.restart();
        info!("simulation reset to {:?}", self.state);
    }

    /// Advances one frame of `elapsed` seconds.
    ///
    /// Returns the number of sub-steps executed: zero while idle or paused, or for a zero
    /// `elapsed`. Frames longer than `max_frame_time` are clamped.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::InvalidTimestep`] for a negative or non-finite `elapsed`; nothing moves.
    pub fn step_frame(&mut self, elapsed: f64) -> Result<usize, PhysicsError> {
        if !(elapsed >= 0.0) || !elapsed.is_finite() {
            return Err(PhysicsError::InvalidTimestep);
        }
        if !self.state.is_running() || elapsed == 0.0 {
            return Ok(0);
        }
        let elapsed = if elapsed > self.config.max_frame_time {
            warn!("frame time {:.3}s clamped to {:.3}s", elapsed, self.config.max_frame_time);
            self.config.max_frame_time
        } else {
            elapsed
        };

        let substeps = self.config.substeps;
        let dt = elapsed / substeps as f64;
        if dt == 0.0 {
            trace!("frame time {:e}s is too short to split into {} sub-steps", elapsed, substeps);
            return Ok(0);
        }
        let mut contacts = 0;
        for _ in 0..substeps {
            contacts += self.substep(dt)?;
        }
        self.frames_stepped += 1;
        self.simulated_time += elapsed;
        trace!("frame {}: {} contacts over {} sub-steps", self.frames_stepped, contacts, substeps);
        Ok(substeps)
    }

    /// Advances by the wall-clock time since the previous call, or since the run was last
    /// started, resumed or reset.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_particle_lab::models::{Arena, Body};
    /// use rs_particle_lab::simulation::Simulation;
    /// use rs_particle_lab::utils::SimulationConfig;
    ///
    /// let body = Body::from_components(50.0, 50.0, 10.0, 0.0, 5.0, 25.0).unwrap();
    /// let arena = Arena::new(100.0, 100.0).unwrap();
    /// let mut sim = Simulation::new(vec![body], arena, SimulationConfig::default()).unwrap();
    /// sim.start();
    /// std::thread::sleep(std::time::Duration::from_millis(5));
    /// assert_eq!(sim.step_wall_clock().unwrap(), 3);
    /// ```
    pub fn step_wall_clock(&mut self) -> Result<usize, PhysicsError> {
        let elapsed = self.clock.tick();
        self.step_frame(elapsed)
    }

    /// Integrate, reflect and cap every body, then resolve all pairs. Returns the contact count.
    fn substep(&mut self, dt: f64) -> Result<usize, PhysicsError> {
        let gravity = self.config.gravity;
        let arena = self.arena;
        let restitution = self.config.wall_restitution;
        let max_speed = self.config.max_speed;

        #[cfg(feature = "parallel")]
        self.bodies
            .par_iter_mut()
            .try_for_each(|body| advance_body(body, gravity, &arena, restitution, max_speed, dt))?;

        #[cfg(not(feature = "parallel"))]
        for body in self.bodies.iter_mut() {
            advance_body(body, gravity, &arena, restitution, max_speed, dt)?;
        }

        Ok(resolve_all_with_bias(&mut self.bodies, self.config.separation_bias))
    }
}

fn advance_body(
    body: &mut Body,
    gravity: Vector2D,
    arena: &Arena,
    restitution: f64,
    max_speed: Option<f64>,
    dt: f64,
) -> Result<(), PhysicsError> {
    integrate(body, gravity, dt)?;
    reflect_with_restitution(body, arena, restitution);
    if let Some(max_speed) = max_speed {
        let speed = body.speed();
        if speed > max_speed {
            body.velocity *= max_speed / speed;
        }
    }
    Ok(())
}
