// src/apis/particle_lab.rs

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::models::{Arena, Body, Vector2D};
use crate::projectile::{check_hit, sample_trajectory, Target, Trajectory};
use crate::simulation::{create_bodies, Simulation};
use crate::spring::SpringSystem;
use crate::utils::{is_positive_finite, PhysicsError, SimulationConfig, SpringConfig, TrajectoryConfig};

/// Settings for every mode a [`ParticleLab`] runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabConfig {
    pub simulation: SimulationConfig,
    pub trajectory: TrajectoryConfig,
    pub spring: SpringConfig,
    /// Radius used by [`ParticleLab::check_hit`], in world units.
    pub projectile_radius: f64,
    /// Seed for body spawning. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for LabConfig {
    fn default() -> Self {
        LabConfig {
            simulation: SimulationConfig::default(),
            trajectory: TrajectoryConfig::default(),
            spring: SpringConfig::default(),
            projectile_radius: 0.1,
            seed: None,
        }
    }
}

/// A simplified interface over the three simulation modes.
///
/// This is the surface a presentation layer drives once per frame: a collision sandbox,
/// projectile shots with hit testing, and a vertical spring oscillator. Every mode keeps its
/// own state, so switching between them in the UI never resets the others.
pub struct ParticleLab {
    config: LabConfig,
    rng: StdRng,
    simulation: Option<Simulation>,
    spring: SpringSystem,
}

impl ParticleLab {
    /// Creates a lab with no bodies and a running spring at rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_particle_lab::apis::{LabConfig, ParticleLab};
    ///
    /// let lab = ParticleLab::new(LabConfig::default()).unwrap();
    /// assert_eq!(lab.total_kinetic_energy(), 0.0);
    /// assert_eq!(lab.oscillation_count(), 0);
    /// ```
    pub fn new(config: LabConfig) -> Result<Self, PhysicsError> {
        config.simulation.validate()?;
        config.trajectory.validate()?;
        if !is_positive_finite(config.projectile_radius) {
            return Err(PhysicsError::InvalidRadius);
        }
        let mut spring = SpringSystem::new(config.spring)?;
        spring.start();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(ParticleLab {
            config,
            rng,
            simulation: None,
            spring,
        })
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    /// Spawns `count` non-overlapping bodies and starts the collision sandbox with them.
    ///
    /// Any previous sandbox run is replaced. On error the previous run is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_particle_lab::apis::{LabConfig, ParticleLab};
    /// use rs_particle_lab::models::Arena;
    ///
    /// let mut lab = ParticleLab::new(LabConfig { seed: Some(3), ..LabConfig::default() }).unwrap();
    /// let arena = Arena::new(800.0, 600.0).unwrap();
    /// lab.create_bodies(10, arena, (50.0, 150.0), (10.0, 20.0)).unwrap();
    ///
    /// assert_eq!(lab.step_frame(1.0 / 60.0).unwrap(), 3);
    /// assert!(lab.total_kinetic_energy() > 0.0);
    /// ```
    pub fn create_bodies(
        &mut self,
        count: usize,
        arena: Arena,
        speed_range: (f64, f64),
        radius_range: (f64, f64),
    ) -> Result<&[Body], PhysicsError> {
        let bodies = create_bodies(count, &arena, speed_range, radius_range, &mut self.rng)?;
        let mut simulation = Simulation::new(bodies, arena, self.config.simulation)?;
        simulation.start();
        info!("collision sandbox started with {} bodies", count);
        Ok(self.simulation.insert(simulation).bodies())
    }

    pub fn simulation(&self) -> Option<&Simulation> {
        self.simulation.as_ref()
    }

    pub fn simulation_mut(&mut self) -> Option<&mut Simulation> {
        self.simulation.as_mut()
    }

    /// Advances the collision sandbox by one rendered frame.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::InvalidState`] before [`create_bodies`](Self::create_bodies) has run,
    /// and [`PhysicsError::InvalidTimestep`] for a negative or non-finite `elapsed`.
    pub fn step_frame(&mut self, elapsed: f64) -> Result<usize, PhysicsError> {
        match self.simulation.as_mut() {
            Some(simulation) => simulation.step_frame(elapsed),
            None => Err(PhysicsError::InvalidState("no bodies have been created".to_string())),
        }
    }

    /// Advances the collision sandbox by the wall-clock time since its previous frame.
    pub fn step_wall_clock(&mut self) -> Result<usize, PhysicsError> {
        match self.simulation.as_mut() {
            Some(simulation) => simulation.step_wall_clock(),
            None => Err(PhysicsError::InvalidState("no bodies have been created".to_string())),
        }
    }

    /// Total kinetic energy of the sandbox bodies, `0.0` before any are created.
    pub fn total_kinetic_energy(&self) -> f64 {
        self.simulation
            .as_ref()
            .map_or(0.0, Simulation::total_kinetic_energy)
    }

    /// Samples a shot with the lab's trajectory settings. Never fails; see
    /// [`sample_trajectory`].
    pub fn fire_projectile(&self, mass: f64, angle_degrees: f64, energy: f64) -> Trajectory {
        sample_trajectory(mass, angle_degrees, energy, &self.config.trajectory)
    }

    /// Tests a projectile at `point` against `target` using the configured projectile radius.
    pub fn check_hit(&self, point: Vector2D, target: &Target) -> bool {
        check_hit(point, self.config.projectile_radius, target)
    }

    pub fn spring(&self) -> &SpringSystem {
        &self.spring
    }

    pub fn spring_mut(&mut self) -> &mut SpringSystem {
        &mut self.spring
    }

    /// Advances the spring oscillator by one rendered frame.
    pub fn spring_step(&mut self, elapsed: f64) -> Result<usize, PhysicsError> {
        self.spring.advance(elapsed)
    }

    pub fn oscillation_count(&self) -> u32 {
        self.spring.oscillation_count()
    }
}
