use log::{debug, info};
use rand::Rng;
use crate::models::{Arena, Vector2D};
use crate::projectile::{check_hit, sample_trajectory, Target, TargetPlacement, Trajectory, TrajectoryPlayback};
use crate::utils::{is_positive_finite, PhysicsError, TrajectoryConfig};

/// Rules and geometry of the target-shooting game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub trajectory: TrajectoryConfig,
    pub lives: u32,
    pub hits_to_win: u32,
    pub projectile_radius: f64,
    pub target_width: f64,
    pub target_height: f64,
    pub placement: TargetPlacement,
}

impl Default for GameConfig {
    /// Metric version of the reference game: an 800x600 px field at 50 px per meter.
    fn default() -> Self {
        GameConfig {
            trajectory: TrajectoryConfig::default(),
            lives: 5,
            hits_to_win: 5,
            projectile_radius: 0.1,
            target_width: 0.2,
            target_height: 0.8,
            placement: TargetPlacement {
                x_range: (8.0, 15.0),
                y_range: (0.4, 5.2),
            },
        }
    }
}

impl GameConfig {
    pub fn arena(&self) -> Arena {
        self.trajectory.arena
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        self.trajectory.validate()?;
        if self.lives == 0 || self.hits_to_win == 0 {
            return Err(PhysicsError::InvalidState("lives and hits to win must be positive".to_string()));
        }
        if !is_positive_finite(self.projectile_radius) {
            return Err(PhysicsError::InvalidRadius);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Result of advancing the shot in flight by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotOutcome {
    /// No shot is in the air.
    Idle,
    InFlight(Vector2D),
    Hit(Vector2D),
    Miss,
}

/// Fire-at-a-target game: a shot is sampled up front and then replayed one point per frame.
#[derive(Debug, Clone)]
pub struct ProjectileGame<R: Rng> {
    config: GameConfig,
    rng: R,
    target: Target,
    lives: u32,
    hits: u32,
    status: GameStatus,
    shot: Option<TrajectoryPlayback>,
}

impl<R: Rng> ProjectileGame<R> {
    /// Starts a game with the target at a random allowed position.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, PhysicsError> {
        config.validate()?;
        let arena = config.arena();
        let (x, y) = (config.placement.x_range.0, config.placement.y_range.0);
        let mut target = Target::new(x, y, config.target_width, config.target_height)?;
        target.relocate(&config.placement, &arena, &mut rng)?;
        Ok(ProjectileGame {
            config,
            rng,
            target,
            lives: config.lives,
            hits: 0,
            status: GameStatus::Playing,
            shot: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Puts the target at a caller-chosen position.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::InvalidRange`] if the rectangle is malformed or not fully inside the arena.
    pub fn place_target(&mut self, target: Target) -> Result<(), PhysicsError> {
        let target = Target::new(target.x, target.y, target.width, target.height)?;
        if !target.is_inside(&self.config.arena()) {
            return Err(PhysicsError::InvalidRange("target must lie inside the arena".to_string()));
        }
        self.target = target;
        Ok(())
    }

    pub fn shot_in_flight(&self) -> bool {
        self.shot.is_some()
    }

    /// Samples a new shot and puts it in the air.
    ///
    /// The full trajectory is returned so the caller can draw its preview.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::InvalidMass`], [`PhysicsError::InvalidAngle`] or
    /// [`PhysicsError::InvalidRange`] for unusable launch parameters, and
    /// [`PhysicsError::InvalidState`] while a shot is already in flight or the game is over.
    pub fn fire(&mut self, mass: f64, angle_degrees: f64, energy: f64) -> Result<Trajectory, PhysicsError> {
        if self.status != GameStatus::Playing {
            return Err(PhysicsError::InvalidState("game is over".to_string()));
        }
        if self.shot.is_some() {
            return Err(PhysicsError::InvalidState("a shot is already in flight".to_string()));
        }
        if !is_positive_finite(mass) {
            return Err(PhysicsError::InvalidMass);
        }
        if !angle_degrees.is_finite() {
            return Err(PhysicsError::InvalidAngle);
        }
        if !(energy >= 0.0) || !energy.is_finite() {
            return Err(PhysicsError::InvalidRange(format!("launch energy {} must be finite and non-negative", energy)));
        }

        let trajectory = sample_trajectory(mass, angle_degrees, energy, &self.config.trajectory);
        debug!("fired: {} samples", trajectory.len());
        self.shot = Some(trajectory.clone().into_playback());
        Ok(trajectory)
    }

    /// Moves the shot to its next sample and tests it against the target.
    ///
    /// A hit scores and relocates the target. A shot that runs out of samples costs a life.
    pub fn advance(&mut self) -> Result<ShotOutcome, PhysicsError> {
        let Some(playback) = self.shot.as_mut() else {
            return Ok(ShotOutcome::Idle);
        };

        match playback.next() {
            Some(point) if check_hit(point, self.config.projectile_radius, &self.target) => {
                self.shot = None;
                self.hits += 1;
                info!("target hit ({}/{})", self.hits, self.config.hits_to_win);
                if self.hits >= self.config.hits_to_win {
                    self.status = GameStatus::Won;
                    info!("game won with {} lives left", self.lives);
                } else {
                    self.relocate_target()?;
                }
                Ok(ShotOutcome::Hit(point))
            }
            Some(point) => Ok(ShotOutcome::InFlight(point)),
            None => {
                self.shot = None;
                self.lives = self.lives.saturating_sub(1);
                info!("missed, {} lives left", self.lives);
                if self.lives == 0 {
                    self.status = GameStatus::Lost;
                    info!("game lost with {} hits", self.hits);
                }
                Ok(ShotOutcome::Miss)
            }
        }
    }

    /// Restores lives and score, drops any shot in flight and moves the target.
    pub fn reset(&mut self) -> Result<(), PhysicsError> {
        self.relocate_target()?;
        self.lives = self.config.lives;
        self.hits = 0;
        self.status = GameStatus::Playing;
        self.shot = None;
        info!("game reset");
        Ok(())
    }

    fn relocate_target(&mut self) -> Result<(), PhysicsError> {
        let arena = self.config.arena();
        self.target.relocate(&self.config.placement, &arena, &mut self.rng)
    }
}
