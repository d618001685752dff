//! Runs every mode of the lab headless for a few simulated seconds and logs what happens.
//!
//! `cargo run --example basic_simulation` (add `RUST_LOG=debug` for per-shot details).
use log::info;
use rs_particle_lab::apis::{LabConfig, ParticleLab};
use rs_particle_lab::models::Arena;
use rs_particle_lab::projectile::{GameConfig, GameStatus, ProjectileGame, ShotOutcome};
use rs_particle_lab::utils::{logging, PhysicsError};
use rand::rngs::StdRng;
use rand::SeedableRng;

const FRAME: f64 = 1.0 / 60.0;

fn main() -> Result<(), PhysicsError> {
    logging::init(false);

    let mut lab = ParticleLab::new(LabConfig { seed: Some(2024), ..LabConfig::default() })?;

    let arena = Arena::new(800.0, 600.0)?;
    lab.create_bodies(10, arena, (50.0, 150.0), (10.0, 20.0))?;
    let initial = lab.total_kinetic_energy();
    for _ in 0..600 {
        lab.step_frame(FRAME)?;
    }
    info!(
        "collisions: kinetic energy {:.1} -> {:.1} after 10 s",
        initial,
        lab.total_kinetic_energy()
    );

    for _ in 0..600 {
        lab.spring_step(FRAME)?;
    }
    info!(
        "spring: {} oscillations in 10 s, equilibrium at y = {:.3} m",
        lab.oscillation_count(),
        lab.spring().equilibrium_height()
    );

    let mut game = ProjectileGame::new(GameConfig::default(), StdRng::seed_from_u64(7))?;
    let mut angle = 20.0;
    while game.status() == GameStatus::Playing {
        game.fire(1.0, angle, 80.0)?;
        loop {
            match game.advance()? {
                ShotOutcome::InFlight(_) => continue,
                outcome => {
                    info!("shot at {}°: {:?}", angle, outcome);
                    break;
                }
            }
        }
        angle += 7.5;
    }
    info!("game over: {:?} with {} hits", game.status(), game.hits());
    Ok(())
}
