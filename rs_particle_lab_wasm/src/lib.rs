// rs_particle_lab_wasm/src/lib.rs
// Browser bindings for the particle lab. Snapshots cross the boundary as flat Float64Arrays.

use js_sys::Float64Array;
use wasm_bindgen::prelude::*;
use rs_particle_lab::apis::{LabConfig, ParticleLab};
use rs_particle_lab::models::{Arena, Vector2D};
use rs_particle_lab::projectile::Target;

fn to_js(error: rs_particle_lab::utils::PhysicsError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[wasm_bindgen]
pub struct WasmParticleLab {
    lab: ParticleLab,
}

#[wasm_bindgen]
impl WasmParticleLab {
    /// `seed` below zero seeds from the browser's entropy source.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> Result<WasmParticleLab, JsValue> {
        let seed = (seed >= 0.0).then(|| seed as u64);
        let lab = ParticleLab::new(LabConfig { seed, ..LabConfig::default() }).map_err(to_js)?;
        Ok(Self { lab })
    }

    #[wasm_bindgen]
    pub fn create_bodies(
        &mut self,
        count: usize,
        width: f64,
        height: f64,
        min_speed: f64,
        max_speed: f64,
        min_radius: f64,
        max_radius: f64,
    ) -> Result<(), JsValue> {
        let arena = Arena::new(width, height).map_err(to_js)?;
        self.lab
            .create_bodies(count, arena, (min_speed, max_speed), (min_radius, max_radius))
            .map(|_| ())
            .map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn step_frame(&mut self, elapsed: f64) -> Result<usize, JsValue> {
        self.lab.step_frame(elapsed).map_err(to_js)
    }

    /// Bodies as `[x, y, vx, vy, radius, mass]` records.
    #[wasm_bindgen]
    pub fn bodies(&self) -> Float64Array {
        let flat: Vec<f64> = self
            .lab
            .simulation()
            .map(|sim| {
                sim.bodies()
                    .iter()
                    .flat_map(|b| [b.x(), b.y(), b.vx(), b.vy(), b.radius, b.mass])
                    .collect()
            })
            .unwrap_or_default();
        Float64Array::from(flat.as_slice())
    }

    #[wasm_bindgen]
    pub fn total_kinetic_energy(&self) -> f64 {
        self.lab.total_kinetic_energy()
    }

    /// Trajectory as `[x0, y0, x1, y1, ...]`.
    #[wasm_bindgen]
    pub fn fire_projectile(&self, mass: f64, angle_degrees: f64, energy: f64) -> Float64Array {
        let flat: Vec<f64> = self
            .lab
            .fire_projectile(mass, angle_degrees, energy)
            .points()
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect();
        Float64Array::from(flat.as_slice())
    }

    #[wasm_bindgen]
    pub fn check_hit(&self, x: f64, y: f64, target_x: f64, target_y: f64, target_width: f64, target_height: f64) -> Result<bool, JsValue> {
        let target = Target::new(target_x, target_y, target_width, target_height).map_err(to_js)?;
        Ok(self.lab.check_hit(Vector2D::new(x, y), &target))
    }

    #[wasm_bindgen]
    pub fn spring_step(&mut self, elapsed: f64) -> Result<usize, JsValue> {
        self.lab.spring_step(elapsed).map_err(to_js)
    }

    /// Spring bob as `[x, y, vx, vy]`.
    #[wasm_bindgen]
    pub fn spring_bob(&self) -> Float64Array {
        let b = self.lab.spring().body();
        Float64Array::from([b.x(), b.y(), b.vx(), b.vy()].as_slice())
    }

    #[wasm_bindgen]
    pub fn oscillation_count(&self) -> u32 {
        self.lab.oscillation_count()
    }
}
