use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use super::HeightField;
use crate::error::{LabError, LabResult};

#[derive(Debug, Clone)]
pub struct NoiseHeightFieldDesc {
    pub rows: usize,
    pub cols: usize,
    pub x_step: f32,
    pub z_step: f32,
    pub seed: u32,
    /// Noise frequency per grid sample.
    pub frequency: f64,
    pub octaves: usize,
    /// Peak height above and below zero.
    pub amplitude: f32,
}

impl Default for NoiseHeightFieldDesc {
    fn default() -> Self {
        Self {
            rows: 256,
            cols: 256,
            x_step: 10.0,
            z_step: 10.0,
            seed: 30,
            frequency: 0.015,
            octaves: 4,
            amplitude: 250.0,
        }
    }
}

impl NoiseHeightFieldDesc {
    pub fn validate(&self) -> Result<(), String> {
        if self.rows == 0 || self.cols == 0 {
            return Err("rows and cols must be greater than 0".to_string());
        }
        if self.x_step <= 0.0 || self.z_step <= 0.0 {
            return Err("x_step and z_step must be greater than 0".to_string());
        }
        if self.octaves == 0 {
            return Err("octaves must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Fractal Perlin terrain, deterministic for a given descriptor.
pub fn generate_noise_height_field(desc: &NoiseHeightFieldDesc) -> LabResult<HeightField> {
    desc.validate().map_err(|msg| LabError::malformed(0, msg))?;

    let fbm = Fbm::<Perlin>::new(desc.seed)
        .set_octaves(desc.octaves)
        .set_frequency(desc.frequency);

    HeightField::from_fn(desc.rows, desc.cols, desc.x_step, desc.z_step, |row, col| {
        fbm.get([col as f64, row as f64]) as f32 * desc.amplitude
    })
}
