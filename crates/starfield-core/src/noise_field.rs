//! Coherent noise sampler shared by every particle.
//!
//! Octaves of Perlin noise are summed at doubling frequencies with
//! geometric amplitude falloff, then normalised into [0, 1]. The sampler holds
//! no per-frame state: the time dimension is passed in by the caller.

use noise::{NoiseFn, Perlin};

#[derive(Clone, Debug)]
pub struct NoiseField {
    perlin: Perlin,
    octaves: u32,
    persistence: f64,
}

impl NoiseField {
    pub fn new(seed: u32, octaves: u32, persistence: f64) -> Self {
        Self {
            perlin: Perlin::new(seed),
            octaves: octaves.max(1),
            persistence,
        }
    }

    /// Sample at `(x, y, z)`. Always in [0, 1], continuous in every argument.
    pub fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        let (sum, norm, _, _) = (0..self.octaves).fold(
            (0.0_f64, 0.0_f64, 1.0_f64, 1.0_f64),
            |(sum, norm, amp, freq), _| {
                let v = self
                    .perlin
                    .get([x as f64 * freq, y as f64 * freq, z as f64 * freq]);
                (
                    sum + (v * 0.5 + 0.5) * amp,
                    norm + amp,
                    amp * self.persistence,
                    freq * 2.0,
                )
            },
        );
        if norm <= 0.0 {
            return 0.5;
        }
        (sum / norm).clamp(0.0, 1.0) as f32
    }

    /// Two-argument form; the third coordinate is pinned to zero.
    pub fn sample2(&self, x: f32, y: f32) -> f32 {
        self.sample(x, y, 0.0)
    }
}
