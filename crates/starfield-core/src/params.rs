//! Construction-time configuration for a [`crate::Starfield`].
//!
//! The simulation itself never fails; only the parameters handed to it at
//! startup are checked, once, by [`StarfieldParams::validate`].

use crate::color::Rgb;
use crate::constants::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamsError {
    #[error("noise octaves must be in 1..={max}, got {got}")]
    Octaves { got: u32, max: u32 },
    #[error("noise persistence must be finite and non-negative, got {0}")]
    Persistence(f64),
    #[error("invalid hex colour {0:?}, expected #RRGGBB")]
    BadColor(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldParams {
    pub star_count: usize,
    /// Seed for per-particle traits and recycle placement.
    pub seed: u64,
    pub noise_seed: u32,
    pub noise_octaves: u32,
    pub noise_persistence: f64,
    pub star_color: Rgb,
    pub gradient_low: Rgb,
    pub gradient_high: Rgb,
    pub glow_color: Rgb,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            star_count: TARGET_STARS,
            seed: DEFAULT_SEED,
            noise_seed: 0,
            noise_octaves: NOISE_OCTAVES,
            noise_persistence: NOISE_PERSISTENCE,
            star_color: STAR_COLOR,
            gradient_low: GRADIENT_LOW,
            gradient_high: GRADIENT_HIGH,
            glow_color: GLOW_COLOR,
        }
    }
}

impl StarfieldParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.noise_octaves == 0 || self.noise_octaves > NOISE_OCTAVES_MAX {
            return Err(ParamsError::Octaves {
                got: self.noise_octaves,
                max: NOISE_OCTAVES_MAX,
            });
        }
        if !self.noise_persistence.is_finite() || self.noise_persistence < 0.0 {
            return Err(ParamsError::Persistence(self.noise_persistence));
        }
        Ok(())
    }
}
