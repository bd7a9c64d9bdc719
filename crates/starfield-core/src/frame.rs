//! Per-frame inputs from the host and the read-only context derived from them.
//!
//! Viewport size, frame index and influence are passed explicitly into every
//! particle update instead of living in globals.

use crate::constants::*;
use crate::control::{normalized_influence, smoothstep};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Shape factor in [0.65, 1]; smaller on narrow or short viewports.
    pub fn screen_factor(&self) -> f32 {
        (self.width.min(self.height) / SCREEN_FACTOR_REF)
            .clamp(SCREEN_FACTOR_MIN, SCREEN_FACTOR_MAX)
    }
}

/// What the host hands the core every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInputs {
    pub viewport: Viewport,
    pub frame_index: u64,
    /// Monotonic clock in milliseconds, same origin as the sweep start.
    pub now_ms: f64,
    pub pointer_x: f32,
}

/// Frame-scoped values shared read-only by every particle update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameContext {
    pub viewport: Viewport,
    pub screen_factor: f32,
    /// Smoothstepped influence in [0, 1].
    pub eased: f32,
    pub z_noise: f32,
    pub t_noise: f32,
}

impl FrameContext {
    /// `influence` is in viewport-width units, as produced by the control signal.
    pub fn new(viewport: Viewport, frame_index: u64, influence: f32) -> Self {
        let normalized = normalized_influence(influence, viewport.width);
        let frame = frame_index as f32;
        Self {
            viewport,
            screen_factor: viewport.screen_factor(),
            eased: smoothstep(normalized),
            z_noise: frame * Z_NOISE_PER_FRAME,
            t_noise: frame * T_NOISE_PER_FRAME,
        }
    }
}
