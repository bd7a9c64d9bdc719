//! Top-level driver the host calls once per rendered frame.
//!
//! Owns the control signal, noise, particle pool, generator and the cached
//! background, and rebakes the background whenever the viewport changes.

use crate::background::Background;
use crate::control::{ControlSignal, PointerKind};
use crate::field::{FrameStats, ParticleField, Vertex};
use crate::frame::{FrameContext, FrameInputs, Viewport};
use crate::noise_field::NoiseField;
use crate::params::{ParamsError, StarfieldParams};
use crate::particle::Particle;
use rand::prelude::*;

/// Everything the host needs to drive one starfield: control signal, noise,
/// particle pool and the cached background for the current viewport.
pub struct Starfield {
    params: StarfieldParams,
    control: ControlSignal,
    noise: NoiseField,
    field: ParticleField,
    rng: StdRng,
    viewport: Viewport,
    background: Background,
}

impl Starfield {
    pub fn new(
        params: StarfieldParams,
        viewport: Viewport,
        start_ms: f64,
    ) -> Result<Self, ParamsError> {
        params.validate()?;
        let mut rng = StdRng::seed_from_u64(params.seed);
        let field = ParticleField::new(params.star_count, viewport, &mut rng);
        let noise = NoiseField::new(
            params.noise_seed,
            params.noise_octaves,
            params.noise_persistence,
        );
        let background = Background::bake(viewport, &params);
        log::info!(
            "[starfield] stars={} seed={} viewport={}x{} noise(octaves={}, persistence={:.2})",
            params.star_count,
            params.seed,
            viewport.width,
            viewport.height,
            params.noise_octaves,
            params.noise_persistence
        );
        Ok(Self {
            params,
            control: ControlSignal::new(start_ms),
            noise,
            field,
            rng,
            viewport,
            background,
        })
    }

    /// Run one frame and return its triangle list (6 vertices per visible star).
    pub fn frame(&mut self, inputs: FrameInputs) -> &[Vertex] {
        if inputs.viewport != self.viewport {
            self.resize(inputs.viewport);
        }
        let influence = self
            .control
            .tick(inputs.now_ms, inputs.viewport.width, inputs.pointer_x);
        let ctx = FrameContext::new(inputs.viewport, inputs.frame_index, influence);
        self.field.step_and_emit(&ctx, &self.noise, &mut self.rng)
    }

    /// Rebake the background. Particles keep their absolute positions.
    pub fn resize(&mut self, viewport: Viewport) {
        log::info!(
            "[starfield] resize {}x{} -> {}x{}",
            self.viewport.width,
            self.viewport.height,
            viewport.width,
            viewport.height
        );
        self.viewport = viewport;
        self.background = Background::bake(viewport, &self.params);
    }

    pub fn on_pointer_move(&mut self, kind: PointerKind) -> bool {
        self.control.on_pointer_move(kind)
    }

    pub fn control(&self) -> &ControlSignal {
        &self.control
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    pub fn vertices(&self) -> &[Vertex] {
        self.field.vertices()
    }

    pub fn stats(&self) -> FrameStats {
        self.field.stats()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn params(&self) -> &StarfieldParams {
        &self.params
    }

    pub fn star_color(&self) -> [f32; 4] {
        self.params.star_color.to_rgba_f32()
    }
}
