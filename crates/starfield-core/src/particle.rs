//! A single star: noise-driven drift toward a lane-specific curve, plus a
//! size that grows or wobbles for its first frames after (re)spawning.

use crate::constants::*;
use crate::frame::{FrameContext, Viewport};
use crate::noise_field::NoiseField;
use glam::Vec2;
use rand::Rng;

/// Random traits drawn once at creation and kept for the particle's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleTraits {
    pub speed: f32,
    pub growth_mode: bool,
    pub growth_rate: f32,
    pub lane_index: u32,
}

impl ParticleTraits {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            speed: rng.gen_range(SPEED_MIN..SPEED_MAX),
            growth_mode: rng.gen_bool(0.5),
            growth_rate: rng.gen_range(0.0..GROWTH_RATE_MAX),
            lane_index: rng.gen_range(0..LANE_COUNT),
        }
    }

    /// Bias applied to this particle's target curve.
    pub fn lane_offset(&self) -> f32 {
        self.lane_index as f32 / LANE_DIVISOR * 2.0 - 1.0
    }
}

/// Per-frame motion coefficients, exposed for inspection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionTerms {
    pub attract_strength: f32,
    pub freedom: f32,
    pub curve_y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub traits: ParticleTraits,
    pub size_base: f32,
    pub age: u32,
    pub angle: f32,
    pub cos_a: f32,
    pub sin_a: f32,
    pub render_size: f32,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let pos = Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        );
        let traits = ParticleTraits::random(rng);
        let size_base = if traits.growth_mode {
            0.0
        } else {
            rng.gen_range(SIZE_BASE_INIT_MIN..SIZE_BASE_MAX)
        };
        Self {
            size_base,
            ..Self::with_traits(pos, traits)
        }
    }

    /// Deterministic constructor; `size_base` starts at 0 and can be set afterwards.
    pub fn with_traits(pos: Vec2, traits: ParticleTraits) -> Self {
        Self {
            pos,
            traits,
            size_base: 0.0,
            age: 0,
            angle: 0.0,
            cos_a: 1.0,
            sin_a: 0.0,
            render_size: 0.0,
        }
    }

    pub fn motion_terms(&self, ctx: &FrameContext) -> MotionTerms {
        let Viewport { width, height } = ctx.viewport;
        let t = if width > 0.0 { self.pos.x / width } else { 0.0 };
        let eased = ctx.eased;
        let sf = ctx.screen_factor;

        let attract_strength = (ATTRACT_BASE + (1.0 - sf) * ATTRACT_NARROW_GAIN) * eased;
        let freedom = FREEDOM_LOOSE + (FREEDOM_TIGHT - FREEDOM_LOOSE) * eased;

        let base_curve_y = height * CURVE_HEIGHT_RATIO * (1.0 - t * t);
        let collapse = (1.0 - t) * (1.0 - t);
        let curve_amplitude = height * CURVE_HEIGHT_RATIO * sf * sf;
        let curve_y = base_curve_y + self.traits.lane_offset() * curve_amplitude * collapse;

        MotionTerms {
            attract_strength,
            freedom,
            curve_y,
        }
    }

    /// Advance position one frame. Returns `true` when the particle left the
    /// margin and was respawned on an edge.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        ctx: &FrameContext,
        noise: &NoiseField,
        rng: &mut R,
    ) -> bool {
        let MotionTerms {
            attract_strength,
            freedom,
            curve_y,
        } = self.motion_terms(ctx);
        let speed = self.traits.speed;
        let old = self.pos;

        // x first: the y jitter samples noise at the updated x.
        self.pos.x += (noise.sample2(self.pos.y * FLOW_NOISE_SCALE, ctx.t_noise) - 0.5)
            * speed
            * freedom
            + speed * DRIFT_PER_SPEED;
        self.pos.y += (noise.sample2(
            self.pos.x * FLOW_NOISE_SCALE,
            ctx.t_noise + FLOW_NOISE_Y_PHASE,
        ) - 0.5)
            * speed
            * freedom
            + (curve_y - self.pos.y) * attract_strength * (1.0 - ctx.eased * SPRING_DAMPING);

        let recycled = out_of_bounds(self.pos, ctx.viewport);
        if recycled {
            self.pos = edge_point(rng, ctx.viewport);
            self.age = 0;
        }

        let d = self.pos - old;
        self.angle = d.y.atan2(d.x);
        self.cos_a = self.angle.cos();
        self.sin_a = self.angle.sin();
        recycled
    }

    pub fn update_size(&mut self, noise: &NoiseField, z_noise: f32) {
        self.age = self.age.saturating_add(1);
        let n = noise.sample(self.pos.x, self.pos.y, z_noise);

        if self.age < SIZE_AGE_LIMIT {
            if self.traits.growth_mode {
                // Only the upper bound is enforced: growth starts at 0 and never shrinks.
                self.size_base = (self.size_base + self.traits.growth_rate).min(SIZE_BASE_MAX);
            } else {
                self.size_base = (self.size_base + SIZE_DRIFT - SIZE_NOISE_PULL * n)
                    .clamp(SIZE_BASE_MIN, SIZE_BASE_MAX);
            }
        }

        self.render_size = self.size_base * (RENDER_SCALE_MIN + n * RENDER_SCALE_SPAN);
    }

    pub fn is_visible(&self) -> bool {
        self.render_size > 0.0
    }
}

fn out_of_bounds(p: Vec2, viewport: Viewport) -> bool {
    let m = RECYCLE_MARGIN;
    p.x > viewport.width + m || p.x < -m || p.y > viewport.height + m || p.y < -m
}

/// Uniform point on one of the four margin boundaries, edges equally likely.
pub fn edge_point<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Vec2 {
    let m = RECYCLE_MARGIN;
    let along_x = rng.gen::<f32>() * viewport.width;
    let along_y = rng.gen::<f32>() * viewport.height;
    match rng.gen_range(0..4) {
        0 => Vec2::new(-m, along_y),
        1 => Vec2::new(viewport.width + m, along_y),
        2 => Vec2::new(along_x, -m),
        _ => Vec2::new(along_x, viewport.height + m),
    }
}
