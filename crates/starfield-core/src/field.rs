//! Fixed particle pool and the triangle list it emits each frame.

use crate::frame::{FrameContext, Viewport};
use crate::noise_field::NoiseField;
use crate::particle::Particle;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use rand::Rng;

pub const VERTICES_PER_STAR: usize = 6;

/// One triangle-list vertex in viewport pixels, origin top-left.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
}

impl From<Vec2> for Vertex {
    fn from(v: Vec2) -> Self {
        Self { pos: [v.x, v.y] }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub visible: usize,
    pub recycled: usize,
}

/// Two triangles covering a square of edge `render_size`, centred on the
/// particle and rotated to its heading. `None` when the star is not visible.
pub fn quad_vertices(p: &Particle) -> Option<[Vertex; VERTICES_PER_STAR]> {
    if !p.is_visible() {
        return None;
    }
    let half = p.render_size * 0.5;
    let f = Vec2::new(p.cos_a, p.sin_a) * half;
    let perp = Vec2::new(-f.y, f.x);
    let c = p.pos;

    let a = c - f - perp;
    let b = c + f - perp;
    let d = c + f + perp;
    let e = c - f + perp;
    Some([a.into(), b.into(), d.into(), a.into(), d.into(), e.into()])
}

/// Fixed pool of particles plus the reusable vertex buffer they emit into.
pub struct ParticleField {
    particles: Vec<Particle>,
    vertices: Vec<Vertex>,
    stats: FrameStats,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, viewport: Viewport, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle::spawn(rng, viewport))
            .collect::<Vec<_>>();
        Self::from_particles(particles)
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        let vertices = Vec::with_capacity(particles.len() * VERTICES_PER_STAR);
        Self {
            particles,
            vertices,
            stats: FrameStats::default(),
        }
    }

    /// Move and resize every particle, then rebuild the triangle list in
    /// array order.
    pub fn step_and_emit<R: Rng + ?Sized>(
        &mut self,
        ctx: &FrameContext,
        noise: &NoiseField,
        rng: &mut R,
    ) -> &[Vertex] {
        let mut recycled = 0;
        for p in &mut self.particles {
            if p.advance(ctx, noise, rng) {
                recycled += 1;
            }
            p.update_size(noise, ctx.z_noise);
        }

        self.vertices.clear();
        for quad in self.particles.iter().filter_map(quad_vertices) {
            self.vertices.extend_from_slice(&quad);
        }

        self.stats = FrameStats {
            visible: self.vertices.len() / VERTICES_PER_STAR,
            recycled,
        };
        log::trace!(
            "[field] visible={} recycled={}",
            self.stats.visible,
            self.stats.recycled
        );
        &self.vertices
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Geometry from the most recent step.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
