//! Static backdrop drawn under the stars: a vertical two-colour gradient with
//! a soft glow rising from the lower-left.
//!
//! The image depends only on the viewport size and the palette, so it is
//! baked once and rebuilt on resize.

use crate::color::Rgb;
use crate::constants::*;
use crate::frame::Viewport;
use crate::params::StarfieldParams;

#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    pub width: u32,
    pub height: u32,
    /// Straight RGBA8, row-major, top row first.
    pub rgba: Vec<u8>,
}

/// Gradient colour for pixel row `y` of a `height`-tall image.
pub fn gradient_row(y: u32, height: u32, low: Rgb, high: Rgb) -> Rgb {
    let t = if height > 0 {
        y as f32 / height as f32
    } else {
        0.0
    };
    low.lerp(high, 1.0 - t)
}

/// Opacity (0..255 scale) of the glow disc of radius `r` on a `width`-wide
/// image: linear from 0 at `r = W/2` to 10 at `r = -W/2`.
pub fn glow_alpha(r: f32, width: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    (width * 0.5 - r) / width * GLOW_ALPHA_MAX
}

/// Radii of the stacked glow discs, largest first.
pub fn glow_radii(width: f32) -> Vec<f32> {
    let mut radii = Vec::new();
    let mut r = width / GLOW_RADIUS_DIVISOR;
    while r > 0.0 {
        radii.push(r);
        r -= GLOW_RADIUS_STEP;
    }
    radii
}

impl Background {
    pub fn bake(viewport: Viewport, params: &StarfieldParams) -> Self {
        let width = viewport.width.max(0.0).round() as u32;
        let height = viewport.height.max(0.0).round() as u32;
        let w = width as f32;
        let h = height as f32;

        // Discs are nested, so a pixel is covered by exactly the first `k`
        // radii. Precompute how much gradient survives under `k` discs.
        let radii = glow_radii(w);
        let mut keep = Vec::with_capacity(radii.len() + 1);
        keep.push(1.0_f32);
        for &r in &radii {
            let a = (glow_alpha(r, w) / 255.0).clamp(0.0, 1.0);
            let prev = keep.last().copied().unwrap_or(1.0);
            keep.push(prev * (1.0 - a));
        }

        let cx = w / GLOW_CENTER_X_DIVISOR;
        let cy = h;
        let glow = params.glow_color;
        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            let row = gradient_row(y, height, params.gradient_low, params.gradient_high);
            for x in 0..width {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let d = (dx * dx + dy * dy).sqrt();
                let covered = radii.partition_point(|&r| r >= d);
                let k = keep[covered];
                let mix = |base: u8, g: u8| (base as f32 * k + g as f32 * (1.0 - k)).round() as u8;
                rgba.extend_from_slice(&[
                    mix(row.r, glow.r),
                    mix(row.g, glow.g),
                    mix(row.b, glow.b),
                    255,
                ]);
            }
        }

        log::debug!("[background] baked {}x{} with {} glow discs", width, height, radii.len());
        Self {
            width,
            height,
            rgba,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.rgba.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}
