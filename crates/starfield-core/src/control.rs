//! Horizontal control signal shared by every particle in a frame.
//!
//! At startup the signal runs an automatic eased sweep across the viewport.
//! Only the first pointer move the host reports is inspected: if it came from
//! a mouse, the signal switches to live pointer tracking for the rest of the
//! process. A touch or pen move seen first keeps the sweep for good.

use crate::constants::{SWEEP_DELAY_MS, SWEEP_DURATION_MS};

/// Cubic ease used for both the sweep and the per-particle influence.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Influence as a fraction of the viewport width, clamped to [0, 1].
#[inline]
pub fn normalized_influence(influence: f32, viewport_width: f32) -> f32 {
    if viewport_width > 0.0 {
        (influence / viewport_width).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlMode {
    Sweeping,
    LiveControl,
}

/// Pointing device that produced a move event, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Debug)]
pub struct ControlSignal {
    mode: ControlMode,
    sweep_start_ms: f64,
    sweep_done: bool,
    pointer_seen: bool,
    influence: f32,
}

impl ControlSignal {
    pub fn new(sweep_start_ms: f64) -> Self {
        Self {
            mode: ControlMode::Sweeping,
            sweep_start_ms,
            sweep_done: false,
            pointer_seen: false,
            influence: 0.0,
        }
    }

    /// Compute this frame's influence in viewport-width units.
    pub fn tick(&mut self, now_ms: f64, viewport_width: f32, pointer_x: f32) -> f32 {
        self.influence = if self.mode == ControlMode::Sweeping && !self.sweep_done {
            let elapsed = now_ms - self.sweep_start_ms;
            if elapsed < SWEEP_DELAY_MS {
                0.0
            } else if elapsed < SWEEP_DELAY_MS + SWEEP_DURATION_MS {
                let t = ((elapsed - SWEEP_DELAY_MS) / SWEEP_DURATION_MS) as f32;
                smoothstep(t) * viewport_width
            } else {
                self.sweep_done = true;
                log::info!("[control] intro sweep finished after {:.0} ms", elapsed);
                viewport_width
            }
        } else {
            pointer_x
        };
        self.influence
    }

    /// Latch live control. Returns `true` only on the transition; later calls
    /// are no-ops.
    pub fn on_pointer_device_move(&mut self) -> bool {
        if self.mode == ControlMode::LiveControl {
            return false;
        }
        self.mode = ControlMode::LiveControl;
        log::info!("[control] mouse detected, switching to live pointer control");
        true
    }

    /// Forward a host pointer event. Only the first event is considered, and
    /// it latches only when it came from a mouse.
    pub fn on_pointer_move(&mut self, kind: PointerKind) -> bool {
        if self.pointer_seen {
            return false;
        }
        self.pointer_seen = true;
        match kind {
            PointerKind::Mouse => self.on_pointer_device_move(),
            PointerKind::Touch | PointerKind::Pen => false,
        }
    }

    pub fn influence(&self) -> f32 {
        self.influence
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn sweep_enabled(&self) -> bool {
        self.mode == ControlMode::Sweeping
    }

    pub fn sweep_done(&self) -> bool {
        self.sweep_done
    }
}
