//! Idle drift for satellites.
//!
//! Each element floats on its own looping path so the cluster never moves in
//! lock-step:
//! - vertical: -a → +a → -a
//! - horizontal: +a/2 → -a/2 → +a/2
//! - every segment eased in and out, so the loop is smooth at its seam
//!
//! Period, amplitude and phase come from a hash of the element id, never
//! from an ambient RNG, so the same id always drifts the same way.

use crate::fast_math::{ease_in_out, fract, lerp};

/// Drift period range, seconds.
pub const PERIOD_MIN: f32 = 3.0;
pub const PERIOD_SPAN: f32 = 4.0;
/// Vertical drift amplitude range, pixels.
pub const AMPLITUDE_MIN: f32 = 5.0;
pub const AMPLITUDE_SPAN: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParams {
    /// Seconds per full loop.
    pub period: f32,
    /// Vertical half-swing in pixels; horizontal is half of it.
    pub amplitude: f32,
    /// Loop offset as a fraction of the period.
    pub phase: f32,
}

/// Positional offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitOffset {
    pub x: f32,
    pub y: f32,
}

impl OrbitParams {
    pub fn from_id(id: &str) -> Self {
        let seed = fnv1a(id.as_bytes());
        Self {
            period: PERIOD_MIN + unit(seed, 0) * PERIOD_SPAN,
            amplitude: AMPLITUDE_MIN + unit(seed, 1) * AMPLITUDE_SPAN,
            phase: unit(seed, 2),
        }
    }

    /// Offset at scene time `t` (seconds).
    pub fn offset(&self, t: f64) -> OrbitOffset {
        let p = fract(t / self.period as f64 + self.phase as f64) as f32;
        let a = self.amplitude;
        let (seg, rising) = if p < 0.5 { (p * 2.0, true) } else { (p * 2.0 - 1.0, false) };
        let e = ease_in_out(seg);
        if rising {
            OrbitOffset {
                x: lerp(a * 0.5, -a * 0.5, e),
                y: lerp(-a, a, e),
            }
        } else {
            OrbitOffset {
                x: lerp(-a * 0.5, a * 0.5, e),
                y: lerp(a, -a, e),
            }
        }
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }
    h
}

/// Independent value in [0, 1] per `lane` from one seed.
fn unit(seed: u64, lane: u64) -> f32 {
    let mut x = seed ^ lane.wrapping_mul(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^= x >> 31;
    ((x & 0xFFFF) as f32) / 65535.0
}
