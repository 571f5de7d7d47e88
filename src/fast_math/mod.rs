//! Fast math: scalar helpers shared by the hit-test and the rasterizer.
//!
//! ## Sqrt Elimination
//! The lobe rule compares distances against fixed radii. `d < r` is
//! evaluated as `d² < r²`, so no sqrt is taken per pixel or per pointer move.
//!
//! ## FMA (Fused Multiply-Add)
//! `a * b + c` in one instruction with a single rounding step. The classifier
//! and the rasterizer both go through the same helpers, so they round the
//! same way.

/// Fused Multiply-Add: a * b + c
#[inline(always)]
pub fn fma(a: f32, b: f32, c: f32) -> f32 {
    a.mul_add(b, c)
}

/// Squared distance between (x1, y1) and (x2, y2).
#[inline(always)]
pub fn distance_squared(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    fma(dx, dx, dy * dy)
}

/// lerp(a, b, t) = a + t * (b - a) = fma(t, b-a, a)
#[inline(always)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    fma(t, b - a, a)
}

/// Cubic ease-in-out on [0, 1]. Zero slope at both ends.
#[inline(always)]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * fma(-2.0, t, 3.0)
}

/// Quadratic ease-out on [0, 1]: fast start, zero slope at the end.
#[inline(always)]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * (2.0 - t)
}

/// Wrap `x` into [0, 1).
#[inline(always)]
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fma() {
        assert!((fma(2.0, 3.0, 4.0) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_squared() {
        let d2 = distance_squared(0.0, 0.0, 3.0, 4.0);
        assert!((d2 - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_ease_out() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!((ease_out(0.5) - 0.75).abs() < 1e-6);
        assert_eq!(ease_out(2.0), 1.0);
    }

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 10.0, 0.5) - 5.0).abs() < 1e-6);
        assert!((lerp(0.0, 10.0, 0.0) - 0.0).abs() < 1e-6);
        assert!((lerp(0.0, 10.0, 1.0) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_ease_in_out_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ease_in_out(-3.0), 0.0);
    }

    #[test]
    fn test_fract_negative() {
        assert!((fract(2.25) - 0.25).abs() < 1e-12);
        assert!((fract(-0.25) - 0.75).abs() < 1e-12);
    }
}
