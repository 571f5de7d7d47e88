//! Yin-yang lobe classification.
//!
//! The one and only statement of the lobe rule. The rasterizer in
//! [`super::mask`] and the pointer path in [`super::projector`] both call
//! [`classify`]; neither keeps its own copy of the radii.
//!
//! Rules are applied in order, later rules win:
//!
//! 1. default A
//! 2. `x > 0` → B
//! 3. inside the upper lobe circle (centre (0, +0.5), r 0.5) → B
//! 4. inside the lower lobe circle (centre (0, -0.5), r 0.5) → A
//! 5. inside the upper eye (centre (0, +0.5), r 0.12) → A
//! 6. inside the lower eye (centre (0, -0.5), r 0.12) → B
//!
//! All comparisons are strict, so a point exactly on a circle stays with
//! the earlier rule.

use crate::fast_math::distance_squared;
use crate::geometry::Vec3;

/// Vertical offset of both lobe centres from the equator.
pub const LOBE_OFFSET: f32 = 0.5;
/// Radius of the two large lobe circles.
pub const LOBE_RADIUS: f32 = 0.5;
/// Radius of the two eyes that invert the dominant lobe.
pub const EYE_RADIUS: f32 = 0.12;

const LOBE_RADIUS_SQ: f32 = LOBE_RADIUS * LOBE_RADIUS;
const EYE_RADIUS_SQ: f32 = EYE_RADIUS * EYE_RADIUS;

/// Which half of the emblem a surface point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub enum RegionTag {
    A,
    B,
}

impl RegionTag {
    /// Mask value as a shading stage consumes it: 0.0 for A, 1.0 for B.
    #[inline]
    pub fn mask(self) -> f32 {
        match self {
            RegionTag::A => 0.0,
            RegionTag::B => 1.0,
        }
    }

    pub fn other(self) -> Self {
        match self {
            RegionTag::A => RegionTag::B,
            RegionTag::B => RegionTag::A,
        }
    }
}

/// Classify the x/y projection of a unit-sphere point in the emblem's local
/// frame. `z` plays no part.
#[inline]
pub fn classify(x: f32, y: f32) -> RegionTag {
    let upper = distance_squared(x, y, 0.0, LOBE_OFFSET);
    let lower = distance_squared(x, y, 0.0, -LOBE_OFFSET);

    let mut region = RegionTag::A;
    if x > 0.0 {
        region = RegionTag::B;
    }
    if upper < LOBE_RADIUS_SQ {
        region = RegionTag::B;
    }
    if lower < LOBE_RADIUS_SQ {
        region = RegionTag::A;
    }
    if upper < EYE_RADIUS_SQ {
        region = RegionTag::A;
    }
    if lower < EYE_RADIUS_SQ {
        region = RegionTag::B;
    }
    region
}

/// [`classify`] for a local-frame point. The point is normalized first, so
/// callers may pass any non-zero vector from the emblem centre.
#[inline]
pub fn classify_point(local: Vec3) -> RegionTag {
    let n = local.normalize();
    classify(n.x, n.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn upper_eye_overrides_upper_lobe() {
        assert_eq!(classify(0.0, 0.5), RegionTag::A);
    }

    #[test]
    fn lower_eye_overrides_lower_lobe() {
        assert_eq!(classify(0.0, -0.5), RegionTag::B);
    }

    #[test]
    fn equator_sides() {
        assert_eq!(classify(-0.9, 0.0), RegionTag::A);
        assert_eq!(classify(0.9, 0.0), RegionTag::B);
    }

    #[test]
    fn lobes_cross_the_meridian() {
        // Upper lobe pulls B onto the left half, lower lobe pulls A onto the right.
        assert_eq!(classify(-0.3, 0.5), RegionTag::B);
        assert_eq!(classify(0.3, -0.5), RegionTag::A);
    }

    #[test]
    fn boundary_is_strict() {
        // Exactly on the upper lobe circle: rule 3 does not fire, rule 1 holds.
        assert_eq!(classify(-0.5, 0.5), RegionTag::A);
    }

    #[test]
    fn mask_values() {
        assert_eq!(RegionTag::A.mask(), 0.0);
        assert_eq!(RegionTag::B.mask(), 1.0);
        assert_eq!(RegionTag::A.other(), RegionTag::B);
    }

    #[test]
    fn classify_point_ignores_z_and_length() {
        let p = Vec3::new(0.9, 0.0, 0.43);
        assert_eq!(classify_point(p), RegionTag::B);
        assert_eq!(classify_point(p * 3.0), RegionTag::B);
    }

    proptest! {
        #[test]
        fn classify_is_pure(x in -1.0f32..1.0, y in -1.0f32..1.0) {
            prop_assume!(x * x + y * y <= 1.0);
            prop_assert_eq!(classify(x, y), classify(x, y));
        }

        #[test]
        fn point_symmetry_swaps_regions(x in -1.0f32..1.0, y in -1.0f32..1.0) {
            // Rotating the pattern by half a turn swaps the lobes everywhere
            // off the boundary curves.
            prop_assume!(x * x + y * y <= 1.0);
            let up = distance_squared(x, y, 0.0, LOBE_OFFSET);
            let lo = distance_squared(x, y, 0.0, -LOBE_OFFSET);
            let near = |d: f32, r: f32| (d.sqrt() - r).abs() < 1e-3;
            prop_assume!(x.abs() > 1e-3);
            prop_assume!(!near(up, LOBE_RADIUS) && !near(lo, LOBE_RADIUS));
            prop_assume!(!near(up, EYE_RADIUS) && !near(lo, EYE_RADIUS));
            prop_assert_eq!(classify(-x, -y), classify(x, y).other());
        }
    }
}
