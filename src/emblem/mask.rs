//! Software rasterizer for the emblem's lobe mask.
//!
//! Each pixel casts a camera ray, hits the sphere, projects the hit into the
//! spinning local frame through [`project_point`] and colours it by
//! [`classify`]. Pointer picking runs the exact same chain, so the painted
//! seam and the hover seam never disagree. Rows are shaded in parallel.

use rayon::prelude::*;

use crate::fast_math::lerp;
use crate::geometry::{Camera, Ray};

use super::projector::project_point;
use super::region::{classify, RegionTag};
use super::transform::EmblemTransform;

/// Colours and lighting for the mask.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct MaskStyle {
    /// Lobe A base colour (linear 0..1 RGB).
    pub color_a: [f32; 3],
    pub color_b: [f32; 3],
    /// Brightness shift applied to the hovered lobe (A lightens, B darkens).
    pub hover_tint: f32,
    pub rim_strength: f32,
    pub rim_power: f32,
}

impl Default for MaskStyle {
    fn default() -> Self {
        Self {
            color_a: [156.0 / 255.0, 18.0 / 255.0, 0.0],
            color_b: [224.0 / 255.0; 3],
            hover_tint: 0.2,
            rim_strength: 0.2,
            rim_power: 3.0,
        }
    }
}

/// Per-lobe hover intensity in [0, 1], usually spring-smoothed by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LobeHover {
    pub a: f32,
    pub b: f32,
}

/// One shaded surface sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shaded {
    pub region: RegionTag,
    pub rgb: [f32; 3],
}

/// Shade a single primary ray. `None` when the ray misses the emblem.
pub fn shade(ray: &Ray, tf: &EmblemTransform, style: &MaskStyle, hover: LobeHover) -> Option<Shaded> {
    let hit = tf.intersect(ray)?;
    let local = project_point(hit, tf).ok()?;
    let region = classify(local.x, local.y);

    let base = match region {
        RegionTag::A => style.color_a.map(|c| c + hover.a * style.hover_tint),
        RegionTag::B => style.color_b.map(|c| c - hover.b * style.hover_tint),
    };

    let normal = (hit - tf.center).normalize();
    let view = (ray.origin - hit).normalize();
    let rim = (1.0 - view.dot(normal)).max(0.0).powf(style.rim_power) * style.rim_strength;

    Some(Shaded {
        region,
        rgb: base.map(|c| (c + rim).clamp(0.0, 1.0)),
    })
}

/// Rasterize the emblem into a straight-alpha RGBA8 buffer. Pixels that miss
/// the sphere are fully transparent.
pub fn render_mask(
    width: usize,
    height: usize,
    camera: &Camera,
    tf: &EmblemTransform,
    style: &MaskStyle,
    hover: LobeHover,
) -> Vec<u8> {
    let mut pixels = vec![0u8; width * height * 4];
    if width == 0 || height == 0 {
        return pixels;
    }
    let aspect = width as f32 / height as f32;
    let inv_w = 1.0 / width as f32;
    let inv_h = 1.0 / height as f32;
    let row_size = width * 4;

    pixels
        .par_chunks_exact_mut(row_size)
        .enumerate()
        .for_each(|(py, row)| {
            let fy = (py as f32 + 0.5) * inv_h;
            for px in 0..width {
                let fx = (px as f32 + 0.5) * inv_w;
                let ray = camera.viewport_ray(fx, fy, aspect);
                if let Some(s) = shade(&ray, tf, style, hover) {
                    let idx = px * 4;
                    row[idx] = to_u8(s.rgb[0]);
                    row[idx + 1] = to_u8(s.rgb[1]);
                    row[idx + 2] = to_u8(s.rgb[2]);
                    row[idx + 3] = 255;
                }
            }
        });

    pixels
}

#[inline]
fn to_u8(c: f32) -> u8 {
    lerp(0.0, 255.0, c.clamp(0.0, 1.0)).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emblem::projector::pick;
    use crate::emblem::transform::Emblem;
    use crate::geometry::CameraParams;
    use proptest::prelude::*;

    fn scene() -> (Camera, Emblem) {
        (
            Camera::from_params(&CameraParams::default()),
            Emblem::new(0.7, 2.0, 0.2),
        )
    }

    #[test]
    fn buffer_size_and_transparent_corners() {
        let (cam, e) = scene();
        let px = render_mask(48, 32, &cam, &e.transform(), &MaskStyle::default(), LobeHover::default());
        assert_eq!(px.len(), 48 * 32 * 4);
        assert_eq!(px[3], 0, "top-left corner should miss the sphere");
        let centre = (16 * 48 + 24) * 4;
        assert_eq!(px[centre + 3], 255, "centre should hit the sphere");
    }

    #[test]
    fn empty_buffer_for_zero_size() {
        let (cam, e) = scene();
        assert!(render_mask(0, 10, &cam, &e.transform(), &MaskStyle::default(), LobeHover::default()).is_empty());
    }

    #[test]
    fn left_and_right_equator_colours() {
        let (cam, e) = scene();
        let tf = e.transform();
        let style = MaskStyle::default();
        let left = shade(&cam.viewport_ray(0.35, 0.5, 1.0), &tf, &style, LobeHover::default()).unwrap();
        let right = shade(&cam.viewport_ray(0.65, 0.5, 1.0), &tf, &style, LobeHover::default()).unwrap();
        assert_eq!(left.region, RegionTag::A);
        assert_eq!(right.region, RegionTag::B);
        assert!(left.rgb[0] > left.rgb[2], "lobe A is red");
        assert!(right.rgb[2] > 0.5, "lobe B is light");
    }

    #[test]
    fn hover_tints_only_its_lobe() {
        let (cam, e) = scene();
        let tf = e.transform();
        let style = MaskStyle::default();
        let ray = cam.viewport_ray(0.35, 0.5, 1.0);
        let idle = shade(&ray, &tf, &style, LobeHover::default()).unwrap();
        let hot = shade(&ray, &tf, &style, LobeHover { a: 1.0, b: 0.0 }).unwrap();
        let other = shade(&ray, &tf, &style, LobeHover { a: 0.0, b: 1.0 }).unwrap();
        assert!(hot.rgb[1] > idle.rgb[1]);
        assert_eq!(other, idle);
    }

    proptest! {
        #[test]
        fn painted_region_matches_pointer_pick(
            fx in 0.0f32..1.0,
            fy in 0.0f32..1.0,
            angle in 0.0f32..std::f32::consts::TAU,
        ) {
            let (cam, mut e) = scene();
            e.set_angle(angle);
            let tf = e.transform();
            let ray = cam.viewport_ray(fx, fy, 1.0);
            let painted = shade(&ray, &tf, &MaskStyle::default(), LobeHover::default()).map(|s| s.region);
            prop_assert_eq!(painted, pick(&ray, &tf));
        }
    }
}
