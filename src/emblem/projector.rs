//! Pointer projection: world-space surface hit → emblem-local unit sphere.
//!
//! The local frame spins with the emblem, so the lobe pattern stays glued to
//! the surface while it rotates. The same mapping feeds the rasterizer, which
//! is what keeps the painted boundary and the hit-test boundary identical.

use crate::error::{HubError, Result};
use crate::geometry::{Ray, Vec3};

use super::region::{classify, RegionTag};
use super::transform::EmblemTransform;

/// Allowed relative deviation from the sphere radius before a point counts
/// as off-surface.
pub const SURFACE_TOLERANCE: f32 = 0.02;

/// Local-frame unit vector for a world-space point on the emblem surface.
pub fn project_point(world: Vec3, tf: &EmblemTransform) -> Result<Vec3> {
    let local = tf.world_to_local(world);
    let distance = local.length();
    let radius = tf.local_radius;
    if !distance.is_finite() || (distance - radius).abs() > SURFACE_TOLERANCE * radius {
        return Err(HubError::OffSurface {
            distance,
            radius,
            tolerance: SURFACE_TOLERANCE,
        });
    }
    Ok(local * (1.0 / distance))
}

/// The `(x, y)` the classifier consumes.
pub fn project(world: Vec3, tf: &EmblemTransform) -> Result<(f32, f32)> {
    let n = project_point(world, tf)?;
    Ok((n.x, n.y))
}

/// Ray → surface hit → region. `None` when the ray misses the emblem.
pub fn pick(ray: &Ray, tf: &EmblemTransform) -> Option<RegionTag> {
    let hit = tf.intersect(ray)?;
    match project(hit, tf) {
        Ok((x, y)) => Some(classify(x, y)),
        Err(e) => {
            log::warn!("pick: rejected projection: {e}");
            None
        }
    }
}
