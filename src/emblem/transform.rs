//! The emblem as a geometric reference frame.

use std::f32::consts::TAU;

use crate::geometry::{Ray, Vec3};

/// World placement of the emblem at one instant: translation, spin about
/// local Y, and uniform scale. Local geometry is a sphere of
/// `local_radius` around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmblemTransform {
    pub center: Vec3,
    pub angle: f32,
    pub scale: f32,
    pub local_radius: f32,
}

impl EmblemTransform {
    /// Radius of the sphere in world units.
    #[inline]
    pub fn world_radius(&self) -> f32 {
        self.local_radius * self.scale
    }

    /// Undo translation, rotation and scale.
    pub fn world_to_local(&self, world: Vec3) -> Vec3 {
        ((world - self.center) * (1.0 / self.scale)).rotate_y(-self.angle)
    }

    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        (local * self.scale).rotate_y(self.angle) + self.center
    }

    /// World-space surface point hit by `ray`, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        ray.intersect_sphere(self.center, self.world_radius())
            .map(|t| ray.at(t))
    }
}

/// A spinning sphere. Owns only its pose; classification state lives
/// elsewhere.
#[derive(Debug, Clone)]
pub struct Emblem {
    pub center: Vec3,
    /// Sphere radius in local units.
    pub radius: f32,
    pub scale: f32,
    /// Spin speed about local Y, radians per second.
    pub spin: f32,
    angle: f32,
}

impl Emblem {
    pub fn new(radius: f32, scale: f32, spin: f32) -> Self {
        Self {
            center: Vec3::ZERO,
            radius,
            scale,
            spin,
            angle: 0.0,
        }
    }

    /// Free-running rotation; kept in [0, 2π) so precision does not decay
    /// over a long session.
    pub fn advance(&mut self, dt: f32) {
        self.angle = (self.angle + dt * self.spin).rem_euclid(TAU);
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle.rem_euclid(TAU);
    }

    pub fn transform(&self) -> EmblemTransform {
        EmblemTransform {
            center: self.center,
            angle: self.angle,
            scale: self.scale,
            local_radius: self.radius,
        }
    }
}
