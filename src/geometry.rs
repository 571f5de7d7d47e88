//! Minimal 3D vector, camera and ray types.
//!
//! Just enough linear algebra to cast a pointer ray from the viewport into
//! the scene and hit the emblem sphere. Angles are radians, the camera looks
//! down -Z with +Y up.

use std::ops::{Add, Mul, Sub};

use crate::fast_math::fma;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        fma(self.x, rhs.x, fma(self.y, rhs.y, self.z * rhs.z))
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > f32::EPSILON {
            self * (1.0 / len)
        } else {
            Self::ZERO
        }
    }

    /// Rotate about the Y axis by `angle` (right-handed, +X towards -Z).
    pub fn rotate_y(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(fma(self.x, c, self.z * s), self.y, fma(-self.x, s, self.z * c))
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

// ── Ray ──

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Nearest non-negative hit distance against a sphere.
    ///
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sq = disc.sqrt();
        let near = -b - sq;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + sq;
        (far >= 0.0).then_some(far)
    }
}

// ── Camera ──

/// Camera parameters as authored (eye, target, vertical FOV).
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct CameraParams {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 4.5],
            target: [0.0, 0.0, 0.0],
            fov_deg: 50.0,
        }
    }
}

/// Pinhole camera with a precomputed basis.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub origin: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    fov_factor: f32,
}

impl Camera {
    pub fn look_at(eye: Vec3, target: Vec3, fov_deg: f32) -> Self {
        let forward = (target - eye).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        let fov_factor = (fov_deg.to_radians() * 0.5).tan();
        Self {
            origin: eye,
            forward,
            right,
            up,
            fov_factor,
        }
    }

    pub fn from_params(p: &CameraParams) -> Self {
        Self::look_at(p.eye.into(), p.target.into(), p.fov_deg)
    }

    /// Primary ray through normalized device coordinates `u, v` in [-1, 1]
    /// (+v is up). `aspect` is width / height.
    pub fn ray(&self, u: f32, v: f32, aspect: f32) -> Ray {
        let dir = self.forward
            + self.right * (u * self.fov_factor * aspect)
            + self.up * (v * self.fov_factor);
        Ray::new(self.origin, dir)
    }

    /// Ray through a viewport position given as fractions of width and
    /// height, origin top-left. Rasterizer and pointer picking both go
    /// through here.
    pub fn viewport_ray(&self, fx: f32, fy: f32, aspect: f32) -> Ray {
        self.ray(fx * 2.0 - 1.0, 1.0 - fy * 2.0, aspect)
    }
}
