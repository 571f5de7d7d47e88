//! Tunables for the hub. Every field has a default; a JSON override only
//! needs the keys it changes.

use crate::emblem::mask::MaskStyle;
use crate::emblem::Emblem;
use crate::error::{HubError, Result};
use crate::geometry::CameraParams;
use crate::layout::{LayoutResolver, SpringConfig};
use crate::view::state::DEFAULT_DEBOUNCE;

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct EmblemConfig {
    /// Sphere radius in local units.
    pub radius: f32,
    pub scale: f32,
    /// Radians per second about local Y.
    pub spin: f32,
}

impl Default for EmblemConfig {
    fn default() -> Self {
        Self {
            radius: 0.7,
            scale: 2.0,
            spin: 0.2,
        }
    }
}

impl EmblemConfig {
    pub fn build(&self) -> Emblem {
        Emblem::new(self.radius, self.scale, self.spin)
    }
}

/// Halo drawn behind the emblem for the active lobe.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    pub color: [u8; 3],
    /// Halo scale when its lobe is active / idle.
    pub active_scale: f32,
    pub idle_scale: f32,
    /// Seconds to fade in or out.
    pub fade: f32,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            color: [0x6C, 0xBF, 0xCD],
            active_scale: 1.5,
            idle_scale: 0.9,
            fade: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Exit debounce before returning to Neutral, seconds.
    pub debounce: f64,
    pub spring: SpringConfig,
    pub layout: LayoutResolver,
    pub emblem: EmblemConfig,
    pub camera: CameraParams,
    pub mask: MaskStyle,
    pub glow: GlowConfig,
    /// Side of the square emblem viewport in points.
    pub emblem_size: f32,
    /// Rasterizer resolution (pixels per side).
    pub mask_resolution: usize,
    /// Thumbnail side at scale 1.0, points.
    pub thumbnail_size: f32,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            spring: SpringConfig::default(),
            layout: LayoutResolver::default(),
            emblem: EmblemConfig::default(),
            camera: CameraParams::default(),
            mask: MaskStyle::default(),
            glow: GlowConfig::default(),
            emblem_size: 500.0,
            mask_resolution: 320,
            thumbnail_size: 112.0,
        }
    }
}

fn positive(field: &'static str, v: f32) -> Result<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(HubError::InvalidConfig {
            field,
            reason: "must be positive and finite",
        })
    }
}

fn non_negative(field: &'static str, v: f64) -> Result<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(HubError::InvalidConfig {
            field,
            reason: "must be zero or more and finite",
        })
    }
}

impl HubConfig {
    /// Parse and validate. Unknown keys are ignored, missing ones default.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: HubConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the springs diverge or the emblem
    /// projection non-finite.
    pub fn validate(&self) -> Result<()> {
        positive("spring.stiffness", self.spring.stiffness)?;
        positive("spring.damping", self.spring.damping)?;
        positive("spring.mass", self.spring.mass)?;
        positive("emblem.radius", self.emblem.radius)?;
        positive("emblem.scale", self.emblem.scale)?;
        if !self.emblem.spin.is_finite() {
            return Err(HubError::InvalidConfig {
                field: "emblem.spin",
                reason: "must be finite",
            });
        }
        if !(self.camera.fov_deg > 0.0 && self.camera.fov_deg < 180.0) {
            return Err(HubError::InvalidConfig {
                field: "camera.fov_deg",
                reason: "must lie strictly between 0 and 180",
            });
        }
        non_negative("debounce", self.debounce)?;
        non_negative("glow.fade", self.glow.fade as f64)?;
        Ok(())
    }
}
