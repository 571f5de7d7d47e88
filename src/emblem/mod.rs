//! The tai-chi emblem: a spinning sphere split into two interlocking lobes.
//!
//! - `region`    : the lobe rule (single source of truth)
//! - `transform` : emblem pose and world ↔ local mapping
//! - `projector` : pointer hit → local unit sphere → region
//! - `mask`      : CPU rasterizer that paints the lobes from the same rule

pub mod mask;
pub mod projector;
pub mod region;
pub mod transform;

pub use projector::{pick, project};
pub use region::{classify, RegionTag};
pub use transform::{Emblem, EmblemTransform};
