pub mod config;
pub mod content;
pub mod emblem;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod orbit;
pub mod scene;
pub mod view;

// Hot-path helpers shared by the rasterizer and the pointer path
pub mod fast_math;

pub use error::{HubError, Result};
