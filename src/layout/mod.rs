//! Satellite layout: targets per view state, emphasis, and the springs that
//! carry displayed values toward them.

pub mod element;
pub mod resolver;
pub mod spring;

pub use element::{build_elements, Category, Element, ElementSpec, LayoutTarget, TargetTable};
pub use resolver::{Emphasis, LayoutResolver, ResolvedLayout};
pub use spring::{Spring, SpringConfig, SpringVec3};
