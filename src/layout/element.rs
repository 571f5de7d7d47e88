//! Satellite elements and their per-state layout targets.

use std::collections::{HashMap, HashSet};

use crate::emblem::RegionTag;
use crate::error::{HubError, Result};
use crate::orbit::OrbitParams;
use crate::view::ViewState;

/// Which lobe an element belongs to.
pub type Category = RegionTag;

/// Where an element sits in one view state. `top` and `left` are percentages
/// of the cluster area, `scale` is a multiplier on the base thumbnail size.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LayoutTarget {
    pub top: f32,
    pub left: f32,
    pub scale: f32,
}

impl LayoutTarget {
    pub const fn new(top: f32, left: f32, scale: f32) -> Self {
        Self { top, left, scale }
    }

    /// `[top, left, scale]`, the order [`SpringVec3`](super::SpringVec3)
    /// animates them in.
    pub fn to_array(self) -> [f32; 3] {
        [self.top, self.left, self.scale]
    }

    fn check(&self) -> std::result::Result<(), &'static str> {
        if !self.top.is_finite() || !self.left.is_finite() {
            return Err("position is not finite");
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err("scale must be positive and finite");
        }
        Ok(())
    }
}

/// A complete target table: one entry per view state, by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetTable {
    pub neutral: LayoutTarget,
    pub focus_a: LayoutTarget,
    pub focus_b: LayoutTarget,
}

impl TargetTable {
    pub fn get(&self, state: ViewState) -> LayoutTarget {
        match state {
            ViewState::Neutral => self.neutral,
            ViewState::FocusA => self.focus_a,
            ViewState::FocusB => self.focus_b,
        }
    }
}

/// Element as supplied by the content source, before validation.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ElementSpec {
    pub id: String,
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    /// Navigation target on click. Falls back to `/project/<id>`.
    #[serde(default)]
    pub route: Option<String>,
    pub positions: HashMap<ViewState, LayoutTarget>,
}

/// A validated satellite.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: String,
    title: String,
    description: String,
    category: Category,
    route: String,
    targets: TargetTable,
    orbit: OrbitParams,
}

impl Element {
    /// Validate a spec. Any missing or unusable target is an error; nothing
    /// is defaulted.
    pub fn from_spec(spec: &ElementSpec) -> Result<Self> {
        if spec.id.trim().is_empty() {
            return Err(HubError::EmptyId);
        }
        let lookup = |state: ViewState| -> Result<LayoutTarget> {
            let t = spec
                .positions
                .get(&state)
                .copied()
                .ok_or_else(|| HubError::MissingTarget {
                    id: spec.id.clone(),
                    state,
                })?;
            t.check().map_err(|reason| HubError::InvalidTarget {
                id: spec.id.clone(),
                state,
                reason,
            })?;
            Ok(t)
        };
        let targets = TargetTable {
            neutral: lookup(ViewState::Neutral)?,
            focus_a: lookup(ViewState::FocusA)?,
            focus_b: lookup(ViewState::FocusB)?,
        };
        Ok(Self {
            id: spec.id.clone(),
            title: spec.title.clone(),
            description: spec.description.clone(),
            category: spec.category,
            route: spec
                .route
                .clone()
                .unwrap_or_else(|| default_route(&spec.id)),
            targets,
            orbit: OrbitParams::from_id(&spec.id),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn targets(&self) -> &TargetTable {
        &self.targets
    }

    pub fn target(&self, state: ViewState) -> LayoutTarget {
        self.targets.get(state)
    }

    pub fn orbit(&self) -> &OrbitParams {
        &self.orbit
    }
}

/// Route used when a record names none.
pub fn default_route(id: &str) -> String {
    format!("/project/{}", id)
}

/// Validate a whole content list, rejecting duplicate ids.
pub fn build_elements(specs: &[ElementSpec]) -> Result<Vec<Element>> {
    let mut seen = HashSet::with_capacity(specs.len());
    specs
        .iter()
        .map(|spec| {
            if !seen.insert(spec.id.as_str()) {
                return Err(HubError::DuplicateId(spec.id.clone()));
            }
            Element::from_spec(spec)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: &str) -> ElementSpec {
        ElementSpec {
            id: id.to_string(),
            title: format!("Project {id}"),
            category: Category::A,
            description: String::new(),
            route: None,
            positions: HashMap::from([
                (ViewState::Neutral, LayoutTarget::new(10.0, 20.0, 1.0)),
                (ViewState::FocusA, LayoutTarget::new(10.0, 20.0, 1.6)),
                (ViewState::FocusB, LayoutTarget::new(10.0, 20.0, 0.8)),
            ]),
        }
    }

    #[test]
    fn complete_spec_builds() {
        let e = Element::from_spec(&spec("a1")).unwrap();
        assert_eq!(e.id(), "a1");
        assert_eq!(e.route(), "/project/a1");
        assert_eq!(e.target(ViewState::FocusA).scale, 1.6);
        assert_eq!(e.target(ViewState::FocusB).scale, 0.8);
    }

    #[test]
    fn missing_target_fails_fast() {
        let mut s = spec("a1");
        s.positions.remove(&ViewState::FocusB);
        match Element::from_spec(&s) {
            Err(HubError::MissingTarget { id, state }) => {
                assert_eq!(id, "a1");
                assert_eq!(state, ViewState::FocusB);
            }
            other => panic!("expected MissingTarget, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_scale_rejected() {
        let mut s = spec("a1");
        s.positions.insert(ViewState::Neutral, LayoutTarget::new(0.0, 0.0, 0.0));
        assert!(matches!(
            Element::from_spec(&s),
            Err(HubError::InvalidTarget { state: ViewState::Neutral, .. })
        ));
    }

    #[test]
    fn nan_position_rejected() {
        let mut s = spec("a1");
        s.positions.insert(ViewState::FocusA, LayoutTarget::new(f32::NAN, 0.0, 1.0));
        assert!(matches!(Element::from_spec(&s), Err(HubError::InvalidTarget { .. })));
    }

    #[test]
    fn empty_id_rejected() {
        assert!(matches!(Element::from_spec(&spec("  ")), Err(HubError::EmptyId)));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = build_elements(&[spec("a1"), spec("a2"), spec("a1")]).unwrap_err();
        assert!(matches!(err, HubError::DuplicateId(id) if id == "a1"));
    }

    #[test]
    fn explicit_route_kept() {
        let mut s = spec("a1");
        s.route = Some("/project1".into());
        assert_eq!(Element::from_spec(&s).unwrap().route(), "/project1");
    }

    #[test]
    fn spec_from_json() {
        let json = r#"{
            "id": "d9",
            "title": "Nine",
            "category": "B",
            "positions": {
                "neutral":  { "top": 15, "left": 60, "scale": 1.1 },
                "focus_a":  { "top": 15, "left": 60, "scale": 0.8 },
                "focus_b":  { "top": 15, "left": 60, "scale": 1.7 }
            }
        }"#;
        let s: ElementSpec = serde_json::from_str(json).unwrap();
        let e = Element::from_spec(&s).unwrap();
        assert_eq!(e.category(), Category::B);
        assert_eq!(e.target(ViewState::FocusB).scale, 1.7);
    }
}
