//! Portfolio content: the bundled project list and JSON catalogs.
//!
//! The hub only consumes this; it never edits targets or routes.

use std::collections::HashMap;

use crate::emblem::RegionTag;
use crate::error::Result;
use crate::layout::element::default_route;
use crate::layout::{build_elements, Category, Element, ElementSpec, LayoutTarget};
use crate::view::ViewState;

#[derive(Debug, Clone, PartialEq, Default, serde::Deserialize, serde::Serialize)]
pub struct Catalog {
    pub elements: Vec<ElementSpec>,
    /// Where a click on each lobe navigates. Empty unless configured.
    #[serde(default)]
    pub region_routes: HashMap<RegionTag, String>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        log::info!(
            "catalog: {} elements, {} region routes",
            catalog.elements.len(),
            catalog.region_routes.len()
        );
        Ok(catalog)
    }

    /// Validated elements in catalog order.
    pub fn elements(&self) -> Result<Vec<Element>> {
        build_elements(&self.elements)
    }

    /// Navigation target for an element id, with the `/project/<id>`
    /// fallback for records that carry no route. `None` for unknown ids.
    pub fn route_for(&self, id: &str) -> Option<String> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.route.clone().unwrap_or_else(|| default_route(&e.id)))
    }

    pub fn region_route(&self, region: RegionTag) -> Option<&str> {
        self.region_routes.get(&region).map(String::as_str)
    }

    /// The eight-project portfolio: four art pieces in lobe A, four design
    /// pieces in lobe B.
    pub fn bundled() -> Self {
        let elements = vec![
            project("a1", "Six Bodies, Awaiting the Flame", Category::A, "AI generated topographic maps.", "/project1", (14.0, 40.0), [1.15, 1.7, 0.8]),
            project("a2", "Pixelated Scroll for the Afterlife", Category::A, "Interactive sound installation.", "/project2", (20.0, 20.0), [1.0, 1.6, 0.8]),
            project("a3", "The Starlight Syntax", Category::A, "Procedural plant generation.", "/project3", (50.0, 15.0), [1.2, 1.6, 0.8]),
            project("a4", "Glitch in the Shell", Category::A, "VR storytelling experience.", "/project4", (75.0, 30.0), [1.1, 1.6, 0.8]),
            project("d1", "Mind Made Manifest", Category::B, "Fintech mobile application interface.", "/project5", (15.0, 60.0), [1.1, 0.8, 1.7]),
            project("d2", "Boundless Food. Plc", Category::B, "IoT dashboard design system.", "/project6", (25.0, 75.0), [1.0, 0.8, 1.7]),
            project("d3", "Glitch in the Shell", Category::B, "Sustainability tracking platform.", "/project7", (50.0, 75.0), [1.1, 0.8, 1.7]),
            project("d4", "Glitch in the Shell", Category::B, "Medical patient portal.", "/project8", (75.0, 63.0), [1.1, 0.8, 1.7]),
        ];
        Self {
            elements,
            region_routes: HashMap::new(),
        }
    }
}

/// One bundled project. The pieces stay in place across states and only
/// breathe in scale: `scales` is `[neutral, focus_a, focus_b]`.
fn project(
    id: &str,
    title: &str,
    category: Category,
    description: &str,
    route: &str,
    (top, left): (f32, f32),
    scales: [f32; 3],
) -> ElementSpec {
    let positions = ViewState::ALL
        .iter()
        .zip(scales)
        .map(|(&state, scale)| (state, LayoutTarget::new(top, left, scale)))
        .collect();
    ElementSpec {
        id: id.to_string(),
        title: title.to_string(),
        category,
        description: description.to_string(),
        route: Some(route.to_string()),
        positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_is_valid() {
        let els = Catalog::bundled().elements().unwrap();
        assert_eq!(els.len(), 8);
        assert_eq!(els.iter().filter(|e| e.category() == Category::A).count(), 4);
        assert_eq!(els.iter().filter(|e| e.category() == Category::B).count(), 4);
    }

    #[test]
    fn bundled_focus_scales_favour_own_lobe() {
        for e in Catalog::bundled().elements().unwrap() {
            let own = e.target(ViewState::for_region(e.category())).scale;
            let other = e.target(ViewState::for_region(e.category().other())).scale;
            assert!(own > e.target(ViewState::Neutral).scale);
            assert!(other < e.target(ViewState::Neutral).scale);
        }
    }

    #[test]
    fn bundled_routes() {
        let els = Catalog::bundled().elements().unwrap();
        assert_eq!(els[0].route(), "/project1");
        assert_eq!(els[7].route(), "/project8");
    }

    #[test]
    fn route_lookup() {
        let c = Catalog::bundled();
        assert_eq!(c.route_for("d3").as_deref(), Some("/project7"));
        assert_eq!(c.route_for("missing"), None);
    }

    #[test]
    fn no_region_routes_by_default() {
        let c = Catalog::bundled();
        assert!(c.region_route(RegionTag::A).is_none());
        assert!(c.region_route(RegionTag::B).is_none());
    }

    #[test]
    fn json_catalog_with_region_routes() {
        let json = r#"{
            "elements": [{
                "id": "x",
                "title": "X",
                "category": "A",
                "positions": {
                    "neutral": { "top": 1, "left": 2, "scale": 1 },
                    "focus_a": { "top": 1, "left": 2, "scale": 2 },
                    "focus_b": { "top": 1, "left": 2, "scale": 0.5 }
                }
            }],
            "region_routes": { "A": "/art" }
        }"#;
        let c = Catalog::from_json(json).unwrap();
        assert_eq!(c.region_route(RegionTag::A), Some("/art"));
        assert_eq!(c.elements().unwrap()[0].route(), "/project/x");
    }

    #[test]
    fn json_catalog_missing_state_fails_on_build() {
        let json = r#"{ "elements": [{
            "id": "x", "title": "X", "category": "B",
            "positions": { "neutral": { "top": 1, "left": 2, "scale": 1 } }
        }] }"#;
        let c = Catalog::from_json(json).unwrap();
        assert!(c.elements().is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Catalog::from_json("{ nope").is_err());
    }
}
