//! View state → per-element layout targets and emphasis.
//!
//! Pure: the output depends only on the state, the element table and the
//! hovered id, never on how often it is called.

use crate::view::ViewState;

use super::element::{Element, LayoutTarget};

/// Visual weight of an element in the current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emphasis {
    /// Element belongs to the spotlighted lobe (always true in Neutral).
    pub related: bool,
    pub opacity: f32,
    /// 0 = full colour, 1 = greyscale.
    pub desaturation: f32,
}

impl Emphasis {
    pub const FULL: Emphasis = Emphasis {
        related: true,
        opacity: 1.0,
        desaturation: 0.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLayout {
    pub target: LayoutTarget,
    pub emphasis: Emphasis,
    /// Drawn above siblings (pointer is over it).
    pub promoted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LayoutResolver {
    pub demoted_opacity: f32,
    pub demoted_desaturation: f32,
    /// Extra scale applied to the hovered element on top of its state target.
    pub hover_boost: f32,
}

impl Default for LayoutResolver {
    fn default() -> Self {
        Self {
            demoted_opacity: 0.15,
            demoted_desaturation: 1.0,
            hover_boost: 1.15,
        }
    }
}

impl LayoutResolver {
    /// Targets for one element. Every element follows the table entry of the
    /// active state; relatedness only decides emphasis.
    pub fn resolve_one(&self, state: ViewState, element: &Element) -> ResolvedLayout {
        let related = match state.focus() {
            None => true,
            Some(region) => element.category() == region,
        };
        let emphasis = if related {
            Emphasis::FULL
        } else {
            Emphasis {
                related: false,
                opacity: self.demoted_opacity,
                desaturation: self.demoted_desaturation,
            }
        };
        ResolvedLayout {
            target: element.target(state),
            emphasis,
            promoted: false,
        }
    }

    pub fn resolve(&self, state: ViewState, elements: &[Element]) -> Vec<ResolvedLayout> {
        self.resolve_hovered(state, elements, None)
    }

    /// As [`resolve`](Self::resolve), with the hover boost and draw-order
    /// promotion applied to the element whose id is `hovered`.
    pub fn resolve_hovered(
        &self,
        state: ViewState,
        elements: &[Element],
        hovered: Option<&str>,
    ) -> Vec<ResolvedLayout> {
        elements
            .iter()
            .map(|e| {
                let mut r = self.resolve_one(state, e);
                if hovered == Some(e.id()) {
                    self.apply_hover(&mut r);
                }
                r
            })
            .collect()
    }

    pub fn apply_hover(&self, resolved: &mut ResolvedLayout) {
        resolved.target.scale *= self.hover_boost;
        resolved.promoted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::emblem::RegionTag;

    fn elements() -> Vec<Element> {
        Catalog::bundled().elements().unwrap()
    }

    #[test]
    fn neutral_everything_related() {
        let els = elements();
        let out = LayoutResolver::default().resolve(ViewState::Neutral, &els);
        assert!(out.iter().all(|r| r.emphasis == Emphasis::FULL));
        for (r, e) in out.iter().zip(&els) {
            assert_eq!(r.target, e.targets().neutral);
        }
    }

    #[test]
    fn focus_a_demotes_b() {
        let els = elements();
        let res = LayoutResolver::default();
        let out = res.resolve(ViewState::FocusA, &els);
        for (r, e) in out.iter().zip(&els) {
            match e.category() {
                RegionTag::A => assert_eq!(r.emphasis, Emphasis::FULL),
                RegionTag::B => {
                    assert!(!r.emphasis.related);
                    assert_eq!(r.emphasis.opacity, res.demoted_opacity);
                    assert_eq!(r.emphasis.desaturation, res.demoted_desaturation);
                }
            }
            assert_eq!(r.target, e.targets().focus_a);
        }
    }

    #[test]
    fn focus_b_mirrors() {
        let els = elements();
        let out = LayoutResolver::default().resolve(ViewState::FocusB, &els);
        for (r, e) in out.iter().zip(&els) {
            assert_eq!(r.emphasis.related, e.category() == RegionTag::B);
            assert_eq!(r.target, e.targets().focus_b);
        }
    }

    #[test]
    fn resolve_is_idempotent() {
        let els = elements();
        let res = LayoutResolver::default();
        for state in ViewState::ALL {
            assert_eq!(res.resolve(state, &els), res.resolve(state, &els));
        }
    }

    #[test]
    fn hover_boosts_only_the_hovered() {
        let els = elements();
        let res = LayoutResolver::default();
        let plain = res.resolve(ViewState::FocusB, &els);
        let hovered = res.resolve_hovered(ViewState::FocusB, &els, Some("d2"));
        for ((p, h), e) in plain.iter().zip(&hovered).zip(&els) {
            if e.id() == "d2" {
                assert!((h.target.scale - p.target.scale * 1.15).abs() < 1e-6);
                assert!(h.promoted);
                assert_eq!(h.emphasis, p.emphasis);
            } else {
                assert_eq!(p, h);
            }
        }
    }
}
