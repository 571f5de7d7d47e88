//! Scene controller: owns the emblem, the view state machine and the
//! satellites, and runs one frame at a time.
//!
//! Frame order inside [`SceneController::tick`]:
//!
//! ```text
//! drain pointer events → view state machine (+ debounce poll)
//!   → resolve layout targets → advance springs, glow, emblem spin
//! ```
//!
//! Events are queued by the shell whenever they arrive and only acted on
//! inside the next tick. Nothing here blocks or spawns.

use std::collections::VecDeque;

use crate::config::HubConfig;
use crate::content::Catalog;
use crate::emblem::mask::LobeHover;
use crate::emblem::{classify, project, Emblem, EmblemTransform, RegionTag};
use crate::error::Result;
use crate::fast_math::{ease_out, lerp};
use crate::geometry::Vec3;
use crate::layout::{Element, Emphasis, LayoutResolver, ResolvedLayout, Spring, SpringConfig, SpringVec3};
use crate::orbit::OrbitOffset;
use crate::view::{SubscriptionId, Transition, ViewState, ViewStateListener, ViewStateMachine};

/// Raw input, as delivered by the presentation surface.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Pointer is over the emblem; world-space surface hit.
    EmblemMove(Vec3),
    /// Discrete click on the emblem surface.
    EmblemClick(Vec3),
    /// Pointer left the emblem's interactive area.
    EmblemLeave,
    /// Pointer entered (`Some`) or left (`None`) a satellite.
    ElementHover(Option<String>),
    ElementClick(String),
}

/// Outbound notifications for the navigation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneSignal {
    /// A lobe was clicked. `route` is set only if the catalog maps it.
    RegionActivated {
        region: RegionTag,
        route: Option<String>,
    },
    ElementActivated {
        id: String,
        route: String,
    },
    ViewChanged(Transition),
}

/// Spring-driven displayed values of one satellite.
#[derive(Debug, Clone)]
struct ElementMotion {
    /// top, left, scale
    placement: SpringVec3,
    opacity: Spring,
    desaturation: Spring,
}

impl ElementMotion {
    fn new(initial: &ResolvedLayout, config: SpringConfig) -> Self {
        Self {
            placement: SpringVec3::new(initial.target.to_array(), config),
            opacity: Spring::new(initial.emphasis.opacity, config),
            desaturation: Spring::new(initial.emphasis.desaturation, config),
        }
    }

    fn retarget(&mut self, r: &ResolvedLayout) {
        self.placement.set_target(r.target.to_array());
        self.opacity.set_target(r.emphasis.opacity);
        self.desaturation.set_target(r.emphasis.desaturation);
    }

    fn tick(&mut self, dt: f32) {
        self.placement.tick(dt);
        self.opacity.tick(dt);
        self.desaturation.tick(dt);
    }

    fn is_animating(&self) -> bool {
        self.placement.is_animating()
            || self.opacity.is_animating()
            || self.desaturation.is_animating()
    }
}

/// Timed ease-out toward a 0/1 goal. A new goal restarts the fade from the
/// current value.
#[derive(Debug, Clone, Copy, Default)]
struct GlowFade {
    from: f32,
    to: f32,
    progress: f32,
}

impl GlowFade {
    fn value(&self) -> f32 {
        lerp(self.from, self.to, ease_out(self.progress))
    }

    fn advance(&mut self, goal: f32, step: f32) {
        if goal != self.to {
            self.from = self.value();
            self.to = goal;
            self.progress = 0.0;
        }
        self.progress = (self.progress + step).min(1.0);
    }
}

/// What the shell draws for one satellite this frame.
#[derive(Debug, Clone, Copy)]
pub struct DisplayedElement<'a> {
    pub element: &'a Element,
    /// Spring-interpolated anchor, percent of the cluster area.
    pub top: f32,
    pub left: f32,
    /// Idle drift on top of the anchor, points.
    pub drift: OrbitOffset,
    pub scale: f32,
    pub opacity: f32,
    pub desaturation: f32,
    pub related: bool,
    pub promoted: bool,
}

pub struct SceneController {
    emblem: Emblem,
    machine: ViewStateMachine,
    resolver: LayoutResolver,
    elements: Vec<Element>,
    resolved: Vec<ResolvedLayout>,
    motion: Vec<ElementMotion>,
    queue: VecDeque<PointerEvent>,
    hovered_element: Option<String>,
    catalog: Catalog,
    glow: [GlowFade; 2],
    glow_rate: f32,
    clock: f64,
}

impl SceneController {
    pub fn new(catalog: &Catalog, config: &HubConfig) -> Result<Self> {
        config.validate()?;
        let elements = catalog.elements()?;
        let resolver = config.layout;
        let resolved = resolver.resolve(ViewState::Neutral, &elements);
        let motion = resolved
            .iter()
            .map(|r| ElementMotion::new(r, config.spring))
            .collect();
        log::info!("scene: {} satellites", elements.len());
        Ok(Self {
            emblem: config.emblem.build(),
            machine: ViewStateMachine::new(config.debounce),
            resolver,
            elements,
            resolved,
            motion,
            queue: VecDeque::new(),
            hovered_element: None,
            catalog: catalog.clone(),
            glow: [GlowFade::default(); 2],
            glow_rate: 1.0 / config.glow.fade.max(1e-3),
            clock: 0.0,
        })
    }

    /// Queue an input event for the next tick.
    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push_back(event);
    }

    /// Register a view state observer (cursor hook, labels, ...).
    pub fn subscribe(&mut self, listener: Box<dyn ViewStateListener>) -> SubscriptionId {
        self.machine.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.machine.unsubscribe(id)
    }

    /// Run one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Vec<SceneSignal> {
        let dt = dt.max(0.0);
        let now = self.clock + dt as f64;
        let mut signals = Vec::new();

        // 1. input, against the pose the pointer actually saw
        let tf = self.emblem.transform();
        while let Some(event) = self.queue.pop_front() {
            self.handle(event, &tf, now, &mut signals);
        }

        // 2. deferred exit
        if let Some(t) = self.machine.poll(now) {
            signals.push(SceneSignal::ViewChanged(t));
        }

        // 3. targets
        let state = self.machine.current();
        self.resolved =
            self.resolver
                .resolve_hovered(state, &self.elements, self.hovered_element.as_deref());
        for (m, r) in self.motion.iter_mut().zip(&self.resolved) {
            m.retarget(r);
        }

        // 4. motion
        for m in &mut self.motion {
            m.tick(dt);
        }
        let step = dt * self.glow_rate;
        for (g, region) in self.glow.iter_mut().zip([RegionTag::A, RegionTag::B]) {
            let goal = if state.focus() == Some(region) { 1.0 } else { 0.0 };
            g.advance(goal, step);
        }
        self.emblem.advance(dt);
        self.clock = now;

        signals
    }

    fn handle(
        &mut self,
        event: PointerEvent,
        tf: &EmblemTransform,
        now: f64,
        signals: &mut Vec<SceneSignal>,
    ) {
        match event {
            PointerEvent::EmblemMove(world) => match project(world, tf) {
                Ok((x, y)) => {
                    if let Some(t) = self.machine.hover(classify(x, y), now) {
                        signals.push(SceneSignal::ViewChanged(t));
                    }
                }
                Err(e) => log::warn!("scene: hover ignored: {e}"),
            },
            PointerEvent::EmblemClick(world) => match project(world, tf) {
                Ok((x, y)) => {
                    let region = classify(x, y);
                    let route = self.catalog.region_route(region).map(str::to_string);
                    log::info!("scene: region {:?} activated (route {:?})", region, route);
                    signals.push(SceneSignal::RegionActivated { region, route });
                }
                Err(e) => log::warn!("scene: click ignored: {e}"),
            },
            PointerEvent::EmblemLeave => self.machine.leave(now),
            PointerEvent::ElementHover(id) => self.hovered_element = id,
            PointerEvent::ElementClick(id) => match self.catalog.route_for(&id) {
                Some(route) => {
                    log::info!("scene: element {} activated -> {}", id, route);
                    signals.push(SceneSignal::ElementActivated { id, route });
                }
                None => log::warn!("scene: click on unknown element `{id}`"),
            },
        }
    }

    pub fn view_state(&self) -> ViewState {
        self.machine.current()
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn emblem(&self) -> &Emblem {
        &self.emblem
    }

    pub fn emblem_transform(&self) -> EmblemTransform {
        self.emblem.transform()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn resolved(&self) -> &[ResolvedLayout] {
        &self.resolved
    }

    /// Glow / hover intensity per lobe in [0, 1], eased out.
    pub fn lobe_hover(&self) -> LobeHover {
        LobeHover {
            a: self.glow[0].value(),
            b: self.glow[1].value(),
        }
    }

    /// True while any spring is still moving.
    pub fn is_settling(&self) -> bool {
        self.motion.iter().any(ElementMotion::is_animating)
    }

    /// Current displayed values, in draw order (promoted elements last).
    pub fn displayed(&self) -> Vec<DisplayedElement<'_>> {
        let mut out: Vec<_> = self
            .elements
            .iter()
            .zip(&self.motion)
            .zip(&self.resolved)
            .map(|((element, m), r)| {
                let Emphasis { related, .. } = r.emphasis;
                let [top, left, scale] = m.placement.get();
                DisplayedElement {
                    element,
                    top,
                    left,
                    drift: element.orbit().offset(self.clock),
                    scale,
                    opacity: m.opacity.get(),
                    desaturation: m.desaturation.get(),
                    related,
                    promoted: r.promoted,
                }
            })
            .collect();
        out.sort_by_key(|d| d.promoted);
        out
    }

    /// Cancel pending timers and drop queued input.
    pub fn teardown(&mut self) {
        self.machine.teardown();
        self.queue.clear();
        log::debug!("scene: torn down");
    }
}

impl Drop for SceneController {
    fn drop(&mut self) {
        if !self.machine.is_torn_down() {
            self.teardown();
        }
    }
}
