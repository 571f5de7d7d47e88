//! Tri-state view controller.
//!
//! `ViewStateMachine` is the single writer of the current [`ViewState`].
//! Entry into a focus state is immediate; exit back to Neutral goes through a
//! short debounce so pointer jitter across the sphere's silhouette does not
//! flash the layout. Every hover cancels a pending reset before anything
//! else is evaluated.

use crate::emblem::RegionTag;

use super::timer::ScheduledReset;

/// Default exit debounce, seconds.
pub const DEFAULT_DEBOUNCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Neutral,
    FocusA,
    FocusB,
}

impl ViewState {
    pub const ALL: [ViewState; 3] = [ViewState::Neutral, ViewState::FocusA, ViewState::FocusB];

    pub fn for_region(region: RegionTag) -> Self {
        match region {
            RegionTag::A => ViewState::FocusA,
            RegionTag::B => ViewState::FocusB,
        }
    }

    /// The lobe this state spotlights, if any.
    pub fn focus(self) -> Option<RegionTag> {
        match self {
            ViewState::Neutral => None,
            ViewState::FocusA => Some(RegionTag::A),
            ViewState::FocusB => Some(RegionTag::B),
        }
    }

    pub fn is_focus(self) -> bool {
        self != ViewState::Neutral
    }
}

/// A committed state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ViewState,
    pub to: ViewState,
}

/// Observer of committed transitions. Closures `FnMut(Transition)` work too.
pub trait ViewStateListener {
    fn on_transition(&mut self, transition: Transition);
}

impl<F: FnMut(Transition)> ViewStateListener for F {
    fn on_transition(&mut self, transition: Transition) {
        self(transition)
    }
}

/// Cursor shape the presentation surface should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorAffordance {
    #[default]
    Default,
    Pointer,
}

impl CursorAffordance {
    pub fn for_state(state: ViewState) -> Self {
        if state.is_focus() {
            CursorAffordance::Pointer
        } else {
            CursorAffordance::Default
        }
    }
}

/// Listener adapter that reports cursor changes only when the affordance
/// actually flips.
pub struct CursorHook<F: FnMut(CursorAffordance)> {
    apply: F,
}

impl<F: FnMut(CursorAffordance)> CursorHook<F> {
    pub fn new(apply: F) -> Self {
        Self { apply }
    }
}

impl<F: FnMut(CursorAffordance)> ViewStateListener for CursorHook<F> {
    fn on_transition(&mut self, t: Transition) {
        let before = CursorAffordance::for_state(t.from);
        let after = CursorAffordance::for_state(t.to);
        if before != after {
            (self.apply)(after);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

pub struct ViewStateMachine {
    current: ViewState,
    reset: ScheduledReset,
    debounce: f64,
    listeners: Vec<(SubscriptionId, Box<dyn ViewStateListener>)>,
    next_id: usize,
    torn_down: bool,
}

impl std::fmt::Debug for ViewStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewStateMachine")
            .field("current", &self.current)
            .field("reset", &self.reset)
            .field("debounce", &self.debounce)
            .field("listeners", &self.listeners.len())
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

impl Default for ViewStateMachine {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl ViewStateMachine {
    pub fn new(debounce: f64) -> Self {
        Self {
            current: ViewState::Neutral,
            reset: ScheduledReset::new(),
            debounce: debounce.max(0.0),
            listeners: Vec::new(),
            next_id: 0,
            torn_down: false,
        }
    }

    pub fn current(&self) -> ViewState {
        self.current
    }

    pub fn reset_pending(&self) -> bool {
        self.reset.is_pending()
    }

    pub fn debounce(&self) -> f64 {
        self.debounce
    }

    pub fn subscribe(&mut self, listener: Box<dyn ViewStateListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Pointer is over `region`. Switches focus immediately.
    pub fn hover(&mut self, region: RegionTag, _now: f64) -> Option<Transition> {
        if self.torn_down {
            return None;
        }
        if self.reset.cancel() {
            log::debug!("view: pending reset cancelled by hover {:?}", region);
        }
        self.commit(ViewState::for_region(region))
    }

    /// Pointer left the emblem area. Neutral is committed by [`poll`](Self::poll)
    /// once the debounce window has passed without a new hover.
    pub fn leave(&mut self, now: f64) {
        if self.torn_down {
            return;
        }
        if self.current.is_focus() {
            self.reset.schedule(now, self.debounce);
            log::debug!("view: reset to neutral scheduled for t={:.3}", now + self.debounce);
        }
    }

    /// Fire the debounce if it is due. Call once per frame.
    pub fn poll(&mut self, now: f64) -> Option<Transition> {
        if self.torn_down {
            return None;
        }
        if self.reset.take_if_due(now) {
            return self.commit(ViewState::Neutral);
        }
        None
    }

    /// Cancel outstanding work and stop reacting to input.
    pub fn teardown(&mut self) {
        if self.reset.cancel() {
            log::debug!("view: pending reset cancelled by teardown");
        }
        self.listeners.clear();
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn commit(&mut self, next: ViewState) -> Option<Transition> {
        if next == self.current {
            return None;
        }
        let t = Transition {
            from: self.current,
            to: next,
        };
        self.current = next;
        log::debug!("view: {:?} -> {:?}", t.from, t.to);
        for (_, l) in self.listeners.iter_mut() {
            l.on_transition(t);
        }
        Some(t)
    }
}
