//! View state: which lobe (if any) the page is spotlighting.

pub mod state;
pub mod timer;

pub use state::{
    CursorAffordance, CursorHook, SubscriptionId, Transition, ViewState, ViewStateListener,
    ViewStateMachine,
};
pub use timer::ScheduledReset;
