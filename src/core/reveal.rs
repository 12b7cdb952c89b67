//! Scroll-triggered reveal
//!
//! A [`RevealLatch`] is a two-state machine, `Pending -> Revealed`, with a
//! single allowed transition. [`RevealController`] pairs the latch with the
//! viewport observation that feeds it: the observation is released on the
//! first reveal and again (idempotently) on teardown. The latch alone already
//! guarantees one-shot behaviour, whatever the observer keeps reporting.

use super::lifecycle::Subscription;

/// Fraction of the element's area that must be visible to reveal it
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Entrance animation duration in milliseconds
pub const REVEAL_DURATION_MS: u32 = 700;

/// Slack for ratios reported just below the threshold they crossed
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }

    /// Utility classes for the element in this state
    pub fn classes(&self) -> &'static str {
        match self {
            RevealState::Pending => "transition-all duration-700 will-change-transform opacity-0 translate-y-4",
            RevealState::Revealed => "transition-all duration-700 will-change-transform opacity-100 translate-y-0",
        }
    }
}

/// One visibility report from the viewport observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Visibility {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }

    pub fn crosses(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }
}

/// One-shot latch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Fire the latch. Returns `true` only on the `Pending -> Revealed` transition.
    pub fn trigger(&mut self) -> bool {
        match self.state {
            RevealState::Pending => {
                self.state = RevealState::Revealed;
                true
            }
            RevealState::Revealed => false,
        }
    }
}

/// Per-instance reveal controller
#[derive(Debug)]
pub struct RevealController {
    latch: RevealLatch,
    threshold: f64,
    delay_ms: u32,
    observation: Option<Subscription>,
}

impl RevealController {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            latch: RevealLatch::new(),
            threshold: REVEAL_THRESHOLD,
            delay_ms,
            observation: None,
        }
    }

    pub fn state(&self) -> RevealState {
        self.latch.state()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn is_observing(&self) -> bool {
        self.observation.is_some()
    }

    /// Whether a new observation should be attached
    pub fn wants_observation(&self) -> bool {
        !self.is_observing() && !self.latch.state().is_revealed()
    }

    /// Take ownership of the viewport observation.
    ///
    /// Attaching after the reveal already happened releases `observation` at once.
    pub fn attach(&mut self, observation: Subscription) {
        if self.latch.state().is_revealed() {
            observation.detach();
            return;
        }
        self.observation = Some(observation);
    }

    /// Feed one visibility report. Returns `true` when this report revealed the element.
    pub fn on_visibility(&mut self, visibility: Visibility) -> bool {
        if !visibility.crosses(self.threshold) {
            return false;
        }
        let fired = self.latch.trigger();
        if fired {
            self.stop_observing();
        }
        fired
    }

    /// Unmount: release the observation whether or not the reveal happened
    pub fn teardown(&mut self) {
        self.stop_observing();
    }

    fn stop_observing(&mut self) {
        if let Some(observation) = self.observation.take() {
            observation.detach();
        }
    }

    /// Inline style carrying the per-instance transition delay (empty when zero)
    pub fn transition_style(&self) -> String {
        transition_delay_style(self.delay_ms)
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(0)
    }
}

/// `transition-delay` declaration for a delay in milliseconds
pub fn transition_delay_style(delay_ms: u32) -> String {
    if delay_ms == 0 {
        String::new()
    } else {
        format!("transition-delay: {delay_ms}ms;")
    }
}
