//! Pointer interaction tracking
//!
//! Turns raw pointer-move events over a bounded region into a rate-limited
//! relative-position signal, and derives the visual transforms the page uses:
//!
//! - **Glow**: radial gradient centred on the pointer (hero card). Listens on an
//!   ancestor scope, ignores events outside the box, keeps the last sample when
//!   the pointer leaves.
//! - **Tilt**: card rotation of at most ±[`TILT_MAX_DEGREES`] on each axis,
//!   returning to neutral on exit.
//! - **Magnetic**: button translation scaled by a strength constant, returning
//!   to zero on exit.
//!
//! Recomputation happens at most once per animation frame. Events arriving
//! before the frame fires overwrite each other in a [`FrameCoalescer`]; only
//! the latest sample is published.

use super::geometry::{Fraction, GeometryProvider};

/// Maximum tilt deflection in degrees, reached at the element's edges
pub const TILT_MAX_DEGREES: f64 = 4.0;

/// Default magnetic strength in pixels of travel across the whole element
pub const DEFAULT_MAGNETIC_STRENGTH: f64 = 10.0;

/// Pointer position as a percentage of the tracked element's box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    x: f64,
    y: f64,
}

impl PointerSample {
    /// Resting glow centre of the hero card
    pub const HERO_GLOW_ORIGIN: PointerSample = PointerSample { x: 55.0, y: 30.0 };
    /// Resting glow centre of a tilt card
    pub const CARD_GLOW_ORIGIN: PointerSample = PointerSample { x: 50.0, y: 45.0 };
    pub const CENTER: PointerSample = PointerSample { x: 50.0, y: 50.0 };

    /// Create a sample, clamping both axes to `[0, 100]`
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x.clamp(0.0, 100.0),
            y: y.clamp(0.0, 100.0),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn to_fraction(self) -> Fraction {
        Fraction::new(self.x / 100.0, self.y / 100.0)
    }

    /// `radial-gradient(<radius>px circle at x% y%, <stops>)` centred on this sample
    pub fn radial_gradient(&self, radius_px: u32, stops: &str) -> String {
        format!(
            "radial-gradient({radius_px}px circle at {:.2}% {:.2}%, {stops})",
            self.x, self.y
        )
    }
}

impl From<Fraction> for PointerSample {
    fn from(f: Fraction) -> Self {
        Self::new(f.x() * 100.0, f.y() * 100.0)
    }
}

/// Where the caller attaches its pointer-move listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenScope {
    /// On the tracked element itself
    Element,
    /// On a wider ancestor (the window), so decorative padding does not cut tracking
    Ancestor,
}

/// Behaviour of a tracker instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerVariant {
    Glow,
    Tilt { max_degrees: f64 },
    Magnetic { strength: f64 },
}

impl TrackerVariant {
    pub fn tilt() -> Self {
        TrackerVariant::Tilt {
            max_degrees: TILT_MAX_DEGREES,
        }
    }

    pub fn magnetic(strength: f64) -> Self {
        TrackerVariant::Magnetic { strength }
    }

    pub fn scope(&self) -> ListenScope {
        match self {
            TrackerVariant::Glow => ListenScope::Ancestor,
            TrackerVariant::Tilt { .. } | TrackerVariant::Magnetic { .. } => ListenScope::Element,
        }
    }

    /// Whether events outside the element's box must be ignored
    pub fn requires_containment(&self) -> bool {
        self.scope() == ListenScope::Ancestor
    }

    /// Whether leaving the element returns the visual to neutral
    pub fn resets_on_exit(&self) -> bool {
        !matches!(self, TrackerVariant::Glow)
    }

    /// CSS `transform` for the variant, `None` for the glow which paints a gradient instead
    pub fn transform_css(&self, state: &PointerState) -> Option<String> {
        match *self {
            TrackerVariant::Glow => None,
            TrackerVariant::Tilt { max_degrees } => Some(state.tilt_angles(max_degrees).css()),
            TrackerVariant::Magnetic { strength } => Some(state.magnetic_offset(strength).css()),
        }
    }
}

/// Last-sample-wins slot for per-frame rate limiting
///
/// [`offer`](Self::offer) reports whether the caller has to request a new
/// animation frame; while one is outstanding further samples only replace the
/// stored one. [`take`](Self::take) is called from the frame callback.
#[derive(Debug, Clone)]
pub struct FrameCoalescer<T> {
    latest: Option<T>,
    frame_requested: bool,
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self {
            latest: None,
            frame_requested: false,
        }
    }

    /// Store `sample`, returning `true` if a frame must be requested
    pub fn offer(&mut self, sample: T) -> bool {
        self.latest = Some(sample);
        if self.frame_requested {
            false
        } else {
            self.frame_requested = true;
            true
        }
    }

    /// Consume the pending sample at frame time
    pub fn take(&mut self) -> Option<T> {
        self.frame_requested = false;
        self.latest.take()
    }

    /// Drop the pending sample. Returns `true` if a frame was outstanding.
    pub fn cancel(&mut self) -> bool {
        self.latest = None;
        std::mem::replace(&mut self.frame_requested, false)
    }

    pub fn is_pending(&self) -> bool {
        self.frame_requested
    }
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rotation angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltAngles {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl TiltAngles {
    pub const NEUTRAL: TiltAngles = TiltAngles {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn css(&self) -> String {
        format!(
            "perspective(900px) rotateX({:.3}deg) rotateY({:.3}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Translation in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn css(&self) -> String {
        format!("translate3d({:.3}px, {:.3}px, 0)", self.x, self.y)
    }
}

/// Published tracker state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Last published position, relative to the box
    pub fraction: Fraction,
    /// The same position in percent, kept exact for resting origins
    pub sample: PointerSample,
    /// Pointer currently over the element (always `true` after the first glow sample)
    pub active: bool,
}

impl PointerState {
    pub fn resting_at(origin: PointerSample) -> Self {
        Self {
            fraction: origin.to_fraction(),
            sample: origin,
            active: false,
        }
    }

    fn published(fraction: Fraction) -> Self {
        Self {
            fraction,
            sample: fraction.into(),
            active: true,
        }
    }

    pub fn sample(&self) -> PointerSample {
        self.sample
    }

    /// Rotation for a tilt of at most `max_degrees`; neutral while inactive
    pub fn tilt_angles(&self, max_degrees: f64) -> TiltAngles {
        if !self.active {
            return TiltAngles::NEUTRAL;
        }
        // `0.5 - y` rather than `-(y - 0.5)`, which is -0.0 on the midline
        TiltAngles {
            rotate_x: (0.5 - self.fraction.y()) * 2.0 * max_degrees,
            rotate_y: (self.fraction.x() - 0.5) * 2.0 * max_degrees,
        }
    }

    /// Translation scaled by `strength`; zero while inactive
    pub fn magnetic_offset(&self, strength: f64) -> Offset {
        if !self.active {
            return Offset::ZERO;
        }
        let (dx, dy) = self.fraction.from_center();
        Offset {
            x: dx * strength,
            y: dy * strength,
        }
    }

    /// Opacity of a hover glow overlay
    pub fn glow_opacity(&self) -> f64 {
        if self.active { 1.0 } else { 0.0 }
    }
}

/// Per-instance pointer tracker
#[derive(Debug, Clone)]
pub struct PointerTracker {
    variant: TrackerVariant,
    pending: FrameCoalescer<Fraction>,
    state: PointerState,
}

impl PointerTracker {
    /// Create a tracker resting at `origin` until the first sample is published
    pub fn new(variant: TrackerVariant, origin: PointerSample) -> Self {
        Self {
            variant,
            pending: FrameCoalescer::new(),
            state: PointerState::resting_at(origin),
        }
    }

    pub fn glow() -> Self {
        Self::new(TrackerVariant::Glow, PointerSample::HERO_GLOW_ORIGIN)
    }

    pub fn tilt() -> Self {
        Self::new(TrackerVariant::tilt(), PointerSample::CARD_GLOW_ORIGIN)
    }

    pub fn magnetic(strength: f64) -> Self {
        Self::new(TrackerVariant::magnetic(strength), PointerSample::CENTER)
    }

    pub fn variant(&self) -> TrackerVariant {
        self.variant
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn is_frame_pending(&self) -> bool {
        self.pending.is_pending()
    }

    /// Record a pointer-move at client coordinates `(x, y)`.
    ///
    /// Returns `true` when the caller must schedule an animation frame and
    /// call [`on_frame`](Self::on_frame) from it. Events with no geometry, a
    /// zero-area box, or (for containment-gated variants) outside the box are
    /// ignored.
    pub fn on_move(&mut self, geometry: &impl GeometryProvider, x: f64, y: f64) -> bool {
        let Some(rect) = geometry.bounding_rect() else {
            return false;
        };
        if self.variant.requires_containment() && !rect.contains(x, y) {
            return false;
        }
        match rect.fraction_of(x, y) {
            Some(fraction) => self.pending.offer(fraction),
            None => false,
        }
    }

    /// Publish the latest coalesced sample, if any
    pub fn on_frame(&mut self) -> Option<PointerState> {
        let fraction = self.pending.take()?;
        self.state = PointerState::published(fraction);
        Some(self.state)
    }

    /// Pointer left the element.
    ///
    /// Resetting variants drop any pending sample and go inactive, keeping the
    /// last position so overlays fade out in place. The glow is unaffected.
    pub fn on_leave(&mut self) -> Option<PointerState> {
        if !self.variant.resets_on_exit() {
            return None;
        }
        self.pending.cancel();
        self.state.active = false;
        Some(self.state)
    }

    /// Discard pending work on teardown. Returns `true` if a frame was outstanding.
    pub fn cancel(&mut self) -> bool {
        self.pending.cancel()
    }

    pub fn transform_css(&self) -> Option<String> {
        self.variant.transform_css(&self.state)
    }
}
