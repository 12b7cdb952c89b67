//! Bounding-box geometry for pointer tracking
//!
//! Pointer math never touches the DOM directly. Components hand the tracker
//! something implementing [`GeometryProvider`] (an element in the browser, a
//! fixed [`Rect`] in tests) and the tracker asks it for the current box.

/// Axis-aligned rectangle in viewport (client) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// A rectangle with no usable area (zero, negative or non-finite sides).
    ///
    /// Dividing by such a side would produce `NaN` or `Infinity`, so trackers
    /// skip the update instead.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    /// Edge-inclusive containment test
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    /// Position of `(x, y)` relative to this box, clamped to `[0, 1]` on both axes.
    ///
    /// Returns `None` for a degenerate rectangle or non-finite coordinates.
    pub fn fraction_of(&self, x: f64, y: f64) -> Option<Fraction> {
        if self.is_degenerate() || !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(Fraction::new(
            (x - self.left) / self.width,
            (y - self.top) / self.height,
        ))
    }
}

/// Pointer position as a fraction of a bounding box, always within `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fraction {
    x: f64,
    y: f64,
}

impl Fraction {
    pub const CENTER: Fraction = Fraction { x: 0.5, y: 0.5 };

    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Signed offset from the centre, each axis in `[-0.5, 0.5]`
    pub fn from_center(&self) -> (f64, f64) {
        (self.x - 0.5, self.y - 0.5)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Source of the tracked element's current bounding box.
///
/// `None` means the element is not available (not mounted yet, detached) and
/// the caller should treat the event as a no-op.
pub trait GeometryProvider {
    fn bounding_rect(&self) -> Option<Rect>;
}

impl GeometryProvider for Rect {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl GeometryProvider for Option<Rect> {
    fn bounding_rect(&self) -> Option<Rect> {
        *self
    }
}
