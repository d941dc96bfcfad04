#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in canvas-relative device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point expressed as fractions of the current canvas dimensions.
///
/// `(0, 0)` is the top-left corner, `(1, 1)` the bottom-right. Values are
/// only meaningful against the canvas size they were derived from; convert
/// back through [`CanvasSize::denormalize`] after a resize rather than
/// caching pixel positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp both axes into `[0, 1]`.
    ///
    /// Fast drags can report coordinates slightly past the canvas edge; the
    /// engine stores the clamped position and classifies the raw one.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, 1.0),
            y: self.y.clamp(0.0, 1.0),
        }
    }
}

/// Current pixel dimensions of the canvas backing store.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether the canvas has a usable, strictly positive area.
    ///
    /// Geometry derived from an unsized canvas is undefined; callers guard
    /// with this before converting coordinates.
    #[must_use]
    pub fn is_sized(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// The canvas midpoint in pixels.
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// The smaller of the two dimensions, used to scale zone sizes and the
    /// draw-distance threshold.
    #[must_use]
    pub fn min_dimension(self) -> f64 {
        self.width.min(self.height)
    }

    /// Convert a pixel point to normalized coordinates.
    ///
    /// Must not be called on an unsized canvas; see [`Self::is_sized`].
    #[must_use]
    pub fn normalize(self, pixel: Point) -> NormalizedPoint {
        NormalizedPoint::new(pixel.x / self.width, pixel.y / self.height)
    }

    /// Convert a normalized point back to pixels at the current size.
    ///
    /// This is how committed marks reflow after a resize without being
    /// re-sampled.
    #[must_use]
    pub fn denormalize(self, normalized: NormalizedPoint) -> Point {
        Point::new(normalized.x * self.width, normalized.y * self.height)
    }
}

/// An axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Whether `pt` lies inside this rectangle. All four edges count as
    /// inside.
    #[must_use]
    pub fn contains(self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.width && pt.y >= self.y && pt.y <= self.y + self.height
    }
}
