/// The four corners of a rectangle, in the order the contour visits them
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Contour order: the walk starts on the left edge and runs clockwise.
    pub const CLOCKWISE: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    pub const fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }
}

/// Corner radii for a rounded rectangle.
///
/// Only two radii are independent: `left` rounds the top-left and bottom-left
/// corners, `right` rounds the top-right and bottom-right corners. A single
/// scalar converts into the same radius on both sides.
///
/// Negative and NaN values are treated as zero. Values larger than half the
/// shorter side are kept as-is and yield a self-intersecting outline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub left: f32,
    pub right: f32,
}

impl CornerRadii {
    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Same radius on every corner.
    pub const fn all(radius: f32) -> Self {
        Self::new(radius, radius)
    }

    /// No rounding.
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Radius applied to a given corner.
    pub fn at(&self, corner: Corner) -> f32 {
        if corner.is_left() {
            self.left
        } else {
            self.right
        }
    }

    /// Clamps negative and NaN radii to zero.
    pub fn sanitized(self) -> Self {
        // f32::max returns the non-NaN operand; adding 0.0 folds -0.0 into 0.0
        Self::new(self.left.max(0.0) + 0.0, self.right.max(0.0) + 0.0)
    }

    /// True when no corner is rounded.
    pub fn is_square(&self) -> bool {
        let radii = self.sanitized();
        radii.left == 0.0 && radii.right == 0.0
    }

    /// True when any radius exceeds half of the shorter side.
    pub fn exceeds(&self, width: f32, height: f32) -> bool {
        let limit = width.min(height) * 0.5;
        let radii = self.sanitized();
        radii.left > limit || radii.right > limit
    }
}

impl From<f32> for CornerRadii {
    fn from(radius: f32) -> Self {
        Self::all(radius)
    }
}

impl From<(f32, f32)> for CornerRadii {
    fn from((left, right): (f32, f32)) -> Self {
        Self::new(left, right)
    }
}

impl From<[f32; 2]> for CornerRadii {
    fn from([left, right]: [f32; 2]) -> Self {
        Self::new(left, right)
    }
}
