//! Tessellation parameters

use crate::error::{GeometryError, Result};

/// Number of segments each rounded corner is split into unless configured otherwise.
pub const DEFAULT_SEGMENTS_PER_CORNER: u32 = 12;

/// Upper bound on `segments_per_corner`; finer arcs are indistinguishable on screen.
pub const MAX_SEGMENTS_PER_CORNER: u32 = 1024;

/// Relative merge distance for contour points.
///
/// Two points closer than `CONTOUR_EPSILON * max(width, height)` on both axes
/// are considered the same point, so the threshold follows the shape's scale.
pub const CONTOUR_EPSILON: f32 = 1e-6;

/// Controls how finely corner arcs are approximated.
///
/// A rounded corner with `segments_per_corner = n` contributes `n + 1` contour
/// points: both tangent points plus `n - 1` samples in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TessellationOptions {
    pub segments_per_corner: u32,
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self {
            segments_per_corner: DEFAULT_SEGMENTS_PER_CORNER,
        }
    }
}

impl TessellationOptions {
    pub const fn new(segments_per_corner: u32) -> Self {
        Self {
            segments_per_corner,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(1..=MAX_SEGMENTS_PER_CORNER).contains(&self.segments_per_corner) {
            return Err(GeometryError::InvalidSegments(self.segments_per_corner));
        }
        Ok(())
    }
}
