/// Errors reported before any geometry is generated.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("Rectangle dimensions must be positive and finite (got {width} x {height}).")]
    InvalidDimension { width: f32, height: f32 },

    #[error(
        "Segments per rounded corner must be between 1 and {max} (got {0}).",
        max = crate::options::MAX_SEGMENTS_PER_CORNER
    )]
    InvalidSegments(u32),
}

pub type Result<T, E = GeometryError> = std::result::Result<T, E>;

/// Fails fast on non-positive, NaN or infinite dimensions.
pub(crate) fn validate_dimensions(width: f32, height: f32) -> Result<()> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(GeometryError::InvalidDimension { width, height })
    }
}
