//! # round-geometry
//!
//! Procedural meshes for rectangles with rounded corners.
//!
//! A build runs three steps: the outline is traced as a contour, the contour
//! is triangulated, and every vertex gets a UV from the bounding box. The
//! result is a static [`Mesh`] that a renderer uploads as-is. Nothing here
//! depends on a specific graphics API; the optional `wgpu` feature only adds
//! a vertex buffer layout.

mod cache;
mod contour;
mod error;
mod geometry;
mod mesh;
mod options;
mod primitives;
mod triangulate;
mod uv;
#[cfg(feature = "bytemuck")]
mod vertex;

pub use cache::*;
pub use contour::*;
pub use error::{GeometryError, Result};
pub use geometry::*;
pub use mesh::*;
pub use options::*;
pub use primitives::*;
pub use triangulate::*;
pub use uv::*;
#[cfg(feature = "bytemuck")]
pub use vertex::*;
