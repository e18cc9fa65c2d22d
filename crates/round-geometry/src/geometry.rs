use crate::contour::{build_contour, Contour};
use crate::error::Result;
use crate::mesh::Mesh;
use crate::options::TessellationOptions;
use crate::primitives::CornerRadii;
use crate::triangulate::triangulate;

/// Description of a rounded rectangle centered at the origin.
///
/// Building is a pure function of the fields: the same description always
/// yields bit-identical buffers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundGeometry {
    pub width: f32,
    pub height: f32,
    pub radii: CornerRadii,
    pub options: TessellationOptions,
}

impl RoundGeometry {
    pub fn new(width: f32, height: f32, radii: impl Into<CornerRadii>) -> Self {
        Self {
            width,
            height,
            radii: radii.into(),
            options: TessellationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TessellationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_segments_per_corner(mut self, segments: u32) -> Self {
        self.options.segments_per_corner = segments;
        self
    }

    /// Outline only, without triangulation.
    pub fn contour(&self) -> Result<Contour> {
        build_contour(self.width, self.height, self.radii, self.options)
    }

    /// Contour, triangulation and UV mapping in one pass.
    pub fn build(&self) -> Result<Mesh> {
        let contour = self.contour()?;
        let mesh = Mesh::from_triangulation(triangulate(&contour), self.width, self.height);
        log::trace!(
            "built {}x{} mesh ({:?}): {} vertices, {} triangles",
            self.width,
            self.height,
            self.radii,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }
}

/// Build a mesh with the default tessellation options.
pub fn round_rect_mesh(width: f32, height: f32, radii: impl Into<CornerRadii>) -> Result<Mesh> {
    RoundGeometry::new(width, height, radii).build()
}
