use crate::triangulate::Triangulation;
use crate::uv::compute_uv;

/// Normal shared by every vertex of a planar mesh.
pub const FLAT_NORMAL: [f32; 3] = [0.0, 0.0, 1.0];

/// Indexed triangle mesh with one position, normal and UV per vertex.
///
/// Built once and never mutated; rebuild it when the size or radii change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
}

/// Owned buffers of a [`Mesh`], ready to be uploaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Lift a 2D triangulation to a flat mesh in the z = 0 plane.
    ///
    /// UVs come from the bounding box, so the same position always maps to
    /// the same texture coordinate regardless of corner rounding.
    pub(crate) fn from_triangulation(triangulation: Triangulation, width: f32, height: f32) -> Self {
        let Triangulation { positions: points, indices } = triangulation;

        let mut positions = Vec::with_capacity(points.len());
        let mut uvs = Vec::with_capacity(points.len());
        for p in &points {
            positions.push([p.x, p.y, 0.0]);
            uvs.push(compute_uv(*p, width, height));
        }

        Self {
            normals: vec![FLAT_NORMAL; positions.len()],
            positions,
            uvs,
            indices,
        }
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Checks the buffer invariants: matching attribute lengths, whole
    /// triangles and in-range indices.
    pub fn is_consistent(&self) -> bool {
        let n = self.positions.len();
        self.normals.len() == n
            && self.uvs.len() == n
            && self.indices.len() % 3 == 0
            && self.indices.iter().all(|&i| (i as usize) < n)
    }

    pub fn into_buffers(self) -> MeshBuffers {
        MeshBuffers {
            positions: self.positions,
            normals: self.normals,
            uvs: self.uvs,
            indices: self.indices,
        }
    }
}
