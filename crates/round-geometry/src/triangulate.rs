use crate::contour::Contour;
use glam::Vec2;

/// Vertex positions and the triangle list that covers them.
///
/// Positions are exactly the contour points (or the quad corners); no
/// interior points are introduced. Triangles wind counter-clockwise in the
/// y-up frame.
///
/// Only [`triangulate`] and [`quad`] produce one, so every index is in range:
///
/// ```compile_fail
/// let bogus = round_geometry::Triangulation {
///     positions: Vec::new(),
///     indices: vec![0, 1, 2],
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangulation {
    pub(crate) positions: Vec<Vec2>,
    pub(crate) indices: Vec<u32>,
}

impl Triangulation {
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Sum of the triangle areas.
    pub fn area(&self) -> f32 {
        self.indices
            .chunks_exact(3)
            .map(|t| {
                triangle_area(
                    self.positions[t[0] as usize],
                    self.positions[t[1] as usize],
                    self.positions[t[2] as usize],
                )
            })
            .sum()
    }
}

/// Signed area, positive for counter-clockwise triangles.
fn triangle_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a) * 0.5
}

/// Plain two-triangle quad.
///
/// Vertices are top-left, top-right, bottom-left, bottom-right. Both triangles
/// share the bottom-left to top-right diagonal.
pub fn quad(width: f32, height: f32) -> Triangulation {
    let hw = width * 0.5;
    let hh = height * 0.5;
    Triangulation {
        positions: vec![
            Vec2::new(-hw, hh),
            Vec2::new(hw, hh),
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
        ],
        indices: vec![0, 2, 1, 2, 3, 1],
    }
}

/// Fill the contour with triangles.
///
/// Square contours take the quad path. Rounded contours are ear-clipped. If
/// the outline cannot be triangulated (an over-rounded, self-intersecting
/// outline for instance) the positions are kept and the index list is left
/// empty.
pub fn triangulate(contour: &Contour) -> Triangulation {
    if contour.is_square() {
        return quad(contour.width(), contour.height());
    }

    let positions = contour.points().to_vec();
    if positions.len() < 3 {
        return Triangulation {
            positions,
            indices: Vec::new(),
        };
    }

    let coords: Vec<f64> = positions
        .iter()
        .flat_map(|p| [p.x as f64, p.y as f64])
        .collect();

    let indices = match earcutr::earcut(&coords, &[], 2) {
        Ok(raw) => orient_counter_clockwise(&positions, &raw),
        Err(_) => {
            log::debug!(
                "triangulation of {}-point contour failed; emitting empty index buffer",
                positions.len()
            );
            Vec::new()
        }
    };

    Triangulation { positions, indices }
}

fn orient_counter_clockwise(positions: &[Vec2], raw: &[usize]) -> Vec<u32> {
    let mut indices = Vec::with_capacity(raw.len());
    for t in raw.chunks_exact(3) {
        let (a, b, c) = (t[0], t[1], t[2]);
        if triangle_area(positions[a], positions[b], positions[c]) < 0.0 {
            indices.extend([a as u32, c as u32, b as u32]);
        } else {
            indices.extend([a as u32, b as u32, c as u32]);
        }
    }
    indices
}
