use crate::error::{validate_dimensions, Result};
use crate::options::{TessellationOptions, CONTOUR_EPSILON};
use crate::primitives::{Corner, CornerRadii};
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

/// Closed outline of a rounded rectangle centered at the origin.
///
/// Points run clockwise in a y-up frame, starting on the left edge. The closing
/// point is not repeated and no two consecutive points coincide.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    points: Vec<Vec2>,
    width: f32,
    height: f32,
    square: bool,
}

impl Contour {
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// True when the contour is the plain four-corner rectangle.
    pub fn is_square(&self) -> bool {
        self.square
    }

    /// Axis-aligned bounds of the points as `(min, max)`.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        self.points.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), &p| (min.min(p), max.max(p)),
        )
    }

    /// Shoelace area. Negative because the outline runs clockwise.
    pub fn signed_area(&self) -> f32 {
        let n = self.points.len();
        let twice: f32 = (0..n)
            .map(|i| self.points[i].perp_dot(self.points[(i + 1) % n]))
            .sum();
        twice * 0.5
    }
}

/// Geometry of one rounded corner: a quarter circle swept clockwise from
/// `start_angle`, bounded by the two tangent points on the adjoining edges.
struct CornerArc {
    center: Vec2,
    start_angle: f32,
    entry: Vec2,
    exit: Vec2,
    sharp: Vec2,
}

impl CornerArc {
    // Tangent points are taken directly from the half extents so they land
    // exactly on the straight edges.
    fn new(corner: Corner, hw: f32, hh: f32, r: f32) -> Self {
        match corner {
            Corner::TopLeft => Self {
                center: Vec2::new(-hw + r, hh - r),
                start_angle: PI,
                entry: Vec2::new(-hw, hh - r),
                exit: Vec2::new(-hw + r, hh),
                sharp: Vec2::new(-hw, hh),
            },
            Corner::TopRight => Self {
                center: Vec2::new(hw - r, hh - r),
                start_angle: FRAC_PI_2,
                entry: Vec2::new(hw - r, hh),
                exit: Vec2::new(hw, hh - r),
                sharp: Vec2::new(hw, hh),
            },
            Corner::BottomRight => Self {
                center: Vec2::new(hw - r, -hh + r),
                start_angle: 0.0,
                entry: Vec2::new(hw, -hh + r),
                exit: Vec2::new(hw - r, -hh),
                sharp: Vec2::new(hw, -hh),
            },
            Corner::BottomLeft => Self {
                center: Vec2::new(-hw + r, -hh + r),
                start_angle: -FRAC_PI_2,
                entry: Vec2::new(-hw + r, -hh),
                exit: Vec2::new(-hw, -hh + r),
                sharp: Vec2::new(-hw, -hh),
            },
        }
    }
}

struct ContourBuilder {
    points: Vec<Vec2>,
    /// Merge distance, relative to the larger side of the rectangle.
    tolerance: f32,
}

impl ContourBuilder {
    fn new(width: f32, height: f32, capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            tolerance: CONTOUR_EPSILON * width.max(height),
        }
    }

    fn coincident(&self, a: Vec2, b: Vec2) -> bool {
        let d = (a - b).abs();
        d.x <= self.tolerance && d.y <= self.tolerance
    }

    fn push(&mut self, point: Vec2) {
        if let Some(&last) = self.points.last() {
            if self.coincident(last, point) {
                return;
            }
        }
        self.points.push(point);
    }

    fn push_corner(&mut self, corner: Corner, hw: f32, hh: f32, radius: f32, segments: u32) {
        let arc = CornerArc::new(corner, hw, hh, radius);
        if radius == 0.0 {
            self.push(arc.sharp);
            return;
        }

        // Rounding can push a sample a ulp past the edges
        let half = Vec2::new(hw, hh);
        self.push(arc.entry);
        for i in 1..segments {
            let angle = arc.start_angle - (i as f32 / segments as f32) * FRAC_PI_2;
            let sample = arc.center + radius * Vec2::new(angle.cos(), angle.sin());
            self.push(sample.clamp(-half, half));
        }
        self.push(arc.exit);
    }

    fn finish(mut self) -> Vec<Vec2> {
        // Drop the closing point when the walk ended where it started
        while self.points.len() > 1 {
            let last = self.points[self.points.len() - 1];
            if !self.coincident(self.points[0], last) {
                break;
            }
            self.points.pop();
        }
        self.points
    }
}

/// Build the outline of a `width` x `height` rectangle with rounded corners.
///
/// With both radii zero the four corners are returned directly. Otherwise each
/// rounded corner contributes `segments_per_corner + 1` points and each sharp
/// corner a single point.
pub fn build_contour(
    width: f32,
    height: f32,
    radii: CornerRadii,
    options: TessellationOptions,
) -> Result<Contour> {
    validate_dimensions(width, height)?;
    options.validate()?;

    let hw = width * 0.5;
    let hh = height * 0.5;
    let radii = radii.sanitized();

    if radii.is_square() {
        return Ok(Contour {
            points: vec![
                Vec2::new(-hw, -hh),
                Vec2::new(-hw, hh),
                Vec2::new(hw, hh),
                Vec2::new(hw, -hh),
            ],
            width,
            height,
            square: true,
        });
    }

    if radii.exceeds(width, height) {
        log::debug!(
            "corner radii {:?} exceed half of {}x{}; outline will self-intersect",
            radii,
            width,
            height
        );
    }

    let segments = options.segments_per_corner;
    let mut builder = ContourBuilder::new(width, height, 1 + 4 * (segments as usize + 1));

    // Lower end of the left edge
    builder.push(Vec2::new(-hw, -hh + radii.left));
    for corner in Corner::CLOCKWISE {
        builder.push_corner(corner, hw, hh, radii.at(corner), segments);
    }

    Ok(Contour {
        points: builder.finish(),
        width,
        height,
        square: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    const DEFAULT_SEGMENTS: u32 = crate::options::DEFAULT_SEGMENTS_PER_CORNER;

    fn contour(width: f32, height: f32, radii: CornerRadii) -> Contour {
        build_contour(width, height, radii, TessellationOptions::default()).unwrap()
    }

    fn assert_no_consecutive_duplicates(contour: &Contour) {
        let points = contour.points();
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            assert!(
                (a - b).abs().max_element() > CONTOUR_EPSILON,
                "points {i} and {} coincide: {a} {b}",
                (i + 1) % points.len()
            );
        }
    }

    #[test]
    fn test_square_fast_path() {
        let c = contour(1.0, 1.0, CornerRadii::new(0.0, 0.0));
        assert!(c.is_square());
        assert_eq!(
            c.points(),
            &[
                Vec2::new(-0.5, -0.5),
                Vec2::new(-0.5, 0.5),
                Vec2::new(0.5, 0.5),
                Vec2::new(0.5, -0.5),
            ]
        );
    }

    #[test]
    fn test_battery_housing_bounds_and_seams() {
        let c = contour(1.9, 0.2, CornerRadii::all(0.1));
        let (min, max) = c.bounds();
        assert_eq!(min, Vec2::new(-0.95, -0.1));
        assert_eq!(max, Vec2::new(0.95, 0.1));

        // Radius equals half the height, so the vertical edges collapse to a
        // single shared point between the upper and lower arcs.
        let n = DEFAULT_SEGMENTS as usize;
        assert_eq!(c.len(), 4 * (n + 1) - 2);
        assert_no_consecutive_duplicates(&c);
    }

    #[test]
    fn test_rounded_point_count() {
        let c = contour(2.0, 1.0, CornerRadii::all(0.25));
        assert_eq!(c.len(), 4 * (DEFAULT_SEGMENTS as usize + 1));
        assert_no_consecutive_duplicates(&c);
        assert_eq!(c.points()[0], Vec2::new(-1.0, -0.25));
    }

    #[test]
    fn test_one_sided_rounding_keeps_sharp_corners() {
        let c = contour(2.0, 1.0, CornerRadii::new(0.0, 0.3));
        let n = DEFAULT_SEGMENTS as usize;
        assert_eq!(c.len(), 2 + 2 * (n + 1));
        assert!(c.points().contains(&Vec2::new(-1.0, -0.5)));
        assert!(c.points().contains(&Vec2::new(-1.0, 0.5)));
        assert!(!c.points().contains(&Vec2::new(1.0, 0.5)));
        assert_no_consecutive_duplicates(&c);
    }

    #[test]
    fn test_arc_points_lie_on_circle() {
        let radius = 0.3_f32;
        let c = contour(2.0, 1.0, CornerRadii::all(radius));
        let center = Vec2::new(1.0 - radius, 0.5 - radius);
        let on_top_right: Vec<_> = c
            .points()
            .iter()
            .filter(|p| p.x >= center.x && p.y >= center.y)
            .collect();
        assert_eq!(on_top_right.len(), DEFAULT_SEGMENTS as usize + 1);
        for p in on_top_right {
            assert!(((*p - center).length() - radius).abs() < 1e-5);
        }
    }

    #[test]
    fn test_segments_option_controls_density() {
        let c = build_contour(1.0, 1.0, CornerRadii::all(0.2), TessellationOptions::new(3)).unwrap();
        assert_eq!(c.len(), 4 * 4);

        let c = build_contour(1.0, 1.0, CornerRadii::all(0.2), TessellationOptions::new(1)).unwrap();
        // A single segment cuts each corner with a chamfer
        assert_eq!(c.len(), 8);
    }

    #[test]
    fn test_clockwise_orientation() {
        assert!(contour(1.0, 1.0, CornerRadii::zero()).signed_area() < 0.0);
        assert!(contour(3.0, 1.0, CornerRadii::new(0.1, 0.4)).signed_area() < 0.0);
    }

    #[test]
    fn test_area_approaches_analytic_value() {
        let (w, h, r) = (2.0_f32, 1.0_f32, 0.25_f32);
        let options = TessellationOptions::new(64);
        let c = build_contour(w, h, CornerRadii::all(r), options).unwrap();
        let expected = w * h - (4.0 - PI) * r * r;
        assert!((c.signed_area().abs() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_tiny_rectangle_keeps_every_arc_sample() {
        let (w, h, r) = (3e-6_f32, 3e-6_f32, 1e-6_f32);
        let c = contour(w, h, CornerRadii::all(r));
        assert!(!c.is_square());
        assert_eq!(c.len(), 4 * (DEFAULT_SEGMENTS as usize + 1));

        let expected = w * h - (4.0 - PI) * r * r;
        let area = c.signed_area().abs();
        assert!(
            (area - expected).abs() < 0.01 * expected,
            "area {area} vs {expected}"
        );

        let c = contour(1e-5, 1e-5, CornerRadii::all(2e-6));
        assert_eq!(c.len(), 4 * (DEFAULT_SEGMENTS as usize + 1));
    }

    #[test]
    fn test_invalid_input_rejected() {
        assert!(matches!(
            build_contour(0.0, 1.0, CornerRadii::zero(), TessellationOptions::default()),
            Err(GeometryError::InvalidDimension { .. })
        ));
        assert_eq!(
            build_contour(1.0, 1.0, CornerRadii::all(0.1), TessellationOptions::new(0)),
            Err(GeometryError::InvalidSegments(0))
        );
    }

    #[test]
    fn test_oversized_radius_does_not_panic() {
        let c = contour(1.0, 0.2, CornerRadii::all(0.8));
        assert!(c.len() >= 3);
    }
}
