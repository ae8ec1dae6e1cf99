//! Convex polygon with a cached rotation.

use crate::geometry::{segments_intersect, Circle, Rect};
use crate::math::Vector;

/// End of the horizontal containment ray. Acts as infinity while keeping
/// the segment determinant finite; `f64::MAX` would overflow it.
const RAY_END_X: f64 = 9_007_199_254_740_991.0;

/// A convex polygon positioned at `(x, y)`.
///
/// `base_points` holds the un-rotated local-space vertices in clockwise
/// winding, relative to the position; `calc_points` holds the same vertices
/// rotated to the current orientation. The rotated set is recomputed only by
/// [`set_angle`](Self::set_angle), never implicitly, so shapes whose
/// orientation is unchanged pay no trigonometry per frame.
///
/// The intersection test assumes convex input; see
/// [`intersects`](Self::intersects).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub x: f64,
    pub y: f64,
    base_points: Vec<Vector>,
    calc_points: Vec<Vector>,
}

impl Polygon {
    /// Create a new polygon from local-space vertices in clockwise winding.
    pub fn new(x: f64, y: f64, points: Vec<Vector>) -> Self {
        let calc_points = points.clone();
        Self {
            x,
            y,
            base_points: points,
            calc_points,
        }
    }

    /// Create a polygon covering the given rectangle.
    pub fn from_rect(x: f64, y: f64, r: &Rect) -> Self {
        Self::new(
            x,
            y,
            vec![
                Vector::new(r.x, r.y),
                Vector::new(r.x + r.w, r.y),
                Vector::new(r.x + r.w, r.y + r.h),
                Vector::new(r.x, r.y + r.h),
            ],
        )
    }

    /// Create a polygon approximating the given circle.
    ///
    /// `segments` is the vertex count, e.g. 3 creates a triangle.
    pub fn from_circle(x: f64, y: f64, c: &Circle, segments: u32) -> Self {
        let step = 360.0 / segments as f64;
        let mut points = Vec::with_capacity(segments as usize);

        for i in 0..segments {
            let radians = (i as f64 * step).to_radians();
            points.push(Vector::new(
                c.x + radians.cos() * c.r,
                c.y + radians.sin() * c.r,
            ));
        }

        Self::new(x, y, points)
    }

    /// Replace the position and vertices of this polygon.
    pub fn set(&mut self, x: f64, y: f64, points: Vec<Vector>) -> &mut Self {
        self.x = x;
        self.y = y;
        self.calc_points = points.clone();
        self.base_points = points;
        self
    }

    /// Copy the components of the given polygon.
    pub fn copy_from(&mut self, other: &Polygon) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self.base_points = other.base_points.clone();
        self.calc_points = other.calc_points.clone();
        self
    }

    /// The un-rotated local-space vertices.
    pub fn base_points(&self) -> &[Vector] {
        &self.base_points
    }

    /// The vertices rotated to the current orientation, still in local
    /// space relative to `(x, y)`.
    pub fn calc_points(&self) -> &[Vector] {
        &self.calc_points
    }

    /// Returns `true` when the polygon has 3 or more vertices.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.base_points.len() >= 3
    }

    /// Rotate the polygon to the given angle in degrees.
    ///
    /// This is an absolute set, not an incremental rotate-by: every rotated
    /// vertex is recomputed from its base vertex, fully replacing any
    /// previous rotation. Callers tracking a cumulative angle do so
    /// themselves.
    pub fn set_angle(&mut self, degrees: f64) -> &mut Self {
        let radians = degrees.to_radians();
        let (sin, cos) = radians.sin_cos();

        for (base, calc) in self.base_points.iter().zip(self.calc_points.iter_mut()) {
            calc.x = base.x * cos - base.y * sin;
            calc.y = base.x * sin + base.y * cos;
        }

        self
    }

    /// Returns `true` when this polygon overlaps the given polygon.
    ///
    /// A polygon never intersects itself and invalid polygons intersect
    /// nothing. The test is the containment fast-path on the two reference
    /// points (one polygon wholly inside the other) followed by an
    /// edge-crossing sweep over both vertex rings.
    ///
    /// Both polygons must be convex: for convex input any overlap implies
    /// an edge crossing or reference-point containment, so the test is
    /// exhaustive. For non-convex input it can miss overlaps.
    pub fn intersects(&self, other: &Polygon) -> bool {
        if std::ptr::eq(self, other) || !self.is_valid() || !other.is_valid() {
            return false;
        }

        if self.contains(other.x, other.y) || other.contains(self.x, self.y) {
            return true;
        }

        for i in 0..self.calc_points.len() {
            let (p1, p2) = self.edge(i);

            for j in 0..other.calc_points.len() {
                let (p3, p4) = other.edge(j);

                if segments_intersect(p1, p2, p3, p4) {
                    return true;
                }
            }
        }

        false
    }

    /// Returns `true` when the point lies inside the polygon.
    ///
    /// Ray-casting parity: a horizontal ray from the point toward positive
    /// x is crossed by an odd number of edges exactly when the point is
    /// inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let ray_start = Vector::new(x, y);
        let ray_end = Vector::new(RAY_END_X, y);
        let mut crossings = 0;

        for i in 0..self.calc_points.len() {
            let (p1, p2) = self.edge(i);

            if segments_intersect(ray_start, ray_end, p1, p2) {
                crossings += 1;
            }
        }

        crossings % 2 == 1
    }

    /// World-space endpoints of the `i`-th edge, wrapping to the first
    /// vertex after the last.
    fn edge(&self, i: usize) -> (Vector, Vector) {
        let a = self.calc_points[i];
        let b = self.calc_points[(i + 1) % self.calc_points.len()];
        (
            Vector::new(a.x + self.x, a.y + self.y),
            Vector::new(b.x + self.x, b.y + self.y),
        )
    }
}
