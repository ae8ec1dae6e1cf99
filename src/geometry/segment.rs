//! Parametric line-segment intersection.

use crate::math::Vector;

/// Returns `true` when the segments `p1-p2` and `p3-p4` intersect.
///
/// Zero-length segments and parallel segments (zero determinant) never
/// intersect. The intersection parameters are accepted on the closed
/// interval `[0, 1]`, so touching endpoints count as an intersection.
#[inline]
pub fn segments_intersect(p1: Vector, p2: Vector, p3: Vector, p4: Vector) -> bool {
    if p1 == p2 || p3 == p4 {
        return false;
    }

    let denominator = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);

    if denominator == 0.0 {
        return false;
    }

    let ua = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / denominator;
    let ub = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / denominator;

    (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
}
