//! Velocity-directed minimum-penetration resolution for rectangles.

use tracing::trace;

use crate::geometry::Rect;
use crate::math::Vector;

/// The outcome of resolving one overlapping rectangle pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Resolution {
    /// The correction that was applied to the moving rectangle. Callers may
    /// add up corrections from several pairs within one frame before
    /// finalizing a body's position; the accumulation is unclamped.
    pub correction: Vector,
    /// `true` when the moving rectangle was pushed upward, i.e. it came to
    /// rest on top of the other rectangle.
    pub on_ground: bool,
}

/// Sign of a velocity component. Drives the resolution decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Zero
        }
    }
}

/// Push rectangle `a` out of rectangle `b` along an axis chosen by the
/// direction of travel.
///
/// The axis and sign of the push follow the sign pair of `velocity`, not
/// the globally smallest penetration: a body moving purely horizontally is
/// never corrected vertically, even when the vertical penetration is
/// smaller. When both components move, the two penetrations implied by the
/// movement quadrant are compared and the smaller one wins.
///
/// After the push the matching component(s) of `velocity` are zeroed, along
/// with the same component(s) of `gravity` when a gravity accumulator is
/// supplied, and `on_ground` is set when the push was upward.
///
/// Safe to call unconditionally inside a pairwise loop: when `a` is not
/// moving or the rectangles do not intersect, nothing is mutated and a
/// zero [`Resolution`] is returned.
pub fn resolve_rects(
    a: &mut Rect,
    b: &Rect,
    velocity: &mut Vector,
    mut gravity: Option<&mut Vector>,
) -> Resolution {
    if velocity.length() == 0.0 || !a.intersects(b) {
        return Resolution::default();
    }

    // Penetration depth past each of b's edges; all positive while the
    // rectangles overlap.
    let l = a.right() - b.left();
    let r = b.right() - a.left();
    let u = a.bottom() - b.top();
    let d = b.bottom() - a.top();

    use Sign::{Negative, Positive, Zero};

    let (dx, dy) = match (Sign::of(velocity.x), Sign::of(velocity.y)) {
        (Positive, Positive) => {
            if l > u {
                (0.0, -u)
            } else {
                (-l, 0.0)
            }
        }
        (Negative, Positive) => {
            if r > u {
                (0.0, -u)
            } else {
                (r, 0.0)
            }
        }
        (Positive, Negative) => {
            if l > d {
                (0.0, d)
            } else {
                (-l, 0.0)
            }
        }
        (Negative, Negative) => {
            if r > d {
                (0.0, d)
            } else {
                (r, 0.0)
            }
        }
        (Positive, Zero) => (-l, 0.0),
        (Negative, Zero) => (r, 0.0),
        (Zero, Positive) => (0.0, -u),
        (Zero, Negative) => (0.0, d),
        // Unreachable past the zero-velocity guard, but the table stays
        // exhaustive.
        (Zero, Zero) => (0.0, 0.0),
    };

    a.x += dx;
    a.y += dy;

    if dx != 0.0 {
        velocity.x = 0.0;
        if let Some(g) = gravity.as_deref_mut() {
            g.x = 0.0;
        }
    }

    if dy != 0.0 {
        velocity.y = 0.0;
        if let Some(g) = gravity.as_deref_mut() {
            g.y = 0.0;
        }
    }

    trace!("resolved rect overlap dx={} dy={}", dx, dy);

    Resolution {
        correction: Vector::new(dx, dy),
        on_ground: dy < 0.0,
    }
}
