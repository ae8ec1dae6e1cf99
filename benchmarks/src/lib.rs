//! Shared setup helpers for planar benchmarks.
//!
//! ## Running
//!
//! All benches:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- rect
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- polygon

use planar::{Circle, Polygon, Rect, Vector};

/// Lay out `n` unit-ish rectangles in a grid so roughly half of the
/// neighboring pairs overlap.
pub fn setup_rects(n: usize) -> Vec<Rect> {
    let cols = (n as f64).sqrt().ceil() as usize;

    (0..n)
        .map(|i| {
            let x = (i % cols) as f64 * 8.0;
            let y = (i / cols) as f64 * 8.0;
            Rect::new(x, y, 10.0, 10.0)
        })
        .collect()
}

/// A regular polygon with `vertices` corners on a radius-10 circle.
pub fn setup_polygon(x: f64, y: f64, vertices: u32) -> Polygon {
    Polygon::from_circle(x, y, &Circle::new(0.0, 0.0, 10.0), vertices)
}

/// A unit direction for deterministic movement in resolver benches.
pub fn down_right() -> Vector {
    let mut v = Vector::new(1.0, 1.0);
    v.normalize();
    v
}
