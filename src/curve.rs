// src/curve.rs

//! Cubic Bezier segments and their flattening into polylines.
//!
//! The flattener does classic midpoint (de Casteljau) subdivision: if the
//! control points sit close enough to the chord, the whole segment collapses
//! to a straight step; otherwise split at t = 0.5 and recurse on both halves.
//! Flatness strictly decreases under subdivision, so the recursion converges;
//! a depth ceiling guards degenerate control data anyway.

use crate::geometry::Point;

/// Hard ceiling on midpoint subdivisions per segment. Each split roughly
/// quarters the flatness metric, so well-formed input never gets close.
const MAX_SPLIT_DEPTH: u32 = 24;

/// A cubic Bezier segment. `p0`/`p3` are endpoints, `p1`/`p2` pull curvature.
#[derive(Debug, Clone, Copy)]
pub struct Cubic {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Cubic {
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Flatness metric: the larger perpendicular distance of the two control
    /// points from the line through the endpoints. Zero when the endpoints
    /// coincide, which short-circuits collinear and fully degenerate
    /// segments to a single straight step.
    pub fn flatness(&self) -> f64 {
        let dx = self.p3.x - self.p0.x;
        let dy = self.p3.y - self.p0.y;
        let denom = dx.hypot(dy);
        if denom == 0.0 {
            return 0.0;
        }
        let line_dist = |p: Point| {
            (dy * p.x - dx * p.y + self.p3.x * self.p0.y - self.p3.y * self.p0.x).abs() / denom
        };
        line_dist(self.p1).max(line_dist(self.p2))
    }

    /// Split at t = 0.5. Both halves share the split point and together trace
    /// the original curve exactly.
    pub fn split(&self) -> (Cubic, Cubic) {
        let p01 = self.p0.midpoint(self.p1);
        let p12 = self.p1.midpoint(self.p2);
        let p23 = self.p2.midpoint(self.p3);
        let p012 = p01.midpoint(p12);
        let p123 = p12.midpoint(p23);
        let p0123 = p012.midpoint(p123);
        (
            Cubic::new(self.p0, p01, p012, p0123),
            Cubic::new(p0123, p123, p23, self.p3),
        )
    }

    /// Append a polyline approximation of the curve to `out`, excluding the
    /// start point and including the end point. The caller has already
    /// emitted `p0` as the tail of the growing subpath.
    pub fn flatten(&self, tolerance: f64, out: &mut Vec<Point>) {
        self.flatten_rec(tolerance, MAX_SPLIT_DEPTH, out);
    }

    fn flatten_rec(&self, tolerance: f64, depth: u32, out: &mut Vec<Point>) {
        if depth == 0 || self.flatness() <= tolerance {
            out.push(self.p3);
            return;
        }
        let (left, right) = self.split();
        // Left ends at the split point, right starts just after it, so the
        // concatenation carries exactly one copy of the split point.
        left.flatten_rec(tolerance, depth - 1, out);
        right.flatten_rec(tolerance, depth - 1, out);
    }
}
