// src/fill.rs

//! Nonzero-winding fill test over closed polylines.
//!
//! Edges crossing the query's scanline upward count +1 when they pass to the
//! right of the query point, downward edges count -1 symmetrically; a nonzero
//! total means inside. Holes come for free when inner contours are authored
//! with opposite winding. Points exactly on an edge or vertex follow the
//! half-open interval convention and carry no stronger guarantee.

use crate::geometry::Point;
use crate::path::Path;

/// Signed crossing count of one closed polyline around `p`.
fn winding_number(p: Point, poly: &[Point]) -> i32 {
    let mut wn = 0;
    for edge in poly.windows(2) {
        let (a, b) = (edge[0], edge[1]);
        // Cross product of (b - a) with (p - a): positive when p is left of
        // the directed edge.
        let cross = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
        if a.y <= p.y {
            if b.y > p.y && cross > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && cross < 0.0 {
            wn -= 1;
        }
    }
    wn
}

/// True when `p` lies inside the path under the nonzero winding rule.
/// `path` must already be in the same coordinate space as `p`.
pub fn hit_test(p: Point, path: &Path) -> bool {
    path.subpaths
        .iter()
        .map(|sub| winding_number(p, sub))
        .sum::<i32>()
        != 0
}
