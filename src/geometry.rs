// src/geometry.rs

//! Plain geometric value types: points, affine transforms, bounding boxes.
//!
//! Everything here is a Copy value with pure functions over it. Path-local
//! coordinates and viewBox coordinates share these types; the interpretation
//! depends on whether the logo transform has been applied yet.

/// A 2D point with f64 coordinates. No identity beyond its value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

/// An affine map with the SVG coefficient order (a, b, c, d, e, f):
/// (x, y) -> (a*x + c*y + e, b*x + d*y + f).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine {
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Apply the map to a point.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    /// Tight box around a set of points. `None` when the set is empty.
    pub fn from_points<I>(points: I) -> Option<BBox>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = BBox {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in iter {
            bbox.min_x = bbox.min_x.min(p.x);
            bbox.min_y = bbox.min_y.min(p.y);
            bbox.max_x = bbox.max_x.max(p.x);
            bbox.max_y = bbox.max_y.max(p.y);
        }
        Some(bbox)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affine_apply_matches_svg_matrix_order() {
        // matrix(2 0 0 3 10 20): scale x by 2, y by 3, then translate
        let m = Affine::new(2.0, 0.0, 0.0, 3.0, 10.0, 20.0);
        let p = m.apply(Point::new(5.0, 7.0));
        assert_eq!(p, Point::new(20.0, 41.0));
    }

    #[test]
    fn affine_shear_uses_cross_coefficients() {
        let m = Affine::new(1.0, 0.5, 0.25, 1.0, 0.0, 0.0);
        let p = m.apply(Point::new(4.0, 8.0));
        assert_eq!(p, Point::new(4.0 + 2.0, 2.0 + 8.0));
    }

    #[test]
    fn bbox_of_empty_set_is_none() {
        assert!(BBox::from_points(std::iter::empty::<Point>()).is_none());
    }

    #[test]
    fn bbox_covers_all_points() {
        let pts = [
            Point::new(1.0, -2.0),
            Point::new(-3.0, 4.0),
            Point::new(0.5, 0.5),
        ];
        let bbox = BBox::from_points(pts).unwrap();
        assert_eq!(bbox.min_x, -3.0);
        assert_eq!(bbox.min_y, -2.0);
        assert_eq!(bbox.max_x, 1.0);
        assert_eq!(bbox.max_y, 4.0);
        assert_eq!(bbox.width(), 4.0);
        assert_eq!(bbox.height(), 6.0);
    }

    #[test]
    fn midpoint_is_halfway() {
        let m = Point::new(0.0, 0.0).midpoint(Point::new(2.0, 6.0));
        assert_eq!(m, Point::new(1.0, 3.0));
    }
}
