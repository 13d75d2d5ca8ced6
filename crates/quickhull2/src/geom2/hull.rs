//! The computed hull: an ordered, implicitly closed vertex ring.
//!
//! Invariants (established by `HullBuilder`):
//! - Non-empty; no repeated vertex.
//! - Starts at the leftmost input point (smallest x, then smallest y).
//! - Vertex order is `leftmost, upper chain, rightmost, lower chain`, which is
//!   clockwise in a y-up frame (counter-clockwise on a y-down grid).
//! - Three or more vertices are strictly convex.

use super::predicates::{orientation, within_box, Orientation};
use super::types::{Coord, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct Hull<T> {
    points: Vec<Point<T>>,
}

impl<T: Coord> Hull<T> {
    #[inline]
    pub(crate) fn from_vertices(points: Vec<Point<T>>) -> Self {
        debug_assert!(!points.is_empty());
        Self { points }
    }

    /// Vertices in hull order.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point<T>> {
        self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a built hull.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The leftmost vertex, where the ring starts.
    #[inline]
    pub fn first(&self) -> Point<T> {
        self.points[0]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
        self.points.iter()
    }

    /// Edges of the closed ring, `(v[k], v[k+1 mod n])`. A single-point hull
    /// has no edges; a two-point hull has the segment in both directions.
    pub fn edges(&self) -> impl Iterator<Item = (Point<T>, Point<T>)> + '_ {
        let n = self.points.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |k| (self.points[k], self.points[(k + 1) % n]))
    }

    /// Rotational direction in a y-up frame; `Collinear` below three vertices.
    pub fn orientation(&self) -> Orientation {
        match self.points.as_slice() {
            [a, b, c, ..] => orientation(*a, *b, *c),
            _ => Orientation::Collinear,
        }
    }

    /// Shoelace area in `f64`; negative for clockwise (y-up) rings.
    pub fn signed_area(&self) -> f64 {
        let twice: f64 = self
            .edges()
            .map(|(p, q)| {
                let (p, q) = (p.to_vector(), q.to_vector());
                p.x * q.y - q.x * p.y
            })
            .sum();
        0.5 * twice
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Exact point-in-hull test, boundary inclusive.
    pub fn contains(&self, p: Point<T>) -> bool {
        match self.points.as_slice() {
            [a] => *a == p,
            [a, b] => orientation(*a, *b, p) == Orientation::Collinear && within_box(p, *a, *b),
            _ => {
                let outside = self.orientation().flipped();
                self.edges().all(|(a, b)| orientation(a, b, p) != outside)
            }
        }
    }

    /// Same vertices, counter-clockwise in a y-up frame, still starting at the
    /// leftmost vertex.
    pub fn to_ccw(&self) -> Hull<T> {
        if self.orientation() != Orientation::Clockwise {
            return self.clone();
        }
        let mut points = Vec::with_capacity(self.points.len());
        points.push(self.points[0]);
        points.extend(self.points[1..].iter().rev());
        Hull { points }
    }
}

impl<T> From<Hull<T>> for Vec<Point<T>> {
    #[inline]
    fn from(hull: Hull<T>) -> Self {
        hull.points
    }
}

impl<'a, T> IntoIterator for &'a Hull<T> {
    type Item = &'a Point<T>;
    type IntoIter = std::slice::Iter<'a, Point<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
