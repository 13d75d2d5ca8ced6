//! Geometric predicates shared by the builder, `Hull` and validation.
//!
//! Sign convention (y-up): positive cross product means the third point lies
//! strictly left of the directed line through the first two. Comparisons are
//! strict; collinear is never "left".

use super::types::{Coord, Point};

/// Turning direction of an ordered triple, in a y-up frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

impl Orientation {
    /// The same turn seen in a y-down (screen/grid) frame.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Self::CounterClockwise => Self::Clockwise,
            Self::Clockwise => Self::CounterClockwise,
            Self::Collinear => Self::Collinear,
        }
    }
}

#[inline]
pub fn orientation<T: Coord>(a: Point<T>, b: Point<T>, c: Point<T>) -> Orientation {
    let area = T::cross(a, b, c);
    if area > T::ZERO_AREA {
        Orientation::CounterClockwise
    } else if area < T::ZERO_AREA {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// `true` iff `p` lies strictly left of the directed line `from → to`.
#[inline]
pub fn is_left_of<T: Coord>(p: Point<T>, from: Point<T>, to: Point<T>) -> bool {
    T::cross(from, to, p) > T::ZERO_AREA
}

/// Perpendicular distance from `p` to the line through `start` and `end`.
///
/// Falls back to the distance to `start` when the two line points coincide.
pub fn distance_to_line<T: Coord>(p: Point<T>, start: Point<T>, end: Point<T>) -> f64 {
    let base = (end.to_vector() - start.to_vector()).norm();
    if base == 0.0 {
        return (p.to_vector() - start.to_vector()).norm();
    }
    T::area_to_f64(T::area_abs(T::cross(start, end, p))) / base
}

/// `p` within the closed axis-aligned box spanned by `a` and `b`.
#[inline]
pub(crate) fn within_box<T: Coord>(p: Point<T>, a: Point<T>, b: Point<T>) -> bool {
    let (lo_x, hi_x) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
    let (lo_y, hi_y) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };
    lo_x <= p.x && p.x <= hi_x && lo_y <= p.y && p.y <= hi_y
}
