//! Point and coordinate types for planar hulls.
//!
//! - `Point<T>`: plain `(x, y)` value; `Eq + Hash` whenever `T` is, so integer
//!   points work as `HashMap`/`HashSet` keys.
//! - `Coord`: sealed numeric trait (`i32`, `i64`, `f32`, `f64`) providing the
//!   signed-area predicate every side test goes through.
//!
//! Numerics
//! - Integer coordinates: `i128` cross product, exact for `i32`; exact for
//!   `i64` while `|coord| < cfg::I64_EXACT_BOUND`.
//! - Float coordinates: adaptive exact `robust::orient2d`, no epsilon. Its
//!   magnitude is only an estimate, so distance ranking goes through
//!   `Coord::cmp_offset`, evaluated with exact expansions.
//!
//! Code cross-refs: `predicates::{orientation, is_left_of}`, `quickhull::HullBuilder`

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

use super::cfg::I64_EXACT_BOUND;
use super::exact::cross_of_differences;

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Coord> Point<T> {
    /// Lossy conversion to a float vector (exact for `i32`, `f32`, `f64`).
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x.to_f64(), self.y.to_f64())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Whether side tests involving this point are exact.
    #[inline]
    pub fn in_exact_range(self) -> bool {
        self.x.in_exact_range() && self.y.in_exact_range()
    }
}

impl From<Vector2<f64>> for Point<f64> {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl<T> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<[T; 2]> for Point<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Point<T>> for [T; 2] {
    #[inline]
    fn from(p: Point<T>) -> Self {
        [p.x, p.y]
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Numeric coordinate type accepted by the hull builder.
///
/// Sealed: the exactness guarantees of `cross` are only established for the
/// four implementations below.
pub trait Coord: Copy + PartialOrd + fmt::Debug + fmt::Display + sealed::Sealed {
    /// Doubled signed triangle area.
    type Area: Copy + PartialOrd + fmt::Debug;

    const ZERO_AREA: Self::Area;

    /// Signed area of the parallelogram spanned by `o→a` and `o→b`.
    /// Positive iff `b` lies strictly left of the directed line `o→a` (y-up).
    fn cross(o: Point<Self>, a: Point<Self>, b: Point<Self>) -> Self::Area;

    /// Exact sign of `(a → b) × (p → q)`: how `q` compares to `p` in signed
    /// distance from the directed line `a → b` (greater means further left).
    fn cmp_offset(a: Point<Self>, b: Point<Self>, p: Point<Self>, q: Point<Self>) -> Ordering;

    fn area_abs(area: Self::Area) -> Self::Area;

    fn area_to_f64(area: Self::Area) -> f64;

    fn to_f64(self) -> f64;

    fn is_finite(self) -> bool;

    fn in_exact_range(self) -> bool;
}

macro_rules! impl_int_coord {
    ($($t:ty => $bound:expr),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Coord for $t {
            type Area = i128;

            const ZERO_AREA: i128 = 0;

            #[inline]
            fn cross(o: Point<Self>, a: Point<Self>, b: Point<Self>) -> i128 {
                let (ox, oy) = (o.x as i128, o.y as i128);
                (a.x as i128 - ox) * (b.y as i128 - oy) - (a.y as i128 - oy) * (b.x as i128 - ox)
            }

            #[inline]
            fn cmp_offset(a: Point<Self>, b: Point<Self>, p: Point<Self>, q: Point<Self>) -> Ordering {
                let (dx, dy) = (b.x as i128 - a.x as i128, b.y as i128 - a.y as i128);
                let (ex, ey) = (q.x as i128 - p.x as i128, q.y as i128 - p.y as i128);
                (dx * ey - dy * ex).cmp(&0)
            }

            #[inline]
            fn area_abs(area: i128) -> i128 {
                area.abs()
            }

            #[inline]
            fn area_to_f64(area: i128) -> f64 {
                area as f64
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn is_finite(self) -> bool {
                true
            }

            #[inline]
            fn in_exact_range(self) -> bool {
                (self.unsigned_abs() as u64) < $bound
            }
        }
    )*};
}

macro_rules! impl_float_coord {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Coord for $t {
            type Area = f64;

            const ZERO_AREA: f64 = 0.0;

            #[inline]
            fn cross(o: Point<Self>, a: Point<Self>, b: Point<Self>) -> f64 {
                use robust::Coord as RCoord;
                robust::orient2d(
                    RCoord { x: o.x as f64, y: o.y as f64 },
                    RCoord { x: a.x as f64, y: a.y as f64 },
                    RCoord { x: b.x as f64, y: b.y as f64 },
                )
            }

            #[inline]
            fn cmp_offset(a: Point<Self>, b: Point<Self>, p: Point<Self>, q: Point<Self>) -> Ordering {
                cross_of_differences(
                    [a.x as f64, a.y as f64],
                    [b.x as f64, b.y as f64],
                    [p.x as f64, p.y as f64],
                    [q.x as f64, q.y as f64],
                )
            }

            #[inline]
            fn area_abs(area: f64) -> f64 {
                area.abs()
            }

            #[inline]
            fn area_to_f64(area: f64) -> f64 {
                area
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            #[inline]
            fn in_exact_range(self) -> bool {
                <$t>::is_finite(self)
            }
        }
    )*};
}

impl_int_coord!(i32 => u64::MAX, i64 => I64_EXACT_BOUND);
impl_float_coord!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn integer_points_are_hash_keys() {
        let mut seen = HashSet::new();
        assert!(seen.insert(Point::new(1i64, 2)));
        assert!(!seen.insert(Point::new(1i64, 2)));
        assert!(seen.insert(Point::new(2i64, 1)));
    }

    #[test]
    fn cross_sign_matches_left_turn() {
        let o = Point::new(0i32, 0);
        let a = Point::new(4, 0);
        assert!(i32::cross(o, a, Point::new(1, 1)) > 0);
        assert!(i32::cross(o, a, Point::new(1, -1)) < 0);
        assert_eq!(i32::cross(o, a, Point::new(9, 0)), 0);

        let of = Point::new(0.0f64, 0.0);
        let af = Point::new(4.0, 0.0);
        assert!(f64::cross(of, af, Point::new(1.0, 1e-300)) > 0.0);
        assert_eq!(f64::cross(of, af, Point::new(-3.0, 0.0)), 0.0);
    }

    #[test]
    fn offset_ranking_is_exact() {
        let a = Point::new(0i64, 0);
        let b = Point::new(10, 0);
        assert_eq!(i64::cmp_offset(a, b, Point::new(3, 2), Point::new(-7, 5)), Ordering::Greater);
        assert_eq!(i64::cmp_offset(a, b, Point::new(3, 2), Point::new(9, 2)), Ordering::Equal);

        // q is p nudged up by one ulp, next to a steep line far from the origin.
        let af = Point::new(0.3f64, 0.0);
        let bf = Point::new(0.1 * 1e6 + 0.3, 0.7 * 1e6);
        let p: Point<f64> = Point::new(0.1 * 5e5 + 0.3, 0.7 * 5e5 + 1e-9);
        let q = Point::new(p.x, f64::from_bits(p.y.to_bits() + 1));
        assert_eq!(f64::cmp_offset(af, bf, p, q), Ordering::Greater);
        assert_eq!(f64::cmp_offset(af, bf, q, p), Ordering::Less);
        assert_eq!(f64::cmp_offset(af, bf, p, p), Ordering::Equal);
    }

    #[test]
    fn i32_extremes_do_not_overflow() {
        let o = Point::new(i32::MIN, i32::MIN);
        let a = Point::new(i32::MAX, i32::MIN);
        let b = Point::new(i32::MAX, i32::MAX);
        let area = i32::cross(o, a, b);
        let side = i32::MAX as i128 - i32::MIN as i128;
        assert_eq!(area, side * side);
    }

    #[test]
    fn exact_range_and_finiteness() {
        assert!(Point::new(i64::MAX >> 2, 0).in_exact_range());
        assert!(!Point::new(i64::MAX, 0).in_exact_range());
        assert!(Point::new(i32::MIN, i32::MAX).in_exact_range());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0f32, f32::INFINITY).in_exact_range());
    }

    #[test]
    fn conversions() {
        let p: Point<f64> = Vector2::new(1.5, -2.0).into();
        assert_eq!(p, Point::new(1.5, -2.0));
        assert_eq!(<[f64; 2]>::from(p), [1.5, -2.0]);
        assert_eq!(Point::from((3i32, 4)).to_vector(), Vector2::new(3.0, 4.0));
        assert_eq!(Point::new(3, -4).to_string(), "(3, -4)");
    }
}
