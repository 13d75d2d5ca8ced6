//! Quickhull in the plane (divide and conquer, explicit work stack).
//!
//! Model
//! - Pick the two x-extreme points, split the rest by the side of the line
//!   through them, then repeatedly take the point farthest from the current
//!   base edge and keep only the points outside the new triangle.
//! - All work happens in one owned buffer: each sub-problem is an index range
//!   `lo..hi`, partitioned in place. Sub-problems are tasks on a stack, pushed
//!   in reverse so they pop in hull order.
//!
//! Determinism
//! - Leftmost: smallest x, ties by smallest y. Rightmost: largest x, ties by
//!   largest y. Among fully equal points the first encountered wins.
//! - Farthest point: maximal distance to the base edge. Points tied for the
//!   maximum lie on one parallel to the base edge; the one nearest `top` along
//!   the edge wins, so the pick is a strict vertex and the others on that
//!   parallel can never become collinear vertices. Coincident ties keep the
//!   first encountered. Distances are compared exactly for every `Coord`.
//!
//! Complexity: O(n log n) expected, O(n²) worst case; O(n) extra memory.

use std::cmp::Ordering;
use std::fmt;

use super::hull::Hull;
use super::predicates::is_left_of;
use super::types::{Coord, Point};

/// Errors surfaced by the hull builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Empty input, or a coordinate the predicates cannot order (NaN, ±∞).
    InvalidInput { reason: String },
}

impl HullError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid hull input: {reason}"),
        }
    }
}

impl std::error::Error for HullError {}

/// Pending work, popped in hull order.
#[derive(Clone, Copy, Debug)]
enum Task<T> {
    /// Hull vertices strictly left of `top → bottom` among `buf[lo..hi]`.
    Divide {
        lo: usize,
        hi: usize,
        top: Point<T>,
        bottom: Point<T>,
    },
    Emit(Point<T>),
}

/// Owns the working buffer for one hull computation.
///
/// The buffer is consumed: `build` reorders it freely and drops it afterwards.
#[derive(Clone, Debug)]
pub struct HullBuilder<T> {
    buf: Vec<Point<T>>,
}

impl<T: Coord> HullBuilder<T> {
    #[inline]
    pub fn new(points: Vec<Point<T>>) -> Self {
        Self { buf: points }
    }

    /// Copies `points` into a fresh buffer.
    #[inline]
    pub fn from_points(points: &[Point<T>]) -> Self {
        Self::new(points.to_vec())
    }

    /// Compute the hull. See the module docs for ordering and tie rules.
    pub fn build(mut self) -> Result<Hull<T>, HullError> {
        if self.buf.is_empty() {
            return Err(HullError::invalid("cannot compute convex hull of zero points"));
        }
        if let Some(index) = self.buf.iter().position(|p| !p.is_finite()) {
            return Err(HullError::invalid(format!(
                "point {index} has a non-finite coordinate"
            )));
        }
        let input = self.buf.len();

        let (leftmost, rightmost) = extremes(&self.buf);
        if leftmost == rightmost {
            tracing::debug!(input, hull = 1, "all input points coincide");
            return Ok(Hull::from_vertices(vec![leftmost]));
        }

        // Layout: [upper | lower | collinear with the extremes (dropped)].
        let upper = partition_in_place(&mut self.buf, |p| is_left_of(*p, leftmost, rightmost));
        let lower =
            partition_in_place(&mut self.buf[upper..], |p| is_left_of(*p, rightmost, leftmost));

        let mut hull = Vec::new();
        let mut tasks = vec![
            Task::Divide {
                lo: upper,
                hi: upper + lower,
                top: rightmost,
                bottom: leftmost,
            },
            Task::Emit(rightmost),
            Task::Divide {
                lo: 0,
                hi: upper,
                top: leftmost,
                bottom: rightmost,
            },
            Task::Emit(leftmost),
        ];
        let mut max_pending = tasks.len();
        while let Some(task) = tasks.pop() {
            match task {
                Task::Emit(p) => hull.push(p),
                Task::Divide { lo, hi, top, bottom } => {
                    self.divide(lo, hi, top, bottom, &mut hull, &mut tasks);
                    max_pending = max_pending.max(tasks.len());
                }
            }
        }

        tracing::debug!(
            input,
            upper,
            lower,
            hull = hull.len(),
            max_pending,
            "quickhull done"
        );
        Ok(Hull::from_vertices(hull))
    }

    fn divide(
        &mut self,
        lo: usize,
        hi: usize,
        top: Point<T>,
        bottom: Point<T>,
        hull: &mut Vec<Point<T>>,
        tasks: &mut Vec<Task<T>>,
    ) {
        let set = &mut self.buf[lo..hi];
        match set.len() {
            0 => {}
            1 => hull.push(set[0]),
            _ => {
                let far_index = farthest(set, top, bottom);
                set.swap(0, far_index);
                let far = set[0];
                let rest = &mut set[1..];
                let left = partition_in_place(rest, |p| is_left_of(*p, top, far));
                let right = partition_in_place(&mut rest[left..], |p| is_left_of(*p, far, bottom));
                // Whatever remains lies inside triangle (top, far, bottom).
                let start = lo + 1;
                tasks.push(Task::Divide {
                    lo: start + left,
                    hi: start + left + right,
                    top: far,
                    bottom,
                });
                tasks.push(Task::Emit(far));
                tasks.push(Task::Divide {
                    lo: start,
                    hi: start + left,
                    top,
                    bottom: far,
                });
            }
        }
    }
}

/// Convex hull of `points`, copying the input.
///
/// Fails with `HullError::InvalidInput` on empty input or non-finite floats.
#[inline]
pub fn compute_hull<T: Coord>(points: &[Point<T>]) -> Result<Hull<T>, HullError> {
    HullBuilder::from_points(points).build()
}

fn extremes<T: Coord>(points: &[Point<T>]) -> (Point<T>, Point<T>) {
    let mut leftmost = points[0];
    let mut rightmost = points[0];
    for &p in &points[1..] {
        if p.x < leftmost.x || (p.x == leftmost.x && p.y < leftmost.y) {
            leftmost = p;
        }
        if p.x > rightmost.x || (p.x == rightmost.x && p.y > rightmost.y) {
            rightmost = p;
        }
    }
    (leftmost, rightmost)
}

/// Index of the point with maximal distance to the line `top, bottom`.
/// Every point of a divide set lies strictly left of `top → bottom`, so the
/// exact signed offset ranks the same as the distance.
fn farthest<T: Coord>(points: &[Point<T>], top: Point<T>, bottom: Point<T>) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let farther = match T::cmp_offset(top, bottom, points[best], *p) {
            Ordering::Greater => true,
            Ordering::Equal => nearer_top(*p, points[best], top, bottom),
            Ordering::Less => false,
        };
        if farther {
            best = i;
        }
    }
    best
}

/// For two points on one parallel to `top → bottom`: is `q` strictly nearer
/// `top` along that direction than `p`? Compares a single coordinate, so it
/// is exact for every `Coord`.
#[inline]
fn nearer_top<T: Coord>(q: Point<T>, p: Point<T>, top: Point<T>, bottom: Point<T>) -> bool {
    if top.x < bottom.x {
        q.x < p.x
    } else if top.x > bottom.x {
        q.x > p.x
    } else if top.y < bottom.y {
        q.y < p.y
    } else {
        q.y > p.y
    }
}

/// Moves every element satisfying `predicate` to the front, keeping their
/// relative order, and returns how many there are.
fn partition_in_place<E, P>(data: &mut [E], predicate: P) -> usize
where
    P: Fn(&E) -> bool,
{
    let mut split = 0;
    for i in 0..data.len() {
        if predicate(&data[i]) {
            data.swap(split, i);
            split += 1;
        }
    }
    split
}
