//! Independent checks that a ring is the convex hull of an input set.
//!
//! Checked in order, first failure wins:
//! - subset: every vertex is an input point;
//! - no vertex repeats;
//! - strict convexity: all consecutive triples turn the same way, none
//!   collinear;
//! - containment: every input point lies inside or on the ring.
//!
//! Subset plus strict convexity already implies minimality: dropping any
//! vertex would leave that (input) vertex outside the smaller polygon.

use std::cmp::Ordering;
use std::fmt;

use super::hull::Hull;
use super::predicates::{orientation, Orientation};
use super::types::{Coord, Point};

#[derive(Clone, Debug, PartialEq)]
pub enum HullViolation<T> {
    NotAnInputPoint { vertex: Point<T> },
    RepeatedVertex { vertex: Point<T> },
    NotStrictlyConvex { at: usize },
    PointOutside { point: Point<T> },
}

impl<T: fmt::Display> fmt::Display for HullViolation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInputPoint { vertex } => {
                write!(f, "hull vertex {vertex} is not an input point")
            }
            Self::RepeatedVertex { vertex } => write!(f, "hull vertex {vertex} appears twice"),
            Self::NotStrictlyConvex { at } => {
                write!(f, "hull turn at vertex {at} breaks strict convexity")
            }
            Self::PointOutside { point } => write!(f, "input point {point} lies outside the hull"),
        }
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for HullViolation<T> {}

#[inline]
fn lex<T: Coord>(a: &Point<T>, b: &Point<T>) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

pub fn validate_hull<T: Coord>(input: &[Point<T>], hull: &Hull<T>) -> Result<(), HullViolation<T>> {
    let mut sorted_input = input.to_vec();
    sorted_input.sort_by(lex);
    if let Some(&vertex) = hull
        .iter()
        .find(|v| sorted_input.binary_search_by(|p| lex(p, *v)).is_err())
    {
        return Err(HullViolation::NotAnInputPoint { vertex });
    }

    let mut sorted_hull = hull.points().to_vec();
    sorted_hull.sort_by(lex);
    if let Some(pair) = sorted_hull.windows(2).find(|w| w[0] == w[1]) {
        return Err(HullViolation::RepeatedVertex { vertex: pair[0] });
    }

    let ring = hull.points();
    let n = ring.len();
    if n >= 3 {
        let turn = hull.orientation();
        for k in 0..n {
            let o = orientation(ring[k], ring[(k + 1) % n], ring[(k + 2) % n]);
            if o == Orientation::Collinear || o != turn {
                return Err(HullViolation::NotStrictlyConvex { at: (k + 1) % n });
            }
        }
    }

    match input.iter().find(|p| !hull.contains(**p)) {
        Some(&point) => Err(HullViolation::PointOutside { point }),
        None => Ok(()),
    }
}
