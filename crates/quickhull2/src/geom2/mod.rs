//! Planar convex hulls (quickhull, exact predicates).
//!
//! Purpose
//! - Turn a finite point set into its convex hull ring: ordered, implicitly
//!   closed, no repeated vertex, every vertex an input point.
//! - Keep the surface small: `compute_hull` / `HullBuilder`, the `Hull` value
//!   type, predicates, and an independent `validate_hull`.
//!
//! Conventions
//! - Rings start at the leftmost point and run `upper chain, rightmost, lower
//!   chain`: clockwise with y up, counter-clockwise on a y-down grid.
//!   `Hull::to_ccw` gives the y-up counter-clockwise order.
//! - Side tests and farthest-point ranking are strict and exact; collinear
//!   points are never vertices.
//!
//! Code cross-refs: `quickhull::HullBuilder`, `hull::Hull`, `validate::validate_hull`

pub mod cfg;
mod exact;
mod hull;
mod predicates;
mod quickhull;
pub mod rand;
mod types;
mod validate;

pub use hull::Hull;
pub use predicates::{distance_to_line, is_left_of, orientation, Orientation};
pub use quickhull::{compute_hull, HullBuilder, HullError};
pub use types::{Coord, Point};
pub use validate::{validate_hull, HullViolation};
