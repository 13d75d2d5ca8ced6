//! Convex hulls of planar point sets.
//!
//! The crate is a pure computation: hand it points, get back an owned hull.
//! No state survives a call and nothing is shared between calls, so callers
//! may run independent hulls from as many threads as they like.
//!
//! ```
//! use quickhull2::prelude::*;
//!
//! let points: Vec<Point<i32>> = [(0, 0), (4, 0), (4, 4), (0, 4), (2, 2)]
//!     .into_iter()
//!     .map(|(x, y)| Point::new(x, y))
//!     .collect();
//! let hull = compute_hull(&points).unwrap();
//! assert_eq!(hull.len(), 4);
//! assert_eq!(hull.first(), Point::new(0, 0));
//! assert!(hull.contains(Point::new(2, 2)));
//! ```

pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{sample, CloudCfg, CloudError, CloudFamily, ReplayToken};
    pub use crate::geom2::{
        compute_hull, validate_hull, Coord, Hull, HullBuilder, HullError, HullViolation,
        Orientation, Point,
    };
}
