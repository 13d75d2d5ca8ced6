//! Seeded point clouds for hull tests, benches and the CLI.
//!
//! Purpose
//! - Small, reproducible generators for the clouds a hull is usually asked
//!   about: uniform boxes and disks, points on a circle, integer grids, and a
//!   "few boundary points, many interior points" square.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the k-th cloud of a run can be regenerated on its own.

use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::cfg::MAX_HALF_EXTENT;
use super::types::Point;

/// Rejected sampler configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CloudError {
    InvalidParams { reason: String },
}

impl CloudError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid cloud params: {reason}"),
        }
    }
}

impl std::error::Error for CloudError {}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    #[inline]
    pub fn nth(self, index: u64) -> Self {
        Self { index, ..self }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Cloud shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudFamily {
    /// Uniform in `[-h, h]²`.
    Square,
    /// Uniform in the disk of radius `h`.
    Disk,
    /// On the circle of radius `h` (nearly every point is a hull vertex).
    Circle,
    /// Integer square: four corners, a few edge points, the rest strictly inside.
    SquareWithInterior,
    /// Full integer grid of about `count` points spanning `[-h, h]²`.
    Grid,
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub family: CloudFamily,
    /// Exact size for `Square`, `Disk` and `Circle`. `Grid` rounds up to the
    /// next square number; `SquareWithInterior` never drops below its
    /// `boundary` points (at least four).
    pub count: usize,
    /// Half side length (square, grid) or radius (disk, circle). Sign is
    /// ignored; must be finite with magnitude at most `cfg::MAX_HALF_EXTENT`.
    /// Magnitudes below 1 are raised to 1.
    pub half_extent: f64,
    /// Boundary points for `SquareWithInterior`; at least the four corners.
    pub boundary: usize,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            family: CloudFamily::SquareWithInterior,
            count: 1000,
            half_extent: 100.0,
            boundary: 10,
        }
    }
}

/// Draw a cloud as float points (integer families are converted exactly).
pub fn sample(cfg: CloudCfg, tok: ReplayToken) -> Result<Vec<Point<f64>>, CloudError> {
    if !cfg.half_extent.is_finite() || cfg.half_extent.abs() > MAX_HALF_EXTENT {
        return Err(CloudError::invalid(format!(
            "half extent {} must be finite and at most {MAX_HALF_EXTENT:e} in magnitude",
            cfg.half_extent
        )));
    }
    let h = cfg.half_extent.abs().max(1.0);
    let points = match cfg.family {
        CloudFamily::Square => uniform_square(cfg.count, h, tok),
        CloudFamily::Disk => uniform_disk(cfg.count, h, tok),
        CloudFamily::Circle => on_circle(cfg.count, h, tok),
        CloudFamily::SquareWithInterior => {
            let interior = cfg.count.saturating_sub(cfg.boundary.max(4));
            to_float(square_with_interior(cfg.boundary, interior, h as i64, tok))
        }
        CloudFamily::Grid => {
            let side = ((cfg.count as f64).sqrt().ceil() as usize).max(1);
            let step = ((2 * h as i64) / (side as i64 - 1).max(1)).max(1);
            to_float(
                integer_grid(side)
                    .into_iter()
                    .map(|p| Point::new(p.x * step - h as i64, p.y * step - h as i64))
                    .collect(),
            )
        }
    };
    Ok(points)
}

fn to_float(points: Vec<Point<i64>>) -> Vec<Point<f64>> {
    points
        .into_iter()
        .map(|p| Point::new(p.x as f64, p.y as f64))
        .collect()
}

/// `half_extent` must be finite; `sample` checks this for you.
pub fn uniform_square(n: usize, half_extent: f64, tok: ReplayToken) -> Vec<Point<f64>> {
    let mut rng = tok.to_std_rng();
    (0..n)
        .map(|_| {
            Point::new(
                rng.gen_range(-half_extent..=half_extent),
                rng.gen_range(-half_extent..=half_extent),
            )
        })
        .collect()
}

pub fn uniform_disk(n: usize, radius: f64, tok: ReplayToken) -> Vec<Point<f64>> {
    let mut rng = tok.to_std_rng();
    (0..n)
        .map(|_| {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = radius * rng.gen::<f64>().sqrt();
            Point::from(Vector2::new(th.cos() * r, th.sin() * r))
        })
        .collect()
}

pub fn on_circle(n: usize, radius: f64, tok: ReplayToken) -> Vec<Point<f64>> {
    let mut rng = tok.to_std_rng();
    (0..n)
        .map(|_| {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            Point::from(Vector2::new(th.cos() * radius, th.sin() * radius))
        })
        .collect()
}

/// Integer cloud whose hull is exactly the square `[-h, h]²`.
///
/// `boundary` points (at least the four corners) sit on the square; the
/// non-corner ones are on edges, so they are never hull vertices. `interior`
/// points are strictly inside. The whole cloud is shuffled.
pub fn square_with_interior(
    boundary: usize,
    interior: usize,
    half_extent: i64,
    tok: ReplayToken,
) -> Vec<Point<i64>> {
    let h = half_extent.saturating_abs().max(2);
    let mut rng = tok.to_std_rng();
    let mut pts = vec![
        Point::new(-h, -h),
        Point::new(h, -h),
        Point::new(h, h),
        Point::new(-h, h),
    ];
    for k in 0..boundary.saturating_sub(4) {
        let t = rng.gen_range(-h + 1..h);
        pts.push(match k % 4 {
            0 => Point::new(t, -h),
            1 => Point::new(h, t),
            2 => Point::new(t, h),
            _ => Point::new(-h, t),
        });
    }
    pts.extend((0..interior).map(|_| Point::new(rng.gen_range(-h + 1..h), rng.gen_range(-h + 1..h))));
    pts.shuffle(&mut rng);
    pts
}

/// All points of `{0..side}²`, row by row.
pub fn integer_grid(side: usize) -> Vec<Point<i64>> {
    let side = side as i64;
    (0..side)
        .flat_map(|y| (0..side).map(move |x| Point::new(x, y)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        assert_eq!(uniform_square(50, 3.0, tok), uniform_square(50, 3.0, tok));
        assert_ne!(uniform_square(50, 3.0, tok), uniform_square(50, 3.0, tok.nth(8)));
    }

    #[test]
    fn samplers_respect_extent() {
        let tok = ReplayToken::new(5);
        assert!(uniform_square(200, 2.0, tok)
            .iter()
            .all(|p| p.x.abs() <= 2.0 && p.y.abs() <= 2.0));
        assert!(uniform_disk(200, 2.0, tok)
            .iter()
            .all(|p| p.to_vector().norm() <= 2.0 + 1e-12));
        assert!(on_circle(200, 2.0, tok)
            .iter()
            .all(|p| (p.to_vector().norm() - 2.0).abs() < 1e-12));
    }

    #[test]
    fn square_with_interior_layout() {
        let pts = square_with_interior(10, 990, 50, ReplayToken::new(9));
        assert_eq!(pts.len(), 1000);
        let strictly_inside = pts
            .iter()
            .filter(|p| p.x.abs() < 50 && p.y.abs() < 50)
            .count();
        assert_eq!(strictly_inside, 990);
        for corner in [(-50, -50), (50, -50), (50, 50), (-50, 50)] {
            assert!(pts.contains(&corner.into()));
        }
    }

    #[test]
    fn grid_and_cfg_sample() {
        assert_eq!(integer_grid(3).len(), 9);
        assert_eq!(integer_grid(3)[4], Point::new(1, 1));
        let cfg = CloudCfg {
            family: CloudFamily::Grid,
            count: 16,
            half_extent: 6.0,
            boundary: 4,
        };
        let pts = sample(cfg, ReplayToken::new(0)).unwrap();
        assert_eq!(pts.len(), 16);
        assert!(pts.contains(&Point::new(-6.0, -6.0)));
        assert!(pts.contains(&Point::new(6.0, 6.0)));
        assert_eq!(sample(CloudCfg::default(), ReplayToken::new(1)).unwrap().len(), 1000);
    }

    #[test]
    fn grid_rounds_count_up_and_boundary_sets_a_floor() {
        let grid = CloudCfg {
            family: CloudFamily::Grid,
            count: 10,
            ..CloudCfg::default()
        };
        assert_eq!(sample(grid, ReplayToken::new(0)).unwrap().len(), 16);
        let few = CloudCfg {
            count: 3,
            boundary: 6,
            ..CloudCfg::default()
        };
        assert_eq!(sample(few, ReplayToken::new(0)).unwrap().len(), 6);
    }

    #[test]
    fn unusable_extents_are_rejected() {
        for family in [CloudFamily::Grid, CloudFamily::Square, CloudFamily::SquareWithInterior] {
            for half_extent in [5e18, 1e308, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
                let cfg = CloudCfg {
                    family,
                    count: 16,
                    half_extent,
                    boundary: 4,
                };
                let err = sample(cfg, ReplayToken::new(0)).unwrap_err();
                assert!(err.to_string().contains("half extent"), "{err}");
            }
        }
        let largest = CloudCfg {
            family: CloudFamily::Grid,
            count: 9,
            half_extent: -MAX_HALF_EXTENT,
            boundary: 4,
        };
        let pts = sample(largest, ReplayToken::new(0)).unwrap();
        assert!(pts.contains(&Point::new(MAX_HALF_EXTENT, MAX_HALF_EXTENT)));
    }
}
