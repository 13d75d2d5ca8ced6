//! Exact sign of small float polynomials via non-overlapping expansions.
//!
//! `robust::orient2d` only promises an exact sign; its magnitude is an
//! estimate. Ranking points by distance needs the exact sign of a difference
//! of two such determinants, which is evaluated here with error-free
//! transformations (`two_sum`, `two_product`) and Grow-Expansion.
//!
//! Exact as long as no product overflows and no error term underflows
//! (coordinates roughly within `1e-140..1e140` in magnitude).

use std::cmp::Ordering;

#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let bv = x - a;
    let av = x - bv;
    (x, (a - av) + (b - bv))
}

#[inline]
fn two_diff(a: f64, b: f64) -> (f64, f64) {
    two_sum(a, -b)
}

#[inline]
fn two_product(a: f64, b: f64) -> (f64, f64) {
    let x = a * b;
    (x, a.mul_add(b, -x))
}

/// Components ordered by increasing magnitude, pairwise non-overlapping.
struct Expansion {
    terms: [f64; 16],
    len: usize,
}

impl Expansion {
    fn new() -> Self {
        Self {
            terms: [0.0; 16],
            len: 0,
        }
    }

    fn grow(&mut self, b: f64) {
        let mut q = b;
        for h in &mut self.terms[..self.len] {
            let (sum, err) = two_sum(q, *h);
            *h = err;
            q = sum;
        }
        self.terms[self.len] = q;
        self.len += 1;
    }

    /// Adds `sign * a * b` for two-component `a`, `b`.
    fn add_product(&mut self, a: (f64, f64), b: (f64, f64), sign: f64) {
        for ai in [a.1, a.0] {
            for bi in [b.1, b.0] {
                let (p, e) = two_product(ai, bi);
                self.grow(sign * e);
                self.grow(sign * p);
            }
        }
    }

    /// The most significant non-zero component carries the sign.
    fn sign(&self) -> Ordering {
        self.terms[..self.len]
            .iter()
            .rev()
            .find(|t| **t != 0.0)
            .map_or(Ordering::Equal, |t| {
                if *t > 0.0 {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            })
    }
}

/// Exact sign of `(ax1 - ax0) * (by1 - by0) - (ay1 - ay0) * (bx1 - bx0)`,
/// the cross product of the directions `a0 → a1` and `b0 → b1`.
pub(crate) fn cross_of_differences(
    a0: [f64; 2],
    a1: [f64; 2],
    b0: [f64; 2],
    b1: [f64; 2],
) -> Ordering {
    let adx = two_diff(a1[0], a0[0]);
    let ady = two_diff(a1[1], a0[1]);
    let bdx = two_diff(b1[0], b0[0]);
    let bdy = two_diff(b1[1], b0[1]);
    let mut acc = Expansion::new();
    acc.add_product(adx, bdy, 1.0);
    acc.add_product(ady, bdx, -1.0);
    acc.sign()
}
