//! Numeric limits for exact predicates (internal).
//!
//! Policy
//! - The builder never clamps or rescales input. These bounds document where
//!   exactness ends; callers with larger integer coordinates must translate or
//!   rescale before calling.

/// `i64` coordinates with `|c| < I64_EXACT_BOUND` keep every `i128` cross
/// product in range (differences `< 2^63`, products `< 2^126`).
pub const I64_EXACT_BOUND: u64 = 1 << 62;

/// Largest `half_extent` the cloud samplers accept. Keeps integer families
/// well inside `I64_EXACT_BOUND` and float draws far from overflow.
pub const MAX_HALF_EXTENT: f64 = 1e15;
