//! Theoretical growth curves
//!
//! Total step counts for `n` insertions: `n` for SBSA and `n * log2(n)` for
//! an ordered index. Rendering is left to whatever consumes the points.

use crate::error::{Error, Result};
use serde::Serialize;

/// One sample of the growth comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthPoint {
    pub n: f64,
    /// O(1) per insert
    pub sbsa_steps: f64,
    /// O(log n) per insert
    pub logn_steps: f64,
}

impl GrowthPoint {
    pub fn at(n: f64) -> Self {
        Self {
            n,
            sbsa_steps: n,
            logn_steps: n * n.log2(),
        }
    }
}

/// Log-spaced points from `10^min_exp` to `10^max_exp` inclusive
pub fn growth_curve(min_exp: f64, max_exp: f64, points: usize) -> Result<Vec<GrowthPoint>> {
    if points < 2 {
        return Err(Error::InvalidInput(format!(
            "growth curve needs at least 2 points, got {}",
            points
        )));
    }
    if !(min_exp.is_finite() && max_exp.is_finite()) || min_exp >= max_exp {
        return Err(Error::InvalidInput(format!(
            "invalid exponent range {}..{}",
            min_exp, max_exp
        )));
    }

    let step = (max_exp - min_exp) / (points - 1) as f64;
    Ok((0..points)
        .map(|i| GrowthPoint::at(10f64.powf(min_exp + step * i as f64)))
        .collect())
}
