//! Sample generation — the curve and its zero baseline.
//!
//! One recompute pass per slider change: 400 evenly spaced x values over
//! [-half_width, +half_width], y = relu(x) for each. Pure and idempotent.

use serde::{Deserialize, Serialize};

use crate::params::{HalfWidth, ParamError};
use crate::relu::relu_slice;

/// Number of sample points per curve, regardless of half-width.
pub const SAMPLE_POINTS: usize = 400;

/// `n` evenly spaced values over the closed interval [start, end].
///
/// The last value is written as `end` rather than accumulated, so callers can
/// rely on exact endpoints without an epsilon.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    assert!(n >= 2, "linspace needs at least two points");
    let step = (end - start) / (n - 1) as f64;
    let mut xs: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    xs[n - 1] = end;
    xs
}

/// The (x, y) sample pairs defining the ReLU curve.
///
/// Paired by index, sorted ascending in x, exactly [`SAMPLE_POINTS`] long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Curve {
    /// Sample the activation over [-half_width, +half_width].
    pub fn compute(half_width: HalfWidth) -> Self {
        let xs = linspace(half_width.min_x(), half_width.max_x(), SAMPLE_POINTS);
        let ys = relu_slice(&xs);
        Self { xs, ys }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Smallest sampled x (the left edge of the domain).
    pub fn min_x(&self) -> f64 {
        self.xs[0]
    }

    /// Largest sampled x (the right edge of the domain).
    pub fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    /// Largest sampled y. Equals the right edge, since ReLU is monotone.
    pub fn max_y(&self) -> f64 {
        self.ys[self.ys.len() - 1]
    }

    /// Index-paired points, the shape chart datasets consume.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.xs.iter().copied().zip(self.ys.iter().copied()).collect()
    }
}

/// Validate a raw half-width and sample the curve for it.
///
/// The slider normally guarantees the range, so an error here means a caller
/// bug; it is reported, never masked by clamping.
pub fn compute_curve(half_width: i32) -> Result<Curve, ParamError> {
    Ok(Curve::compute(HalfWidth::new(half_width)?))
}

/// Horizontal reference line at y = 0 spanning the curve's x extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub x_min: f64,
    pub x_max: f64,
}

impl Baseline {
    pub fn for_curve(curve: &Curve) -> Self {
        Self {
            x_min: curve.min_x(),
            x_max: curve.max_x(),
        }
    }

    /// Exactly two points, both at y = 0.
    pub fn points(self) -> [(f64, f64); 2] {
        [(self.x_min, 0.0), (self.x_max, 0.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints_exact() {
        let xs = linspace(-7.0, 7.0, SAMPLE_POINTS);
        assert_eq!(xs.len(), SAMPLE_POINTS);
        assert_eq!(xs[0], -7.0);
        assert_eq!(xs[SAMPLE_POINTS - 1], 7.0);
    }

    #[test]
    fn linspace_two_points() {
        assert_eq!(linspace(0.0, 1.0, 2), vec![0.0, 1.0]);
    }

    #[test]
    fn linspace_step() {
        let xs = linspace(0.0, 10.0, 5);
        assert_eq!(xs, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn curve_has_fixed_point_count() {
        for hw in [HalfWidth::MIN, HalfWidth::DEFAULT, HalfWidth::MAX] {
            let curve = Curve::compute(HalfWidth::new(hw).unwrap());
            assert_eq!(curve.len(), SAMPLE_POINTS);
            assert_eq!(curve.xs.len(), curve.ys.len());
        }
    }

    #[test]
    fn curve_pairs_relu_values() {
        let curve = Curve::compute(HalfWidth::default());
        for (x, y) in curve.points() {
            if x < 0.0 {
                assert_eq!(y, 0.0, "flat branch violated at x = {x}");
            } else {
                assert_eq!(y, x, "identity branch violated at x = {x}");
            }
        }
    }

    #[test]
    fn compute_curve_rejects_invalid() {
        assert!(compute_curve(4).is_err());
        assert!(compute_curve(51).is_err());
        assert!(compute_curve(10).is_ok());
    }

    #[test]
    fn baseline_is_two_points_at_zero() {
        let curve = Curve::compute(HalfWidth::default());
        let points = Baseline::for_curve(&curve).points();
        assert_eq!(points, [(-10.0, 0.0), (10.0, 0.0)]);
    }
}
