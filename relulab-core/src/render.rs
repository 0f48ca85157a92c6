//! The render pass — the reactive model made explicit.
//!
//! The hosting UI owns the slider; each change is handed to
//! [`on_half_width_change`] as a plain integer and comes back as a complete
//! [`RenderState`]. No ambient state, no partial update: every frame is
//! recomputed from its parameter alone.

use serde::{Deserialize, Serialize};

use crate::layout::ChartLayout;
use crate::params::{HalfWidth, ParamError};
use crate::sample::{Baseline, Curve};
use crate::series::Series;

/// Fraction of the peak value added as headroom above and below the chart.
const Y_PADDING_FRAC: f64 = 0.05;

/// Everything a chart sink needs for one render pass: the two named series
/// and the layout options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub half_width: HalfWidth,
    pub curve: Series,
    pub baseline: Series,
    pub layout: ChartLayout,
}

impl RenderState {
    pub fn new(half_width: HalfWidth) -> Self {
        let curve = Curve::compute(half_width);
        let baseline = Baseline::for_curve(&curve);
        Self {
            half_width,
            curve: Series::from_curve(&curve),
            baseline: Series::from_baseline(baseline),
            layout: ChartLayout::default(),
        }
    }

    /// Chart x bounds: exactly the sampled domain.
    pub fn x_bounds(&self) -> [f64; 2] {
        [self.half_width.min_x(), self.half_width.max_x()]
    }

    /// Chart y bounds: the value range with a little headroom, dipping just
    /// below zero so the baseline stays visible.
    pub fn y_bounds(&self) -> [f64; 2] {
        let peak = self.half_width.max_x();
        let pad = peak * Y_PADDING_FRAC;
        [-pad, peak + pad]
    }
}

/// Handle a slider change: validate, recompute, return the next frame.
///
/// An out-of-range value aborts this render pass with an error the caller
/// surfaces as a message; the previous frame stays intact.
pub fn on_half_width_change(value: i32) -> Result<RenderState, ParamError> {
    Ok(RenderState::new(HalfWidth::new(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SAMPLE_POINTS;

    #[test]
    fn render_pass_produces_two_series() {
        let state = on_half_width_change(10).unwrap();
        assert_eq!(state.curve.len(), SAMPLE_POINTS);
        assert_eq!(state.baseline.len(), 2);
        assert_eq!(state.curve.name, "ReLU Output");
        assert_eq!(state.baseline.name, "Zero Baseline");
    }

    #[test]
    fn bounds_track_the_parameter() {
        let state = on_half_width_change(20).unwrap();
        assert_eq!(state.x_bounds(), [-20.0, 20.0]);
        let [y_min, y_max] = state.y_bounds();
        assert!(y_min < 0.0, "baseline must stay visible");
        assert!(y_max > 20.0, "peak needs headroom");
    }

    #[test]
    fn invalid_value_aborts_the_pass() {
        assert!(on_half_width_change(0).is_err());
        assert!(on_half_width_change(100).is_err());
    }

    #[test]
    fn identical_input_identical_frame() {
        assert_eq!(
            on_half_width_change(33).unwrap(),
            on_half_width_change(33).unwrap()
        );
    }

    #[test]
    fn serializes_for_export() {
        let state = on_half_width_change(5).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: RenderState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
