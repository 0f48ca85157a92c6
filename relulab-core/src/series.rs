//! Named line series — the shape the chart sink accepts.
//!
//! A sink takes `{x, y, label, style}` per series plus layout options; the
//! core supplies exactly two series per render pass.

use serde::{Deserialize, Serialize};

use crate::sample::{Baseline, Curve};

/// 24-bit color carried with a series so every sink draws the same palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Spring green of the main curve trace.
pub const CURVE_COLOR: Rgb = Rgb(0, 204, 150);

/// Gray of the dashed reference line.
pub const BASELINE_COLOR: Rgb = Rgb(128, 128, 128);

/// Stroke styling for one line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Rgb,
    pub width: u8,
    pub dashed: bool,
}

/// A named line series, paired by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub style: LineStyle,
}

impl Series {
    /// The main ReLU trace.
    pub fn from_curve(curve: &Curve) -> Self {
        Self {
            name: "ReLU Output".to_string(),
            xs: curve.xs.clone(),
            ys: curve.ys.clone(),
            style: LineStyle {
                color: CURVE_COLOR,
                width: 4,
                dashed: false,
            },
        }
    }

    /// The dashed zero-reference trace.
    pub fn from_baseline(baseline: Baseline) -> Self {
        let [(x0, y0), (x1, y1)] = baseline.points();
        Self {
            name: "Zero Baseline".to_string(),
            xs: vec![x0, x1],
            ys: vec![y0, y1],
            style: LineStyle {
                color: BASELINE_COLOR,
                width: 1,
                dashed: true,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Index-paired points, the shape chart datasets consume.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.xs.iter().copied().zip(self.ys.iter().copied()).collect()
    }
}
