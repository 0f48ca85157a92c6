//! End-to-end scenarios for the published contract.

use relulab_core::render::on_half_width_change;
use relulab_core::sample::{compute_curve, Curve, SAMPLE_POINTS};

/// The sampled point whose x is closest to `target`.
fn nearest(curve: &Curve, target: f64) -> (f64, f64) {
    curve
        .points()
        .into_iter()
        .min_by(|a, b| {
            (a.0 - target)
                .abs()
                .partial_cmp(&(b.0 - target).abs())
                .unwrap()
        })
        .unwrap()
}

#[test]
fn default_domain_spans_ten() {
    let curve = compute_curve(10).unwrap();
    assert_eq!(curve.len(), SAMPLE_POINTS);
    assert_eq!(curve.min_x(), -10.0);
    assert_eq!(curve.max_x(), 10.0);

    // The grid never lands on -5 exactly, but the nearest point sits on the
    // flat branch and reads exactly zero.
    let (x, y) = nearest(&curve, -5.0);
    assert!(x < 0.0);
    assert_eq!(y, 0.0);

    // Near x = 5 the curve reads its own x, within one grid step of 5.
    let step = 20.0 / (SAMPLE_POINTS - 1) as f64;
    let (x, y) = nearest(&curve, 5.0);
    assert_eq!(y, x);
    assert!((y - 5.0).abs() <= step);
}

#[test]
fn minimum_half_width() {
    let curve = compute_curve(5).unwrap();
    assert_eq!(curve.min_x(), -5.0);
    assert_eq!(curve.max_x(), 5.0);
    assert!(curve.ys.iter().all(|&y| y >= 0.0));
    assert_eq!(curve.max_y(), 5.0);
}

#[test]
fn maximum_half_width() {
    let curve = compute_curve(50).unwrap();
    assert_eq!(curve.min_x(), -50.0);
    assert_eq!(curve.max_x(), 50.0);
    assert_eq!(curve.max_y(), 50.0);
}

#[test]
fn below_minimum_rejected() {
    let err = compute_curve(0).unwrap_err();
    assert!(err.to_string().contains("outside"));
}

#[test]
fn above_maximum_rejected() {
    assert!(compute_curve(100).is_err());
}

#[test]
fn baseline_matches_curve_extent() {
    let state = on_half_width_change(25).unwrap();
    assert_eq!(state.baseline.len(), 2);
    assert!(state.baseline.ys.iter().all(|&y| y == 0.0));
    assert_eq!(state.baseline.xs[0], state.curve.xs[0]);
    assert_eq!(
        state.baseline.xs[1],
        state.curve.xs[state.curve.len() - 1]
    );
}

#[test]
fn render_state_carries_dashboard_layout() {
    let state = on_half_width_change(10).unwrap();
    assert_eq!(state.layout.title, "ReLU Function: f(x) = max(0, x)");
    assert_eq!(state.layout.x_label, "Input (x)");
    assert_eq!(state.layout.y_label, "Output (Activation)");
    assert!(state.layout.dark_mode);
    assert_eq!(state.layout.height, 500);
}
