//! ReLU Lab Core — sample computation and render-state model.
//!
//! Everything non-presentational lives here:
//! - Validated domain parameter (`HalfWidth`, the slider's value)
//! - The activation function itself (`relu`)
//! - Sample generation: 400-point curve plus two-point zero baseline
//! - Named line series and chart layout (the shape the chart sink accepts)
//! - The explicit render pass (`on_half_width_change`)
//! - Static page copy (intro, formula text, property bullets)
//!
//! The crate is pure and synchronous: one slider change in, one complete
//! frame out. Nothing here holds state between calls.

pub mod content;
pub mod layout;
pub mod params;
pub mod relu;
pub mod render;
pub mod sample;
pub mod series;

pub use params::{HalfWidth, ParamError};
pub use render::{on_half_width_change, RenderState};
pub use sample::{compute_curve, Baseline, Curve, SAMPLE_POINTS};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: render-state types are Send + Sync.
    ///
    /// The TUI recomputes on its event thread today; if a caller ever moves
    /// the render pass behind a channel, these bounds must already hold.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<params::HalfWidth>();
        require_sync::<params::HalfWidth>();
        require_send::<params::ParamError>();
        require_sync::<params::ParamError>();

        require_send::<sample::Curve>();
        require_sync::<sample::Curve>();
        require_send::<sample::Baseline>();
        require_sync::<sample::Baseline>();

        require_send::<series::Series>();
        require_sync::<series::Series>();
        require_send::<series::LineStyle>();
        require_sync::<series::LineStyle>();

        require_send::<layout::ChartLayout>();
        require_sync::<layout::ChartLayout>();
        require_send::<render::RenderState>();
        require_sync::<render::RenderState>();
    }
}
