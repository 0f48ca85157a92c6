//! Static page copy — titles, intro, formula text, and property bullets.
//!
//! None of this is derived from computation; sinks render it verbatim.

pub const PAGE_TITLE: &str = "Activation Function Visualizer";

pub const SECTION_HEADING: &str = "1. Rectified Linear Unit (ReLU)";

pub const INTRO: &str = "The ReLU function is the most widely used activation \
function in deep learning. It outputs the input directly if it is positive, \
otherwise, it outputs zero.";

pub const SIDEBAR_HEADING: &str = "Input Settings";

pub const SLIDER_LABEL: &str = "Select X-axis Range";

pub const SLIDER_HELP: &str = "Adjust how wide the graph view is.";

pub const PROPERTIES_HEADING: &str = "See Mathematical Properties";

/// The piecewise definition, pre-rendered for text sinks.
pub const FORMULA_LINES: [&str; 3] = [
    "       ⎧ 0   if x < 0",
    "f(x) = ⎨",
    "       ⎩ x   if x ≥ 0",
];

/// One bullet in the properties section.
#[derive(Debug, Clone, Copy)]
pub struct MathProperty {
    pub name: &'static str,
    pub detail: &'static str,
}

pub const MATH_PROPERTIES: [MathProperty; 3] = [
    MathProperty {
        name: "Linearity",
        detail: "It is linear for all positive values.",
    },
    MathProperty {
        name: "Sparsity",
        detail: "It outputs true zero for negative values, allowing models to be sparse (efficient).",
    },
    MathProperty {
        name: "Gradient",
        detail: "The gradient is 1 for x > 0 and 0 for x < 0.",
    },
];
