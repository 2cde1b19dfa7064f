//! Document Export
//!
//! This module turns an [`Ivp`](crate::model::Ivp) into ordered lines of
//! Markdown-with-math or LaTeX documentation. It is a presentation layer
//! only: expression text is rewritten lexically, never parsed or
//! evaluated.
//!
//! # Quick Start
//!
//! ```
//! use odedoc::export::{export_markdown, FormattingOptions};
//! use odedoc::model::{ArgSpec, Ivp, ValueEntry};
//!
//! let mut model = Ivp::new("Decay", ArgSpec::new("t", 0.0, 10.0, 0.1));
//! model.equations.insert("x", "-k*x".to_string());
//! model.inits.insert("x", ValueEntry::new(2.0));
//!
//! let lines = export_markdown(&model, &FormattingOptions::default());
//! assert_eq!(lines[1], "$$dx/dt = -k\\cdot x$$");
//! ```
//!
//! For the compact case-environment form, or for custom heading markup,
//! construct a [`DocExporter`] directly.
//!
//! Callers join the returned lines themselves; the exporter guarantees
//! line content and order, not a join delimiter.

mod exporter;
mod notation;
mod transform;

pub use exporter::{
    DocExporter, FormattingOptions, RenderHooks, TITLE_CONSTANTS, TITLE_EXPRESSIONS, TITLE_INITS,
    TITLE_PARAMETERS,
};
pub use notation::{
    derivative_formatting, eqn_tags, DelimiterStyle, DerivativeFormatting, DerivativeNotation,
    EqnTags,
};
pub use transform::{transform, TransformFlags};

use crate::model::Ivp;

/// Render a model's full document as Markdown-with-math lines
pub fn export_markdown(model: &Ivp, options: &FormattingOptions) -> Vec<String> {
    DocExporter::markdown(model, options).full_document_lines()
}

/// Render a model's full document as LaTeX lines
pub fn export_latex(model: &Ivp, options: &FormattingOptions) -> Vec<String> {
    DocExporter::latex(model, options).full_document_lines()
}
