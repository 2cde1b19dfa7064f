//! Documentation rendering for ODE-defined initial value problem models
//!
//! `odedoc` takes the structured form of an IVP model (differential
//! equations, initial conditions, auxiliary expressions, parameters and
//! constants) and renders it as human-readable documentation: ordered
//! lines of Markdown-with-math or LaTeX. It never solves or evaluates
//! anything; it is the presentation layer of a modeling pipeline.
//!
//! # Overview
//!
//! - [`model`] holds the [`Ivp`](model::Ivp) data types, a JSON loading
//!   surface and structural validation.
//! - [`export`] holds the formatting pipeline: lexical escaping of math
//!   text, notation styles for derivatives and delimiters, and the
//!   document exporter with its Markdown and LaTeX hook sets.
//!
//! # Quick Start
//!
//! ```
//! use odedoc::prelude::*;
//!
//! let mut model = Ivp::new("Decay", ArgSpec::new("t", 0.0, 10.0, 0.1));
//! model.description = Some("Exponential decay".to_string());
//! model.equations.insert("x", "-k*x".to_string());
//! model.inits.insert("x", ValueEntry::new(2.0));
//!
//! let lines = export_markdown(&model, &FormattingOptions::default());
//! assert_eq!(
//!     lines,
//!     vec![
//!         "# Decay",
//!         "Exponential decay",
//!         "$$dx/dt = -k\\cdot x$$",
//!         "## Initial values",
//!         "$$x(0) = 2$$",
//!     ]
//! );
//! ```
//!
//! Declaration order is load-bearing: equations, initial values and the
//! optional mappings are emitted in exactly the order they were inserted
//! or read from JSON.

pub mod export;
pub mod model;

pub use export::{
    export_latex, export_markdown, DelimiterStyle, DerivativeNotation, DocExporter,
    FormattingOptions, RenderHooks, TransformFlags,
};
pub use model::{ArgSpec, Ivp, ModelError, NumberOrText, OrderedMap, ValueEntry, Validator};

pub mod prelude {
    //! Convenience re-exports for typical use
    pub use crate::export::{
        export_latex, export_markdown, DelimiterStyle, DerivativeNotation, DocExporter,
        FormattingOptions, TransformFlags,
    };
    pub use crate::model::{parse_json, validate_json, ArgSpec, Ivp, ValueEntry};
}
