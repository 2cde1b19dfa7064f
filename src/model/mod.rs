//! IVP Model Definition
//!
//! This module holds the structured form of an initial value problem model:
//! differential equations, initial conditions and the optional auxiliary
//! mappings (expressions, parameters, constants). The exporter consumes
//! these types read-only.
//!
//! Models are usually produced by an upstream model-specification parser;
//! this module only offers a JSON loading surface and structural validation
//! on top of the plain Rust constructors.
//!
//! # Quick Start
//!
//! ```
//! use odedoc::model::{parse_json, validate_json};
//!
//! let json = r#"{
//!     "name": "Decay",
//!     "arg": { "name": "t", "initial": 0, "final": 10, "step": 0.1 },
//!     "equations": { "x": "-k*x" },
//!     "inits": { "x": { "value": 2 } },
//!     "parameters": { "k": { "value": 0.5 } }
//! }"#;
//!
//! let model = validate_json(json).unwrap();
//! assert_eq!(model.name, "Decay");
//! assert_eq!(model.equations.get("x").unwrap(), "-k*x");
//! ```
//!
//! Mapping order is significant everywhere: equations, initial values and
//! the optional mappings are emitted by the exporter in declaration order,
//! and JSON loading preserves document order.

mod error;
mod types;
mod validation;

pub use error::ModelError;
pub use types::{ArgSpec, Ivp, NumberOrText, OrderedMap, ValueEntry};
pub use validation::Validator;

/// Parse a JSON string into an [`Ivp`] without validating it
pub fn parse_json(json: &str) -> Result<Ivp, ModelError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse and validate a JSON model
pub fn validate_json(json: &str) -> Result<Ivp, ModelError> {
    let model = parse_json(json)?;
    Validator::new().validate(&model)?;
    Ok(model)
}
