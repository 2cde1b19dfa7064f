//! Error types for model loading and validation

use thiserror::Error;

/// Errors that can occur when loading or validating an IVP model
///
/// Document export itself never fails; every variant here belongs to the
/// model-loading boundary.
#[derive(Debug, Error)]
pub enum ModelError {
    // ─────────────────────────────────────────────────────────────────────────
    // Parsing Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Failed to parse JSON
    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────────────────
    // Structural Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// The model declares no differential equations
    #[error("Model '{name}' declares no differential equations")]
    EmptyModel { name: String },

    /// A required field is empty
    #[error("Model field '{field}' must not be empty")]
    MissingField { field: String },

    /// A dependent variable has no initial value
    #[error("Dependent variable '{name}' has no initial value")]
    MissingInit { name: String },

    /// The same name is declared more than once across the model's mappings
    #[error("Name '{name}' is declared more than once")]
    DuplicateName { name: String },
}

impl ModelError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a duplicate name error
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }
}
