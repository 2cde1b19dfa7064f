//! Validation for IVP models

use std::collections::HashSet;

use crate::model::error::ModelError;
use crate::model::types::Ivp;

/// Validator for IVP models
///
/// Checks the structural invariants the exporter relies on: a non-empty
/// equation set, one initial value per dependent variable and unique names
/// across all mappings. Expression text is never inspected; syntactic
/// validity of the math belongs to the upstream model parser.
#[derive(Debug, Default)]
pub struct Validator;

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validate a model
    pub fn validate(&self, model: &Ivp) -> Result<(), ModelError> {
        self.validate_identity(model)?;
        self.validate_equations(model)?;
        self.validate_names(model)?;
        Ok(())
    }

    fn validate_identity(&self, model: &Ivp) -> Result<(), ModelError> {
        if model.name.trim().is_empty() {
            return Err(ModelError::missing_field("name"));
        }
        if model.arg.name.trim().is_empty() {
            return Err(ModelError::missing_field("arg.name"));
        }
        Ok(())
    }

    fn validate_equations(&self, model: &Ivp) -> Result<(), ModelError> {
        if model.equations.is_empty() {
            return Err(ModelError::EmptyModel {
                name: model.name.clone(),
            });
        }

        for name in model.equations.names() {
            if model.inits.get(name).is_none() {
                return Err(ModelError::MissingInit {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn validate_names(&self, model: &Ivp) -> Result<(), ModelError> {
        let mut seen = HashSet::new();

        let mut declared: Vec<&str> = model.equations.names().collect();
        if let Some(expressions) = &model.expressions {
            declared.extend(expressions.names());
        }
        if let Some(parameters) = &model.parameters {
            declared.extend(parameters.names());
        }
        if let Some(constants) = &model.constants {
            declared.extend(constants.names());
        }

        for name in declared {
            if !seen.insert(name) {
                return Err(ModelError::duplicate(name));
            }
        }
        Ok(())
    }
}
