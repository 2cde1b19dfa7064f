//! Document assembly for IVP models
//!
//! [`DocExporter`] walks a borrowed model and emits an ordered sequence of
//! text lines. The traversal is written once; the Markdown and LaTeX
//! surfaces differ only in the two rendering hooks supplied at
//! construction.

use serde::{Deserialize, Serialize};

use crate::export::notation::{
    derivative_formatting, eqn_tags, DelimiterStyle, DerivativeNotation, EqnTags,
};
use crate::export::transform::{transform, TransformFlags};
use crate::model::{Ivp, OrderedMap, ValueEntry};

/// Section title for the initial-conditions block
pub const TITLE_INITS: &str = "Initial values";

/// Section title for the auxiliary-computation block
pub const TITLE_EXPRESSIONS: &str = "Expressions";

/// Section title for the parameter block
pub const TITLE_PARAMETERS: &str = "Parameters";

/// Section title for the constant block
pub const TITLE_CONSTANTS: &str = "Constants";

/// Label inlined by the LaTeX title block when a model has no description
const LABEL_EQUATIONS: &str = "Differential equations";

// Compact-block markup; the only requirement on the spelling is a valid
// multi-row math environment.
const CASES_OPEN: &str = "\\begin{cases}";
const CASES_CLOSE: &str = "\\end{cases}";
const ROW_TERMINATOR: &str = " \\\\";

// ═══════════════════════════════════════════════════════════════════════════════
// Formatting Options
// ═══════════════════════════════════════════════════════════════════════════════

/// Formatting configuration for one export
///
/// Every field is optional and has an independent default: double
/// delimiters everywhere, division-form derivatives, all escaping rules
/// enabled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormattingOptions {
    /// Delimiter style for equation and compact-block lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eqn_tag: Option<DelimiterStyle>,

    /// Delimiter style for standalone value lines (inits, parameters,
    /// constants)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val_tag: Option<DelimiterStyle>,

    /// Derivative notation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub der_form: Option<DerivativeNotation>,

    /// Escaping rule toggles
    #[serde(flatten)]
    pub transform: TransformFlags,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Hooks
// ═══════════════════════════════════════════════════════════════════════════════

/// The two rendering hooks that distinguish output surfaces
///
/// The source of a document's structure is always the shared traversal in
/// [`DocExporter`]; a hook set only decides how the title block and the
/// subsection headings are spelled.
#[derive(Debug, Clone, Copy)]
pub struct RenderHooks {
    /// Render the document title block from the model name and optional
    /// description
    pub title_block: fn(name: &str, description: Option<&str>) -> Vec<String>,

    /// Render a subsection heading
    pub subsection_heading: fn(title: &str) -> String,
}

impl RenderHooks {
    /// Hooks targeting Markdown-with-math
    pub fn markdown() -> Self {
        Self {
            title_block: markdown_title_block,
            subsection_heading: markdown_subsection,
        }
    }

    /// Hooks targeting LaTeX
    pub fn latex() -> Self {
        Self {
            title_block: latex_title_block,
            subsection_heading: latex_subsection,
        }
    }
}

fn markdown_title_block(name: &str, description: Option<&str>) -> Vec<String> {
    let mut lines = vec![format!("# {name}")];
    if let Some(description) = description {
        lines.push(description.to_string());
    }
    lines
}

fn markdown_subsection(title: &str) -> String {
    format!("## {title}")
}

fn latex_title_block(name: &str, description: Option<&str>) -> Vec<String> {
    let mut lines = vec![format!("\\section*{{{name}}}")];
    match description {
        Some(description) => lines.push(description.to_string()),
        None => lines.push(format!("\\textbf{{{LABEL_EQUATIONS}}}")),
    }
    lines
}

fn latex_subsection(title: &str) -> String {
    format!("\\textbf{{{title}}}")
}

// ═══════════════════════════════════════════════════════════════════════════════
// The Exporter
// ═══════════════════════════════════════════════════════════════════════════════

/// Renders one model into ordered document lines
///
/// The exporter borrows its model and options for the duration of the
/// calls; nothing is mutated, so repeated calls produce identical output.
///
/// # Example
///
/// ```
/// use odedoc::export::{DocExporter, FormattingOptions};
/// use odedoc::model::{ArgSpec, Ivp, ValueEntry};
///
/// let mut model = Ivp::new("Decay", ArgSpec::new("t", 0.0, 10.0, 0.1));
/// model.equations.insert("x", "-k*x".to_string());
/// model.inits.insert("x", ValueEntry::new(2.0));
///
/// let options = FormattingOptions::default();
/// let lines = DocExporter::markdown(&model, &options).full_document_lines();
/// assert!(lines.contains(&"$$dx/dt = -k\\cdot x$$".to_string()));
/// ```
pub struct DocExporter<'a> {
    model: &'a Ivp,
    options: &'a FormattingOptions,
    hooks: RenderHooks,
}

impl<'a> DocExporter<'a> {
    /// Create an exporter targeting Markdown-with-math
    pub fn markdown(model: &'a Ivp, options: &'a FormattingOptions) -> Self {
        Self::with_hooks(model, options, RenderHooks::markdown())
    }

    /// Create an exporter targeting LaTeX
    pub fn latex(model: &'a Ivp, options: &'a FormattingOptions) -> Self {
        Self::with_hooks(model, options, RenderHooks::latex())
    }

    /// Create an exporter with custom rendering hooks
    pub fn with_hooks(model: &'a Ivp, options: &'a FormattingOptions, hooks: RenderHooks) -> Self {
        Self {
            model,
            options,
            hooks,
        }
    }

    /// Produce the full document: title block, one delimited line per
    /// equation, then the initial-value section and the optional
    /// expression, parameter and constant sections
    pub fn full_document_lines(&self) -> Vec<String> {
        let derivative = derivative_formatting(self.options.der_form);
        let eqn = eqn_tags(self.options.eqn_tag);
        let val = eqn_tags(self.options.val_tag);

        let mut lines = self.title_block();

        for (name, rhs) in self.model.equations.iter() {
            lines.push(format!(
                "{}{} = {}{}",
                eqn.open,
                derivative(&self.model.arg.name, name),
                self.transform(rhs),
                eqn.close,
            ));
        }

        lines.push((self.hooks.subsection_heading)(TITLE_INITS));
        for (name, entry) in self.model.inits.iter() {
            lines.push(format!(
                "{}{}({}) = {}{}",
                val.open,
                name,
                self.model.arg.initial,
                self.transform(&entry.value.render()),
                val.close,
            ));
        }

        self.push_optional_sections(&mut lines, eqn, val);
        lines
    }

    /// Produce the compact document: title block, then equations and
    /// initial values combined in one case-style block delimited once,
    /// then the same optional sections as the full form
    pub fn compact_document_lines(&self) -> Vec<String> {
        let derivative = derivative_formatting(self.options.der_form);
        let eqn = eqn_tags(self.options.eqn_tag);
        let val = eqn_tags(self.options.val_tag);

        let mut lines = self.title_block();

        lines.push(format!("{}{}", eqn.open, CASES_OPEN));
        for (name, rhs) in self.model.equations.iter() {
            lines.push(format!(
                "{} = {}{}",
                derivative(&self.model.arg.name, name),
                self.transform(rhs),
                ROW_TERMINATOR,
            ));
        }
        for (name, entry) in self.model.inits.iter() {
            lines.push(format!(
                "{}({}) = {}{}",
                name,
                self.model.arg.initial,
                self.transform(&entry.value.render()),
                ROW_TERMINATOR,
            ));
        }
        lines.push(format!("{}{}", CASES_CLOSE, eqn.close));

        self.push_optional_sections(&mut lines, eqn, val);
        lines
    }

    fn title_block(&self) -> Vec<String> {
        (self.hooks.title_block)(&self.model.name, self.model.description.as_deref())
    }

    fn transform(&self, text: &str) -> String {
        transform(text, &self.options.transform)
    }

    /// Emit the expression, parameter and constant sections, each only if
    /// its mapping is present on the model. A present-but-empty mapping
    /// still gets its heading.
    fn push_optional_sections(&self, lines: &mut Vec<String>, eqn: EqnTags, val: EqnTags) {
        if let Some(expressions) = &self.model.expressions {
            lines.push((self.hooks.subsection_heading)(TITLE_EXPRESSIONS));
            for (name, rhs) in expressions.iter() {
                lines.push(format!(
                    "{}{} = {}{}",
                    eqn.open,
                    name,
                    self.transform(rhs),
                    eqn.close,
                ));
            }
        }

        self.push_value_section(lines, TITLE_PARAMETERS, self.model.parameters.as_ref(), val);
        self.push_value_section(lines, TITLE_CONSTANTS, self.model.constants.as_ref(), val);
    }

    fn push_value_section(
        &self,
        lines: &mut Vec<String>,
        title: &str,
        mapping: Option<&OrderedMap<ValueEntry>>,
        tags: EqnTags,
    ) {
        let Some(mapping) = mapping else {
            return;
        };

        lines.push((self.hooks.subsection_heading)(title));
        for (name, entry) in mapping.iter() {
            lines.push(format!(
                "{}{} = {}{}",
                tags.open,
                name,
                self.transform(&entry.value.render()),
                tags.close,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArgSpec;

    fn decay_model() -> Ivp {
        let mut model = Ivp::new("Decay", ArgSpec::new("t", 0.0, 10.0, 0.1));
        model.description = Some("Exponential decay".to_string());
        model.equations.insert("x", "-k*x".to_string());
        model.inits.insert("x", ValueEntry::new(2.0));
        model
    }

    #[test]
    fn test_full_document_default_options() {
        let model = decay_model();
        let options = FormattingOptions::default();
        let lines = DocExporter::markdown(&model, &options).full_document_lines();

        assert_eq!(lines[0], "# Decay");
        assert_eq!(lines[1], "Exponential decay");
        assert_eq!(lines[2], "$$dx/dt = -k\\cdot x$$");
        assert_eq!(lines[3], "## Initial values");
        assert_eq!(lines[4], "$$x(0) = 2$$");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_fraction_notation_and_single_delimiters() {
        let model = decay_model();
        let options = FormattingOptions {
            eqn_tag: Some(DelimiterStyle::Single),
            der_form: Some(DerivativeNotation::Fraction),
            ..Default::default()
        };
        let lines = DocExporter::markdown(&model, &options).full_document_lines();

        assert_eq!(lines[2], "$\\frac{dx}{dt} = -k\\cdot x$");
        // value lines keep their own delimiter style
        assert_eq!(lines[4], "$$x(0) = 2$$");
    }

    #[test]
    fn test_compact_document_delimits_once() {
        let model = decay_model();
        let options = FormattingOptions::default();
        let lines = DocExporter::markdown(&model, &options).compact_document_lines();

        assert_eq!(lines[2], "$$\\begin{cases}");
        assert_eq!(lines[3], "dx/dt = -k\\cdot x \\\\");
        assert_eq!(lines[4], "x(0) = 2 \\\\");
        assert_eq!(lines[5], "\\end{cases}$$");
    }

    #[test]
    fn test_repeated_calls_are_idempotent() {
        let model = decay_model();
        let options = FormattingOptions::default();
        let exporter = DocExporter::markdown(&model, &options);

        assert_eq!(exporter.full_document_lines(), exporter.full_document_lines());
        assert_eq!(
            exporter.compact_document_lines(),
            exporter.compact_document_lines()
        );
    }

    #[test]
    fn test_latex_hooks_without_description() {
        let mut model = decay_model();
        model.description = None;
        let options = FormattingOptions::default();
        let lines = DocExporter::latex(&model, &options).full_document_lines();

        assert_eq!(lines[0], "\\section*{Decay}");
        assert_eq!(lines[1], "\\textbf{Differential equations}");
        assert_eq!(lines[3], "\\textbf{Initial values}");
    }

    #[test]
    fn test_latex_hooks_with_description() {
        let model = decay_model();
        let options = FormattingOptions::default();
        let lines = DocExporter::latex(&model, &options).full_document_lines();

        assert_eq!(lines[0], "\\section*{Decay}");
        assert_eq!(lines[1], "Exponential decay");
    }

    #[test]
    fn test_options_deserialize_from_partial_json() {
        let options: FormattingOptions =
            serde_json::from_str(r#"{"derForm": "prime", "greekLetters": false}"#).unwrap();
        assert_eq!(options.der_form, Some(DerivativeNotation::Prime));
        assert_eq!(options.transform.greek_letters, Some(false));
        assert_eq!(options.eqn_tag, None);
    }
}
