//! Notation styles for derivatives and equation delimiters
//!
//! Style selectors resolve through total functions: an absent selector, and
//! an unrecognized spelling arriving through configuration text, both fall
//! back to the documented default instead of erroring.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════════
// Derivative Notation
// ═══════════════════════════════════════════════════════════════════════════════

/// A rendering function for "derivative of `func` with respect to `arg`"
pub type DerivativeFormatting = fn(arg: &str, func: &str) -> String;

/// The textual convention used for derivatives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DerivativeNotation {
    /// `\frac{dx}{dt}`
    Fraction,
    /// `x'`
    Prime,
    /// `dx/dt`
    #[default]
    Division,
}

impl DerivativeNotation {
    /// Resolve the notation to its rendering function
    pub fn formatting(self) -> DerivativeFormatting {
        match self {
            Self::Fraction => fraction_form,
            Self::Prime => prime_form,
            Self::Division => division_form,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Fraction => "fraction",
            Self::Prime => "prime",
            Self::Division => "division",
        }
    }
}

fn fraction_form(arg: &str, func: &str) -> String {
    format!("\\frac{{d{func}}}{{d{arg}}}")
}

fn prime_form(_arg: &str, func: &str) -> String {
    format!("{func}'")
}

fn division_form(arg: &str, func: &str) -> String {
    format!("d{func}/d{arg}")
}

/// Resolve an optional notation selector to a rendering function
///
/// Total: `None` resolves to [`DerivativeNotation::Division`].
pub fn derivative_formatting(style: Option<DerivativeNotation>) -> DerivativeFormatting {
    style.unwrap_or_default().formatting()
}

impl Serialize for DerivativeNotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DerivativeNotation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.to_ascii_lowercase().as_str() {
            "fraction" | "frac" => Self::Fraction,
            "prime" | "dash" => Self::Prime,
            // includes "division" and "div"; anything unrecognized degrades
            // to the default rather than failing
            _ => Self::Division,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Equation Delimiters
// ═══════════════════════════════════════════════════════════════════════════════

/// An (open, close) math-mode delimiter pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EqnTags {
    /// Opening delimiter
    pub open: &'static str,
    /// Closing delimiter
    pub close: &'static str,
}

/// The choice between single- and double-marker math delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelimiterStyle {
    /// `$ ... $`
    Single,
    /// `$$ ... $$`
    #[default]
    Double,
}

impl DelimiterStyle {
    /// Resolve the style to its delimiter pair
    pub fn tags(self) -> EqnTags {
        match self {
            Self::Single => EqnTags {
                open: "$",
                close: "$",
            },
            Self::Double => EqnTags {
                open: "$$",
                close: "$$",
            },
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
        }
    }
}

/// Resolve an optional delimiter style to its tag pair
///
/// Total: `None` resolves to [`DelimiterStyle::Double`].
pub fn eqn_tags(style: Option<DelimiterStyle>) -> EqnTags {
    style.unwrap_or_default().tags()
}

impl Serialize for DelimiterStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DelimiterStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.to_ascii_lowercase().as_str() {
            "single" => Self::Single,
            _ => Self::Double,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unspecified_style_equals_default_style() {
        let fallback = derivative_formatting(None);
        let division = derivative_formatting(Some(DerivativeNotation::Division));
        assert_eq!(fallback("t", "x"), division("t", "x"));

        assert_eq!(eqn_tags(None), eqn_tags(Some(DelimiterStyle::Double)));
    }

    #[test]
    fn test_notations_are_distinct_and_deterministic() {
        let rendered: Vec<String> = [
            DerivativeNotation::Fraction,
            DerivativeNotation::Prime,
            DerivativeNotation::Division,
        ]
        .iter()
        .map(|style| derivative_formatting(Some(*style))("t", "x"))
        .collect();

        assert_eq!(rendered[0], "\\frac{dx}{dt}");
        assert_eq!(rendered[1], "x'");
        assert_eq!(rendered[2], "dx/dt");

        for style in [DerivativeNotation::Fraction, DerivativeNotation::Prime] {
            let f = derivative_formatting(Some(style));
            assert_eq!(f("t", "x"), f("t", "x"));
        }
    }

    #[test]
    fn test_delimiter_pairs() {
        assert_eq!(DelimiterStyle::Single.tags().open, "$");
        assert_eq!(DelimiterStyle::Double.tags().close, "$$");
    }

    #[test]
    fn test_unknown_config_spelling_falls_back() {
        let style: DerivativeNotation = serde_json::from_str(r#""newton""#).unwrap();
        assert_eq!(style, DerivativeNotation::Division);

        let tag: DelimiterStyle = serde_json::from_str(r#""triple""#).unwrap();
        assert_eq!(tag, DelimiterStyle::Double);
    }

    #[test]
    fn test_known_spellings_parse() {
        let style: DerivativeNotation = serde_json::from_str(r#""frac""#).unwrap();
        assert_eq!(style, DerivativeNotation::Fraction);

        let tag: DelimiterStyle = serde_json::from_str(r#""single""#).unwrap();
        assert_eq!(tag, DelimiterStyle::Single);
    }
}
