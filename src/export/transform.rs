//! Lexical rewriting of raw math text into escaped math markup
//!
//! The rules here are purely lexical: input strings are never parsed as
//! math, only rewritten token by token. Malformed expressions pass through
//! best-effort; syntactic validation belongs to the upstream model parser.
//!
//! Three independent rules apply in a fixed order:
//!
//! 1. Greek-letter names gain a `\` escape prefix
//! 2. a lone `*` becomes `\cdot `
//! 3. recognized math function names gain a `\` escape prefix
//!
//! The order matters only in that later rules must not re-match text
//! inserted by earlier ones; every rule skips tokens that already carry
//! the escape prefix, which also makes each rule idempotent.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Default for the Greek-letter escaping rule
pub const DEFAULT_GREEK_LETTERS: bool = true;

/// Default for the `*` → `\cdot` substitution rule
pub const DEFAULT_MULT_DOT: bool = true;

/// Default for the math-function escaping rule
pub const DEFAULT_MATH_FUNCS: bool = true;

/// Greek letter names recognized by the escaping rule, both cases
const GREEK_LETTERS: [&str; 48] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "omicron", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi",
    "psi", "omega", "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota",
    "Kappa", "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho", "Sigma", "Tau", "Upsilon", "Phi",
    "Chi", "Psi", "Omega",
];

/// Math function names recognized by the escaping rule
const MATH_FUNCS: [&str; 12] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "sqrt", "exp", "log", "sinh", "cosh", "tanh",
];

lazy_static! {
    /// An identifier, optionally carrying the escape prefix already
    static ref IDENT: Regex = Regex::new(r"\\?[A-Za-z][A-Za-z0-9_]*").unwrap();

    /// A run of asterisks; a run of length one is a multiplication sign,
    /// longer runs are power-operator tokens and stay untouched
    static ref STARS: Regex = Regex::new(r"\*+").unwrap();
}

/// Per-rule enable flags; `None` defers to the module-level default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformFlags {
    /// Escape Greek letter names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greek_letters: Option<bool>,

    /// Replace lone `*` with `\cdot `
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mult_dot: Option<bool>,

    /// Escape math function names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub math_funcs: Option<bool>,
}

/// Apply the enabled rewriting rules to raw math text
pub fn transform(text: &str, flags: &TransformFlags) -> String {
    let mut out = text.to_string();
    if flags.greek_letters.unwrap_or(DEFAULT_GREEK_LETTERS) {
        out = escape_idents(&out, is_greek_token);
    }
    if flags.mult_dot.unwrap_or(DEFAULT_MULT_DOT) {
        out = substitute_mult_dot(&out);
    }
    if flags.math_funcs.unwrap_or(DEFAULT_MATH_FUNCS) {
        out = escape_idents(&out, is_math_func);
    }
    out
}

/// Prefix every identifier accepted by `accept` with the escape marker,
/// leaving already-escaped tokens untouched
fn escape_idents(text: &str, accept: fn(&str) -> bool) -> String {
    IDENT
        .replace_all(text, |caps: &Captures| {
            let token = &caps[0];
            if token.starts_with('\\') || !accept(token) {
                token.to_string()
            } else {
                format!("\\{token}")
            }
        })
        .into_owned()
}

/// Whether an identifier starts with a Greek letter name at a token
/// boundary
///
/// The boundary admits a trailing digit or underscore: subscripted names
/// like `alpha_1` or `beta2` are escaped, longer identifiers like
/// `deltaT` are not.
fn is_greek_token(ident: &str) -> bool {
    GREEK_LETTERS.iter().any(|name| {
        ident
            .strip_prefix(name)
            .is_some_and(|rest| !rest.starts_with(|c: char| c.is_ascii_alphabetic()))
    })
}

/// Whether an identifier is exactly a recognized math function name
fn is_math_func(ident: &str) -> bool {
    MATH_FUNCS.contains(&ident)
}

/// Replace every lone `*` with the centered-dot markup
fn substitute_mult_dot(text: &str) -> String {
    STARS
        .replace_all(text, |caps: &Captures| {
            let run = &caps[0];
            if run.len() == 1 {
                "\\cdot ".to_string()
            } else {
                run.to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_on() -> TransformFlags {
        TransformFlags::default()
    }

    #[test]
    fn test_greek_letters_escaped() {
        assert_eq!(transform("alpha + beta", &all_on()), "\\alpha + \\beta");
        assert_eq!(transform("Omega - rho", &all_on()), "\\Omega - \\rho");
    }

    #[test]
    fn test_greek_escaping_is_idempotent() {
        let once = transform("alpha + sigma_1", &all_on());
        let twice = transform(&once, &all_on());
        assert_eq!(once, twice);
        assert_eq!(once, "\\alpha + \\sigma_1");
    }

    #[test]
    fn test_greek_boundary_admits_digit_and_underscore() {
        assert_eq!(transform("alpha_1", &all_on()), "\\alpha_1");
        assert_eq!(transform("alpha2", &all_on()), "\\alpha2");
        assert_eq!(transform("theta_max", &all_on()), "\\theta_max");
    }

    #[test]
    fn test_greek_not_matched_inside_longer_identifier() {
        assert_eq!(transform("deltaT", &all_on()), "deltaT");
        assert_eq!(transform("xalphay", &all_on()), "xalphay");
        assert_eq!(transform("pies", &all_on()), "pies");
    }

    #[test]
    fn test_lone_star_becomes_cdot() {
        assert_eq!(transform("a*b", &all_on()), "a\\cdot b");
        assert_eq!(transform("-k*x", &all_on()), "-k\\cdot x");
    }

    #[test]
    fn test_power_operator_untouched() {
        assert_eq!(transform("a**b", &all_on()), "a**b");
        assert_eq!(transform("x**2 + y*z", &all_on()), "x**2 + y\\cdot z");
    }

    #[test]
    fn test_math_funcs_escaped() {
        assert_eq!(transform("sin(x) + exp(t)", &all_on()), "\\sin(x) + \\exp(t)");
    }

    #[test]
    fn test_escaped_func_not_doubled() {
        assert_eq!(transform("\\sin(x)", &all_on()), "\\sin(x)");
    }

    #[test]
    fn test_hyperbolic_not_split() {
        // `sinh` must match as itself, never as `sin` + `h`
        assert_eq!(transform("sinh(x)", &all_on()), "\\sinh(x)");
    }

    #[test]
    fn test_func_subscript_not_matched() {
        assert_eq!(transform("exponent", &all_on()), "exponent");
        assert_eq!(transform("exp2", &all_on()), "exp2");
    }

    #[test]
    fn test_flags_disable_rules_independently() {
        let no_greek = TransformFlags {
            greek_letters: Some(false),
            ..Default::default()
        };
        assert_eq!(transform("alpha*x", &no_greek), "alpha\\cdot x");

        let no_dot = TransformFlags {
            mult_dot: Some(false),
            ..Default::default()
        };
        assert_eq!(transform("alpha*x", &no_dot), "\\alpha*x");

        let no_funcs = TransformFlags {
            math_funcs: Some(false),
            ..Default::default()
        };
        assert_eq!(transform("sin(x)", &no_funcs), "sin(x)");
    }

    #[test]
    fn test_malformed_text_passes_through() {
        assert_eq!(transform("((*", &all_on()), "((\\cdot ");
        assert_eq!(transform("", &all_on()), "");
    }

    #[test]
    fn test_flags_deserialize_from_partial_json() {
        let flags: TransformFlags = serde_json::from_str(r#"{"multDot": false}"#).unwrap();
        assert_eq!(flags.mult_dot, Some(false));
        assert_eq!(flags.greek_letters, None);
    }
}
