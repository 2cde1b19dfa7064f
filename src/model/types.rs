//! Core type definitions for IVP models

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════════
// Ordered Mappings
// ═══════════════════════════════════════════════════════════════════════════════

/// An insertion-ordered name → value mapping
///
/// Equations, initial values, expressions, parameters and constants are all
/// declared in a meaningful order, and the exporter must emit them in exactly
/// that order. The mapping is a plain sequence of pairs; iteration order is
/// insertion order.
///
/// Serialization round-trips through a JSON object; entries are read back in
/// document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an entry, keeping insertion order
    pub fn insert(&mut self, name: impl Into<String>, value: V) {
        self.0.push((name.into(), value));
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> Option<&V> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Iterate names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(std::marker::PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, V>()? {
                    entries.push((name, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(std::marker::PhantomData))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Values
// ═══════════════════════════════════════════════════════════════════════════════

/// Either a numeric constant or a textual expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    /// A numeric constant
    Number(f64),
    /// A textual value or expression
    Text(String),
}

impl NumberOrText {
    /// Render the value as display text
    pub fn render(&self) -> String {
        match self {
            Self::Number(n) => format!("{}", n),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for NumberOrText {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for NumberOrText {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A named scalar of the model: an initial value, a parameter or a constant
///
/// Only `value` matters to document rendering; the metadata fields exist for
/// upstream tooling (input forms, captions) and ride along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueEntry {
    /// The value itself
    pub value: NumberOrText,

    /// Human-readable caption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Measurement units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    /// Lower bound for input forms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper bound for input forms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl ValueEntry {
    /// Create an entry carrying just a value
    pub fn new(value: impl Into<NumberOrText>) -> Self {
        Self {
            value: value.into(),
            caption: None,
            units: None,
            min: None,
            max: None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Independent Variable
// ═══════════════════════════════════════════════════════════════════════════════

/// Descriptor of the independent variable (usually time)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgSpec {
    /// Variable name, e.g. `t`
    pub name: String,

    /// Initial value of the integration interval
    pub initial: f64,

    /// Final value of the integration interval
    #[serde(rename = "final")]
    pub last: f64,

    /// Output grid step
    pub step: f64,
}

impl ArgSpec {
    /// Create a descriptor
    pub fn new(name: impl Into<String>, initial: f64, last: f64, step: f64) -> Self {
        Self {
            name: name.into(),
            initial,
            last,
            step,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// The Model
// ═══════════════════════════════════════════════════════════════════════════════

/// An initial value problem model
///
/// This is the structured form produced by the model-loading layer and
/// consumed read-only by the exporter. Differential equations are kept as
/// raw right-hand-side text; nothing here is ever evaluated.
///
/// # Example
///
/// ```
/// use odedoc::model::{ArgSpec, Ivp, ValueEntry};
///
/// let mut model = Ivp::new("Decay", ArgSpec::new("t", 0.0, 10.0, 0.1));
/// model.equations.insert("x", "-k*x".to_string());
/// model.inits.insert("x", ValueEntry::new(2.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ivp {
    /// Model name
    pub name: String,

    /// Optional free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Independent variable descriptor
    pub arg: ArgSpec,

    /// Dependent variable name → differential equation right-hand side
    pub equations: OrderedMap<String>,

    /// Dependent variable name → initial value
    pub inits: OrderedMap<ValueEntry>,

    /// Auxiliary computed expressions, name → expression text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expressions: Option<OrderedMap<String>>,

    /// Model parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<OrderedMap<ValueEntry>>,

    /// Model constants
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constants: Option<OrderedMap<ValueEntry>>,
}

impl Ivp {
    /// Create a model with no equations yet
    pub fn new(name: impl Into<String>, arg: ArgSpec) -> Self {
        Self {
            name: name.into(),
            description: None,
            arg,
            equations: OrderedMap::new(),
            inits: OrderedMap::new(),
            expressions: None,
            parameters: None,
            constants: None,
        }
    }
}
