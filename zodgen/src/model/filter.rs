//! Allow/deny filters and primitive literal values.

use serde::{Deserialize, Serialize};

/// How a filter's value set constrains the validated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// The value must be inside the set.
    #[serde(alias = "allow")]
    Whitelist,
    /// The value must be outside the set.
    #[serde(alias = "deny")]
    Blacklist,
    /// No constraint.
    #[default]
    None,
}

impl FilterMode {
    /// Whether this mode constrains anything at all.
    pub fn is_active(&self) -> bool {
        !matches!(self, FilterMode::None)
    }
}

/// A `{ mode, value }` pair as used by the URL parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter<T> {
    #[serde(default)]
    pub mode: FilterMode,
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

impl<T> Filter<T> {
    pub fn new(mode: FilterMode, value: Vec<T>) -> Self {
        Self { mode, value }
    }

    /// A filter that emits a refinement: an active mode over a non-empty set.
    pub fn is_active(&self) -> bool {
        self.mode.is_active() && !self.value.is_empty()
    }
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self {
            mode: FilterMode::None,
            value: Vec::new(),
        }
    }
}

/// Primitive value accepted by `literal` and `enum`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl LiteralValue {
    pub fn is_string(&self) -> bool {
        matches!(self, LiteralValue::String(_))
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        LiteralValue::String(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        LiteralValue::Number(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        LiteralValue::Number(value as f64)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_aliases() {
        let allow: FilterMode = serde_json::from_str("\"allow\"").unwrap();
        let whitelist: FilterMode = serde_json::from_str("\"whitelist\"").unwrap();
        let deny: FilterMode = serde_json::from_str("\"deny\"").unwrap();
        assert_eq!(allow, FilterMode::Whitelist);
        assert_eq!(whitelist, FilterMode::Whitelist);
        assert_eq!(deny, FilterMode::Blacklist);
        assert_eq!(serde_json::to_string(&deny).unwrap(), "\"blacklist\"");
    }

    #[test]
    fn test_filter_defaults_to_inactive() {
        let filter: Filter<String> = serde_json::from_str("{}").unwrap();
        assert_eq!(filter.mode, FilterMode::None);
        assert!(!filter.is_active());

        let empty = Filter::<String>::new(FilterMode::Whitelist, vec![]);
        assert!(!empty.is_active());
    }

    #[test]
    fn test_literal_values_decode_by_shape() {
        let values: Vec<LiteralValue> =
            serde_json::from_str(r#"["a", 1, 2.5, true, null]"#).unwrap();
        assert_eq!(
            values,
            vec![
                LiteralValue::String("a".into()),
                LiteralValue::Number(1.0),
                LiteralValue::Number(2.5),
                LiteralValue::Bool(true),
                LiteralValue::Null,
            ]
        );
    }
}
