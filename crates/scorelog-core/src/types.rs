//! Common types for scorelog-core

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// A single raw result as supplied by a caller or read back from the log.
///
/// Serialized untagged, so JSON `2`, `1.5` and `"2.5"` map to `Int`, `Real`
/// and `Text` respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Int(i64),
    Real(f64),
    Text(String),
}

impl ResultValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ResultValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view; integers widen to `f64`
    pub fn as_real(&self) -> Option<f64> {
        match self {
            ResultValue::Int(v) => Some(*v as f64),
            ResultValue::Real(v) => Some(*v),
            ResultValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResultValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Int(v) => write!(f, "{}", v),
            // Debug keeps the fraction on integral values (4.0, not 4)
            ResultValue::Real(v) => write!(f, "{:?}", v),
            ResultValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i64> for ResultValue {
    fn from(v: i64) -> Self {
        ResultValue::Int(v)
    }
}

impl From<f64> for ResultValue {
    fn from(v: f64) -> Self {
        ResultValue::Real(v)
    }
}

impl From<&str> for ResultValue {
    fn from(s: &str) -> Self {
        ResultValue::Text(s.to_string())
    }
}

impl From<String> for ResultValue {
    fn from(s: String) -> Self {
        ResultValue::Text(s)
    }
}

/// Render a slice of values as `[a, b, c]`
pub fn format_values(values: &[ResultValue]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// Difficulty label selecting a constant from a [`ConstantTable`]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TestType {
    Easy,
    Medium,
    Hard,
}

/// Immutable mapping from test type to its numeric constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstantTable(BTreeMap<TestType, f64>);

impl ConstantTable {
    /// Build a table from explicit entries
    pub fn new(entries: impl IntoIterator<Item = (TestType, f64)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Constant for a test type, if the table carries one
    pub fn get(&self, test_type: TestType) -> Option<f64> {
        self.0.get(&test_type).copied()
    }

    pub fn contains(&self, test_type: TestType) -> bool {
        self.0.contains_key(&test_type)
    }

    /// Entries in label order
    pub fn iter(&self) -> impl Iterator<Item = (TestType, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ConstantTable {
    fn default() -> Self {
        Self::new(TestType::iter().map(|t| {
            let value = match t {
                TestType::Easy => 23.8,
                TestType::Medium => 49.9,
                TestType::Hard => 105.1,
            };
            (t, value)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_type_parses_lowercase_only() {
        assert_eq!(TestType::from_str("hard").unwrap(), TestType::Hard);
        assert!(TestType::from_str("EASY").is_err());
        assert!(TestType::from_str("mdium").is_err());
        assert_eq!(TestType::Medium.to_string(), "medium");
    }

    #[test]
    fn default_table_has_fixed_constants() {
        let table = ConstantTable::default();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(TestType::Easy), Some(23.8));
        assert_eq!(table.get(TestType::Medium), Some(49.9));
        assert_eq!(table.get(TestType::Hard), Some(105.1));
    }

    #[test]
    fn result_value_json_shape() {
        let values: Vec<ResultValue> = serde_json::from_str(r#"[2, 1.5, "2.5"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                ResultValue::Int(2),
                ResultValue::Real(1.5),
                ResultValue::Text("2.5".to_string())
            ]
        );
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"[2,1.5,"2.5"]"#);
    }

    #[test]
    fn integral_reals_keep_their_fraction() {
        assert_eq!(ResultValue::Real(4.0).to_string(), "4.0");
        assert_eq!(ResultValue::Real(60.0).to_string(), "60.0");
        assert_eq!(ResultValue::Real(49.9).to_string(), "49.9");
        assert_eq!(ResultValue::Int(4).to_string(), "4");
    }

    #[test]
    fn format_values_lists_each_value() {
        let values = vec![ResultValue::from("str"), ResultValue::Real(1.2)];
        assert_eq!(format_values(&values), r#"["str", 1.2]"#);
    }
}
