//! Input validation run before any collection or side effect

use crate::error::ValidationError;
use crate::types::{ConstantTable, ResultValue, TestType};
use std::str::FromStr;

/// Check that every candidate is an integer and return them as a range.
///
/// An empty slice passes; selecting from it is rejected later by
/// [`crate::collector::collect_candidate`].
pub fn validate_range(values: &[ResultValue]) -> Result<Vec<i64>, ValidationError> {
    values
        .iter()
        .map(ResultValue::as_int)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| ValidationError::InvalidRange(values.to_vec()))
}

/// Check that `label` names a test type present in `table`.
pub fn validate_test_type(label: &str, table: &ConstantTable) -> Result<TestType, ValidationError> {
    TestType::from_str(label)
        .ok()
        .filter(|test_type| table.contains(*test_type))
        .ok_or_else(|| ValidationError::InvalidTestType(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<ResultValue> {
        values.iter().copied().map(ResultValue::Int).collect()
    }

    #[test]
    fn test_validate_result_range() {
        let cases: Vec<(Vec<ResultValue>, bool)> = vec![
            (vec![ResultValue::Real(1.2), ResultValue::Real(2.3)], false),
            (vec![ResultValue::from("str"), ResultValue::from("num")], false),
            (
                vec![
                    ResultValue::Int(1),
                    ResultValue::Int(2),
                    ResultValue::Int(3),
                    ResultValue::Real(4.4),
                ],
                false,
            ),
            (ints(&[1, 2, 3, 4]), true),
        ];

        for (input, ok) in cases {
            let result = validate_range(&input);
            assert_eq!(result.is_ok(), ok, "{input:?}");
            if !ok {
                assert_eq!(result.unwrap_err(), ValidationError::InvalidRange(input));
            }
        }
    }

    #[test]
    fn valid_range_is_returned_in_order() {
        assert_eq!(validate_range(&ints(&[5, 1, 5])).unwrap(), vec![5, 1, 5]);
        assert!(validate_range(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_validate_test_type() {
        let table = ConstantTable::default();
        for label in ["EASY", "mdium", "Junk"] {
            assert_eq!(
                validate_test_type(label, &table),
                Err(ValidationError::InvalidTestType(label.to_string()))
            );
        }
        assert_eq!(validate_test_type("hard", &table), Ok(TestType::Hard));
    }

    #[test]
    fn label_missing_from_table_is_invalid() {
        let table = ConstantTable::new([(TestType::Easy, 1.0)]);
        assert!(validate_test_type("easy", &table).is_ok());
        assert!(validate_test_type("hard", &table).is_err());
    }
}
