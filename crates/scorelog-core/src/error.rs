//! Error types for scorelog-core

use crate::types::{ResultValue, format_values};
use thiserror::Error;

/// Input rejected before any side effect
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Provided results: {} must contain only integers", format_values(.0))]
    InvalidRange(Vec<ResultValue>),

    #[error("Provided test_type: {0} is not a valid test type")]
    InvalidTestType(String),

    #[error("Provided results must contain at least one value")]
    EmptyRange,
}

/// Why a combination could not be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingFailure {
    NonIntegerFirst,
    NonNumericSecond,
    MissingSuffix,
    Overflow,
}

impl std::fmt::Display for ProcessingFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingFailure::NonIntegerFirst => write!(f, "first value is not an integer"),
            ProcessingFailure::NonNumericSecond => {
                write!(f, "second value is not a finite number")
            }
            ProcessingFailure::MissingSuffix => {
                write!(f, "third value has no integer after '_'")
            }
            ProcessingFailure::Overflow => write!(f, "sum does not fit in an integer"),
        }
    }
}

/// The combiner could not normalise or sum its inputs
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unable to process the values: {result_1}, {result_2} and {result_3} ({reason})")]
pub struct ProcessingError {
    pub result_1: ResultValue,
    pub result_2: ResultValue,
    pub result_3: ResultValue,
    pub reason: ProcessingFailure,
}

impl ProcessingError {
    /// The three offending inputs in call order
    pub fn inputs(&self) -> [&ResultValue; 3] {
        [&self.result_1, &self.result_2, &self.result_3]
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_enumerate_offending_input() {
        let err = ValidationError::InvalidRange(vec![ResultValue::Real(1.2), ResultValue::Real(2.3)]);
        assert_eq!(
            err.to_string(),
            "Provided results: [1.2, 2.3] must contain only integers"
        );

        let err = ValidationError::InvalidRange(vec![ResultValue::Int(1), ResultValue::Real(4.0)]);
        assert_eq!(
            err.to_string(),
            "Provided results: [1, 4.0] must contain only integers"
        );

        let err = ValidationError::InvalidTestType("Junk".to_string());
        assert_eq!(
            err.to_string(),
            "Provided test_type: Junk is not a valid test type"
        );
    }

    #[test]
    fn processing_error_carries_inputs() {
        let err = ProcessingError {
            result_1: ResultValue::Int(4),
            result_2: ResultValue::Real(51.1),
            result_3: ResultValue::from("Number_xxx"),
            reason: ProcessingFailure::MissingSuffix,
        };
        let message = err.to_string();
        assert!(message.starts_with("Unable to process the values: 4, 51.1 and \"Number_xxx\""));
        assert_eq!(err.inputs()[2], &ResultValue::from("Number_xxx"));
    }
}
