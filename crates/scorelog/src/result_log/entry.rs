use scorelog_core::ResultValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three raw inputs that produced a combined score, in call order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordedInputs([ResultValue; 3]);

impl RecordedInputs {
    pub fn new(
        result_1: impl Into<ResultValue>,
        result_2: impl Into<ResultValue>,
        result_3: impl Into<ResultValue>,
    ) -> Self {
        Self([result_1.into(), result_2.into(), result_3.into()])
    }

    pub fn values(&self) -> &[ResultValue; 3] {
        &self.0
    }
}

impl From<[ResultValue; 3]> for RecordedInputs {
    fn from(values: [ResultValue; 3]) -> Self {
        Self(values)
    }
}

impl fmt::Display for RecordedInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", scorelog_core::format_values(&self.0))
    }
}

/// A borrowed view of one log record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogEntry<'a> {
    /// Decimal string of the combined score
    pub key: &'a str,
    pub inputs: &'a RecordedInputs,
}
