//! # scorelog core
//!
//! Pure rules for validating inputs, collecting results and combining them
//! into a single score. Nothing in this crate touches the filesystem.

pub mod collector;
pub mod combiner;
pub mod error;
pub mod types;
pub mod validation;

pub use collector::{collect_candidate, collect_constant};
pub use combiner::{ROUNDING_THRESHOLD, combine, combine_values, extract_suffix, normalize};
pub use error::{CoreError, ProcessingError, ProcessingFailure, Result, ValidationError};
pub use types::{ConstantTable, ResultValue, TestType, format_values};
pub use validation::{validate_range, validate_test_type};
