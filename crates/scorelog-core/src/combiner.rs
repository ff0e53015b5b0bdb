//! Combination of three heterogeneous results into a single score

use crate::error::{ProcessingError, ProcessingFailure};
use crate::types::ResultValue;

/// Values strictly below this are floored, everything else is ceiled
pub const ROUNDING_THRESHOLD: f64 = 51.0;

/// Delimiter between the prefix and the integer suffix of the third result
pub const SUFFIX_DELIMITER: char = '_';

/// Round a real result to an integer around [`ROUNDING_THRESHOLD`].
///
/// Returns `None` for NaN, infinities and values that do not fit in `i64`.
pub fn normalize(result_2: f64) -> Option<i64> {
    if !result_2.is_finite() {
        return None;
    }
    let rounded = if result_2 < ROUNDING_THRESHOLD {
        result_2.floor()
    } else {
        result_2.ceil()
    };
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return None;
    }
    Some(rounded as i64)
}

/// Parse the integer after the first `_` in `result_3`.
///
/// Only the second token is considered, so `"a_1_2"` yields `1`.
pub fn extract_suffix(result_3: &str) -> Option<i64> {
    result_3
        .split(SUFFIX_DELIMITER)
        .nth(1)
        .and_then(|token| token.trim().parse::<i64>().ok())
}

/// Sum an integer, a rounded real and the integer suffix of a tag.
pub fn combine(result_1: i64, result_2: f64, result_3: &str) -> Result<i64, ProcessingError> {
    combine_values(
        &ResultValue::Int(result_1),
        &ResultValue::Real(result_2),
        &ResultValue::Text(result_3.to_string()),
    )
}

/// Dynamic form of [`combine`] over loosely typed inputs.
///
/// `result_1` must be an integer, `result_2` any finite number and
/// `result_3` a `<prefix>_<integer>` string. On failure the error carries
/// all three inputs unchanged.
pub fn combine_values(
    result_1: &ResultValue,
    result_2: &ResultValue,
    result_3: &ResultValue,
) -> Result<i64, ProcessingError> {
    let fail = |reason: ProcessingFailure| {
        tracing::warn!(
            "Unable to process the values: {}, {} and {}",
            result_1,
            result_2,
            result_3
        );
        ProcessingError {
            result_1: result_1.clone(),
            result_2: result_2.clone(),
            result_3: result_3.clone(),
            reason,
        }
    };

    let first = result_1
        .as_int()
        .ok_or_else(|| fail(ProcessingFailure::NonIntegerFirst))?;
    let second = result_2
        .as_real()
        .and_then(normalize)
        .ok_or_else(|| fail(ProcessingFailure::NonNumericSecond))?;
    let third = result_3
        .as_text()
        .and_then(extract_suffix)
        .ok_or_else(|| fail(ProcessingFailure::MissingSuffix))?;

    first
        .checked_add(second)
        .and_then(|sum| sum.checked_add(third))
        .ok_or_else(|| fail(ProcessingFailure::Overflow))
}
