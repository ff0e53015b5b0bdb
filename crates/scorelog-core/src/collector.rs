//! Collection of the first and second results

use crate::error::ValidationError;
use crate::types::ConstantTable;
use crate::validation::validate_test_type;
use rand::Rng;
use rand::seq::SliceRandom;

/// Pick one candidate uniformly at random.
pub fn collect_candidate<R: Rng + ?Sized>(
    range: &[i64],
    rng: &mut R,
) -> Result<i64, ValidationError> {
    range
        .choose(rng)
        .copied()
        .ok_or(ValidationError::EmptyRange)
}

/// Look up the constant for a test type label.
pub fn collect_constant(label: &str, table: &ConstantTable) -> Result<f64, ValidationError> {
    let test_type = validate_test_type(label, table)?;
    table
        .get(test_type)
        .ok_or_else(|| ValidationError::InvalidTestType(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_collect_result_2() {
        let table = ConstantTable::default();
        for (label, expected) in [("easy", 23.8), ("medium", 49.9), ("hard", 105.1)] {
            assert_eq!(collect_constant(label, &table).unwrap(), expected);
        }
    }

    #[test]
    fn unknown_label_is_a_validation_error() {
        let table = ConstantTable::default();
        assert_eq!(
            collect_constant("Junk", &table),
            Err(ValidationError::InvalidTestType("Junk".to_string()))
        );
    }

    #[test]
    fn empty_range_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            collect_candidate(&[], &mut rng),
            Err(ValidationError::EmptyRange)
        );
    }

    #[test]
    fn single_candidate_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(collect_candidate(&[42], &mut rng).unwrap(), 42);
        }
    }

    proptest! {
        #[test]
        fn candidate_is_drawn_from_range(
            range in prop::collection::vec(any::<i64>(), 1..32),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..16 {
                let picked = collect_candidate(&range, &mut rng).unwrap();
                prop_assert!(range.contains(&picked));
            }
        }
    }
}
