use std::cmp::Ordering;

use crate::ValidatedRecord;

/// Orders records by value, highest first.
///
/// The sort is stable, so records with equal values keep their feed order.
/// The input is left untouched.
pub fn rank(records: &[ValidatedRecord]) -> Vec<ValidatedRecord> {
    let mut ranked = records.to_vec();
    // Values are finite, so `partial_cmp` never yields `None`; `-0.0` ties `0.0`.
    ranked.sort_by(|left, right| {
        right
            .value
            .partial_cmp(&left.value)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}
