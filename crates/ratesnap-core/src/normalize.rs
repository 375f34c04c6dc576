use crate::{RawRecord, ValidatedRecord, ValueFormatError};

/// Parses every record's value, all or nothing, preserving input order.
pub fn normalize(records: &[RawRecord]) -> Result<Vec<ValidatedRecord>, ValueFormatError> {
    records.iter().map(normalize_record).collect()
}

pub fn normalize_record(record: &RawRecord) -> Result<ValidatedRecord, ValueFormatError> {
    let value = parse_value(&record.raw_value).ok_or_else(|| ValueFormatError {
        alpha_code: record.alpha_code.clone(),
        raw_value: record.raw_value.clone(),
    })?;

    Ok(ValidatedRecord {
        numeric_code: record.numeric_code,
        alpha_code: record.alpha_code.clone(),
        value,
    })
}

/// Replaces the first decimal comma with a point and parses the result.
///
/// Returns `None` for unparsable text and for non-finite results such as
/// `inf` or `NaN`.
pub fn parse_value(raw: &str) -> Option<f64> {
    raw.replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
