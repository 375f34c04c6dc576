use serde::{Deserialize, Serialize};

/// One currency entry as it appears in the feed, before value parsing.
///
/// Field names follow the feed's element names; unknown siblings such as
/// `Nominal`, `Name` or the `ID` attribute are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "NumCode")]
    pub numeric_code: u32,
    #[serde(rename = "CharCode")]
    pub alpha_code: String,
    /// Decimal text using a comma separator, e.g. `57,6983`.
    #[serde(rename = "Value")]
    pub raw_value: String,
}

/// A currency entry whose value has been parsed into a finite `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedRecord {
    #[serde(rename = "num_code")]
    pub numeric_code: u32,
    #[serde(rename = "char_code")]
    pub alpha_code: String,
    pub value: f64,
}
