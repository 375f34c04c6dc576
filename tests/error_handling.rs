//! Behavior-driven tests for conversion failures
//!
//! These tests verify that every failure is reported with its class and
//! context, and that no snapshot is written or altered by a failed run.

use std::fs;

use ratesnap_core::{convert, normalize, DecodeError, PipelineError, RawRecord, Stage, WriteError};
use tempfile::tempdir;

const GOOD_FEED: &str = "<ValCurs>\
    <Valute><NumCode>36</NumCode><CharCode>AUD</CharCode><Value>57,6983</Value></Valute>\
    </ValCurs>";

// =============================================================================
// Error Handling: Decode Failures
// =============================================================================

#[test]
fn missing_feed_reports_decode_error_and_writes_nothing() {
    // Given: A source path that does not exist
    let temp = tempdir().expect("tempdir");
    let source = temp.path().join("absent.xml");
    let target = temp.path().join("out").join("rates.json");

    // When: A conversion is attempted
    let err = convert(&source, &target).expect_err("should fail");

    // Then: The failure is a decode error naming the path
    assert!(matches!(
        err,
        PipelineError::Decode(DecodeError::Read { ref path, .. }) if path == &source
    ));
    assert_eq!(err.stage(), Stage::Decoding);

    // And: No artifact or directory was created
    assert!(!target.exists(), "no snapshot should be written");
    assert!(!temp.path().join("out").exists(), "no directory should be prepared");
}

#[test]
fn missing_feed_leaves_existing_snapshot_untouched() {
    // Given: A snapshot from a previous run
    let temp = tempdir().expect("tempdir");
    let target = temp.path().join("rates.json");
    fs::write(&target, "previous").expect("seed snapshot");

    // When: A conversion from a missing feed fails
    convert(temp.path().join("absent.xml"), &target).expect_err("should fail");

    // Then: The previous snapshot is unchanged
    assert_eq!(fs::read_to_string(&target).expect("read"), "previous");
}

#[test]
fn structurally_malformed_feed_reports_decode_error() {
    // Given: A feed whose entry lacks its value element
    let temp = tempdir().expect("tempdir");
    let source = temp.path().join("daily.xml");
    fs::write(
        &source,
        "<ValCurs><Valute><NumCode>36</NumCode><CharCode>AUD</CharCode></Valute></ValCurs>",
    )
    .expect("seed feed");

    // When: A conversion is attempted
    let err = convert(&source, temp.path().join("rates.json")).expect_err("should fail");

    // Then: The failure is classified as a decode error
    assert_eq!(err.kind(), "decode");
    assert!(!temp.path().join("rates.json").exists());
}

// =============================================================================
// Error Handling: Value Format Failures
// =============================================================================

#[test]
fn malformed_value_names_currency_and_writes_nothing() {
    // Given: A feed where one currency's value is not a number
    let temp = tempdir().expect("tempdir");
    let source = temp.path().join("daily.xml");
    let target = temp.path().join("rates.json");
    fs::write(
        &source,
        "<ValCurs>\
            <Valute><NumCode>36</NumCode><CharCode>AUD</CharCode><Value>57,6983</Value></Valute>\
            <Valute><NumCode>840</NumCode><CharCode>USD</CharCode><Value>abc</Value></Valute>\
        </ValCurs>",
    )
    .expect("seed feed");

    // When: A conversion is attempted
    let err = convert(&source, &target).expect_err("should fail");

    // Then: The error identifies the currency and its text
    match &err {
        PipelineError::ValueFormat(inner) => {
            assert_eq!(inner.alpha_code, "USD");
            assert_eq!(inner.raw_value, "abc");
        }
        other => panic!("expected value format error, got {other}"),
    }
    assert_eq!(err.stage(), Stage::Normalizing);

    // And: No snapshot exists
    assert!(!target.exists(), "no snapshot should be written");
}

#[test]
fn one_bad_value_among_many_rejects_the_batch() {
    // Given: 99 well-formed records and one malformed record
    let mut records = (0..99)
        .map(|index| RawRecord {
            numeric_code: index,
            alpha_code: format!("C{index:02}"),
            raw_value: format!("{index},5"),
        })
        .collect::<Vec<_>>();
    records.insert(
        50,
        RawRecord {
            numeric_code: 999,
            alpha_code: String::from("BAD"),
            raw_value: String::from("12a,4"),
        },
    );

    // When: The batch is normalized
    let result = normalize(&records);

    // Then: No records are produced and the culprit is named
    let err = result.expect_err("batch should be rejected");
    assert_eq!(err.alpha_code, "BAD");
}

// =============================================================================
// Error Handling: Write Failures
// =============================================================================

#[test]
fn unwritable_destination_reports_write_error() {
    // Given: A destination whose parent is a regular file
    let temp = tempdir().expect("tempdir");
    let source = temp.path().join("daily.xml");
    fs::write(&source, GOOD_FEED).expect("seed feed");
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "").expect("seed blocker");

    // When: A conversion is attempted
    let err = convert(&source, blocker.join("rates.json")).expect_err("should fail");

    // Then: The failure is a write error at the encoding stage
    assert!(matches!(
        err,
        PipelineError::Write(WriteError::CreateDir { .. })
    ));
    assert_eq!(err.stage(), Stage::Encoding);
    assert_eq!(err.kind(), "write");
}
