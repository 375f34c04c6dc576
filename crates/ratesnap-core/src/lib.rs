//! Core conversion pipeline for ratesnap.
//!
//! This crate contains:
//! - Raw and validated currency record models
//! - Feed decoding with declared-charset resolution
//! - Locale-aware value normalization
//! - Stable descending ranking
//! - Deterministic JSON snapshot encoding and atomic writes
//! - The pipeline driver and its typed errors
//!
//! Nothing in this crate logs, prints or exits the process. Callers receive
//! a [`PipelineError`] and decide how to report it.

pub mod decode;
pub mod encode;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod rank;
pub mod record;

pub use decode::{decode_bytes, decode_file, declared_encoding};
pub use encode::{encode, ensure_parent_dir, write_snapshot};
pub use error::{DecodeError, EncodeError, PipelineError, ValueFormatError, WriteError};
pub use normalize::{normalize, normalize_record, parse_value};
pub use pipeline::{convert, convert_with_progress, ConversionReport, Stage};
pub use rank::rank;
pub use record::{RawRecord, ValidatedRecord};
