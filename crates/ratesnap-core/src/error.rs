use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::Stage;

/// Failures while reading a feed and mapping it into raw records.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("cannot read feed '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot release handle of feed '{path}': {source}")]
    Release {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed XML declaration: {0}")]
    Declaration(String),
    #[error("unknown charset label '{label}' in XML declaration")]
    UnknownCharset { label: String },
    #[error("feed bytes are not valid {charset}")]
    Charset { charset: &'static str },

    #[error("feed has no root element")]
    MissingRoot,
    #[error("expected root element '{expected}', found '{found}'")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },
    #[error("entry #{index} has an empty '{field}' element")]
    EmptyField { index: usize, field: &'static str },

    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),
    #[error("XML structure error: {0}")]
    Structure(#[from] quick_xml::DeError),
}

/// A currency value that is not a finite number after comma normalization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("value of {alpha_code} is not a number: '{raw_value}'")]
pub struct ValueFormatError {
    pub alpha_code: String,
    pub raw_value: String,
}

/// Serialization of the ranked records failed.
#[derive(Debug, Error)]
#[error("snapshot serialization failed: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

/// The snapshot could not be placed at its destination.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write snapshot '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Top-level error for one conversion run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("normalization failed: {0}")]
    ValueFormat(#[from] ValueFormatError),

    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("write failed: {0}")]
    Write(#[from] WriteError),
}

impl PipelineError {
    /// Stage the run was in when it failed.
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Decode(_) => Stage::Decoding,
            Self::ValueFormat(_) => Stage::Normalizing,
            Self::Encode(_) | Self::Write(_) => Stage::Encoding,
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Decode(_) => "decode",
            Self::ValueFormat(_) => "value_format",
            Self::Encode(_) => "encode",
            Self::Write(_) => "write",
        }
    }
}
