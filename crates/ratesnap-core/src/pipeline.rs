use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{decode_file, encode, normalize, rank, write_snapshot, PipelineError};

/// Sequential stages of one conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Decoding,
    Normalizing,
    Ranking,
    Encoding,
    Done,
}

impl Stage {
    pub const ALL: [Self; 5] = [
        Self::Decoding,
        Self::Normalizing,
        Self::Ranking,
        Self::Encoding,
        Self::Done,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decoding => "decoding",
            Self::Normalizing => "normalizing",
            Self::Ranking => "ranking",
            Self::Encoding => "encoding",
            Self::Done => "done",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub records: usize,
    pub target: PathBuf,
}

/// Converts the feed at `source` into a ranked snapshot at `target`.
pub fn convert(
    source: impl AsRef<Path>,
    target: impl AsRef<Path>,
) -> Result<ConversionReport, PipelineError> {
    convert_with_progress(source, target, |_| {})
}

/// Same as [`convert`], calling `on_stage` as each stage is entered.
///
/// No stage is retried; the first failure ends the run and nothing is
/// written unless decoding and normalization both succeeded.
pub fn convert_with_progress<F>(
    source: impl AsRef<Path>,
    target: impl AsRef<Path>,
    mut on_stage: F,
) -> Result<ConversionReport, PipelineError>
where
    F: FnMut(Stage),
{
    let target = target.as_ref();

    on_stage(Stage::Decoding);
    let raw = decode_file(source)?;

    on_stage(Stage::Normalizing);
    let validated = normalize(&raw)?;

    on_stage(Stage::Ranking);
    let ranked = rank(&validated);

    on_stage(Stage::Encoding);
    let bytes = encode(&ranked)?;
    write_snapshot(target, &bytes)?;

    on_stage(Stage::Done);
    Ok(ConversionReport {
        records: ranked.len(),
        target: target.to_path_buf(),
    })
}
