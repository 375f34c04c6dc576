//! Snapshot encoding and writing.

use std::fs::DirBuilder;
use std::io::Write;
use std::path::Path;

use crate::{EncodeError, ValidatedRecord, WriteError};

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// Serializes ranked records as a two-space indented JSON array.
///
/// The output ends with a single newline and is byte-identical for
/// identical input.
pub fn encode(records: &[ValidatedRecord]) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = serde_json::to_vec_pretty(records)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Creates any missing directories above `path`.
pub fn ensure_parent_dir(path: &Path) -> Result<(), WriteError> {
    let Some(dir) = parent_dir(path) else {
        return Ok(());
    };

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder
        .create(dir)
        .map_err(|source| WriteError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })
}

/// Writes `bytes` to `path` with owner-only permissions.
///
/// The content is staged in a temporary file next to the destination and
/// renamed into place once synced, so a failed write leaves any existing
/// artifact as it was.
pub fn write_snapshot(path: &Path, bytes: &[u8]) -> Result<(), WriteError> {
    ensure_parent_dir(path)?;

    let write_error = |source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".ratesnap-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(Permissions::from_mode(FILE_MODE));
    }

    let staging_dir = parent_dir(path).unwrap_or_else(|| Path::new("."));
    let mut staged = builder.tempfile_in(staging_dir).map_err(write_error)?;
    staged.write_all(bytes).map_err(write_error)?;
    staged.as_file().sync_all().map_err(write_error)?;
    staged
        .persist(path)
        .map_err(|error| write_error(error.error))?;

    Ok(())
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|dir| !dir.as_os_str().is_empty())
}
