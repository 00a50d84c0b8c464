//! JSON feed export
//!
//! The consolidated schedule is one pretty-printed JSON array, UTF-8,
//! 2-space indent. The file is written to a temp file in the destination
//! directory and renamed over the target, so a crash mid-write never
//! leaves a truncated feed behind.

use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::ExportError;

pub(crate) fn export<T: Serialize>(records: &[T], path: &Path) -> Result<(), ExportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;
    let mut writer = BufWriter::new(tmp);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    let tmp = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    tmp.persist(path).map_err(|e| ExportError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
