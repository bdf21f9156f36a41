//! CSV export.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter, SortMultipleOptions};
use sanctions_model::columns::output;

use crate::error::{OutputError, Result};

/// Date format of `Date` columns in the exported file.
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Sorts ascending by `Group ID`.
pub fn sort_by_group_id(df: &DataFrame) -> Result<DataFrame> {
    df.sort([output::GROUP_ID], SortMultipleOptions::default())
        .map_err(OutputError::Sort)
}

/// Writes the table as UTF-8 CSV with a header row.
///
/// Nulls become empty cells and dates are written as `YYYY-MM-DD`. Multi-value
/// cells are written verbatim, delimiter included.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|source| OutputError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    CsvWriter::new(&mut writer)
        .include_header(true)
        .with_date_format(Some(EXPORT_DATE_FORMAT.to_string()))
        .finish(df)
        .map_err(|e| OutputError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    writer.flush().map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), rows = df.height(), "Wrote CSV");
    Ok(())
}

/// Sorts by `Group ID` and writes the result.
pub fn export_sorted(df: &DataFrame, path: &Path) -> Result<DataFrame> {
    let mut sorted = sort_by_group_id(df)?;
    write_csv(&mut sorted, path)?;
    Ok(sorted)
}
