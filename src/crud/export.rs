//! CSV export of grid rows.

use crate::crud::formatting::to_fields;
use crate::crud::grid::Column;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

/// Writes a header line and one record per row for the given columns.
///
/// Cells use the same text as the grid, so column formatters apply.
pub fn write_csv<W, T>(writer: W, columns: &[&Column<T>], rows: &[T]) -> Result<()>
where
    W: io::Write,
    T: Serialize,
{
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(columns.iter().map(|c| c.header))
        .context("failed to write CSV header")?;

    for row in rows {
        let fields = to_fields(row);
        csv.write_record(columns.iter().map(|c| c.cell_text(&fields)))
            .context("failed to write CSV row")?;
    }

    csv.flush().context("failed to flush CSV output")?;
    Ok(())
}

/// Writes the export to `path`.
pub fn export_to_path<T: Serialize>(path: &Path, columns: &[&Column<T>], rows: &[T]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(io::BufWriter::new(file), columns, rows)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "exported CSV");
    Ok(())
}

/// Asks for a destination with a native save dialog and exports there.
///
/// Returns `Ok(None)` when the dialog is cancelled.
pub fn export_with_dialog<T: Serialize>(
    title: &str,
    columns: &[&Column<T>],
    rows: &[T],
) -> Result<Option<PathBuf>> {
    let mut dialog = rfd::FileDialog::new()
        .add_filter("CSV Files", &["csv"])
        .set_file_name(format!("{}.csv", file_stem(title)));

    if let Some(dir) = dirs::download_dir().or_else(dirs::home_dir) {
        dialog = dialog.set_directory(dir);
    }

    let Some(path) = dialog.save_file() else {
        return Ok(None);
    };

    export_to_path(&path, columns, rows)?;
    Ok(Some(path))
}

/// Lowercase file stem with spaces replaced by dashes.
fn file_stem(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    if stem.is_empty() {
        "export".to_string()
    } else {
        stem
    }
}
