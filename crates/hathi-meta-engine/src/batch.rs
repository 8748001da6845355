use csv::StringRecord;
use hathi_meta_config::Config;
use std::path::{Path, PathBuf};

use crate::document::{document_file_name, render_document};
use crate::io::{self, IoError, Table};
use crate::labeling::SequenceError;
use crate::models::{Column, ItemRecord, RowError};
use crate::scan_time::normalize_time_column;

/// Why one row produced no document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error(transparent)]
    Row(#[from] RowError),
    #[error(transparent)]
    Sequence(#[from] SequenceError),
    #[error(transparent)]
    Io(#[from] IoError),
}

#[derive(Debug)]
pub struct RowFailure {
    /// 1-based data row, not counting the header.
    pub row: usize,
    pub identifier: String,
    pub error: DocumentError,
}

/// Outcome of converting one spreadsheet.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<RowFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Overrides both the configured folder and the spreadsheet's folder.
    pub output_dir: Option<PathBuf>,
    /// Also save the time-corrected spreadsheet as `<stem>_fixed.<ext>`.
    pub write_fixed: bool,
}

/// Converts every row of the spreadsheet at `csv_path`.
///
/// Errors here stop the whole batch (unreadable file, no time column).
/// Problems with individual rows are collected in the report instead.
pub fn convert_file(
    csv_path: &Path,
    config: &Config,
    options: &BatchOptions,
) -> Result<BatchReport, IoError> {
    let mut table = io::read_table(csv_path)?;
    let fixed = normalize_time_column(&mut table, &config.time_column)?;
    log::info!(
        "Read {} rows from {} ({fixed} scan times corrected)",
        table.rows.len(),
        csv_path.display()
    );

    if options.write_fixed {
        let fixed_path = io::fixed_table_path(csv_path);
        io::write_table(&fixed_path, &table)?;
        log::info!("Corrected spreadsheet saved as {}", fixed_path.display());
    }

    let output_dir = options
        .output_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| io::table_dir(csv_path));

    Ok(convert_table(&table, config, &output_dir))
}

/// Converts each data row independently; a failing row never stops the rest.
pub fn convert_table(table: &Table, config: &Config, output_dir: &Path) -> BatchReport {
    let mut report = BatchReport::default();

    for (i, record) in table.rows.iter().enumerate() {
        let row = i + 1;
        match convert_row(record, config, output_dir) {
            Ok(path) => {
                log::info!("File {} created in {}", path.display(), output_dir.display());
                report.written.push(path);
            }
            Err(error) => {
                let identifier = row_identifier(record, config);
                log::error!("Row {row} ({identifier}) skipped: {error}");
                report.failures.push(RowFailure {
                    row,
                    identifier,
                    error,
                });
            }
        }
    }

    report
}

/// Parses, renders and writes one row.
pub fn convert_row(
    record: &StringRecord,
    config: &Config,
    output_dir: &Path,
) -> Result<PathBuf, DocumentError> {
    let item = ItemRecord::from_record(record, config)?;
    log::debug!(
        "Row {} parsed: {} pages",
        item.identifier,
        item.layout.final_page
    );
    let content = render_document(&item)?;
    let file_name = document_file_name(&item.identifier, &config.output_extension);
    Ok(io::write_document(output_dir, &file_name, &content)?)
}

fn row_identifier(record: &StringRecord, config: &Config) -> String {
    record
        .get(Column::Identifier.index())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .unwrap_or(config.missing_identifier.as_str())
        .to_string()
}
