use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Column '{0}' not found in the spreadsheet header")]
    MissingTimeColumn(String),
}

/// A spreadsheet held in memory: header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
}

impl Table {
    /// Position of the header cell equal to `name`, ignoring surrounding
    /// whitespace.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header.trim() == name)
    }
}

/// Read a spreadsheet exported as CSV
pub fn read_table(path: &Path) -> Result<Table, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let file = fs::File::open(path)?;
    read_table_from(file)
}

/// Read CSV from any reader. Rows may have differing lengths.
pub fn read_table_from<R: Read>(reader: R) -> Result<Table, IoError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers()?.clone();
    let rows = reader.records().collect::<Result<Vec<_>, _>>()?;
    Ok(Table { headers, rows })
}

/// Write a table back out as CSV
pub fn write_table(path: &Path, table: &Table) -> Result<(), IoError> {
    let mut writer = WriterBuilder::new().flexible(true).from_path(path)?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// `batch.csv` becomes `batch_fixed.csv` in the same folder
pub fn fixed_table_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{stem}_fixed.{}", ext.to_string_lossy()),
        None => format!("{stem}_fixed"),
    };
    path.with_file_name(file_name)
}

/// Folder the spreadsheet lives in; documents go there unless told otherwise.
pub fn table_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Write one generated document, creating the output folder if needed
pub fn write_document(output_dir: &Path, file_name: &str, content: &str) -> Result<PathBuf, IoError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);
    fs::write(&path, content)?;
    Ok(path)
}
