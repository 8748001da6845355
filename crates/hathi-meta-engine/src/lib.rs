pub mod batch;
pub mod document;
pub mod io;
pub mod labeling;
pub mod models;
pub mod scan_time;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use batch::{BatchOptions, BatchReport, DocumentError, RowFailure, convert_file, convert_table};
pub use document::{document_file_name, render_document};
pub use io::{IoError, Table};
pub use labeling::*;
pub use models::*;
pub use scan_time::{normalize_time, normalize_time_column};
