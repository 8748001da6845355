use crate::labeling::{SequenceError, sequence_pages};
use crate::models::ItemRecord;

const PAGEDATA_INDENT: &str = "    ";

/// Name of the document generated for `identifier`.
pub fn document_file_name(identifier: &str, extension: &str) -> String {
    format!("{identifier}.{extension}")
}

/// Renders the complete meta.yml text for one item.
///
/// Nothing is produced if any page cannot be named, so a failing item never
/// leaves a truncated document behind.
pub fn render_document(item: &ItemRecord) -> Result<String, SequenceError> {
    let lines = sequence_pages(&item.layout)?;

    let mut out = item.header.to_string();
    out.push_str("pagedata:\n");
    for line in &lines {
        out.push_str(PAGEDATA_INDENT);
        out.push_str(&line.to_string());
        out.push('\n');
    }
    Ok(out)
}
