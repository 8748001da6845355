use std::fmt;

use thiserror::Error;

use super::cursor::{OrderLabel, SegmentCursor, WindowQueue};
use super::page_set::PageSet;
use super::roles::{PageRole, RoleSets};

/// Highest page index that fits the eight character file name.
pub const MAX_PAGE_INDEX: u32 = 9999;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("page {page} exceeds the file name prefix length (max 9999 pages)")]
    PrefixLengthExceeded { page: u32 },
}

/// Everything needed to label the pages of one item.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub final_page: u32,
    pub file_type: String,
    pub roles: RoleSets,
    pub ordering: WindowQueue,
    pub roman: Option<WindowQueue>,
    pub unpaginated: PageSet,
}

/// One `pagedata` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLine {
    pub file_name: String,
    pub order_label: Option<OrderLabel>,
    pub roles: Vec<PageRole>,
}

impl fmt::Display for PageLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {{ ", self.file_name)?;
        if let Some(order) = &self.order_label {
            write!(f, "orderlabel: \"{order}\"")?;
            if !self.roles.is_empty() {
                f.write_str(", ")?;
            }
        }
        if !self.roles.is_empty() {
            f.write_str("label: ")?;
            for (i, role) in self.roles.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "\"{}\"", role.tag())?;
            }
        }
        f.write_str(" }")
    }
}

/// Zero-padded image file name, e.g. `00000007.tif`.
pub fn page_file_name(page: u32, file_type: &str) -> Result<String, SequenceError> {
    if page > MAX_PAGE_INDEX {
        return Err(SequenceError::PrefixLengthExceeded { page });
    }
    Ok(format!("{page:08}.{}", file_type.to_lowercase()))
}

/// Labels pages `1..=final_page` in order.
///
/// Fails before labelling anything when the page count cannot be named.
pub fn sequence_pages(layout: &PageLayout) -> Result<Vec<PageLine>, SequenceError> {
    if layout.final_page > MAX_PAGE_INDEX {
        return Err(SequenceError::PrefixLengthExceeded {
            page: MAX_PAGE_INDEX + 1,
        });
    }

    let mut cursor = SegmentCursor::new(
        layout.ordering.clone(),
        layout.roman.clone(),
        layout.unpaginated.clone(),
    );

    (1..=layout.final_page)
        .map(|page| -> Result<PageLine, SequenceError> {
            Ok(PageLine {
                file_name: page_file_name(page, &layout.file_type)?,
                order_label: cursor.label(page),
                roles: layout.roles.roles_for(page),
            })
        })
        .collect()
}
