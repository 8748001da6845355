//! Page labelling: file names, reading order and structural roles.

pub mod cursor;
pub mod page_set;
pub mod roles;
pub mod roman;
pub mod sequencer;

pub use cursor::{OrderLabel, SegmentCursor, Window, WindowError, WindowQueue};
pub use page_set::{PageSet, RangeError};
pub use roles::{PageRole, RoleSets};
pub use roman::{from_roman, to_roman};
pub use sequencer::{
    MAX_PAGE_INDEX, PageLayout, PageLine, SequenceError, page_file_name, sequence_pages,
};
