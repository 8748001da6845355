pub mod column;
pub mod item_record;
pub mod scan_header;

pub use column::Column;
pub use item_record::{ItemRecord, RowError};
pub use scan_header::{Direction, ScanHeader, is_yes};
