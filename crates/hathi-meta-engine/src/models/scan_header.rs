use std::fmt;

/// Page direction written as `scanning_order` / `reading_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// `n`/`no` means right-to-left; anything else, including an empty
    /// cell, is left-to-right.
    pub fn from_flag(flag: &str) -> Self {
        let flag = flag.trim();
        if flag.eq_ignore_ascii_case("n") || flag.eq_ignore_ascii_case("no") {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::LeftToRight => "left-to-right",
            Direction::RightToLeft => "right-to-left",
        }
    }
}

/// True for the spreadsheet's `y`/`yes` answers.
pub fn is_yes(flag: &str) -> bool {
    let flag = flag.trim();
    flag.eq_ignore_ascii_case("y") || flag.eq_ignore_ascii_case("yes")
}

/// Capture and scanner block that opens every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanHeader {
    pub scan_date: String,
    pub scan_time: String,
    /// Hours behind UTC at capture time.
    pub utc_offset_hours: u8,
    pub scanner_make: String,
    pub scanner_model: String,
    pub scanner_user: String,
    pub bitonal_resolution_dpi: Option<String>,
    pub contone_resolution_dpi: Option<String>,
    pub scanning_order: Direction,
    pub reading_order: Direction,
}

impl fmt::Display for ScanHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "capture_date: {}T{}:00-{:02}:00",
            self.scan_date, self.scan_time, self.utc_offset_hours
        )?;
        writeln!(f, "scanner_make: {}", self.scanner_make)?;
        writeln!(f, "scanner_model: {}", self.scanner_model)?;
        writeln!(f, "scanner_user: {}", self.scanner_user)?;
        if let Some(dpi) = &self.bitonal_resolution_dpi {
            writeln!(f, "bitonal_resolution_dpi: {dpi}")?;
        }
        if let Some(dpi) = &self.contone_resolution_dpi {
            writeln!(f, "contone_resolution_dpi: {dpi}")?;
        }
        writeln!(f, "scanning_order: {}", self.scanning_order.as_str())?;
        writeln!(f, "reading_order: {}", self.reading_order.as_str())
    }
}
