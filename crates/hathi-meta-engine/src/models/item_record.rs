use csv::StringRecord;
use hathi_meta_config::Config;
use thiserror::Error;

use super::column::Column;
use super::scan_header::{Direction, ScanHeader, is_yes};
use crate::labeling::{PageLayout, PageSet, RangeError, RoleSets, WindowError, WindowQueue};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("missing column {index} ({name}): row has only {found} columns")]
    MissingColumn {
        index: usize,
        name: &'static str,
        found: usize,
    },
    #[error("{column}: '{value}' is not a whole number")]
    InvalidNumber { column: &'static str, value: String },
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error(transparent)]
    Window(#[from] WindowError),
}

/// One spreadsheet row, interpreted.
#[derive(Debug, Clone)]
pub struct ItemRecord {
    /// Base name of the generated document.
    pub identifier: String,
    pub header: ScanHeader,
    pub layout: PageLayout,
}

impl ItemRecord {
    pub fn from_record(record: &StringRecord, config: &Config) -> Result<Self, RowError> {
        let cells = Cells(record);
        cells.require_all()?;

        let identifier = non_empty(cells.get(Column::Identifier))
            .unwrap_or(config.missing_identifier.as_str())
            .to_string();

        Ok(Self {
            identifier,
            header: cells.header(config),
            layout: cells.layout(config)?,
        })
    }
}

struct Cells<'a>(&'a StringRecord);

impl Cells<'_> {
    fn require_all(&self) -> Result<(), RowError> {
        let found = self.0.len();
        if found < Column::COUNT {
            let index = found;
            return Err(RowError::MissingColumn {
                index,
                name: Column::ALL.get(index).map_or("", |column| column.name()),
                found,
            });
        }
        Ok(())
    }

    fn get(&self, column: Column) -> &str {
        self.0.get(column.index()).map(str::trim).unwrap_or_default()
    }

    fn pages(&self, column: Column) -> Result<PageSet, RangeError> {
        PageSet::parse(column.name(), self.get(column))
    }

    fn page(&self, column: Column) -> Result<Option<u32>, RangeError> {
        PageSet::parse_single(column.name(), self.get(column))
    }

    fn header(&self, config: &Config) -> ScanHeader {
        let utc_offset_hours = if is_yes(self.get(Column::DaylightSaving)) {
            config.dst_offset_hours
        } else {
            config.standard_offset_hours
        };

        ScanHeader {
            scan_date: non_empty(self.get(Column::ScanDate)).unwrap_or("0").to_string(),
            scan_time: non_empty(self.get(Column::ScanTime)).unwrap_or("0").to_string(),
            utc_offset_hours,
            scanner_make: or_default(self.get(Column::ScannerMake), &config.default_scanner_make),
            scanner_model: or_default(
                self.get(Column::ScannerModel),
                &config.default_scanner_model,
            ),
            scanner_user: config.scanner_user.clone(),
            bitonal_resolution_dpi: resolution(self.get(Column::BitonalResolution)),
            contone_resolution_dpi: resolution(self.get(Column::ContoneResolution)),
            scanning_order: Direction::from_flag(self.get(Column::ScanningOrder)),
            reading_order: Direction::from_flag(self.get(Column::ReadingOrder)),
        }
    }

    fn layout(&self, config: &Config) -> Result<PageLayout, RowError> {
        let final_page = match non_empty(self.get(Column::FinalPage)) {
            None => 0,
            Some(value) => value.parse().map_err(|_| RowError::InvalidNumber {
                column: Column::FinalPage.name(),
                value: value.to_string(),
            })?,
        };

        let file_type = non_empty(self.get(Column::FileType))
            .unwrap_or(config.default_file_type.as_str())
            .to_string();

        let roles = RoleSets {
            front_cover: self.page(Column::FrontCover)?,
            back_cover: self.page(Column::BackCover)?,
            blank: self.pages(Column::Blank)?,
            chapter_pages: self.pages(Column::ChapterPages)?,
            chapter_start: self.pages(Column::ChapterStart)?,
            copyright: self.pages(Column::Copyright)?,
            first_chapter_start: self.pages(Column::FirstChapterStart)?,
            foldout: self.pages(Column::Foldout)?,
            image_on_page: self.pages(Column::ImageOnPage)?,
            index_start: self.pages(Column::Index)?,
            multiwork_boundaries: self.pages(Column::MultiworkBoundaries)?,
            preface: self.pages(Column::Preface)?,
            references: self.pages(Column::References)?,
            table_of_contents: self.pages(Column::TableOfContents)?,
            title: self.pages(Column::Title)?,
            title_parts: self.pages(Column::TitleParts)?,
        };

        let ordering = WindowQueue::from_bounds(
            Column::ReadingStart.name(),
            &self.pages(Column::ReadingStart)?,
            Column::ReadingEnd.name(),
            &self.pages(Column::ReadingEnd)?,
        )?;

        let roman_start = self.pages(Column::RomanStart)?;
        let roman_cap = self.pages(Column::RomanCap)?;
        let roman = if roman_cap.is_absent() {
            if !roman_start.is_absent() {
                log::warn!("roman start given without a roman cap; no roman labels");
            }
            None
        } else {
            Some(WindowQueue::from_bounds(
                Column::RomanStart.name(),
                &roman_start,
                Column::RomanCap.name(),
                &roman_cap,
            )?)
        };

        Ok(PageLayout {
            final_page,
            file_type,
            roles,
            ordering,
            roman,
            unpaginated: self.pages(Column::Unpaginated)?,
        })
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// Empty or a yes answer selects the configured default.
fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() || is_yes(value) {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn resolution(value: &str) -> Option<String> {
    match value {
        "" | "0" => None,
        dpi => Some(dpi.to_string()),
    }
}
