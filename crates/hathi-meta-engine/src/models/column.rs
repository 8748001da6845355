/// Spreadsheet columns, by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Identifier,
    ScanDate,
    ScanTime,
    DaylightSaving,
    ScannerMake,
    ScannerModel,
    BitonalResolution,
    ContoneResolution,
    ScanningOrder,
    ReadingOrder,
    FileType,
    FinalPage,
    FrontCover,
    TitleParts,
    Title,
    Copyright,
    TableOfContents,
    RomanStart,
    RomanCap,
    Preface,
    ReadingStart,
    FirstChapterStart,
    ChapterPages,
    ChapterStart,
    ReadingEnd,
    Blank,
    Unpaginated,
    ImageOnPage,
    Foldout,
    Index,
    References,
    MultiworkBoundaries,
    BackCover,
}

impl Column {
    pub const ALL: [Column; 33] = [
        Column::Identifier,
        Column::ScanDate,
        Column::ScanTime,
        Column::DaylightSaving,
        Column::ScannerMake,
        Column::ScannerModel,
        Column::BitonalResolution,
        Column::ContoneResolution,
        Column::ScanningOrder,
        Column::ReadingOrder,
        Column::FileType,
        Column::FinalPage,
        Column::FrontCover,
        Column::TitleParts,
        Column::Title,
        Column::Copyright,
        Column::TableOfContents,
        Column::RomanStart,
        Column::RomanCap,
        Column::Preface,
        Column::ReadingStart,
        Column::FirstChapterStart,
        Column::ChapterPages,
        Column::ChapterStart,
        Column::ReadingEnd,
        Column::Blank,
        Column::Unpaginated,
        Column::ImageOnPage,
        Column::Foldout,
        Column::Index,
        Column::References,
        Column::MultiworkBoundaries,
        Column::BackCover,
    ];

    /// Columns a row must have.
    pub const COUNT: usize = Column::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Column::Identifier => "identifier",
            Column::ScanDate => "scan date",
            Column::ScanTime => "scan time",
            Column::DaylightSaving => "daylight saving",
            Column::ScannerMake => "scanner make",
            Column::ScannerModel => "scanner model",
            Column::BitonalResolution => "bitonal resolution",
            Column::ContoneResolution => "contone resolution",
            Column::ScanningOrder => "scanning order",
            Column::ReadingOrder => "reading order",
            Column::FileType => "file type",
            Column::FinalPage => "final page",
            Column::FrontCover => "front cover",
            Column::TitleParts => "half title",
            Column::Title => "title",
            Column::Copyright => "copyright",
            Column::TableOfContents => "table of contents",
            Column::RomanStart => "roman start",
            Column::RomanCap => "roman cap",
            Column::Preface => "preface",
            Column::ReadingStart => "reading start",
            Column::FirstChapterStart => "first chapter start",
            Column::ChapterPages => "chapter pages",
            Column::ChapterStart => "chapter start",
            Column::ReadingEnd => "reading end",
            Column::Blank => "blank",
            Column::Unpaginated => "unpaginated",
            Column::ImageOnPage => "image on page",
            Column::Foldout => "foldout",
            Column::Index => "index",
            Column::References => "references",
            Column::MultiworkBoundaries => "multiwork boundaries",
            Column::BackCover => "back cover",
        }
    }
}
