use super::page_set::PageSet;

/// Structural role of a page, in the order roles are listed on a page line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageRole {
    FrontCover,
    BackCover,
    Blank,
    ChapterPage,
    ChapterStart,
    Copyright,
    FirstChapterStart,
    Foldout,
    ImageOnPage,
    Index,
    MultiworkBoundary,
    Preface,
    References,
    TableOfContents,
    Title,
    TitleParts,
}

impl PageRole {
    pub const ALL: [PageRole; 16] = [
        PageRole::FrontCover,
        PageRole::BackCover,
        PageRole::Blank,
        PageRole::ChapterPage,
        PageRole::ChapterStart,
        PageRole::Copyright,
        PageRole::FirstChapterStart,
        PageRole::Foldout,
        PageRole::ImageOnPage,
        PageRole::Index,
        PageRole::MultiworkBoundary,
        PageRole::Preface,
        PageRole::References,
        PageRole::TableOfContents,
        PageRole::Title,
        PageRole::TitleParts,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            PageRole::FrontCover => "FRONT_COVER",
            PageRole::BackCover => "BACK_COVER",
            PageRole::Blank => "BLANK",
            PageRole::ChapterPage => "CHAPTER_PAGE",
            PageRole::ChapterStart => "CHAPTER_START",
            PageRole::Copyright => "COPYRIGHT",
            PageRole::FirstChapterStart => "FIRST_CONTENT_CHAPTER_START",
            PageRole::Foldout => "FOLDOUT",
            PageRole::ImageOnPage => "IMAGE_ON_PAGE",
            PageRole::Index => "INDEX",
            PageRole::MultiworkBoundary => "MULTIWORK_BOUNDARY",
            PageRole::Preface => "PREFACE",
            PageRole::References => "REFERENCES",
            PageRole::TableOfContents => "TABLE_OF_CONTENTS",
            PageRole::Title => "TITLE",
            PageRole::TitleParts => "TITLE_PARTS",
        }
    }
}

/// Pages carrying each structural role for one item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSets {
    pub front_cover: Option<u32>,
    pub back_cover: Option<u32>,
    pub blank: PageSet,
    pub chapter_pages: PageSet,
    pub chapter_start: PageSet,
    pub copyright: PageSet,
    pub first_chapter_start: PageSet,
    pub foldout: PageSet,
    pub image_on_page: PageSet,
    pub index_start: PageSet,
    pub multiwork_boundaries: PageSet,
    pub preface: PageSet,
    pub references: PageSet,
    pub table_of_contents: PageSet,
    pub title: PageSet,
    pub title_parts: PageSet,
}

impl RoleSets {
    pub fn has_role(&self, page: u32, role: PageRole) -> bool {
        let set = match role {
            PageRole::FrontCover => return self.front_cover == Some(page),
            PageRole::BackCover => return self.back_cover == Some(page),
            PageRole::Blank => &self.blank,
            PageRole::ChapterPage => &self.chapter_pages,
            PageRole::ChapterStart => &self.chapter_start,
            PageRole::Copyright => &self.copyright,
            PageRole::FirstChapterStart => &self.first_chapter_start,
            PageRole::Foldout => &self.foldout,
            PageRole::ImageOnPage => &self.image_on_page,
            PageRole::Index => &self.index_start,
            PageRole::MultiworkBoundary => &self.multiwork_boundaries,
            PageRole::Preface => &self.preface,
            PageRole::References => &self.references,
            PageRole::TableOfContents => &self.table_of_contents,
            PageRole::Title => &self.title,
            PageRole::TitleParts => &self.title_parts,
        };
        set.contains(page)
    }

    /// Every role `page` carries, in line order.
    pub fn roles_for(&self, page: u32) -> Vec<PageRole> {
        PageRole::ALL
            .into_iter()
            .filter(|&role| self.has_role(page, role))
            .collect()
    }
}
