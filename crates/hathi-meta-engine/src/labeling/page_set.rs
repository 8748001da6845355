use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("{field}: '{token}' is not a page number")]
    InvalidToken { field: String, token: String },
    #[error("{field}: expected a single page number, got list '{raw}'")]
    ListNotAllowed { field: String, raw: String },
}

/// The pages a spreadsheet cell refers to.
///
/// A cell is either empty (or `0`), one page number, or a comma separated
/// list such as `3, 7, 12`. Lists keep their order and duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSet {
    #[default]
    Absent,
    Single(u32),
    Many(Vec<u32>),
}

impl PageSet {
    /// Parses a raw cell. `field` names the column in error messages.
    pub fn parse(field: &str, raw: &str) -> Result<Self, RangeError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::Absent);
        }

        if raw.contains(',') {
            let pages = raw
                .split(',')
                .map(|token| parse_page(field, token))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Self::Many(pages));
        }

        match parse_page(field, raw)? {
            0 => Ok(Self::Absent),
            page => Ok(Self::Single(page)),
        }
    }

    /// Parses a cell that may only name one page (front and back covers).
    pub fn parse_single(field: &str, raw: &str) -> Result<Option<u32>, RangeError> {
        match Self::parse(field, raw)? {
            Self::Absent => Ok(None),
            Self::Single(page) => Ok(Some(page)),
            Self::Many(_) => Err(RangeError::ListNotAllowed {
                field: field.to_string(),
                raw: raw.trim().to_string(),
            }),
        }
    }

    pub fn contains(&self, page: u32) -> bool {
        match self {
            Self::Absent => false,
            Self::Single(value) => *value == page,
            Self::Many(values) => values.contains(&page),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn values(&self) -> &[u32] {
        match self {
            Self::Absent => &[],
            Self::Single(value) => std::slice::from_ref(value),
            Self::Many(values) => values.as_slice(),
        }
    }
}

fn parse_page(field: &str, token: &str) -> Result<u32, RangeError> {
    let token = token.trim();
    token.parse().map_err(|_| RangeError::InvalidToken {
        field: field.to_string(),
        token: token.to_string(),
    })
}
