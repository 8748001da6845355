//! Repairs scan times that lost their leading zero in a spreadsheet export.
//!
//! Spreadsheet tools often turn `08:45` into `8:45`, which the ingest
//! validator rejects. Only values that are clearly `H:MM` are touched.

use regex::Regex;
use std::sync::OnceLock;

use crate::io::{IoError, Table};

fn time_regex() -> &'static Regex {
    static TIME_REGEX: OnceLock<Regex> = OnceLock::new();
    TIME_REGEX.get_or_init(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("Invalid time regex"))
}

/// Pads a one-digit hour (`9:30` → `09:30`); anything else comes back as is.
pub fn normalize_time(value: &str) -> String {
    if let Some(caps) = time_regex().captures(value.trim())
        && caps[1].len() == 1
    {
        return format!("0{}:{}", &caps[1], &caps[2]);
    }
    value.to_string()
}

/// Normalizes every cell of the column headed `column`.
///
/// Returns how many cells changed.
pub fn normalize_time_column(table: &mut Table, column: &str) -> Result<usize, IoError> {
    let index = table
        .column_index(column)
        .ok_or_else(|| IoError::MissingTimeColumn(column.to_string()))?;

    let mut changed = 0;
    for row in &mut table.rows {
        let Some(original) = row.get(index) else {
            continue;
        };
        let fixed = normalize_time(original);
        if fixed == original {
            continue;
        }
        log::debug!("scan time '{original}' corrected to '{fixed}'");
        changed += 1;
        *row = row
            .iter()
            .enumerate()
            .map(|(i, cell)| if i == index { fixed.as_str() } else { cell })
            .collect();
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_table_from;
    use rstest::rstest;

    #[rstest]
    #[case("8:45", "08:45")]
    #[case("0:05", "00:05")]
    #[case(" 9:30 ", "09:30")]
    #[case("08:45", "08:45")]
    #[case("11:45", "11:45")]
    #[case("", "")]
    #[case("845", "845")]
    #[case("8:5", "8:5")]
    #[case("8:45:00", "8:45:00")]
    #[case("noon", "noon")]
    fn normalizes_only_short_hours(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_time(input), expected);
    }

    #[test]
    fn fixes_named_column_only() {
        let mut table = read_table_from(
            "Barcode,Scan Date,Scan Time HH:MM,Note\n\
             a,2024-01-02,8:45,7:15\n\
             b,2024-01-03,10:05,x\n\
             c,2024-01-04\n"
                .as_bytes(),
        )
        .unwrap();

        let changed = normalize_time_column(&mut table, "Scan Time HH:MM").unwrap();

        assert_eq!(changed, 1);
        assert_eq!(table.rows[0].get(2), Some("08:45"));
        assert_eq!(table.rows[0].get(3), Some("7:15"));
        assert_eq!(table.rows[1].get(2), Some("10:05"));
        assert_eq!(table.rows[2].len(), 2);
    }

    #[test]
    fn missing_column_is_an_error() {
        let mut table = read_table_from("Barcode,Scan Date\n".as_bytes()).unwrap();

        let err = normalize_time_column(&mut table, "Scan Time HH:MM").unwrap_err();

        assert!(matches!(err, IoError::MissingTimeColumn(name) if name == "Scan Time HH:MM"));
    }
}
