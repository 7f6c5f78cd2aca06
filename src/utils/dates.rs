use crate::utils::error::{FeesError, Result};
use chrono::{Days, NaiveDate};

/// Input format for the date helpers, e.g. `2001-01-01`.
pub const ISO_DATE: &str = "%Y-%m-%d";
/// Display format, e.g. `01 Jan 2001`.
pub const DISPLAY_DATE: &str = "%d %b %Y";
/// Format used by the book-returns log, e.g. `01/31/2024`.
pub const US_DATE: &str = "%m/%d/%Y";

pub fn parse_date(value: &str, pattern: &'static str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, pattern).map_err(|_| FeesError::FormatError {
        value: value.to_string(),
        pattern,
    })
}

/// Re-formats a list of `yyyy-mm-dd` date strings to `dd mmm yyyy`.
pub fn reformat_dates(old_dates: &[String]) -> Result<Vec<String>> {
    // 逐一解析，任何一筆失敗就整批失敗
    old_dates
        .iter()
        .map(|date_str| {
            let date = parse_date(date_str, ISO_DATE)?;
            Ok(date.format(DISPLAY_DATE).to_string())
        })
        .collect()
}

/// Returns `n` consecutive calendar dates starting at `start` (`yyyy-mm-dd`).
pub fn date_range(start: &str, n: usize) -> Result<Vec<NaiveDate>> {
    let start_date = parse_date(start, ISO_DATE)?;

    (0..n)
        .map(|i| {
            start_date
                .checked_add_days(Days::new(i as u64))
                .ok_or_else(|| FeesError::ProcessingError {
                    message: format!("date out of range: {} + {} days", start, i),
                })
        })
        .collect()
}

/// Pairs each value with a daily date beginning at `start_date`, positionally.
pub fn add_date_range<T>(values: Vec<T>, start_date: &str) -> Result<Vec<(NaiveDate, T)>> {
    let date_seq = date_range(start_date, values.len())?;
    Ok(date_seq.into_iter().zip(values).collect())
}
