//! Date-range expressions for filtering listings and exports.
//!
//! Accepted forms: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, and colon-separated
//! ranges of the same granularity (`YYYY:YYYY`, `YYYY-MM:YYYY-MM`,
//! `YYYY-MM-DD:YYYY-MM-DD`).

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start, end)) = r.split_once(':') {
        let (s, _) = parse_bound(start)?;
        let (_, e) = parse_bound(end)?;
        if e < s {
            return Err(AppError::InvalidDate(format!(
                "range end before start: {r}"
            )));
        }
        Ok((s, e))
    } else {
        parse_bound(r)
    }
}

/// Expand one bound expression into its first and last covered day.
fn parse_bound(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            let next_month = if first.month() == 12 {
                NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
            }
            .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((first, next_month.pred_opt().unwrap_or(first)))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidDate(p.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn single_year_month_day() {
        assert_eq!(parse_range("2024").unwrap(), (d("2024-01-01"), d("2024-12-31")));
        assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
        assert_eq!(parse_range("2024-02-15").unwrap(), (d("2024-02-15"), d("2024-02-15")));
    }

    #[test]
    fn colon_ranges() {
        assert_eq!(parse_range("2023:2024").unwrap(), (d("2023-01-01"), d("2024-12-31")));
        assert_eq!(
            parse_range("2024-01:2024-03").unwrap(),
            (d("2024-01-01"), d("2024-03-31"))
        );
        assert_eq!(
            parse_range("2024-01-05:2024-01-07").unwrap(),
            (d("2024-01-05"), d("2024-01-07"))
        );
    }

    #[test]
    fn invalid_expressions_are_rejected() {
        assert!(parse_range("24").is_err());
        assert!(parse_range("2024-13").is_err());
        assert!(parse_range("2024-02:2024-01").is_err());
        assert!(parse_range("soon").is_err());
    }
}
