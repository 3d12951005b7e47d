//! Date input normalization for form and tool input.

use chrono::NaiveDate;

use crate::error::{JaccError, JaccResult};

/// Accepts `YYYY-MM-DD`, `DD-MM-YYYY`, or `DD/MM/YYYY`.
pub fn parse_date(input: &str) -> JaccResult<NaiveDate> {
    let s = input.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d-%m-%Y"))
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .map_err(|_| {
            JaccError::InvalidRecord(format!(
                "unrecognized date '{}' (expected YYYY-MM-DD or DD-MM-YYYY)",
                s
            ))
        })
}
