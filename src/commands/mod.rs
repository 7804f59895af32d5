pub mod select;
pub mod window;

use anyhow::{Context, Result};

use crate::calendar::Day;

/// Parse an optional YYYY-MM-DD date, defaulting to today
pub fn parse_day(date: Option<&str>) -> Result<Day> {
    match date {
        Some(date_str) => date_str
            .parse::<Day>()
            .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str)),
        None => Ok(Day::today()),
    }
}
