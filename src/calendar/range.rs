use super::day::Day;

/// Generate every calendar day from `start` to `end`, inclusive
///
/// Returns an empty sequence when `start > end`.
pub fn generate(start: Day, end: Day) -> Vec<Day> {
    if start > end {
        return Vec::new();
    }

    start
        .date()
        .iter_days()
        .take_while(|date| *date <= end.date())
        .map(Day::from)
        .collect()
}

/// Generate the full month containing `day`
pub fn generate_month(day: Day) -> Vec<Day> {
    match (day.month_start(0), day.month_end(0)) {
        (Some(start), Some(end)) => generate(start, end),
        _ => Vec::new(),
    }
}
