use super::day::Day;
use super::selection::Selection;

/// Display flags for one calendar cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellFlags {
    pub is_today: bool,
    pub is_first_endpoint: bool,
    pub is_second_endpoint: bool,
    /// Strictly between the two endpoints
    pub is_between: bool,
    pub is_today_between: bool,
}

impl CellFlags {
    pub fn is_endpoint(&self) -> bool {
        self.is_first_endpoint || self.is_second_endpoint
    }
}

/// Everything needed to draw a cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellView {
    pub day: Option<Day>,
    pub label: String,
    pub flags: CellFlags,
    pub clickable: bool,
}

pub fn present(day: Day, today: Day, selection: &Selection) -> CellFlags {
    let is_today = day == today;
    let is_between = match selection.range() {
        Some((first, second)) => {
            (day > first && day < second) || (day > second && day < first)
        }
        None => false,
    };

    CellFlags {
        is_today,
        is_first_endpoint: selection.first() == Some(day),
        is_second_endpoint: selection.second() == Some(day),
        is_between,
        is_today_between: is_today && is_between,
    }
}

/// Cell for a grid position; positions without a day render blank and ignore clicks
pub fn present_cell(day: Option<Day>, today: Day, selection: &Selection) -> CellView {
    match day {
        Some(day) => CellView {
            day: Some(day),
            label: label(day),
            flags: present(day, today, selection),
            clickable: true,
        },
        None => CellView::default(),
    }
}

/// Day-of-month, prefixed with the month name on the 1st
pub fn label(day: Day) -> String {
    if day.is_first_of_month() {
        format!("{} {}", day.format("%B"), day.day())
    } else {
        day.day().to_string()
    }
}
