use super::day::Day;

/// Date format used by the selection summary unless configured otherwise
pub const DEFAULT_SUMMARY_FORMAT: &str = "%m/%d/%Y";

/// Two-endpoint range selection
///
/// When both endpoints are set, `first <= second`. The ordering is enforced
/// by [`Selection::click`]; callers never sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    One(Day),
    Two(Day, Day),
}

/// Human-readable endpoints for the calendar menu
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSummary {
    pub first: Option<String>,
    pub second: Option<String>,
}

impl Selection {
    /// Transition on a click of `day`
    ///
    /// - clicking the first endpoint clears the selection
    /// - clicking the second endpoint drops it
    /// - any other day becomes the second endpoint, re-sorted against the first
    pub fn click(self, day: Day) -> Self {
        match self {
            Self::Empty => Self::One(day),
            Self::One(first) if first == day => Self::Empty,
            Self::One(first) => Self::ordered(first, day),
            Self::Two(first, _) if first == day => Self::Empty,
            Self::Two(first, second) if second == day => Self::One(first),
            Self::Two(first, _) => Self::ordered(first, day),
        }
    }

    fn ordered(a: Day, b: Day) -> Self {
        Self::Two(a.min(b), a.max(b))
    }

    pub fn first(&self) -> Option<Day> {
        match self {
            Self::Empty => None,
            Self::One(first) | Self::Two(first, _) => Some(*first),
        }
    }

    pub fn second(&self) -> Option<Day> {
        match self {
            Self::Two(_, second) => Some(*second),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Both endpoints, when set
    pub fn range(&self) -> Option<(Day, Day)> {
        match self {
            Self::Two(first, second) => Some((*first, *second)),
            _ => None,
        }
    }

    /// Number of days covered by the selection, endpoints included
    pub fn span_days(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Two(first, second) => {
                (second.date() - first.date()).num_days().unsigned_abs() as usize + 1
            }
        }
    }

    pub fn summary(&self, format: &str) -> SelectionSummary {
        SelectionSummary {
            first: self.first().map(|day| day.format(format)),
            second: self.second().map(|day| day.format(format)),
        }
    }
}
