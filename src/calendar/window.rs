use tracing::debug;

use super::day::Day;
use super::range::generate;

/// Distance from either edge (in scroll units) that triggers an expansion
pub const DEFAULT_EDGE_THRESHOLD: u32 = 100;

/// Days per grid row
pub const DAYS_PER_WEEK: usize = 7;

/// Viewport geometry sampled from the host at scroll time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollProbe {
    /// Distance scrolled from the top
    pub offset: u32,
    /// Height of the visible viewport
    pub client_height: u32,
    /// Height of the whole scrollable content
    pub scroll_height: u32,
}

/// Command computed from a scroll probe, applied by [`WindowManager::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    None,
    ExpandBackward,
    ExpandForward,
}

/// What an expansion did to the window, in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowChange {
    pub prepended: usize,
    pub appended: usize,
    pub pruned_front: usize,
    pub pruned_back: usize,
}

impl WindowChange {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Contiguous, strictly increasing run of days backing the scroll area
///
/// Laid out as a Sunday-first week grid: the first day sits in the column
/// of its weekday and every following day flows into the next cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayWindow {
    days: Vec<Day>,
}

impl DayWindow {
    /// Window holding every day from `start` to `end` inclusive
    pub fn span(start: Day, end: Day) -> Self {
        Self {
            days: generate(start, end),
        }
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn first(&self) -> Option<Day> {
        self.days.first().copied()
    }

    pub fn last(&self) -> Option<Day> {
        self.days.last().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Index of `day` in the window
    pub fn position(&self, day: Day) -> Option<usize> {
        let first = self.first()?;
        let offset = usize::try_from((day.date() - first.date()).num_days()).ok()?;
        (self.days.get(offset) == Some(&day)).then_some(offset)
    }

    pub fn contains(&self, day: Day) -> bool {
        self.position(day).is_some()
    }

    /// Empty cells before the first day in the first grid row
    pub fn leading_blanks(&self) -> usize {
        self.first()
            .map(|day| day.weekday_from_sunday() as usize)
            .unwrap_or(0)
    }

    pub fn row_count(&self) -> usize {
        if self.days.is_empty() {
            return 0;
        }
        (self.leading_blanks() + self.days.len()).div_ceil(DAYS_PER_WEEK)
    }

    /// Grid row holding `day`
    pub fn row_of(&self, day: Day) -> Option<usize> {
        self.position(day)
            .map(|index| (self.leading_blanks() + index) / DAYS_PER_WEEK)
    }

    /// Day shown at a grid position; None for blank cells and out-of-range positions
    pub fn day_at(&self, row: usize, column: usize) -> Option<Day> {
        if column >= DAYS_PER_WEEK {
            return None;
        }
        let cell = row.checked_mul(DAYS_PER_WEEK)?.checked_add(column)?;
        let index = cell.checked_sub(self.leading_blanks())?;
        self.days.get(index).copied()
    }

    /// Drop every day after `bound`
    pub fn pruned_after(&self, bound: Day) -> Self {
        let keep = self.days.partition_point(|day| *day <= bound);
        Self {
            days: self.days[..keep].to_vec(),
        }
    }

    /// Drop every day before `bound`
    pub fn pruned_before(&self, bound: Day) -> Self {
        let skip = self.days.partition_point(|day| *day < bound);
        Self {
            days: self.days[skip..].to_vec(),
        }
    }
}

/// Maintains the materialized day window for the infinite scroll grid
///
/// The window is never mutated in place: every expansion builds a new
/// [`DayWindow`] and replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowManager {
    window: DayWindow,
    edge_threshold: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(DEFAULT_EDGE_THRESHOLD)
    }
}

impl WindowManager {
    pub fn new(edge_threshold: u32) -> Self {
        Self {
            window: DayWindow::default(),
            edge_threshold,
        }
    }

    pub fn window(&self) -> &DayWindow {
        &self.window
    }

    pub fn edge_threshold(&self) -> u32 {
        self.edge_threshold
    }

    /// Seed the window with the previous, current and next month around `today`
    pub fn initialize(&mut self, today: Day) {
        self.window = match (today.month_start(-1), today.month_end(1)) {
            (Some(start), Some(end)) => DayWindow::span(start, end),
            _ => DayWindow::default(),
        };
        debug!(
            "WINDOW: Initialized {:?}..{:?} ({} days)",
            self.window.first(),
            self.window.last(),
            self.window.len()
        );
    }

    /// Decide whether a scroll position calls for an expansion
    ///
    /// The top edge is checked first, so a viewport within the threshold of
    /// both edges expands backward.
    pub fn on_scroll(&self, probe: ScrollProbe) -> WindowCommand {
        if self.window.is_empty() {
            return WindowCommand::None;
        }

        if probe.offset < self.edge_threshold {
            WindowCommand::ExpandBackward
        } else if probe.offset.saturating_add(probe.client_height)
            > probe.scroll_height.saturating_sub(self.edge_threshold)
        {
            WindowCommand::ExpandForward
        } else {
            WindowCommand::None
        }
    }

    /// The viewport is within the threshold of both edges at once
    ///
    /// `on_scroll` cannot tell which way to grow here, so callers pick the
    /// direction from the scroll itself.
    pub fn reaches_both_edges(&self, probe: ScrollProbe) -> bool {
        let margins = self.edge_threshold.saturating_mul(2);
        probe.scroll_height < probe.client_height.saturating_add(margins)
    }

    pub fn apply(&mut self, command: WindowCommand) -> WindowChange {
        match command {
            WindowCommand::None => WindowChange::default(),
            WindowCommand::ExpandBackward => self.expand_backward(),
            WindowCommand::ExpandForward => self.expand_forward(),
        }
    }

    /// Prepend the month before the first day, then prune days more than two
    /// months past the old first month
    pub fn expand_backward(&mut self) -> WindowChange {
        let Some(first) = self.window.first() else {
            return WindowChange::default();
        };
        let (Some(start), Some(end), Some(keep_until)) =
            (first.month_start(-1), first.date().pred_opt(), first.month_end(2))
        else {
            return WindowChange::default();
        };

        let mut days = generate(start, Day::from(end));
        let prepended = days.len();
        days.extend_from_slice(self.window.days());
        let expanded = DayWindow { days };
        let pruned = expanded.pruned_after(keep_until);

        let change = WindowChange {
            prepended,
            pruned_back: expanded.len() - pruned.len(),
            ..WindowChange::default()
        };
        self.window = pruned;
        debug!("WINDOW: Expanded backward {:?}", change);
        change
    }

    /// Append the month after the last day, then prune days more than two
    /// months before the old last month
    pub fn expand_forward(&mut self) -> WindowChange {
        let Some(last) = self.window.last() else {
            return WindowChange::default();
        };
        let (Some(start), Some(end), Some(keep_from)) =
            (last.succ(), last.month_end(1), last.month_start(-2))
        else {
            return WindowChange::default();
        };

        let appended_days = generate(start, end);
        let appended = appended_days.len();
        let mut days = self.window.days().to_vec();
        days.extend(appended_days);
        let expanded = DayWindow { days };
        let pruned = expanded.pruned_before(keep_from);

        let change = WindowChange {
            appended,
            pruned_front: expanded.len() - pruned.len(),
            ..WindowChange::default()
        };
        self.window = pruned;
        debug!("WINDOW: Expanded forward {:?}", change);
        change
    }

    /// Scroll offset that vertically centers the month containing `today`
    ///
    /// Falls back to the middle of the content when that month is not in
    /// the window. The result is clamped to the scrollable range.
    pub fn center_offset(&self, today: Day, row_height: u32, client_height: u32) -> u32 {
        let total = self.window.row_count() as u32 * row_height;
        let max_offset = total.saturating_sub(client_height);

        let Some((top, bottom)) = self.month_rows(today) else {
            return max_offset / 2;
        };

        let month_middle = (top as u32 * row_height + (bottom as u32 + 1) * row_height) / 2;
        month_middle.saturating_sub(client_height / 2).min(max_offset)
    }

    /// First and last grid rows of the month containing `day`, clipped to the window
    fn month_rows(&self, day: Day) -> Option<(usize, usize)> {
        let start = day.month_start(0)?.max(self.window.first()?);
        let end = day.month_end(0)?.min(self.window.last()?);
        if start > end {
            return None;
        }
        Some((self.window.row_of(start)?, self.window.row_of(end)?))
    }
}
