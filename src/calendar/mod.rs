//! Calendar core: day values, range generation, the scrolling day window,
//! the range-selection automaton and per-cell presentation.
//!
//! Everything here is pure and takes `today` as an explicit argument.

pub mod cell;
pub mod day;
pub mod range;
pub mod selection;
pub mod window;

pub use cell::{present, present_cell, CellFlags, CellView};
pub use day::{Day, DayParseError};
pub use range::{generate, generate_month};
pub use selection::{Selection, SelectionSummary, DEFAULT_SUMMARY_FORMAT};
pub use window::{
    DayWindow, ScrollProbe, WindowChange, WindowCommand, WindowManager, DAYS_PER_WEEK,
    DEFAULT_EDGE_THRESHOLD,
};
