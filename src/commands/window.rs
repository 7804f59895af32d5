use anyhow::Result;

use crate::calendar::{cell, Day, Selection, WindowCommand, WindowManager, DAYS_PER_WEEK};
use crate::commands::parse_day;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
/// Wide enough for "[September 1]" plus a gap
const CELL_WIDTH: usize = 14;

/// Render the window as a plain-text week grid, marking today with brackets
pub fn format_window(manager: &WindowManager, today: Day) -> String {
    let window = manager.window();
    let mut output = String::new();

    match (window.first(), window.last()) {
        (Some(first), Some(last)) => {
            output.push_str(&format!(
                "\nWindow {} .. {} ({} days, {} weeks)\n",
                first,
                last,
                window.len(),
                window.row_count()
            ));
        }
        _ => {
            output.push_str("\nWindow is empty\n");
            return output;
        }
    }
    output.push_str(&format!("{}\n", "═".repeat(CELL_WIDTH * DAYS_PER_WEEK)));

    for name in WEEKDAYS {
        output.push_str(&format!("{:>width$}", name, width = CELL_WIDTH));
    }
    output.push('\n');

    for row in 0..window.row_count() {
        for column in 0..DAYS_PER_WEEK {
            let view = cell::present_cell(window.day_at(row, column), today, &Selection::Empty);
            let text = if view.flags.is_today {
                format!("[{}]", view.label)
            } else {
                view.label
            };
            output.push_str(&format!("{:>width$}", text, width = CELL_WIDTH));
        }
        output.push('\n');
    }
    output
}

/// Seed a window for `today`, apply the requested expansions and print it
pub fn run(today: Option<&str>, backward: u32, forward: u32) -> Result<()> {
    let today = parse_day(today)?;
    let mut manager = WindowManager::default();
    manager.initialize(today);

    for _ in 0..backward {
        manager.apply(WindowCommand::ExpandBackward);
    }
    for _ in 0..forward {
        manager.apply(WindowCommand::ExpandForward);
    }

    print!("{}", format_window(&manager, today));
    Ok(())
}
