use anyhow::Result;

use crate::calendar::{Day, Selection};
use crate::commands::parse_day;

/// Describe the selection after each click, one line per click
pub fn format_clicks(clicks: &[Day], format: &str) -> String {
    let mut output = String::new();
    let mut selection = Selection::Empty;

    for day in clicks {
        selection = selection.click(*day);
        output.push_str(&format!("click {} -> {}\n", day, describe(&selection)));
    }

    let summary = selection.summary(format);
    output.push_str(&format!(
        "\nFirst date selected: {}\n",
        summary.first.as_deref().unwrap_or("None")
    ));
    output.push_str(&format!(
        "Second date selected: {}\n",
        summary.second.as_deref().unwrap_or("None")
    ));
    output
}

fn describe(selection: &Selection) -> String {
    match selection {
        Selection::Empty => "empty".to_string(),
        Selection::One(first) => format!("{}", first),
        Selection::Two(first, second) => {
            format!("{} .. {} ({} days)", first, second, selection.span_days())
        }
    }
}

/// Replay clicks through the selection automaton and print the result
pub fn run(clicks: &[String], format: &str) -> Result<()> {
    let days = clicks
        .iter()
        .map(|click| parse_day(Some(click)))
        .collect::<Result<Vec<_>>>()?;

    print!("{}", format_clicks(&days, format));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> Day {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_clicks_scenario() {
        let clicks = [day("2024-03-10"), day("2024-03-05"), day("2024-03-10")];
        let output = format_clicks(&clicks, "%m/%d/%Y");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "click 2024-03-10 -> 2024-03-10");
        assert_eq!(lines[1], "click 2024-03-05 -> 2024-03-05 .. 2024-03-10 (6 days)");
        assert_eq!(lines[2], "click 2024-03-10 -> 2024-03-05");
        assert!(output.contains("First date selected: 03/05/2024"));
        assert!(output.contains("Second date selected: None"));
    }

    #[test]
    fn test_format_no_clicks() {
        let output = format_clicks(&[], "%m/%d/%Y");
        assert!(output.contains("First date selected: None"));
    }

    #[test]
    fn test_run_rejects_bad_dates() {
        assert!(run(&["2024-02-30".to_string()], "%m/%d/%Y").is_err());
    }
}
