//! Terminal rendering for sportcal-core types.
//!
//! The core produces declarative models (`GridModel`, `DetailView`); this
//! module is the presentation adapter that draws them with owo_colors.

use owo_colors::OwoColorize;
use sportcal_core::detail::DetailView;
use sportcal_core::grid::{Cell, DayCell, GridModel};
use sportcal_core::month::MONTH_NAMES;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

const WEEKDAY_HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa";
const CELL_WIDTH: usize = 4;

/// Day number padded to the cell width, with `•` when the day has events.
fn render_day(cell: &DayCell) -> String {
    let marker = if cell.has_events() { "•" } else { " " };
    let text = format!("{:>3}{}", cell.day, marker);

    match (cell.today, cell.has_events()) {
        (true, _) => text.reversed().to_string(),
        (false, true) => text.green().bold().to_string(),
        (false, false) => text,
    }
}

impl Render for GridModel {
    fn render(&self) -> String {
        let title = self.title();
        let indent = WEEKDAY_HEADER.len().saturating_sub(title.len()) / 2;

        let mut lines = vec![
            format!("{}{}", " ".repeat(indent), title.bold()),
            WEEKDAY_HEADER.dimmed().to_string(),
        ];

        for week in self.weeks() {
            let row: String = week
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => " ".repeat(CELL_WIDTH),
                    Cell::Day(day) => render_day(day),
                })
                .collect();
            lines.push(row.trim_end().to_string());
        }

        let days_with_events: Vec<&DayCell> = self.days().filter(|d| d.has_events()).collect();
        if !days_with_events.is_empty() {
            lines.push(String::new());
        }

        let month_abbrev = &MONTH_NAMES[self.month.month as usize][..3];
        for day in days_with_events {
            for marker in &day.markers {
                let id = format!("#{}", marker.event_id);
                lines.push(format!(
                    "  {} {:>2}  {} {}  {}  {}",
                    month_abbrev,
                    day.day,
                    "●".green(),
                    marker.label,
                    marker.time.dimmed(),
                    id.dimmed()
                ));
            }
        }

        lines.join("\n")
    }
}

impl Render for DetailView {
    fn render(&self) -> String {
        let back = format!("Back to calendar: {}", "sportcal show".bold());

        match self {
            DetailView::NoSelection => format!("No event selected. {back}"),
            DetailView::Error(reason) => {
                format!("Error loading event ({}). {back}", reason.dimmed())
            }
            DetailView::Event(detail) => {
                let mut lines = vec![detail.sport.bold().to_string()];
                for (heading, values) in detail.sections() {
                    lines.push(String::new());
                    lines.push(format!("  {}", heading.dimmed()));
                    lines.extend(values.into_iter().map(|value| format!("  {value}")));
                }
                lines.push(String::new());
                lines.push(back);
                lines.join("\n")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sportcal_core::event::sample_events;
    use sportcal_core::grid;
    use sportcal_core::month::MonthCursor;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_grid_layout() {
        let today = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let grid = grid::render(MonthCursor::new(2025, 6), &sample_events(), None, today);
        let text = strip_ansi(&grid.render());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].trim(), "July 2025");
        assert_eq!(lines[1], WEEKDAY_HEADER);
        // July 2025 starts on a Tuesday
        assert_eq!(lines[2], "          1   2   3   4   5");
        assert!(lines.contains(&" 13  14  15  16  17  18• 19"));
        assert!(text.contains("  Jul 18  ● Football  18:30  #1"));
    }

    #[test]
    fn test_detail_sections() {
        let view = DetailView::NoSelection;
        assert!(strip_ansi(&view.render()).starts_with("No event selected."));

        let detail = sportcal_core::detail::EventDetail {
            id: 1,
            sport: "Football".to_string(),
            teams: "Salzburg vs. Sturm".to_string(),
            date: "Friday, July 18, 2025".to_string(),
            time: "18:30".to_string(),
            venue: "Red Bull Arena".to_string(),
            description: String::new(),
        };
        let text = strip_ansi(&DetailView::Event(detail).render());
        assert!(text.starts_with("Football\n"));
        assert!(text.contains("  Date & Time\n  Friday, July 18, 2025\n  18:30"));
    }
}
