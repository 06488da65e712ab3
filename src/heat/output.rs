use super::aggregate::DayCountTable;
use super::grid::Grid;
use crate::model::{GardenOutput, SCHEMA_VERSION, WINDOW_DAYS, WINDOW_WEEKS};
use anyhow::Result;
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use console::Style;
use std::path::PathBuf;

/// Width of the weekday label column, also the indent of the month row.
pub const GUTTER_WIDTH: usize = 5;

const CELL_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Empty,
    Low,
    Medium,
    High,
    Today,
}

impl Shade {
    pub fn for_count(count: u32, today: bool) -> Self {
        if today {
            return Shade::Today;
        }
        match count {
            0 => Shade::Empty,
            1..=4 => Shade::Low,
            5..=9 => Shade::Medium,
            _ => Shade::High,
        }
    }

    fn style(self, colors: bool) -> Style {
        let (bg, fg) = match self {
            Shade::Empty => (235, 235),
            Shade::Low => (142, 235),
            Shade::Medium => (108, 235),
            Shade::High => (175, 235),
            Shade::Today => (167, 229),
        };
        Style::new().on_color256(bg).color256(fg).force_styling(colors)
    }
}

/// A single four-column cell. `None` renders the "no data" placeholder.
pub fn render_cell(value: Option<u32>, today: bool, colors: bool) -> String {
    match value {
        None => Shade::Empty.style(colors).apply_to("  - ").to_string(),
        Some(count) => {
            let text = format!("{count:>3} ");
            Shade::for_count(count, today).style(colors).apply_to(text).to_string()
        }
    }
}

pub fn weekday_label(row: usize) -> &'static str {
    match row {
        5 => " Mon ",
        3 => " Wed ",
        1 => " Fri ",
        _ => "     ",
    }
}

/// Month abbreviations placed on the week where each new month begins.
pub fn month_header(today: NaiveDate) -> String {
    let mut line = " ".repeat(GUTTER_WIDTH);
    let Some(mut week) = today.checked_sub_days(Days::new(WINDOW_DAYS as u64)) else {
        return line;
    };
    let mut month = week.month();

    while week <= today {
        if week.month() != month {
            let name = week.format("%b").to_string();
            line.push_str(&format!("{name:<CELL_WIDTH$}"));
            month = week.month();
        } else {
            line.push_str(&" ".repeat(CELL_WIDTH));
        }
        match week.checked_add_days(Days::new(7)) {
            Some(next) => week = next,
            None => break,
        }
    }

    line
}

/// Render the month row followed by seven weekday rows, oldest week on the left.
pub fn render_garden(grid: &Grid, today: NaiveDate, alignment: usize, colors: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);
    lines.push(month_header(today));

    let today_row = alignment.saturating_sub(1);
    for row in (0..7).rev() {
        let mut line = String::from(weekday_label(row));
        for week in (0..=WINDOW_WEEKS + 1).rev() {
            let is_today = week == 0 && row == today_row;
            line.push_str(&render_cell(grid.cell(week, row), is_today, colors));
        }
        lines.push(line);
    }

    lines
}

pub fn print_garden(grid: &Grid, today: NaiveDate, alignment: usize, colors: bool) {
    for line in render_garden(grid, today, alignment, colors) {
        println!("{line}");
    }
}

/// JSON document for a run; `generated_at` is the run clock, not a fresh reading.
pub fn garden_document(
    table: &DayCountTable,
    author: &str,
    alignment: usize,
    repositories: &[PathBuf],
    generated_at: DateTime<Utc>,
) -> GardenOutput {
    GardenOutput {
        version: SCHEMA_VERSION,
        generated_at,
        author: author.to_string(),
        window_days: WINDOW_DAYS,
        alignment,
        repositories: repositories
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect(),
        counts: table.counts().to_vec(),
    }
}

pub fn output_json(
    table: &DayCountTable,
    author: &str,
    alignment: usize,
    repositories: &[PathBuf],
    generated_at: DateTime<Utc>,
) -> Result<()> {
    let output = garden_document(table, author, alignment, repositories, generated_at);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
