pub mod aggregate;
pub mod exec;
pub mod fetch;
pub mod grid;
pub mod offset;
pub mod output;

pub use aggregate::{bucket_for, tally, DayCountTable};
pub use exec::exec;
pub use fetch::{fetch_day_counts, CommitLog, GitLog};
pub use grid::{Column, Grid};
pub use offset::{days_between, weekday_alignment, Today};
pub use output::{garden_document, month_header, output_json, print_garden, render_cell, render_garden, Shade};
