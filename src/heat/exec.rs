use super::{fetch_day_counts, output_json, print_garden, GitLog, Grid, Today};
use crate::cli::CommonArgs;
use crate::registry::Registry;
use crate::util::registry_path;
use anyhow::Context;
use console::Term;
use std::time::Instant;

pub fn exec(common: &CommonArgs, email: &str, json: bool, colors: bool) -> anyhow::Result<()> {
    let started = Instant::now();
    let registry = Registry::new(registry_path(common.registry.as_deref())?);
    let repos = registry.load().context("Failed to load repository list")?;

    // Read the clock once; offsets and alignment must agree on today.
    let today = Today::local();

    let show_progress = !json && Term::stderr().is_term();
    let table = fetch_day_counts(&repos, email, &today, &GitLog, show_progress)?;

    tracing::info!(
        repositories = repos.len(),
        matched = table.total(),
        elapsed = %humantime::format_duration(started.elapsed()),
        "day counts collected"
    );

    if json {
        output_json(&table, email, today.alignment(), &repos, today.now_utc())?;
    } else {
        let grid = Grid::build(&table);
        print_garden(&grid, today.date(), today.alignment(), colors);
    }

    Ok(())
}
