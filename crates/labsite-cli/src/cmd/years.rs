//! `labsite years` - options for the year selector

use anyhow::Result;
use comfy_table::Cell;
use labsite_core::SharedProgress;
use labsite_publications::build_year_options;

use crate::config::Config;

pub fn run(config: &Config, progress: &SharedProgress) -> Result<()> {
    let session = super::open_session(config, config.engine.clone(), None, progress);
    let Some(all) = session.store().records() else {
        anyhow::bail!("publications could not be loaded from {}", config.data.publications);
    };

    let years = build_year_options(all);
    if years.is_empty() {
        eprintln!("No dated publications.");
        return Ok(());
    }

    let mut table = super::table(&["Year", "Publications"]);
    for year in &years {
        let count = all.iter().filter(|r| r.year == Some(*year)).count();
        table.add_row(vec![Cell::new(year), Cell::new(count)]);
    }
    let undated = all.iter().filter(|r| r.year.is_none()).count();
    if undated > 0 {
        table.add_row(vec![Cell::new("Undated"), Cell::new(undated)]);
    }

    println!("{table}");
    Ok(())
}
