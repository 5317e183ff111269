//! `labsite tags` - research-area vocabulary with publication counts

use anyhow::{Context, Result};
use comfy_table::{Cell, Color};
use labsite_core::SharedProgress;

use crate::config::Config;

pub fn run(config: &Config, progress: &SharedProgress) -> Result<()> {
    config
        .data
        .tags_source()
        .context("no tag vocabulary configured (set data.tags in labsite.toml)")?;

    let session = super::open_session(config, config.engine.clone(), None, progress);
    let vocabulary = session
        .vocabulary()
        .context("tag vocabulary could not be loaded")?;
    // counts are a bonus; the vocabulary is still useful without them
    let records = session.store().records();

    let mut table = super::table(&["Tag", "Name", "Publications"]);
    for tag in &vocabulary.tags {
        let count = match records {
            Some(all) => Cell::new(all.iter().filter(|r| r.has_tag(&tag.id)).count()),
            None => Cell::new("?").fg(Color::DarkGrey),
        };
        table.add_row(vec![Cell::new(&tag.id), Cell::new(&tag.name), count]);
    }

    println!("{table}");
    Ok(())
}
