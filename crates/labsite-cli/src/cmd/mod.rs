//! Subcommands

pub mod cite;
pub mod list;
pub mod projects;
pub mod tags;
pub mod years;

use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};
use labsite_core::SharedProgress;
use labsite_publications::{
    EngineConfig, PublicationSession, PublicationStore, view::LOADING_MESSAGE,
};

use crate::config::Config;

/// Table with the shared look and a cyan header row.
pub fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    table
}

/// Build a session over the configured documents and load it behind a spinner.
///
/// `query` is the hosting page's URL or query string, used for deep links.
pub fn open_session(
    config: &Config,
    engine: EngineConfig,
    query: Option<&str>,
    progress: &SharedProgress,
) -> PublicationSession {
    let store = PublicationStore::new(config.data.publications_source());
    let mut session = PublicationSession::new(store, engine);
    if let Some(tags) = config.data.tags_source() {
        session = session.with_vocabulary(tags);
    }

    let pb = progress.loading_line("publications", LOADING_MESSAGE);
    session.init(query);
    pb.finish_and_clear();
    session
}

/// `labsite config`
pub fn show_config(config: &Config) {
    let mut table = table(&["Setting", "Value"]);

    table.add_row(vec!["Publications", config.data.publications.as_str()]);
    table.add_row(vec![
        "Tag vocabulary",
        config.data.tags.as_deref().unwrap_or("not set"),
    ]);
    table.add_row(vec!["Research projects", config.data.projects.as_str()]);
    table.add_row(vec![
        "Publications page",
        config.data.publications_page.as_str(),
    ]);
    table.add_row(vec![
        "Group by".to_string(),
        config.engine.group_by.to_string(),
    ]);
    table.add_row(vec![
        "Filters".to_string(),
        config
            .engine
            .filter_dims
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(", "),
    ]);
    table.add_row(vec![
        "Categories".to_string(),
        config.engine.categories.join(", "),
    ]);
    table.add_row(vec![
        "Read timeout".to_string(),
        format!("{}s", config.http.read_timeout),
    ]);

    eprintln!("\n{table}");
}
