//! `labsite projects` - research projects and their publication deep links

use anyhow::{Context, Result};
use clap::Args;
use labsite_publications::{load_projects, publications_link};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Publications page to link to (default from config)
    #[arg(short, long)]
    pub base: Option<String>,
}

pub fn run(args: ProjectsArgs, config: &Config) -> Result<()> {
    let source = config.data.projects_source();
    let projects = load_projects(&source)
        .with_context(|| format!("Unable to load research projects from {source}"))?;

    if projects.is_empty() {
        eprintln!("No research projects found.");
        return Ok(());
    }

    let base = args
        .base
        .as_deref()
        .unwrap_or(&config.data.publications_page);

    let mut table = super::table(&["Project", "Title", "Publications"]);
    for project in &projects {
        table.add_row(vec![
            project.id.clone(),
            project.title.clone(),
            publications_link(base, project),
        ]);
    }

    println!("{table}");
    Ok(())
}
