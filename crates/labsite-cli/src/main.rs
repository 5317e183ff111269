//! labsite - command-line host for the lab website's publication engine
//!
//! Loads the publications document the site serves, applies the same
//! filters the publications page offers, and prints the grouped result as
//! text or as the page's HTML fragment.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "labsite")]
#[command(about = "Filter, group and render the lab's publication list")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./labsite.toml or ~/.config/labsite/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Publications document (URL or path), overrides config
    #[arg(short, long, global = true)]
    publications: Option<String>,

    /// Seconds to wait for a document before giving up
    #[arg(long, global = true)]
    read_timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// List publications, filtered and grouped
    List(cmd::list::ListArgs),
    /// Show the years available for filtering
    Years,
    /// Print the BibTeX citation of one publication
    Cite(cmd::cite::CiteArgs),
    /// Show the research-area tag vocabulary
    Tags,
    /// List research projects with links to their publications
    Projects(cmd::projects::ProjectsArgs),
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Progress context (TTY auto-detect)
    let progress = Arc::new(labsite_core::ProgressContext::new());

    // Logging:
    //   TTY:     quiet (warn) unless --debug  — the spinner shows activity
    //   non-TTY: info unless --debug
    let is_tty = progress.is_tty();
    let multi = if is_tty { Some(progress.multi()) } else { None };
    let verbosity = labsite_core::Verbosity::from_flags(is_tty && !cli.debug, cli.debug);
    labsite_core::init_logging(verbosity, multi);

    let mut config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };
    if let Some(publications) = cli.publications {
        config.data.publications = publications;
    }

    labsite_core::set_fetch_config(labsite_core::FetchConfig {
        read_timeout: std::time::Duration::from_secs(
            cli.read_timeout.unwrap_or(config.http.read_timeout),
        ),
    });

    match cli.command {
        Command::List(args) => cmd::list::run(args, &config, &progress),
        Command::Years => cmd::years::run(&config, &progress),
        Command::Cite(args) => cmd::cite::run(args, &config, &progress),
        Command::Tags => cmd::tags::run(&config, &progress),
        Command::Projects(args) => cmd::projects::run(args, &config),
        Command::Config => {
            cmd::show_config(&config);
            Ok(())
        }
    }
}
