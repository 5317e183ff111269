//! `labsite cite` - citation detail for one publication

use anyhow::Result;
use clap::Args;
use labsite_core::SharedProgress;
use labsite_publications::Renderer;

use super::list::OutputFormat;
use crate::config::Config;

#[derive(Args, Debug)]
pub struct CiteArgs {
    /// Publication id
    pub id: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: CiteArgs, config: &Config, progress: &SharedProgress) -> Result<()> {
    let session = super::open_session(config, config.engine.clone(), None, progress);
    if !session.store().is_loaded() {
        anyhow::bail!("publications could not be loaded from {}", config.data.publications);
    }

    let Some(record) = session.citation(&args.id) else {
        anyhow::bail!("no publication with id {:?}", args.id);
    };
    print!("{}", args.format.renderer().render_citation(record));
    Ok(())
}
