//! List subcommand - the publications page, rendered to stdout

use anyhow::Result;
use clap::{Args, ValueEnum};
use labsite_core::SharedProgress;
use labsite_publications::{Gesture, GroupBy, HtmlRenderer, Renderer, TextRenderer};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only publications from this year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Only publications with this research-area tag
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Only publications in this category (e.g. recent, book, patent)
    #[arg(long)]
    pub category: Option<String>,

    /// Page URL or query string to read a `tag` deep link from
    #[arg(short, long)]
    pub query: Option<String>,

    /// Grouping mode (default from config)
    #[arg(short, long, value_enum)]
    pub group_by: Option<GroupByArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum, Debug)]
pub enum GroupByArg {
    Year,
    Category,
}

impl From<GroupByArg> for GroupBy {
    fn from(arg: GroupByArg) -> Self {
        match arg {
            GroupByArg::Year => Self::Year,
            GroupByArg::Category => Self::Category,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Text => Box::new(TextRenderer),
            Self::Html => Box::new(HtmlRenderer),
        }
    }
}

/// Filter flags as gestures, in the order the page's controls would apply them.
fn gestures(args: &ListArgs) -> Vec<Gesture> {
    let mut out = Vec::new();
    if args.year.is_some() {
        out.push(Gesture::SelectYear(args.year));
    }
    if args.tag.is_some() {
        out.push(Gesture::SelectTag(args.tag.clone()));
    }
    if args.category.is_some() {
        out.push(Gesture::SelectCategory(args.category.clone()));
    }
    out
}

pub fn run(args: ListArgs, config: &Config, progress: &SharedProgress) -> Result<()> {
    let mut engine = config.engine.clone();
    if let Some(group_by) = args.group_by {
        engine.group_by = group_by.into();
    }

    let mut session = super::open_session(config, engine, args.query.as_deref(), progress);
    for gesture in gestures(&args) {
        session.apply(gesture);
    }

    let view = session.view();
    print!("{}", args.format.renderer().render(&view));

    if view.is_error() {
        anyhow::bail!("publications could not be loaded from {}", config.data.publications);
    }
    log::info!("{} publications shown", view.record_count());
    Ok(())
}
