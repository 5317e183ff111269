//! Rendering adapters: turn a [`PublicationView`] into text for a display surface.
//!
//! The engine never touches a display; callers pick a renderer.

use askama::Template;

use crate::group::Group;
use crate::record::PublicationRecord;
use crate::view::{LOAD_ERROR_MESSAGE, LOADING_MESSAGE, NO_RESULTS_MESSAGE, PublicationView};

pub trait Renderer {
    fn render(&self, view: &PublicationView<'_>) -> String;

    /// Citation detail surface. BibTeX is shown verbatim.
    fn render_citation(&self, record: &PublicationRecord) -> String;
}

/// `authors | month | venue`, skipping absent parts.
fn meta_line(record: &PublicationRecord) -> String {
    let mut parts = Vec::with_capacity(3);
    if !record.authors.is_empty() {
        parts.push(record.authors.as_str());
    }
    parts.extend(record.month.as_deref());
    parts.extend(record.venue.as_deref());
    parts.join(" | ")
}

/// Plain terminal listing
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl TextRenderer {
    fn group_lines(lines: &mut Vec<String>, group: &Group<'_>) {
        let heading = group.key.to_string();
        let rule = "=".repeat(heading.chars().count());
        lines.push(heading);
        lines.push(rule);
        for record in &group.records {
            lines.push(String::new());
            lines.push(format!("[{}] {}", record.id, record.title));
            let meta = meta_line(record);
            if !meta.is_empty() {
                lines.push(format!("    {meta}"));
            }
            if let Some(text) = &record.abstract_text {
                lines.push(format!("    {text}"));
            }
            if let Some(link) = &record.pdf_link {
                lines.push(format!("    PDF: {link}"));
            }
            if let Some(link) = &record.doi_link {
                lines.push(format!("    DOI: {link}"));
            }
        }
        lines.push(String::new());
    }
}

impl Renderer for TextRenderer {
    fn render(&self, view: &PublicationView<'_>) -> String {
        match view {
            PublicationView::Loading => format!("{LOADING_MESSAGE}\n"),
            PublicationView::Error { detail } => {
                format!("{LOAD_ERROR_MESSAGE}\nError details: {detail}\n")
            }
            PublicationView::Empty { .. } => format!("{NO_RESULTS_MESSAGE}\n"),
            PublicationView::Groups {
                tag_label, groups, ..
            } => {
                let mut lines = Vec::new();
                if let Some(label) = tag_label {
                    lines.push(format!("Publications tagged: {label}"));
                    lines.push(String::new());
                }
                for group in groups {
                    Self::group_lines(&mut lines, group);
                }
                let mut out = lines.join("\n");
                out.push('\n');
                out
            }
        }
    }

    fn render_citation(&self, record: &PublicationRecord) -> String {
        match &record.bibtex {
            Some(bibtex) => format!("{bibtex}\n"),
            None => format!("No BibTeX available for {}\n", record.id),
        }
    }
}

// === HTML templates (auto-escaped by askama) ===

#[derive(Template)]
#[template(path = "publications/loading.html")]
struct LoadingTemplate {
    message: &'static str,
}

/// Error and no-results states share the `no-publications` box.
#[derive(Template)]
#[template(path = "publications/message.html")]
struct MessageTemplate<'a> {
    message: &'static str,
    detail: Option<&'a str>,
}

struct RecordCard<'a> {
    id: &'a str,
    title: &'a str,
    meta: String,
    abstract_text: Option<&'a str>,
    pdf_link: Option<&'a str>,
    doi_link: Option<&'a str>,
    has_links: bool,
}

impl<'a> RecordCard<'a> {
    fn new(record: &'a PublicationRecord) -> Self {
        Self {
            id: record.id.as_str(),
            title: &record.title,
            meta: meta_line(record),
            abstract_text: record.abstract_text.as_deref(),
            pdf_link: record.pdf_link.as_deref(),
            doi_link: record.doi_link.as_deref(),
            has_links: record.pdf_link.is_some() || record.doi_link.is_some(),
        }
    }
}

struct GroupCard<'a> {
    heading: String,
    records: Vec<RecordCard<'a>>,
}

#[derive(Template)]
#[template(path = "publications/groups.html")]
struct GroupsTemplate<'a> {
    tag_label: Option<&'a str>,
    groups: Vec<GroupCard<'a>>,
}

#[derive(Template)]
#[template(path = "publications/citation.html")]
struct CitationTemplate<'a> {
    bibtex: Option<&'a str>,
}

fn render_html<T: Template>(template: &T) -> String {
    match template.render() {
        Ok(mut html) => {
            html.push('\n');
            html
        }
        Err(e) => {
            log::error!("HTML template failed: {e}");
            format!("<!-- template error: {e} -->\n")
        }
    }
}

/// HTML fragment using the site's stylesheet classes
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, view: &PublicationView<'_>) -> String {
        match view {
            PublicationView::Loading => render_html(&LoadingTemplate {
                message: LOADING_MESSAGE,
            }),
            PublicationView::Error { detail } => render_html(&MessageTemplate {
                message: LOAD_ERROR_MESSAGE,
                detail: Some(detail.as_str()),
            }),
            PublicationView::Empty { .. } => render_html(&MessageTemplate {
                message: NO_RESULTS_MESSAGE,
                detail: None,
            }),
            PublicationView::Groups {
                tag_label, groups, ..
            } => render_html(&GroupsTemplate {
                tag_label: tag_label.as_deref(),
                groups: groups
                    .iter()
                    .map(|group| GroupCard {
                        heading: group.key.to_string(),
                        records: group.records.iter().copied().map(RecordCard::new).collect(),
                    })
                    .collect(),
            }),
        }
    }

    fn render_citation(&self, record: &PublicationRecord) -> String {
        render_html(&CitationTemplate {
            bibtex: record.bibtex.as_deref(),
        })
    }
}
