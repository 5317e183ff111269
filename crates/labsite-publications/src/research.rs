//! Research projects and their deep links into the publications page
//!
//! Each project id doubles as the publication tag for that research area,
//! so a project links to `<publications page>?tag=<project id>`.

use labsite_core::{DocumentSource, LoadError, fetch_document};
use serde::Deserialize;
use url::Url;
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchProject {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub image_before: Option<String>,
    #[serde(default)]
    pub image_after: Option<String>,
}

impl ResearchProject {
    /// Publication tag for this project's research area.
    pub fn publication_tag(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Deserialize)]
struct ProjectsDocument {
    projects: Vec<ResearchProject>,
}

/// Load `{ "projects": [...] }`.
pub fn load_projects(source: &DocumentSource) -> Result<Vec<ResearchProject>, LoadError> {
    let doc: ProjectsDocument = serde_json::from_value(fetch_document(source)?)?;
    log::debug!("Loaded {} research projects from {source}", doc.projects.len());
    Ok(doc.projects)
}

/// Link from a project to the publications page pre-filtered on its tag.
///
/// `base` may be an absolute URL or a relative page path such as
/// `publications.html`; any existing query is replaced.
pub fn publications_link(base: &str, project: &ResearchProject) -> String {
    let tag = project.publication_tag();
    match Url::parse(base) {
        Ok(mut url) => {
            url.query_pairs_mut().clear().append_pair("tag", tag);
            url.to_string()
        }
        Err(_) => {
            let page = base.split('?').next().unwrap_or(base);
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair("tag", tag)
                .finish();
            format!("{page}?{query}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tag_from_query;
    use tempfile::TempDir;

    fn project(id: &str) -> ResearchProject {
        ResearchProject {
            id: id.to_string(),
            title: "Project".to_string(),
            description: vec![],
            image_before: None,
            image_after: None,
        }
    }

    #[test]
    fn relative_link() {
        assert_eq!(
            publications_link("publications.html", &project("wildlife")),
            "publications.html?tag=wildlife"
        );
    }

    #[test]
    fn absolute_link_replaces_query() {
        assert_eq!(
            publications_link("https://lab.example/publications.html?tag=old", &project("biomedical")),
            "https://lab.example/publications.html?tag=biomedical"
        );
    }

    #[test]
    fn link_roundtrips_through_query_reader() {
        let p = project("complex activity");
        let link = publications_link("https://lab.example/publications.html", &p);
        assert_eq!(tag_from_query(&link).as_deref(), Some("complex activity"));
        let rel = publications_link("publications.html", &p);
        assert_eq!(tag_from_query(&rel).as_deref(), Some("complex activity"));
    }

    #[test]
    fn load_projects_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("research.json");
        std::fs::write(
            &path,
            r#"{"projects": [{"id": "materials", "title": "Materials",
                "description": ["First.", "Second."],
                "imageBefore": "a.jpg", "imageAfter": "b.jpg"}]}"#,
        )
        .unwrap();
        let projects = load_projects(&DocumentSource::File(path)).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].description.len(), 2);
        assert_eq!(projects[0].image_before.as_deref(), Some("a.jpg"));
        assert_eq!(projects[0].publication_tag(), "materials");
    }
}
