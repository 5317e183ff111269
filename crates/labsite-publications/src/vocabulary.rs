//! Research-area tag vocabulary (`{ "tags": [ {id, name}, ... ] }`)

use labsite_core::{DocumentSource, LoadError, fetch_document};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TagVocabulary {
    pub tags: Vec<Tag>,
}

impl TagVocabulary {
    pub fn load(source: &DocumentSource) -> Result<Self, LoadError> {
        let vocabulary: Self = serde_json::from_value(fetch_document(source)?)?;
        log::debug!("Loaded {} tags from {source}", vocabulary.tags.len());
        Ok(vocabulary)
    }

    pub fn get(&self, id: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == id)
    }

    /// Human-readable name for a tag id, falling back to the id itself.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map_or(id, |t| t.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_and_resolve_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tags.json");
        std::fs::write(
            &path,
            r#"{"tags": [{"id": "wildlife", "name": "Wildlife Monitoring"},
                         {"id": "geospatial", "name": "Geospatial AI"}]}"#,
        )
        .unwrap();

        let vocab = TagVocabulary::load(&DocumentSource::File(path)).unwrap();
        assert_eq!(vocab.tags.len(), 2);
        assert_eq!(vocab.display_name("wildlife"), "Wildlife Monitoring");
        assert_eq!(vocab.display_name("unknown-tag"), "unknown-tag");
        assert!(vocab.get("geospatial").is_some());
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tags.json");
        std::fs::write(&path, r#"["wildlife"]"#).unwrap();
        let err = TagVocabulary::load(&DocumentSource::File(path)).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }
}
