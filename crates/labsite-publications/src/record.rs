//! Publication record and lenient document parsing
//!
//! The site's data files were hand-edited over years, so optional fields are
//! read leniently: a wrong-typed optional value becomes "absent" instead of
//! failing the whole document. A record without a usable id gets a positional
//! one (`#<index>`). Only structural problems (not an array, a non-object
//! entry, duplicate ids) are load errors.

use labsite_core::LoadError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Publication identifier. JSON strings and integers are both accepted and
/// held as text so `7` and `"7"` resolve to the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicationId(String);

impl PublicationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PublicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PublicationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) if !s.trim().is_empty() => Ok(Self(s.trim().to_string())),
            Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "id must be a non-empty string or a number, got {other}"
            ))),
        }
    }
}

/// One entry of the publications document. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationRecord {
    pub id: PublicationId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_authors")]
    pub authors: String,
    /// `None` = undated
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub month: Option<String>,
    #[serde(default, alias = "publication_venue", deserialize_with = "lenient_opt_text")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Option<Vec<String>>,
    #[serde(default, rename = "abstract", deserialize_with = "verbatim_opt_text")]
    pub abstract_text: Option<String>,
    #[serde(default, alias = "pdf_link", deserialize_with = "lenient_opt_text")]
    pub pdf_link: Option<String>,
    #[serde(default, alias = "doi_link", deserialize_with = "lenient_opt_text")]
    pub doi_link: Option<String>,
    /// Kept byte-for-byte, surrounding whitespace included
    #[serde(default, deserialize_with = "verbatim_opt_text")]
    pub bibtex: Option<String>,
}

impl PublicationRecord {
    /// Minimal record, used by tests and benches.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: PublicationId::new(id),
            title: title.into(),
            authors: String::new(),
            year: None,
            month: None,
            venue: None,
            category: None,
            tags: None,
            abstract_text: None,
            pdf_link: None,
            doi_link: None,
            bibtex: None,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

fn text_of(value: Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn lenient_opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(text_of(Value::deserialize(d)?))
}

/// Like [`lenient_opt_text`] but never trims a non-blank string.
fn verbatim_opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(text_of(Value::deserialize(d)?).unwrap_or_default())
}

/// Authors arrive either as one display string or as a list of names.
fn lenient_authors<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(names) => names
            .into_iter()
            .filter_map(text_of)
            .collect::<Vec<_>>()
            .join(", "),
        other => text_of(other).unwrap_or_default(),
    })
}

/// Integer years, or numeric strings like `"2021"`. Anything else is undated.
fn lenient_year<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// A list of strings; non-string entries are dropped, a non-list is absent.
fn lenient_tags<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// Prefix of ids assigned to records that arrive without one
pub const POSITIONAL_ID_PREFIX: char = '#';

fn has_usable_id(fields: &serde_json::Map<String, Value>) -> bool {
    match fields.get("id") {
        Some(Value::Number(_)) => true,
        Some(Value::String(s)) => !s.trim().is_empty(),
        _ => false,
    }
}

/// Parse a publications document.
///
/// Accepts a bare array of records, or an object wrapping it under
/// `"publications"`. A record with a missing, null or blank id is kept under
/// the positional id `#<index>`. Ids must be unique, so a real id that
/// collides with a positional one is reported as a duplicate.
pub fn parse_publications(document: Value) -> Result<Vec<PublicationRecord>, LoadError> {
    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("publications") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(LoadError::malformed(
                    "expected an array of publications or {\"publications\": [...]}",
                ));
            }
        },
        _ => {
            return Err(LoadError::malformed(
                "expected an array of publications at the top level",
            ));
        }
    };

    let mut records = Vec::with_capacity(items.len());
    let mut seen = FxHashSet::default();
    for (idx, mut item) in items.into_iter().enumerate() {
        if let Value::Object(fields) = &mut item {
            if !has_usable_id(fields) {
                let positional = format!("{POSITIONAL_ID_PREFIX}{idx}");
                log::warn!("publication #{idx} has no usable id, using {positional}");
                fields.insert("id".to_string(), Value::String(positional));
            }
        }
        let record: PublicationRecord = serde_json::from_value(item)
            .map_err(|e| LoadError::malformed(format!("publication #{idx}: {e}")))?;
        if !seen.insert(record.id.clone()) {
            return Err(LoadError::malformed(format!(
                "duplicate publication id {:?}",
                record.id.as_str()
            )));
        }
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_full_record() {
        let doc = json!([{
            "id": "p1",
            "title": "Tracking Elephants",
            "authors": "A. Author, B. Author",
            "year": 2023,
            "month": "March",
            "venue": "CVPR",
            "category": "recent",
            "tags": ["wildlife"],
            "abstract": "We track.",
            "pdfLink": "https://x/p1.pdf",
            "doiLink": "https://doi.org/10.1/p1",
            "bibtex": "@article{p1}"
        }]);
        let records = parse_publications(doc).unwrap();
        let r = &records[0];
        assert_eq!(r.id.as_str(), "p1");
        assert_eq!(r.year, Some(2023));
        assert_eq!(r.venue.as_deref(), Some("CVPR"));
        assert_eq!(r.abstract_text.as_deref(), Some("We track."));
        assert_eq!(r.pdf_link.as_deref(), Some("https://x/p1.pdf"));
        assert_eq!(r.bibtex.as_deref(), Some("@article{p1}"));
        assert!(r.has_tag("wildlife"));
    }

    #[test]
    fn snake_case_link_fields() {
        let doc = json!([{
            "id": 1,
            "title": "T",
            "publication_venue": "Nature",
            "pdf_link": "a.pdf",
            "doi_link": "doi"
        }]);
        let r = &parse_publications(doc).unwrap()[0];
        assert_eq!(r.id.as_str(), "1");
        assert_eq!(r.venue.as_deref(), Some("Nature"));
        assert_eq!(r.pdf_link.as_deref(), Some("a.pdf"));
        assert_eq!(r.doi_link.as_deref(), Some("doi"));
    }

    #[test]
    fn lenient_optional_fields() {
        let doc = json!([{
            "id": "x",
            "title": "T",
            "authors": ["Ada", "Grace"],
            "year": "2021",
            "month": "",
            "category": 42,
            "tags": "wildlife",
            "abstract": null,
            "bibtex": {"not": "text"}
        }]);
        let r = &parse_publications(doc).unwrap()[0];
        assert_eq!(r.authors, "Ada, Grace");
        assert_eq!(r.year, Some(2021));
        assert_eq!(r.month, None);
        assert_eq!(r.category.as_deref(), Some("42"));
        assert_eq!(r.tags, None);
        assert_eq!(r.abstract_text, None);
        assert_eq!(r.bibtex, None);
    }

    #[test]
    fn garbage_year_is_undated() {
        let doc = json!([
            {"id": "a", "year": null},
            {"id": "b", "year": "in press"},
            {"id": "c", "year": 20.5},
            {"id": "d"}
        ]);
        let records = parse_publications(doc).unwrap();
        assert!(records.iter().all(|r| r.year.is_none()));
    }

    #[test]
    fn tag_list_drops_non_strings() {
        let doc = json!([{"id": "a", "tags": ["wildlife", 3, null, " geospatial "]}]);
        let r = &parse_publications(doc).unwrap()[0];
        assert_eq!(
            r.tags.as_deref(),
            Some(&["wildlife".to_string(), "geospatial".to_string()][..])
        );
    }

    #[test]
    fn envelope_object_accepted() {
        let doc = json!({"publications": [{"id": "a"}, {"id": "b"}]});
        assert_eq!(parse_publications(doc).unwrap().len(), 2);
    }

    #[test]
    fn wrong_top_level_is_malformed() {
        for doc in [json!("nope"), json!({"items": []}), json!(3)] {
            let err = parse_publications(doc).unwrap_err();
            assert!(matches!(err, LoadError::Malformed { .. }));
        }
    }

    #[test]
    fn missing_id_gets_positional_id() {
        let doc = json!([
            {"title": "Good paper", "year": 2023},
            {"id": "b", "title": "B"},
            {"id": "  ", "title": "Blank"},
            {"id": null, "title": "Null"}
        ]);
        let records = parse_publications(doc).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["#0", "b", "#2", "#3"]);
        assert_eq!(records[0].title, "Good paper");
        assert_eq!(records[0].year, Some(2023));
    }

    #[test]
    fn real_id_colliding_with_positional_is_duplicate() {
        let err = parse_publications(json!([{"title": "x"}, {"id": "#0"}])).unwrap_err();
        assert!(format!("{err}").contains("duplicate publication id"));
    }

    #[test]
    fn non_object_entry_is_malformed() {
        let err = parse_publications(json!([{"id": "a"}, "stray"])).unwrap_err();
        assert!(format!("{err}").contains("publication #1"));
    }

    #[test]
    fn bibtex_and_abstract_kept_verbatim() {
        let bibtex = "  @article{x,\n  title={T}\n}\n";
        let doc = json!([{"id": "x", "bibtex": bibtex, "abstract": " Indented.\n", "month": " May "}]);
        let r = &parse_publications(doc).unwrap()[0];
        assert_eq!(r.bibtex.as_deref(), Some(bibtex));
        assert_eq!(r.abstract_text.as_deref(), Some(" Indented.\n"));
        assert_eq!(r.month.as_deref(), Some("May"));

        let blank = &parse_publications(json!([{"id": "y", "bibtex": " \n "}])).unwrap()[0];
        assert_eq!(blank.bibtex, None);
    }

    #[test]
    fn duplicate_id_is_malformed() {
        let err = parse_publications(json!([{"id": 7}, {"id": "7"}])).unwrap_err();
        assert!(format!("{err}").contains("duplicate publication id"));
    }

    #[test]
    fn empty_document_is_ok() {
        assert!(parse_publications(json!([])).unwrap().is_empty());
    }
}
