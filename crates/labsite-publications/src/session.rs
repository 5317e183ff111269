//! One page session: owns the cache and the active criteria, turns user
//! gestures into re-derived views.

use labsite_core::{DocumentSource, LoadError};
use url::Url;
use url::form_urlencoded;

use crate::config::EngineConfig;
use crate::filter::{FilterCriteria, apply_filters};
use crate::group::{build_year_options, group_and_order};
use crate::record::PublicationRecord;
use crate::store::{PublicationStore, lookup_by_id};
use crate::view::PublicationView;
use crate::vocabulary::TagVocabulary;

/// User actions on the filter controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    SelectYear(Option<i32>),
    SelectTag(Option<String>),
    SelectCategory(Option<String>),
    Reset,
}

/// Read the `tag` parameter from a page URL or a bare query string.
///
/// Accepts `https://lab/publications.html?tag=x`, `publications.html?tag=x`,
/// `?tag=x` and `tag=x`. An empty value counts as absent.
pub fn tag_from_query(input: &str) -> Option<String> {
    let input = input.trim();
    let tag = match Url::parse(input) {
        Ok(url) => url
            .query_pairs()
            .find(|(k, _)| k == "tag")
            .map(|(_, v)| v.into_owned()),
        Err(_) => {
            let query = input.split_once('?').map_or(input, |(_, q)| q);
            form_urlencoded::parse(query.as_bytes())
                .find(|(k, _)| k == "tag")
                .map(|(_, v)| v.into_owned())
        }
    };
    tag.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[derive(Debug)]
enum LoadStatus {
    NotStarted,
    Failed(String),
    Ready,
}

pub struct PublicationSession {
    store: PublicationStore,
    config: EngineConfig,
    criteria: FilterCriteria,
    vocabulary_source: Option<DocumentSource>,
    vocabulary: Option<TagVocabulary>,
    status: LoadStatus,
}

impl PublicationSession {
    pub fn new(store: PublicationStore, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            criteria: FilterCriteria::default(),
            vocabulary_source: None,
            vocabulary: None,
            status: LoadStatus::NotStarted,
        }
    }

    /// Also fetch the tag vocabulary during `init`.
    pub fn with_vocabulary(mut self, source: DocumentSource) -> Self {
        self.vocabulary_source = Some(source);
        self
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> Option<&TagVocabulary> {
        self.vocabulary.as_ref()
    }

    pub fn store(&self) -> &PublicationStore {
        &self.store
    }

    /// Seed criteria from the page query, load documents, derive the first view.
    ///
    /// A load failure is not returned as an error: it becomes the error view.
    pub fn init(&mut self, query: Option<&str>) -> PublicationView<'_> {
        if let Some(tag) = query.and_then(tag_from_query) {
            log::info!("Deep link: filtering on tag {tag:?}");
            self.criteria.tag = Some(tag);
        }

        if let Err(e) = self.load() {
            log::error!("Failed to load publications: {e}");
        }

        if let Some(source) = &self.vocabulary_source {
            match TagVocabulary::load(source) {
                Ok(vocabulary) => self.vocabulary = Some(vocabulary),
                // Optional feature: raw tag ids still work without names
                Err(e) => log::warn!("Tag vocabulary unavailable ({source}): {e}"),
            }
        }

        if let (Some(tag), Some(vocabulary)) = (&self.criteria.tag, &self.vocabulary) {
            if vocabulary.get(tag).is_none() {
                log::warn!("Tag {tag:?} is not in the tag vocabulary");
            }
        }

        self.view()
    }

    /// Load (or reuse) the cached list, recording the outcome for `view`.
    pub fn load(&mut self) -> Result<(), LoadError> {
        match self.store.load_all() {
            Ok(_) => {
                self.status = LoadStatus::Ready;
                Ok(())
            }
            Err(e) => {
                self.status = LoadStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Update criteria from a gesture and re-derive against the cache. Never refetches.
    pub fn apply(&mut self, gesture: Gesture) -> PublicationView<'_> {
        log::debug!("gesture: {gesture:?}");
        match gesture {
            Gesture::SelectYear(year) => self.criteria.year = year,
            Gesture::SelectTag(tag) => self.criteria.tag = tag.filter(|t| !t.is_empty()),
            Gesture::SelectCategory(category) => {
                self.criteria.category = category.filter(|c| !c.is_empty());
            }
            Gesture::Reset => self.criteria = FilterCriteria::default(),
        }
        self.view()
    }

    /// Derive the view for the current state.
    pub fn view(&self) -> PublicationView<'_> {
        let all = match (&self.status, self.store.records()) {
            (LoadStatus::Failed(detail), _) => {
                return PublicationView::Error {
                    detail: detail.clone(),
                };
            }
            (_, Some(all)) => all,
            (_, None) => return PublicationView::Loading,
        };

        let effective = self.criteria.restricted_to(&self.config.filter_dims);
        let filtered = apply_filters(all, &effective);
        let year_options = build_year_options(all);

        if filtered.is_empty() {
            return PublicationView::Empty { year_options };
        }

        let tag_label = effective.tag.as_deref().map(|tag| match &self.vocabulary {
            Some(vocabulary) => vocabulary.display_name(tag).to_string(),
            None => tag.to_string(),
        });

        PublicationView::Groups {
            year_options,
            tag_label,
            groups: group_and_order(&filtered, &self.config),
        }
    }

    /// Citation detail for one record, if loaded and present.
    pub fn citation(&self, id: &str) -> Option<&PublicationRecord> {
        lookup_by_id(self.store.records()?, id)
    }
}
