//! Single-writer cache of the loaded publications document

use std::sync::Arc;

use labsite_core::{DocumentSource, LoadError, fetch_document};

use crate::record::{PublicationRecord, parse_publications};

/// Cache lifecycle. Moves to `Loaded` exactly once; a failed load stays `Unloaded`.
#[derive(Debug, Clone)]
enum CacheState {
    Unloaded,
    Loaded(Arc<[PublicationRecord]>),
}

/// Owns the publications list for one session.
///
/// The loader is the only writer; filtering works on borrowed snapshots.
#[derive(Debug)]
pub struct PublicationStore {
    source: DocumentSource,
    state: CacheState,
    fetches: usize,
}

impl PublicationStore {
    pub fn new(source: DocumentSource) -> Self {
        Self {
            source,
            state: CacheState::Unloaded,
            fetches: 0,
        }
    }

    /// Store that starts out loaded, for callers that already hold the records.
    pub fn from_records(source: DocumentSource, records: Vec<PublicationRecord>) -> Self {
        Self {
            source,
            state: CacheState::Loaded(records.into()),
            fetches: 0,
        }
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, CacheState::Loaded(_))
    }

    /// Number of times the backing document was actually fetched.
    pub fn fetch_count(&self) -> usize {
        self.fetches
    }

    /// Fetch and parse the document on first call; afterwards return the cache.
    ///
    /// Errors are returned as-is, never retried here. A later call after a
    /// failure tries again.
    pub fn load_all(&mut self) -> Result<Arc<[PublicationRecord]>, LoadError> {
        if let CacheState::Loaded(records) = &self.state {
            return Ok(Arc::clone(records));
        }

        self.fetches += 1;
        let document = fetch_document(&self.source)?;
        let records: Arc<[PublicationRecord]> = parse_publications(document)?.into();
        log::info!("Loaded {} publications from {}", records.len(), self.source);

        self.state = CacheState::Loaded(Arc::clone(&records));
        Ok(records)
    }

    /// Cached records, if loaded.
    pub fn records(&self) -> Option<&[PublicationRecord]> {
        match &self.state {
            CacheState::Loaded(records) => Some(&records[..]),
            CacheState::Unloaded => None,
        }
    }
}

/// Resolve a citation-detail request.
pub fn lookup_by_id<'a>(all: &'a [PublicationRecord], id: &str) -> Option<&'a PublicationRecord> {
    let id = id.trim();
    all.iter().find(|r| r.id.as_str() == id)
}
