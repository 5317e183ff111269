//! Labsite Publications - filter, group and render the lab's publication list
//!
//! Loads the publications document once per session, derives filtered and
//! grouped views from user-selected criteria, and hands them to a
//! swappable renderer.
//!
//! # Example
//!
//! ```no_run
//! use labsite_core::DocumentSource;
//! use labsite_publications::{
//!     EngineConfig, Gesture, PublicationSession, PublicationStore, Renderer, TextRenderer,
//! };
//!
//! let store = PublicationStore::new(DocumentSource::parse("data/publications/publications.json"));
//! let mut session = PublicationSession::new(store, EngineConfig::default());
//! session.init(Some("?tag=wildlife"));
//! let view = session.apply(Gesture::SelectYear(Some(2023)));
//! print!("{}", TextRenderer.render(&view));
//! ```

pub mod config;
pub mod filter;
pub mod group;
pub mod record;
pub mod render;
pub mod research;
pub mod session;
pub mod store;
pub mod view;
pub mod vocabulary;

// Re-exports for convenience
pub use config::{EngineConfig, FilterDim, GroupBy};
pub use filter::{FilterCriteria, apply_filters};
pub use group::{Group, GroupKey, build_year_options, group_and_order};
pub use record::{PublicationId, PublicationRecord, parse_publications};
pub use render::{HtmlRenderer, Renderer, TextRenderer};
pub use research::{ResearchProject, load_projects, publications_link};
pub use session::{Gesture, PublicationSession, tag_from_query};
pub use store::{PublicationStore, lookup_by_id};
pub use view::PublicationView;
pub use vocabulary::{Tag, TagVocabulary};
