//! Display-ready view model handed to a renderer

use crate::group::Group;

pub const LOADING_MESSAGE: &str = "Loading publications...";
pub const LOAD_ERROR_MESSAGE: &str =
    "Sorry, there was an error loading the publications. Please try again later.";
pub const NO_RESULTS_MESSAGE: &str = "No publications found matching your criteria.";

/// What the publications surface should show right now
#[derive(Debug, Clone, PartialEq)]
pub enum PublicationView<'a> {
    /// Nothing loaded yet
    Loading,
    /// Load failed; `detail` is the underlying error text
    Error { detail: String },
    /// Loaded, but the active filters match nothing
    Empty { year_options: Vec<i32> },
    Groups {
        year_options: Vec<i32>,
        /// Active tag, resolved to its display name when a vocabulary is loaded
        tag_label: Option<String>,
        groups: Vec<Group<'a>>,
    },
}

impl PublicationView<'_> {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Year selector options, empty unless the list is loaded.
    pub fn year_options(&self) -> &[i32] {
        match self {
            Self::Empty { year_options } | Self::Groups { year_options, .. } => year_options,
            Self::Loading | Self::Error { .. } => &[],
        }
    }

    /// Total records across all groups.
    pub fn record_count(&self) -> usize {
        match self {
            Self::Groups { groups, .. } => groups.iter().map(|g| g.records.len()).sum(),
            _ => 0,
        }
    }
}
