//! Engine configuration: how results are grouped and which filter
//! dimensions a page exposes.

use std::collections::BTreeSet;

use serde::Deserialize;

/// Grouping mode for the rendered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    Year,
    Category,
}

impl GroupBy {
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "year" => Some(Self::Year),
            "category" => Some(Self::Category),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Category => "category",
        }
    }
}

impl std::fmt::Display for GroupBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A filterable dimension of a publication
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterDim {
    Year,
    Tag,
    Category,
}

impl FilterDim {
    pub const ALL: [Self; 3] = [Self::Year, Self::Tag, Self::Category];

    pub fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Tag => "tag",
            Self::Category => "category",
        }
    }
}

impl std::fmt::Display for FilterDim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Categories recognized when grouping by category, in display order.
/// Anything else lands in the trailing "Other" group.
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "recent",
    "journal",
    "conference",
    "book",
    "chapter",
    "patent",
    "thesis",
];

/// Configuration for one publications page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub group_by: GroupBy,
    pub filter_dims: BTreeSet<FilterDim>,
    pub categories: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            group_by: GroupBy::Year,
            filter_dims: FilterDim::ALL.into_iter().collect(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl EngineConfig {
    pub fn allows(&self, dim: FilterDim) -> bool {
        self.filter_dims.contains(&dim)
    }
}
