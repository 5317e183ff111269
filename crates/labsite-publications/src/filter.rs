//! Filter criteria and the pure filtering pass over loaded records

use std::collections::BTreeSet;

use crate::config::FilterDim;
use crate::record::PublicationRecord;

/// Active filter constraints. `None` on a dimension = no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub year: Option<i32>,
    pub tag: Option<String>,
    pub category: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.tag.is_none() && self.category.is_none()
    }

    /// Keep only the constraints on enabled dimensions.
    pub fn restricted_to(&self, dims: &BTreeSet<FilterDim>) -> Self {
        let keep = |dim: FilterDim| {
            let allowed = dims.contains(&dim);
            if !allowed {
                log::debug!("{dim} filter disabled for this page, ignoring");
            }
            allowed
        };
        Self {
            year: self.year.filter(|_| keep(FilterDim::Year)),
            tag: self.tag.clone().filter(|_| keep(FilterDim::Tag)),
            category: self.category.clone().filter(|_| keep(FilterDim::Category)),
        }
    }

    /// Semantic match: every present constraint must hold.
    ///
    /// Undated records never match a concrete year, untagged records never
    /// match a concrete tag.
    pub fn matches(&self, record: &PublicationRecord) -> bool {
        if let Some(year) = self.year {
            if record.year != Some(year) {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !record.has_tag(tag) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if record.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Every record satisfying `criteria`, in source order.
///
/// Takes any iterator of borrowed records so a filtered view can be
/// filtered again without cloning.
pub fn apply_filters<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a PublicationRecord>
where
    I: IntoIterator<Item = &'a PublicationRecord>,
{
    records.into_iter().filter(|r| criteria.matches(r)).collect()
}
