//! Grouping, ordering and year-selector options

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use crate::config::{EngineConfig, GroupBy};
use crate::record::PublicationRecord;

/// Key of one display group. `Display` gives the section heading, capitalised
/// the same way for every variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Year(i32),
    Undated,
    Category(String),
    Other,
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Year(y) => write!(f, "{y}"),
            Self::Undated => f.write_str("Undated"),
            Self::Category(c) => {
                let mut chars = c.chars();
                match chars.next() {
                    Some(first) => write!(f, "{}{}", first.to_uppercase(), chars.as_str()),
                    None => Ok(()),
                }
            }
            Self::Other => f.write_str("Other"),
        }
    }
}

/// Records sharing a key, in source order
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a> {
    pub key: GroupKey,
    pub records: Vec<&'a PublicationRecord>,
}

/// Group filtered records for display. Never fails; empty groups are omitted.
pub fn group_and_order<'a>(
    filtered: &[&'a PublicationRecord],
    config: &EngineConfig,
) -> Vec<Group<'a>> {
    match config.group_by {
        GroupBy::Year => group_by_year(filtered),
        GroupBy::Category => group_by_category(filtered, &config.categories),
    }
}

/// Descending by year, undated last.
fn group_by_year<'a>(filtered: &[&'a PublicationRecord]) -> Vec<Group<'a>> {
    let mut dated: BTreeMap<Reverse<i32>, Vec<&'a PublicationRecord>> = BTreeMap::new();
    let mut undated = Vec::new();
    for &record in filtered {
        match record.year {
            Some(y) => dated.entry(Reverse(y)).or_default().push(record),
            None => undated.push(record),
        }
    }

    let mut groups: Vec<Group<'a>> = dated
        .into_iter()
        .map(|(Reverse(y), records)| Group {
            key: GroupKey::Year(y),
            records,
        })
        .collect();
    if !undated.is_empty() {
        groups.push(Group {
            key: GroupKey::Undated,
            records: undated,
        });
    }
    groups
}

/// Known categories in configured order, then "Other".
fn group_by_category<'a>(
    filtered: &[&'a PublicationRecord],
    categories: &[String],
) -> Vec<Group<'a>> {
    // one slot per known category plus the trailing "other" bucket
    let mut buckets: Vec<Vec<&'a PublicationRecord>> = vec![Vec::new(); categories.len() + 1];
    for &record in filtered {
        let slot = record
            .category
            .as_deref()
            .and_then(|c| categories.iter().position(|known| known == c))
            .unwrap_or(categories.len());
        buckets[slot].push(record);
    }

    buckets
        .into_iter()
        .enumerate()
        .filter(|(_, records)| !records.is_empty())
        .map(|(slot, records)| Group {
            key: categories
                .get(slot)
                .map_or(GroupKey::Other, |c| GroupKey::Category(c.clone())),
            records,
        })
        .collect()
}

/// Distinct years present, strictly descending. Undated records contribute nothing.
pub fn build_year_options(all: &[PublicationRecord]) -> Vec<i32> {
    let years: BTreeSet<i32> = all.iter().filter_map(|r| r.year).collect();
    years.into_iter().rev().collect()
}
