//! Merge location summaries computed over separate slices of the input.
//!
//! Grouping keys depend only on each record, so shards can be aggregated
//! independently and combined afterwards.

use super::model::{GroupKey, LocationSummary, TierBucket};
use indexmap::IndexMap;

impl LocationSummary {
    /// Fold another summary for the same location into this one.
    ///
    /// Counts are summed and tier member lists concatenated, `self` first.
    pub fn absorb(&mut self, other: LocationSummary) {
        self.count += other.count;
        for (name, theirs) in other.departments {
            let ours = self.departments.entry(name).or_default();
            ours.total += theirs.total;
            for (tier, bucket) in theirs.hierarchy {
                ours.hierarchy
                    .entry(tier)
                    .or_insert_with(|| TierBucket::new(tier))
                    .employees
                    .extend(bucket.employees);
            }
        }
    }
}

/// Merge per-shard location lists, then re-sort by descending count.
///
/// The first shard to mention a location supplies its label and key; among equal
/// counts, locations keep the order in which the merge first saw them.
pub fn merge_shards<I>(shards: I) -> Vec<LocationSummary>
where
    I: IntoIterator<Item = Vec<LocationSummary>>,
{
    let mut merged: IndexMap<GroupKey, LocationSummary> = IndexMap::new();
    for shard in shards {
        for loc in shard {
            match merged.get_mut(&loc.group) {
                Some(existing) => existing.absorb(loc),
                None => {
                    merged.insert(loc.group.clone(), loc);
                }
            }
        }
    }

    let mut locations: Vec<LocationSummary> = merged.into_values().collect();
    locations.sort_by(|a, b| b.count.cmp(&a.count));
    locations
}
