//! Aggregation: people → location groups → departments → tiers.

pub mod builder;
pub mod merge;
pub mod model;

pub use builder::{build_departments, build_talent_map, group_by_location};
pub use merge::merge_shards;
pub use model::{
    DepartmentBucket, GroupKey, LocationCount, LocationGroup, LocationSummary, OrgChartEntry,
    Summary, TalentMap, TierBucket,
};
