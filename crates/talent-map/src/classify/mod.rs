//! Title classification: department and seniority tier from free-text job titles.
//!
//! Both classifiers are ordered rule tables where the first matching entry wins.
//! Table order encodes priority and must not be rearranged.

pub mod department;
pub mod tier;

pub use department::{department_colors, infer_department, OTHER_DEPARTMENT};
pub use tier::{infer_tier, tier_level_names, Tier};
