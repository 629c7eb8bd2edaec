//! Output data model handed to the renderer.
//!
//! Everything here is built once by the aggregator and then only read.

use crate::classify::Tier;
use crate::geo::ResolvedLocation;
use crate::roster::Person;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Label used for people with an empty location.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Identity of a location bucket.
///
/// Resolved locations are keyed by their coordinates rounded to two decimals, so
/// "SF" and "San Francisco" share a bucket. Unresolved ones are keyed by raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Coordinates { lat: String, lng: String },
    Unresolved(String),
}

impl GroupKey {
    pub fn for_location(resolved: Option<&ResolvedLocation>, raw: &str) -> Self {
        match resolved {
            Some(loc) => GroupKey::Coordinates {
                lat: round2(loc.lat),
                lng: round2(loc.lng),
            },
            None => GroupKey::Unresolved(unresolved_label(raw)),
        }
    }

    /// Display form of the key, using `label` for the resolved case.
    pub fn render(&self, label: &str) -> String {
        match self {
            GroupKey::Coordinates { lat, lng } => format!("{label}|{lat}|{lng}"),
            GroupKey::Unresolved(text) => text.clone(),
        }
    }
}

/// Label for a location that did not resolve.
pub fn unresolved_label(raw: &str) -> String {
    match raw.trim() {
        "" => UNKNOWN_LOCATION.to_string(),
        text => text.to_string(),
    }
}

fn round2(value: f64) -> String {
    // Adding 0.0 turns -0.0 into 0.0.
    format!("{:.2}", value + 0.0)
}

/// People sharing a location bucket, in input order.
#[derive(Debug, Clone)]
pub struct LocationGroup {
    pub key: GroupKey,
    pub label: String,
    pub lat: f64,
    pub lng: f64,
    pub employees: Vec<Person>,
}

/// The slice of a [`Person`] shown on an org-chart card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgChartEntry {
    pub name: String,
    pub title: String,
    pub location: String,
    pub linkedin: String,
}

impl From<&Person> for OrgChartEntry {
    fn from(p: &Person) -> Self {
        Self {
            name: p.name.clone(),
            title: p.title.clone(),
            location: p.location.clone(),
            linkedin: p.linkedin.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierBucket {
    pub level: String,
    pub employees: Vec<OrgChartEntry>,
}

impl TierBucket {
    pub fn new(tier: Tier) -> Self {
        Self {
            level: tier.level_name().to_string(),
            employees: Vec::new(),
        }
    }
}

/// One department at one location. `hierarchy` is ordered most senior first and
/// only holds tiers with members.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DepartmentBucket {
    pub total: usize,
    pub hierarchy: BTreeMap<Tier, TierBucket>,
}

impl DepartmentBucket {
    pub fn push(&mut self, tier: Tier, entry: OrgChartEntry) {
        self.hierarchy
            .entry(tier)
            .or_insert_with(|| TierBucket::new(tier))
            .employees
            .push(entry);
        self.total += 1;
    }
}

/// A location as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationSummary {
    #[serde(skip)]
    pub group: GroupKey,
    pub key: String,
    pub label: String,
    pub lat: f64,
    pub lng: f64,
    pub count: usize,
    pub departments: IndexMap<String, DepartmentBucket>,
}

/// The complete payload for the rendering layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentMap {
    pub company_name: String,
    pub total_employees: usize,
    pub locations: Vec<LocationSummary>,
    pub tier_level_names: BTreeMap<Tier, &'static str>,
    pub department_colors: IndexMap<&'static str, &'static str>,
}

impl TalentMap {
    /// Flat head-count view, in the same order as `locations`.
    pub fn summary(&self) -> Summary {
        Summary {
            total: self.total_employees,
            locations: self
                .locations
                .iter()
                .map(|loc| LocationCount {
                    label: loc.label.clone(),
                    count: loc.count,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub locations: Vec<LocationCount>,
}
