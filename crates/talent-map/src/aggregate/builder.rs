//! Build the nested location → department → tier structure from people.

use super::model::{
    unresolved_label, DepartmentBucket, GroupKey, LocationGroup, LocationSummary, OrgChartEntry,
    TalentMap,
};
use crate::classify::{department_colors, infer_department, infer_tier, tier_level_names};
use crate::geo::resolve_location;
use crate::roster::Person;
use indexmap::IndexMap;
use tracing::debug;

/// Group people by resolved location, in order of first appearance.
///
/// A bucket takes its label and coordinates from the first person who lands in
/// it. Unresolved locations get `(0, 0)` and their raw text as label.
pub fn group_by_location(people: &[Person]) -> Vec<LocationGroup> {
    let mut groups: IndexMap<GroupKey, LocationGroup> = IndexMap::new();
    let mut unresolved = 0usize;

    for person in people {
        let resolved = resolve_location(&person.location);
        if resolved.is_none() {
            unresolved += 1;
        }
        let key = GroupKey::for_location(resolved.as_ref(), &person.location);

        groups
            .entry(key.clone())
            .or_insert_with(|| match resolved {
                Some(loc) => LocationGroup {
                    key,
                    label: loc.label,
                    lat: loc.lat,
                    lng: loc.lng,
                    employees: Vec::new(),
                },
                None => LocationGroup {
                    key,
                    label: unresolved_label(&person.location),
                    lat: 0.0,
                    lng: 0.0,
                    employees: Vec::new(),
                },
            })
            .employees
            .push(person.clone());
    }

    debug!(groups = groups.len(), unresolved, "grouped people by location");
    groups.into_values().collect()
}

/// Classify each person's title and file them under department and tier.
///
/// Departments keep first-seen order; tiers are ordered most senior first.
pub fn build_departments(people: &[Person]) -> IndexMap<String, DepartmentBucket> {
    let mut departments: IndexMap<String, DepartmentBucket> = IndexMap::new();
    for person in people {
        let department = infer_department(&person.title);
        let tier = infer_tier(&person.title);
        departments
            .entry(department.to_string())
            .or_default()
            .push(tier, OrgChartEntry::from(person));
    }
    departments
}

/// Run the full aggregation.
///
/// Locations are sorted by descending head count; ties keep the order in which
/// each location first appeared in `people`.
pub fn build_talent_map(company_name: &str, people: &[Person]) -> TalentMap {
    let mut locations: Vec<LocationSummary> = group_by_location(people)
        .into_iter()
        .map(|group| LocationSummary {
            key: group.key.render(&group.label),
            count: group.employees.len(),
            departments: build_departments(&group.employees),
            group: group.key,
            label: group.label,
            lat: group.lat,
            lng: group.lng,
        })
        .collect();
    locations.sort_by(|a, b| b.count.cmp(&a.count));

    TalentMap {
        company_name: company_name.to_string(),
        total_employees: people.len(),
        locations,
        tier_level_names: tier_level_names(),
        department_colors: department_colors(),
    }
}
