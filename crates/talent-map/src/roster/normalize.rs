//! Turn loosely-structured rows into [`Person`] records.
//!
//! Exports from different tools name their columns differently ("Job Title",
//! "Position", "Current Title"), so every field is resolved through an ordered
//! alias list matched against whitespace- and case-normalized headers.

use super::table::Row;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Placeholder name for rows without any usable name column.
pub const UNKNOWN_NAME: &str = "Unknown";

const COMPANY_COLUMNS: &[&str] = &["Company", "Current Company", "Employer", "Organization"];
const FIRST_NAME_COLUMNS: &[&str] = &["First Name", "FirstName", "First"];
const LAST_NAME_COLUMNS: &[&str] = &["Last Name", "LastName", "Last"];
const FULL_NAME_COLUMNS: &[&str] = &["Name", "Full Name"];
const TITLE_COLUMNS: &[&str] = &["Title", "Job Title", "Position", "Current Title"];
const LOCATION_COLUMNS: &[&str] = &["Location", "Office", "City", "Geography"];
const LINKEDIN_COLUMNS: &[&str] = &["LinkedIn", "LinkedIn URL", "Profile URL"];
const EMAIL_COLUMNS: &[&str] = &["Email", "Email Address"];

/// A person from the export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub title: String,
    pub location: String,
    pub linkedin: String,
    pub email: String,
    pub company: String,
}

impl Person {
    /// Whether this record carries a real name and should be aggregated.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty() && self.name != UNKNOWN_NAME
    }
}

/// Case-insensitive company substring filter. An empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct CompanyFilter {
    needle: Option<String>,
}

impl CompanyFilter {
    pub fn new(company: Option<&str>) -> Self {
        let needle = company
            .filter(|c| !c.is_empty())
            .map(str::to_lowercase);
        Self { needle }
    }

    /// Rows with an empty company always pass.
    pub fn accepts(&self, company: &str) -> bool {
        match &self.needle {
            Some(needle) if !company.is_empty() => company.to_lowercase().contains(needle),
            _ => true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }
}

fn normalize_column_name(name: &str) -> String {
    name.trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Value of the first alias present in the row, or `""`.
///
/// When several headers normalize to the same name, the rightmost column wins.
fn find_column<'a>(row: &'a Row, aliases: &[&str]) -> &'a str {
    aliases
        .iter()
        .find_map(|alias| {
            let wanted = normalize_column_name(alias);
            row.fields
                .iter()
                .rev()
                .find(|(header, _)| normalize_column_name(header) == wanted)
                .map(|(_, value)| value.as_str())
        })
        .unwrap_or("")
}

/// Build a person from a row. Returns `None` when the company filter rejects it.
pub fn person_from_row(row: &Row, filter: &CompanyFilter) -> Option<Person> {
    let company = find_column(row, COMPANY_COLUMNS);
    if !filter.accepts(company) {
        return None;
    }

    let first = find_column(row, FIRST_NAME_COLUMNS);
    let last = find_column(row, LAST_NAME_COLUMNS);
    let joined = [first, last]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let name = if !joined.is_empty() {
        joined
    } else {
        match find_column(row, FULL_NAME_COLUMNS) {
            "" => UNKNOWN_NAME.to_string(),
            full => full.to_string(),
        }
    };

    Some(Person {
        name,
        title: find_column(row, TITLE_COLUMNS).to_string(),
        location: find_column(row, LOCATION_COLUMNS).to_string(),
        linkedin: find_column(row, LINKEDIN_COLUMNS).to_string(),
        email: find_column(row, EMAIL_COLUMNS).to_string(),
        company: company.to_string(),
    })
}

/// Normalize every row, dropping filtered-out and nameless records.
pub fn normalize_rows(rows: &[Row], filter: &CompanyFilter) -> Vec<Person> {
    let mut filtered = 0usize;
    let mut nameless = 0usize;
    let mut people = Vec::with_capacity(rows.len());

    for row in rows {
        match person_from_row(row, filter) {
            None => filtered += 1,
            Some(person) if !person.has_name() => nameless += 1,
            Some(person) => people.push(person),
        }
    }

    if filtered > 0 || nameless > 0 {
        debug!(filtered, nameless, kept = people.len(), "dropped roster rows");
    }
    people
}
