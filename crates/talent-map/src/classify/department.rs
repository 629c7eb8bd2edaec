//! Infer a department from job-title keywords.

use indexmap::IndexMap;

/// Department returned when no keyword matches.
pub const OTHER_DEPARTMENT: &str = "Other";

/// Ordered keyword table. Earlier entries take priority, and keywords carrying
/// leading or trailing spaces only match as whole words.
const DEPARTMENT_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "AI & Machine Learning",
        &["machine learning", "ml ", " ml", "applied scientist"],
    ),
    ("Perception", &["perception"]),
    ("Motion Planning", &["planning", "planner", "prediction"]),
    ("Simulation", &["simulation", " sim ", "simulation"]),
    ("Software Engineering", &["software engineer"]),
    ("Systems Engineering", &["system engineer", "systems engineer"]),
    ("Hardware Engineering", &["hardware"]),
    (
        "Infrastructure & Platform",
        &["infrastructure", "platform", "cloud"],
    ),
    ("Data Engineering", &["data engineer", "data platform"]),
    (
        "Product Management",
        &["product manager", "product management"],
    ),
    (
        "Product Design",
        &["product design", " ux ", " ui ", "ux design", "ui design"],
    ),
    (
        "Technical Program Management",
        &["program manager", " tpm ", "technical program"],
    ),
    ("Safety", &["safety"]),
    ("Test & Validation", &["test", "validation", "sdet", " qa "]),
    ("Fleet Operations", &["fleet", "operations"]),
];

const DEPARTMENT_COLORS: &[(&str, &str)] = &[
    ("AI & Machine Learning", "#3498DB"),
    ("Perception", "#3498DB"),
    ("Motion Planning", "#3498DB"),
    ("Simulation", "#16A085"),
    ("Software Engineering", "#27AE60"),
    ("Systems Engineering", "#E67E22"),
    ("Hardware Engineering", "#9B59B6"),
    ("Infrastructure & Platform", "#7F8C8D"),
    ("Data Engineering", "#27AE60"),
    ("Product Management", "#E91E63"),
    ("Product Design", "#E91E63"),
    ("Technical Program Management", "#E91E63"),
    ("Safety", "#F39C12"),
    ("Test & Validation", "#F39C12"),
    ("Fleet Operations", "#7F8C8D"),
    (OTHER_DEPARTMENT, "#95A5A6"),
];

/// Classify a job title into a department name.
///
/// The title is lower-cased and padded with a space on each side, so " qa "
/// matches "QA Analyst" while "test" still matches anywhere in the title.
pub fn infer_department(title: &str) -> &'static str {
    if title.trim().is_empty() {
        return OTHER_DEPARTMENT;
    }

    let padded = format!(" {} ", title.to_lowercase());
    DEPARTMENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| padded.contains(kw)))
        .map(|(dept, _)| *dept)
        .unwrap_or(OTHER_DEPARTMENT)
}

/// Department → display color, in table order.
pub fn department_colors() -> IndexMap<&'static str, &'static str> {
    DEPARTMENT_COLORS.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_department() {
        assert_eq!(
            infer_department("Senior Machine Learning Engineer"),
            "AI & Machine Learning"
        );
        assert_eq!(infer_department("QA Analyst"), "Test & Validation");
        assert_eq!(infer_department("Barista"), OTHER_DEPARTMENT);
        assert_eq!(infer_department("Perception Engineer"), "Perception");
        assert_eq!(
            infer_department("Senior Software Engineer"),
            "Software Engineering"
        );
        assert_eq!(infer_department("Fleet Technician"), "Fleet Operations");
    }

    #[test]
    fn test_table_order_is_priority() {
        // "planning" (Motion Planning) is listed before "software engineer".
        assert_eq!(
            infer_department("Software Engineer, Planning"),
            "Motion Planning"
        );
        // "platform" (Infrastructure) is listed before "data platform".
        assert_eq!(
            infer_department("Data Platform Engineer"),
            "Infrastructure & Platform"
        );
    }

    #[test]
    fn test_space_delimited_keywords() {
        assert_eq!(infer_department("ML Engineer"), "AI & Machine Learning");
        assert_eq!(infer_department("Staff Engineer, ML"), "AI & Machine Learning");
        assert_eq!(infer_department("Senior UX Designer"), "Product Design");
        assert_eq!(infer_department("TPM"), "Technical Program Management");
        assert_eq!(infer_department("Simulation Lead"), "Simulation");
        assert_eq!(infer_department("Tools Engineer, Sim Infra"), "Simulation");
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(infer_department(""), OTHER_DEPARTMENT);
        assert_eq!(infer_department("   "), OTHER_DEPARTMENT);
    }

    #[test]
    fn test_every_department_has_a_color() {
        let colors = department_colors();
        for (dept, _) in DEPARTMENT_KEYWORDS {
            assert!(colors.contains_key(dept), "{dept} has no color");
        }
        assert!(colors.contains_key(OTHER_DEPARTMENT));
        assert_eq!(colors.keys().last(), Some(&OTHER_DEPARTMENT));
    }
}
