//! Infer a seniority tier (0 = most senior, 9 = individual contributor) from a job title.

use regex::bytes::RegexSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Seniority rank in `0..=9`; lower is more senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tier(u8);

impl Tier {
    pub const TOP: Tier = Tier(0);
    /// Default for titles that match no pattern.
    pub const DEFAULT: Tier = Tier(9);

    /// Build a tier from its rank. Returns `None` above 9.
    pub fn new(rank: u8) -> Option<Self> {
        (rank <= Self::DEFAULT.0).then_some(Tier(rank))
    }

    pub fn rank(self) -> u8 {
        self.0
    }

    /// Human-readable name of this tier's section in the org chart.
    pub fn level_name(self) -> &'static str {
        TIER_LEVEL_NAMES[self.0 as usize]
    }

    /// All tiers, most senior first.
    pub fn all() -> impl Iterator<Item = Tier> {
        (Self::TOP.0..=Self::DEFAULT.0).map(Tier)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const TIER_LEVEL_NAMES: [&str; 10] = [
    "Top Executive",
    "C-Suite Leadership",
    "Senior Directors",
    "Directors & Heads",
    "Senior Managers",
    "Managers & Team Leads",
    "Tech Leads & Principal ICs",
    "Staff Engineers",
    "Senior Engineers",
    "Engineers",
];

/// Precedence ladder, checked top to bottom. A title like "Senior Director of
/// Engineering" satisfies several tiers and must land on the first one.
const TIER_PATTERNS: &[(u8, &[&str])] = &[
    (0, &[r"ceo\b", r"chief executive", r"\bpresident\b"]),
    (
        1,
        &[
            r"cto\b",
            r"cfo\b",
            r"coo\b",
            r"cmo\b",
            r"chief\s+\w+\s+officer",
            r"chief\s+\w+\s+product",
        ],
    ),
    (2, &[r"senior\s+director", r"sr\.?\s+director"]),
    (3, &[r"\bdirector\b", r"head\s+of\s+"]),
    (
        4,
        &[r"senior\s+manager", r"manager\s+ii", r"engineering\s+leader"],
    ),
    (
        5,
        &[
            r"\bmanager\b",
            r"tech\s+lead\s+manager",
            r"\btlm\b",
            r"team\s+lead",
        ],
    ),
    (
        6,
        &[
            r"tech\s+lead",
            r"principal\s+engineer",
            r"principal\s+ic",
            r"principal\s+scientist",
        ],
    ),
    (
        7,
        &[r"staff\s+engineer", r"staff\s+scientist", r"senior\s+staff"],
    ),
    // `senior \w+` catches nearly any "Senior X" title, recruiters included.
    (
        8,
        &[
            r"senior\s+engineer",
            r"senior\s+\w+",
            r"sr\.?\s+engineer",
            r"sr\.?\s+\w+",
        ],
    ),
    (9, &[r"engineer", r"scientist", r"designer", r"analyst"]),
];

static TIER_RULES: LazyLock<Vec<(Tier, RegexSet)>> = LazyLock::new(|| {
    TIER_PATTERNS
        .iter()
        .map(|(rank, patterns)| {
            // Word classes, word boundaries and case folding are ASCII-only;
            // whitespace still covers the Unicode spaces.
            let set = RegexSet::new(
                patterns
                    .iter()
                    .map(|p| format!("(?i-u){}", p.replace(r"\s", r"(?u:\s)"))),
            )
            .expect("tier patterns are valid");
            (Tier(*rank), set)
        })
        .collect()
});

/// Classify a job title into a seniority tier.
pub fn infer_tier(title: &str) -> Tier {
    let title = title.trim();
    if title.is_empty() {
        return Tier::DEFAULT;
    }

    TIER_RULES
        .iter()
        .find(|(_, patterns)| patterns.is_match(title.as_bytes()))
        .map(|(tier, _)| *tier)
        .unwrap_or(Tier::DEFAULT)
}

/// Tier → level name, most senior first.
pub fn tier_level_names() -> BTreeMap<Tier, &'static str> {
    Tier::all().map(|t| (t, t.level_name())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(title: &str) -> u8 {
        infer_tier(title).rank()
    }

    #[test]
    fn test_executives() {
        assert_eq!(rank("CEO"), 0);
        assert_eq!(rank("Co-founder & CEO"), 0);
        assert_eq!(rank("President, Autonomy"), 0);
        assert_eq!(rank("CTO"), 1);
        assert_eq!(rank("Chief Technology Officer"), 1);
        assert_eq!(rank("Chief Product Officer"), 1);
    }

    #[test]
    fn test_precedence_ladder() {
        assert_eq!(rank("Senior Director of Engineering"), 2);
        assert_eq!(rank("Sr. Director, Perception"), 2);
        assert_eq!(rank("Director of Safety"), 3);
        assert_eq!(rank("Head of Simulation"), 3);
        assert_eq!(rank("Senior Manager, Software"), 4);
        assert_eq!(rank("Engineering Manager II"), 4);
        assert_eq!(rank("Engineering Manager"), 5);
        assert_eq!(rank("TLM, Planning"), 5);
        assert_eq!(rank("Tech Lead"), 6);
        assert_eq!(rank("Principal Engineer"), 6);
        assert_eq!(rank("Senior Staff Engineer"), 7);
        assert_eq!(rank("Staff Scientist"), 7);
        assert_eq!(rank("Senior Software Engineer"), 8);
        assert_eq!(rank("Sr Engineer"), 8);
        assert_eq!(rank("Software Engineer"), 9);
        assert_eq!(rank("Data Analyst"), 9);
    }

    #[test]
    fn test_senior_catch_all() {
        // Any "Senior <word>" lands in tier 8, even outside engineering.
        assert_eq!(rank("Senior Recruiter"), 8);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(rank("senior director of engineering"), 2);
        assert_eq!(rank("HEAD OF PERCEPTION"), 3);
    }

    #[test]
    fn test_word_boundaries() {
        // "director" needs word boundaries for tier 3.
        assert_eq!(rank("Directorate Liaison"), 9);
        assert_eq!(rank("Art Director"), 3);
    }

    #[test]
    fn test_ascii_word_classes() {
        // Accented letters are not word characters.
        assert_eq!(rank("Senior Übersetzer"), 9);
        assert_eq!(rank("Sr. Ärztin"), 9);
        assert_eq!(rank("Directoré"), 3);
        assert_eq!(rank("Senior Übersetzer, Engineer"), 9);
    }

    #[test]
    fn test_unicode_whitespace() {
        assert_eq!(rank("Senior\u{a0}Director of Engineering"), 2);
        assert_eq!(rank("Head\u{2003}of Safety"), 3);
    }

    #[test]
    fn test_default_tier() {
        assert_eq!(infer_tier(""), Tier::DEFAULT);
        assert_eq!(infer_tier("   "), Tier::DEFAULT);
        assert_eq!(infer_tier("Barista"), Tier::DEFAULT);
    }

    #[test]
    fn test_level_names() {
        let names = tier_level_names();
        assert_eq!(names.len(), 10);
        assert_eq!(names[&Tier::TOP], "Top Executive");
        assert_eq!(names[&Tier::DEFAULT], "Engineers");
        assert_eq!(Tier::new(2).map(Tier::level_name), Some("Senior Directors"));
        assert!(Tier::new(10).is_none());
    }
}
