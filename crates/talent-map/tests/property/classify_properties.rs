use proptest::prelude::*;
use talent_map::aggregate::build_talent_map;
use talent_map::classify::{department_colors, infer_department, infer_tier};
use talent_map::geo::resolve_location;
use talent_map::Person;

fn person_strategy() -> impl Strategy<Value = Person> {
    let locations = prop::sample::select(vec![
        "SF",
        "San Francisco, CA",
        "Seattle",
        "London, UK",
        "Nowhereville",
        "",
        "Tel Aviv",
    ]);
    let titles = prop::sample::select(vec![
        "CEO",
        "Senior Director of Engineering",
        "Software Engineer",
        "ML Engineer",
        "QA Analyst",
        "Barista",
        "Head of Safety",
        "",
    ]);
    ("[A-Z][a-z]{1,8}", titles, locations).prop_map(|(name, title, location)| Person {
        name,
        title: title.to_string(),
        location: location.to_string(),
        ..Person::default()
    })
}

proptest! {
    #[test]
    fn tier_is_always_in_range(title in ".{0,80}") {
        prop_assert!(infer_tier(&title).rank() <= 9);
    }

    #[test]
    fn department_always_has_a_color(title in ".{0,80}") {
        let colors = department_colors();
        let dept = infer_department(&title);
        prop_assert!(colors.contains_key(dept), "no color for {}", dept);
    }

    #[test]
    fn classification_ignores_case(title in "[a-zA-Z .]{0,40}") {
        prop_assert_eq!(infer_department(&title), infer_department(&title.to_uppercase()));
        prop_assert_eq!(infer_tier(&title), infer_tier(&title.to_lowercase()));
    }

    #[test]
    fn resolution_is_pure_and_keeps_raw_label(raw in ".{0,40}") {
        let first = resolve_location(&raw);
        prop_assert_eq!(&first, &resolve_location(&raw));
        if let Some(loc) = first {
            prop_assert_eq!(loc.label, raw.trim());
        }
    }

    #[test]
    fn aggregation_is_deterministic_and_sorted(people in prop::collection::vec(person_strategy(), 0..40)) {
        let a = serde_json::to_string(&build_talent_map("Acme", &people)).unwrap();
        let b = serde_json::to_string(&build_talent_map("Acme", &people)).unwrap();
        prop_assert_eq!(&a, &b);

        let map = build_talent_map("Acme", &people);
        prop_assert_eq!(map.total_employees, people.len());
        let total: usize = map.locations.iter().map(|l| l.count).sum();
        prop_assert_eq!(total, people.len());
        for pair in map.locations.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }
}
