use crate::{CareerCategory, CareerFilter, CareerPath};

use std::str::FromStr;

fn career(title: &str, description: &str, category: CareerCategory) -> CareerPath {
    CareerPath {
        id: title.to_lowercase().replace(' ', "-"),
        title: title.into(),
        description: description.into(),
        salary: "£25,000 - £40,000".into(),
        education: "Certification".into(),
        growth: "Steady".into(),
        category,
        active: true,
    }
}

#[test]
fn test_empty_filter_matches_everything() {
    let filter = CareerFilter::default();

    assert!(filter.matches(&career("Sous Chef", "Kitchen", CareerCategory::Cooking)));
}

#[test]
fn test_category_filter() {
    let filter = CareerFilter {
        category: Some(CareerCategory::Hotel),
        search: None,
    };

    assert!(filter.matches(&career("Hotel Manager", "Operations", CareerCategory::Hotel)));
    assert!(!filter.matches(&career("Pastry Chef", "Desserts", CareerCategory::Bakery)));
}

#[test]
fn test_search_is_case_insensitive_over_title_and_description() {
    let filter = CareerFilter {
        category: None,
        search: Some("DESSERT".into()),
    };

    assert!(filter.matches(&career("Pastry Chef", "Create desserts", CareerCategory::Bakery)));
    assert!(!filter.matches(&career("Hotel Manager", "Guests", CareerCategory::Hotel)));
}

#[test]
fn test_blank_search_is_ignored() {
    let filter = CareerFilter {
        category: None,
        search: Some("   ".into()),
    };

    assert!(filter.matches(&career("Hotel Manager", "Guests", CareerCategory::Hotel)));
}

#[test]
fn test_career_category_from_str() {
    assert_eq!(
        CareerCategory::from_str("bakery").unwrap(),
        CareerCategory::Bakery
    );
    assert!(CareerCategory::from_str("aviation").is_err());
}
