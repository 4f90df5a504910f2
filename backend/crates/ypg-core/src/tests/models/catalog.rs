use crate::{College, Interest};

#[test]
fn test_known_college_ids_round_trip() {
    for college in College::KNOWN {
        assert_eq!(College::from_id(college.id()), college);
    }
}

#[test]
fn test_unknown_college_is_carried_as_free_text() {
    let college = College::from_id("Cambridge Regional College");

    assert_eq!(
        college,
        College::Other("Cambridge Regional College".to_string())
    );
    assert_eq!(college.display_name(), "Cambridge Regional College");
}

#[test]
fn test_other_id_has_catalog_display_name() {
    assert_eq!(College::from_id("other").display_name(), "Other Institution");
    assert_eq!(
        Interest::from_id("other").display_name(),
        "Other Culinary Interest"
    );
}

#[test]
fn test_college_serializes_as_id_string() {
    let json = serde_json::to_string(&College::Westminster).unwrap();
    assert_eq!(json, "\"westminster\"");

    let parsed: College = serde_json::from_str("\"colchester\"").unwrap();
    assert_eq!(parsed, College::Colchester);
}

#[test]
fn test_known_interest_ids_round_trip() {
    for interest in Interest::KNOWN {
        assert_eq!(Interest::from_id(interest.id()), interest);
    }
}

#[test]
fn test_interest_display_names() {
    assert_eq!(Interest::Chef.display_name(), "Chef / Cooking");
    assert_eq!(Interest::Events.to_string(), "Events & Catering");
}
