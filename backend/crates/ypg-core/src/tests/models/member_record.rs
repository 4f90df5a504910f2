use crate::{College, Interest, MemberFilter, MemberRecord, MemberStatus};

use chrono::NaiveDate;

fn member(name: &str, email: &str, college: College, verified: bool, onboarded: bool) -> MemberRecord {
    MemberRecord {
        id: format!("student-{}", name.len()),
        name: name.into(),
        email: email.into(),
        college,
        interest: Interest::Chef,
        email_verified: verified,
        onboarding_completed: onboarded,
        joined_date: NaiveDate::from_ymd_opt(2023, 5, 10).unwrap(),
    }
}

#[test]
fn test_status_is_active_only_when_verified_and_onboarded() {
    assert_eq!(
        member("A", "a@x.org", College::Harlow, true, true).status(),
        MemberStatus::Active
    );
    assert_eq!(
        member("B", "b@x.org", College::Harlow, true, false).status(),
        MemberStatus::Pending
    );
    assert_eq!(
        member("C", "c@x.org", College::Harlow, false, true).status(),
        MemberStatus::Pending
    );
}

#[test]
fn test_search_matches_name_or_email() {
    let filter = MemberFilter {
        search: Some("johnson".into()),
        ..Default::default()
    };

    assert!(filter.matches(&member(
        "Sarah Johnson",
        "sarah@example.com",
        College::Westminster,
        true,
        false
    )));
    assert!(filter.matches(&member(
        "Sam",
        "sam.johnson@example.com",
        College::Westminster,
        true,
        false
    )));
    assert!(!filter.matches(&member(
        "Olivia Wilson",
        "olivia@example.com",
        College::Colchester,
        false,
        false
    )));
}

#[test]
fn test_college_and_status_filters_combine() {
    let filter = MemberFilter {
        search: None,
        college: Some(College::Harlow),
        status: Some(MemberStatus::Active),
    };

    assert!(filter.matches(&member("Jamie", "j@x.org", College::Harlow, true, true)));
    assert!(!filter.matches(&member("David", "d@x.org", College::Harlow, false, true)));
    assert!(!filter.matches(&member("Mike", "m@x.org", College::Southend, true, true)));
}

#[test]
fn test_member_record_serializes_camel_case_keys() {
    let json = serde_json::to_value(member("A", "a@x.org", College::Harlow, true, false)).unwrap();

    assert_eq!(json["emailVerified"], true);
    assert_eq!(json["onboardingCompleted"], false);
    assert_eq!(json["joinedDate"], "2023-05-10");
    assert!(json.get("email_verified").is_none());
}
