use crate::{AdminIdentity, College, Identity, Interest, Role, StudentIdentity};

use proptest::prelude::*;

fn student() -> StudentIdentity {
    StudentIdentity {
        id: "student-1".into(),
        name: "Jamie Smith".into(),
        email: "student@example.com".into(),
        college: College::Harlow,
        interest: Interest::Chef,
        email_verified: true,
        onboarding_completed: false,
    }
}

fn admin() -> AdminIdentity {
    AdminIdentity {
        id: "admin-1".into(),
        name: "YPG Admin".into(),
        email: "admin@ypg.org".into(),
    }
}

#[test]
fn given_student_when_serialize_then_role_tag_and_camel_case_fields() {
    let identity = Identity::from(student());

    let json: serde_json::Value = serde_json::to_value(&identity).unwrap();

    assert_eq!(json["role"], "student");
    assert_eq!(json["college"], "harlow");
    assert_eq!(json["emailVerified"], true);
    assert_eq!(json["onboardingCompleted"], false);
}

#[test]
fn given_admin_when_serialize_then_no_student_fields() {
    let identity = Identity::from(admin());

    let json: serde_json::Value = serde_json::to_value(&identity).unwrap();

    assert_eq!(json["role"], "admin");
    assert!(json.get("emailVerified").is_none());
    assert!(json.get("onboardingCompleted").is_none());
}

#[test]
fn given_unknown_role_tag_when_deserialize_then_error() {
    let json = r#"{"role":"guest","id":"t-1","name":"T","email":"t@example.com"}"#;

    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn given_registered_student_then_flags_default_to_false() {
    let registered = StudentIdentity::registered(
        "student-42",
        "Sam",
        "sam@example.com",
        College::Southend,
        Interest::Baker,
    );

    assert!(!registered.email_verified);
    assert!(!registered.onboarding_completed);
}

#[test]
fn given_admin_then_never_awaits_verification_or_onboarding() {
    let identity = Identity::from(admin());

    assert_eq!(identity.role(), Role::Admin);
    assert!(identity.is_admin());
    assert!(!identity.is_student());
    assert!(!identity.awaiting_email_verification());
    assert!(!identity.awaiting_onboarding());
    assert!(identity.as_student().is_none());
}

#[test]
fn given_student_with_pending_onboarding_then_awaiting_onboarding() {
    let identity = Identity::from(student());

    assert!(!identity.awaiting_email_verification());
    assert!(identity.awaiting_onboarding());
}

fn arb_college() -> impl Strategy<Value = College> {
    prop_oneof![
        Just(College::Harlow),
        Just(College::Westminster),
        Just(College::Southend),
        Just(College::Colchester),
        "[a-z ]{1,20}".prop_map(|s| College::from_id(&s)),
    ]
}

fn arb_interest() -> impl Strategy<Value = Interest> {
    prop_oneof![
        Just(Interest::Chef),
        Just(Interest::Hotel),
        Just(Interest::Baker),
        "[a-z ]{1,20}".prop_map(|s| Interest::from_id(&s)),
    ]
}

proptest! {
    #[test]
    fn prop_student_identity_json_round_trip(
        id in "student-[0-9]{1,13}",
        name in "\\PC{0,30}",
        email in "[a-z]{1,10}@[a-z]{1,10}\\.org",
        college in arb_college(),
        interest in arb_interest(),
        email_verified in any::<bool>(),
        onboarding_completed in any::<bool>(),
    ) {
        let original = Identity::Student(StudentIdentity {
            id,
            name,
            email,
            college,
            interest,
            email_verified,
            onboarding_completed,
        });

        let json = serde_json::to_string(&original).unwrap();
        let restored: Identity = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(original, restored);
    }
}
