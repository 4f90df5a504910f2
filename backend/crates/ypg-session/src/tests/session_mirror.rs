use crate::{
    DurableStorage, FileStorage, MemoryStorage, MockBackend, SessionMirror, TOKEN_KEY, USER_KEY,
};

use std::sync::Arc;

use proptest::prelude::*;
use tempfile::TempDir;
use ypg_core::{AdminIdentity, College, Identity, Interest, StudentIdentity};

#[test]
fn given_empty_storage_when_load_then_logged_out_without_corruption() {
    let mirror = SessionMirror::new(Arc::new(MemoryStorage::new()));

    let result = mirror.load().unwrap();

    assert!(result.identity.is_none());
    assert!(result.corruption_error.is_none());
}

#[test]
fn given_saved_identity_when_load_then_equal_identity() {
    let temp = TempDir::new().unwrap();
    let mirror = SessionMirror::new(Arc::new(FileStorage::open(temp.path()).unwrap()));
    let identity = MockBackend::demo_student();

    mirror.save(&identity).unwrap();
    let result = mirror.load().unwrap();

    assert_eq!(result.identity, Some(identity));
}

#[test]
fn given_saved_identity_then_record_uses_portal_shape() {
    let storage = Arc::new(MemoryStorage::new());
    let mirror = SessionMirror::new(storage.clone());

    mirror.save(&MockBackend::demo_student()).unwrap();

    let raw = storage.get(USER_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["role"], "student");
    assert_eq!(json["id"], "student-1");
    assert_eq!(json["emailVerified"], true);
    assert_eq!(json["onboardingCompleted"], true);
}

#[test]
fn given_malformed_record_when_load_then_discarded_and_reported() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(USER_KEY, "{not json").unwrap();
    let mirror = SessionMirror::new(storage.clone());

    let result = mirror.load().unwrap();

    assert!(result.identity.is_none());
    assert!(result.corruption_error.is_some());
    assert_eq!(storage.get(USER_KEY).unwrap(), None);
}

#[test]
fn given_record_with_unknown_role_when_load_then_treated_as_logged_out() {
    let storage = Arc::new(MemoryStorage::new());
    storage
        .set(
            USER_KEY,
            r#"{"role":"guest","id":"t-1","name":"T","email":"t@example.com"}"#,
        )
        .unwrap();
    let mirror = SessionMirror::new(storage.clone());

    let result = mirror.load().unwrap();

    assert!(result.identity.is_none());
    assert!(result.corruption_error.is_some());
}

#[test]
fn given_user_and_token_when_clear_then_both_removed() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(TOKEN_KEY, "abc").unwrap();
    let mirror = SessionMirror::new(storage.clone());
    mirror.save(&MockBackend::demo_admin()).unwrap();

    mirror.clear().unwrap();

    assert!(storage.is_empty());
}

fn arb_student() -> impl Strategy<Value = Identity> {
    (
        "[a-z0-9-]{1,16}",
        "[A-Za-z ]{1,24}",
        "[a-z]{1,8}@[a-z]{1,8}\\.org",
        prop_oneof![
            Just(College::Harlow),
            Just(College::Westminster),
            "[A-Za-z ]{1,16}".prop_map(|s| College::from_id(&s)),
        ],
        prop_oneof![
            Just(Interest::Chef),
            Just(Interest::Events),
            "[A-Za-z ]{1,16}".prop_map(|s| Interest::from_id(&s)),
        ],
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(id, name, email, college, interest, email_verified, onboarding_completed)| {
                Identity::Student(StudentIdentity {
                    id,
                    name,
                    email,
                    college,
                    interest,
                    email_verified,
                    onboarding_completed,
                })
            },
        )
}

fn arb_admin() -> impl Strategy<Value = Identity> {
    (
        "[a-z0-9-]{1,16}",
        "[A-Za-z ]{1,24}",
        "[a-z]{1,8}@[a-z]{1,8}\\.org",
    )
        .prop_map(|(id, name, email)| Identity::Admin(AdminIdentity { id, name, email }))
}

fn arb_identity() -> impl Strategy<Value = Identity> {
    prop_oneof![arb_student(), arb_admin()]
}

proptest! {
    #[test]
    fn persisted_identity_reloads_equal(identity in arb_identity()) {
        let mirror = SessionMirror::new(Arc::new(MemoryStorage::new()));

        mirror.save(&identity).unwrap();
        let loaded = mirror.load().unwrap().identity;

        prop_assert_eq!(loaded, Some(identity));
    }
}
