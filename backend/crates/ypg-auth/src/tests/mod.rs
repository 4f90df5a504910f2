
use ypg_core::{AdminIdentity, College, Identity, Interest, StudentIdentity};

pub(crate) fn student(email_verified: bool, onboarding_completed: bool) -> Identity {
    Identity::Student(StudentIdentity {
        id: "student-1".into(),
        name: "Jamie Smith".into(),
        email: "student@example.com".into(),
        college: College::Harlow,
        interest: Interest::Chef,
        email_verified,
        onboarding_completed,
    })
}

pub(crate) fn admin() -> Identity {
    Identity::Admin(AdminIdentity {
        id: "admin-1".into(),
        name: "YPG Admin".into(),
        email: "admin@ypg.org".into(),
    })
}
