use serde::Deserialize;
use ypg_core::{College, Interest};
use ypg_session::Registration;

/// Sign-up form. `college` and `interest` are catalog ids or free text.
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub college: String,
    pub interest: String,
}

impl From<RegisterRequest> for Registration {
    fn from(req: RegisterRequest) -> Self {
        Registration {
            name: req.name,
            email: req.email,
            password: req.password,
            college: College::from_id(&req.college),
            interest: Interest::from_id(&req.interest),
        }
    }
}
