pub mod forgot_password_request;
pub mod login_request;
pub mod register_request;
pub mod session;
pub mod session_response;
pub mod verify_email_request;
