//! Response bodies for the admin collections

use serde::Serialize;
use ypg_core::{Assignment, CareerPath, MemberRecord};

#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub users: Vec<MemberRecord>,
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub user: MemberRecord,
}

#[derive(Debug, Serialize)]
pub struct CareerResponse {
    pub career: CareerPath,
}

#[derive(Debug, Serialize)]
pub struct AssignmentListResponse {
    pub assignments: Vec<Assignment>,
}

#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub assignment: Assignment,
}
