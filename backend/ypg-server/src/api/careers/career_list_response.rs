use serde::Serialize;
use ypg_core::CareerPath;

#[derive(Debug, Serialize)]
pub struct CareerListResponse {
    pub careers: Vec<CareerPath>,
}
