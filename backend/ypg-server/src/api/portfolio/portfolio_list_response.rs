use serde::Serialize;
use ypg_core::PortfolioItem;

#[derive(Debug, Serialize)]
pub struct PortfolioListResponse {
    pub items: Vec<PortfolioItem>,
}
