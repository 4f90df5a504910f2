use serde::Serialize;
use ypg_core::PortfolioItem;

#[derive(Debug, Serialize)]
pub struct PortfolioItemResponse {
    pub item: PortfolioItem,
}
