pub mod portfolio;
pub mod portfolio_item_response;
pub mod portfolio_list_response;
pub mod upload_portfolio_request;
