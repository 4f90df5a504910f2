use std::str::FromStr;

use serde::Deserialize;
use ypg_core::{CareerCategory, CareerFilter, Result as CoreErrorResult};

/// Query parameters for the career explorer. Empty values mean "any".
#[derive(Debug, Default, Deserialize)]
pub struct ListCareersQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ListCareersQuery {
    pub fn into_filter(self) -> CoreErrorResult<CareerFilter> {
        let category = match self.category.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(CareerCategory::from_str(value)?),
        };

        Ok(CareerFilter {
            category,
            search: self.search,
        })
    }
}
