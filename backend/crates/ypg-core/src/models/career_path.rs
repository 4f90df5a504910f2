use crate::CareerCategory;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub salary: String,
    pub education: String,
    pub growth: String,
    pub category: CareerCategory,
    /// Inactive careers are hidden from the student explorer.
    pub active: bool,
}

/// Explorer filter: optional category plus case-insensitive text search
/// over title and description.
#[derive(Debug, Clone, Default)]
pub struct CareerFilter {
    pub category: Option<CareerCategory>,
    pub search: Option<String>,
}

impl CareerFilter {
    pub fn matches(&self, career: &CareerPath) -> bool {
        let matches_category = self.category.is_none_or(|c| career.category == c);
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                career.title.to_lowercase().contains(&term)
                    || career.description.to_lowercase().contains(&term)
            }
        };

        matches_category && matches_search
    }
}
