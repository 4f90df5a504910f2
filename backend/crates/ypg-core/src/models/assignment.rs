use crate::CareerCategory;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub category: CareerCategory,
    pub active: bool,
}
