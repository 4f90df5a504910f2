use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Industry segment a career path or assignment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CareerCategory {
    Cooking,
    Hotel,
    Bakery,
    Events,
    #[default]
    Other,
}

impl CareerCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cooking => "cooking",
            Self::Hotel => "hotel",
            Self::Bakery => "bakery",
            Self::Events => "events",
            Self::Other => "other",
        }
    }
}

impl FromStr for CareerCategory {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "cooking" => Ok(Self::Cooking),
            "hotel" => Ok(Self::Hotel),
            "bakery" => Ok(Self::Bakery),
            "events" => Ok(Self::Events),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::InvalidCareerCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for CareerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
