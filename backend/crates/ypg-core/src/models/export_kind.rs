use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Reports an administrator can export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    Students,
    Portfolios,
    Activity,
    Colleges,
}

impl ExportKind {
    pub const ALL: [ExportKind; 4] = [
        ExportKind::Students,
        ExportKind::Portfolios,
        ExportKind::Activity,
        ExportKind::Colleges,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Portfolios => "portfolios",
            Self::Activity => "activity",
            Self::Colleges => "colleges",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Students => "Student List",
            Self::Portfolios => "Portfolio Submissions",
            Self::Activity => "Student Activity",
            Self::Colleges => "College Report",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Students => "Export a list of all registered students with their details",
            Self::Portfolios => "Export data about student portfolio uploads",
            Self::Activity => "Export student engagement metrics and activity logs",
            Self::Colleges => "Export student distribution by college/institution",
        }
    }
}

impl FromStr for ExportKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "students" => Ok(Self::Students),
            "portfolios" => Ok(Self::Portfolios),
            "activity" => Ok(Self::Activity),
            "colleges" => Ok(Self::Colleges),
            _ => Err(CoreError::InvalidExportKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ExportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An export job: which report, over which inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub kind: ExportKind,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ExportRequest {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.start > self.end {
            return Err(CoreError::validation(
                "end",
                format!("end date {} is before start date {}", self.end, self.start),
            ));
        }

        Ok(())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Suggested attachment name, e.g. `students_2023-05-01_2023-05-31.csv`.
    pub fn file_name(&self) -> String {
        format!("{}_{}_{}.csv", self.kind.as_str(), self.start, self.end)
    }
}
