use std::str::FromStr;

use serde::Deserialize;
use ypg_core::{College, MemberFilter, MemberStatus, Result as CoreErrorResult};

/// `?search=&college=&status=`; empty values mean "any".
#[derive(Debug, Default, Deserialize)]
pub struct ListMembersQuery {
    pub search: Option<String>,
    pub college: Option<String>,
    pub status: Option<String>,
}

impl ListMembersQuery {
    pub fn into_filter(self) -> CoreErrorResult<MemberFilter> {
        let college = non_empty(self.college.as_deref()).map(College::from_id);
        let status = match non_empty(self.status.as_deref()) {
            Some(value) => Some(MemberStatus::from_str(value)?),
            None => None,
        };

        Ok(MemberFilter {
            search: self.search,
            college,
            status,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
