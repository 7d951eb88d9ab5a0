//! Pagination and system-wide types.

use crate::client::{Query, ToQuery};
use serde::{Deserialize, Serialize};

/// Pagination parameters shared by list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Page of results to retrieve, starting at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Number of results per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl ListOptions {
    /// Requests page `page` with `page_size` results.
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }
}

impl ToQuery for ListOptions {
    fn append_query(&self, query: &mut Query) {
        query.push_opt("page", self.page);
        query.push_opt("page_size", self.page_size);
    }
}

/// Project and repository counts visible to the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticMap {
    pub private_project_count: u64,
    pub private_repo_count: u64,
    pub public_project_count: u64,
    pub public_repo_count: u64,
    /// Only reported to administrators.
    pub total_project_count: u64,
    /// Only reported to administrators.
    pub total_repo_count: u64,
}
