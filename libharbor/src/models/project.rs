//! Project, access-log and membership types.

use super::ListOptions;
use crate::client::{Query, ToQuery};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A Harbor project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub project_id: i64,
    pub owner_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
    pub deleted: bool,
    pub owner_name: String,
    pub togglable: bool,
    #[serde(rename = "current_user_role_id")]
    pub role: i64,
    pub repo_count: i64,
    pub metadata: HashMap<String, String>,
}

/// Payload for creating a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRequest {
    #[serde(rename = "project_name")]
    pub name: String,
    /// Deprecated by Harbor; kept for replication-created projects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<i32>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl ProjectRequest {
    /// A request for a project called `name` with no metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a metadata entry such as `public` or `auto_scan`.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Filters for listing projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProjectsOptions {
    pub list: ListOptions,
    pub name: Option<String>,
    pub public: Option<bool>,
    pub owner: Option<String>,
}

impl ToQuery for ListProjectsOptions {
    fn append_query(&self, query: &mut Query) {
        self.list.append_query(query);
        query.push_opt("name", self.name.as_deref());
        query.push_opt("public", self.public);
        query.push_opt("owner", self.owner.as_deref());
    }
}

/// A recorded user action on a project resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessLog {
    pub log_id: i64,
    pub username: String,
    pub project_id: i64,
    pub repo_name: String,
    pub repo_tag: String,
    pub guid: String,
    pub operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op_time: Option<DateTime<Utc>>,
}

/// Filters for listing access logs.
///
/// Time bounds are sent as unix timestamps in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListLogOptions {
    pub list: ListOptions,
    pub username: Option<String>,
    pub repository: Option<String>,
    pub tag: Option<String>,
    pub operations: Vec<String>,
    pub begin_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl ToQuery for ListLogOptions {
    fn append_query(&self, query: &mut Query) {
        self.list.append_query(query);
        query.push_opt("username", self.username.as_deref());
        query.push_opt("repository", self.repository.as_deref());
        query.push_opt("tag", self.tag.as_deref());
        for operation in &self.operations {
            query.push("operation", operation);
        }
        query.push_opt("begin_timestamp", self.begin_time.map(|t| t.timestamp()));
        query.push_opt("end_timestamp", self.end_time.map(|t| t.timestamp()));
    }
}

/// Payload for adding a member or changing member roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRequest {
    pub username: String,
    pub roles: Vec<i64>,
}

/// A project role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    pub role_id: i64,
    pub role_code: String,
    #[serde(rename = "role_name")]
    pub name: String,
    pub role_mask: i64,
}
