//! Repository, tag and vulnerability types.

use super::ListOptions;
use crate::client::{Query, ToQuery};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A repository as stored by Harbor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoRecord {
    #[serde(rename = "id")]
    pub repository_id: i64,
    pub name: String,
    pub project_id: i64,
    pub description: String,
    pub pull_count: i64,
    pub star_count: i64,
    pub creation_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

/// A repository entry of the popularity ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoResp {
    pub id: i64,
    pub name: String,
    pub project_id: i64,
    pub description: String,
    pub pull_count: i64,
    pub star_count: i64,
    pub tags_count: i64,
    pub creation_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

/// Filters for listing repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRepositoriesOptions {
    pub list: ListOptions,
    pub project_id: Option<i64>,
    /// Repository name filter.
    pub q: Option<String>,
    pub sort: Option<String>,
}

impl ToQuery for ListRepositoriesOptions {
    fn append_query(&self, query: &mut Query) {
        self.list.append_query(query);
        query.push_opt("project_id", self.project_id);
        query.push_opt("q", self.q.as_deref());
        query.push_opt("sort", self.sort.as_deref());
    }
}

/// Payload for updating a repository description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescription {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Image configuration labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    pub labels: HashMap<String, String>,
}

/// Image details of a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagDetail {
    pub digest: String,
    pub name: String,
    pub size: i64,
    pub architecture: String,
    pub os: String,
    pub docker_version: String,
    pub author: String,
    pub created: Option<DateTime<Utc>>,
    pub config: Option<TagConfig>,
}

/// Notary signature of a tag; hashes are base64 encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Signature {
    pub tag: String,
    pub hashes: HashMap<String, String>,
}

/// Per-severity component count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentsOverviewEntry {
    #[serde(rename = "severity")]
    pub sev: i64,
    pub count: i64,
}

/// Component totals of a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentsOverview {
    pub total: i64,
    pub summary: Vec<ComponentsOverviewEntry>,
}

/// Result overview of an image scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImgScanOverview {
    #[serde(rename = "image_digest")]
    pub digest: String,
    #[serde(rename = "scan_status")]
    pub status: String,
    pub job_id: i64,
    #[serde(rename = "severity")]
    pub sev: i64,
    #[serde(rename = "components", skip_serializing_if = "Option::is_none")]
    pub comp_overview: Option<ComponentsOverview>,
    pub details_key: String,
    pub creation_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

/// A tag with its signature and scan overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagResp {
    #[serde(flatten)]
    pub detail: TagDetail,
    #[serde(default)]
    pub signature: Option<Signature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_overview: Option<ImgScanOverview>,
}

/// A vulnerability found by a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VulnerabilityItem {
    pub id: String,
    pub severity: i64,
    #[serde(rename = "package")]
    pub pkg: String,
    pub version: String,
    pub description: String,
    pub link: String,
    #[serde(rename = "fixedVersion", skip_serializing_if = "String::is_empty")]
    pub fixed: String,
}

/// A manifest and its image configuration, kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestResp {
    pub manifest: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}
