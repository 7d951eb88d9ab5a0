//! Repository resource.
//!
//! Repository names usually contain the project, as in `library/nginx`. They
//! are substituted into paths as given.

use crate::client::{CallResult, Method};
use crate::harbor::Harbor;
use crate::models::{
    ListRepositoriesOptions, ManifestResp, RepoRecord, RepoResp, RepositoryDescription, Signature,
    TagResp, VulnerabilityItem,
};
use crate::routes::RouteParams;

const ROOT: &str = "repositories.root";
const BASE: &str = "repositories.base";
const TAGS: &str = "repositories.tags.root";
const TAG: &str = "repositories.tags.base";
const MANIFEST: &str = "repositories.tags.manifest";
const SCAN: &str = "repositories.tags.scan";
const VULNERABILITY: &str = "repositories.tags.vulnerability";
const SIGNATURES: &str = "repositories.signatures";
const TOP: &str = "repositories.top";

pub(crate) const ROUTES: &[&str] = &[
    ROOT,
    BASE,
    TAGS,
    TAG,
    MANIFEST,
    SCAN,
    VULNERABILITY,
    SIGNATURES,
    TOP,
];

fn repository(repo: &str) -> RouteParams {
    RouteParams::new().with("repo_name", repo)
}

fn image(repo: &str, tag: &str) -> RouteParams {
    repository(repo).with("tag", tag)
}

/// Operations on repositories and their tags.
pub struct RepositoriesResource<'h> {
    harbor: &'h Harbor,
}

impl<'h> RepositoriesResource<'h> {
    pub(crate) fn new(harbor: &'h Harbor) -> Self {
        Self { harbor }
    }

    /// List repositories matching the filters.
    pub fn list(&self, options: &ListRepositoriesOptions) -> CallResult<Vec<RepoRecord>> {
        self.harbor
            .call(Method::Get, ROOT, &RouteParams::new(), |r| r.query(options))
    }

    /// Update the description of `repo`.
    pub fn update(&self, repo: &str, description: &RepositoryDescription) -> CallResult<()> {
        self.harbor
            .call_unit(Method::Put, BASE, &repository(repo), |r| r.json(description))
    }

    /// Delete `repo` with all its tags.
    pub fn delete(&self, repo: &str) -> CallResult<()> {
        self.harbor
            .call_unit(Method::Delete, BASE, &repository(repo), |r| r)
    }

    pub fn tag(&self, project: &str, repo: &str, tag: &str) -> CallResult<TagResp> {
        let params = RouteParams::new()
            .with("project_name", project)
            .with("repo_name", repo)
            .with("tag", tag);
        self.harbor.call(Method::Get, TAG, &params, |r| r)
    }

    pub fn delete_tag(&self, project: &str, repo: &str, tag: &str) -> CallResult<()> {
        let params = RouteParams::new()
            .with("project_name", project)
            .with("repo_name", repo)
            .with("tag", tag);
        self.harbor.call_unit(Method::Delete, TAG, &params, |r| r)
    }

    /// List tags of `project/repo`.
    pub fn tags(&self, project: &str, repo: &str) -> CallResult<Vec<TagResp>> {
        let params = RouteParams::new()
            .with("project_name", project)
            .with("repo_name", repo);
        self.harbor.call(Method::Get, TAGS, &params, |r| r)
    }

    /// Manifest of an image; `version` selects `v1` or `v2` when given.
    pub fn manifest(&self, repo: &str, tag: &str, version: Option<&str>) -> CallResult<ManifestResp> {
        self.harbor
            .call(Method::Get, MANIFEST, &image(repo, tag), |r| match version {
                Some(version) => r.query_pair("version", version),
                None => r,
            })
    }

    /// Trigger a vulnerability scan of an image.
    pub fn scan(&self, repo: &str, tag: &str) -> CallResult<()> {
        self.harbor
            .call_unit(Method::Post, SCAN, &image(repo, tag), |r| r)
    }

    /// Vulnerabilities found by the last scan of an image.
    pub fn vulnerabilities(&self, repo: &str, tag: &str) -> CallResult<Vec<VulnerabilityItem>> {
        self.harbor
            .call(Method::Get, VULNERABILITY, &image(repo, tag), |r| r)
    }

    /// Notary signatures of `repo`.
    pub fn signatures(&self, repo: &str) -> CallResult<Vec<Signature>> {
        self.harbor
            .call(Method::Get, SIGNATURES, &repository(repo), |r| r)
    }

    /// Most popular public repositories; Harbor returns ten unless `count` is given.
    pub fn top(&self, count: Option<u32>) -> CallResult<Vec<RepoResp>> {
        self.harbor
            .call(Method::Get, TOP, &RouteParams::new(), |r| match count {
                Some(count) => r.query_pair("count", count),
                None => r,
            })
    }
}
