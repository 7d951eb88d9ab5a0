//! Project resource.

use crate::client::{CallResult, Method};
use crate::harbor::Harbor;
use crate::models::{
    AccessLog, ListLogOptions, ListProjectsOptions, MemberRequest, Project, ProjectRequest, Role,
    User,
};
use crate::routes::RouteParams;
use std::collections::HashMap;

const ROOT: &str = "projects.root";
const BASE: &str = "projects.base";
const LOGS: &str = "projects.logs.root";
const METADATAS: &str = "projects.metadatas.root";
const METADATA: &str = "projects.metadatas.base";
const MEMBERS: &str = "projects.members.root";
const MEMBER: &str = "projects.members.base";

pub(crate) const ROUTES: &[&str] = &[ROOT, BASE, LOGS, METADATAS, METADATA, MEMBERS, MEMBER];

fn project(id: i64) -> RouteParams {
    RouteParams::new().with("project_id", id)
}

/// Operations on projects and their metadata, members and logs.
pub struct ProjectsResource<'h> {
    harbor: &'h Harbor,
}

impl<'h> ProjectsResource<'h> {
    pub(crate) fn new(harbor: &'h Harbor) -> Self {
        Self { harbor }
    }

    /// List projects matching the filters.
    pub fn list(&self, options: &ListProjectsOptions) -> CallResult<Vec<Project>> {
        self.harbor
            .call(Method::Get, ROOT, &RouteParams::new(), |r| r.query(options))
    }

    /// Check whether a project named `name` exists.
    ///
    /// Harbor answers 200 when it exists and 404 otherwise.
    pub fn check(&self, name: &str) -> CallResult<()> {
        self.harbor.call_unit(Method::Head, ROOT, &RouteParams::new(), |r| {
            r.query_pair("project_name", name)
        })
    }

    /// Create a project.
    pub fn create(&self, request: &ProjectRequest) -> CallResult<()> {
        self.harbor
            .call_unit(Method::Post, ROOT, &RouteParams::new(), |r| r.json(request))
    }

    pub fn get(&self, id: i64) -> CallResult<Project> {
        self.harbor.call(Method::Get, BASE, &project(id), |r| r)
    }

    /// Update a project. Harbor only applies the metadata.
    pub fn update(&self, id: i64, project_update: &Project) -> CallResult<()> {
        self.harbor
            .call_unit(Method::Put, BASE, &project(id), |r| r.json(project_update))
    }

    pub fn delete(&self, id: i64) -> CallResult<()> {
        self.harbor.call_unit(Method::Delete, BASE, &project(id), |r| r)
    }

    /// List access logs of a project.
    pub fn logs(&self, id: i64, options: &ListLogOptions) -> CallResult<Vec<AccessLog>> {
        self.harbor
            .call(Method::Get, LOGS, &project(id), |r| r.query(options))
    }

    /// All metadata of a project.
    pub fn metadata(&self, id: i64) -> CallResult<HashMap<String, String>> {
        self.harbor.call(Method::Get, METADATAS, &project(id), |r| r)
    }

    pub fn add_metadata(&self, id: i64, metadata: &HashMap<String, String>) -> CallResult<()> {
        self.harbor
            .call_unit(Method::Post, METADATAS, &project(id), |r| r.json(metadata))
    }

    /// A single metadata entry, returned as a one-element map.
    pub fn metadata_entry(&self, id: i64, name: &str) -> CallResult<HashMap<String, String>> {
        let params = project(id).with("meta_name", name);
        self.harbor.call(Method::Get, METADATA, &params, |r| r)
    }

    pub fn update_metadata(
        &self,
        id: i64,
        name: &str,
        metadata: &HashMap<String, String>,
    ) -> CallResult<()> {
        let params = project(id).with("meta_name", name);
        self.harbor
            .call_unit(Method::Put, METADATA, &params, |r| r.json(metadata))
    }

    pub fn delete_metadata(&self, id: i64, name: &str) -> CallResult<()> {
        let params = project(id).with("meta_name", name);
        self.harbor.call_unit(Method::Delete, METADATA, &params, |r| r)
    }

    /// List project members.
    pub fn members(&self, id: i64) -> CallResult<Vec<User>> {
        self.harbor.call(Method::Get, MEMBERS, &project(id), |r| r)
    }

    pub fn add_member(&self, id: i64, member: &MemberRequest) -> CallResult<()> {
        self.harbor
            .call_unit(Method::Post, MEMBERS, &project(id), |r| r.json(member))
    }

    /// Role of member `user_id` in the project.
    pub fn member_role(&self, id: i64, user_id: i64) -> CallResult<Role> {
        let params = project(id).with("user_id", user_id);
        self.harbor.call(Method::Get, MEMBER, &params, |r| r)
    }

    pub fn update_member_role(
        &self,
        id: i64,
        user_id: i64,
        member: &MemberRequest,
    ) -> CallResult<()> {
        let params = project(id).with("user_id", user_id);
        self.harbor
            .call_unit(Method::Put, MEMBER, &params, |r| r.json(member))
    }

    pub fn delete_member(&self, id: i64, user_id: i64) -> CallResult<()> {
        let params = project(id).with("user_id", user_id);
        self.harbor.call_unit(Method::Delete, MEMBER, &params, |r| r)
    }
}
