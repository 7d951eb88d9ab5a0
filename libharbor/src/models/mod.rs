//! Request and response types of the Harbor management API.
//!
//! Field names follow the JSON wire format. Every response type tolerates
//! missing fields so that older and newer Harbor releases decode alike.

mod common;
mod project;
mod repository;
mod user;

pub use common::{ListOptions, StatisticMap};
pub use project::{
    AccessLog, ListLogOptions, ListProjectsOptions, MemberRequest, Project, ProjectRequest, Role,
};
pub use repository::{
    ComponentsOverview, ComponentsOverviewEntry, ImgScanOverview, ListRepositoriesOptions,
    ManifestResp, RepoRecord, RepoResp, RepositoryDescription, Signature, TagConfig, TagDetail,
    TagResp, VulnerabilityItem,
};
pub use user::{UpdatePassword, UpdateRole, User};
