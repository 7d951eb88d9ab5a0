use super::{CommandOutput, render};
use crate::context::AppContext;
use crate::format::{Formattable, format_size, format_timestamp, table};
use libharbor::models::{ListRepositoriesOptions, RepoRecord, TagResp, VulnerabilityItem};
use tabled::Tabled;

#[derive(Tabled)]
struct RepoRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "PULLS")]
    pulls: i64,
    #[tabled(rename = "STARS")]
    stars: i64,
    #[tabled(rename = "UPDATED")]
    updated: String,
}

impl Formattable for Vec<RepoRecord> {
    fn format_pretty(&self) -> String {
        let rows = self
            .iter()
            .map(|repo| RepoRow {
                name: repo.name.clone(),
                pulls: repo.pull_count,
                stars: repo.star_count,
                updated: format_timestamp(repo.update_time.as_ref()),
            })
            .collect();
        table(rows, "No repositories found.")
    }
}

#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "TAG")]
    name: String,
    #[tabled(rename = "DIGEST")]
    digest: String,
    #[tabled(rename = "SIZE")]
    size: String,
    #[tabled(rename = "PLATFORM")]
    platform: String,
    #[tabled(rename = "SCAN")]
    scan: String,
    #[tabled(rename = "CREATED")]
    created: String,
}

/// Shortens `sha256:0123...` to the first 12 hex characters.
fn short_digest(digest: &str) -> String {
    let hex = digest.split_once(':').map_or(digest, |(_, hex)| hex);
    hex.chars().take(12).collect()
}

impl Formattable for Vec<TagResp> {
    fn format_pretty(&self) -> String {
        let rows = self
            .iter()
            .map(|tag| TagRow {
                name: tag.detail.name.clone(),
                digest: short_digest(&tag.detail.digest),
                size: format_size(u64::try_from(tag.detail.size).unwrap_or(0)),
                platform: format!("{}/{}", tag.detail.os, tag.detail.architecture),
                scan: tag
                    .scan_overview
                    .as_ref()
                    .map(|s| s.status.clone())
                    .unwrap_or_else(|| "-".to_string()),
                created: format_timestamp(tag.detail.created.as_ref()),
            })
            .collect();
        table(rows, "No tags found.")
    }
}

/// Harbor 1.x severity levels.
pub fn severity_label(severity: i64) -> &'static str {
    match severity {
        1 => "None",
        2 => "Unknown",
        3 => "Low",
        4 => "Medium",
        5 => "High",
        _ => "-",
    }
}

#[derive(Tabled)]
struct VulnerabilityRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "SEVERITY")]
    severity: &'static str,
    #[tabled(rename = "PACKAGE")]
    package: String,
    #[tabled(rename = "VERSION")]
    version: String,
    #[tabled(rename = "FIXED IN")]
    fixed: String,
}

impl Formattable for Vec<VulnerabilityItem> {
    fn format_pretty(&self) -> String {
        let rows = self
            .iter()
            .map(|item| VulnerabilityRow {
                id: item.id.clone(),
                severity: severity_label(item.severity),
                package: item.pkg.clone(),
                version: item.version.clone(),
                fixed: item.fixed.clone(),
            })
            .collect();
        table(rows, "No vulnerabilities found.")
    }
}

/// List repositories, optionally of a single project
pub fn handle_repo_list(ctx: &AppContext, project_id: Option<i64>) -> CommandOutput {
    let options = ListRepositoriesOptions {
        project_id,
        ..ListRepositoriesOptions::default()
    };
    render(ctx.harbor.repositories().list(&options), ctx.format)
}

/// List tags of a repository
pub fn handle_repo_tags(ctx: &AppContext, project: &str, repo: &str) -> CommandOutput {
    render(ctx.harbor.repositories().tags(project, repo), ctx.format)
}

/// List vulnerabilities of an image
pub fn handle_repo_vulns(ctx: &AppContext, repo: &str, tag: &str) -> CommandOutput {
    render(
        ctx.harbor.repositories().vulnerabilities(repo, tag),
        ctx.format,
    )
}
