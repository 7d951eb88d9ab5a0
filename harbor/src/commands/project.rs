use super::{CommandOutput, render};
use crate::context::AppContext;
use crate::format::{Formattable, format_timestamp, table};
use libharbor::models::{ListOptions, ListProjectsOptions, Project};
use tabled::Tabled;

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "PUBLIC")]
    public: String,
    #[tabled(rename = "REPOS")]
    repos: i64,
    #[tabled(rename = "CREATED")]
    created: String,
}

fn visibility(project: &Project) -> String {
    project
        .metadata
        .get("public")
        .cloned()
        .unwrap_or_else(|| "-".to_string())
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            id: project.project_id,
            name: project.name.clone(),
            public: visibility(project),
            repos: project.repo_count,
            created: format_timestamp(project.creation_time.as_ref()),
        }
    }
}

impl Formattable for Project {
    fn format_pretty(&self) -> String {
        let mut lines = vec![
            format!("ID:       {}", self.project_id),
            format!("Name:     {}", self.name),
            format!("Owner:    {}", self.owner_name),
            format!("Public:   {}", visibility(self)),
            format!("Repos:    {}", self.repo_count),
            format!("Created:  {}", format_timestamp(self.creation_time.as_ref())),
            format!("Updated:  {}", format_timestamp(self.update_time.as_ref())),
        ];
        let mut keys: Vec<_> = self.metadata.keys().filter(|k| *k != "public").collect();
        keys.sort();
        for key in keys {
            lines.push(format!("  {}: {}", key, self.metadata[key]));
        }
        lines.join("\n")
    }
}

impl Formattable for Vec<Project> {
    fn format_pretty(&self) -> String {
        table(self.iter().map(ProjectRow::from).collect(), "No projects found.")
    }
}

/// List projects, optionally filtered by name
pub fn handle_project_list(
    ctx: &AppContext,
    name: Option<&str>,
    page: Option<u32>,
    page_size: Option<u32>,
) -> CommandOutput {
    let options = ListProjectsOptions {
        list: ListOptions { page, page_size },
        name: name.map(str::to_string),
        ..ListProjectsOptions::default()
    };
    render(ctx.harbor.projects().list(&options), ctx.format)
}

/// Show one project
pub fn handle_project_get(ctx: &AppContext, id: i64) -> CommandOutput {
    render(ctx.harbor.projects().get(id), ctx.format)
}

/// Check that a project exists
pub fn handle_project_check(ctx: &AppContext, name: &str) -> CommandOutput {
    match ctx.harbor.projects().check(name).into_result() {
        Ok(()) => Ok(format!("Project '{}' exists", name)),
        Err(errors) => Err(errors.into_iter().map(|e| e.to_string()).collect()),
    }
}

/// List project members
pub fn handle_project_members(ctx: &AppContext, id: i64) -> CommandOutput {
    render(ctx.harbor.projects().members(id), ctx.format)
}
