use super::{CommandOutput, render};
use crate::context::AppContext;
use crate::format::Formattable;
use libharbor::models::StatisticMap;

impl Formattable for StatisticMap {
    fn format_pretty(&self) -> String {
        [
            format!("Private projects: {}", self.private_project_count),
            format!("Private repos:    {}", self.private_repo_count),
            format!("Public projects:  {}", self.public_project_count),
            format!("Public repos:     {}", self.public_repo_count),
            format!("Total projects:   {}", self.total_project_count),
            format!("Total repos:      {}", self.total_repo_count),
        ]
        .join("\n")
    }
}

/// Show project and repository counts
pub fn handle_stats(ctx: &AppContext) -> CommandOutput {
    render(ctx.harbor.statistics().get(), ctx.format)
}
