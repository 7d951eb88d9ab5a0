use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod context;
mod format;
mod logging;

/// Harbor - Registry Management CLI
///
/// A CLI tool for managing projects, repositories and users of a Harbor registry.
#[derive(Parser, Debug)]
#[command(name = "harbor")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ~/.config/harbor/config.yaml)
    #[arg(long, global = true, env = "HARBOR_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format: pretty, json, yaml
    #[arg(short, long, global = true, default_value = "pretty")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display version information
    Version,
    /// Inspect users
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Inspect projects
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Inspect repositories, tags and vulnerabilities
    Repo {
        #[command(subcommand)]
        command: RepoCommands,
    },
    /// Show project and repository counts
    Stats,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum UserCommands {
    /// Show the authenticated user
    Current,
    /// List all users
    #[command(visible_alias = "ls")]
    List,
    /// Show a user by ID
    Get {
        /// User ID
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum ProjectCommands {
    /// List projects
    #[command(visible_alias = "ls")]
    List {
        /// Filter by project name
        #[arg(long)]
        name: Option<String>,
        /// Page number, starting at 1
        #[arg(long)]
        page: Option<u32>,
        /// Results per page
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Show a project by ID
    Get {
        /// Project ID
        id: i64,
    },
    /// Check whether a project exists
    Check {
        /// Project name
        name: String,
    },
    /// List members of a project
    Members {
        /// Project ID
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum RepoCommands {
    /// List repositories
    #[command(visible_alias = "ls")]
    List {
        /// Only repositories of this project
        #[arg(long)]
        project_id: Option<i64>,
    },
    /// List tags of a repository
    Tags {
        /// Project name
        project: String,
        /// Repository name within the project
        repo: String,
    },
    /// Show vulnerabilities found in an image
    Vulns {
        /// Full repository name (e.g. library/nginx)
        repo: String,
        /// Image tag
        tag: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Commands::Version => {
            commands::version::print_version();
            return;
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
            return;
        }
        _ => {}
    }

    let fmt = format::OutputFormat::from(cli.format.as_str());
    let ctx = match context::AppContext::build(cli.config.as_deref(), fmt) {
        Ok(ctx) => ctx,
        Err(e) => {
            format::error(&e);
            std::process::exit(1);
        }
    };

    let output = match cli.command {
        Commands::User { command } => match command {
            UserCommands::Current => commands::user::handle_user_current(&ctx),
            UserCommands::List => commands::user::handle_user_list(&ctx),
            UserCommands::Get { id } => commands::user::handle_user_get(&ctx, id),
        },
        Commands::Project { command } => match command {
            ProjectCommands::List {
                name,
                page,
                page_size,
            } => commands::project::handle_project_list(&ctx, name.as_deref(), page, page_size),
            ProjectCommands::Get { id } => commands::project::handle_project_get(&ctx, id),
            ProjectCommands::Check { name } => {
                commands::project::handle_project_check(&ctx, &name).map(|message| {
                    format::success(&message);
                    String::new()
                })
            }
            ProjectCommands::Members { id } => {
                commands::project::handle_project_members(&ctx, id)
            }
        },
        Commands::Repo { command } => match command {
            RepoCommands::List { project_id } => {
                commands::repo::handle_repo_list(&ctx, project_id)
            }
            RepoCommands::Tags { project, repo } => {
                commands::repo::handle_repo_tags(&ctx, &project, &repo)
            }
            RepoCommands::Vulns { repo, tag } => {
                commands::repo::handle_repo_vulns(&ctx, &repo, &tag)
            }
        },
        Commands::Stats => commands::stats::handle_stats(&ctx),
        Commands::Version | Commands::Completion { .. } => Ok(String::new()),
    };

    match output {
        Ok(text) => {
            if !text.is_empty() {
                println!("{}", text);
            }
        }
        Err(errors) => {
            for e in &errors {
                format::error(e);
            }
            std::process::exit(1);
        }
    }
}
