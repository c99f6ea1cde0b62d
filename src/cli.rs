use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigValues;

/// Send a Maven project's resolved dependencies to Gemnasium
#[derive(Parser, Debug)]
#[command(name = "gemnasium")]
#[command(version)]
#[command(about = "Send a Maven project's resolved dependencies to Gemnasium", long_about = None)]
pub struct Args {
    /// Path to the project base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub path: Option<String>,

    /// Dependency inventory exported by the build tool
    /// (defaults to target/gemnasium-inventory.json in the project directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub inventory: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Configuration options; `GEMNASIUM_*` environment variables take precedence
#[derive(clap::Args, Debug, Default)]
pub struct ConfigArgs {
    /// Base URL of the Gemnasium instance
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Gemnasium API key
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Current branch of the project
    #[arg(long, global = true)]
    pub project_branch: Option<String>,

    /// Project identifier on Gemnasium
    #[arg(long, global = true)]
    pub project_slug: Option<String>,

    /// Current revision of the project
    #[arg(long, global = true)]
    pub project_revision: Option<String>,

    /// Comma separated list of Maven scopes left out by send-dependencies
    #[arg(long, global = true, value_name = "SCOPES")]
    pub ignored_scopes: Option<String>,
}

impl ConfigArgs {
    pub fn to_config_values(&self) -> ConfigValues {
        ConfigValues {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            project_branch: self.project_branch.clone(),
            project_slug: self.project_slug.clone(),
            project_revision: self.project_revision.clone(),
            ignored_scopes: self.ignored_scopes.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check that the Gemnasium API is reachable
    Ping,
    /// Create a project on Gemnasium and store its slug in gemnasium.toml
    CreateProject {
        /// Team the project belongs to
        #[arg(long)]
        team_slug: Option<String>,
        /// Name of the new project
        #[arg(long)]
        project_name: Option<String>,
        /// Optional description
        #[arg(long)]
        project_description: Option<String>,
    },
    /// Send the project's dependencies to Gemnasium
    SendDependencies,
    /// Write the project's dependencies to gemnasium-maven-plugin.json
    DumpDependencies {
        /// Print to stdout instead of writing the file
        #[arg(long)]
        stdout: bool,
    },
    /// Show the Gemnasium project configured for this directory
    ShowProject,
    /// Show the resolved configuration
    ShowConfig,
}

impl Command {
    /// Name of the command as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ping => "ping",
            Command::CreateProject { .. } => "create-project",
            Command::SendDependencies => "send-dependencies",
            Command::DumpDependencies { .. } => "dump-dependencies",
            Command::ShowProject => "show-project",
            Command::ShowConfig => "show-config",
        }
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
