use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::matrix_tracking::domain::{DependencyUpdate, DependencyUpdateDetails};

/// Track the versions of dependencies propagated across repositories
#[derive(Parser, Debug)]
#[command(name = "dep-matrix")]
#[command(version)]
#[command(about = "Record, render and verify the dependency matrix of a repository", long_about = None)]
pub struct Args {
    /// Config file (defaults to dep-matrix.config.yml in the repository directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable coloured diagnostics
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a commit message and print the dependency update it describes
    Parse {
        /// The commit message
        message: String,

        /// Output format: yaml or json
        #[arg(short, long, default_value = "yaml")]
        format: OutputFormat,
    },

    /// Record a dependency update in the repository's matrix
    Update(UpdateArgs),

    /// Fail when a dependency's sources disagree on its version
    Verify {
        /// Path to the repository (defaults to current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Regenerate the markdown rendering of the matrix
    Render {
        /// Path to the repository (defaults to current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Markdown file name inside the dependency-matrix directory
        #[arg(long)]
        markdown_file: Option<String>,
    },

    /// Print the recorded version of a dependency
    Find {
        /// Path to the repository (defaults to current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Git host of the dependency (defaults to the configured default host)
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        owner: String,

        #[arg(long)]
        repo: String,
    },

    /// Collect dependency updates from commit messages into dependency-updates.yaml
    Collect {
        /// File of commit messages separated by lines containing only `---`
        #[arg(short, long, value_name = "FILE")]
        messages: PathBuf,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Host for slugs that do not name one
        #[arg(long)]
        default_host: Option<String>,
    },
}

#[derive(ClapArgs, Debug)]
pub struct UpdateArgs {
    /// Path to the repository (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// YAML file holding the dependency update
    #[arg(long, value_name = "FILE", conflicts_with_all = ["owner", "repo", "to_version"])]
    pub update_file: Option<PathBuf>,

    /// Git host of the updated dependency (defaults to the configured default host)
    #[arg(long)]
    pub host: Option<String>,

    #[arg(long, required_unless_present = "update_file")]
    pub owner: Option<String>,

    #[arg(long, required_unless_present = "update_file")]
    pub repo: Option<String>,

    #[arg(long)]
    pub component: Option<String>,

    /// Repository URL (defaults to https://<host>/<owner>/<repo>)
    #[arg(long)]
    pub url: Option<String>,

    #[arg(long)]
    pub from_version: Option<String>,

    #[arg(long, required_unless_present = "update_file")]
    pub to_version: Option<String>,

    /// Release page of the new version
    #[arg(long)]
    pub to_release_url: Option<String>,

    /// dependency-updates.yaml published by the new release (path or URL)
    #[arg(long, value_name = "PATH|URL")]
    pub upstream: Option<String>,

    /// Markdown file name inside the dependency-matrix directory
    #[arg(long)]
    pub markdown_file: Option<String>,

    /// Skip the advisory lock on the dependency-matrix directory
    #[arg(long)]
    pub no_lock: bool,
}

impl UpdateArgs {
    /// Builds the direct update from flags; `None` when `--update-file` is used.
    pub fn flag_update(&self, default_host: &str) -> Option<DependencyUpdate> {
        let (owner, repo, to_version) = match (&self.owner, &self.repo, &self.to_version) {
            (Some(owner), Some(repo), Some(to_version)) => (owner, repo, to_version),
            _ => return None,
        };
        let host = self.host.clone().unwrap_or_else(|| default_host.to_string());
        let url = self
            .url
            .clone()
            .unwrap_or_else(|| format!("https://{}/{}/{}", host, owner, repo));

        Some(DependencyUpdate::direct(DependencyUpdateDetails {
            host,
            owner: owner.clone(),
            repo: repo.clone(),
            component: self.component.clone().unwrap_or_default(),
            url,
            from_version: self.from_version.clone().unwrap_or_default(),
            to_version: to_version.clone(),
            to_release_html_url: self.to_release_url.clone().unwrap_or_default(),
            ..Default::default()
        }))
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Repository directory the command operates on, if any.
    pub fn repo_dir(&self) -> Option<&PathBuf> {
        match &self.command {
            Command::Update(args) => Some(&args.dir),
            Command::Verify { dir } | Command::Render { dir, .. } | Command::Find { dir, .. } => {
                Some(dir)
            }
            Command::Parse { .. } | Command::Collect { .. } => None,
        }
    }
}
