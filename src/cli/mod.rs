//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod gitignore;
pub mod output;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};

use crate::config::Settings;
use crate::errors::Result;
use crate::project::{Request, StateFile};

const EXAMPLES: &str = "\
Examples:
  Starting a new project:
    setenv -vault=\"my vault\" -item=project -addvar=DB_USER,DB_PASSWORD -stagekey=item -stage=test
  Pointing a variable at a differently named field:
    setenv -addvar=DB_PASSWORD:password
  Prepending TF_VAR_ to every variable:
    setenv -tfvars
  Changing the vault's name:
    setenv -vault=\"new project\"
  Removing variables:
    setenv -rmvar=DB_USER,DB_PASSWORD";

/// SetEnv CLI: .env files of 1Password secret references.
#[derive(Parser, Debug)]
#[command(
    name = "setenv",
    about = "Create and update .env files of variables pointing to 1Password",
    version,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Set the vault's name for the project
    #[arg(long, value_name = "NAME")]
    pub vault: Option<String>,

    /// Set the item's name for the project
    #[arg(long, value_name = "NAME")]
    pub item: Option<String>,

    /// Set where the stage is appended. Allowed values: vault, item, vars
    #[arg(long = "stagekey", value_name = "KEY")]
    pub stage_key: Option<String>,

    /// Set the stage of the project. Allowed values: test, staging, prod (aws for $AWS_ENV)
    #[arg(long, value_name = "STAGE")]
    pub stage: Option<String>,

    /// Add one or more vars, comma separated (NAME or NAME:FIELD)
    #[arg(long = "addvar", value_name = "VARS")]
    pub add_vars: Vec<String>,

    /// Remove one or more vars, comma separated
    #[arg(long = "rmvar", value_name = "VARS")]
    pub rm_vars: Vec<String>,

    /// Prefix 'TF_VAR_' to every variable name
    #[arg(long)]
    pub tfvars: bool,

    /// Print the current project's status and .env
    #[arg(long)]
    pub view: bool,

    /// Add the project's files to .gitignore
    #[arg(long)]
    pub ignore: bool,

    /// Delete the project's files
    #[arg(long)]
    pub clean: bool,

    /// Show debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// State file (default: env.json, or state_file in .setenv.toml)
    #[arg(long, env = "SETENV_STATE_FILE", value_name = "PATH")]
    pub state_file: Option<String>,

    /// Rendered env file (default: .env, or env_file in .setenv.toml)
    #[arg(long, env = "SETENV_ENV_FILE", value_name = "PATH")]
    pub env_file: Option<String>,
}

/// What a single invocation does. Side-band actions never touch the
/// project state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Clean,
    View,
    Ignore,
    Update(Request),
}

impl Cli {
    /// Parse the process arguments, accepting the single-dash long flags
    /// (`-vault=x`) of earlier releases.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// The edits requested by the project flags.
    pub fn request(&self) -> Request {
        Request {
            vault: self.vault.clone(),
            item: self.item.clone(),
            stage_key: self.stage_key.clone(),
            stage: self.stage.clone(),
            add_vars: self.add_vars.clone(),
            rm_vars: self.rm_vars.clone(),
            tfvars: self.tfvars,
        }
    }

    /// Pick the action. Precedence: clean, view, ignore, then update;
    /// no project flags at all means help.
    pub fn action(&self) -> Action {
        if self.clean {
            return Action::Clean;
        }
        if self.view {
            return Action::View;
        }
        if self.ignore {
            return Action::Ignore;
        }
        let request = self.request();
        if request.is_empty() {
            Action::Help
        } else {
            Action::Update(request)
        }
    }
}

/// Rewrite `-name` / `-name=value` to `--name...` for every long flag
/// the parser knows. Short flags (`-v`) and values pass through.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Cli::command();
    let longs: Vec<&str> = command
        .get_arguments()
        .filter_map(|a| a.get_long())
        .chain(["help", "version"])
        .collect();

    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            legacy_long(&arg, &longs).unwrap_or(arg)
        })
        .collect()
}

/// `-name[=value]` -> `--name[=value]` when `name` is a known long flag.
fn legacy_long(arg: &OsString, longs: &[&str]) -> Option<OsString> {
    let s = arg.to_str()?;
    let rest = s.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split('=').next()?;
    longs.contains(&name).then(|| OsString::from(format!("-{s}")))
}

/// Print the usage text with examples.
pub fn print_help() -> Result<()> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}

/// Resolved locations of the project's two files.
#[derive(Debug, Clone)]
pub struct ProjectFiles {
    /// Project root the files are resolved against.
    pub dir: PathBuf,
    /// State file name as configured (used for messages and .gitignore).
    pub state_name: String,
    /// Env file name as configured.
    pub env_name: String,
    pub state_path: PathBuf,
    pub env_path: PathBuf,
}

impl ProjectFiles {
    /// Resolve file locations in `dir`: CLI flag, then `.setenv.toml`,
    /// then defaults.
    pub fn resolve(dir: &Path, cli: &Cli) -> Result<Self> {
        let mut settings = Settings::load(dir)?;
        if let Some(state_file) = &cli.state_file {
            settings.state_file = state_file.clone();
        }
        if let Some(env_file) = &cli.env_file {
            settings.env_file = env_file.clone();
        }

        Ok(Self {
            dir: dir.to_path_buf(),
            state_path: settings.state_path(dir),
            env_path: settings.env_path(dir),
            state_name: settings.state_file,
            env_name: settings.env_file,
        })
    }

    pub fn state_file(&self) -> StateFile {
        StateFile::new(&self.state_path)
    }
}

/// Resolve the project's files in the current directory.
pub fn project_files(cli: &Cli) -> Result<ProjectFiles> {
    let cwd = std::env::current_dir()?;
    ProjectFiles::resolve(&cwd, cli)
}
