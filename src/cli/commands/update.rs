//! Default action: apply the flags, save the state file, regenerate `.env`.

use tracing::debug;

use crate::cli::output;
use crate::cli::{project_files, Cli};
use crate::errors::{Result, SetEnvError};
use crate::project::{Project, Request};
use crate::render::{render, write_env_file};

/// Execute an update.
///
/// The state file keeps the unsuffixed values. Only the rendered `.env`
/// carries the stage suffix. A stored stage or stage key that no longer
/// parses is replaced when this run sets that option.
pub fn execute(cli: &Cli, request: &Request) -> Result<()> {
    let files = project_files(cli)?;
    let state = files.state_file();

    let loaded = match state.load() {
        Err(SetEnvError::StoredOption { field, value, .. })
            if request.replaced_fields().contains(&field) =>
        {
            output::warning(&format!("Replacing unknown {field} '{value}'"));
            state.load_resetting(&request.replaced_fields())?
        }
        result => result?,
    };

    let mut project = match loaded {
        Some(project) => project,
        None => {
            output::info(&format!(
                "No {} file has been found. Generating a new one.",
                files.state_name
            ));
            Project::default()
        }
    };

    for rejected in request.apply(&mut project) {
        output::warning(&rejected.to_string());
    }

    state.save(&project)?;

    let content = render(&project.staged(), request.tfvars);
    write_env_file(&files.env_path, &content)?;
    debug!(lines = project.vars.len(), "env file regenerated");

    output::success(&format!("{} has been updated!", files.env_name));
    println!("\n{content}");

    Ok(())
}
