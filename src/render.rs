//! Rendering the project into `.env` lines of 1Password secret references.
//!
//! Each variable becomes `NAME="op://VAULT/ITEM/TARGET"`, optionally
//! prefixed with `TF_VAR_` for Terraform.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::project::Project;

/// Prefix Terraform expects on variables read from the environment.
pub const TF_VAR_PREFIX: &str = "TF_VAR_";

/// Render `project` as `.env` text, one line per variable, sorted by name.
///
/// The project is rendered as given: apply the stage (see
/// [`Project::staged`]) before calling this. Lines are joined with `\n`
/// and there is no trailing newline.
pub fn render(project: &Project, tfvars: bool) -> String {
    let prefix = if tfvars { TF_VAR_PREFIX } else { "" };
    project
        .vars
        .iter()
        .map(|(name, target)| {
            format!(
                "{prefix}{name}=\"op://{}/{}/{target}\"",
                project.vault, project.item
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncate and rewrite the env file with `content`.
pub fn write_env_file(path: &Path, content: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = content.len(), "writing env file");
    fs::write(path, content)?;
    Ok(())
}
