//! `-ignore`: keep the project's files out of git.

use crate::cli::gitignore::patch_gitignore;
use crate::cli::output;
use crate::cli::{project_files, Cli};
use crate::errors::Result;

/// Execute the `ignore` action.
pub fn execute(cli: &Cli) -> Result<()> {
    let files = project_files(cli)?;

    for entry in [&files.env_name, &files.state_name] {
        if patch_gitignore(&files.dir, entry)? {
            output::success(&format!("'{entry}' has been added to .gitignore"));
        } else {
            output::info(&format!("'{entry}' is already in .gitignore"));
        }
    }

    Ok(())
}
