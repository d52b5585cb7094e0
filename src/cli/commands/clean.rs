//! `-clean`: delete the project's files.

use std::fs;

use tracing::debug;

use crate::cli::output;
use crate::cli::{project_files, Cli};
use crate::errors::Result;

/// Execute the `clean` action.
///
/// Each file is reported on its own. A file that cannot be removed is a
/// warning, not a failure.
pub fn execute(cli: &Cli) -> Result<()> {
    let files = project_files(cli)?;

    for (name, path) in [
        (&files.env_name, &files.env_path),
        (&files.state_name, &files.state_path),
    ] {
        match fs::remove_file(path) {
            Ok(()) => output::success(&format!("{name} has been successfully deleted")),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "remove failed");
                output::warning(&format!("Error removing '{name}': {e}"));
            }
        }
    }

    Ok(())
}
