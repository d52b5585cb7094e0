//! `-view`: show the saved project and the current `.env`.

use std::fs;
use std::io::ErrorKind;

use crate::cli::output;
use crate::cli::{project_files, Cli};
use crate::errors::Result;

/// Execute the `view` action.
pub fn execute(cli: &Cli) -> Result<()> {
    let files = project_files(cli)?;

    let Some(project) = files.state_file().load()? else {
        output::info(&format!("No {} file has been found.", files.state_name));
        output::tip("Run `setenv -vault=<NAME> -item=<NAME> -addvar=<VARS>` to start a project.");
        return Ok(());
    };

    println!("Current Project Information:\n");
    output::print_project(&project, cli.tfvars);

    match fs::read_to_string(&files.env_path) {
        Ok(content) => println!("\nCurrent {} state:\n\n{content}", files.env_name),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!();
            output::info(&format!("No {} has been generated yet.", files.env_name));
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
