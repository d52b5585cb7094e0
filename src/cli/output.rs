//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::project::Project;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print the saved project fields followed by a table of its vars.
pub fn print_project(project: &Project, tfvars: bool) {
    field("Vault", &project.vault);
    field("Item", &project.item);
    field(
        "Stage",
        &project.stage.map(|s| s.to_string()).unwrap_or_default(),
    );
    field(
        "Stage Key",
        &project.stage_key.map(|k| k.to_string()).unwrap_or_default(),
    );
    field("tfvars", &tfvars.to_string());
    println!();

    if project.vars.is_empty() {
        info("No vars in this project yet.");
        tip("Run `setenv -addvar=<NAME>` to add your first var.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Var", "Vault field"]);

    for (name, target) in project.vars.iter() {
        table.add_row(vec![name, target]);
    }

    println!("{table}");
}

fn field(name: &str, value: &str) {
    println!("{:<11}{}", style(format!("{name}:")).bold(), value);
}
