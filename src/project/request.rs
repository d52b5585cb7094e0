//! The set of edits one invocation asks for.

use tracing::debug;

use super::state::Project;
use crate::errors::SetEnvError;

/// Edits collected from the command line, applied to a loaded project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub vault: Option<String>,
    pub item: Option<String>,
    pub stage_key: Option<String>,
    pub stage: Option<String>,
    pub add_vars: Vec<String>,
    pub rm_vars: Vec<String>,
    /// Prefix rendered lines with `TF_VAR_`. Never persisted.
    pub tfvars: bool,
}

impl Request {
    /// True when the request neither edits the project nor changes rendering.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// State file fields this request assigns a new value to.
    pub fn replaced_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.stage_key.is_some() {
            fields.push("stage_key");
        }
        if self.stage.is_some() {
            fields.push("stage");
        }
        fields
    }

    /// Apply every edit to `project`.
    ///
    /// Edits run in a fixed order: vault, item, stage key, stage, added
    /// vars, removed vars. A rejected stage or stage key does not stop the
    /// rest; the rejections are returned so the caller can report them.
    pub fn apply(&self, project: &mut Project) -> Vec<SetEnvError> {
        let mut rejected = Vec::new();

        if let Some(vault) = &self.vault {
            project.vault = vault.clone();
        }
        if let Some(item) = &self.item {
            project.item = item.clone();
        }
        if let Some(key) = &self.stage_key {
            if let Err(e) = project.set_stage_key(key) {
                rejected.push(e);
            }
        }
        if let Some(stage) = &self.stage {
            if let Err(e) = project.set_stage(stage) {
                rejected.push(e);
            }
        }
        for spec in &self.add_vars {
            project.vars.add(spec);
        }
        for spec in &self.rm_vars {
            project.vars.remove(spec);
        }

        debug!(
            vars = project.vars.len(),
            rejected = rejected.len(),
            "request applied"
        );
        rejected
    }
}
