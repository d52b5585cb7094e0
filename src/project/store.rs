//! Persistence of the project state as JSON.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_json::Value;
use tracing::debug;

use super::stage::{Stage, StageKey};
use super::state::Project;
use crate::errors::{Result, SetEnvError};

/// Handle on the JSON state file (`env.json` by default).
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved project.
    ///
    /// Returns `Ok(None)` when the file does not exist yet, which is the
    /// normal first run. A file that exists but does not parse is an error.
    /// A stage or stage key outside its allowed set is reported as
    /// `StoredOption` naming the field.
    pub fn load(&self) -> Result<Option<Project>> {
        self.load_resetting(&[])
    }

    /// Like [`load`](Self::load), but drops the listed fields (`"stage"`,
    /// `"stage_key"`) before parsing so a new value can replace a stored
    /// one that no longer parses.
    pub fn load_resetting(&self, fields: &[&str]) -> Result<Option<Project>> {
        debug!(path = %self.path.display(), ?fields, "loading state file");

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no state file, starting a new project");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut raw: Value = serde_json::from_str(&contents).map_err(|e| self.parse_error(e))?;
        if let Some(object) = raw.as_object_mut() {
            for field in fields {
                object.remove(*field);
            }
        }

        self.check_option::<Stage>(&raw, "stage", "stage", &Stage::ALLOWED)?;
        self.check_option::<StageKey>(&raw, "stage_key", "stagekey", &StageKey::ALLOWED)?;

        let project: Project = serde_json::from_value(raw).map_err(|e| self.parse_error(e))?;

        debug!(vars = project.vars.len(), "state file loaded");
        Ok(Some(project))
    }

    /// Overwrite the state file with `project`.
    pub fn save(&self, project: &Project) -> Result<()> {
        debug!(path = %self.path.display(), "saving state file");

        let mut json = serde_json::to_string_pretty(project)
            .map_err(|e| SetEnvError::SerializationError(format!("state file: {e}")))?;
        json.push('\n');

        fs::write(&self.path, json)?;
        Ok(())
    }

    fn parse_error(&self, e: serde_json::Error) -> SetEnvError {
        SetEnvError::StateParse {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }

    /// Reject a non-empty string `field` that `T` cannot parse.
    fn check_option<T: FromStr>(
        &self,
        raw: &Value,
        field: &'static str,
        flag: &'static str,
        allowed: &[&str],
    ) -> Result<()> {
        match raw.get(field).and_then(Value::as_str) {
            Some(value) if !value.is_empty() && value.parse::<T>().is_err() => {
                Err(SetEnvError::StoredOption {
                    path: self.path.clone(),
                    field,
                    flag,
                    value: value.to_string(),
                    allowed: allowed.join(", "),
                })
            }
            _ => Ok(()),
        }
    }
}
