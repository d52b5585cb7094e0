//! The project aggregate and the stage transformation.

use serde::{Deserialize, Serialize};

use super::stage::{deserialize_optional, serialize_optional, Stage, StageKey};
use super::vars::VarStore;
use crate::errors::Result;

/// Everything stored in the state file.
///
/// Field order matches the on-disk JSON layout. `tfvars` lives on
/// `Request` and is never saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub vault: String,

    #[serde(default)]
    pub item: String,

    #[serde(
        default,
        serialize_with = "serialize_optional",
        deserialize_with = "deserialize_optional"
    )]
    pub stage_key: Option<StageKey>,

    #[serde(default)]
    pub vars: VarStore,

    #[serde(
        default,
        serialize_with = "serialize_optional",
        deserialize_with = "deserialize_optional"
    )]
    pub stage: Option<Stage>,
}

impl Project {
    /// Validate and assign a stage. On error `stage` is left unchanged.
    pub fn set_stage(&mut self, value: &str) -> Result<()> {
        self.stage = Some(Stage::parse_option(value)?);
        Ok(())
    }

    /// Validate and assign a stage key. On error `stage_key` is left unchanged.
    pub fn set_stage_key(&mut self, value: &str) -> Result<()> {
        self.stage_key = Some(value.parse()?);
        Ok(())
    }

    /// Append `-<stage>` to the part selected by the stage key.
    ///
    /// Not idempotent: each call appends again. No-op without both a
    /// stage and a stage key.
    pub fn apply_stage(&mut self) {
        let (Some(stage), Some(key)) = (self.stage, self.stage_key) else {
            return;
        };
        let suffix = stage.as_str();
        match key {
            StageKey::Vault => self.vault = format!("{}-{suffix}", self.vault),
            StageKey::Item => self.item = format!("{}-{suffix}", self.item),
            StageKey::Vars => self.vars.suffix_targets(suffix),
        }
    }

    /// The view that gets rendered: vault and item trimmed, stage applied
    /// once. `self` keeps the unsuffixed values that are persisted.
    pub fn staged(&self) -> Project {
        let mut staged = Project {
            vault: self.vault.trim().to_string(),
            item: self.item.trim().to_string(),
            ..self.clone()
        };
        staged.apply_stage();
        staged
    }
}
