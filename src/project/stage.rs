//! Deployment stage tags and the place they get appended to.
//!
//! Both are closed sets. Parsing returns `InvalidOption` for anything
//! outside the set, so callers can reject a value without touching state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serializer};

use crate::errors::{Result, SetEnvError};

/// Literal written in place of a stage when the stage comes from `AWS_ENV`
/// at consumption time. The tool never resolves it.
pub const AWS_ENV_SENTINEL: &str = "$AWS_ENV";

/// A deployment stage appended to the vault, item or var targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Test,
    Staging,
    Prod,
    /// Deferred to the `AWS_ENV` environment variable.
    AwsEnv,
}

impl Stage {
    /// Stage names listed when a value is rejected. The `aws` alias is
    /// accepted but not listed.
    pub const ALLOWED: [&'static str; 3] = ["test", "staging", "prod"];

    /// Parse a value typed by the operator (`test`, `staging`, `prod`, `aws`).
    pub fn parse_option(value: &str) -> Result<Self> {
        match value {
            "test" => Ok(Self::Test),
            "staging" => Ok(Self::Staging),
            "prod" => Ok(Self::Prod),
            "aws" => Ok(Self::AwsEnv),
            other => Err(SetEnvError::InvalidOption {
                option: "stage",
                value: other.to_string(),
                allowed: Self::ALLOWED.join(", "),
            }),
        }
    }

    /// The text appended after the `-` separator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Staging => "staging",
            Self::Prod => "prod",
            Self::AwsEnv => AWS_ENV_SENTINEL,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted form: the operator spelling, except `aws` which is stored as
/// the sentinel.
impl FromStr for Stage {
    type Err = SetEnvError;

    fn from_str(s: &str) -> Result<Self> {
        if s == AWS_ENV_SENTINEL {
            return Ok(Self::AwsEnv);
        }
        Self::parse_option(s)
    }
}

/// Which part of the project receives the stage suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKey {
    Vault,
    Item,
    Vars,
}

impl StageKey {
    pub const ALLOWED: [&'static str; 3] = ["vault", "item", "vars"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vault => "vault",
            Self::Item => "item",
            Self::Vars => "vars",
        }
    }
}

impl fmt::Display for StageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageKey {
    type Err = SetEnvError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "vault" => Ok(Self::Vault),
            "item" => Ok(Self::Item),
            "vars" => Ok(Self::Vars),
            other => Err(SetEnvError::InvalidOption {
                option: "stage key",
                value: other.to_string(),
                allowed: Self::ALLOWED.join(", "),
            }),
        }
    }
}

// ── Serde helpers ────────────────────────────────────────────────────
//
// The state file stores an unset stage or stage key as an empty string.

pub(crate) fn serialize_optional<T, S>(
    value: &Option<T>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: Serializer,
{
    match value {
        Some(v) => serializer.collect_str(v),
        None => serializer.serialize_str(""),
    }
}

pub(crate) fn deserialize_optional<'de, T, D>(
    deserializer: D,
) -> std::result::Result<Option<T>, D::Error>
where
    T: FromStr<Err = SetEnvError>,
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(serde::de::Error::custom)
}
