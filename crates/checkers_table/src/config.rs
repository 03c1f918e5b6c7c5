//! Table configuration and seat identities

use checkers_core::{RuleConfig, Side};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::TableError;

/// Identity under which a requester talks to a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Player(Side),
    Observer,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Player(side) => write!(f, "{side} player"),
            Seat::Observer => write!(f, "observer"),
        }
    }
}

/// Table configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TableConfig {
    /// Rules the first game starts with
    pub rules: RuleConfig,
    /// The only seat allowed to replace the rules
    pub rules_owner: Seat,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rules: RuleConfig::default(),
            rules_owner: Seat::Player(Side::White),
        }
    }
}

impl TableConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, TableError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| TableError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
