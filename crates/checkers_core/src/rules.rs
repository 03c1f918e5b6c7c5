//! Rule configuration shared by the move generator and the move applier.
//!
//! A `RuleConfig` is an immutable record: it is replaced as a whole, never
//! patched field by field. Rule files are TOML with camelCase keys; missing
//! keys take their default value.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RulesError;

/// Whether a capturing piece must keep jumping.
///
/// `Forced` is accepted as configuration but not enforced: every accepted
/// move ends the turn, so both values behave like `Optional`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiCapture {
    #[default]
    Optional,
    Forced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RuleConfig {
    /// A capture is mandatory when one is available.
    pub must_capture: bool,
    /// With `must_capture`, a piece that moves without capturing while a
    /// capture was available is removed after landing.
    pub skip_capture_penalty_remove_moved: bool,
    pub multi_capture: MultiCapture,
    /// Kings slide any distance along an open diagonal.
    pub flying_king_move: bool,
    /// Kings capture at a distance and may land on any empty square beyond.
    pub flying_king_capture: bool,
    /// Men may also capture backwards. Simple moves stay forward only.
    pub men_backward_capture: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            must_capture: false,
            skip_capture_penalty_remove_moved: false,
            multi_capture: MultiCapture::Optional,
            flying_king_move: false,
            flying_king_capture: false,
            men_backward_capture: false,
        }
    }
}

impl RuleConfig {
    /// True when a skipped capture forfeits the moved piece.
    pub fn capture_penalty_active(&self) -> bool {
        self.must_capture && self.skip_capture_penalty_remove_moved
    }

    pub fn from_toml_str(text: &str) -> Result<Self, RulesError> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> Result<String, RulesError> {
        Ok(toml::to_string(self)?)
    }

    /// Load rules from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
