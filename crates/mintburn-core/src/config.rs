use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MintburnError;
use crate::types::{MarketAssumptions, SystemParams};

/// Everything the engine needs besides the user's inputs.
///
/// Loaded from JSON. Missing fields keep their defaults, so a file holding
/// only `{ "params": { "k": 0.0 } }` is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub params: SystemParams,
    pub market: MarketAssumptions,
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, MintburnError> {
        serde_json::from_str(json).map_err(|e| MintburnError::Config(e.to_string()))
    }

    /// Read and parse a config file. Does not validate.
    pub fn load(path: &Path) -> Result<Self, MintburnError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| MintburnError::Config(format!("reading {}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, MintburnError> {
        serde_json::to_string_pretty(self).map_err(|e| MintburnError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), MintburnError> {
        self.params.validate()?;
        self.market.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ASSUMED_USERS, DEFAULT_BETA};

    #[test]
    fn empty_object_is_default() {
        let cfg = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn partial_override() {
        let cfg = EngineConfig::from_json_str(
            r#"{ "params": { "beta": 0.5 }, "market": { "assumed_burn_rate": 0.2 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.params.beta, 0.5);
        assert_eq!(cfg.market.assumed_burn_rate, 0.2);
        assert_eq!(cfg.market.assumed_users, ASSUMED_USERS);
    }

    #[test]
    fn json_survives_pretty_print() {
        let cfg = EngineConfig::default();
        let json = cfg.to_json_pretty().unwrap();
        let back = EngineConfig::from_json_str(&json).unwrap();
        assert_eq!(back.params.beta, DEFAULT_BETA);
        assert_eq!(back, cfg);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = EngineConfig::from_json_str("{ params: ").unwrap_err();
        assert!(matches!(err, MintburnError::Config(_)));
    }

    #[test]
    fn load_missing_file_fails() {
        let path = std::env::temp_dir().join("mintburn_config_does_not_exist.json");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            EngineConfig::load(&path).unwrap_err(),
            MintburnError::Config(_)
        ));
    }

    #[test]
    fn validate_catches_bad_market() {
        let mut cfg = EngineConfig::default();
        cfg.market.assumed_burn_rate = 2.0;
        assert!(matches!(
            cfg.validate().unwrap_err(),
            MintburnError::InvalidAssumption(_)
        ));
    }
}
