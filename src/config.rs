use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::guard::GuardConfig;
use crate::rights::config::RightsConfig;

/// Guard layer configuration: the rights service plus guard declarations.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GuardsConfig {
    #[serde(default)]
    pub rights: RightsConfig,

    /// Guard declarations, one per protected route or action.
    /// Defaults to empty.
    #[serde(default = "GuardsConfig::default_guards")]
    pub guards: Vec<GuardConfig>,
}

impl Default for GuardsConfig {
    fn default() -> Self {
        Self {
            rights: RightsConfig::default(),
            guards: Self::default_guards(),
        }
    }
}

impl GuardsConfig {
    pub fn default_guards() -> Vec<GuardConfig> {
        vec![]
    }

    pub fn complete(&mut self) -> Result<()> {
        self.rights.complete().context("rights config")?;

        for (idx, guard) in self.guards.iter().enumerate() {
            if guard.name.is_none() && guard.value.is_none() {
                bail!("guard at index {idx} is missing a right name");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete() {
        let mut cfg: GuardsConfig = serde_json::from_str(
            r#"{
                "rights": {"rights": ["Admin"]},
                "guards": [
                    {"name": "Admin"},
                    {"value": "Editor", "middleware_name": "custom"}
                ]
            }"#,
        )
        .unwrap();
        cfg.complete().unwrap();
        assert_eq!(cfg.guards.len(), 2);

        let mut cfg: GuardsConfig =
            serde_json::from_str(r#"{"guards": [{"middleware_name": "custom"}]}"#).unwrap();
        let err = cfg.complete().unwrap_err();
        assert!(err.to_string().contains("missing a right name"));
    }

    #[test]
    fn test_defaults() {
        let mut cfg = GuardsConfig::default();
        cfg.complete().unwrap();
        assert!(cfg.guards.is_empty());
        assert!(!cfg.rights.allow_all);
    }
}
