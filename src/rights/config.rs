use std::sync::Arc;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::{AllowAllRightsService, FixedRightsService, RightsService};

/// Rights service related configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RightsConfig {
    /// Rights granted to the current actor. Ignored when `allow_all` is set.
    /// Defaults to empty, which denies every right.
    #[serde(default = "RightsConfig::default_rights")]
    pub rights: Vec<String>,

    /// Grant every right unconditionally.
    #[serde(default)]
    pub allow_all: bool,
}

impl Default for RightsConfig {
    fn default() -> Self {
        Self {
            rights: Self::default_rights(),
            allow_all: false,
        }
    }
}

impl RightsConfig {
    pub fn default_rights() -> Vec<String> {
        vec![]
    }

    pub fn complete(&mut self) -> Result<()> {
        for right in self.rights.iter() {
            if right.is_empty() {
                bail!("rights cannot contain an empty name");
            }
        }
        Ok(())
    }

    /// Builds the rights service described by this configuration.
    pub fn build(&self) -> Arc<dyn RightsService> {
        if self.allow_all {
            return Arc::new(AllowAllRightsService::new());
        }
        Arc::new(FixedRightsService::new(self.rights.clone()))
    }
}
