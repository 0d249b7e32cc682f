use std::collections::HashSet;

use anyhow::Result;

use super::RightsService;

/// A rights service backed by a fixed set of granted rights
///
/// Rights not present in the set are denied. Useful for configuration-driven
/// setups and for tests; real deployments typically wire in a service that
/// resolves the actor from session state.
pub struct FixedRightsService {
    rights: HashSet<String>,
}

impl FixedRightsService {
    /// Creates a new instance granting exactly the provided rights
    pub fn new<I, S>(rights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            rights: rights.into_iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl RightsService for FixedRightsService {
    fn is_allowed(&self, right: &str) -> Result<bool> {
        Ok(self.rights.contains(right))
    }
}
