use anyhow::Result;

use super::RightsService;

/// A rights service that grants every right
///
/// This service implements the admin case:
/// - Any right name is allowed, unconditionally
pub struct AllowAllRightsService;

impl AllowAllRightsService {
    /// Creates a new instance of AllowAllRightsService
    pub fn new() -> Self {
        Self
    }
}

impl Default for AllowAllRightsService {
    fn default() -> Self {
        Self::new()
    }
}

impl RightsService for AllowAllRightsService {
    fn is_allowed(&self, _right: &str) -> Result<bool> {
        Ok(true)
    }
}
