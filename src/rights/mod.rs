mod allow_all;
mod fixed;

pub mod config;

pub use allow_all::AllowAllRightsService;
pub use fixed::FixedRightsService;

use anyhow::Result;

/// Trait that defines the rights-checking interface
///
/// Implementers of this trait answer whether the current actor holds a
/// named right. The actor and its context (session, token, connection) are
/// resolved by the service itself and never passed by callers.
/// The trait is thread-safe and can be shared across threads.
pub trait RightsService: Send + Sync {
    /// Returns whether the current actor holds the named right
    ///
    /// # Arguments
    /// * `right` - The name of the right to check
    ///
    /// # Returns
    /// * `Result<bool>` - The decision, or an error if the service itself failed
    fn is_allowed(&self, right: &str) -> Result<bool>;
}
