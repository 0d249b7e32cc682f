use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, Result};
use log::info;

use crate::guard::RightGuard;

use super::Middleware;

/// Name-to-instance registry for middlewares
///
/// Guards resolve their fallback handlers here. The set of names is closed
/// once the registry is built; `validate` checks guard declarations against
/// it at startup so that unknown names fail before any traffic is served.
#[derive(Debug)]
pub struct MiddlewareRegistry {
    middlewares: HashMap<String, Arc<dyn Middleware>>,
}

impl MiddlewareRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            middlewares: HashMap::new(),
        }
    }

    /// Registers a middleware under a name, replacing any previous entry
    pub fn register(&mut self, name: impl ToString, middleware: Arc<dyn Middleware>) {
        self.middlewares.insert(name.to_string(), middleware);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.middlewares.contains_key(name)
    }

    /// Resolves a middleware instance by name
    ///
    /// # Returns
    /// * `Result<Arc<dyn Middleware>>` - The instance, or an error for an
    ///   unknown name
    pub fn get(&self, name: &str) -> Result<Arc<dyn Middleware>> {
        match self.middlewares.get(name) {
            Some(middleware) => Ok(middleware.clone()),
            None => bail!("middleware {name:?} is not registered"),
        }
    }

    /// Checks that every guard's fallback handler can be resolved
    pub fn validate(&self, guards: &[RightGuard]) -> Result<()> {
        for guard in guards {
            if !self.contains(guard.middleware_name()) {
                bail!(
                    "guard for right {:?} references unknown middleware {:?}",
                    guard.right_name(),
                    guard.middleware_name()
                );
            }
        }
        info!(
            "Validated {} guard declarations against middleware registry",
            guards.len()
        );
        Ok(())
    }
}

impl Default for MiddlewareRegistry {
    fn default() -> Self {
        Self::new()
    }
}
