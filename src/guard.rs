use actix_web::{HttpMessage, HttpRequest};
use anyhow::{bail, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::middleware::{
    Middleware, MiddlewareRegistry, Next, RequiredRight, FORBIDDEN_MIDDLEWARE,
};
use crate::response::Response;
use crate::rights::RightsService;

/// Declarative configuration for a right guard
///
/// `name` is the right to require. `value` is an accepted alias for `name`
/// and takes precedence when both are set. `middleware_name` selects the
/// fallback handler to delegate to on interception and defaults to the
/// forbidden handler.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GuardConfig {
    pub name: Option<String>,

    pub value: Option<String>,

    pub middleware_name: Option<String>,
}

impl GuardConfig {
    pub fn with_name(name: impl ToString) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}

/// A guard that requires a named right to pass a request
///
/// The guard never checks the right itself on the interception path. It
/// records the right on the request and hands control to the configured
/// fallback handler, which queries the rights service and decides whether
/// to continue the chain or return a denial. [`RightGuard::is_allowed`] is
/// the direct yes/no capability for callers outside the chain, such as
/// templates or conditional branches.
///
/// Guards are immutable after construction and hold no request state, so a
/// single instance can serve concurrent requests.
#[derive(Debug)]
pub struct RightGuard {
    right_name: String,
    middleware_name: String,
}

impl RightGuard {
    /// Creates a new guard from its declaration
    ///
    /// # Returns
    /// * `Result<Self>` - The guard, or a configuration error when no right
    ///   name was supplied
    pub fn new(config: GuardConfig) -> Result<Self> {
        let right_name = match config.value.or(config.name) {
            Some(name) => name,
            None => bail!(r#"the right guard must be passed a right name, for instance: {{"name": "Admin"}}"#),
        };
        if right_name.is_empty() {
            bail!("the right name cannot be empty");
        }

        let middleware_name = config
            .middleware_name
            .unwrap_or_else(|| FORBIDDEN_MIDDLEWARE.to_string());
        if middleware_name.is_empty() {
            bail!("the middleware name cannot be empty");
        }

        Ok(Self {
            right_name,
            middleware_name,
        })
    }

    pub fn right_name(&self) -> &str {
        &self.right_name
    }

    pub fn middleware_name(&self) -> &str {
        &self.middleware_name
    }

    /// Asks the rights service whether the current actor holds this guard's
    /// right. Pure delegation, no caching.
    pub fn is_allowed(&self, rights_service: &dyn RightsService) -> Result<bool> {
        rights_service.is_allowed(&self.right_name)
    }
}

impl Middleware for RightGuard {
    fn handle(
        &self,
        req: &HttpRequest,
        resp: Response,
        next: Next<'_>,
        registry: &MiddlewareRegistry,
    ) -> Result<Response> {
        req.extensions_mut()
            .insert(RequiredRight(self.right_name.clone()));
        debug!(
            "Right guard {:?} delegating to middleware {:?}",
            self.right_name, self.middleware_name
        );

        let middleware = registry.get(&self.middleware_name)?;
        middleware.handle(req, resp, next, registry)
    }
}
