use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use anyhow::Result;
use log::{debug, warn};

use crate::response::Response;
use crate::rights::RightsService;

use super::{Middleware, MiddlewareRegistry, Next, RequiredRight};

/// Default fallback handler for right guards
///
/// Reads the right recorded on the request by the guard, asks the rights
/// service whether the current actor holds it, and either continues the
/// chain or returns a 403 response. Requests carrying no recorded right are
/// denied.
pub struct ForbiddenMiddleware {
    rights_service: Arc<dyn RightsService>,
}

impl ForbiddenMiddleware {
    /// Creates a new instance checking rights against the given service
    pub fn new(rights_service: Arc<dyn RightsService>) -> Self {
        Self { rights_service }
    }
}

impl Middleware for ForbiddenMiddleware {
    fn handle(
        &self,
        req: &HttpRequest,
        resp: Response,
        next: Next<'_>,
        _registry: &MiddlewareRegistry,
    ) -> Result<Response> {
        let right = req.extensions().get::<RequiredRight>().cloned();
        let right = match right {
            Some(RequiredRight(right)) => right,
            None => {
                warn!("Request {:?} has no recorded right, denying", req.path());
                return Ok(Response::forbidden("no right to check"));
            }
        };

        if self.rights_service.is_allowed(&right)? {
            debug!("Right {right:?} granted, continuing chain");
            return next.run(req, resp);
        }

        warn!("Right {right:?} denied for {:?}", req.path());
        Ok(Response::forbidden(format!("missing right {right:?}")))
    }
}
