use std::sync::Arc;

use actix_web::HttpRequest;
use anyhow::Result;

use crate::response::Response;

use super::{Middleware, MiddlewareRegistry, Next};

/// An ordered middleware chain executed by position
///
/// Each middleware receives a continuation for the remainder of the chain;
/// the terminal handler runs once every middleware has called through. A
/// middleware that returns without calling its continuation short-circuits
/// everything after it, the terminal handler included.
pub struct Pipeline {
    middlewares: Vec<Arc<dyn Middleware>>,
    registry: Arc<MiddlewareRegistry>,
}

impl Pipeline {
    /// Creates a new pipeline
    ///
    /// # Arguments
    /// * `middlewares` - Middlewares to execute, in order
    /// * `registry` - Registry handed to every middleware for name lookups
    pub fn new(middlewares: Vec<Arc<dyn Middleware>>, registry: Arc<MiddlewareRegistry>) -> Self {
        Self {
            middlewares,
            registry,
        }
    }

    /// Runs the chain, ending at the terminal handler
    pub fn handle<'a, F>(&'a self, req: &HttpRequest, resp: Response, terminal: F) -> Result<Response>
    where
        F: FnOnce(&HttpRequest, Response) -> Result<Response> + 'a,
    {
        self.run_from(0, req, resp, Box::new(terminal))
    }

    fn run_from<'a>(
        &'a self,
        idx: usize,
        req: &HttpRequest,
        resp: Response,
        terminal: Box<dyn FnOnce(&HttpRequest, Response) -> Result<Response> + 'a>,
    ) -> Result<Response> {
        match self.middlewares.get(idx) {
            Some(middleware) => {
                let next = Next::new(move |req, resp| self.run_from(idx + 1, req, resp, terminal));
                middleware.handle(req, resp, next, &self.registry)
            }
            None => terminal(req, resp),
        }
    }
}
