mod forbidden;
mod registry;

pub mod pipeline;

pub use forbidden::ForbiddenMiddleware;
pub use registry::MiddlewareRegistry;

use actix_web::HttpRequest;
use anyhow::Result;

use crate::response::Response;

/// Name under which the default forbidden handler is registered.
pub const FORBIDDEN_MIDDLEWARE: &str = "forbidden";

/// Trait for chain-style request middlewares
///
/// A middleware receives the incoming request, the in-progress response and
/// the continuation for the rest of the chain. Per invocation it must do
/// exactly one of two things:
/// - Call `next` to continue the chain
/// - Return a response directly to short-circuit it
///
/// The trait is thread-safe and can be shared across threads.
pub trait Middleware: Send + Sync {
    /// Handles a request at this position in the chain
    ///
    /// # Arguments
    /// * `req` - The incoming HTTP request
    /// * `resp` - The in-progress response value
    /// * `next` - Continuation for the remainder of the chain
    /// * `registry` - Registry to resolve other middlewares by name
    ///
    /// # Returns
    /// * `Result<Response>` - The response produced by this middleware or
    ///   by the rest of the chain
    fn handle(
        &self,
        req: &HttpRequest,
        resp: Response,
        next: Next<'_>,
        registry: &MiddlewareRegistry,
    ) -> Result<Response>;
}

impl std::fmt::Debug for dyn Middleware {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Middleware")
    }
}

/// Single-use continuation representing the rest of the chain.
///
/// `run` consumes the continuation, so a middleware cannot invoke the
/// remainder of the chain more than once.
pub struct Next<'a> {
    f: Box<dyn FnOnce(&HttpRequest, Response) -> Result<Response> + 'a>,
}

impl<'a> Next<'a> {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(&HttpRequest, Response) -> Result<Response> + 'a,
    {
        Self { f: Box::new(f) }
    }

    /// Runs the remainder of the chain.
    pub fn run(self, req: &HttpRequest, resp: Response) -> Result<Response> {
        (self.f)(req, resp)
    }
}

/// The right a guard recorded on the request before delegating to its
/// fallback handler. Stored in the request's extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredRight(pub String);
