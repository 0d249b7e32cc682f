//! Declarative right guards for request-handling chains.
//!
//! A [`guard::RightGuard`] binds a named right to a route. When a guarded
//! request comes in, the guard records the right on the request and hands
//! control to a fallback handler resolved by name from a
//! [`middleware::MiddlewareRegistry`]. The default fallback,
//! [`middleware::ForbiddenMiddleware`], consults a pluggable
//! [`rights::RightsService`] and either continues the chain or returns a
//! 403 response.
//!
//! Guards can be constructed directly from a [`guard::GuardConfig`], or
//! declared in configuration and built with [`factory::build`], which
//! validates every declaration before any traffic is served.

pub mod config;
pub mod factory;
pub mod guard;
pub mod middleware;
pub mod response;
pub mod rights;

pub use guard::{GuardConfig, RightGuard};
pub use middleware::{Middleware, MiddlewareRegistry, Next, FORBIDDEN_MIDDLEWARE};
pub use response::Response;
pub use rights::RightsService;
