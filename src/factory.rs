use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use crate::config::GuardsConfig;
use crate::guard::RightGuard;
use crate::middleware::{ForbiddenMiddleware, MiddlewareRegistry, FORBIDDEN_MIDDLEWARE};
use crate::rights::RightsService;

/// Builds a registry holding the default forbidden handler.
///
/// Additional middlewares can be registered on the result before it is
/// shared.
pub fn build_registry(rights_service: Arc<dyn RightsService>) -> MiddlewareRegistry {
    let mut registry = MiddlewareRegistry::new();
    registry.register(
        FORBIDDEN_MIDDLEWARE,
        Arc::new(ForbiddenMiddleware::new(rights_service)),
    );
    registry
}

/// Builds guards from their declarations.
pub fn build_guards(cfg: &GuardsConfig) -> Result<Vec<RightGuard>> {
    let mut guards = Vec::with_capacity(cfg.guards.len());
    for (idx, guard_cfg) in cfg.guards.iter().enumerate() {
        let guard = RightGuard::new(guard_cfg.clone())
            .with_context(|| format!("build guard at index {idx}"))?;
        guards.push(guard);
    }
    Ok(guards)
}

/// Builds the complete guard layer from configuration.
///
/// Validates the configuration and checks every guard's fallback handler
/// against the registry, so a bad declaration fails here rather than on the
/// first request that hits it.
pub fn build(mut cfg: GuardsConfig) -> Result<(MiddlewareRegistry, Vec<RightGuard>)> {
    cfg.complete().context("complete guards config")?;

    let rights_service = cfg.rights.build();
    let registry = build_registry(rights_service);

    let guards = build_guards(&cfg)?;
    registry.validate(&guards)?;

    info!("Built {} right guards", guards.len());
    Ok((registry, guards))
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use crate::middleware::pipeline::Pipeline;
    use crate::response::Response;

    use super::*;

    fn test_config() -> GuardsConfig {
        serde_json::from_str(
            r#"{
                "rights": {"rights": ["Admin"]},
                "guards": [{"name": "Admin"}, {"name": "Editor"}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_build() {
        let (registry, guards) = build(test_config()).unwrap();
        assert_eq!(guards.len(), 2);
        assert!(registry.contains(FORBIDDEN_MIDDLEWARE));
    }

    #[test]
    fn test_build_unknown_middleware() {
        let cfg: GuardsConfig = serde_json::from_str(
            r#"{"guards": [{"name": "Admin", "middleware_name": "no_such"}]}"#,
        )
        .unwrap();
        let err = build(cfg).unwrap_err();
        assert!(err.to_string().contains("unknown middleware"));
    }

    #[test]
    fn test_guarded_pipeline() {
        let (registry, mut guards) = build(test_config()).unwrap();
        let registry = Arc::new(registry);

        // "Admin" is granted by the configured rights, "Editor" is not.
        let editor = guards.pop().unwrap();
        let admin = guards.pop().unwrap();

        let pipeline = Pipeline::new(vec![Arc::new(admin)], registry.clone());
        let req = TestRequest::default().to_http_request();
        let resp = pipeline
            .handle(&req, Response::ok(), |_req, resp| Ok(resp))
            .unwrap();
        assert!(resp.is_ok());

        let pipeline = Pipeline::new(vec![Arc::new(editor)], registry);
        let req = TestRequest::default().to_http_request();
        let resp = pipeline
            .handle(&req, Response::ok(), |_req, _resp| {
                panic!("denied request must not reach the terminal handler");
            })
            .unwrap();
        assert_eq!(resp.code, 403);
    }
}
