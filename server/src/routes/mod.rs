//! Router assembly.
//!
//! Binds the Leptos SSR routes, the static asset service, and the small
//! JSON surface (health probe, site metadata) under a single Axum router.

pub mod meta;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON routes: health probe and site metadata.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/site", get(meta::site_info))
        .with_state(state)
}

/// Full application router: JSON surface + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// or malformed `Cargo.toml` metadata).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(site::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || site::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
