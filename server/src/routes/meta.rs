//! Site metadata endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use site::i18n::Locale;

use crate::state::AppState;

#[cfg(test)]
#[path = "meta_test.rs"]
mod meta_test;

/// Payload returned by `GET /api/site`.
#[derive(Debug, Serialize)]
pub struct SiteInfo {
    pub name: String,
    pub version: &'static str,
    pub locales: Vec<Locale>,
}

/// Report the site name, build version, and available locales.
pub async fn site_info(State(state): State<AppState>) -> Json<SiteInfo> {
    Json(SiteInfo {
        name: state.config.site_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        locales: Locale::ALL.to_vec(),
    })
}
