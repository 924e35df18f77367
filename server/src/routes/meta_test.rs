use super::*;

use crate::config::ServerConfig;

fn sample_state() -> AppState {
    AppState::new(ServerConfig { port: 3000, site_name: "Gulfgate".to_owned() })
}

#[tokio::test]
async fn site_info_reports_name_and_version() {
    let info = site_info(State(sample_state())).await.0;
    assert_eq!(info.name, "Gulfgate");
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn site_info_lists_both_locales_in_order() {
    let info = site_info(State(sample_state())).await.0;
    let json = serde_json::to_value(&info).expect("serialize");
    assert_eq!(json["locales"], serde_json::json!(["en", "ar"]));
}

#[tokio::test]
async fn site_name_override_flows_through() {
    let state = AppState::new(ServerConfig { port: 3000, site_name: "Gulfgate Staging".to_owned() });
    let info = site_info(State(state)).await.0;
    assert_eq!(info.name, "Gulfgate Staging");
}
