use super::*;

// =============================================================================
// healthz
// =============================================================================

#[tokio::test]
async fn healthz_reports_ok_and_crate_version() {
    let Json(body) = healthz().await;
    assert_eq!(body, Health { status: "ok", version: env!("CARGO_PKG_VERSION") });
}

#[test]
fn health_serializes_as_flat_object() {
    let json = serde_json::to_value(Health { status: "ok", version: "1.2.3" }).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "ok", "version": "1.2.3" }));
}
