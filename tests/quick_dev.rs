//! Smoke test against a running server (`cargo run`, then `cargo test -- --ignored quick_dev`).

use anyhow::Result;
use serde_json::json;

#[tokio::test]
#[ignore]
async fn quick_dev() -> Result<()> {
    let hc = httpc_test::new_client("http://localhost:8080")?;

    hc.do_post(
        "/api/links",
        json!({
            "route": "app_search_params",
            "parameters": { "type": "foo" },
            "total": 210,
            "per_page": 10,
            "sort": { "id": "asc" },
            "page": 11
        }),
    )
    .await?
    .print()
    .await?;

    hc.do_post(
        "/api/links/entries",
        json!({ "route": "app_search", "total": 500, "per_page": 10, "page": 3 }),
    )
    .await?
    .print()
    .await?;

    hc.do_post("/api/links", json!({ "route": "app_search", "total": 1.1 }))
        .await?
        .print()
        .await?;

    Ok(())
}
