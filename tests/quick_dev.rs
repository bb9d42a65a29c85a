use anyhow::Result;
use serde_json::json;

// Smoke script against a locally running server.
// Run with: cargo test quick_dev -- --ignored --nocapture
#[tokio::test]
#[ignore = "needs a running server on localhost:8080"]
async fn quick_dev() -> Result<()> {
    let hc = httpc_test::new_client("http://localhost:8080")?;

    hc.do_post(
        "/api/auth/register",
        json!({
          "loginId": "john_doe",
          "password": "123456",
          "email": "john@mail.com",
          "nickname": "johnny",
        }),
    )
    .await?
    .print()
    .await?;

    hc.do_post(
        "/api/categories",
        json!({
          "name": "design",
        }),
    )
    .await?
    .print()
    .await?;

    hc.do_get("/?page=0&size=12").await?.print().await?;

    hc.do_get("/api/posts?page=0&size=12&category=design")
        .await?
        .print()
        .await?;

    hc.do_post("/api/ops/dummy-data", json!({ "posts": 20 }))
        .await?
        .print()
        .await?;

    hc.do_delete("/api/ops/dummy-data").await?.print().await?;

    Ok(())
}
