//! Integration tests for cart (order item) management.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p gamestore-api)
//!
//! Run with: cargo test -p gamestore-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use gamestore_integration_tests::TestContext;

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_cart_requires_token() {
    let ctx = TestContext::new();

    let resp = ctx
        .client
        .get(ctx.url("/cart"))
        .send()
        .await
        .expect("cart request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_cart_add_defaults_quantity_to_one() {
    let ctx = TestContext::new();
    let (_username, _password, token) = ctx.signup_and_login().await;
    let tag = Uuid::new_v4().simple().to_string();
    let (_category_id, _franchise_id, product_id) = ctx.create_catalog_fixture(&tag).await;

    let resp = ctx
        .client
        .post(ctx.url("/cart"))
        .header("Authorization", format!("Token {token}"))
        .json(&json!({ "product_id": product_id }))
        .send()
        .await
        .expect("cart add request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let item: Value = resp.json().await.expect("cart item response not JSON");
    assert_eq!(item["product_id"].as_i64(), Some(product_id));
    assert_eq!(item["qty"].as_i64(), Some(1));
    assert!(item["order_id"].is_null(), "cart line has no order yet");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_cart_readd_preserves_existing_quantity() {
    let ctx = TestContext::new();
    let (_username, _password, token) = ctx.signup_and_login().await;
    let tag = Uuid::new_v4().simple().to_string();
    let (_category_id, _franchise_id, product_id) = ctx.create_catalog_fixture(&tag).await;

    let resp = ctx
        .client
        .post(ctx.url("/cart"))
        .header("Authorization", format!("Token {token}"))
        .json(&json!({ "product_id": product_id, "qty": 3 }))
        .send()
        .await
        .expect("cart add request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let item: Value = resp.json().await.expect("cart item response not JSON");
    assert_eq!(item["qty"].as_i64(), Some(3));

    // Re-adding with a different qty returns the existing line unchanged
    let resp = ctx
        .client
        .post(ctx.url("/cart"))
        .header("Authorization", format!("Token {token}"))
        .json(&json!({ "product_id": product_id, "qty": 7 }))
        .send()
        .await
        .expect("cart add request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let item: Value = resp.json().await.expect("cart item response not JSON");
    assert_eq!(item["qty"].as_i64(), Some(3), "qty must not change on re-add");

    // And there is exactly one line for the product
    let resp = ctx
        .client
        .get(ctx.url("/cart"))
        .header("Authorization", format!("Token {token}"))
        .send()
        .await
        .expect("cart list request failed");
    let items: Value = resp.json().await.expect("cart response not JSON");
    let items = items.as_array().expect("cart list expected");
    let lines = items
        .iter()
        .filter(|i| i["product_id"].as_i64() == Some(product_id))
        .count();
    assert_eq!(lines, 1, "no duplicate cart rows");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_cart_add_unknown_product_404() {
    let ctx = TestContext::new();
    let (_username, _password, token) = ctx.signup_and_login().await;

    let resp = ctx
        .client
        .post(ctx.url("/cart"))
        .header("Authorization", format!("Token {token}"))
        .json(&json!({ "product_id": 999_999_999 }))
        .send()
        .await
        .expect("cart add request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_cart_patch_overwrites_quantity() {
    let ctx = TestContext::new();
    let (_username, _password, token) = ctx.signup_and_login().await;
    let tag = Uuid::new_v4().simple().to_string();
    let (_category_id, _franchise_id, product_id) = ctx.create_catalog_fixture(&tag).await;

    let resp = ctx
        .client
        .post(ctx.url("/cart"))
        .header("Authorization", format!("Token {token}"))
        .json(&json!({ "product_id": product_id, "qty": 2 }))
        .send()
        .await
        .expect("cart add request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Missing qty is a 400
    let resp = ctx
        .client
        .patch(ctx.url(&format!("/cart/{product_id}")))
        .header("Authorization", format!("Token {token}"))
        .json(&json!({}))
        .send()
        .await
        .expect("cart patch request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // With qty, the line is overwritten
    let resp = ctx
        .client
        .patch(ctx.url(&format!("/cart/{product_id}")))
        .header("Authorization", format!("Token {token}"))
        .json(&json!({ "qty": 5 }))
        .send()
        .await
        .expect("cart patch request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let item: Value = resp.json().await.expect("cart item response not JSON");
    assert_eq!(item["qty"].as_i64(), Some(5));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_cart_patch_unknown_product_404() {
    let ctx = TestContext::new();
    let (_username, _password, token) = ctx.signup_and_login().await;

    let resp = ctx
        .client
        .patch(ctx.url("/cart/999999999"))
        .header("Authorization", format!("Token {token}"))
        .json(&json!({ "qty": 5 }))
        .send()
        .await
        .expect("cart patch request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_cart_delete() {
    let ctx = TestContext::new();
    let (_username, _password, token) = ctx.signup_and_login().await;
    let tag = Uuid::new_v4().simple().to_string();
    let (_category_id, _franchise_id, product_id) = ctx.create_catalog_fixture(&tag).await;

    let resp = ctx
        .client
        .post(ctx.url("/cart"))
        .header("Authorization", format!("Token {token}"))
        .json(&json!({ "product_id": product_id }))
        .send()
        .await
        .expect("cart add request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = ctx
        .client
        .delete(ctx.url(&format!("/cart/{product_id}")))
        .header("Authorization", format!("Token {token}"))
        .send()
        .await
        .expect("cart delete request failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // A second delete finds no line
    let resp = ctx
        .client
        .delete(ctx.url(&format!("/cart/{product_id}")))
        .header("Authorization", format!("Token {token}"))
        .send()
        .await
        .expect("cart delete request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
