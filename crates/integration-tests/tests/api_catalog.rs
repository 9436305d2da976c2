//! Integration tests for the catalog: categories, franchises, products,
//! and search.
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
async fn test_category_crud() {
    let ctx = TestContext::new();
    let tag = Uuid::new_v4().simple().to_string();

    let id = ctx.create_category(&format!("crud-{tag}")).await;

    // Retrieve
    let resp = ctx
        .client
        .get(ctx.url(&format!("/categories/{id}")))
        .send()
        .await
        .expect("get category failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("category response not JSON");
    assert_eq!(body["name"], format!("crud-{tag}"));

    // Rename
    let resp = ctx
        .client
        .put(ctx.url(&format!("/categories/{id}")))
        .json(&json!({ "name": format!("renamed-{tag}") }))
        .send()
        .await
        .expect("rename category failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("category response not JSON");
    assert_eq!(body["name"], format!("renamed-{tag}"));

    // Delete
    let resp = ctx
        .client
        .delete(ctx.url(&format!("/categories/{id}")))
        .send()
        .await
        .expect("delete category failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Gone
    let resp = ctx
        .client
        .get(ctx.url(&format!("/categories/{id}")))
        .send()
        .await
        .expect("get category failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_create_category_empty_name_rejected() {
    let ctx = TestContext::new();

    let resp = ctx
        .client
        .post(ctx.url("/categories"))
        .json(&json!({ "name": "   " }))
        .send()
        .await
        .expect("create category failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("error response not JSON");
    assert!(body["name"].is_array());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_franchises_by_category() {
    let ctx = TestContext::new();
    let tag = Uuid::new_v4().simple().to_string();

    let category_id = ctx.create_category(&format!("franchise-home-{tag}")).await;
    let franchise_id = ctx
        .create_franchise(&format!("franchise-{tag}"), category_id)
        .await;

    let resp = ctx
        .client
        .get(ctx.url(&format!("/franchises/{category_id}")))
        .send()
        .await
        .expect("franchises request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("franchises response not JSON");
    let franchises = body.as_array().expect("franchise list expected");
    assert_eq!(franchises.len(), 1);
    assert_eq!(franchises[0]["id"].as_i64(), Some(franchise_id));
    assert_eq!(franchises[0]["category_id"].as_i64(), Some(category_id));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_detail_richer_than_listing() {
    let ctx = TestContext::new();
    let tag = Uuid::new_v4().simple().to_string();
    let (category_id, franchise_id, product_id) = ctx.create_catalog_fixture(&tag).await;

    let resp = ctx
        .client
        .get(ctx.url(&format!("/products/{product_id}")))
        .send()
        .await
        .expect("product detail request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let detail: Value = resp.json().await.expect("detail response not JSON");
    assert_eq!(detail["franchise_id"].as_i64(), Some(franchise_id));
    assert_eq!(detail["franchise_name"], format!("franchise-{tag}"));
    assert_eq!(detail["category_id"].as_i64(), Some(category_id));
    assert_eq!(detail["category_name"], format!("category-{tag}"));
    assert_eq!(detail["favorite_count"].as_i64(), Some(0));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_detail_unknown_404() {
    let ctx = TestContext::new();

    let resp = ctx
        .client
        .get(ctx.url("/products/999999999"))
        .send()
        .await
        .expect("product detail request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_create_requires_existing_franchise() {
    let ctx = TestContext::new();

    let resp = ctx
        .client
        .post(ctx.url("/products"))
        .json(&json!({
            "name": "orphan product",
            "price": "9.99",
            "franchise_id": 999_999_999,
        }))
        .send()
        .await
        .expect("create product failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("error response not JSON");
    assert!(body["franchise_id"].is_array());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_search_matches_franchise_and_category_names() {
    let ctx = TestContext::new();

    // Category named like "RPG": the product under it must be found by a
    // query matching the category name alone, even though neither the
    // product nor the franchise name contains it.
    let tag = Uuid::new_v4().simple().to_string();
    let category_id = ctx.create_category(&format!("RPG-{tag}")).await;
    let franchise_id = ctx
        .create_franchise(&format!("saga-{tag}"), category_id)
        .await;
    let product_id = ctx.create_product(&format!("game-{tag}"), franchise_id).await;

    // Search by category name
    let resp = ctx
        .client
        .get(ctx.url(&format!("/search?q=RPG-{tag}")))
        .send()
        .await
        .expect("search request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let hits: Value = resp.json().await.expect("search response not JSON");
    let hits = hits.as_array().expect("hit list expected");
    assert!(hits.iter().any(|h| h["id"].as_i64() == Some(product_id)));

    // Search by franchise name
    let resp = ctx
        .client
        .get(ctx.url(&format!("/search?q=saga-{tag}")))
        .send()
        .await
        .expect("search request failed");
    let hits: Value = resp.json().await.expect("search response not JSON");
    let hits = hits.as_array().expect("hit list expected");
    assert!(hits.iter().any(|h| h["id"].as_i64() == Some(product_id)));

    // Case-insensitive substring on the product name
    let resp = ctx
        .client
        .get(ctx.url(&format!("/search?q=GAME-{tag}")))
        .send()
        .await
        .expect("search request failed");
    let hits: Value = resp.json().await.expect("search response not JSON");
    let hits = hits.as_array().expect("hit list expected");
    assert!(hits.iter().any(|h| h["id"].as_i64() == Some(product_id)));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_search_without_query_returns_all_products() {
    let ctx = TestContext::new();
    let tag = Uuid::new_v4().simple().to_string();
    let (_category_id, _franchise_id, product_id) = ctx.create_catalog_fixture(&tag).await;

    let resp = ctx
        .client
        .get(ctx.url("/search"))
        .send()
        .await
        .expect("search request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let hits: Value = resp.json().await.expect("search response not JSON");
    let hits = hits.as_array().expect("hit list expected");
    assert!(hits.iter().any(|h| h["id"].as_i64() == Some(product_id)));
}
