mod common;

use common::TestApp;
use http::StatusCode;
use serde_json::json;

fn ana_at_table(table: i32) -> serde_json::Value {
    json!({
        "client_name": "Ana",
        "total_price": 25.5,
        "items": [{"name": "Pizza", "price": 25.5, "image_path": "pizza.jpg"}],
        "table_number": table,
    })
}

#[tokio::test]
async fn test_place_order_occupies_table() {
    let app = TestApp::new();
    app.repo.seed_table(4);

    let (status, body) = app.post("/commandes", ana_at_table(4)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "pending");
    assert!(body["order_id"].is_i64());
    assert!(body["commande_id"].is_i64());
    assert!(body["message"].is_string());

    let (status, table) = app.get("/tables/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(table["status"], "occupied");
    assert_eq!(table["order_summary"], "1 plat(s) pour Ana");
    assert!(!table["time_occupied"].is_null());
}

#[tokio::test]
async fn test_commande_done_releases_table() {
    let app = TestApp::new();
    app.repo.seed_table(4);
    let (_, placed) = app.post("/commandes", ana_at_table(4)).await;
    let id = placed["commande_id"].as_i64().unwrap();

    let (status, body) = app
        .put(&format!("/commandes/{id}/status"), json!({"status": "done"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "status": "done"}));

    let (_, check) = app.get("/check-table/4").await;
    assert_eq!(check, json!({"status": "free"}));
    let (_, table) = app.get("/tables/4").await;
    assert!(table["order_summary"].is_null());
    assert!(table["time_occupied"].is_null());
}

#[tokio::test]
async fn test_order_status_transition() {
    let app = TestApp::new();
    app.repo.seed_table(2);
    let (_, placed) = app.post("/commandes", ana_at_table(2)).await;
    let id = placed["order_id"].as_i64().unwrap();

    let (status, body) = app
        .put(&format!("/orders/{id}/status"), json!({"status": "in_progress"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "in_progress");

    let (status, order) = app.get(&format!("/orders/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["status"], "in_progress");
    assert_eq!(order["client_name"], "Ana");

    app.put(&format!("/orders/{id}/status"), json!({"status": "done"}))
        .await;
    let (_, check) = app.get("/check-table/2").await;
    assert_eq!(check["status"], "free");
}

#[tokio::test]
async fn test_invalid_status_rejected() {
    let app = TestApp::new();
    let (_, placed) = app.post("/commandes", ana_at_table(1)).await;
    let id = placed["commande_id"].as_i64().unwrap();

    for payload in [json!({"status": "cancelled"}), json!({})] {
        let (status, body) = app.put(&format!("/commandes/{id}/status"), payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 4003);
    }

    let (status, _) = app
        .put("/orders/1/status", json!({"status": "DONE"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_order_survives_table_update_failure() {
    let app = TestApp::new();
    app.repo.seed_table(4);
    app.repo.fail_table_writes(true);

    let (status, placed) = app.post("/commandes", ana_at_table(4)).await;
    assert_eq!(status, StatusCode::OK);

    let order_id = placed["order_id"].as_i64().unwrap();
    let (status, _) = app.get(&format!("/orders/{order_id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, commandes) = app.get("/commandes").await;
    assert_eq!(commandes.as_array().unwrap().len(), 1);
    assert_eq!(commandes[0]["id"], placed["commande_id"]);

    app.repo.fail_table_writes(false);
    let (_, table) = app.get("/tables/4").await;
    assert_eq!(table["status"], "free");
}

#[tokio::test]
async fn test_place_order_validation() {
    let app = TestApp::new();

    let cases = [
        (json!({"items": [{"name": "Pizza", "price": 10}]}), 4004),
        (json!({"total_price": 0, "items": [{"name": "Pizza", "price": 10}]}), 4004),
        (json!({"total_price": 0.001, "items": [{"name": "Pizza", "price": 10}]}), 4004),
        (json!({"total_price": 100000000, "items": [{"name": "Pizza", "price": 10}]}), 4004),
        (json!({"total_price": 10, "items": [{"name": "Pizza", "price": 12.345}]}), 6001),
        (json!({"total_price": 10, "items": []}), 4002),
        (json!({"total_price": 10}), 4002),
        (json!({"total_price": 10, "items": [{"price": 10}]}), 7),
        (json!({"total_price": 10, "items": [{"name": "Pizza", "price": 10, "quantity": 0}]}), 8),
    ];
    for (payload, code) in cases {
        let (status, body) = app.post("/commandes", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], code);
    }

    // Nothing was written
    let (_, commandes) = app.get("/commandes").await;
    assert_eq!(commandes, json!([]));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::new();

    let request = http::Request::builder()
        .method("POST")
        .uri("/commandes")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = http::Request::builder()
        .method("POST")
        .uri("/commandes")
        .body(axum::body::Body::from(ana_at_table(1).to_string()))
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, _) = app
        .put("/commandes/abc/status", json!({"status": "done"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_commande_listings() {
    let app = TestApp::new();
    app.post("/commandes", ana_at_table(1)).await;
    app.post(
        "/commandes",
        json!({
            "client_name": "Bob",
            "total_price": 12,
            "items": [{
                "name": "Burger",
                "price": 10.5,
                "quantity": 1,
                "supplements": [{"name": "Cheddar", "price": 1.5}]
            }],
            "client_id": "device-42",
        }),
    )
    .await;

    let (status, short) = app.get("/commandes").await;
    assert_eq!(status, StatusCode::OK);
    // Newest first
    assert_eq!(short[0]["client_name"], "Bob");
    assert_eq!(short[0]["client_id"], "device-42");
    assert_eq!(short[1]["client_name"], "Ana");
    assert_eq!(short[1]["total_price"], 25.5);
    assert_eq!(short[1]["items"][0]["food_name"], "Pizza");
    assert_eq!(short[1]["items"][0]["quantity"], 1);
    assert!(short[1]["items"][0].get("image_path").is_none());

    let (status, full) = app.get("/commandes_with_items").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(full[0]["items"][0]["supplements"][0]["name"], "Cheddar");
    assert_eq!(full[1]["items"][0]["image_path"], "pizza.jpg");
    assert!(full[1]["client_id"].is_null());
}

#[tokio::test]
async fn test_missing_order_fetch_fails_but_status_update_is_acknowledged() {
    let app = TestApp::new();
    let (status, body) = app.get("/orders/999").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 9004);

    let (status, body) = app
        .put("/commandes/999/status", json!({"status": "done"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "status": "done"}));
}

#[tokio::test]
async fn test_client_order_lookup() {
    let app = TestApp::new();
    app.post("/commandes", ana_at_table(4)).await;
    let mut second = ana_at_table(4);
    second["total_price"] = json!(9);
    second["items"] = json!([{"name": "Tiramisu", "price": 9}]);
    let (_, latest) = app.post("/commandes", second).await;

    let (status, body) = app.get("/client-order?client_name=Ana&table_number=4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], latest["commande_id"]);
    assert_eq!(body["items"][0]["food_name"], "Tiramisu");

    let (status, body) = app.get("/client-order?client_name=Ana&table_number=5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);

    for uri in [
        "/client-order",
        "/client-order?client_name=Ana",
        "/client-order?table_number=4",
        "/client-order?client_name=Ana&table_number=four",
    ] {
        let (status, _) = app.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}
