//! Router over a live PostgreSQL database
//!
//! Runs only when `TEST_DATABASE_URL` is set; every test works in a schema of
//! its own, so the suite can share one database.

mod common;

use common::TestApp;
use http::StatusCode;
use resto_server::db::{CategoryRepository, PgRepository, RepoError};
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};

/// Fresh schema with migrations applied, or `None` when no database is configured
async fn pg_app() -> Option<(TestApp<PgRepository>, PgPool)> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return None;
    };

    let schema = format!("resto_test_{}", uuid::Uuid::new_v4().simple());
    let admin = PgPool::connect(&url).await.unwrap();
    admin
        .execute(format!("CREATE SCHEMA {schema}").as_str())
        .await
        .unwrap();
    admin.close().await;

    let pool = PgPoolOptions::new()
        .max_connections(8)
        .after_connect(move |conn, _meta| {
            let sql = format!("SET search_path TO {schema}");
            Box::pin(async move {
                conn.execute(sql.as_str()).await?;
                Ok(())
            })
        })
        .connect(&url)
        .await
        .unwrap();
    let repo = PgRepository::from_pool(pool.clone()).await.unwrap();
    Some((TestApp::with_repo(repo), pool))
}

async fn create_item(app: &TestApp<PgRepository>, name: &str, price: Value) -> i64 {
    let (status, body) = app
        .post("/menu", json!({"name": name, "category": "Plats", "price": price}))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_pg_placement_occupies_and_releases_table() {
    let Some((app, pool)) = pg_app().await else {
        return;
    };
    sqlx::query("INSERT INTO tables (number) VALUES (4)")
        .execute(&pool)
        .await
        .unwrap();

    let (status, placed) = app
        .post(
            "/commandes",
            json!({
                "client_name": "Ana",
                "total_price": 25.5,
                "items": [{
                    "name": "Pizza",
                    "price": 25.5,
                    "supplements": [{"name": "Cheddar", "price": 1.5}],
                }],
                "table_number": 4,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{placed}");
    let id = placed["commande_id"].as_i64().unwrap();

    let (_, table) = app.get("/tables/4").await;
    assert_eq!(table["status"], "occupied");
    assert_eq!(table["order_summary"], "1 plat(s) pour Ana");

    let (_, full) = app.get("/commandes_with_items").await;
    assert_eq!(full[0]["total_price"], 25.5);
    assert_eq!(full[0]["items"][0]["supplements"][0]["name"], "Cheddar");

    let (status, _) = app
        .put(&format!("/commandes/{id}/status"), json!({"status": "done"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, check) = app.get("/check-table/4").await;
    assert_eq!(check, json!({"status": "free"}));
}

#[tokio::test]
async fn test_pg_prices_round_trip_exactly() {
    let Some((app, _pool)) = pg_app().await else {
        return;
    };

    let id = create_item(&app, "Lasagne", json!(12.35)).await;
    let (_, menu) = app.get("/menu").await;
    assert_eq!(menu[0]["id"], id);
    assert_eq!(menu[0]["price"], 12.35);

    for price in [json!(12.345), json!(0.001), json!(123456789.5)] {
        let (status, body) = app
            .post("/menu", json!({"name": "Risotto", "category": "Plats", "price": price}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 6001);
    }

    let (status, body) = app
        .post(
            "/commandes",
            json!({"total_price": 0.001, "items": [{"name": "Pizza", "price": 10}]}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4004);

    let (_, menu) = app.get("/menu").await;
    assert_eq!(menu.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_pg_category_names_are_unique() {
    let Some((app, _pool)) = pg_app().await else {
        return;
    };

    let (status, _) = app.post("/categories", json!({"name": "Drinks"})).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = app.post("/categories", json!({"name": "Drinks"})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 6002);

    // The unique index catches what the pre-check misses
    let err = app.repo.create_category("Drinks").await.unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_pg_concurrent_daily_special_moves() {
    let Some((app, _pool)) = pg_app().await else {
        return;
    };

    let mut ids = Vec::new();
    for n in 0..6 {
        ids.push(create_item(&app, &format!("Plat {n}"), json!(10 + n)).await);
    }

    for _round in 0..5 {
        let handles: Vec<_> = ids
            .iter()
            .map(|&id| {
                let app = app.clone();
                tokio::spawn(async move {
                    app.put("/specials/daily", json!({"food_item_id": id})).await
                })
            })
            .collect();
        for handle in handles {
            let (status, body) = handle.await.unwrap();
            assert_eq!(status, StatusCode::OK, "{body}");
        }

        let (_, menu) = app.get("/menu").await;
        let flagged = menu
            .as_array()
            .unwrap()
            .iter()
            .filter(|item| item["is_daily_special"] == true)
            .count();
        assert_eq!(flagged, 1);
    }
}
