//! Router tests: rendered screens and redirect chains.

use catalog_admin::api::client::HttpApiClient;
use catalog_admin::app::App;
use catalog_admin::core::messages::{Locale, Message};
use catalog_admin::core::models::ProductId;
use catalog_admin::core::routes::Route;
use catalog_admin::core::session::{MemorySessionStore, SessionStore};
use mockito::Server;
use serde_json::json;
use std::sync::Arc;

fn app(base_url: &str, session: Arc<MemorySessionStore>, locale: Locale) -> App {
    let api = Arc::new(HttpApiClient::new(base_url).expect("Failed to build client"));
    App::new(api, session, locale)
}

fn products_body() -> String {
    json!([
        {
            "id": 1,
            "name": "ノートPC",
            "description": "x".repeat(120),
            "price": 128000,
            "stock": 3,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-03-15 10:00:00"
        },
        { "id": "bad" },
        {
            "id": 2,
            "name": "マウス",
            "description": "無線",
            "price": 2980.5,
            "stock": 0,
            "created_at": "not a date",
            "updated_at": "2024-01-01"
        }
    ])
    .to_string()
}

#[tokio::test]
async fn test_product_list_screen() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/product")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(products_body())
        .create_async()
        .await;
    let session = Arc::new(MemorySessionStore::with_token("abc"));
    let app = app(&server.url(), session, Locale::Ja);

    let screen = app.visit(Route::ProductList).await;

    assert_eq!(screen.route, Route::ProductList);
    assert!(screen.error.is_none());
    assert!(screen.body.contains("製品一覧"));
    assert!(screen.body.contains("ノートPC"));
    assert!(screen.body.contains("￥128,000"));
    assert!(screen.body.contains("￥2,981"));
    assert!(screen.body.contains("3個"));
    assert!(screen.body.contains("在庫なし"));
    assert!(screen.body.contains("2024年1月1日"));
    assert!(screen.body.contains("2024年3月15日"));
    assert!(screen.body.contains("Invalid Date"));
    assert!(screen.body.contains(&format!("{}...", "x".repeat(100))));
    assert!(!screen.body.contains(&"x".repeat(101)));
    assert!(screen.body.contains("(/product/1)"));
    assert!(screen.body.contains("(/product/1/edit)"));
}

#[tokio::test]
async fn test_dashboard_rejected_token_ends_on_login() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/user")
        .with_status(401)
        .create_async()
        .await;
    let session = Arc::new(MemorySessionStore::with_token("expired"));
    let app = app(&server.url(), session.clone(), Locale::En);

    let screen = app.visit(Route::Dashboard).await;

    assert!(screen.is_login());
    assert!(screen
        .body
        .contains(Message::AuthenticationFailed.text(Locale::En)));
    assert!(screen.body.contains("Login required"));
    assert!(session.get().unwrap().is_none());
}

#[tokio::test]
async fn test_dashboard_screen() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/user")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":1,"name":"Admin","email":"admin@example.com"}"#)
        .create_async()
        .await;
    let session = Arc::new(MemorySessionStore::with_token("abc"));
    let app = app(&server.url(), session, Locale::En);

    let screen = app.visit(Route::Home).await;

    assert_eq!(screen.route, Route::Dashboard);
    assert!(screen.body.contains("admin@example.com"));
    assert!(screen.body.contains("(/product)"));
}

#[tokio::test]
async fn test_detail_delete_flow_lands_on_list() {
    let mut server = Server::new_async().await;
    let _detail = server
        .mock("GET", "/api/product/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": 1, "name": "ノートPC", "description": "軽量", "price": 1000,
                "stock": 1, "created_at": "2024-01-01", "updated_at": "2024-01-01"
            })
            .to_string(),
        )
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/product/1")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/api/product")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;
    let session = Arc::new(MemorySessionStore::with_token("abc"));
    let app = app(&server.url(), session, Locale::Ja);

    let mut prompted = String::new();
    let screen = app
        .delete_from_detail(ProductId::new(1), |page| {
            prompted = page.to_string();
            true
        })
        .await;

    delete.assert_async().await;
    list.assert_async().await;
    assert!(prompted.contains("ノートPC を削除してもよろしいですか"));
    assert_eq!(screen.route, Route::ProductList);
    assert!(screen.body.contains("製品が見つかりませんでした。"));
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("GET", "/api/product")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(products_body())
        .expect(1)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let session = Arc::new(MemorySessionStore::with_token("abc"));
    let app = app(&server.url(), session, Locale::Ja);

    let screen = app.delete_from_list(ProductId::new(1), |_| false).await;

    delete.assert_async().await;
    assert_eq!(screen.route, Route::ProductList);
    assert!(!screen.body.contains("削除の確認"));
}
