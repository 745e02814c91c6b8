use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use storefront_server::api::build_app;
use storefront_server::auth::ADMIN_KEY_HEADER;
use storefront_server::core::BackendConfig;
use storefront_server::core::config::DEFAULT_ADMIN_KEY;
use storefront_server::db::csv::PRODUCTS_CSV_HEADER;
use storefront_server::{Config, ServerState};
use tempfile::TempDir;
use tower::ServiceExt;

async fn test_app() -> (TempDir, Router) {
    test_app_with(|_| {}).await
}

async fn test_app_with(configure: impl FnOnce(&mut Config)) -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    let mut config = Config::for_work_dir(dir.path().to_string_lossy().to_string());
    configure(&mut config);
    let state = ServerState::initialize(&config).await.unwrap();
    (dir, build_app(state))
}

/// Nothing listens on port 1, so every backend call fails fast
async fn unreachable_backend_app() -> (TempDir, Router) {
    test_app_with(|config| {
        config.backend = Some(BackendConfig::new("http://127.0.0.1:1", "service-key").with_timeout(2));
    })
    .await
}

async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send_raw(app, request).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&body).unwrap()
    };
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn admin(mut request: Request<Body>) -> Request<Body> {
    request
        .headers_mut()
        .insert(ADMIN_KEY_HEADER, DEFAULT_ADMIN_KEY.parse().unwrap());
    request
}

fn checkout_body(items: Value) -> Value {
    json!({
        "customerName": "Ana Ruiz",
        "customerEmail": "ana@example.com",
        "customerPhone": "555-0100",
        "companyName": "Ruiz Taqueria",
        "deliveryAddress": "12 Market St",
        "items": items,
    })
}

#[tokio::test]
async fn test_health_reports_seeded_catalog() {
    let (_dir, app) = test_app().await;
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["backendConfigured"], false);
    assert!(body["products"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_product_search_and_lookup() {
    let (_dir, app) = test_app().await;

    let (status, body) = send(&app, get("/api/products?q=tomato")).await;
    assert_eq!(status, StatusCode::OK);
    let products = body["products"].as_array().unwrap();
    assert_eq!(body["total"].as_u64().unwrap() as usize, products.len());
    assert!(products.iter().any(|p| p["id"] == "TOM001"));
    assert!(!products.iter().any(|p| p["id"] == "TOR001"));

    let (status, body) = send(&app, get("/api/products/AVG001")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["image"], "/images/categories/avocados.jpg");

    let (status, _) = send(&app, get("/api/products/NOPE99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/api/products?category=spaceships")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cart_quote_rounds_tax() {
    let (_dir, app) = test_app().await;
    let body = json!({"items": [
        {"productId": "TOR001", "quantity": 2},
        {"productId": "TOM001", "quantity": 0},
    ]});
    let (status, quote) = send(&app, json_request("POST", "/api/cart/quote", body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["items"].as_array().unwrap().len(), 1);
    assert_eq!(quote["itemCount"], 2);
    assert_eq!(quote["totals"]["subtotal"], json!(25.0));
    assert_eq!(quote["totals"]["tax"], json!(2.06));
    assert_eq!(quote["totals"]["total"], json!(27.06));
}

#[tokio::test]
async fn test_checkout_and_order_lookup() {
    let (_dir, app) = test_app().await;

    let body = checkout_body(json!([{"productId": "TOR001", "quantity": 2}]));
    let (status, created) = send(&app, json_request("POST", "/api/orders", body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let order = &created["order"];
    assert_eq!(order["status"], "pending");
    assert_eq!(order["total"], json!(27.06));
    assert!(order["orderNumber"].as_str().unwrap().starts_with("SE-"));
    assert!(created["remote"].is_null());

    let id = order["id"].as_str().unwrap();
    let (status, fetched) = send(&app, get(&format!("/api/orders/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], id);

    let (status, history) = send(&app, get("/api/orders?email=ANA@example.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().unwrap().len(), 1);

    let (status, notifications) = send(&app, get("/api/notifications")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        notifications
            .as_array()
            .unwrap()
            .iter()
            .any(|n| n["level"] == "success")
    );
}

#[tokio::test]
async fn test_checkout_rejections() {
    let (_dir, app) = test_app().await;

    let (status, _) = send(&app, json_request("POST", "/api/orders", checkout_body(json!([])))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let unknown = checkout_body(json!([{"productId": "NOPE99", "quantity": 1}]));
    let (status, _) = send(&app, json_request("POST", "/api/orders", unknown)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let mut bad_email = checkout_body(json!([{"productId": "TOR001", "quantity": 1}]));
    bad_email["customerEmail"] = json!("not-an-email");
    let (status, _) = send(&app, json_request("POST", "/api/orders", bad_email)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, orders) = send(&app, admin(get("/api/admin/orders"))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(orders.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_checkout_rejects_quantity_over_cap() {
    let (_dir, app) = test_app().await;

    let body = checkout_body(json!([{"productId": "TOR001", "quantity": 20000}]));
    let (status, error) = send(&app, json_request("POST", "/api/orders", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 7002);

    let split = checkout_body(json!([
        {"productId": "TOR001", "quantity": 9000},
        {"productId": "TOR001", "quantity": 1000},
    ]));
    let (status, _) = send(&app, json_request("POST", "/api/orders", split)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let quote = json!({"items": [{"productId": "TOR001", "quantity": 20000}]});
    let (status, _) = send(&app, json_request("POST", "/api/cart/quote", quote)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, orders) = send(&app, admin(get("/api/admin/orders"))).await;
    assert!(orders.as_array().unwrap().is_empty());

    let at_cap = checkout_body(json!([{"productId": "TOR001", "quantity": 9999}]));
    let (status, created) = send(&app, json_request("POST", "/api/orders", at_cap)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["order"]["items"][0]["quantity"], 9999);
}

#[tokio::test]
async fn test_checkout_survives_unreachable_backend() {
    let (_dir, app) = unreachable_backend_app().await;

    let (_, health) = send(&app, get("/health")).await;
    assert_eq!(health["backendConfigured"], true);

    let body = checkout_body(json!([{"productId": "TOR001", "quantity": 2}]));
    let (status, created) = send(&app, json_request("POST", "/api/orders", body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["remote"]["data"].is_null());
    assert!(created["remote"]["error"].is_string());

    let id = created["order"]["id"].as_str().unwrap();
    let (status, fetched) = send(&app, get(&format!("/api/orders/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["total"], json!(27.06));

    let (_, notifications) = send(&app, get("/api/notifications")).await;
    let errors: Vec<&Value> = notifications
        .as_array()
        .unwrap()
        .iter()
        .filter(|n| n["level"] == "error")
        .collect();
    assert_eq!(errors.len(), 1);
}

#[tokio::test]
async fn test_price_edit_survives_unreachable_backend() {
    let (_dir, app) = unreachable_backend_app().await;

    let patch = admin(json_request(
        "PATCH",
        "/api/admin/products/TOR001",
        json!({"price": 13.0}),
    ));
    let (status, product) = send(&app, patch).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["price"], json!(13.0));

    let (_, history) = send(&app, admin(get("/api/admin/price-history?productId=TOR001"))).await;
    assert_eq!(history.as_array().unwrap().len(), 1);

    let (_, notifications) = send(&app, get("/api/notifications")).await;
    assert!(
        notifications
            .as_array()
            .unwrap()
            .iter()
            .any(|n| n["level"] == "error")
    );
}

#[tokio::test]
async fn test_admin_guard() {
    let (_dir, app) = test_app().await;

    let (status, _) = send(&app, get("/api/admin/orders")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let mut wrong = get("/api/admin/orders");
    wrong
        .headers_mut()
        .insert(ADMIN_KEY_HEADER, "guess".parse().unwrap());
    let (status, _) = send(&app, wrong).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let login = json_request("POST", "/api/admin/login", json!({"key": DEFAULT_ADMIN_KEY}));
    let (status, _) = send(&app, login).await;
    assert_eq!(status, StatusCode::OK);

    let login = json_request("POST", "/api/admin/login", json!({"key": "guess"}));
    let (status, _) = send(&app, login).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_price_edit_records_history() {
    let (_dir, app) = test_app().await;

    let patch = admin(json_request(
        "PATCH",
        "/api/admin/products/TOR001",
        json!({"price": 13.0}),
    ));
    let (status, product) = send(&app, patch).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["price"], json!(13.0));

    let (status, history) = send(&app, admin(get("/api/admin/price-history?productId=TOR001"))).await;
    assert_eq!(status, StatusCode::OK);
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["oldPrice"], json!(12.5));
    assert_eq!(history[0]["newPrice"], json!(13.0));
    assert_eq!(history[0]["changedBy"], "admin");

    let negative = admin(json_request(
        "PATCH",
        "/api/admin/products/TOR001",
        json!({"price": -1.0}),
    ));
    let (status, _) = send(&app, negative).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let bulk = admin(json_request(
        "POST",
        "/api/admin/products/prices",
        json!({"prices": {"TOR001": 13.0, "TOM001": 26.0}}),
    ));
    let (status, result) = send(&app, bulk).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["changed"], 1);
}

#[tokio::test]
async fn test_order_status_update() {
    let (_dir, app) = test_app().await;
    let body = checkout_body(json!([{"productId": "TOM001", "quantity": 1}]));
    let (_, created) = send(&app, json_request("POST", "/api/orders", body)).await;
    let id = created["order"]["id"].as_str().unwrap().to_string();

    let uri = format!("/api/admin/orders/{id}/status");
    let (status, order) = send(&app, admin(json_request("PUT", &uri, json!({"status": "Shipped"})))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["status"], "shipped");

    let (status, _) = send(&app, admin(json_request("PUT", &uri, json!({"status": "lost"})))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let missing = admin(json_request(
        "PUT",
        "/api/admin/orders/missing/status",
        json!({"status": "shipped"}),
    ));
    let (status, _) = send(&app, missing).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_exports_and_import() {
    let (_dir, app) = test_app().await;

    let (status, csv) = send_raw(&app, admin(get("/api/admin/export/products.csv"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(csv.lines().next(), Some(PRODUCTS_CSV_HEADER));

    let (status, backup) = send_raw(&app, admin(get("/api/admin/export/backup"))).await;
    assert_eq!(status, StatusCode::OK);
    let envelope: Value = serde_json::from_str(&backup).unwrap();
    assert!(envelope["products"].as_array().unwrap().len() > 1);

    let malformed = Request::post("/api/admin/import")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, result) = send(&app, admin(malformed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["imported"], false);

    let restore = Request::post("/api/admin/import").body(Body::from(backup)).unwrap();
    let (status, result) = send(&app, admin(restore)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["imported"], true);
}

#[tokio::test]
async fn test_settings_minimum_order() {
    let (_dir, app) = test_app().await;

    let update = admin(json_request(
        "PUT",
        "/api/admin/settings",
        json!({"key": "minimumOrder", "value": 100.0}),
    ));
    let (status, settings) = send(&app, update).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settings["minimumOrder"], json!(100.0));
    assert_eq!(settings["businessName"], "Super Empire Produce");

    let body = checkout_body(json!([{"productId": "TOR001", "quantity": 1}]));
    let (status, _) = send(&app, json_request("POST", "/api/orders", body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let unknown = admin(json_request(
        "PUT",
        "/api/admin/settings",
        json!({"key": "theme", "value": "dark"}),
    ));
    let (status, _) = send(&app, unknown).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_shopping_list_reorder() {
    let (_dir, app) = test_app().await;

    let create = json_request(
        "POST",
        "/api/shopping-lists",
        json!({"name": "Weekly", "items": [{"productId": "TOR001", "quantity": 3}]}),
    );
    let (status, list) = send(&app, create).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(list["lastUsedAt"].is_null());
    let id = list["id"].as_str().unwrap().to_string();

    let quote_uri = format!("/api/shopping-lists/{id}/quote");
    let (status, quote) = send(&app, Request::post(quote_uri.as_str()).body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["totals"]["subtotal"], json!(37.5));

    let (_, list) = send(&app, get(&format!("/api/shopping-lists/{id}"))).await;
    assert!(!list["lastUsedAt"].is_null());

    let (status, _) = send(&app, json_request("PUT", &format!("/api/shopping-lists/{id}"), json!({"items": []}))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Request::post(quote_uri.as_str()).body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let too_many = json!({"items": [{"productId": "TOR001", "quantity": 20000}]});
    let (status, _) = send(&app, json_request("PUT", &format!("/api/shopping-lists/{id}"), too_many)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let delete = Request::delete(format!("/api/shopping-lists/{id}")).body(Body::empty()).unwrap();
    let (status, _) = send(&app, delete).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, get(&format!("/api/shopping-lists/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_backend_routes_require_configuration() {
    let (_dir, app) = test_app().await;

    let sync = Request::post("/api/admin/backend/sync").body(Body::empty()).unwrap();
    let (status, body) = send(&app, admin(sync)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Hosted backend is not configured");

    let (status, _) = send(&app, admin(get("/api/admin/backend/profiles/u1"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
