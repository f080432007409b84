use std::collections::HashMap;

use chrono::{Duration as ChronoDuration, Utc};
use hotelier_auth::Hs256Jwt;
use hotelier_infra::AppConfig;
use reqwest::StatusCode;
use serde_json::{Value, json};

const ADMIN_PASSWORD: &str = "front-desk";
const JWT_SECRET: &str = "test-secret";

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    token: Option<String>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Build the production router from `vars`, bound to an ephemeral port.
    async fn spawn(vars: &[(&str, &str)]) -> Self {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        let config = AppConfig::from_lookup(|k| vars.get(k).cloned()).expect("valid config");
        let app = hotelier_api::app::build_app(&config).await.expect("build app");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            token: None,
            handle,
        }
    }

    async fn open() -> Self {
        Self::spawn(&[]).await
    }

    async fn secured() -> Self {
        Self::spawn(&[
            ("HOTEL_ADMIN_PASSWORD", ADMIN_PASSWORD),
            ("HOTEL_JWT_SECRET", JWT_SECRET),
        ])
        .await
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let req = self.client.request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, method: reqwest::Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut req = self.request(method, path);
        if let Some(body) = body {
            req = req.json(&body);
        }
        let res = req.send().await.unwrap();
        let status = res.status();
        let text = res.text().await.unwrap();
        let value = serde_json::from_str(&text).unwrap_or(Value::String(text));
        (status, value)
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.send(reqwest::Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.send(reqwest::Method::POST, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.send(reqwest::Method::PUT, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> (StatusCode, Value) {
        self.send(reqwest::Method::DELETE, path, None).await
    }

    async fn login(&mut self) {
        let (status, body) = self.post("/auth/login", json!({ "password": ADMIN_PASSWORD })).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        self.token = Some(body["token"].as_str().unwrap().to_string());
    }

    async fn create_room(&self, number: &str) -> i64 {
        let (status, body) = self
            .post("/rooms", json!({ "room_number": number, "type": "double", "price": 120.0 }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["room_id"].as_i64().unwrap()
    }

    async fn create_customer(&self, name: &str, email: &str) -> i64 {
        let (_, body) = self.post("/customers", json!({ "name": name, "email": email })).await;
        body["customer_id"].as_i64().unwrap()
    }

    async fn book(&self, customer: i64, room: i64, check_in: &str, check_out: &str) -> (StatusCode, Value) {
        self.post(
            "/bookings",
            json!({
                "customer_id": customer,
                "room_id": room,
                "check_in": check_in,
                "check_out": check_out,
                "total_amount": 240,
            }),
        )
        .await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn ping_and_health() {
    let srv = TestServer::open().await;
    let (status, body) = srv.get("/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("pong".to_string()));

    let (status, _) = srv.get("/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn room_crud() {
    let srv = TestServer::open().await;
    let room = srv.create_room("101").await;

    let (status, body) = srv.get(&format!("/rooms/{room}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["room_number"], "101");
    assert_eq!(body["type"], "double");
    assert_eq!(body["price"], 120.0);
    assert_eq!(body["status"], "available");

    let (status, body) = srv
        .put(
            &format!("/rooms/{room}"),
            json!({ "room_number": "101", "type": "suite", "price": "199.99", "status": "maintenance", "description": "corner" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["type"], "suite");
    assert_eq!(body["price"], 199.99);
    assert_eq!(body["description"], "corner");

    let (status, body) = srv
        .post("/rooms", json!({ "room_number": "101", "type": "single", "price": 50 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "room number 101 already exists");

    let (status, body) = srv.delete(&format!("/rooms/{room}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (status, body) = srv.get(&format!("/rooms/{room}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "room not found");
}

#[tokio::test]
async fn malformed_input_is_a_json_400() {
    let srv = TestServer::open().await;

    let (status, body) = srv.get("/rooms/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid identifier"));

    let (status, body) = srv.post("/rooms", json!({ "room_number": "1" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = srv
        .post("/rooms", json!({ "room_number": "  ", "type": "single", "price": 10 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "room_number is required");

    let (status, body) = srv
        .post("/rooms", json!({ "room_number": "9", "type": "single", "price": 10.001 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = srv.get("/no/such/route").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn customer_creation_is_find_or_create_by_email() {
    let srv = TestServer::open().await;

    let (status, first) = srv
        .post("/customers", json!({ "name": "Ada", "email": "ada@example.com", "city": "London" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, second) = srv
        .post("/customers", json!({ "name": "Not Ada", "email": "ada@example.com", "phone": "555" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["customer_id"], first["customer_id"]);
    assert_eq!(second["name"], "Ada");
    assert_eq!(second["phone"], Value::Null);

    let (status, list) = srv.get("/customers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn booking_lifecycle_over_http() {
    let srv = TestServer::open().await;
    let room = srv.create_room("201").await;
    let customer = srv.create_customer("Grace", "grace@example.com").await;

    let (status, booking) = srv.book(customer, room, "2024-01-10", "2024-01-12").await;
    assert_eq!(status, StatusCode::CREATED, "{booking}");
    assert_eq!(booking["status"], "booked");
    assert_eq!(booking["customer_name"], "Grace");
    assert_eq!(booking["room_number"], "201");
    assert_eq!(booking["room_type"], "double");
    assert_eq!(booking["check_in"], "2024-01-10");
    assert_eq!(booking["total_amount"], 240.0);
    let id = booking["booking_id"].as_i64().unwrap();

    let (status, body) = srv.book(customer, room, "2024-01-11", "2024-01-13").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "room not available for requested dates");

    let (status, _) = srv.book(customer, room, "2024-01-12", "2024-01-14").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = srv.book(customer, room, "2024-02-02", "2024-02-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "check_out must be after check_in");

    let (status, body) = srv
        .put(&format!("/bookings/{id}/status"), json!({ "status": "checked_in" }))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], "checked_in");
    let (_, room_body) = srv.get(&format!("/rooms/{room}")).await;
    assert_eq!(room_body["status"], "occupied");

    let (status, room_body) = srv
        .put(&format!("/rooms/{room}"), json!({ "room_number": "201", "type": "double", "price": 130 }))
        .await;
    assert_eq!(status, StatusCode::OK, "{room_body}");
    assert_eq!(room_body["status"], "occupied");

    let (status, _) = srv
        .put(&format!("/bookings/{id}/status"), json!({ "status": "booked" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = srv
        .put(&format!("/bookings/{id}/status"), json!({ "status": "on_holiday" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("invalid status"));

    let (status, _) = srv
        .put(&format!("/bookings/{id}/status"), json!({ "status": "checked_out" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, room_body) = srv.get(&format!("/rooms/{room}")).await;
    assert_eq!(room_body["status"], "available");

    let (status, _) = srv
        .put("/bookings/424242/status", json!({ "status": "cancelled" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, list) = srv.get("/bookings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 2);

    let (status, one) = srv.get(&format!("/bookings/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one["status"], "checked_out");

    let (status, body) = srv.delete(&format!("/rooms/{room}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "room has bookings and cannot be deleted");
}

#[tokio::test]
async fn cancellation_frees_dates_and_availability_reflects_it() {
    let srv = TestServer::open().await;
    let room = srv.create_room("301").await;
    let customer = srv.create_customer("Linus", "linus@example.com").await;
    let (_, booking) = srv.book(customer, room, "2024-03-01", "2024-03-05").await;
    let id = booking["booking_id"].as_i64().unwrap();

    let availability = format!("/rooms/{room}/availability?check_in=2024-03-04&check_out=2024-03-06");
    let (status, body) = srv.get(&availability).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], false);
    assert_eq!(body["room_id"], room);

    srv.put(&format!("/bookings/{id}/status"), json!({ "status": "cancelled" }))
        .await;

    let (_, body) = srv.get(&availability).await;
    assert_eq!(body["available"], true);
    let (status, _) = srv.book(customer, room, "2024-03-04", "2024-03-06").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = srv
        .get("/rooms/999/availability?check_in=2024-03-04&check_out=2024-03-06")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = srv
        .get(&format!("/rooms/{room}/availability?check_in=2024-03-06&check_out=2024-03-04"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = srv.get(&format!("/rooms/{room}/availability")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn payments_are_recorded_against_bookings() {
    let srv = TestServer::open().await;
    let room = srv.create_room("401").await;
    let customer = srv.create_customer("Barbara", "barbara@example.com").await;
    let (_, booking) = srv.book(customer, room, "2024-05-01", "2024-05-03").await;
    let id = booking["booking_id"].as_i64().unwrap();

    let (status, payment) = srv
        .post(
            "/payments",
            json!({ "booking_id": id, "amount": 100.25, "method": "card", "payment_date": "2024-05-01" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{payment}");
    assert_eq!(payment["amount"], 100.25);
    assert_eq!(payment["payment_date"], "2024-05-01");

    let (status, payment) = srv
        .post("/payments", json!({ "booking_id": id, "amount": 20, "method": "cash" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(payment["payment_date"], Utc::now().date_naive().to_string());

    let (status, list) = srv.get(&format!("/payments/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 2);

    let (status, body) = srv
        .post("/payments", json!({ "booking_id": 9999, "amount": 1, "method": "cash" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "booking not found");
}

#[tokio::test]
async fn login_is_unavailable_when_auth_is_disabled() {
    let srv = TestServer::open().await;
    let (status, body) = srv.post("/auth/login", json!({ "password": "anything" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn admin_routes_require_a_token_when_auth_is_enabled() {
    let mut srv = TestServer::secured().await;

    for path in ["/bookings", "/customers", "/bookings/1", "/payments/1"] {
        let (status, body) = srv.get(path).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{path}");
        assert!(body["error"].is_string());
    }
    let (status, _) = srv
        .post("/rooms", json!({ "room_number": "1", "type": "single", "price": 1 }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = srv.post("/auth/login", json!({ "password": "wrong" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid password");

    srv.login().await;
    let room = srv.create_room("501").await;
    let (status, _) = srv.get("/bookings").await;
    assert_eq!(status, StatusCode::OK);

    // The public booking form needs no token.
    srv.token = None;
    let (status, _) = srv.get(&format!("/rooms/{room}")).await;
    assert_eq!(status, StatusCode::OK);
    let customer = srv.create_customer("Guest", "guest@example.com").await;
    let (status, _) = srv.book(customer, room, "2024-07-01", "2024-07-02").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn forged_and_expired_tokens_are_rejected() {
    let mut srv = TestServer::secured().await;

    srv.token = Some("not-a-jwt".to_string());
    let (status, _) = srv.get("/bookings").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let forged = Hs256Jwt::new(b"some-other-secret", ChronoDuration::minutes(10))
        .issue_admin(Utc::now())
        .unwrap();
    srv.token = Some(forged.token);
    let (status, _) = srv.get("/bookings").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let expired = Hs256Jwt::new(JWT_SECRET.as_bytes(), ChronoDuration::minutes(10))
        .issue_admin(Utc::now() - ChronoDuration::hours(1))
        .unwrap();
    srv.token = Some(expired.token);
    let (status, body) = srv.get("/bookings").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid or expired token");

    let valid = Hs256Jwt::new(JWT_SECRET.as_bytes(), ChronoDuration::minutes(10))
        .issue_admin(Utc::now())
        .unwrap();
    srv.token = Some(valid.token);
    let (status, _) = srv.get("/bookings").await;
    assert_eq!(status, StatusCode::OK);
}
