//! REST client against an in-process fake admin API.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use admin_console::app::screens::{Categories, ListScreen};
use admin_console::app::{App, PaymentPhase, PaymentWorkflow, Route};
use admin_console::core::{AdminApi, AppError, MemorySession, SessionStore};
use admin_console::services::{ApiClient, ImageUpload};
use axum::extract::{Multipart, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

const TOKEN: &str = "tok-123";

/// One multipart part as the server saw it
#[derive(Debug, Clone)]
struct SeenPart {
    name: String,
    content_type: Option<String>,
    text: Option<String>,
}

#[derive(Default)]
struct Fake {
    categories: Vec<(i64, String)>,
    unauthorized_hits: usize,
    parts: Vec<SeenPart>,
    payouts: Vec<String>,
}

type Shared = Arc<Mutex<Fake>>;

fn authorized(headers: &HeaderMap, fake: &Shared) -> bool {
    let ok = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", TOKEN));
    if !ok {
        fake.lock().unauthorized_hits += 1;
    }
    ok
}

async fn login(Query(q): Query<HashMap<String, String>>) -> Response {
    let email = q.get("email").map(String::as_str);
    let password = q.get("password").map(String::as_str);
    if email == Some("admin@shreeaura.in") && password == Some("secret") {
        TOKEN.into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response()
    }
}

async fn list_categories(State(fake): State<Shared>, headers: HeaderMap) -> Response {
    if !authorized(&headers, &fake) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let body: Vec<Value> = fake
        .lock()
        .categories
        .iter()
        .map(|(id, name)| json!({"id": id, "name": name}))
        .collect();
    Json(body).into_response()
}

async fn delete_category(
    State(fake): State<Shared>,
    headers: HeaderMap,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers, &fake) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let id: i64 = q.get("id").and_then(|id| id.parse().ok()).unwrap_or(-1);
    fake.lock().categories.retain(|(existing, _)| *existing != id);
    "Category deleted".into_response()
}

async fn record_parts(State(fake): State<Shared>, headers: HeaderMap, mut multipart: Multipart) -> Response {
    if !authorized(&headers, &fake) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let is_file = field.file_name().is_some();
        let bytes = field.bytes().await.unwrap_or_default();
        let text = if is_file {
            None
        } else {
            Some(String::from_utf8_lossy(&bytes).into_owned())
        };
        fake.lock().parts.push(SeenPart {
            name,
            content_type,
            text,
        });
    }
    StatusCode::OK.into_response()
}

async fn orders_down(State(fake): State<Shared>, headers: HeaderMap) -> Response {
    if !authorized(&headers, &fake) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"message": "Database down"})),
    )
        .into_response()
}

async fn payment_data(State(fake): State<Shared>, headers: HeaderMap) -> Response {
    if !authorized(&headers, &fake) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let paid: f64 = fake.lock().payouts.iter().filter_map(|a| a.parse::<f64>().ok()).sum();
    Json(json!({
        "id": 1,
        "seller": {"id": 42, "name": "Meera Textiles", "email": "meera@example.com", "phone": "9876543210"},
        "amountPayableToSeller": 500.0 - paid,
        "amountReceivableFromSeller": 0
    }))
    .into_response()
}

async fn send_otp(State(fake): State<Shared>, headers: HeaderMap) -> Response {
    if !authorized(&headers, &fake) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    // Empty body on success
    StatusCode::OK.into_response()
}

async fn verify_otp(
    State(fake): State<Shared>,
    headers: HeaderMap,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers, &fake) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if q.get("otp").map(String::as_str) == Some("1234") && q.get("email").map(String::as_str) == Some("meera@example.com") {
        "OTP verified".into_response()
    } else {
        (StatusCode::BAD_REQUEST, "Invalid OTP").into_response()
    }
}

async fn pay(State(fake): State<Shared>, headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Response {
    if !authorized(&headers, &fake) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let amount = q.get("amount").cloned().unwrap_or_default();
    fake.lock().payouts.push(amount);
    Json(json!({"status": "paid"})).into_response()
}

async fn start_server() -> (String, Shared) {
    let fake: Shared = Arc::new(Mutex::new(Fake {
        categories: vec![
            (1, "Sarees".to_string()),
            (2, "Kurtis".to_string()),
            (3, "Dupattas".to_string()),
        ],
        ..Fake::default()
    }));

    let app = Router::new()
        .route("/auth/admin-login", post(login))
        .route("/admin/get-all-categories", get(list_categories))
        .route("/admin/delete-productCategory", delete(delete_category))
        .route("/admin/save-shopByName", post(record_parts))
        .route("/admin/edit-shopByName", put(record_parts))
        .route("/admin/save-blog", post(record_parts))
        .route("/admin/get-all-orders", get(orders_down))
        .route("/admin/get-payment-data", get(payment_data))
        .route("/admin/send-email-otp-for-payment", post(send_otp))
        .route("/admin/verify-email-otp-for-payment", post(verify_otp))
        .route("/admin/pay-to-seller", post(pay))
        .with_state(fake.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), fake)
}

fn client(base_url: &str, session: Arc<dyn SessionStore>) -> Arc<ApiClient> {
    Arc::new(ApiClient::with_base_url(base_url, Duration::from_secs(5), session).unwrap())
}

#[tokio::test]
async fn test_login_then_authenticated_list() {
    let (url, _) = start_server().await;
    let session: Arc<dyn SessionStore> = Arc::new(MemorySession::new());
    let api = client(&url, session.clone());

    let token = api.admin_login("admin@shreeaura.in", "secret").await.unwrap();
    assert_eq!(token, TOKEN);
    assert!(session.token().is_none(), "login must not store the token itself");

    session.set_token(&token).unwrap();
    let categories = api.get_all_categories().await.unwrap();
    assert_eq!(categories.len(), 3);
    assert_eq!(categories[1].name, "Kurtis");
}

#[tokio::test]
async fn test_login_failure_message() {
    let (url, _) = start_server().await;
    let api = client(&url, Arc::new(MemorySession::new()));

    match api.admin_login("admin@shreeaura.in", "wrong").await {
        Err(AppError::Auth(message)) => assert_eq!(message, "Login failed: Invalid credentials"),
        other => panic!("expected auth error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rejected_token_is_cleared_once_and_guard_redirects() {
    let (url, fake) = start_server().await;
    let session: Arc<dyn SessionStore> = Arc::new(MemorySession::with_token("stale"));
    let api = client(&url, session.clone());
    let app = App::new(api.clone(), session.clone());
    assert!(app.navigate(Route::Categories).is_allowed());

    let err = api.get_all_categories().await.unwrap_err();
    assert!(matches!(err, AppError::SessionExpired));
    assert_eq!(err.to_string(), "Session expired. Please login again.");
    assert!(session.token().is_none());

    // No token left: the next call fails locally
    let err = api.get_all_categories().await.unwrap_err();
    assert!(matches!(err, AppError::Auth(_)));
    assert_eq!(fake.lock().unauthorized_hits, 1);

    let navigation = app.navigate(Route::Orders);
    assert!(!navigation.is_allowed());
    assert_eq!(navigation.route(), &Route::Login);
}

#[tokio::test]
async fn test_error_body_message_is_surfaced() {
    let (url, _) = start_server().await;
    let api = client(&url, Arc::new(MemorySession::with_token(TOKEN)));

    match api.get_all_orders().await {
        Err(AppError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Database down");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_refetches_list() {
    let (url, _) = start_server().await;
    let api = client(&url, Arc::new(MemorySession::with_token(TOKEN)));
    let screen = ListScreen::new(Categories, api);

    screen.refresh().await.unwrap();
    assert_eq!(screen.items().len(), 3);

    screen.delete(2).await.unwrap();
    let ids: Vec<i64> = screen.items().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_multipart_layouts() {
    let (url, fake) = start_server().await;
    let api = client(&url, Arc::new(MemorySession::with_token(TOKEN)));

    let image = ImageUpload::new("banarasi.png", vec![0x89, 0x50, 0x4e, 0x47]);
    api.save_shop_by_name(image, "Banarasi").await.unwrap();
    {
        let parts = fake.lock().parts.clone();
        let names: Vec<&str> = parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["file", "name"]);
        assert_eq!(parts[0].content_type.as_deref(), Some("image/png"));
        assert_eq!(parts[1].text.as_deref(), Some("Banarasi"));
    }

    fake.lock().parts.clear();
    api.update_shop_by_name(5, "Banarasi Silk", None).await.unwrap();
    {
        let parts = fake.lock().parts.clone();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name, "updates");
        assert_eq!(parts[0].content_type.as_deref(), Some("application/json"));
        let body: Value = serde_json::from_str(parts[0].text.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"name": "Banarasi Silk"}));
    }

    fake.lock().parts.clear();
    let cover = ImageUpload::new("cover.jpg", vec![0xff, 0xd8, 0xff]);
    let fields = shared::BlogFields {
        title: "Chanderi".to_string(),
        description: "Light silk".to_string(),
    };
    api.save_blog(cover, &fields).await.unwrap();
    let parts = fake.lock().parts.clone();
    let names: Vec<&str> = parts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["file", "blog"]);
}

#[tokio::test]
async fn test_payment_workflow_end_to_end() {
    let (url, fake) = start_server().await;
    let api = client(&url, Arc::new(MemorySession::with_token(TOKEN)));

    let workflow = PaymentWorkflow::open(api, "42").await.unwrap();
    let state = workflow.snapshot();
    assert_eq!(state.account.as_ref().map(|a| a.seller.id.as_str()), Some("42"));
    assert_eq!(state.pay_amount, 500.0);

    workflow.send_otp().await.unwrap();
    assert_eq!(workflow.phase(), PaymentPhase::AwaitingCode);

    let err = workflow.verify_otp("0000").await.unwrap_err();
    assert!(matches!(err, AppError::Api { status: 400, ref message } if message == "Invalid OTP"));
    assert_eq!(workflow.phase(), PaymentPhase::AwaitingCode);

    workflow.verify_otp("1234").await.unwrap();
    workflow.pay().await.unwrap();

    assert_eq!(fake.lock().payouts, vec!["500".to_string()]);
    let state = workflow.snapshot();
    assert_eq!(state.phase, PaymentPhase::Idle);
    assert_eq!(state.payable(), 0.0);
}
