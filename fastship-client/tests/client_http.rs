// fastship-client/tests/client_http.rs
// Integration tests against an in-process capture server

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use fastship_client::{ClientConfig, ClientError, SecuritySource};
use shared::models::ShipmentCreate;
use shared::Role;

/// Fixed token source standing in for the authorization context.
struct StaticToken(Option<&'static str>);

impl SecuritySource for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.map(str::to_string)
    }
}

/// Records the Authorization header of the last request seen.
type SeenAuth = Arc<Mutex<Option<Option<String>>>>;

fn record_auth(seen: &SeenAuth, headers: &HeaderMap) {
    let auth = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    *seen.lock().unwrap() = Some(auth);
}

async fn spawn(app: Router) -> String {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn seller_read() -> serde_json::Value {
    serde_json::json!({ "name": "Ada", "email": "ada@example.com" })
}

fn shipment_read() -> serde_json::Value {
    serde_json::json!({
        "content": "books",
        "weight": 1.5,
        "destination": 11001,
        "id": "7f8a1c94-3f2e-4d6a-9b0e-2f4f5a6b7c8d",
        "timeline": [{
            "id": "0e1d2c3b-4a59-4687-9594-a3b2c1d0e9f8",
            "created_at": "2026-08-01T10:00:00Z",
            "location": 11001,
            "status": "placed",
            "description": null,
            "shipment_id": "7f8a1c94-3f2e-4d6a-9b0e-2f4f5a6b7c8d"
        }],
        "estimated_delivery": null,
        "tags": []
    })
}

fn shipment_create() -> ShipmentCreate {
    ShipmentCreate {
        content: "books".into(),
        weight: 1.5,
        destination: 11001,
        client_contact_email: "client@example.com".into(),
        client_contact_phone: None,
    }
}

#[tokio::test]
async fn secured_operation_attaches_bearer_token() {
    let seen: SeenAuth = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route(
            "/seller/me",
            get(|State(seen): State<SeenAuth>, headers: HeaderMap| async move {
                record_auth(&seen, &headers);
                Json(seller_read())
            }),
        )
        .with_state(seen.clone());
    let base = spawn(app).await;

    let client = ClientConfig::new(base)
        .build_client()
        .unwrap()
        .with_security_source(Arc::new(StaticToken(Some("tok-123"))));

    let profile = client.seller().me().await.unwrap();
    assert_eq!(profile.email, "ada@example.com");
    assert_eq!(
        seen.lock().unwrap().clone().unwrap(),
        Some("Bearer tok-123".to_string())
    );
}

#[tokio::test]
async fn secured_operation_without_credential_is_still_dispatched() {
    let seen: SeenAuth = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route(
            "/seller/me",
            get(|State(seen): State<SeenAuth>, headers: HeaderMap| async move {
                record_auth(&seen, &headers);
                Json(seller_read())
            }),
        )
        .with_state(seen.clone());
    let base = spawn(app).await;

    // Hook present but empty session: the server decides, not the client
    let client = ClientConfig::new(base)
        .build_client()
        .unwrap()
        .with_security_source(Arc::new(StaticToken(None)));

    client.seller().me().await.unwrap();
    assert_eq!(seen.lock().unwrap().clone().unwrap(), None);
}

#[tokio::test]
async fn public_operation_never_attaches_token() {
    let seen: SeenAuth = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route(
            "/shipment/",
            get(|State(seen): State<SeenAuth>, headers: HeaderMap| async move {
                record_auth(&seen, &headers);
                Json(shipment_read())
            }),
        )
        .with_state(seen.clone());
    let base = spawn(app).await;

    let client = ClientConfig::new(base)
        .build_client()
        .unwrap()
        .with_security_source(Arc::new(StaticToken(Some("tok-123"))));

    let id = "7f8a1c94-3f2e-4d6a-9b0e-2f4f5a6b7c8d".parse().unwrap();
    let shipment = client.shipment().get(id).await.unwrap();
    assert_eq!(shipment.id, id);
    assert_eq!(
        shipment.latest_status(),
        Some(shared::ShipmentStatus::Placed)
    );
    assert_eq!(seen.lock().unwrap().clone().unwrap(), None);
}

#[tokio::test]
async fn login_posts_urlencoded_form() {
    let form_seen: Arc<Mutex<Option<HashMap<String, String>>>> = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route(
            "/partner/token",
            post({
                let form_seen = form_seen.clone();
                move |Form(form): Form<HashMap<String, String>>| async move {
                    *form_seen.lock().unwrap() = Some(form);
                    Json(serde_json::json!({
                        "access_token": "tok-456",
                        "token_type": "bearer"
                    }))
                }
            }),
        );
    let base = spawn(app).await;

    let client = ClientConfig::new(base).build_client().unwrap();
    let token = client
        .for_role(Role::Partner)
        .login("dispatch@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(token.access_token, "tok-456");
    let form = form_seen.lock().unwrap().clone().unwrap();
    assert_eq!(form.get("username").map(String::as_str), Some("dispatch@example.com"));
    assert_eq!(form.get("password").map(String::as_str), Some("hunter2"));
}

#[tokio::test]
async fn password_reset_is_public_for_both_roles() {
    let seen: SeenAuth = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route(
            "/seller/forgot_password",
            get(|State(seen): State<SeenAuth>, headers: HeaderMap| async move {
                record_auth(&seen, &headers);
                Json(serde_json::json!("link sent"))
            }),
        )
        .route(
            "/partner/forgot_password",
            get(|State(seen): State<SeenAuth>, headers: HeaderMap| async move {
                record_auth(&seen, &headers);
                Json(serde_json::json!("link sent"))
            }),
        )
        .with_state(seen.clone());
    let base = spawn(app).await;

    let client = ClientConfig::new(base)
        .build_client()
        .unwrap()
        .with_security_source(Arc::new(StaticToken(Some("tok-123"))));

    for role in [Role::Seller, Role::Partner] {
        client
            .for_role(role)
            .forgot_password("someone@example.com")
            .await
            .unwrap();
        assert_eq!(seen.lock().unwrap().clone().unwrap(), None);
    }
}

#[tokio::test]
async fn auth_failures_map_to_auth_error_variants() {
    let app = Router::new()
        .route("/seller/me", get(|| async { StatusCode::UNAUTHORIZED }))
        .route(
            "/partner/me",
            get(|| async { (StatusCode::FORBIDDEN, "wrong role") }),
        );
    let base = spawn(app).await;

    let client = ClientConfig::new(base)
        .build_client()
        .unwrap()
        .with_security_source(Arc::new(StaticToken(Some("stale"))));

    let err = client.seller().me().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(err.is_auth_failure());

    let err = client.partner().me().await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));
    assert!(err.is_auth_failure());
}

#[tokio::test]
async fn no_capacity_maps_to_dedicated_variant() {
    let app = Router::new().route(
        "/shipment/",
        post(|| async { StatusCode::NOT_ACCEPTABLE }),
    );
    let base = spawn(app).await;

    let client = ClientConfig::new(base)
        .build_client()
        .unwrap()
        .with_security_source(Arc::new(StaticToken(Some("tok-123"))));

    let err = client.shipment().create(&shipment_create()).await.unwrap_err();
    assert!(matches!(err, ClientError::NoCapacity));
    assert!(!err.is_auth_failure());
}

#[tokio::test]
async fn malformed_success_body_surfaces_as_serialization_error() {
    let app = Router::new().route("/seller/me", get(|| async { "not json" }));
    let base = spawn(app).await;

    let client = ClientConfig::new(base)
        .build_client()
        .unwrap()
        .with_security_source(Arc::new(StaticToken(Some("tok-123"))));

    let err = client.seller().me().await.unwrap_err();
    assert!(matches!(err, ClientError::Serialization(_)));
    assert!(!err.is_auth_failure());
}

#[tokio::test]
async fn validation_detail_passes_through_verbatim() {
    let app = Router::new().route(
        "/shipment/",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({
                    "detail": [{
                        "loc": ["body", "weight"],
                        "msg": "ensure this value is less than or equal to 25",
                        "type": "value_error.number.not_le"
                    }]
                })),
            )
        }),
    );
    let base = spawn(app).await;

    let client = ClientConfig::new(base)
        .build_client()
        .unwrap()
        .with_security_source(Arc::new(StaticToken(Some("tok-123"))));

    let err = client.shipment().create(&shipment_create()).await.unwrap_err();
    match err {
        ClientError::Validation(detail) => {
            assert_eq!(detail.detail.len(), 1);
            assert_eq!(
                detail.detail[0].msg,
                "ensure this value is less than or equal to 25"
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
