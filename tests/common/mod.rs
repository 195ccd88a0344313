use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use libris::libris_auth::{Claims, UserType, create_access_token, encode_claims};
use libris::libris_config::JwtConfig;
use libris::modules::books::{Book, BookChanges, BookStore, MemoryBookStore, NewBook};
use libris::router::init_router;
use libris::state::AppState;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "libris-test-secret";

pub fn jwt_config() -> JwtConfig {
    JwtConfig::with_secret(TEST_SECRET)
}

#[allow(dead_code)]
pub fn setup_test_app(store: Arc<dyn BookStore>) -> Router {
    init_router(AppState::new(store, jwt_config()))
}

#[allow(dead_code)]
pub fn setup_memory_app() -> Router {
    setup_test_app(Arc::new(MemoryBookStore::new()))
}

pub fn token_for(user_type: UserType) -> String {
    create_access_token(&Uuid::new_v4().to_string(), user_type, &jwt_config()).unwrap()
}

#[allow(dead_code)]
pub fn librarian_token() -> String {
    token_for(UserType::Librarian)
}

#[allow(dead_code)]
pub fn student_token() -> String {
    token_for(UserType::Student)
}

/// A correctly signed token whose `user_type` claim is taken verbatim.
#[allow(dead_code)]
pub fn token_with_raw_user_type(user_type: &str) -> String {
    let now = usize::try_from(chrono::Utc::now().timestamp()).unwrap();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        user_type: user_type.to_string(),
        exp: now + 600,
        iat: now,
    };
    encode_claims(&claims, &jwt_config()).unwrap()
}

/// Sends one request through the router and returns the status with the JSON
/// body (`Value::Null` for an empty body).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

/// Memory store that counts every call made to it.
#[allow(dead_code)]
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryBookStore,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl BookStore for CountingStore {
    async fn find_all(&self) -> anyhow::Result<Vec<Book>> {
        self.hit();
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Book>> {
        self.hit();
        self.inner.find_by_id(id).await
    }

    async fn create(&self, book: NewBook) -> anyhow::Result<Book> {
        self.hit();
        self.inner.create(book).await
    }

    async fn update_by_id(&self, id: Uuid, changes: BookChanges) -> anyhow::Result<Option<Book>> {
        self.hit();
        self.inner.update_by_id(id, changes).await
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<Option<Book>> {
        self.hit();
        self.inner.delete_by_id(id).await
    }
}

#[allow(dead_code)]
pub const STORE_FAULT_MESSAGE: &str = "connection reset by store";

/// Store whose every call fails.
#[allow(dead_code)]
pub struct FailingStore;

#[async_trait]
impl BookStore for FailingStore {
    async fn find_all(&self) -> anyhow::Result<Vec<Book>> {
        anyhow::bail!(STORE_FAULT_MESSAGE)
    }

    async fn find_by_id(&self, _id: Uuid) -> anyhow::Result<Option<Book>> {
        anyhow::bail!(STORE_FAULT_MESSAGE)
    }

    async fn create(&self, _book: NewBook) -> anyhow::Result<Book> {
        anyhow::bail!(STORE_FAULT_MESSAGE)
    }

    async fn update_by_id(&self, _id: Uuid, _changes: BookChanges) -> anyhow::Result<Option<Book>> {
        anyhow::bail!(STORE_FAULT_MESSAGE)
    }

    async fn delete_by_id(&self, _id: Uuid) -> anyhow::Result<Option<Book>> {
        anyhow::bail!(STORE_FAULT_MESSAGE)
    }
}
