//! In-process stand-in for the account backend.
//!
//! Serves the same routes and status codes as the real service from an
//! axum router on an ephemeral port, and counts calls so tests can assert
//! how many requests a flow issued.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use client::ApiClient;
use serde::Deserialize;
use serde_json::{json, Value};
use shared_types::{
    ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest, UpdateUserRequest,
};
use std::sync::{Arc, Mutex};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin-secret";
pub const USER_EMAIL: &str = "user@example.com";
pub const USER_PASSWORD: &str = "user-secret";

#[derive(Debug, Clone)]
pub struct StubUser {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: String,
    pub status: String,
}

impl StubUser {
    fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "email": self.email,
            "full_name": self.full_name,
            "role": self.role,
            "status": self.status,
            "created_at": "2024-01-01T00:00:00",
        })
    }
}

#[derive(Debug, Default)]
pub struct StubState {
    pub users: Vec<StubUser>,
    next_id: i64,
    /// Include `role` in login responses.
    pub login_includes_role: bool,
    pub list_calls: usize,
    pub delete_calls: usize,
}

impl StubState {
    fn insert(&mut self, email: &str, full_name: &str, password: &str, role: &str) -> StubUser {
        self.next_id += 1;
        let user = StubUser {
            id: self.next_id,
            email: email.to_string(),
            full_name: full_name.to_string(),
            password: password.to_string(),
            role: role.to_string(),
            status: "active".to_string(),
        };
        self.users.push(user.clone());
        user
    }

    fn by_token(&self, headers: &HeaderMap) -> Option<StubUser> {
        let id = headers
            .get("authorization")?
            .to_str()
            .ok()?
            .strip_prefix("Bearer token-")?
            .parse::<i64>()
            .ok()?;
        self.users.iter().find(|u| u.id == id).cloned()
    }
}

type Shared = Arc<Mutex<StubState>>;

/// A running stub backend.
pub struct StubBackend {
    pub base_url: String,
    pub state: Shared,
}

impl StubBackend {
    /// Start a backend seeded with one admin and one regular user.
    pub async fn start() -> Self {
        let mut state = StubState::default();
        state.insert(ADMIN_EMAIL, "Admin", ADMIN_PASSWORD, "admin");
        state.insert(USER_EMAIL, "Regular User", USER_PASSWORD, "user");
        let state = Arc::new(Mutex::new(state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("Stub backend has no address");
        let app = router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub backend crashed");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(format!("{}/", self.base_url))
    }

    /// Add `count` extra regular users.
    pub fn seed_users(&self, count: usize) {
        let mut state = self.state.lock().unwrap();
        for n in 0..count {
            state.insert(
                &format!("member{n}@example.com"),
                &format!("Member {n}"),
                "member-secret",
                "user",
            );
        }
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }

    pub fn delete_calls(&self) -> usize {
        self.state.lock().unwrap().delete_calls
    }

    pub fn set_login_includes_role(&self, value: bool) {
        self.state.lock().unwrap().login_includes_role = value;
    }

    pub fn user(&self, email: &str) -> Option<StubUser> {
        let state = self.state.lock().unwrap();
        state.users.iter().find(|u| u.email == email).cloned()
    }

    /// Bearer token the stub accepts for `email`.
    pub fn token_for(&self, email: &str) -> String {
        let id = self.user(email).map(|u| u.id).unwrap_or_default();
        format!("token-{id}")
    }
}

/// Pick a port with nothing listening on it.
pub async fn unused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/users/me", get(me).put(update_me))
        .route("/api/users/change-password", post(change_password))
        .route("/api/admin/users", get(list_users))
        .route("/api/admin/users/{id}", put(update_user).delete(delete_user))
        .with_state(state)
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn unauthenticated() -> Response {
    detail(StatusCode::UNAUTHORIZED, "Could not validate credentials")
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn login(State(state): State<Shared>, Json(body): Json<LoginRequest>) -> Response {
    let state = state.lock().unwrap();
    let Some(user) = state
        .users
        .iter()
        .find(|u| u.email == body.email && u.password == body.password)
    else {
        return detail(StatusCode::UNAUTHORIZED, "Incorrect email or password");
    };

    let mut response = json!({
        "access_token": format!("token-{}", user.id),
        "token_type": "bearer",
    });
    if state.login_includes_role {
        response["role"] = json!(user.role);
    }
    Json(response).into_response()
}

async fn register(State(state): State<Shared>, Json(body): Json<RegisterRequest>) -> Response {
    let mut state = state.lock().unwrap();
    if body.password != body.confirm_password {
        return detail(StatusCode::BAD_REQUEST, "Passwords do not match");
    }
    if state.users.iter().any(|u| u.email == body.email) {
        return detail(StatusCode::BAD_REQUEST, "Email already registered");
    }
    let user = state.insert(&body.email, &body.full_name, &body.password, "user");
    (StatusCode::CREATED, Json(user.to_json())).into_response()
}

async fn me(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let state = state.lock().unwrap();
    match state.by_token(&headers) {
        Some(user) => Json(user.to_json()).into_response(),
        None => unauthenticated(),
    }
}

async fn update_me(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<UpdateProfileRequest>,
) -> Response {
    let mut state = state.lock().unwrap();
    let Some(current) = state.by_token(&headers) else {
        return unauthenticated();
    };
    let Some(user) = state.users.iter_mut().find(|u| u.id == current.id) else {
        return unauthenticated();
    };
    if let Some(full_name) = body.full_name {
        user.full_name = full_name;
    }
    if let Some(email) = body.email {
        user.email = email;
    }
    Json(user.to_json()).into_response()
}

async fn change_password(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<ChangePasswordRequest>,
) -> Response {
    let mut state = state.lock().unwrap();
    let Some(current) = state.by_token(&headers) else {
        return unauthenticated();
    };
    if current.password != body.current_password {
        return detail(StatusCode::BAD_REQUEST, "Current password is incorrect");
    }
    if body.new_password != body.confirm_password {
        return detail(StatusCode::BAD_REQUEST, "New passwords do not match");
    }
    if let Some(user) = state.users.iter_mut().find(|u| u.id == current.id) {
        user.password = body.new_password;
    }
    Json(json!({ "message": "Password changed successfully" })).into_response()
}

fn require_admin(state: &StubState, headers: &HeaderMap) -> Result<StubUser, Response> {
    match state.by_token(headers) {
        Some(user) if user.role == "admin" => Ok(user),
        Some(_) => Err(detail(StatusCode::FORBIDDEN, "Admin access required")),
        None => Err(unauthenticated()),
    }
}

#[derive(Debug, Deserialize)]
struct ListParams {
    page: Option<usize>,
    limit: Option<usize>,
}

async fn list_users(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.list_calls += 1;
    if let Err(response) = require_admin(&state, &headers) {
        return response;
    }

    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(10).max(1);
    let users: Vec<Value> = state
        .users
        .iter()
        .skip((page - 1) * limit)
        .take(limit)
        .map(StubUser::to_json)
        .collect();
    Json(json!({
        "users": users,
        "total": state.users.len(),
        "page": page,
        "limit": limit,
    }))
    .into_response()
}

async fn update_user(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<UpdateUserRequest>,
) -> Response {
    let mut state = state.lock().unwrap();
    if let Err(response) = require_admin(&state, &headers) {
        return response;
    }
    let Some(user) = state.users.iter_mut().find(|u| u.id == id) else {
        return detail(StatusCode::NOT_FOUND, "User not found");
    };
    if let Some(full_name) = body.full_name {
        user.full_name = full_name;
    }
    if let Some(email) = body.email {
        user.email = email;
    }
    if let Some(status) = body.status {
        user.status = status.as_str().to_string();
    }
    Json(user.to_json()).into_response()
}

async fn delete_user(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.delete_calls += 1;
    let admin = match require_admin(&state, &headers) {
        Ok(admin) => admin,
        Err(response) => return response,
    };
    if admin.id == id {
        return detail(StatusCode::BAD_REQUEST, "Cannot delete your own account");
    }
    let before = state.users.len();
    state.users.retain(|u| u.id != id);
    if state.users.len() == before {
        return detail(StatusCode::NOT_FOUND, "User not found");
    }
    Json(json!({ "message": "User deleted successfully" })).into_response()
}
