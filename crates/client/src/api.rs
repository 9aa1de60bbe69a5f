use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared_types::{
    AppError, ChangePasswordRequest, HealthStatus, LoginRequest, LoginResponse, RegisterRequest,
    UpdateProfileRequest, UpdateUserRequest, UserListResponse, UserProfile, UserSummary,
};

/// Thin wrapper over `reqwest::Client` bound to one backend base URL.
///
/// Cloning is cheap; every view shares the same instance through context.
/// Protected calls take the bearer token explicitly so the caller decides
/// which session a request belongs to.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // --- Public endpoints ---

    #[tracing::instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthStatus, AppError> {
        send_json(self.http.get(self.url("/health"))).await
    }

    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        send_json(self.http.post(self.url("/api/auth/login")).json(request)).await
    }

    /// Log in and return the `(token, role)` pair to store in the session.
    ///
    /// Backends that omit `role` from the login response get a follow-up
    /// `GET /api/users/me` with the fresh token.
    pub async fn sign_in(&self, request: &LoginRequest) -> Result<(String, String), AppError> {
        let login = self.login(request).await?;
        let role = match login.role {
            Some(role) => role,
            None => self.current_user(&login.access_token).await?.role,
        };
        tracing::info!(role = %role, "Signed in");
        Ok((login.access_token, role))
    }

    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, AppError> {
        send_json(self.http.post(self.url("/api/auth/register")).json(request)).await
    }

    // --- Signed-in user ---

    #[tracing::instrument(skip(self, token))]
    pub async fn current_user(&self, token: &str) -> Result<UserProfile, AppError> {
        send_json(self.http.get(self.url("/api/users/me")).bearer_auth(token)).await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn update_profile(
        &self,
        token: &str,
        request: &UpdateProfileRequest,
    ) -> Result<UserProfile, AppError> {
        send_json(
            self.http
                .put(self.url("/api/users/me"))
                .bearer_auth(token)
                .json(request),
        )
        .await
    }

    #[tracing::instrument(skip(self, token, request))]
    pub async fn change_password(
        &self,
        token: &str,
        request: &ChangePasswordRequest,
    ) -> Result<(), AppError> {
        send_empty(
            self.http
                .post(self.url("/api/users/change-password"))
                .bearer_auth(token)
                .json(request),
        )
        .await
    }

    // --- Admin ---

    #[tracing::instrument(skip(self, token))]
    pub async fn list_users(
        &self,
        token: &str,
        page: u64,
        limit: u64,
    ) -> Result<UserListResponse, AppError> {
        send_json(
            self.http
                .get(self.url("/api/admin/users"))
                .query(&[("page", page), ("limit", limit)])
                .bearer_auth(token),
        )
        .await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn update_user(
        &self,
        token: &str,
        user_id: i64,
        request: &UpdateUserRequest,
    ) -> Result<UserSummary, AppError> {
        send_json(
            self.http
                .put(self.url(&format!("/api/admin/users/{user_id}")))
                .bearer_auth(token)
                .json(request),
        )
        .await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn delete_user(&self, token: &str, user_id: i64) -> Result<(), AppError> {
        send_empty(
            self.http
                .delete(self.url(&format!("/api/admin/users/{user_id}")))
                .bearer_auth(token),
        )
        .await
    }
}

/// Send a request and fail on transport errors or non-2xx statuses.
async fn send_checked(request: RequestBuilder) -> Result<Response, AppError> {
    let response = request.send().await.map_err(|e| {
        tracing::warn!(error = %e, "Backend request failed");
        AppError::network(e.to_string())
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let err = AppError::from_response(status.as_u16(), &body);
    tracing::warn!(status = status.as_u16(), error = %err, "Backend returned an error status");
    Err(err)
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, AppError> {
    let response = send_checked(request).await?;
    response.json::<T>().await.map_err(|e| {
        tracing::warn!(error = %e, "Backend response did not match the expected shape");
        AppError::decode(e.to_string())
    })
}

/// Like [`send_json`] but ignores the body of a successful response.
async fn send_empty(request: RequestBuilder) -> Result<(), AppError> {
    send_checked(request).await.map(|_| ())
}
