use gloo_net::http::{Request, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use mindcare_core::error::ErrorBody;
use mindcare_core::models::{
    ApiMessage, CommentRequest, ConsultationRequest, CreateMaterialRequest, CreatePostRequest,
    CreateSessionRequest, FeedbackRequest, LoginRequest, LoginResponse, Material, Post, Profile,
    Psychiatrist, PublicUser, RecommendationRequest, RegisterRequest, SupportSession,
};
use mindcare_core::{ApiError, ApiResult};

const API_BASE_URL: &str = match option_env!("MINDCARE_API_BASE_URL") {
    Some(value) => value,
    None => "http://localhost:3001",
};

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn authorized(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn parse_json<T: DeserializeOwned>(response: gloo_net::http::Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Сервер кладёт текст ошибки в JSON-поле `message`; всё остальное
/// считается ответом без сообщения, и экран покажет свой запасной текст.
async fn parse_error_body(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let message = match response.text().await {
        Ok(text) => serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message),
        Err(_) => None,
    };
    ApiError::http(status, message)
}

async fn send_get<T: DeserializeOwned>(path: &str, token: Option<&str>) -> ApiResult<T> {
    let response = authorized(Request::get(&endpoint(path)), token)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

async fn send_post<T, B>(path: &str, token: Option<&str>, payload: &B) -> ApiResult<T>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let response = authorized(Request::post(&endpoint(path)), token)
        .json(payload)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

async fn send_put<T, B>(path: &str, token: &str, payload: &B) -> ApiResult<T>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let response = authorized(Request::put(&endpoint(path)), Some(token))
        .json(payload)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

// --- Пользователи ---

pub(crate) async fn register(payload: &RegisterRequest) -> ApiResult<ApiMessage> {
    send_post("/api/users/register", None, payload).await
}

pub(crate) async fn login(email: &str, password: &str) -> ApiResult<LoginResponse> {
    let payload = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    send_post("/api/users/login", None, &payload).await
}

pub(crate) async fn verify_email(token: &str) -> ApiResult<ApiMessage> {
    send_get(&format!("/api/users/verify/{token}"), None).await
}

pub(crate) async fn fetch_profile(token: &str) -> ApiResult<Profile> {
    send_get("/api/users/profile", Some(token)).await
}

pub(crate) async fn fetch_public_users(token: &str) -> ApiResult<Vec<PublicUser>> {
    send_get("/api/users/public-users", Some(token)).await
}

pub(crate) async fn send_consultation(
    token: &str,
    payload: &ConsultationRequest,
) -> ApiResult<ApiMessage> {
    send_post("/api/users/send-consultation", Some(token), payload).await
}

// --- Посты ---

pub(crate) async fn fetch_posts(token: &str) -> ApiResult<Vec<Post>> {
    send_get("/api/posts", Some(token)).await
}

pub(crate) async fn create_post(token: &str, content: &str) -> ApiResult<Post> {
    let payload = CreatePostRequest {
        content: content.to_string(),
    };
    send_post("/api/posts", Some(token), &payload).await
}

pub(crate) async fn add_comment(token: &str, post_id: &str, content: &str) -> ApiResult<Post> {
    let payload = CommentRequest {
        content: content.to_string(),
    };
    send_post(&format!("/api/posts/{post_id}/comment"), Some(token), &payload).await
}

pub(crate) async fn add_recommendation(
    token: &str,
    post_id: &str,
    recommendation: &str,
) -> ApiResult<Post> {
    let payload = RecommendationRequest {
        recommendation: recommendation.to_string(),
    };
    send_post(
        &format!("/api/posts/{post_id}/recommendation"),
        Some(token),
        &payload,
    )
    .await
}

// --- Материалы ---

pub(crate) async fn fetch_materials(token: &str) -> ApiResult<Vec<Material>> {
    send_get("/api/materials", Some(token)).await
}

pub(crate) async fn create_material(
    token: &str,
    payload: &CreateMaterialRequest,
) -> ApiResult<Material> {
    send_post("/api/materials", Some(token), payload).await
}

pub(crate) async fn approve_material(token: &str, material_id: &str) -> ApiResult<Material> {
    send_put(
        &format!("/api/materials/{material_id}/approve"),
        token,
        &serde_json::json!({}),
    )
    .await
}

// --- Психиатры ---

pub(crate) async fn fetch_psychiatrists(token: &str) -> ApiResult<Vec<Psychiatrist>> {
    send_get("/api/psychiatrists", Some(token)).await
}

pub(crate) async fn connect_psychiatrist(
    token: &str,
    psychiatrist_id: &str,
) -> ApiResult<Psychiatrist> {
    send_post(
        &format!("/api/psychiatrists/{psychiatrist_id}/connect"),
        Some(token),
        &serde_json::json!({}),
    )
    .await
}

// --- Сессии поддержки ---

pub(crate) async fn fetch_sessions(token: &str) -> ApiResult<Vec<SupportSession>> {
    send_get("/api/sessions", Some(token)).await
}

pub(crate) async fn create_session(
    token: &str,
    payload: &CreateSessionRequest,
) -> ApiResult<SupportSession> {
    send_post("/api/sessions", Some(token), payload).await
}

pub(crate) async fn join_session(token: &str, session_id: &str) -> ApiResult<SupportSession> {
    send_post(
        &format!("/api/sessions/{session_id}/join"),
        Some(token),
        &serde_json::json!({}),
    )
    .await
}

pub(crate) async fn add_feedback(
    token: &str,
    session_id: &str,
    content: &str,
) -> ApiResult<SupportSession> {
    let payload = FeedbackRequest {
        content: content.to_string(),
    };
    send_post(
        &format!("/api/sessions/{session_id}/feedback"),
        Some(token),
        &payload,
    )
    .await
}
