use crate::{
    app_state::AppState,
    authentication::AdminUser,
    domain::{EmailSignup, SubscriberEmail},
    repository::DealRepository,
    utils::{e500, ApiError},
};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/emails", get(list_signups).post(sign_up))
}

#[derive(Deserialize)]
struct SignupBody {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    city: Option<String>,
}

#[derive(Serialize)]
struct SignupResponse {
    email: EmailSignup,
}

#[derive(Serialize)]
struct SignupsResponse {
    emails: Vec<EmailSignup>,
}

/// Signing up again with a known address answers with the original signup.
#[tracing::instrument(name = "Adding an email signup", skip(repository, body))]
async fn sign_up(
    State(repository): State<Arc<DealRepository>>,
    Json(body): Json<SignupBody>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let email = body
        .email
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| ApiError::ValidationError("Email is required".into()))?;
    let email = SubscriberEmail::parse(email).map_err(|e| {
        tracing::info!("{e}");
        ApiError::ValidationError("Invalid email format".into())
    })?;

    let signup = repository
        .add_email(email, body.city)
        .await
        .map_err(e500("Failed to add email"))?;

    Ok((StatusCode::CREATED, Json(SignupResponse { email: signup })))
}

#[tracing::instrument(name = "Listing email signups", skip(repository))]
async fn list_signups(
    admin: AdminUser,
    State(repository): State<Arc<DealRepository>>,
) -> Json<SignupsResponse> {
    Json(SignupsResponse {
        emails: repository.get_all_emails().await,
    })
}
