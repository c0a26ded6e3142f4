//! HTTP Basic authentication for admin endpoints.

mod extract;

pub use extract::AdminUser;

use crate::configuration::AdminSettings;
use anyhow::Context;
use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use secrecy::{ExposeSecret, Secret};
use serde_json::json;

pub const REALM: &str = r#"Basic realm="admin""#;

#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing or malformed credentials")]
    MissingCredentials(#[source] anyhow::Error),
    #[error("Invalid credentials")]
    InvalidCredentials,
}

pub fn basic_authentication(headers: &HeaderMap) -> Result<Credentials, anyhow::Error> {
    let header_value = headers
        .get(header::AUTHORIZATION)
        .context("The 'Authorization' header was missing")?
        .to_str()
        .context("The 'Authorization' header was not a valid UTF8 string")?;
    let base64encoded_segment = header_value
        .strip_prefix("Basic ")
        .context("The authorization scheme was not 'Basic'")?;
    let decoded_bytes = STANDARD
        .decode(base64encoded_segment)
        .context("Failed to base64-decode 'Basic' credentials")?;
    let decoded_credentials = String::from_utf8(decoded_bytes)
        .context("The decoded credential string is not valid UTF8")?;

    let (username, password) = decoded_credentials
        .split_once(':')
        .context("A ':' must separate username and password in 'Basic' auth")?;

    Ok(Credentials {
        username: username.to_owned(),
        password: Secret::new(password.to_owned()),
    })
}

#[tracing::instrument(name = "Validate admin credentials", skip(expected, credentials))]
pub fn validate_credentials(
    expected: &AdminSettings,
    credentials: &Credentials,
) -> Result<(), AuthError> {
    let username_matches = credentials.username == expected.username;
    let password_matches =
        credentials.password.expose_secret() == expected.password.expose_secret();

    if username_matches && password_matches {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!(e.cause_chain = ?self, "Rejecting admin request");

        let mut response = (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response();
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(REALM));

        response
    }
}
