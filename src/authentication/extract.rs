use super::{basic_authentication, validate_credentials, AuthError};
use crate::app_state::AppState;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Present only on requests carrying the configured admin credentials.
#[derive(Clone, Debug)]
pub struct AdminUser(pub String);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credentials =
            basic_authentication(&parts.headers).map_err(AuthError::MissingCredentials)?;
        validate_credentials(&state.admin, &credentials)?;

        tracing::info!("Admin `{}` authenticated", credentials.username);
        Ok(AdminUser(credentials.username))
    }
}
