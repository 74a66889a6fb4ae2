use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Basic},
};
use core_config::{ConfigError, FromEnv, env_required};

/// Credentials accepted by [`basic_auth_middleware`].
#[derive(Clone, Debug)]
pub struct BasicAuthConfig {
    pub username: String,
    pub password: String,
}

impl BasicAuthConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn matches(&self, credentials: &Basic) -> bool {
        credentials.username() == self.username && credentials.password() == self.password
    }
}

/// Load credentials from `BASIC_AUTH_USERNAME` and `BASIC_AUTH_PASSWORD`.
impl FromEnv for BasicAuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            username: env_required("BASIC_AUTH_USERNAME")?,
            password: env_required("BASIC_AUTH_PASSWORD")?,
        })
    }
}

fn unauthorized() -> Response {
    let mut response = crate::errors::error_response(
        StatusCode::UNAUTHORIZED,
        "Authentication required".to_string(),
        crate::errors::ErrorCode::Unauthorized,
    );
    response.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Basic realm=\"api\""),
    );
    response
}

/// HTTP Basic authentication middleware.
///
/// Rejects requests without valid credentials with 401 and a
/// `WWW-Authenticate: Basic` challenge. On success the request passes
/// through unchanged.
pub async fn basic_auth_middleware(
    State(config): State<BasicAuthConfig>,
    authorization: Option<TypedHeader<Authorization<Basic>>>,
    request: Request,
    next: Next,
) -> Response {
    match authorization {
        Some(TypedHeader(Authorization(credentials))) if config.matches(&credentials) => {
            next.run(request).await
        }
        Some(_) => {
            tracing::debug!("Basic auth rejected: wrong credentials");
            unauthorized().into_response()
        }
        None => {
            tracing::debug!("Basic auth rejected: no Authorization header");
            unauthorized().into_response()
        }
    }
}
