//! Authentication middleware.
//!
//! HTTP Basic authentication with credentials loaded from the environment.
//! Apply [`basic_auth_middleware`] to the routers that need protection;
//! health and documentation routes usually stay open.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{BasicAuthConfig, basic_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = BasicAuthConfig::from_env()?;
//! let protected = api_routes.layer(axum::middleware::from_fn_with_state(
//!     auth,
//!     basic_auth_middleware,
//! ));
//! ```

mod basic;

pub use basic::{BasicAuthConfig, basic_auth_middleware};
