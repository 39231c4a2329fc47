//! Authentication extractors.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};

use blogroll_core::domain::Identity;
use blogroll_core::ports::AuthError;

use super::error::AppError;
use crate::state::AppState;

/// Authenticated caller. Extraction fails when the bearer token is missing or
/// does not verify.
///
/// ```ignore
/// async fn protected_route(Authenticated(identity): Authenticated) -> impl Responder {
///     format!("Hello, {}!", identity.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Authenticated(pub Identity);

/// Outcome of authenticating a request without rejecting it: `Ok(None)` when
/// no credential was sent, `Err` when one was sent but did not verify.
#[derive(Debug)]
pub struct MaybeAuthenticated(pub Result<Option<Identity>, AuthError>);

impl MaybeAuthenticated {
    pub fn identity(&self) -> Result<Option<&Identity>, AuthError> {
        self.0.as_ref().map(Option::as_ref).map_err(Clone::clone)
    }
}

/// Raw `Authorization` header value. A header that is not valid text counts
/// as absent.
fn authorization(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

fn app_state(req: &HttpRequest) -> Result<&web::Data<AppState>, AppError> {
    req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        tracing::error!("AppState not found in app data");
        AppError::Internal("Server configuration error".to_string())
    })
}

impl FromRequest for Authenticated {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = match app_state(req) {
            Ok(state) => state,
            Err(e) => return ready(Err(e)),
        };

        match state.authorizer.verify_header(authorization(req)) {
            Ok(identity) => ready(Ok(Authenticated(identity))),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected unauthenticated request");
                ready(Err(AppError::Auth(e)))
            }
        }
    }
}

impl FromRequest for MaybeAuthenticated {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = match app_state(req) {
            Ok(state) => state,
            Err(e) => return ready(Err(e)),
        };

        ready(Ok(MaybeAuthenticated(
            state.authorizer.verify_optional(authorization(req)),
        )))
    }
}
