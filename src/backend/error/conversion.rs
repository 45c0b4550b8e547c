/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, so handlers can
 * return them directly. Rejections are plain text; a missing session is a
 * redirect to the login page. Internal failures are logged here, once, with
 * their full detail.
 */

use axum::response::{IntoResponse, Redirect, Response};
use crate::backend::error::types::BackendError;
use crate::backend::routes::LOGIN_PATH;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        if let Self::Unauthenticated = self {
            return Redirect::to(LOGIN_PATH).into_response();
        }

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        }

        (self.status_code(), self.message()).into_response()
    }
}
