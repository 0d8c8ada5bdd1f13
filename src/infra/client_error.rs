use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::cart::CartError;

#[derive(Debug)]
pub enum ClientError {
    Domain(CartError),
    Internal(anyhow::Error),
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        #[derive(serde::Serialize)]
        struct ErrorResponse {
            message: String,
        }

        let (status, message) = match self {
            ClientError::Domain(cart_error) => {
                let status = match &cart_error {
                    CartError::NotAuthenticated => StatusCode::UNAUTHORIZED,
                    CartError::ProductNotFound(_) => StatusCode::NOT_FOUND,
                    CartError::InvalidQuantity(_) => StatusCode::BAD_REQUEST,
                };
                (status, cart_error.to_string())
            }
            ClientError::Internal(error) => {
                tracing::error!("Request failed with internal error: {error:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Please ask your system administrator to check the logs.".to_owned(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<CartError> for ClientError {
    fn from(cart_error: CartError) -> Self {
        ClientError::Domain(cart_error)
    }
}

impl From<anyhow::Error> for ClientError {
    fn from(value: anyhow::Error) -> Self {
        ClientError::Internal(value)
    }
}
