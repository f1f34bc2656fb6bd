use crate::room::error::SendMessageError;
use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

impl From<SendMessageError> for ApiErrorResponse {
	fn from(error: SendMessageError) -> Self {
		use SendMessageError::*;
		match error {
			AuthorEmpty => ApiErrorResponse {
				r#type: "send-message-author-empty",
				status: StatusCode::BAD_REQUEST.as_u16(),
				message: error.to_string(),
			},
			TextEmpty => ApiErrorResponse {
				r#type: "send-message-text-empty",
				status: StatusCode::BAD_REQUEST.as_u16(),
				message: error.to_string(),
			},
		}
	}
}

impl IntoResponse for SendMessageError {
	fn into_response(self) -> Response {
		ApiErrorResponse::from(self).into_response()
	}
}
