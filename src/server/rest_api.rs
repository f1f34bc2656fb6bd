use crate::context::ApplicationContext;
use crate::room::error::SendMessageError;
use crate::room::store::RoomStore;
use crate::server::rest_api::models::{MessageResponse, RoomDeletedResponse, SendMessageRequest};
use crate::server::rest_api::response::Created;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

mod error;
mod models;
mod response;

pub fn router() -> Router<ApplicationContext> {
	Router::new().route(
		"/chat/{room_key}",
		get(room_history).post(send_message).delete(delete_room),
	)
}

async fn room_history(
	State(room_store): State<Arc<RoomStore>>,
	Path(room_key): Path<String>,
) -> Json<Vec<MessageResponse>> {
	let messages = room_store
		.history(&room_key)
		.into_iter()
		.map(MessageResponse::from)
		.collect();
	Json(messages)
}

async fn send_message(
	State(room_store): State<Arc<RoomStore>>,
	Path(room_key): Path<String>,
	Json(request): Json<SendMessageRequest>,
) -> Result<Created<Json<MessageResponse>>, SendMessageError> {
	let message = room_store.send_message(&room_key, &request.user, &request.text)?;
	Ok(Created(Json(message.into())))
}

async fn delete_room(State(room_store): State<Arc<RoomStore>>, Path(room_key): Path<String>) -> Json<RoomDeletedResponse> {
	room_store.delete_room(&room_key);
	Json(RoomDeletedResponse::default())
}
