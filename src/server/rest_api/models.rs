use crate::room::message::Message;
use chrono::serde::ts_milliseconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for sending a message.
///
/// Missing fields deserialize as empty strings so they take the same
/// validation path as blank ones.
#[derive(Deserialize)]
pub struct SendMessageRequest {
	#[serde(default)]
	pub user: String,
	#[serde(default)]
	pub text: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
	pub id: Uuid,
	pub user: String,
	pub text: String,
	#[serde(with = "ts_milliseconds")]
	pub timestamp: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
	fn from(message: Message) -> Self {
		Self {
			id: message.id,
			user: message.author,
			text: message.text,
			timestamp: message.created_at,
		}
	}
}

#[derive(Serialize)]
pub struct RoomDeletedResponse {
	pub message: String,
}

impl Default for RoomDeletedResponse {
	fn default() -> Self {
		Self {
			message: "Chat deleted".to_string(),
		}
	}
}
