use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single authored chat message. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
	pub id: Uuid,
	pub author: String,
	pub text: String,
	pub created_at: DateTime<Utc>,
}
