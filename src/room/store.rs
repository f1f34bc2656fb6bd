use crate::room::error::SendMessageError;
use crate::room::message::Message;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::time::Duration;
use uuid::Uuid;

/// Process-wide collection of chat rooms, keyed by caller-chosen strings.
///
/// Rooms come into existence with the first message sent to their key and
/// disappear again through [`RoomStore::delete_room`] or the idle sweep.
/// Operations on the same key linearize on the key's shard lock, so a
/// message that raced a deletion either went down with the room or started
/// a fresh one; it is never silently lost while the room lives on.
#[derive(Default)]
pub struct RoomStore {
	rooms: DashMap<String, Room>,
}

struct Room {
	messages: Vec<Message>,
	last_activity_at: DateTime<Utc>,
}

impl Room {
	fn new() -> Self {
		Self {
			messages: Vec::new(),
			last_activity_at: Utc::now(),
		}
	}

	fn is_idle(&self, now: DateTime<Utc>, idle_timeout: Duration) -> bool {
		match (now - self.last_activity_at).to_std() {
			Ok(elapsed) => elapsed > idle_timeout,
			// Last activity lies in the future, the clock must have stepped backwards.
			Err(_) => false,
		}
	}
}

impl RoomStore {
	/// All messages of the room in the order they were sent.
	///
	/// Unknown and expired rooms read as empty. Reading does not count as
	/// activity and will not keep an idle room alive.
	pub fn history(&self, room_key: &str) -> Vec<Message> {
		self.rooms
			.get(room_key)
			.map(|room| room.messages.clone())
			.unwrap_or_default()
	}

	/// Appends a message to the room, creating the room if necessary, and
	/// returns the stored message.
	///
	/// The message is timestamped while the room's entry lock is held so
	/// that storage order and timestamp order agree.
	pub fn send_message(&self, room_key: &str, author: &str, text: &str) -> Result<Message, SendMessageError> {
		if author.trim().is_empty() {
			return Err(SendMessageError::AuthorEmpty);
		}

		if text.trim().is_empty() {
			return Err(SendMessageError::TextEmpty);
		}

		let mut room = self.rooms.entry(room_key.to_owned()).or_insert_with(Room::new);
		let message = Message {
			id: Uuid::new_v4(),
			author: author.to_owned(),
			text: text.to_owned(),
			created_at: Utc::now(),
		};
		room.last_activity_at = message.created_at;
		room.messages.push(message.clone());

		Ok(message)
	}

	/// Removes the room and everything it contained.
	///
	/// Deleting an unknown room is a no-op. The key is immediately free to
	/// be reused for a fresh room with empty history.
	pub fn delete_room(&self, room_key: &str) {
		self.rooms.remove(room_key);
	}

	/// Removes every room whose last activity is longer than `idle_timeout`
	/// ago and returns how many rooms were removed.
	///
	/// Deterministic for a given `now` and map state; surviving rooms are
	/// left untouched. A message sent while the sweep runs either counts as
	/// activity before the idle check or re-creates the room right after
	/// its removal.
	pub fn sweep_expired(&self, now: DateTime<Utc>, idle_timeout: Duration) -> usize {
		let mut removed = 0;
		self.rooms.retain(|_, room| {
			let expired = room.is_idle(now, idle_timeout);
			if expired {
				removed += 1;
			}
			!expired
		});
		removed
	}
}
