use crate::configuration::Configuration;
use crate::room::store::RoomStore;
use crate::utils::time_source::TimeSource;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	pub time_source: TimeSource,
	pub room_store: Arc<RoomStore>,
}

impl ApplicationContext {
	pub fn new(configuration: Configuration, time_source: TimeSource) -> ApplicationContext {
		Self {
			configuration,
			time_source,
			room_store: Arc::new(RoomStore::default()),
		}
	}
}
