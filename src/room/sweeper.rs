use crate::context::ApplicationContext;
use chrono::Utc;
use tracing::info;

/// Periodically removes rooms that have been idle for longer than the
/// configured timeout.
///
/// Runs forever; meant to be spawned alongside the server and dropped with it.
pub async fn run_room_sweeper(application_context: ApplicationContext) {
	let ApplicationContext {
		configuration,
		time_source,
		room_store,
	} = application_context;

	let mut interval = time_source.interval_at(configuration.sweep_interval, configuration.sweep_interval);
	loop {
		interval.tick().await;

		let removed = room_store.sweep_expired(Utc::now(), configuration.room_idle_timeout);
		if removed > 0 {
			info!("Removed {} idle chat rooms.", removed);
		}
	}
}
