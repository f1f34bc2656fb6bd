use futures_util::{Stream, StreamExt};
use std::any::type_name;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::{Notify, broadcast};
use tokio::time::interval_at;
use tokio_stream::wrappers::BroadcastStream;

/// Source of interval timers that tests can replace with a virtual clock.
///
/// The default source hands out plain tokio intervals. A test source hands
/// out intervals that never fire on their own and only advance through
/// [`TimeSource::advance_time`].
#[derive(Clone, Default)]
pub struct TimeSource {
	test_time_source: Option<Arc<TestTimeSource>>,
}

pub struct TestTimeSource {
	time_sender: broadcast::Sender<Duration>,
	notification: Notify,
}

impl Default for TestTimeSource {
	fn default() -> Self {
		Self {
			time_sender: broadcast::channel(16).0,
			notification: Default::default(),
		}
	}
}

impl TimeSource {
	pub fn test() -> Self {
		Self {
			test_time_source: Some(Default::default()),
		}
	}

	pub fn interval_at(&self, start: Duration, period: Duration) -> Interval {
		match &self.test_time_source {
			None => Interval::Tokio(interval_at(tokio::time::Instant::now() + start, period)),
			Some(test_time_source) => Interval::Test(test_time_source.interval_at(start, period)),
		}
	}

	/// Advances the virtual clock, firing intervals whose deadline has passed.
	///
	/// # Panics
	/// Panics when called on a time source that isn't in test mode.
	pub fn advance_time(&self, by_duration: Duration) {
		self.test_time_source
			.as_ref()
			.expect("Can only be called in test mode.")
			.advance_time(by_duration);
	}

	/// Waits until an interval has been requested from this time source.
	pub async fn wait_for_time_request(&self) {
		match &self.test_time_source {
			None => (),
			Some(test_time_source) => test_time_source.wait_for_time_request().await,
		}
	}
}

impl TestTimeSource {
	fn interval_at(&self, start: Duration, period: Duration) -> TestInterval {
		let interval = TestInterval {
			current_time: Duration::ZERO,
			next_deadline: start,
			period,
			receiver: BroadcastStream::new(self.time_sender.subscribe()),
		};

		self.notification.notify_one();

		interval
	}

	fn advance_time(&self, by_duration: Duration) {
		let _ = self.time_sender.send(by_duration); // ignore error so this works even without anyone waiting
	}

	async fn wait_for_time_request(&self) {
		self.notification.notified().await;
	}
}

pub enum Interval {
	Tokio(tokio::time::Interval),
	Test(TestInterval),
}

impl Interval {
	pub async fn tick(&mut self) {
		match self {
			Interval::Tokio(interval) => {
				interval.tick().await;
			}
			Interval::Test(interval) => interval
				.next()
				.await
				.unwrap_or_else(|| panic!("{} dropped prematurely.", type_name::<TimeSource>())),
		};
	}
}

pub struct TestInterval {
	current_time: Duration,
	next_deadline: Duration,
	period: Duration,
	receiver: BroadcastStream<Duration>,
}

impl Stream for TestInterval {
	type Item = ();

	fn poll_next(mut self: Pin<&mut Self>, context: &mut Context) -> Poll<Option<Self::Item>> {
		let receive_poll = self.as_mut().receiver.poll_next_unpin(context);
		match receive_poll {
			Poll::Ready(Some(time_delta)) => {
				self.as_mut().current_time += time_delta.expect("Failed to receive current time.");
			}
			Poll::Ready(None) => return Poll::Ready(None),
			Poll::Pending => {}
		};

		if self.current_time >= self.next_deadline {
			let period = self.period;
			self.next_deadline += period;
			return Poll::Ready(Some(()));
		}

		Poll::Pending
	}
}
