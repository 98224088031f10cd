use std::time::Duration;

pub enum TimeModel {
	// one tick per frame, wall clock ignored
	VideoRender,
	// ticks follow the wall clock at a fixed rate
	RtFrameLock,
}

/// Paces physics ticks at a fixed rate independent of how often the caller
/// renders.
pub struct TimeManager {
	pft: Duration,
	model: TimeModel,
	running: bool,
	backlog: Duration,
	max_catchup: u32,
}

impl TimeManager {
	pub fn new(tick_rate: u32, model: TimeModel) -> Self {
		Self {
			pft: Duration::from_secs(1) / tick_rate.max(1),
			model,
			running: false,
			backlog: Duration::ZERO,
			max_catchup: 5,
		}
	}

	pub fn with_max_catchup(mut self, max_catchup: u32) -> Self {
		self.max_catchup = max_catchup;
		self
	}

	pub fn period(&self) -> Duration {
		self.pft
	}

	pub fn set(&mut self, on: bool) {
		if on == self.running {
			return;
		}
		self.running = on;
		// time spent paused is never replayed
		self.backlog = Duration::ZERO;
	}

	/// Number of ticks due after `elapsed` more wall time.
	pub fn take_ticks(&mut self, elapsed: Duration) -> u32 {
		if !self.running {
			return 0;
		}
		match self.model {
			TimeModel::VideoRender => 1,
			TimeModel::RtFrameLock => {
				self.backlog += elapsed;
				let due = (self.backlog.as_nanos() / self.pft.as_nanos()) as u32;
				if due > self.max_catchup {
					// too far behind, drop the rest
					self.backlog = Duration::ZERO;
					return self.max_catchup;
				}
				self.backlog -= self.pft * due;
				due
			}
		}
	}

	/// How long the caller may sleep before the next tick is due.
	pub fn until_next(&self) -> Duration {
		match self.model {
			TimeModel::VideoRender => Duration::ZERO,
			TimeModel::RtFrameLock => self.pft.saturating_sub(self.backlog),
		}
	}
}
