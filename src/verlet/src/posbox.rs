use crate::V2;

// inclusive on every edge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Posbox {
	pub xmin: f32,
	pub xmax: f32,
	pub ymin: f32,
	pub ymax: f32,
}

impl Posbox {
	pub fn new(xmin: f32, xmax: f32, ymin: f32, ymax: f32) -> Self {
		Self {
			xmin,
			xmax,
			ymin,
			ymax,
		}
	}

	/// Clamp `pos` into the box, returns true if any coordinate changed.
	pub fn apply(&self, pos: &mut V2) -> bool {
		// max/min instead of f32::clamp, which panics on an inverted box
		let clamped = V2::new(
			pos[0].max(self.xmin).min(self.xmax),
			pos[1].max(self.ymin).min(self.ymax),
		);
		let flag = clamped != *pos;
		*pos = clamped;
		flag
	}

	pub fn contains(&self, pos: V2) -> bool {
		pos[0] >= self.xmin
			&& pos[0] <= self.xmax
			&& pos[1] >= self.ymin
			&& pos[1] <= self.ymax
	}

	// neither edge move can invert the box, min stays <= max
	pub fn move_min(&mut self, dp: V2) {
		self.xmin = (self.xmin + dp[0]).min(self.xmax);
		self.ymin = (self.ymin + dp[1]).min(self.ymax);
	}

	pub fn move_max(&mut self, dp: V2) {
		self.xmax = (self.xmax + dp[0]).max(self.xmin);
		self.ymax = (self.ymax + dp[1]).max(self.ymin);
	}
}
