use crate::error::Error;

pub const MAGNITUDE_UPPER_BOUND: i32 = 9;

/// Shake severity, always within [0, MAGNITUDE_UPPER_BOUND].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Magnitude(i32);

impl Magnitude {
	pub fn new(value: i32) -> Result<Self, Error> {
		if !(0..=MAGNITUDE_UPPER_BOUND).contains(&value) {
			return Err(Error::MagnitudeOutOfRange(value));
		}
		Ok(Self(value))
	}

	pub fn get(self) -> i32 {
		self.0
	}

	// saturates on both ends
	pub fn inc(self, delta: i32) -> Self {
		Self(self.0.saturating_add(delta).clamp(0, MAGNITUDE_UPPER_BOUND))
	}

	pub fn as_f32(self) -> f32 {
		self.0 as f32
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_new_range() {
		assert_eq!(Magnitude::new(0).unwrap().get(), 0);
		assert_eq!(Magnitude::new(9).unwrap().get(), 9);
		assert_eq!(Magnitude::new(10), Err(Error::MagnitudeOutOfRange(10)));
		assert_eq!(Magnitude::new(-1), Err(Error::MagnitudeOutOfRange(-1)));
	}

	#[test]
	fn test_inc_saturates() {
		let m = Magnitude::default();
		assert_eq!(m.inc(4).get(), 4);
		assert_eq!(m.inc(100).get(), MAGNITUDE_UPPER_BOUND);
		assert_eq!(m.inc(-1).get(), 0);
		assert_eq!(m.inc(i32::MIN).get(), 0);
		assert_eq!(m.inc(3).inc(-2).get(), 1);
	}
}
