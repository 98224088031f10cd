use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
	InvalidDimensions { width: f32, height: f32 },
	GroundOutOfRange { ground: f32, height: f32 },
	MagnitudeOutOfRange(i32),
	CoincidentEndpoints { x: f32, y: f32 },
	System(verlet::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::InvalidDimensions { width, height } => {
				write!(f, "invalid world size {}x{}", width, height)
			}
			Error::GroundOutOfRange { ground, height } => write!(
				f,
				"ground level {} outside of [0, {})",
				ground, height
			),
			Error::MagnitudeOutOfRange(m) => write!(
				f,
				"magnitude {} outside of [0, {}]",
				m,
				crate::MAGNITUDE_UPPER_BOUND
			),
			Error::CoincidentEndpoints { x, y } => {
				write!(f, "joint endpoints coincide at ({}, {})", x, y)
			}
			Error::System(e) => write!(f, "particle system: {}", e),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::System(e) => Some(e),
			_ => None,
		}
	}
}

impl From<verlet::Error> for Error {
	fn from(e: verlet::Error) -> Self {
		Error::System(e)
	}
}
