use std::fmt;

use crate::particle::ParticleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// Handle does not belong to this system.
	UnknownParticle(ParticleId),
	/// A joint needs two distinct endpoints.
	SelfJoint(ParticleId),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::UnknownParticle(id) => write!(f, "unknown particle {}", id.0),
			Error::SelfJoint(id) => {
				write!(f, "cannot join particle {} to itself", id.0)
			}
		}
	}
}

impl std::error::Error for Error {}
