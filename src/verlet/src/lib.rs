pub mod error;
pub mod joint;
pub mod particle;
pub mod particle_system;
pub mod posbox;

pub use error::Error;
pub use joint::{DegenerateConstraint, Joint, JointId};
pub use particle::{Particle, ParticleId};
pub use particle_system::ParticleSystem;
pub use posbox::Posbox;
pub use protocol::V2;
