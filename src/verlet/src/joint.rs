use crate::error::Error;
use crate::particle::{Particle, ParticleId};
use crate::V2;
use protocol::pr_model::PrJoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JointId(pub usize);

/// Endpoints too close (or non finite) to define a direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegenerateConstraint {
	pub distance: f32,
}

/// Fixed length rod between two particles of the same system.
///
/// Only handles are stored, the particle data is passed in on every call,
/// so a joint can never outlive or alias its endpoints. Everything that
/// reads particles goes through the owning `ParticleSystem`.
#[derive(Clone, Debug)]
pub struct Joint {
	ps: [ParticleId; 2],
	l0: f32,
}

impl Joint {
	pub(crate) fn new(
		particles: &[Particle],
		p1: ParticleId,
		p2: ParticleId,
	) -> Result<Self, Error> {
		if p1 == p2 {
			return Err(Error::SelfJoint(p1));
		}
		let pos1 = particles.get(p1.0).ok_or(Error::UnknownParticle(p1))?;
		let pos2 = particles.get(p2.0).ok_or(Error::UnknownParticle(p2))?;
		let l0 = (pos2.get_pos() - pos1.get_pos()).magnitude();
		Ok(Self { ps: [p1, p2], l0 })
	}

	pub fn rest_length(&self) -> f32 {
		self.l0
	}

	pub fn particles(&self) -> [ParticleId; 2] {
		self.ps
	}

	fn delta(&self, particles: &[Particle]) -> V2 {
		particles[self.ps[1].0].get_pos() - particles[self.ps[0].0].get_pos()
	}

	pub(crate) fn length(&self, particles: &[Particle]) -> f32 {
		self.delta(particles).magnitude()
	}

	/// One symmetric relaxation step, each end absorbs half the correction.
	/// Returns the length error seen before the step.
	pub(crate) fn relax(
		&self,
		particles: &mut [Particle],
	) -> Result<f32, DegenerateConstraint> {
		let delta = self.delta(particles);
		let l = delta.magnitude();
		if !l.is_normal() {
			return Err(DegenerateConstraint { distance: l });
		}
		let dl = l - self.l0;
		let correct = delta * 0.5 * (dl / l);
		particles[self.ps[0].0].add_pos(correct);
		particles[self.ps[1].0].add_pos(-correct);
		Ok(dl)
	}

	pub(crate) fn render(&self, id: JointId, particles: &[Particle]) -> PrJoint {
		let p1 = particles[self.ps[0].0].get_pos();
		let p2 = particles[self.ps[1].0].get_pos();
		PrJoint {
			id: id.0,
			particles: [self.ps[0].0, self.ps[1].0],
			ends: [[p1[0], p1[1]], [p2[0], p2[1]]],
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::posbox::Posbox;

	fn free(x: f32, y: f32) -> Particle {
		let posbox = Posbox::new(-100., 100., -100., 100.);
		Particle::new(V2::new(x, y), V2::zeros(), false, posbox)
	}

	#[test]
	fn test_rest_length() {
		let ps = vec![free(0., 0.), free(3., 4.)];
		let j = Joint::new(&ps, ParticleId(0), ParticleId(1)).unwrap();
		assert!((j.rest_length() - 5.).abs() < 1e-6);
	}

	#[test]
	fn test_bad_endpoints() {
		let ps = vec![free(0., 0.), free(3., 4.)];
		assert_eq!(
			Joint::new(&ps, ParticleId(1), ParticleId(1)).unwrap_err(),
			Error::SelfJoint(ParticleId(1))
		);
		assert_eq!(
			Joint::new(&ps, ParticleId(0), ParticleId(7)).unwrap_err(),
			Error::UnknownParticle(ParticleId(7))
		);
	}

	#[test]
	fn test_single_relax_is_exact() {
		let mut ps = vec![free(0., 0.), free(2., 0.)];
		let j = Joint::new(&ps, ParticleId(0), ParticleId(1)).unwrap();
		ps[1].set_position(4., 0.);
		let dl = j.relax(&mut ps).unwrap();
		assert!((dl - 2.).abs() < 1e-6);
		// symmetric: both ends moved by one
		assert!((ps[0].x() - 1.).abs() < 1e-6);
		assert!((ps[1].x() - 3.).abs() < 1e-6);
		assert!((j.length(&ps) - 2.).abs() < 1e-6);
	}

	#[test]
	fn test_compressed_pushes_apart() {
		let mut ps = vec![free(0., 0.), free(0., 10.)];
		let j = Joint::new(&ps, ParticleId(0), ParticleId(1)).unwrap();
		ps[1].set_position(0., 4.);
		j.relax(&mut ps).unwrap();
		assert!((ps[0].y() + 3.).abs() < 1e-5);
		assert!((ps[1].y() - 7.).abs() < 1e-5);
	}

	#[test]
	fn test_coincident_is_degenerate() {
		let mut ps = vec![free(1., 1.), free(1., 1.)];
		let j = Joint::new(&ps, ParticleId(0), ParticleId(1)).unwrap();
		assert_eq!(j.rest_length(), 0.);
		let err = j.relax(&mut ps).unwrap_err();
		assert_eq!(err.distance, 0.);
		assert_eq!(ps[0].get_pos(), V2::new(1., 1.));
		assert_eq!(ps[1].get_pos(), V2::new(1., 1.));
	}

	#[test]
	fn test_render_ends() {
		let ps = vec![free(0., 0.), free(3., 4.)];
		let j = Joint::new(&ps, ParticleId(0), ParticleId(1)).unwrap();
		let pr = j.render(JointId(2), &ps);
		assert_eq!(pr.id, 2);
		assert_eq!(pr.particles, [0, 1]);
		assert_eq!(pr.ends, [[0., 0.], [3., 4.]]);
	}
}
