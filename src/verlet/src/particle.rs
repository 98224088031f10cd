use crate::posbox::Posbox;
use crate::V2;
use protocol::pr_model::PrParticle;

/// Stable handle into the particle arena of a `ParticleSystem`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub usize);

#[derive(Clone, Debug)]
pub struct Particle {
	pos: V2,
	ppos: V2,
	accel: V2,
	fixed: bool,
	posbox: Posbox,
}

impl Particle {
	pub fn new(pos: V2, accel: V2, fixed: bool, posbox: Posbox) -> Self {
		Self {
			pos,
			ppos: pos,
			accel,
			fixed,
			posbox,
		}
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn get_ppos(&self) -> V2 {
		self.ppos
	}

	pub fn x(&self) -> f32 {
		self.pos[0]
	}

	pub fn y(&self) -> f32 {
		self.pos[1]
	}

	pub fn get_accel(&self) -> V2 {
		self.accel
	}

	pub fn is_fixed(&self) -> bool {
		self.fixed
	}

	pub fn get_posbox(&self) -> Posbox {
		self.posbox
	}

	pub fn set_posbox(&mut self, posbox: Posbox) {
		self.posbox = posbox;
	}

	// used by joint relaxation, clamping is left to the caller
	pub(crate) fn add_pos(&mut self, dp: V2) {
		self.pos += dp;
	}

	/// Verlet step, fixed particles are left alone.
	pub fn update(&mut self, dt: f32) {
		if self.fixed {
			return;
		}
		let ppos = self.pos;
		let dv = self.accel * dt;
		let dp = self.pos - self.ppos + dv * dt;
		self.pos += dp;
		self.ppos = ppos;
		self.clamp_to_bounds();
	}

	pub fn clamp_to_bounds(&mut self) -> bool {
		self.posbox.apply(&mut self.pos)
	}

	/// Translate regardless of the fixed flag, then clamp.
	pub fn move_by(&mut self, dx: f32, dy: f32) {
		self.pos += V2::new(dx, dy);
		self.clamp_to_bounds();
	}

	/// Hard set without clamping. Ground followers need this to track a
	/// lower bound that is temporarily outside the box.
	pub fn set_position(&mut self, x: f32, y: f32) {
		self.pos = V2::new(x, y);
	}

	pub fn render(&self) -> PrParticle {
		PrParticle {
			pos: [self.pos[0], self.pos[1]],
			fixed: self.fixed,
		}
	}
}

// two particles at the same spot compare equal, the editor relies on this
impl PartialEq for Particle {
	fn eq(&self, other: &Self) -> bool {
		self.pos == other.pos
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn big_box() -> Posbox {
		Posbox::new(-100., 100., -100., 100.)
	}

	#[test]
	fn test_rest_without_accel() {
		let mut p = Particle::new(V2::new(3., 4.), V2::zeros(), false, big_box());
		for _ in 0..100 {
			p.update(0.1);
		}
		assert_eq!(p.get_pos(), V2::new(3., 4.));
	}

	#[test]
	fn test_verlet_step() {
		let accel = V2::new(0.5, -2.0);
		let dt = 0.1;
		let mut p = Particle::new(V2::new(0., 0.), accel, false, big_box());
		p.update(dt);
		p.update(dt);
		let pos = p.get_pos();
		let ppos = p.get_ppos();
		p.update(dt);
		let expect = (pos - ppos) + accel * dt * dt;
		let got = p.get_pos() - pos;
		eprintln!("{:?} {:?}", expect, got);
		assert!((expect - got).magnitude() < 1e-6);
		assert_eq!(p.get_ppos(), pos);
	}

	#[test]
	fn test_fixed_ignores_integration() {
		let accel = V2::new(0., -9.8);
		let mut p = Particle::new(V2::new(1., 1.), accel, true, big_box());
		p.update(0.5);
		assert_eq!(p.get_pos(), V2::new(1., 1.));
		// explicit moves still apply
		p.move_by(1., 0.);
		assert_eq!(p.get_pos(), V2::new(2., 1.));
	}

	#[test]
	fn test_clamp_idempotent() {
		let posbox = Posbox::new(0., 10., 0., 10.);
		let mut p = Particle::new(V2::new(5., 5.), V2::zeros(), false, posbox);
		p.set_position(-4., 12.5);
		assert!(p.clamp_to_bounds());
		let once = p.get_pos();
		assert!(!p.clamp_to_bounds());
		assert_eq!(p.get_pos(), once);
		assert_eq!(once, V2::new(0., 10.));
	}

	#[test]
	fn test_update_stays_in_box() {
		let posbox = Posbox::new(0., 10., 0., 10.);
		let accel = V2::new(0., -50.);
		let mut p = Particle::new(V2::new(5., 1.), accel, false, posbox);
		for _ in 0..20 {
			p.update(0.1);
			assert!(posbox.contains(p.get_pos()));
		}
		assert_eq!(p.y(), 0.);
	}

	#[test]
	fn test_set_position_skips_clamp() {
		let posbox = Posbox::new(0., 10., 0., 10.);
		let mut p = Particle::new(V2::new(5., 0.), V2::zeros(), true, posbox);
		p.set_position(5., -1.);
		assert_eq!(p.y(), -1.);
	}

	#[test]
	fn test_eq_by_position() {
		let a = Particle::new(V2::new(1., 2.), V2::zeros(), true, big_box());
		let b = Particle::new(V2::new(1., 2.), V2::new(0., -1.), false, big_box());
		let c = Particle::new(V2::new(1., 3.), V2::zeros(), true, big_box());
		assert!(a == b);
		assert!(a != c);
	}
}
