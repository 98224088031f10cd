use log::{debug, trace, warn};

use crate::error::Error;
use crate::joint::{Joint, JointId};
use crate::particle::{Particle, ParticleId};
use crate::posbox::Posbox;
use crate::V2;
use protocol::pr_model::PrModel;

/// Particles and joints inside a box, all subject to the same gravity.
///
/// Both collections are append only and iterated in insertion order, so a
/// given sequence of calls always produces the same bits.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
	posbox: Posbox,
	gravity: V2,
	// more passes make joints stiffer, fewer make them springy
	iteration: usize,

	particles: Vec<Particle>,
	joints: Vec<Joint>,
}

impl ParticleSystem {
	pub fn new(posbox: Posbox, gravity: V2) -> Self {
		Self {
			posbox,
			gravity,
			iteration: 10,
			particles: Vec::new(),
			joints: Vec::new(),
		}
	}

	pub fn with_iterations(mut self, iteration: usize) -> Self {
		self.iteration = iteration;
		self
	}

	pub fn iterations(&self) -> usize {
		self.iteration
	}

	pub fn posbox(&self) -> Posbox {
		self.posbox
	}

	pub fn gravity(&self) -> V2 {
		self.gravity
	}

	/// First particle stored exactly at (x, y). No tolerance is applied,
	/// callers must pass exactly representable coordinates.
	pub fn particle_at(&self, x: f32, y: f32) -> Option<ParticleId> {
		let pos = V2::new(x, y);
		self.particles
			.iter()
			.position(|p| p.get_pos() == pos)
			.map(ParticleId)
	}

	/// First particle within `radius` of (x, y), edge inclusive.
	pub fn particle_near(
		&self,
		x: f32,
		y: f32,
		radius: f32,
	) -> Option<ParticleId> {
		let pos = V2::new(x, y);
		self.particles
			.iter()
			.position(|p| (p.get_pos() - pos).magnitude() <= radius)
			.map(ParticleId)
	}

	pub fn create_particle(&mut self, x: f32, y: f32, fixed: bool) -> ParticleId {
		let id = ParticleId(self.particles.len());
		let p = Particle::new(V2::new(x, y), self.gravity, fixed, self.posbox);
		self.particles.push(p);
		debug!("add particle {} at ({}, {}) fixed={}", id.0, x, y, fixed);
		id
	}

	pub fn create_joint(
		&mut self,
		p1: ParticleId,
		p2: ParticleId,
	) -> Result<JointId, Error> {
		let joint = Joint::new(&self.particles, p1, p2).map_err(|e| {
			warn!("reject joint: {}", e);
			e
		})?;
		let id = JointId(self.joints.len());
		debug!(
			"add joint {} between {} and {}, l0={}",
			id.0,
			p1.0,
			p2.0,
			joint.rest_length()
		);
		self.joints.push(joint);
		Ok(id)
	}

	pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
		self.particles.get(id.0)
	}

	pub fn particle_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
		self.particles.get_mut(id.0)
	}

	pub fn joint(&self, id: JointId) -> Option<&Joint> {
		self.joints.get(id.0)
	}

	/// Current endpoint distance of a joint.
	pub fn joint_length(&self, id: JointId) -> Option<f32> {
		self.joints.get(id.0).map(|j| j.length(&self.particles))
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	// a slice cannot grow or shrink, so joint handles stay valid
	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	pub fn joints(&self) -> &[Joint] {
		&self.joints
	}

	#[cfg(not(debug_assertions))]
	fn integrate(&mut self, dt: f32) {
		use rayon::prelude::*;
		self.particles.par_iter_mut().for_each(|p| p.update(dt));
	}

	#[cfg(debug_assertions)]
	fn integrate(&mut self, dt: f32) {
		self.particles.iter_mut().for_each(|p| p.update(dt));
	}

	#[cfg(not(debug_assertions))]
	fn clamp_all(&mut self) {
		use rayon::prelude::*;
		self.particles.par_iter_mut().for_each(|p| {
			p.clamp_to_bounds();
		});
	}

	#[cfg(debug_assertions)]
	fn clamp_all(&mut self) {
		self.particles.iter_mut().for_each(|p| {
			p.clamp_to_bounds();
		});
	}

	/// One relaxation pass: every joint once in insertion order, then every
	/// particle back into the box. Returns how many joints were skipped.
	pub fn relax_once(&mut self) -> usize {
		let mut skipped = 0;
		for (idx, joint) in self.joints.iter().enumerate() {
			if let Err(e) = joint.relax(&mut self.particles) {
				trace!("skip joint {}: distance {}", idx, e.distance);
				skipped += 1;
			}
		}
		self.clamp_all();
		skipped
	}

	/// Integrate, then run the relaxation passes. Returns the number of
	/// degenerate joint relaxations that were skipped.
	pub fn update(&mut self, dt: f32) -> usize {
		self.integrate(dt);
		let mut skipped = 0;
		for _ in 0..self.iteration {
			skipped += self.relax_once();
		}
		if skipped > 0 {
			debug!("{} degenerate joint relaxations skipped", skipped);
		}
		skipped
	}

	fn sync_posbox(&mut self) {
		let posbox = self.posbox;
		self.particles
			.iter_mut()
			.for_each(|p| p.set_posbox(posbox));
	}

	pub fn move_lower_bound(&mut self, dx: f32, dy: f32) {
		self.posbox.move_min(V2::new(dx, dy));
		self.sync_posbox();
	}

	pub fn move_upper_bound(&mut self, dx: f32, dy: f32) {
		self.posbox.move_max(V2::new(dx, dy));
		self.sync_posbox();
	}

	pub fn pr_model(&self) -> PrModel {
		let particles = self.particles.iter().map(|p| p.render()).collect();
		let joints = self
			.joints
			.iter()
			.enumerate()
			.map(|(idx, j)| j.render(JointId(idx), &self.particles))
			.collect();
		PrModel { particles, joints }
	}
}
