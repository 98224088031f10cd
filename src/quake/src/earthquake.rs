use log::{debug, info};

use crate::error::Error;
use crate::magnitude::Magnitude;
use protocol::pr_model::{PrHud, PrModel};
use verlet::{Joint, JointId, Particle, ParticleId, ParticleSystem, Posbox, V2};

// simulated clock advance per update
const RUN_TIME_STEP: f32 = 0.1;
// physics timestep per update
const TIME_STEP: f32 = 0.1;
// displacement = magnitude * k * sin(run_time * f * magnitude)
const KX: f32 = 0.5;
const KY: f32 = 0.25;
const FX: f32 = 0.5;
const FY: f32 = 0.5;

pub struct EarthquakeBuilder {
	width: f32,
	height: f32,
	ground: f32,
	magnitude_x: i32,
	magnitude_y: i32,
	gravity: V2,
}

impl EarthquakeBuilder {
	pub fn with_ground(mut self, ground: f32) -> Self {
		self.ground = ground;
		self
	}

	pub fn with_magnitude_x(mut self, m: i32) -> Self {
		self.magnitude_x = m;
		self
	}

	pub fn with_magnitude_y(mut self, m: i32) -> Self {
		self.magnitude_y = m;
		self
	}

	pub fn with_gravity(mut self, gravity: V2) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn build(self) -> Result<EarthquakeSystem, Error> {
		let (width, height) = (self.width, self.height);
		if !(width.is_finite() && height.is_finite() && width > 0. && height > 0.) {
			return Err(Error::InvalidDimensions { width, height });
		}
		if !(self.ground >= 0. && self.ground < height) {
			return Err(Error::GroundOutOfRange {
				ground: self.ground,
				height,
			});
		}
		let magnitude_x = Magnitude::new(self.magnitude_x)?;
		let magnitude_y = Magnitude::new(self.magnitude_y)?;
		let posbox = Posbox::new(0., width, self.ground, height);
		info!(
			"new earthquake world {}x{}, ground {}, magnitude ({}, {})",
			width,
			height,
			self.ground,
			magnitude_x.get(),
			magnitude_y.get()
		);
		Ok(EarthquakeSystem {
			run_time: 0.,
			magnitude_x,
			magnitude_y,
			ground_dx: 0.,
			system: ParticleSystem::new(posbox, self.gravity),
		})
	}
}

/// A particle system whose floor shakes.
///
/// Particles created on the ground are fixed and glued to it, every other
/// particle touching the ground is dragged along through `move_by`.
#[derive(Clone, Debug)]
pub struct EarthquakeSystem {
	run_time: f32,
	magnitude_x: Magnitude,
	magnitude_y: Magnitude,
	ground_dx: f32,
	system: ParticleSystem,
}

impl EarthquakeSystem {
	pub fn builder(width: f32, height: f32) -> EarthquakeBuilder {
		EarthquakeBuilder {
			width,
			height,
			ground: 0.,
			magnitude_x: 0,
			magnitude_y: 0,
			gravity: V2::new(0., -1.),
		}
	}

	pub fn new(width: f32, height: f32) -> Result<Self, Error> {
		Self::builder(width, height).build()
	}

	pub fn run_time(&self) -> f32 {
		self.run_time
	}

	pub fn ground_height(&self) -> f32 {
		self.system.posbox().ymin
	}

	pub fn ground_dx(&self) -> f32 {
		self.ground_dx
	}

	pub fn magnitude_x(&self) -> i32 {
		self.magnitude_x.get()
	}

	pub fn magnitude_y(&self) -> i32 {
		self.magnitude_y.get()
	}

	pub fn inc_magnitude_x(&mut self, delta: i32) -> i32 {
		self.magnitude_x = self.magnitude_x.inc(delta);
		info!("horizontal magnitude {}", self.magnitude_x.get());
		self.magnitude_x.get()
	}

	pub fn inc_magnitude_y(&mut self, delta: i32) -> i32 {
		self.magnitude_y = self.magnitude_y.inc(delta);
		info!("vertical magnitude {}", self.magnitude_y.get());
		self.magnitude_y.get()
	}

	pub fn set_magnitude_x(&mut self, m: i32) -> Result<(), Error> {
		self.magnitude_x = Magnitude::new(m)?;
		Ok(())
	}

	pub fn set_magnitude_y(&mut self, m: i32) -> Result<(), Error> {
		self.magnitude_y = Magnitude::new(m)?;
		Ok(())
	}

	pub fn system(&self) -> &ParticleSystem {
		&self.system
	}

	pub fn particles(&self) -> &[Particle] {
		self.system.particles()
	}

	pub fn joints(&self) -> &[Joint] {
		self.system.joints()
	}

	pub fn particle_at(&self, x: f32, y: f32) -> Option<ParticleId> {
		self.system.particle_at(x, y)
	}

	pub fn particle_near(&self, x: f32, y: f32, radius: f32) -> Option<ParticleId> {
		self.system.particle_near(x, y, radius)
	}

	/// Returns the particle already at (x, y) or creates one there. New
	/// particles on the ground are fixed.
	pub fn create_particle(&mut self, x: f32, y: f32) -> ParticleId {
		if let Some(id) = self.system.particle_at(x, y) {
			return id;
		}
		let fixed = y == self.ground_height();
		self.system.create_particle(x, y, fixed)
	}

	/// Joins the particles at the two coordinates, creating them if needed.
	pub fn create_joint(
		&mut self,
		x1: f32,
		y1: f32,
		x2: f32,
		y2: f32,
	) -> Result<JointId, Error> {
		if x1 == x2 && y1 == y2 {
			return Err(Error::CoincidentEndpoints { x: x1, y: y1 });
		}
		let p1 = self.create_particle(x1, y1);
		let p2 = self.create_particle(x2, y2);
		self.join(p1, p2)
	}

	pub fn join(&mut self, p1: ParticleId, p2: ParticleId) -> Result<JointId, Error> {
		Ok(self.system.create_joint(p1, p2)?)
	}

	fn displacement(&self) -> (f32, f32) {
		let mx = self.magnitude_x.as_f32();
		let my = self.magnitude_y.as_f32();
		let dx = mx * KX * (self.run_time * FX * mx).sin();
		let dy = my * KY * (self.run_time * FY * my).sin();
		(dx, dy)
	}

	fn shake_ground(&mut self) {
		let (dx, dy) = self.displacement();
		self.system.move_lower_bound(0., dy);
		self.ground_dx += dx;
		let ground = self.ground_height();
		for p in self.system.particles_mut() {
			if p.is_fixed() {
				p.set_position(p.x() + dx, ground);
			} else if p.y() <= ground {
				p.move_by(dx, dy);
			}
		}
	}

	/// Advance the simulated clock by one tick. Returns the number of
	/// degenerate joint relaxations skipped by the solver.
	pub fn update(&mut self) -> usize {
		self.run_time += RUN_TIME_STEP;
		self.shake_ground();
		let skipped = self.system.update(TIME_STEP);
		debug!(
			"t={:.1} ground=({:.3}, {:.3})",
			self.run_time,
			self.ground_dx,
			self.ground_height()
		);
		skipped
	}

	pub fn pr_model(&self) -> PrModel {
		self.system.pr_model()
	}

	pub fn pr_hud(&self) -> PrHud {
		PrHud {
			ground_height: self.ground_height(),
			ground_drift: self.ground_dx,
			magnitude_x: self.magnitude_x.get(),
			magnitude_y: self.magnitude_y.get(),
			run_time: self.run_time,
		}
	}
}
