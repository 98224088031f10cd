// pr_model: Physical model for rendering

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrParticle {
	pub pos: [f32; 2],
	pub fixed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrJoint {
	pub id: usize,
	pub particles: [usize; 2],
	pub ends: [[f32; 2]; 2],
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrModel {
	pub particles: Vec<PrParticle>,
	pub joints: Vec<PrJoint>,
}

// hud values, ground_height is the lower y bound of the world
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrHud {
	pub ground_height: f32,
	pub ground_drift: f32,
	pub magnitude_x: i32,
	pub magnitude_y: i32,
	pub run_time: f32,
}

impl PrModel {
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty() && self.joints.is_empty()
	}
}
