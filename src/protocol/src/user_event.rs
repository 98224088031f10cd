use crate::pr_model::{PrHud, PrModel};

#[derive(Debug)]
pub enum UserEvent {
	Update(PrModel, PrHud, UpdateInfo),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UpdateInfo {
	// fraction of the tick budget spent on physics
	pub load: f32,
	pub running: bool,
	pub particle_len: usize,
	pub joint_len: usize,
}
