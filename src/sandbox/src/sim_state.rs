use log::{debug, info, warn};

use crate::controller_message::ControllerMessage;
use protocol::user_event::{UpdateInfo, UserEvent};
use quake::EarthquakeSystem;
use verlet::ParticleId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertionMode {
	Particle,
	Joint,
}

/// Everything the driving loop needs between frames: the world, the
/// run/pause state and the in-progress edit.
pub struct SimState {
	quake: EarthquakeSystem,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,

	mode: InsertionMode,
	selected: Option<ParticleId>,
	grid: f32,
}

impl SimState {
	/// Starts paused in particle mode.
	pub fn new(quake: EarthquakeSystem, grid: f32) -> Self {
		Self {
			quake,
			forward_frames: 0,
			mode: InsertionMode::Particle,
			selected: None,
			grid,
		}
	}

	pub fn quake(&self) -> &EarthquakeSystem {
		&self.quake
	}

	pub fn running(&self) -> bool {
		self.forward_frames != 0
	}

	pub fn mode(&self) -> InsertionMode {
		self.mode
	}

	pub fn selected(&self) -> Option<ParticleId> {
		self.selected
	}

	pub fn snap(&self, pos: [f32; 2]) -> [f32; 2] {
		[
			(pos[0] / self.grid).round() * self.grid,
			(pos[1] / self.grid).round() * self.grid,
		]
	}

	pub fn handle(&mut self, msg: ControllerMessage) {
		match msg {
			ControllerMessage::TogglePause => {
				if self.forward_frames == 0 {
					self.forward_frames = -1;
					self.selected = None;
					info!("running");
				} else {
					self.forward_frames = 0;
					info!("paused");
				}
			}
			ControllerMessage::FrameForward => {
				if self.forward_frames >= 0 {
					self.forward_frames += 1;
				}
			}
			ControllerMessage::SetMode(mode) => self.set_mode(mode),
			ControllerMessage::ToggleMode => {
				let mode = match self.mode {
					InsertionMode::Particle => InsertionMode::Joint,
					InsertionMode::Joint => InsertionMode::Particle,
				};
				self.set_mode(mode);
			}
			ControllerMessage::Click(pos) => self.click(pos),
			ControllerMessage::MagnitudeX(delta) => {
				self.quake.inc_magnitude_x(delta);
			}
			ControllerMessage::MagnitudeY(delta) => {
				self.quake.inc_magnitude_y(delta);
			}
		}
	}

	fn set_mode(&mut self, mode: InsertionMode) {
		if self.mode != mode {
			self.selected = None;
		}
		self.mode = mode;
	}

	fn click(&mut self, pos: [f32; 2]) {
		if self.running() {
			debug!("ignore click while running");
			return;
		}
		let [x, y] = self.snap(pos);
		match self.mode {
			InsertionMode::Particle => {
				if self.quake.particle_at(x, y).is_none() {
					let id = self.quake.create_particle(x, y);
					info!("particle {} at ({}, {})", id.0, x, y);
				}
			}
			InsertionMode::Joint => self.click_joint(x, y),
		}
	}

	fn click_joint(&mut self, x: f32, y: f32) {
		let target = match self.quake.particle_near(x, y, self.grid * 0.5) {
			Some(id) => id,
			None => self.quake.create_particle(x, y),
		};
		let Some(sel) = self.selected.take() else {
			self.selected = Some(target);
			return;
		};
		// equality is positional, so any particle sitting on the
		// selection counts as clicking it again
		let ps = self.quake.particles();
		if ps[sel.0] == ps[target.0] {
			debug!("deselect particle {}", sel.0);
			return;
		}
		match self.quake.join(sel, target) {
			Ok(id) => info!("joint {} between {} and {}", id.0, sel.0, target.0),
			Err(e) => warn!("cannot join: {}", e),
		}
	}

	/// Advance one physics tick if running or stepping.
	pub fn tick(&mut self) -> bool {
		if self.forward_frames == 0 {
			return false;
		}
		if self.forward_frames > 0 {
			self.forward_frames -= 1;
		}
		self.quake.update();
		true
	}

	pub fn frame(&self, load: f32) -> UserEvent {
		let model = self.quake.pr_model();
		let info = UpdateInfo {
			load,
			running: self.running(),
			particle_len: model.particles.len(),
			joint_len: model.joints.len(),
		};
		UserEvent::Update(model, self.quake.pr_hud(), info)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn state() -> SimState {
		SimState::new(EarthquakeSystem::new(640., 480.).unwrap(), 10.)
	}

	#[test]
	fn test_snap() {
		let s = state();
		assert_eq!(s.snap([12.4, 37.6]), [10., 40.]);
		assert_eq!(s.snap([-4., 5.]), [0., 10.]);
	}

	#[test]
	fn test_pause_and_step() {
		let mut s = state();
		assert!(!s.running());
		assert!(!s.tick());
		s.handle(ControllerMessage::FrameForward);
		s.handle(ControllerMessage::FrameForward);
		assert!(s.tick());
		assert!(s.tick());
		assert!(!s.tick());
		s.handle(ControllerMessage::TogglePause);
		for _ in 0..5 {
			assert!(s.tick());
		}
		s.handle(ControllerMessage::TogglePause);
		assert!(!s.tick());
		assert!((s.quake().run_time() - 0.7).abs() < 1e-5);
	}

	#[test]
	fn test_particle_clicks() {
		let mut s = state();
		s.handle(ControllerMessage::Click([101., 2.]));
		s.handle(ControllerMessage::Click([99., -1.]));
		s.handle(ControllerMessage::Click([100., 48.]));
		let ps = s.quake().particles();
		assert_eq!(ps.len(), 2);
		assert!(ps[0].is_fixed());
		assert!(!ps[1].is_fixed());
	}

	#[test]
	fn test_joint_clicks() {
		let mut s = state();
		s.handle(ControllerMessage::ToggleMode);
		assert_eq!(s.mode(), InsertionMode::Joint);
		s.handle(ControllerMessage::Click([100., 0.]));
		assert_eq!(s.selected(), Some(ParticleId(0)));
		s.handle(ControllerMessage::Click([100., 50.]));
		assert_eq!(s.selected(), None);
		assert_eq!(s.quake().joints().len(), 1);
		// chain from the top
		s.handle(ControllerMessage::Click([101., 51.]));
		s.handle(ControllerMessage::Click([150., 50.]));
		assert_eq!(s.quake().particles().len(), 3);
		assert_eq!(s.quake().joints().len(), 2);
	}

	#[test]
	fn test_joint_click_same_deselects() {
		let mut s = state();
		s.handle(ControllerMessage::SetMode(InsertionMode::Joint));
		s.handle(ControllerMessage::Click([100., 50.]));
		s.handle(ControllerMessage::Click([102., 48.]));
		assert_eq!(s.selected(), None);
		assert!(s.quake().joints().is_empty());
		assert_eq!(s.quake().particles().len(), 1);
	}

	#[test]
	fn test_edits_locked_while_running() {
		let mut s = state();
		s.handle(ControllerMessage::TogglePause);
		s.handle(ControllerMessage::Click([100., 50.]));
		assert!(s.quake().particles().is_empty());
		s.handle(ControllerMessage::MagnitudeX(3));
		assert_eq!(s.quake().magnitude_x(), 3);
	}

	#[test]
	fn test_frame() {
		let mut s = state();
		s.handle(ControllerMessage::SetMode(InsertionMode::Joint));
		s.handle(ControllerMessage::Click([100., 0.]));
		s.handle(ControllerMessage::Click([100., 50.]));
		let UserEvent::Update(model, hud, info) = s.frame(0.25);
		assert_eq!(model.particles.len(), 2);
		assert_eq!(info.joint_len, 1);
		assert!(!info.running);
		assert_eq!(hud.magnitude_x, 0);
	}
}
