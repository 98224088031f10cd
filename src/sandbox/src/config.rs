//! Sandbox configuration loaded from YAML.
//!
//! Every field has a default, so an empty document is a valid config:
//!
//! ```yaml
//! width: 640
//! height: 480
//! ground: 0
//! magnitude_x: 3       # 0..=9
//! magnitude_y: 1       # 0..=9
//! gravity: [0, -1]
//! grid: 10             # click snapping
//! tick_rate: 60        # physics ticks per second
//! scene:
//!   - kind: tower
//!     x: 200
//!     floors: 4
//!     width: 40
//!     floor_height: 30
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::scene::SceneConfig;
use quake::EarthquakeSystem;
use verlet::V2;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SandboxConfig {
	pub width: f32,
	pub height: f32,
	pub ground: f32,
	pub magnitude_x: i32,
	pub magnitude_y: i32,
	pub gravity: [f32; 2],
	pub grid: f32,
	pub tick_rate: u32,
	pub scene: Vec<SceneConfig>,
}

impl Default for SandboxConfig {
	fn default() -> Self {
		Self {
			width: 640.,
			height: 480.,
			ground: 0.,
			magnitude_x: 0,
			magnitude_y: 0,
			gravity: [0., -1.],
			grid: 10.,
			tick_rate: 60,
			scene: Vec::new(),
		}
	}
}

impl SandboxConfig {
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let file = File::open(path)?;
		let config: Self = serde_yaml::from_reader(BufReader::new(file))?;
		info!("loaded config from {}", path.display());
		Ok(config)
	}

	pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
		Ok(serde_yaml::from_str(text)?)
	}

	/// Validates the parameters and builds the world with its scene.
	pub fn build_world(&self) -> Result<EarthquakeSystem, ConfigError> {
		if !(self.grid.is_finite() && self.grid > 0.) {
			return Err(ConfigError::Invalid(format!("grid {}", self.grid)));
		}
		if self.tick_rate == 0 {
			return Err(ConfigError::Invalid("tick_rate 0".to_string()));
		}
		let mut eq = EarthquakeSystem::builder(self.width, self.height)
			.with_ground(self.ground)
			.with_magnitude_x(self.magnitude_x)
			.with_magnitude_y(self.magnitude_y)
			.with_gravity(V2::new(self.gravity[0], self.gravity[1]))
			.build()?;
		for sc in self.scene.iter() {
			sc.apply(&mut eq)?;
		}
		info!(
			"world ready: {} particles, {} joints",
			eq.particles().len(),
			eq.joints().len()
		);
		Ok(eq)
	}
}
