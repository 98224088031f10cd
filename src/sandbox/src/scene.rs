use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::error::ConfigError;
use quake::EarthquakeSystem;

/// Prefab structure placed on the ground before the simulation starts.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneConfig {
	Tower {
		x: f32,
		floors: u32,
		width: f32,
		floor_height: f32,
	},
	Bridge {
		x: f32,
		segments: u32,
		segment_len: f32,
		height: f32,
	},
	Truss {
		x: f32,
		width: f32,
		height: f32,
		nodes: u32,
		seed: u64,
	},
}

impl SceneConfig {
	pub fn apply(&self, eq: &mut EarthquakeSystem) -> Result<(), ConfigError> {
		match *self {
			SceneConfig::Tower {
				x,
				floors,
				width,
				floor_height,
			} => tower(eq, x, floors, width, floor_height),
			SceneConfig::Bridge {
				x,
				segments,
				segment_len,
				height,
			} => bridge(eq, x, segments, segment_len, height),
			SceneConfig::Truss {
				x,
				width,
				height,
				nodes,
				seed,
			} => truss(eq, x, width, height, nodes, seed),
		}
	}
}

fn finite(name: &str, v: f32) -> Result<(), ConfigError> {
	if !v.is_finite() {
		return Err(ConfigError::Invalid(format!("{} {}", name, v)));
	}
	Ok(())
}

fn at_least(name: &str, v: f32, min: f32) -> Result<(), ConfigError> {
	finite(name, v)?;
	if v < min {
		return Err(ConfigError::Invalid(format!("{} {} below {}", name, v, min)));
	}
	Ok(())
}

fn positive(name: &str, v: f32) -> Result<(), ConfigError> {
	finite(name, v)?;
	if v <= 0. {
		return Err(ConfigError::Invalid(format!("{} {} not positive", name, v)));
	}
	Ok(())
}

/// Braced box floors stacked from the ground at `x`.
pub fn tower(
	eq: &mut EarthquakeSystem,
	x: f32,
	floors: u32,
	width: f32,
	floor_height: f32,
) -> Result<(), ConfigError> {
	finite("tower x", x)?;
	positive("tower width", width)?;
	positive("tower floor_height", floor_height)?;
	let ground = eq.ground_height();
	for floor in 0..floors {
		let y0 = ground + floor_height * floor as f32;
		let y1 = y0 + floor_height;
		let x1 = x + width;
		eq.create_joint(x, y0, x, y1)?;
		eq.create_joint(x1, y0, x1, y1)?;
		eq.create_joint(x, y1, x1, y1)?;
		eq.create_joint(x, y0, x1, y1)?;
		if floor == 0 {
			eq.create_joint(x, y0, x1, y0)?;
		}
	}
	Ok(())
}

/// Deck of `segments` pieces hung between two ground pillars, each piece
/// braced by a triangle above it.
pub fn bridge(
	eq: &mut EarthquakeSystem,
	x: f32,
	segments: u32,
	segment_len: f32,
	height: f32,
) -> Result<(), ConfigError> {
	finite("bridge x", x)?;
	positive("bridge segment_len", segment_len)?;
	positive("bridge height", height)?;
	let ground = eq.ground_height();
	let deck = ground + height;
	let end = x + segment_len * segments as f32;
	eq.create_joint(x, ground, x, deck)?;
	eq.create_joint(end, ground, end, deck)?;
	for seg in 0..segments {
		let xa = x + segment_len * seg as f32;
		let xb = xa + segment_len;
		let top = deck + segment_len * 0.5;
		let xm = xa + segment_len * 0.5;
		eq.create_joint(xa, deck, xb, deck)?;
		eq.create_joint(xa, deck, xm, top)?;
		eq.create_joint(xm, top, xb, deck)?;
		if seg > 0 {
			eq.create_joint(xm - segment_len, top, xm, top)?;
		}
	}
	Ok(())
}

/// Random triangulated structure. Each node is joined to the two closest
/// nodes placed before it, starting from two ground anchors. Coordinates are
/// whole numbers so they stay exactly addressable.
pub fn truss(
	eq: &mut EarthquakeSystem,
	x: f32,
	width: f32,
	height: f32,
	nodes: u32,
	seed: u64,
) -> Result<(), ConfigError> {
	finite("truss x", x)?;
	// node heights are drawn from [1, height]
	positive("truss width", width)?;
	at_least("truss height", height, 1.)?;
	let mut rng = StdRng::seed_from_u64(seed);
	let ground = eq.ground_height();
	let mut placed = vec![
		eq.create_particle(x, ground),
		eq.create_particle(x + width, ground),
	];
	for _ in 0..nodes {
		let nx = (x + rng.gen_range(0.0..=width)).round();
		let ny = (ground + rng.gen_range(1.0..=height)).round();
		if eq.particle_at(nx, ny).is_some() {
			continue;
		}
		let mut near: Vec<(f32, usize)> = placed
			.iter()
			.enumerate()
			.map(|(idx, id)| {
				let p = &eq.particles()[id.0];
				((p.x() - nx).hypot(p.y() - ny), idx)
			})
			.collect();
		near.sort_by(|a, b| a.0.total_cmp(&b.0));
		let node = eq.create_particle(nx, ny);
		for (_, idx) in near.into_iter().take(2) {
			eq.join(placed[idx], node)?;
		}
		placed.push(node);
	}
	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;

	fn world() -> EarthquakeSystem {
		EarthquakeSystem::new(640., 480.).unwrap()
	}

	#[test]
	fn test_tower_shape() {
		let mut eq = world();
		tower(&mut eq, 100., 3, 40., 30.).unwrap();
		// two particles per level, four levels
		assert_eq!(eq.particles().len(), 8);
		assert_eq!(eq.joints().len(), 13);
		let fixed = eq.particles().iter().filter(|p| p.is_fixed()).count();
		assert_eq!(fixed, 2);
	}

	#[test]
	fn test_bridge_shape() {
		let mut eq = world();
		bridge(&mut eq, 100., 4, 40., 60.).unwrap();
		let fixed = eq.particles().iter().filter(|p| p.is_fixed()).count();
		assert_eq!(fixed, 2);
		// 2 pillars, 3 per segment, 3 top chords
		assert_eq!(eq.joints().len(), 2 + 4 * 3 + 3);
	}

	#[test]
	fn test_truss_seeded() {
		let mut a = world();
		let mut b = world();
		truss(&mut a, 200., 120., 100., 12, 7).unwrap();
		truss(&mut b, 200., 120., 100., 12, 7).unwrap();
		assert_eq!(a.pr_model(), b.pr_model());
		assert!(a.joints().len() >= 2);
		for p in a.particles() {
			assert!(p.y() >= 0.);
			assert!(p.x() >= 200. && p.x() <= 320.);
		}
	}

	#[test]
	fn test_bad_sizes_rejected() {
		let mut eq = world();
		assert!(matches!(
			truss(&mut eq, 100., 80., 0.5, 3, 1),
			Err(ConfigError::Invalid(_))
		));
		assert!(matches!(
			truss(&mut eq, 100., f32::NAN, 50., 3, 1),
			Err(ConfigError::Invalid(_))
		));
		assert!(matches!(
			tower(&mut eq, 100., 2, -40., 30.),
			Err(ConfigError::Invalid(_))
		));
		assert!(matches!(
			bridge(&mut eq, f32::INFINITY, 2, 40., 30.),
			Err(ConfigError::Invalid(_))
		));
		assert!(eq.particles().is_empty());
	}

	#[test]
	fn test_config_tag() {
		let yaml = "kind: tower\nx: 10\nfloors: 2\nwidth: 20\nfloor_height: 20\n";
		let sc: SceneConfig = serde_yaml::from_str(yaml).unwrap();
		assert_eq!(
			sc,
			SceneConfig::Tower {
				x: 10.,
				floors: 2,
				width: 20.,
				floor_height: 20.
			}
		);
	}
}
