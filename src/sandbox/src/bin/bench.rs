use std::time::Instant;

use anyhow::Result;

use quake::EarthquakeSystem;
use sandbox::scene;

fn main() -> Result<()> {
	let mut world = EarthquakeSystem::builder(4000., 1000.)
		.with_magnitude_x(5)
		.with_magnitude_y(2)
		.build()?;
	for n in 0..40 {
		scene::tower(&mut world, 20. + 95. * n as f32, 25, 40., 30.)?;
	}
	eprintln!(
		"INFO: {} particles, {} joints",
		world.particles().len(),
		world.joints().len()
	);
	let start = Instant::now();
	let rframes = 600;
	for _ in 0..rframes {
		world.update();
	}
	// load relative to a 60 Hz tick budget
	let time = rframes as f32 / 60.;
	let duration = start.elapsed().as_micros();
	eprintln!("{:.3}%", duration as f32 / time / 1e4);
	Ok(())
}
