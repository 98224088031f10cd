use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use log::info;

use protocol::user_event::UserEvent;
use sandbox::{ControllerMessage, SandboxConfig, SimState, TimeManager, TimeModel};

/// Run an earthquake scene without a window and log the ground state.
#[derive(Parser, Debug)]
struct Args {
	/// YAML scene config, defaults apply when omitted
	#[arg(short, long)]
	config: Option<PathBuf>,
	/// physics ticks to run
	#[arg(short, long, default_value_t = 600)]
	ticks: u32,
	/// log a frame every n ticks
	#[arg(long, default_value_t = 60)]
	report_every: u32,
}

fn main() -> Result<()> {
	env_logger::init();
	let args = Args::parse();
	let config = match &args.config {
		Some(path) => SandboxConfig::load(path)?,
		None => SandboxConfig::default(),
	};
	let world = config.build_world()?;
	let mut state = SimState::new(world, config.grid);
	let mut tm = TimeManager::new(config.tick_rate, TimeModel::VideoRender);
	state.handle(ControllerMessage::TogglePause);
	tm.set(state.running());

	let report_every = args.report_every.max(1);
	let budget = tm.period().as_secs_f32();
	let mut done = 0;
	while done < args.ticks {
		let start = Instant::now();
		for _ in 0..tm.take_ticks(tm.period()) {
			if state.tick() {
				done += 1;
			}
		}
		if done % report_every == 0 || done == args.ticks {
			let load = start.elapsed().as_secs_f32() / budget;
			let UserEvent::Update(_, hud, info) = state.frame(load);
			info!(
				"t={:.1} ground=({:.3}, {:.3}) shake=({}, {}) load={:.2}% particles={} joints={}",
				hud.run_time,
				hud.ground_drift,
				hud.ground_height,
				hud.magnitude_x,
				hud.magnitude_y,
				load * 100.,
				info.particle_len,
				info.joint_len,
			);
		}
	}

	let UserEvent::Update(model, hud, _) = state.frame(0.);
	let lowest = model
		.particles
		.iter()
		.filter(|p| !p.fixed)
		.map(|p| p.pos[1])
		.fold(f32::INFINITY, f32::min);
	println!(
		"{} ticks, ground drift {:.3}, ground height {:.3}, lowest free particle {:.3}",
		done, hud.ground_drift, hud.ground_height, lowest
	);
	Ok(())
}
