//! Facing engine demo entry point.
//!
//! Runs a headless simulation where an owner entity at the origin keeps
//! turning toward a target that wanders around the play plane. Built on:
//! - **bevy_ecs** for entity-component-system architecture
//! - **glam** for vectors and quaternions
//!
//! # Main Loop
//!
//! 1. Load `facing.ini` (or the `--config` path) and apply CLI overrides
//! 2. Spawn the wandering target and the facing owner
//! 3. For every frame: advance [`WorldTime`], re-roll the target's heading once
//!    per simulated second, then run `movement_system -> facing_system -> record_facing_trace`
//! 4. Log the final facing and optionally write the JSON trace
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --frames 300 --seed 7 --trace trace.json
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec3;
use std::f32::consts::TAU;
use std::path::PathBuf;

use facingengine::components::facingtarget::FacingTarget;
use facingengine::components::mapposition::MapPosition;
use facingengine::components::orientation::Orientation;
use facingengine::components::rigidbody::RigidBody;
use facingengine::facing::angle_delta_degrees;
use facingengine::resources::facingconfig::{DEFAULT_CONFIG_PATH, FacingConfig};
use facingengine::resources::worldtime::WorldTime;
use facingengine::systems::facing::facing_system;
use facingengine::systems::movement::movement_system;
use facingengine::systems::time::update_world_time;
use facingengine::systems::trace::record_facing_trace;
use facingengine::trace::FacingTrace;

const TARGET_START: Vec3 = Vec3::new(100.0, 0.0, 0.0);
const TARGET_MIN_SPEED: f32 = 20.0;
const TARGET_MAX_SPEED: f32 = 80.0;
/// Beyond this distance from the origin the target is steered back.
const WANDER_RADIUS: f32 = 200.0;
const LOG_EVERY_FRAMES: u64 = 60;

/// Facing engine demo
#[derive(Parser)]
#[command(version, about = "Turns an entity toward a wandering target, frame by frame.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Number of frames to simulate.
    #[arg(long)]
    frames: Option<u32>,

    /// Unscaled seconds per frame.
    #[arg(long, value_name = "SECONDS")]
    dt: Option<f32>,

    /// How fast the owner turns toward the target.
    #[arg(long)]
    smoothing_rate: Option<f32>,

    /// Offset in degrees for the artwork's default facing.
    #[arg(long, value_name = "DEG", allow_hyphen_values = true)]
    adjustment: Option<f32>,

    /// Do not clamp the per-frame interpolation factor to 1.
    #[arg(long)]
    unclamped: bool,

    /// Seed for the target's wander.
    #[arg(long)]
    seed: Option<u64>,

    /// Write per-frame facing samples to this JSON file.
    #[arg(long, value_name = "PATH")]
    trace: Option<PathBuf>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    save_config: bool,
}

fn apply_overrides(config: &mut FacingConfig, cli: &Cli) {
    if let Some(frames) = cli.frames {
        config.frames = frames;
    }
    if let Some(dt) = cli.dt {
        config.fixed_dt = dt;
    }
    if let Some(rate) = cli.smoothing_rate {
        config.smoothing_rate = rate;
    }
    if let Some(adjustment) = cli.adjustment {
        config.adjustment_angle_degrees = adjustment;
    }
    if cli.unclamped {
        config.clamp_factor = false;
    }
}

fn random_velocity(rng: &mut fastrand::Rng, position: Vec3) -> Vec3 {
    let speed = TARGET_MIN_SPEED + rng.f32() * (TARGET_MAX_SPEED - TARGET_MIN_SPEED);
    if position.truncate().length() > WANDER_RADIUS {
        return (-position.truncate()).normalize_or_zero().extend(0.0) * speed;
    }
    let heading = rng.f32() * TAU;
    Vec3::new(heading.cos(), heading.sin(), 0.0) * speed
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = FacingConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        log::info!("{e}; using defaults");
    }
    apply_overrides(&mut config, &cli);

    if cli.save_config {
        if let Err(e) = config.save_to_file() {
            log::error!("{e}");
            std::process::exit(1);
        }
        return;
    }

    let seed = cli.seed.unwrap_or_else(|| fastrand::u64(..));
    let mut rng = fastrand::Rng::with_seed(seed);
    log::info!(
        "Simulating {} frames at dt={} (seed {})",
        config.frames,
        config.fixed_dt,
        seed
    );

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    if cli.trace.is_some() {
        world.insert_resource(FacingTrace::new());
    }

    let target = world
        .spawn((
            MapPosition::from_vec3(TARGET_START),
            RigidBody::new()
                .with_velocity(random_velocity(&mut rng, TARGET_START)),
        ))
        .id();
    let owner = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            Orientation::default(),
            FacingTarget::new(target).with_controller(config.controller()),
        ))
        .id();

    let mut update = Schedule::default();
    update.add_systems((movement_system, facing_system, record_facing_trace).chain());

    // --------------- Main loop ---------------
    let mut next_reroll = 1.0;
    for _ in 0..config.frames {
        update_world_time(&mut world, config.fixed_dt);

        let elapsed = world.resource::<WorldTime>().elapsed;
        if elapsed >= next_reroll {
            next_reroll += 1.0;
            if let Some(position) = world.get::<MapPosition>(target).map(|p| p.pos) {
                let velocity = random_velocity(&mut rng, position);
                if let Some(mut rb) = world.get_mut::<RigidBody>(target) {
                    rb.set_velocity(velocity);
                }
            }
        }

        update.run(&mut world);
        world.clear_trackers();

        let frame = world.resource::<WorldTime>().frame_count;
        if frame % LOG_EVERY_FRAMES == 0 {
            if let Some(summary) = facing_summary(&world, owner, target) {
                log::debug!("frame {frame}: {summary}");
            }
        }
    }

    if let Some(summary) = facing_summary(&world, owner, target) {
        log::info!("Finished: {summary}");
    }

    if let Some(path) = cli.trace {
        let Some(trace) = world.get_resource::<FacingTrace>() else {
            return;
        };
        match trace.write_json(&path) {
            Ok(()) => log::info!("Wrote {} samples to {}", trace.len(), path.display()),
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        }
    }
}

fn facing_summary(world: &World, owner: Entity, target: Entity) -> Option<String> {
    let owner_pos = world.get::<MapPosition>(owner)?;
    let orientation = world.get::<Orientation>(owner)?;
    let facing = world.get::<FacingTarget>(owner)?;
    let target_pos = world.get::<MapPosition>(target)?;

    let current = orientation.degrees();
    let desired = facing.controller.desired_angle_for(owner_pos.pos, target_pos.pos);
    Some(format!(
        "target at ({:.1}, {:.1}), facing {current:.2}deg, desired {desired:.2}deg, error {:.2}deg",
        target_pos.pos.x,
        target_pos.pos.y,
        angle_delta_degrees(current, desired),
    ))
}
