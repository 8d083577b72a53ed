//! Headless scenario runner for the submarine simulation.
//!
//! Runs one of the built-in scripted scenarios at a fixed tick rate,
//! logging boat status once a second and every event the step function
//! reports. Useful for eyeballing tuning changes without a frontend.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{info, warn};

use sim::{
    apply_command, step_submarine, Command, SimConfig, SubInputs, SubmarineState, Subsystem,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "sub-console")]
#[command(about = "Scripted console runner for the submarine sim", long_about = None)]
pub struct Args {
    /// Optional TOML file overriding parts of the default tuning
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Scripted scenario to run
    #[arg(long, value_enum, default_value_t = Scenario::ReactorStartup)]
    pub scenario: Scenario,
    /// Simulated seconds to run
    #[arg(long, default_value_t = 120.0)]
    pub duration: f32,
    /// Ticks per simulated second
    #[arg(long, default_value_t = 20.0)]
    pub rate: f32,
    /// RNG seed (gyro drift is the only consumer)
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Cold boat brings the reactor up and charges the battery.
    ReactorStartup,
    /// Running boat engages the autopilot for a 300 m dive.
    AutopilotDive,
    /// Deep boat on a flat grid blows ballast and surfaces.
    EmergencyBlow,
}

/// Load tuning from a TOML file, or fall back to the defaults. Partial
/// files are fine; unspecified fields keep their default values.
pub fn load_config(path: &Option<PathBuf>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: SimConfig =
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

struct Script {
    label: &'static str,
    setup: fn(&mut SubmarineState),
    /// Commands issued once their timestamp (simulated seconds) passes.
    timed: Vec<(f32, Command)>,
}

fn script(scenario: Scenario) -> Script {
    match scenario {
        Scenario::ReactorStartup => Script {
            label: "reactor startup",
            setup: |sub| {
                sub.battery_level = 30.0;
            },
            timed: vec![
                (1.0, Command::ToggleControlRods),
                (2.0, Command::Toggle(Subsystem::CoolantPumps)),
                (2.5, Command::Toggle(Subsystem::SteamGenerator)),
                (3.0, Command::Toggle(Subsystem::PowerTurbine)),
                (3.5, Command::Toggle(Subsystem::Containment)),
                (5.0, Command::ToggleReactor),
                (8.0, Command::Toggle(Subsystem::Lights)),
                (10.0, Command::Toggle(Subsystem::AirCirculation)),
                (10.5, Command::Toggle(Subsystem::OxygenScrubbers)),
                (11.0, Command::ToggleOxygenSystem),
            ],
        },
        Scenario::AutopilotDive => Script {
            label: "autopilot dive",
            setup: |sub| {
                sub.battery_level = 80.0;
                sub.control_rods_inserted = false;
                sub.coolant_pumps_active = true;
                sub.steam_generator_active = true;
                sub.power_turbine_active = true;
                sub.containment_active = true;
                sub.reactor_active = true;
                sub.reactor_temp = 150.0;
                sub.ballast_level = 50.0;
            },
            timed: vec![
                (1.0, Command::Toggle(Subsystem::NavigationComputer)),
                (1.5, Command::Toggle(Subsystem::Gyroscope)),
                (2.0, Command::Toggle(Subsystem::DepthControl)),
                (2.5, Command::Toggle(Subsystem::BallastControl)),
                (3.0, Command::SetTargetDepth(300.0)),
                (3.5, Command::ToggleAutopilot),
            ],
        },
        Scenario::EmergencyBlow => Script {
            label: "emergency blow",
            setup: |sub| {
                sub.depth = 500.0;
                sub.ballast_level = 80.0;
                sub.battery_level = 0.0;
            },
            timed: vec![(1.0, Command::EmergencyBlow)],
        },
    }
}

pub fn run(args: &Args, cfg: &SimConfig) -> Result<()> {
    anyhow::ensure!(args.rate > 0.0, "tick rate must be positive");
    let dt = 1.0 / args.rate;
    let script = script(args.scenario);
    let mut sub = SubmarineState::new(cfg);
    (script.setup)(&mut sub);
    let mut rng = SmallRng::seed_from_u64(args.seed);

    info!(scenario = script.label, duration = args.duration, rate = args.rate, "running");

    let mut pending = script.timed.into_iter().peekable();
    let mut t = 0.0_f32;
    let mut next_status = 0.0_f32;
    while t < args.duration {
        while let Some(&(at, cmd)) = pending.peek() {
            if at > t {
                break;
            }
            pending.next();
            info!(t = at, ?cmd, "command");
            apply_command(cfg, &mut sub, cmd);
        }

        let events = step_submarine(cfg, SubInputs::default(), &mut sub, dt, &mut rng);
        if let Some(ping) = events.sonar_ping {
            info!(t, volume = ping.volume, "sonar ping");
        }
        if events.reactor_scram {
            warn!(t, temp = sub.reactor_temp, "reactor scram");
        }
        if events.reactor_meltdown {
            warn!(t, hull = sub.hull_integrity, "reactor meltdown");
        }

        if t >= next_status {
            info!(
                t,
                depth = sub.depth,
                v = sub.vertical_speed,
                temp = sub.reactor_temp,
                power = sub.reactor_power,
                battery = sub.battery_level,
                oxygen = sub.oxygen,
                hull = sub.hull_integrity,
                "status"
            );
            next_status += 1.0;
        }
        t += dt;
    }

    let failures = sub.failures();
    if failures.is_empty() {
        info!(depth = sub.depth, battery = sub.battery_level, "scenario complete");
    } else {
        warn!(?failures, "scenario ended in failure");
    }
    Ok(())
}
