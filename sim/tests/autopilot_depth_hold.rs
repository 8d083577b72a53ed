use rand::rngs::SmallRng;
use rand::SeedableRng;

use sim::{apply_commands, step_submarine, Command, SimConfig, SubInputs, SubmarineState, Subsystem};

fn boat_under_way(cfg: &SimConfig) -> SubmarineState {
    let mut sub = SubmarineState::new(cfg);
    sub.battery_level = 80.0;
    sub.control_rods_inserted = false;
    sub.coolant_pumps_active = true;
    sub.steam_generator_active = true;
    sub.power_turbine_active = true;
    sub.containment_active = true;
    sub.reactor_active = true;
    sub.reactor_temp = 150.0;
    sub.ballast_level = 50.0;
    sub
}

/// Full nav suite plus a running plant: the autopilot takes a 100 m depth
/// change and settles inside its deadband within five minutes.
#[test]
fn autopilot_converges_on_a_deeper_target() {
    let cfg = SimConfig::default();
    let mut sub = boat_under_way(&cfg);
    sub.depth = 200.0;

    apply_commands(
        &cfg,
        &mut sub,
        &[
            Command::Toggle(Subsystem::NavigationComputer),
            Command::Toggle(Subsystem::Gyroscope),
            Command::Toggle(Subsystem::DepthControl),
            Command::Toggle(Subsystem::BallastControl),
            Command::SetTargetDepth(300.0),
            Command::ToggleAutopilot,
        ],
    );
    assert!(sub.autopilot_active, "engage refused with a full nav suite");

    let mut rng = SmallRng::seed_from_u64(21);
    let dt = 0.1;
    for _ in 0..3000 {
        // 300 seconds
        step_submarine(&cfg, SubInputs::default(), &mut sub, dt, &mut rng);
    }

    assert!(sub.autopilot_active, "autopilot dropped out mid-dive");
    assert!(sub.reactor_active, "plant tripped mid-dive");
    assert!(
        (sub.depth - 300.0).abs() < 5.0,
        "failed to hold depth: at {} m, target 300 m",
        sub.depth
    );
}

/// Same lineup, but climbing works too.
#[test]
fn autopilot_converges_on_a_shallower_target() {
    let cfg = SimConfig::default();
    let mut sub = boat_under_way(&cfg);
    sub.depth = 300.0;
    sub.navigation_computer_active = true;
    sub.gyroscope_active = true;
    sub.depth_control_active = true;
    sub.ballast_control_active = true;

    apply_commands(
        &cfg,
        &mut sub,
        &[Command::SetTargetDepth(150.0), Command::ToggleAutopilot],
    );
    assert!(sub.autopilot_active);

    let mut rng = SmallRng::seed_from_u64(22);
    for _ in 0..3000 {
        step_submarine(&cfg, SubInputs::default(), &mut sub, 0.1, &mut rng);
    }

    assert!(
        (sub.depth - 150.0).abs() < 5.0,
        "failed to hold depth: at {} m, target 150 m",
        sub.depth
    );
}

/// Losing the gyroscope kills the autopilot and hands the planes back to a
/// slow random drift.
#[test]
fn gyro_loss_disengages_mid_dive() {
    let cfg = SimConfig::default();
    let mut sub = boat_under_way(&cfg);
    sub.depth = 200.0;
    sub.navigation_computer_active = true;
    sub.gyroscope_active = true;
    sub.depth_control_active = true;
    sub.ballast_control_active = true;
    sub.target_depth = 300.0;
    sub.autopilot_active = true;

    let mut rng = SmallRng::seed_from_u64(23);
    for _ in 0..50 {
        step_submarine(&cfg, SubInputs::default(), &mut sub, 0.1, &mut rng);
    }
    assert!(sub.autopilot_active);

    sub.gyroscope_active = false;
    // Keep the nav bus browned out so gating cannot bring it back.
    sub.battery_level = 8.0;
    step_submarine(&cfg, SubInputs::default(), &mut sub, 0.1, &mut rng);

    assert!(!sub.autopilot_active, "autopilot survived losing its gyro");
}
