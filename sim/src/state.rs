use crate::SimConfig;

/// Continuous operator axes, applied at the top of every step. Discrete
/// actions (subsystem toggles, setpoints) go through [`crate::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SubInputs {
    /// Propulsion setting in [-100, 100]. Positive drives the boat down.
    pub thrust: f32,
    /// Manual trim stick as a rate in degrees/s. Ignored while the
    /// autopilot holds the planes.
    pub trim_rate: f32,
}

/// Depth-hold controller memory. The PID accumulator and the last error
/// live on the state so a step carries no hidden locals.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutopilotState {
    pub integral_error: f32,
    pub previous_error: f32,
}

/// Domain failure end-states. These are data, not errors: a step never
/// fails, it only reports what the boat has gotten itself into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    ReactorMeltdown,
    HullBreach,
    Asphyxiation,
    PowerLoss,
}

/// Complete boat state, owned by the simulation loop and advanced by
/// [`crate::step_submarine`]. No aliasing, no interior mutability; one
/// step reads and writes exactly this.
#[derive(Debug, Clone)]
pub struct SubmarineState {
    // Kinematics
    pub depth: f32,
    /// Positive is downward (toward max depth), matching `depth`.
    pub vertical_speed: f32,
    /// Display-only scalar speed (km/h).
    pub speed: f32,
    /// Pitch used both as a control and as a physical effect, degrees,
    /// ±30 under manual control.
    pub trim_angle: f32,
    pub thrust: f32,

    // Reactor
    pub reactor_temp: f32,
    /// Generation output in [0, 100].
    pub reactor_power: f32,
    pub reactor_active: bool,
    /// Terminal once set.
    pub reactor_destroyed: bool,
    pub control_rods_inserted: bool,
    pub coolant_pumps_active: bool,
    pub steam_generator_active: bool,
    pub power_turbine_active: bool,
    pub containment_active: bool,
    pub emergency_cooling_active: bool,
    /// Manual target-seeking cooling loop (distinct from the pumps).
    pub cooling_active: bool,

    // Power
    pub battery_level: f32,
    pub backup_power_active: bool,
    /// Derived aggregate draw, kW.
    pub power_consumption: f32,

    // Hull / environment
    pub hull_integrity: f32,
    pub hull_temperature: f32,
    pub water_temperature: f32,
    /// Derived, 0 at the surface to 100 at max depth.
    pub pressure_hull_stress: f32,

    // Life support
    pub oxygen: f32,
    pub oxygen_system_active: bool,
    pub oxygen_scrubbers_active: bool,
    pub oxygen_generator_active: bool,
    pub air_circulation_active: bool,
    pub emergency_air_supply_active: bool,

    // Navigation
    pub navigation_computer_active: bool,
    pub gyroscope_active: bool,
    pub depth_control_active: bool,
    pub ballast_control_active: bool,
    pub autopilot_active: bool,
    pub target_depth: f32,
    pub autopilot: AutopilotState,
    /// Continuous tank level the depth-hold controller is commanding, if
    /// engaged. Manual control only ever commands 0 or 100 via
    /// `ballast_tanks_filled`.
    pub autopilot_ballast_target: Option<f32>,
    /// Accumulates while the gyroscope is down; the planes wander.
    pub gyro_drift_timer: f32,

    // Ballast
    pub ballast_level: f32,
    pub ballast_tanks_filled: bool,
    pub manual_ballast_blow_active: bool,
    pub emergency_surface: bool,

    // Misc
    pub nitrogen_level: f32,
    pub lights_active: bool,
    pub sonar_active: bool,
    pub sonar_ping_timer: f32,
    pub communications_active: bool,
    pub distress_beacon_active: bool,
    pub fire_suppression_active: bool,
    pub manual_bilge_pumps_active: bool,
    pub emergency_lighting_active: bool,
    pub hull_monitoring_active: bool,
}

impl SubmarineState {
    /// Cold boat at the surface: everything off, rods in, battery flat.
    pub fn new(_cfg: &SimConfig) -> Self {
        Self {
            depth: 0.0,
            vertical_speed: 0.0,
            speed: 0.0,
            trim_angle: 0.0,
            thrust: 0.0,

            reactor_temp: 25.0,
            reactor_power: 0.0,
            reactor_active: false,
            reactor_destroyed: false,
            control_rods_inserted: true,
            coolant_pumps_active: false,
            steam_generator_active: false,
            power_turbine_active: false,
            containment_active: false,
            emergency_cooling_active: false,
            cooling_active: false,

            battery_level: 0.0,
            backup_power_active: false,
            power_consumption: 0.0,

            hull_integrity: 100.0,
            hull_temperature: 25.0,
            water_temperature: 20.0,
            pressure_hull_stress: 0.0,

            oxygen: 100.0,
            oxygen_system_active: false,
            oxygen_scrubbers_active: false,
            oxygen_generator_active: false,
            air_circulation_active: false,
            emergency_air_supply_active: false,

            navigation_computer_active: false,
            gyroscope_active: false,
            depth_control_active: false,
            ballast_control_active: false,
            autopilot_active: false,
            target_depth: 0.0,
            autopilot: AutopilotState::default(),
            autopilot_ballast_target: None,
            gyro_drift_timer: 0.0,

            ballast_level: 20.0,
            ballast_tanks_filled: false,
            manual_ballast_blow_active: false,
            emergency_surface: false,

            nitrogen_level: 0.0,
            lights_active: false,
            sonar_active: false,
            sonar_ping_timer: 0.0,
            communications_active: false,
            distress_beacon_active: false,
            fire_suppression_active: false,
            manual_bilge_pumps_active: false,
            emergency_lighting_active: false,
            hull_monitoring_active: false,
        }
    }

    /// Whether electrical systems with the given battery floor can run.
    pub fn powered(&self, battery_threshold: f32) -> bool {
        self.battery_level > battery_threshold || self.backup_power_active
    }

    /// Count of running life-support sub-generators (scrubbers, O2
    /// generator, air circulation). The main O2 system needs two of three.
    pub fn life_support_quorum(&self) -> u32 {
        self.oxygen_scrubbers_active as u32
            + self.oxygen_generator_active as u32
            + self.air_circulation_active as u32
    }

    /// Tank level the ballast system is driving toward this tick.
    pub(crate) fn ballast_target(&self) -> f32 {
        if let Some(t) = self.autopilot_ballast_target {
            t
        } else if self.ballast_tanks_filled {
            100.0
        } else {
            0.0
        }
    }

    /// Failure end-states currently in effect, checked after integration.
    pub fn failures(&self) -> Vec<Failure> {
        let mut out = Vec::new();
        if self.reactor_destroyed {
            out.push(Failure::ReactorMeltdown);
        }
        if self.hull_integrity <= 0.0 {
            out.push(Failure::HullBreach);
        }
        if self.oxygen <= 0.0 {
            out.push(Failure::Asphyxiation);
        }
        if self.battery_level <= 0.0 && !self.backup_power_active {
            out.push(Failure::PowerLoss);
        }
        out
    }

    /// Enforce the range invariants every step ends with.
    pub(crate) fn clamp_ranges(&mut self, cfg: &SimConfig) {
        self.battery_level = self.battery_level.clamp(0.0, 100.0);
        self.oxygen = self.oxygen.clamp(0.0, 100.0);
        self.hull_integrity = self.hull_integrity.clamp(0.0, 100.0);
        self.ballast_level = self.ballast_level.clamp(0.0, 100.0);
        self.reactor_power = self.reactor_power.clamp(0.0, 100.0);
        self.nitrogen_level = self.nitrogen_level.clamp(0.0, 100.0);
        self.pressure_hull_stress = self.pressure_hull_stress.clamp(0.0, 100.0);
        self.depth = self.depth.clamp(0.0, cfg.max_depth);
        self.trim_angle = self.trim_angle.clamp(-30.0, 30.0);
        self.target_depth = self.target_depth.clamp(0.0, cfg.max_depth);
    }
}
