use serde::{Deserialize, Serialize};

/// Tuning constants for the boat's systems model.
///
/// Every field has a default, so a TOML override file only needs to name the
/// values it changes. Rates are per second of simulated time; temperatures
/// are °C; percentage-like quantities live in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // Ballast
    /// Tank fill speed under powered ballast control (%/s).
    pub ballast_fill_rate: f32,
    /// Tank vent speed under powered ballast control (%/s).
    pub ballast_empty_rate: f32,
    /// Multiplier on the vent speed during a manual (pneumatic) blow.
    pub emergency_blow_factor: f32,

    // Reactor thermals
    /// Steady operating temperature the power curve is scaled against.
    pub reactor_nominal_temp: f32,
    /// Above this, generation efficiency starts to degrade.
    pub reactor_warning_temp: f32,
    /// Above this, generation efficiency is severely degraded.
    pub reactor_critical_temp: f32,
    /// Automatic scram threshold (shutdown + rod insertion).
    pub reactor_scram_temp: f32,
    /// Core destruction threshold. Crossing it is terminal.
    pub reactor_meltdown_temp: f32,
    /// Above this, unbacked electrical systems black out and batteries cook.
    pub reactor_overheat_temp: f32,
    /// Cold-start heating rate below half of nominal temperature (°C/s).
    pub reactor_warmup_rate: f32,
    /// Base heating rate during nominal operation (°C/s).
    pub reactor_base_heat_rate: f32,
    /// Temperature-proportional heating term (1/s). This is what makes an
    /// uncooled core run away instead of settling.
    pub reactor_runaway_factor: f32,
    /// Decay-heat rate after shutdown, scaled by how hot the core got (°C/s).
    pub reactor_residual_heat_rate: f32,
    /// Cooling from the primary coolant pumps (°C/s).
    pub reactor_pump_cool_rate: f32,
    /// Cooling from the emergency cooling loop (°C/s).
    pub reactor_emergency_cool_rate: f32,
    /// If the coolant pumps drop out above this core temperature while the
    /// reactor is running, it scrams.
    pub coolant_scram_temp: f32,
    /// If containment drops out above this core temperature while the
    /// reactor is running, it scrams.
    pub containment_scram_temp: f32,
    /// One-time hull integrity loss on meltdown.
    pub meltdown_hull_damage: f32,

    // Power
    /// Battery drain per kW of consumption (%/s per kW).
    pub battery_drain_rate: f32,
    /// Battery charge rate at 100% reactor output (%/s).
    pub battery_charge_rate: f32,
    /// Propulsion draw at full thrust (kW).
    pub propulsion_power_drain: f32,
    /// Battery floor for most electrical subsystems (%).
    pub standard_power_threshold: f32,
    /// Battery floor for navigation and emergency cooling (%).
    pub nav_power_threshold: f32,

    // Environment
    pub max_depth: f32,
    /// Depth of the thermocline; water cools quickly down to here.
    pub thermal_layer_depth: f32,
    pub surface_water_temp: f32,
    /// Depth past which nitrogen narcosis accumulates.
    pub nitrogen_narcosis_depth: f32,

    // Sonar
    pub sonar_ping_interval: f32,
    pub sonar_range: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ballast_fill_rate: 2.0,
            ballast_empty_rate: 3.0,
            emergency_blow_factor: 4.0,

            reactor_nominal_temp: 300.0,
            reactor_warning_temp: 350.0,
            reactor_critical_temp: 450.0,
            reactor_scram_temp: 500.0,
            reactor_meltdown_temp: 900.0,
            reactor_overheat_temp: 600.0,
            reactor_warmup_rate: 12.0,
            reactor_base_heat_rate: 2.0,
            reactor_runaway_factor: 0.02,
            reactor_residual_heat_rate: 0.5,
            reactor_pump_cool_rate: 4.0,
            reactor_emergency_cool_rate: 10.0,
            coolant_scram_temp: 100.0,
            containment_scram_temp: 200.0,
            meltdown_hull_damage: 50.0,

            battery_drain_rate: 0.3,
            battery_charge_rate: 0.8,
            propulsion_power_drain: 1.5,
            standard_power_threshold: 5.0,
            nav_power_threshold: 10.0,

            max_depth: 25_000.0,
            thermal_layer_depth: 300.0,
            surface_water_temp: 20.0,
            nitrogen_narcosis_depth: 1000.0,

            sonar_ping_interval: 2.0,
            sonar_range: 2000.0,
        }
    }
}
