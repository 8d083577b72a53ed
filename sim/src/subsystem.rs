use crate::{SimConfig, SubmarineState};

/// Every switchable piece of equipment on the boat.
///
/// Each entry declares its battery floor and nominal draw, so power gating
/// and consumption are single generic passes over [`Subsystem::ALL`] instead
/// of per-flag branches. Entries with no threshold are manual or pneumatic
/// and keep working with the grid dead.
///
/// The reactor itself, the main O2 system and the autopilot are not listed:
/// they are composite systems with their own interlocks, gated by the
/// cascade rules in `systems::gating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsystem {
    Lights,
    Sonar,
    CoolantPumps,
    SteamGenerator,
    PowerTurbine,
    Containment,
    EmergencyCooling,
    CoolingSystem,
    OxygenScrubbers,
    OxygenGenerator,
    AirCirculation,
    HullMonitoring,
    NavigationComputer,
    Gyroscope,
    DepthControl,
    BallastControl,
    Communications,
    BackupPower,
    EmergencyLighting,
    EmergencyAirSupply,
    ManualBilgePumps,
    ManualBallastBlow,
    DistressBeacon,
    FireSuppression,
}

impl Subsystem {
    pub const ALL: [Subsystem; 24] = [
        Subsystem::Lights,
        Subsystem::Sonar,
        Subsystem::CoolantPumps,
        Subsystem::SteamGenerator,
        Subsystem::PowerTurbine,
        Subsystem::Containment,
        Subsystem::EmergencyCooling,
        Subsystem::CoolingSystem,
        Subsystem::OxygenScrubbers,
        Subsystem::OxygenGenerator,
        Subsystem::AirCirculation,
        Subsystem::HullMonitoring,
        Subsystem::NavigationComputer,
        Subsystem::Gyroscope,
        Subsystem::DepthControl,
        Subsystem::BallastControl,
        Subsystem::Communications,
        Subsystem::BackupPower,
        Subsystem::EmergencyLighting,
        Subsystem::EmergencyAirSupply,
        Subsystem::ManualBilgePumps,
        Subsystem::ManualBallastBlow,
        Subsystem::DistressBeacon,
        Subsystem::FireSuppression,
    ];

    /// Minimum battery level (unless backup power is up) for this system
    /// to run or be switched. `None` marks manual/pneumatic equipment.
    pub fn power_threshold(self, cfg: &SimConfig) -> Option<f32> {
        use Subsystem::*;
        match self {
            Lights | Sonar | CoolantPumps | SteamGenerator | PowerTurbine | Containment
            | OxygenScrubbers | OxygenGenerator | AirCirculation | HullMonitoring
            | Communications => Some(cfg.standard_power_threshold),
            NavigationComputer | Gyroscope | DepthControl | EmergencyCooling | CoolingSystem => {
                Some(cfg.nav_power_threshold)
            }
            // Ballast valves only need the bus to be alive at all.
            BallastControl => Some(0.0),
            BackupPower | EmergencyLighting | EmergencyAirSupply | ManualBilgePumps
            | ManualBallastBlow | DistressBeacon | FireSuppression => None,
        }
    }

    /// Nominal electrical draw while running, kW.
    pub fn draw_kw(self, cfg: &SimConfig) -> f32 {
        use Subsystem::*;
        match self {
            Lights => 0.8,
            Sonar => 1.2,
            CoolantPumps => 0.8,
            SteamGenerator => 0.3,
            PowerTurbine => 0.2,
            Containment => 0.4,
            EmergencyCooling => 1.5,
            CoolingSystem => 2.0,
            OxygenScrubbers => 0.5,
            OxygenGenerator => 1.2,
            AirCirculation => 0.4,
            HullMonitoring => 0.3,
            NavigationComputer => 0.6,
            Gyroscope => 0.3,
            DepthControl => 0.7,
            BallastControl => 0.5,
            Communications => 0.4,
            _ => {
                debug_assert!(self.power_threshold(cfg).is_none());
                0.0
            }
        }
    }

    pub fn is_active(self, sub: &SubmarineState) -> bool {
        *Self::flag(self, sub)
    }

    pub(crate) fn set_active(self, sub: &mut SubmarineState, on: bool) {
        *Self::flag_mut(self, sub) = on;
    }

    pub(crate) fn toggle(self, sub: &mut SubmarineState) -> bool {
        let flag = Self::flag_mut(self, sub);
        *flag = !*flag;
        *flag
    }

    fn flag(self, sub: &SubmarineState) -> &bool {
        use Subsystem::*;
        match self {
            Lights => &sub.lights_active,
            Sonar => &sub.sonar_active,
            CoolantPumps => &sub.coolant_pumps_active,
            SteamGenerator => &sub.steam_generator_active,
            PowerTurbine => &sub.power_turbine_active,
            Containment => &sub.containment_active,
            EmergencyCooling => &sub.emergency_cooling_active,
            CoolingSystem => &sub.cooling_active,
            OxygenScrubbers => &sub.oxygen_scrubbers_active,
            OxygenGenerator => &sub.oxygen_generator_active,
            AirCirculation => &sub.air_circulation_active,
            HullMonitoring => &sub.hull_monitoring_active,
            NavigationComputer => &sub.navigation_computer_active,
            Gyroscope => &sub.gyroscope_active,
            DepthControl => &sub.depth_control_active,
            BallastControl => &sub.ballast_control_active,
            Communications => &sub.communications_active,
            BackupPower => &sub.backup_power_active,
            EmergencyLighting => &sub.emergency_lighting_active,
            EmergencyAirSupply => &sub.emergency_air_supply_active,
            ManualBilgePumps => &sub.manual_bilge_pumps_active,
            ManualBallastBlow => &sub.manual_ballast_blow_active,
            DistressBeacon => &sub.distress_beacon_active,
            FireSuppression => &sub.fire_suppression_active,
        }
    }

    fn flag_mut(self, sub: &mut SubmarineState) -> &mut bool {
        use Subsystem::*;
        match self {
            Lights => &mut sub.lights_active,
            Sonar => &mut sub.sonar_active,
            CoolantPumps => &mut sub.coolant_pumps_active,
            SteamGenerator => &mut sub.steam_generator_active,
            PowerTurbine => &mut sub.power_turbine_active,
            Containment => &mut sub.containment_active,
            EmergencyCooling => &mut sub.emergency_cooling_active,
            CoolingSystem => &mut sub.cooling_active,
            OxygenScrubbers => &mut sub.oxygen_scrubbers_active,
            OxygenGenerator => &mut sub.oxygen_generator_active,
            AirCirculation => &mut sub.air_circulation_active,
            HullMonitoring => &mut sub.hull_monitoring_active,
            NavigationComputer => &mut sub.navigation_computer_active,
            Gyroscope => &mut sub.gyroscope_active,
            DepthControl => &mut sub.depth_control_active,
            BallastControl => &mut sub.ballast_control_active,
            Communications => &mut sub.communications_active,
            BackupPower => &mut sub.backup_power_active,
            EmergencyLighting => &mut sub.emergency_lighting_active,
            EmergencyAirSupply => &mut sub.emergency_air_supply_active,
            ManualBilgePumps => &mut sub.manual_bilge_pumps_active,
            ManualBallastBlow => &mut sub.manual_ballast_blow_active,
            DistressBeacon => &mut sub.distress_beacon_active,
            FireSuppression => &mut sub.fire_suppression_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_equipment_draws_nothing() {
        let cfg = SimConfig::default();
        for sys in Subsystem::ALL {
            if sys.power_threshold(&cfg).is_none() {
                assert_eq!(sys.draw_kw(&cfg), 0.0, "{sys:?} is manual but draws power");
            }
        }
    }

    #[test]
    fn flag_accessors_round_trip() {
        let cfg = SimConfig::default();
        let mut sub = SubmarineState::new(&cfg);
        for sys in Subsystem::ALL {
            assert!(!sys.is_active(&sub), "{sys:?} should start off");
            sys.set_active(&mut sub, true);
            assert!(sys.is_active(&sub), "{sys:?} did not turn on");
        }
        assert!(sub.lights_active && sub.fire_suppression_active);
    }
}
