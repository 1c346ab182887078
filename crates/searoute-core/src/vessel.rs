//! Vessel safety model: type/condition lookup tables and the derived
//! navigability limits, speed derating, and fuel estimates.

use crate::models::{Vessel, VesselCondition, VesselType};

fn type_factor(vessel_type: VesselType) -> f64 {
    match vessel_type {
        VesselType::Cargo => 0.8,
        VesselType::Tanker => 0.7,
        VesselType::Passenger => 0.9,
        VesselType::Fishing => 0.6,
    }
}

fn condition_factor(condition: VesselCondition) -> f64 {
    match condition {
        VesselCondition::Excellent => 1.0,
        VesselCondition::Good => 0.9,
        VesselCondition::Fair => 0.7,
        VesselCondition::Bad => 0.4,
        VesselCondition::Critical => 0.2,
    }
}

fn base_max_wind_kmh(vessel_type: VesselType) -> f64 {
    match vessel_type {
        VesselType::Cargo => 80.0,
        VesselType::Tanker => 70.0,
        VesselType::Passenger => 60.0,
        VesselType::Fishing => 50.0,
    }
}

fn base_max_wave_m(vessel_type: VesselType) -> f64 {
    match vessel_type {
        VesselType::Cargo => 7.0,
        VesselType::Tanker => 6.0,
        VesselType::Passenger => 5.0,
        VesselType::Fishing => 4.0,
    }
}

fn base_fuel_consumption(vessel_type: VesselType) -> f64 {
    match vessel_type {
        VesselType::Cargo => 100.0,
        VesselType::Tanker => 120.0,
        VesselType::Passenger => 90.0,
        VesselType::Fishing => 60.0,
    }
}

impl Vessel {
    /// Combined safety factor in [0, 1]. Derived, never stored.
    pub fn safety_factor(&self) -> f64 {
        (type_factor(self.vessel_type) * condition_factor(self.condition)).clamp(0.0, 1.0)
    }

    /// Maximum wind speed (km/h) this vessel can safely navigate.
    pub fn max_safe_wind_speed(&self) -> f64 {
        base_max_wind_kmh(self.vessel_type) * self.safety_factor()
    }

    /// Maximum wave height (m) this vessel can safely navigate.
    pub fn max_safe_wave_height(&self) -> f64 {
        base_max_wave_m(self.vessel_type) * self.safety_factor()
    }

    pub fn can_navigate_safely(&self, wind_speed_kmh: f64, wave_height_m: f64) -> bool {
        wind_speed_kmh <= self.max_safe_wind_speed() && wave_height_m <= self.max_safe_wave_height()
    }

    /// Speed after weather derating, floored at 30% of base.
    pub fn adjusted_speed(&self, base_speed: f64, wind_speed_kmh: f64, wave_height_m: f64) -> f64 {
        let mut factor = 1.0;
        if wind_speed_kmh > 40.0 {
            factor -= 0.1 * ((wind_speed_kmh - 40.0) / 10.0);
        }
        if wave_height_m > 2.0 {
            factor -= 0.15 * (wave_height_m - 2.0);
        }
        match self.vessel_type {
            // Passenger ships slow further in rough conditions for comfort.
            VesselType::Passenger => factor -= 0.05,
            // Fishing vessels take waves harder than the generic term.
            VesselType::Fishing => factor -= 0.05 * wave_height_m,
            VesselType::Cargo | VesselType::Tanker => {}
        }
        base_speed * factor.max(0.3)
    }

    /// Fuel consumption in arbitrary units, quadratic in speed.
    pub fn fuel_consumption(&self, speed: f64, wind_speed_kmh: f64, wave_height_m: f64) -> f64 {
        let speed_factor = (speed / 20.0).powi(2);
        let wind_factor = 1.0 + wind_speed_kmh / 100.0;
        let wave_factor = 1.0 + wave_height_m / 5.0;
        base_fuel_consumption(self.vessel_type) * speed_factor * wind_factor * wave_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [VesselType; 4] = [
        VesselType::Cargo,
        VesselType::Tanker,
        VesselType::Passenger,
        VesselType::Fishing,
    ];
    const ALL_CONDITIONS: [VesselCondition; 5] = [
        VesselCondition::Excellent,
        VesselCondition::Good,
        VesselCondition::Fair,
        VesselCondition::Bad,
        VesselCondition::Critical,
    ];

    #[test]
    fn safety_factor_in_unit_interval_for_all_combinations() {
        for vessel_type in ALL_TYPES {
            for condition in ALL_CONDITIONS {
                let safety = Vessel::new(vessel_type, condition).safety_factor();
                assert!((0.0..=1.0).contains(&safety), "{vessel_type:?}/{condition:?}");
            }
        }
    }

    #[test]
    fn safety_factor_extremes() {
        // Fishing in critical condition is the floor of the factor
        // table; passenger in excellent condition is the ceiling.
        let floor = Vessel::new(VesselType::Fishing, VesselCondition::Critical).safety_factor();
        assert!((floor - 0.12).abs() < 1e-9);
        let tanker = Vessel::new(VesselType::Tanker, VesselCondition::Critical).safety_factor();
        assert!((tanker - 0.14).abs() < 1e-9);
        let ceiling = Vessel::new(VesselType::Passenger, VesselCondition::Excellent).safety_factor();
        assert!((ceiling - 0.9).abs() < 1e-9);

        for vessel_type in ALL_TYPES {
            for condition in ALL_CONDITIONS {
                let safety = Vessel::new(vessel_type, condition).safety_factor();
                assert!(safety >= floor - 1e-9);
                assert!(safety <= ceiling + 1e-9);
            }
        }
    }

    #[test]
    fn can_navigate_safely_is_monotonic_in_weather() {
        let vessel = Vessel::new(VesselType::Cargo, VesselCondition::Good);
        let winds = [0.0, 20.0, 40.0, 57.6, 57.7, 80.0, 120.0];
        let waves = [0.0, 1.0, 3.0, 5.0, 5.1, 8.0];
        for (i, &wind) in winds.iter().enumerate() {
            for (j, &wave) in waves.iter().enumerate() {
                if !vessel.can_navigate_safely(wind, wave) {
                    // Worsening either axis must never flip back to safe.
                    for &worse_wind in &winds[i..] {
                        for &worse_wave in &waves[j..] {
                            assert!(!vessel.can_navigate_safely(worse_wind, worse_wave));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn cargo_in_good_condition_limits() {
        let vessel = Vessel::new(VesselType::Cargo, VesselCondition::Good);
        assert!((vessel.max_safe_wind_speed() - 80.0 * 0.72).abs() < 1e-9);
        assert!((vessel.max_safe_wave_height() - 7.0 * 0.72).abs() < 1e-9);
    }

    #[test]
    fn adjusted_speed_floors_at_thirty_percent() {
        let vessel = Vessel::new(VesselType::Fishing, VesselCondition::Fair);
        let speed = vessel.adjusted_speed(10.0, 120.0, 9.0);
        assert!((speed - 3.0).abs() < 1e-9);
    }

    #[test]
    fn adjusted_speed_unaffected_in_calm_weather() {
        let vessel = Vessel::new(VesselType::Cargo, VesselCondition::Excellent);
        assert!((vessel.adjusted_speed(18.0, 30.0, 1.5) - 18.0).abs() < 1e-9);
    }

    #[test]
    fn fuel_consumption_grows_with_speed_squared() {
        let vessel = Vessel::new(VesselType::Tanker, VesselCondition::Good);
        let slow = vessel.fuel_consumption(10.0, 0.0, 0.0);
        let fast = vessel.fuel_consumption(20.0, 0.0, 0.0);
        assert!((fast / slow - 4.0).abs() < 1e-9);
    }

    #[test]
    fn fuel_consumption_baseline_at_reference_speed() {
        let vessel = Vessel::new(VesselType::Cargo, VesselCondition::Good);
        assert!((vessel.fuel_consumption(20.0, 0.0, 0.0) - 100.0).abs() < 1e-9);
    }
}
