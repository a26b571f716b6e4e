use chrono::NaiveTime;

use crate::{config::FareSchedule, entities::VehicleClass};

pub fn peak_multiplier(schedule: &FareSchedule, time: NaiveTime) -> f64 {
    let in_window = if schedule.peak_start <= schedule.peak_end {
        time >= schedule.peak_start && time < schedule.peak_end
    } else {
        // window wraps past midnight
        time >= schedule.peak_start || time < schedule.peak_end
    };

    if in_window {
        schedule.peak_multiplier
    } else {
        1.0
    }
}

/// `base + km * rate * multiplier`, rounded to two decimals.
pub fn calculate_fare(
    schedule: &FareSchedule,
    distance_km: f64,
    vehicle_class: VehicleClass,
    time: NaiveTime,
) -> f64 {
    let fare = schedule.base_fare
        + distance_km * schedule.per_km_rate(vehicle_class) * peak_multiplier(schedule, time);

    round_currency(fare)
}

/// Fare inputs carry at most six decimal places (metres, two-decimal rates,
/// one-decimal multipliers), so the amount is first snapped to that grid.
/// Rounding the raw binary value would send halves such as 64.225 down.
pub fn round_currency(amount: f64) -> f64 {
    let micros = (amount * 1e6).round();
    (micros / 1e4).round() / 100.0
}

/// Estimated travel time in the same style as the routing provider's text.
pub fn estimate_duration(schedule: &FareSchedule, distance_km: f64) -> String {
    let minutes = if schedule.average_speed_kmh > 0.0 {
        (distance_km / schedule.average_speed_kmh * 60.0).ceil() as u64
    } else {
        0
    };

    format_duration(minutes.max(1))
}

pub fn format_duration(minutes: u64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    let mins_text = match mins {
        1 => "1 min".to_string(),
        m => format!("{} mins", m),
    };

    match hours {
        0 => mins_text,
        _ => {
            let hours_text = match hours {
                1 => "1 hour".to_string(),
                h => format!("{} hours", h),
            };

            if mins == 0 {
                hours_text
            } else {
                format!("{} {}", hours_text, mins_text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn off_peak_fares() {
        let schedule = FareSchedule::default();

        assert_eq!(calculate_fare(&schedule, 10.0, VehicleClass::SmallTruck, at(10, 0)), 200.0);
        assert_eq!(calculate_fare(&schedule, 10.0, VehicleClass::LargeTruck, at(10, 0)), 300.0);
        assert_eq!(calculate_fare(&schedule, 0.0, VehicleClass::LargeTruck, at(10, 0)), 50.0);
    }

    #[test]
    fn peak_window_is_half_open() {
        let schedule = FareSchedule::default();

        assert_eq!(peak_multiplier(&schedule, at(16, 59)), 1.0);
        assert_eq!(peak_multiplier(&schedule, at(17, 0)), 1.2);
        assert_eq!(peak_multiplier(&schedule, at(19, 59)), 1.2);
        assert_eq!(peak_multiplier(&schedule, at(20, 0)), 1.0);
    }

    #[test]
    fn wrapping_window() {
        let schedule = FareSchedule {
            peak_start: at(22, 0),
            peak_end: at(2, 0),
            ..FareSchedule::default()
        };

        assert_eq!(peak_multiplier(&schedule, at(23, 30)), 1.2);
        assert_eq!(peak_multiplier(&schedule, at(1, 0)), 1.2);
        assert_eq!(peak_multiplier(&schedule, at(12, 0)), 1.0);
    }

    #[test]
    fn rounds_half_up_to_cents() {
        assert_eq!(round_currency(12.125), 12.13);
        assert_eq!(round_currency(12.344), 12.34);
        // 50 + 3.3333 * 15 = 99.9995
        let schedule = FareSchedule::default();
        assert_eq!(calculate_fare(&schedule, 3.3333, VehicleClass::SmallTruck, at(9, 0)), 100.0);
    }

    #[test]
    fn decimal_halves_round_up_despite_binary_representation() {
        assert_eq!(round_currency(1.005), 1.01);
        assert_eq!(round_currency(2.675), 2.68);

        // 50 + 0.569 * 25 = 64.225, stored as 64.22499999999999
        let schedule = FareSchedule::default();
        assert_eq!(calculate_fare(&schedule, 0.569, VehicleClass::LargeTruck, at(9, 0)), 64.23);
    }

    #[test]
    fn duration_text() {
        assert_eq!(format_duration(1), "1 min");
        assert_eq!(format_duration(25), "25 mins");
        assert_eq!(format_duration(60), "1 hour");
        assert_eq!(format_duration(65), "1 hour 5 mins");
        assert_eq!(format_duration(121), "2 hours 1 min");
    }

    #[test]
    fn straight_line_duration_uses_average_speed() {
        let schedule = FareSchedule::default();
        assert_eq!(estimate_duration(&schedule, 15.0), "30 mins");
        assert_eq!(estimate_duration(&schedule, 0.0), "1 min");
    }

    proptest! {
        #[test]
        fn fare_is_monotonic_in_distance(
            a in 0.0f64..500.0,
            b in 0.0f64..500.0,
            hour in 0u32..24,
            large in any::<bool>(),
        ) {
            let schedule = FareSchedule::default();
            let class = if large { VehicleClass::LargeTruck } else { VehicleClass::SmallTruck };
            let (near, far) = if a <= b { (a, b) } else { (b, a) };

            prop_assert!(
                calculate_fare(&schedule, near, class, at(hour, 0))
                    <= calculate_fare(&schedule, far, class, at(hour, 0))
            );
        }

        #[test]
        fn peak_scales_only_the_distance_component(
            distance in 0.0f64..500.0,
            large in any::<bool>(),
        ) {
            let schedule = FareSchedule::default();
            let class = if large { VehicleClass::LargeTruck } else { VehicleClass::SmallTruck };

            let off_peak = calculate_fare(&schedule, distance, class, at(11, 0));
            let peak = calculate_fare(&schedule, distance, class, at(18, 0));
            let expected = 1.2 * (off_peak - schedule.base_fare) + schedule.base_fare;

            prop_assert!((peak - expected).abs() <= 0.02, "{} vs {}", peak, expected);
        }
    }
}
