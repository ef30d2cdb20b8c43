//! Pace and finish-time conversions.
//!
//! All functions are pure. Results are whole seconds, truncated toward zero,
//! never rounded: a 4:59.9 finish shows as 4:59.
//!
//! A distance that is zero, negative or not finite is treated as "no
//! distance" and yields a zero result in both directions, so no division by a
//! non-positive distance can happen.
//!
//! ```rust
//! use pacer::engine::{pace_from_time, time_from_pace};
//! use pacer::{Pace, TotalTime};
//!
//! assert_eq!(time_from_pace(Pace::new(4, 30), 10.0), TotalTime::new(0, 45, 0));
//! assert_eq!(pace_from_time(TotalTime::new(0, 25, 0), 5.0), Pace::new(5, 0));
//! ```

use crate::types::{Pace, TotalTime, Unit};

/// Kilometers to miles. Not the exact reciprocal of [`MILES_TO_KM`].
pub const KM_TO_MILES: f64 = 0.621371;

/// Miles to kilometers. Not the exact reciprocal of [`KM_TO_MILES`].
pub const MILES_TO_KM: f64 = 1.60934;

fn usable_distance(distance: f64) -> Option<f64> {
    (distance.is_finite() && distance > 0.0).then_some(distance)
}

/// Finish time for `distance` units run at `pace` per unit.
pub fn time_from_pace(pace: Pace, distance: f64) -> TotalTime {
    let Some(distance) = usable_distance(distance) else {
        return TotalTime::ZERO;
    };

    let total = pace.total_seconds() * distance;
    TotalTime {
        hours: (total / 3600.0).floor() as u32,
        minutes: ((total % 3600.0) / 60.0).floor() as u32,
        seconds: (total % 60.0).floor() as u32,
    }
}

/// Pace per unit needed to cover `distance` units in `time`.
pub fn pace_from_time(time: TotalTime, distance: f64) -> Pace {
    let Some(distance) = usable_distance(distance) else {
        return Pace::ZERO;
    };

    let per_unit = time.total_seconds() / distance;
    Pace { minutes: (per_unit / 60.0).floor() as u32, seconds: (per_unit % 60.0).floor() as u32 }
}

/// Rescale a distance between unit systems.
pub fn convert_distance(value: f64, from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Kilometers, Unit::Miles) => value * KM_TO_MILES,
        (Unit::Miles, Unit::Kilometers) => value * MILES_TO_KM,
        _ => value,
    }
}
