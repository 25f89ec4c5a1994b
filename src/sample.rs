//! A fixed set of flights for trying the filters out.

use chrono::Duration;

use crate::error::Result;
use crate::model::{Flight, Timestamp};

/// Six flights built around `now + 3 days`.
///
/// Relative to that instant `t` they are:
/// 1. a normal two hour flight,
/// 2. a normal multi segment flight,
/// 3. a flight that departed six days before `t`,
/// 4. a flight that arrives before it departs,
/// 5. a flight with three hours on the ground,
/// 6. a flight with 1h and 2h on the ground.
pub fn flights(now: Timestamp) -> Result<Vec<Flight>> {
    let t = now + Duration::days(3);
    let h = Duration::hours;

    Ok(vec![
        Flight::from_dates(&[t, t + h(2)])?,
        Flight::from_dates(&[t, t + h(2), t + h(3), t + h(5)])?,
        Flight::from_dates(&[t - Duration::days(6), t])?,
        Flight::from_dates(&[t, t - h(6)])?,
        Flight::from_dates(&[t, t + h(2), t + h(5), t + h(6)])?,
        Flight::from_dates(&[t, t + h(2), t + h(3), t + h(4), t + h(6), t + h(7)])?,
    ])
}
