//! Battery state through the `battery` crate.

use battery::units::ratio::percent;
use battery::units::time::second;
use battery::State;
use log::debug;

use crate::core::telemetry::BatteryReading;
use crate::error::Result;

/// Read the first battery the OS reports, `None` when there is none
pub fn read_battery() -> Result<Option<BatteryReading>> {
    let manager = battery::Manager::new()?;
    let mut batteries = manager.batteries()?;

    let battery = match batteries.next() {
        Some(battery) => battery?,
        None => {
            debug!("No battery reported by the OS");
            return Ok(None);
        }
    };

    let state = battery.state();
    debug!("Battery state: {:?}", state);

    Ok(Some(BatteryReading {
        percent: battery.state_of_charge().get::<percent>(),
        plugged_in: is_plugged_in(state),
        seconds_remaining: battery
            .time_to_empty()
            .map(|t| t.get::<second>().max(0.0) as u64),
    }))
}

/// Anything but draining counts as on external power; `Unknown` is what
/// Linux reports for "not charging" at a charge threshold.
pub fn is_plugged_in(state: State) -> bool {
    !matches!(state, State::Discharging | State::Empty)
}
