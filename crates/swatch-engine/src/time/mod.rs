//! Time subsystem.
//!
//! Wall-clock alarm scheduling against a host-provided [`AlarmService`]. The
//! scheduling strategy is picked from the host's alarm
//! [`CapabilityLevel`](crate::platform::CapabilityLevel).

mod alarm;

pub use alarm::{
    parse_local_time, schedule, schedule_in, AlarmError, AlarmService, AlarmStrategy,
    PendingAlarm, TIME_FORMAT,
};
