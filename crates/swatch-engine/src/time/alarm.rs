use chrono::{Local, NaiveDateTime, TimeZone};
use thiserror::Error;

use crate::platform::CapabilityLevel;

/// Accepted wall-clock format: `yyyy-MM-dd HH:mm`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Error)]
pub enum AlarmError {
    #[error("malformed alarm time {input:?} (expected yyyy-MM-dd HH:mm): {source}")]
    MalformedTime {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("alarm time {0:?} does not exist in the local time zone")]
    NonexistentLocalTime(String),
}

/// What fires when the alarm goes off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAlarm {
    /// Caller-chosen id; rescheduling the same id replaces the earlier alarm.
    pub request_id: i32,
    /// Host-defined target (service or component name).
    pub target: String,
}

/// Host scheduling backend. All variants are wall-clock wakeup alarms.
pub trait AlarmService {
    /// Exact alarm that fires even while the device idles.
    fn set_exact_and_allow_while_idle(&mut self, trigger_at_ms: i64, alarm: &PendingAlarm);

    /// Exact alarm.
    fn set_exact(&mut self, trigger_at_ms: i64, alarm: &PendingAlarm);

    /// Repeating alarm starting at `trigger_at_ms`.
    fn set_repeating(&mut self, trigger_at_ms: i64, interval_ms: i64, alarm: &PendingAlarm);
}

/// The backend entry point a successful [`schedule`] call used.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlarmStrategy {
    ExactAllowWhileIdle { trigger_at_ms: i64 },
    Exact { trigger_at_ms: i64 },
    Repeating { trigger_at_ms: i64, interval_ms: i64 },
}

/// Parses `when` as a wall-clock time in `tz` and returns epoch milliseconds.
///
/// Ambiguous local times (DST fall-back) resolve to the earlier instant.
pub fn parse_local_time<Tz: TimeZone>(when: &str, tz: &Tz) -> Result<i64, AlarmError> {
    let naive = NaiveDateTime::parse_from_str(when.trim(), TIME_FORMAT).map_err(|source| {
        AlarmError::MalformedTime { input: when.to_owned(), source }
    })?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| AlarmError::NonexistentLocalTime(when.to_owned()))
}

/// Schedules an alarm at local wall-clock time `when` (`yyyy-MM-dd HH:mm`).
///
/// `repeat_interval_ms` is only consulted on `Low` capability hosts, which
/// lack exact alarms and fall back to a repeating one.
///
/// A malformed `when` schedules nothing; the error is logged and returned so
/// the host can decide how loud to be about it.
pub fn schedule<S: AlarmService + ?Sized>(
    service: &mut S,
    capability: CapabilityLevel,
    request_id: i32,
    when: &str,
    target: impl Into<String>,
    repeat_interval_ms: i64,
) -> Result<AlarmStrategy, AlarmError> {
    schedule_in(&Local, service, capability, request_id, when, target, repeat_interval_ms)
}

/// [`schedule`] with an explicit time zone.
pub fn schedule_in<Tz: TimeZone, S: AlarmService + ?Sized>(
    tz: &Tz,
    service: &mut S,
    capability: CapabilityLevel,
    request_id: i32,
    when: &str,
    target: impl Into<String>,
    repeat_interval_ms: i64,
) -> Result<AlarmStrategy, AlarmError> {
    let trigger_at_ms = match parse_local_time(when, tz) {
        Ok(ms) => ms,
        Err(err) => {
            log::warn!("alarm {request_id} not scheduled: {err}");
            return Err(err);
        }
    };

    let alarm = PendingAlarm { request_id, target: target.into() };
    let strategy = match capability {
        CapabilityLevel::High => {
            service.set_exact_and_allow_while_idle(trigger_at_ms, &alarm);
            AlarmStrategy::ExactAllowWhileIdle { trigger_at_ms }
        }
        CapabilityLevel::Mid => {
            service.set_exact(trigger_at_ms, &alarm);
            AlarmStrategy::Exact { trigger_at_ms }
        }
        CapabilityLevel::Low => {
            service.set_repeating(trigger_at_ms, repeat_interval_ms, &alarm);
            AlarmStrategy::Repeating { trigger_at_ms, interval_ms: repeat_interval_ms }
        }
    };

    log::debug!("alarm {request_id} scheduled for {when} via {strategy:?}");
    Ok(strategy)
}
