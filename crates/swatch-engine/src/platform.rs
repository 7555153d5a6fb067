//! Host platform capability levels.
//!
//! Widgets and collaborators never branch on raw platform versions. The host
//! reports a [`PlatformVersion`] once and each consumer maps it to the
//! ordered [`CapabilityLevel`] that gates its strategy.

use core::fmt;

/// Ordered classification of what the host can do: `Low < Mid < High`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub enum CapabilityLevel {
    #[default]
    Low,
    Mid,
    High,
}

impl fmt::Display for CapabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CapabilityLevel::Low => "low",
            CapabilityLevel::Mid => "mid",
            CapabilityLevel::High => "high",
        })
    }
}

/// Host platform API level as reported by the embedding surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PlatformVersion(pub u32);

impl PlatformVersion {
    /// Level at which layered backgrounds with ripple feedback are available.
    pub const RIPPLE: PlatformVersion = PlatformVersion(21);
    /// Level at which the state-list background entry point is available.
    pub const STATE_LIST: PlatformVersion = PlatformVersion(16);
    /// Level at which exact wakeups are allowed while the device idles.
    pub const EXACT_WHILE_IDLE: PlatformVersion = PlatformVersion(23);
    /// Level at which exact (non-batched) alarms are available.
    pub const EXACT_ALARM: PlatformVersion = PlatformVersion(19);

    /// Capability for composing widget backgrounds.
    pub fn background_capability(self) -> CapabilityLevel {
        Self::tier(self, Self::RIPPLE, Self::STATE_LIST)
    }

    /// Capability for scheduling alarms.
    pub fn alarm_capability(self) -> CapabilityLevel {
        Self::tier(self, Self::EXACT_WHILE_IDLE, Self::EXACT_ALARM)
    }

    fn tier(self, high: PlatformVersion, mid: PlatformVersion) -> CapabilityLevel {
        if self >= high {
            CapabilityLevel::High
        } else if self >= mid {
            CapabilityLevel::Mid
        } else {
            CapabilityLevel::Low
        }
    }
}
