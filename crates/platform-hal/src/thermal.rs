//! Fan and thermal management
//!
//! Only present on platforms built with a thermal manager. Several fan
//! getters return raw values instead of a status, as the C contract does;
//! an invalid fan index yields `0`, `false` or [`RotorLock::NotApplicable`].

use crate::status::{HalError, HalResult};

/// Number of fans a platform may expose; valid indices are `0..MAX_FANS`.
pub const MAX_FANS: u32 = 2;

/// Number of radios; valid radio indices are `0..MAX_RADIOS`.
pub const MAX_RADIOS: u32 = 3;

/// Highest fan RPM a healthy fan may report.
pub const FAN_RPM_MAX: u32 = 12_000;

/// Plausible temperature range for on-board sensors (°C).
pub const TEMPERATURE_RANGE: core::ops::RangeInclusive<i32> = -40..=125;

/// Fan speed setting (C `FAN_SPEED`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum FanSpeed {
    /// Stopped
    #[default]
    Off = 0,
    /// Slow
    Slow = 1,
    /// Medium
    Medium = 2,
    /// Fast
    Fast = 3,
    /// Maximum
    Max = 4,
}

impl FanSpeed {
    /// All settings in ascending order.
    pub const ALL: [Self; 5] = [Self::Off, Self::Slow, Self::Medium, Self::Fast, Self::Max];

    /// Duty cycle in percent, as reported by [`ThermalControl::get_fan_speed`].
    pub const fn duty_percent(self) -> u32 {
        match self {
            Self::Off => 0,
            Self::Slow => 25,
            Self::Medium => 50,
            Self::Fast => 75,
            Self::Max => 100,
        }
    }
}

impl TryFrom<u32> for FanSpeed {
    type Error = HalError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Off),
            1 => Ok(Self::Slow),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Fast),
            4 => Ok(Self::Max),
            _ => Err(HalError::InvalidArgument),
        }
    }
}

/// Reason a fan speed request was refused (C `FAN_ERR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum FanError {
    /// No error
    #[default]
    None = 0,
    /// Fan hardware fault
    Hardware = 1,
    /// Maximum override is active; only [`FanSpeed::Max`] is accepted
    MaxOverrideSet = 2,
}

/// Decoded [`ThermalControl::get_rotor_lock`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotorLock {
    /// Rotor is not turning while powered (`1`)
    Locked,
    /// Rotor turns freely (`0`)
    Unlocked,
    /// Fan absent or index invalid (`-1`)
    NotApplicable,
}

impl RotorLock {
    /// Raw wire value.
    pub const fn code(self) -> i32 {
        match self {
            Self::Locked => 1,
            Self::Unlocked => 0,
            Self::NotApplicable => -1,
        }
    }

    /// Decode a raw wire value; anything other than `1`, `0`, `-1` is invalid.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Locked),
            0 => Some(Self::Unlocked),
            -1 => Some(Self::NotApplicable),
            _ => None,
        }
    }
}

/// Thermal manager interface.
pub trait ThermalControl {
    /// Fan duty cycle in percent (`0..=100`); `0` for an invalid index.
    fn get_fan_speed(&mut self, fan_index: u32) -> u32;

    /// Fan speed in RPM; `0` for an invalid index.
    fn get_rpm(&mut self, fan_index: u32) -> u32;

    /// Raw rotor lock state; see [`RotorLock`].
    fn get_rotor_lock(&mut self, fan_index: u32) -> i32;

    /// Whether the fan is running; `false` for an invalid index.
    fn get_fan_status(&mut self, fan_index: u32) -> bool;

    /// Force the fan to maximum speed regardless of later requests.
    fn set_fan_max_override(&mut self, max_override: bool, fan_index: u32) -> HalResult;

    /// Request a fan speed.
    ///
    /// `error` is required. On success it is set to [`FanError::None`]; when
    /// the request is refused the reason is written there and the call fails
    /// with [`HalError::Failure`].
    fn set_fan_speed(&mut self, fan_index: u32, speed: FanSpeed, error: Option<&mut FanError>) -> HalResult;

    /// Input current in mA.
    fn get_input_current(&mut self, milliamps: Option<&mut i32>) -> HalResult;

    /// Input power in mW.
    fn get_input_power(&mut self, milliwatts: Option<&mut i32>) -> HalResult;

    /// Fan inlet temperature in °C.
    fn get_fan_temperature(&mut self, celsius: Option<&mut i32>) -> HalResult;

    /// Temperature of radio `radio_index` in °C.
    fn get_radio_temperature(&mut self, radio_index: u32, celsius: Option<&mut i32>) -> HalResult;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_rotor_lock_codes() {
        for lock in [RotorLock::Locked, RotorLock::Unlocked, RotorLock::NotApplicable] {
            assert_eq!(RotorLock::from_code(lock.code()), Some(lock));
        }
        assert_eq!(RotorLock::from_code(2), None);
    }

    #[test]
    fn test_fan_speed_duty_is_monotone() {
        let duties = FanSpeed::ALL.map(FanSpeed::duty_percent);
        assert!(duties.windows(2).all(|w| matches!(w, [a, b] if a < b)));
        assert_eq!(FanSpeed::try_from(5), Err(HalError::InvalidArgument));
    }
}
