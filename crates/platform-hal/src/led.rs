//! Front panel LED
//!
//! Only present on platforms built with an LED manager; the conformance
//! harness registers these tests only when that capability is declared.

use crate::status::{HalError, HalResult};

/// LED manager configuration file shipped on the platform image.
pub const LED_CONFIG_PATH: &str = "/etc/led_config.json";

/// Longest blink interval (seconds).
pub const LED_BLINK_INTERVAL_MAX: u32 = 60;

/// LED colour (C `LED_COLOR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum LedColor {
    /// White
    #[default]
    White = 0,
    /// Yellow
    Yellow = 1,
    /// Green
    Green = 2,
    /// Red
    Red = 3,
    /// Blue
    Blue = 4,
    /// Purple
    Purple = 5,
    /// Sentinel: colour not supported. Always rejected by `set_led`.
    NotSupported = 6,
}

impl TryFrom<u32> for LedColor {
    type Error = HalError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::White),
            1 => Ok(Self::Yellow),
            2 => Ok(Self::Green),
            3 => Ok(Self::Red),
            4 => Ok(Self::Blue),
            5 => Ok(Self::Purple),
            6 => Ok(Self::NotSupported),
            _ => Err(HalError::InvalidArgument),
        }
    }
}

/// LED mode (C `LED_STATE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum LedState {
    /// Steady on
    #[default]
    Solid = 0,
    /// Blinking every `interval_secs`
    Blink = 1,
}

impl TryFrom<u32> for LedState {
    type Error = HalError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Solid),
            1 => Ok(Self::Blink),
            _ => Err(HalError::InvalidArgument),
        }
    }
}

/// LED settings (C `LEDMGMTPARAMS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedParams {
    /// Colour
    pub color: LedColor,
    /// Solid or blinking
    pub state: LedState,
    /// Blink interval; `0` for [`LedState::Solid`]
    pub interval_secs: u32,
}

impl LedParams {
    /// Steady LED of the given colour.
    pub const fn solid(color: LedColor) -> Self {
        Self {
            color,
            state: LedState::Solid,
            interval_secs: 0,
        }
    }

    /// Blinking LED of the given colour.
    pub const fn blink(color: LedColor, interval_secs: u32) -> Self {
        Self {
            color,
            state: LedState::Blink,
            interval_secs,
        }
    }

    /// Whether these settings are acceptable to [`LedControl::set_led`].
    pub fn is_valid(&self) -> bool {
        if self.color == LedColor::NotSupported {
            return false;
        }
        match self.state {
            LedState::Solid => self.interval_secs == 0,
            LedState::Blink => (1..=LED_BLINK_INTERVAL_MAX).contains(&self.interval_secs),
        }
    }
}

/// LED manager interface.
pub trait LedControl {
    /// Load the LED configuration file and bring the LED driver up.
    fn init_led(&mut self, config_file: Option<&str>) -> HalResult;

    /// Apply LED settings. Settings failing [`LedParams::is_valid`] are rejected.
    fn set_led(&mut self, params: Option<&LedParams>) -> HalResult;

    /// Read back the current LED settings.
    fn get_led(&mut self, params: Option<&mut LedParams>) -> HalResult;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_led_params_validation() {
        assert!(LedParams::solid(LedColor::Green).is_valid());
        assert!(LedParams::blink(LedColor::Red, 1).is_valid());
        assert!(!LedParams::blink(LedColor::Red, 0).is_valid());
        assert!(!LedParams::blink(LedColor::Red, LED_BLINK_INTERVAL_MAX + 1).is_valid());
        assert!(!LedParams::solid(LedColor::NotSupported).is_valid());
        let solid_with_interval = LedParams {
            interval_secs: 5,
            ..LedParams::solid(LedColor::White)
        };
        assert!(!solid_with_interval.is_valid());
    }

    #[test]
    fn test_led_codes() {
        assert_eq!(LedColor::try_from(5), Ok(LedColor::Purple));
        assert_eq!(LedColor::try_from(7), Err(HalError::InvalidArgument));
        assert_eq!(LedState::try_from(2), Err(HalError::InvalidArgument));
    }
}
