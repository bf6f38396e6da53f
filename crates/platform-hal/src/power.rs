//! Power-state manager (PSM)

use crate::status::{HalError, HalResult};

/// Power source / thermal state (C `PSM_STATE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum PsmState {
    /// Running on mains power
    Ac = 1,
    /// Running on battery
    Battery = 2,
    /// Over temperature
    Hot = 3,
    /// Back within temperature limits after [`PsmState::Hot`]
    Cooled = 4,
}

impl PsmState {
    /// Every state.
    pub const ALL: [Self; 4] = [Self::Ac, Self::Battery, Self::Hot, Self::Cooled];
}

impl TryFrom<u32> for PsmState {
    type Error = HalError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Ac),
            2 => Ok(Self::Battery),
            3 => Ok(Self::Hot),
            4 => Ok(Self::Cooled),
            _ => Err(HalError::InvalidArgument),
        }
    }
}

/// Low-power mode control.
pub trait PowerControl {
    /// Notify the platform of a power-state transition.
    ///
    /// `None` (the C null pointer) is rejected.
    fn set_low_power_mode_state(&mut self, state: Option<PsmState>) -> HalResult;
}
