//! Firmware image banks

use crate::status::{HalError, HalResult};
use crate::types::InfoString;

/// Image bank selector (C `FW_BANK`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum FwBank {
    /// Bank the device booted from
    #[default]
    Active = 0,
    /// Standby bank
    Inactive = 1,
}

impl FwBank {
    /// Both banks.
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];
}

impl TryFrom<u32> for FwBank {
    type Error = HalError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Active),
            1 => Ok(Self::Inactive),
            _ => Err(HalError::InvalidArgument),
        }
    }
}

/// Image flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum FwImageType {
    /// Primary code image
    #[default]
    Pci = 0,
    /// Partial download re-image
    Pdri = 1,
}

/// Image state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum FwImageState {
    /// Running image
    Active = 0,
    /// Standby image
    #[default]
    Inactive = 1,
}

/// Description of one bank (C `FW_BANK_INFO`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FwBankInfo {
    /// Image name; empty when the bank holds no image
    pub image_name: InfoString,
    /// Image flavour
    pub image_type: FwImageType,
    /// Whether the bank is running
    pub state: FwImageState,
}

/// Firmware bank inspection.
pub trait FirmwareBanks {
    /// Describe `bank`.
    fn get_firmware_bank_info(&mut self, bank: FwBank, info: Option<&mut FwBankInfo>) -> HalResult;
}
