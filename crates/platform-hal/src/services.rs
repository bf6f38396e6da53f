//! Management-plane network services
//!
//! Telnet/SSH/SNMP enablement, web UI session timeout and per-interface web
//! access levels, plus the device-code-image (DCI) validity controls.

use crate::status::HalResult;
use crate::types::InfoString;

/// SNMP modes accepted by [`NetworkServices::set_snmp_enable`].
pub const SNMP_MODES: &[&str] = &["rgWan", "rgDualIp", "rgLanIp"];

/// Values accepted by [`NetworkServices::set_snmp_onboard_reboot_enable`].
pub const SNMP_ONBOARD_REBOOT_VALUES: &[&str] = &["enable", "disable"];

/// Web UI timeout that disables the session timer.
pub const WEB_UI_TIMEOUT_DISABLED: u32 = 0;
/// Smallest non-zero web UI timeout (seconds).
pub const WEB_UI_TIMEOUT_MIN: u32 = 30;
/// Largest web UI timeout (seconds).
pub const WEB_UI_TIMEOUT_MAX: u32 = 86_400;

/// Web UI users: 1 = admin, 2 = cusadmin, 3 = mso.
pub const WEB_ACCESS_USERS: &[u32] = &[1, 2, 3];
/// Interfaces with a web access level: 1 = LAN, 2 = WAN, 16 = MoCA, 40 = Wi-Fi.
pub const WEB_ACCESS_INTERFACES: &[u32] = &[1, 2, 16, 40];
/// Highest web access level bitmask.
pub const WEB_ACCESS_LEVEL_MAX: u32 = 63;

/// Largest device-code-image timeout (seconds).
pub const DCI_TIMEOUT_MAX: i32 = 86_400;

/// Returns `true` when `secs` is a valid web UI timeout.
pub fn is_valid_web_ui_timeout(secs: u32) -> bool {
    secs == WEB_UI_TIMEOUT_DISABLED || (WEB_UI_TIMEOUT_MIN..=WEB_UI_TIMEOUT_MAX).contains(&secs)
}

/// Returns `true` when `(user, interface)` addresses a web access slot.
pub fn is_valid_web_access_slot(user_index: u32, if_index: u32) -> bool {
    WEB_ACCESS_USERS.contains(&user_index) && WEB_ACCESS_INTERFACES.contains(&if_index)
}

/// Management-plane service controls.
pub trait NetworkServices {
    /// Whether the Telnet server is enabled.
    fn get_telnet_enable(&mut self, enabled: Option<&mut bool>) -> HalResult;

    /// Enable or disable the Telnet server.
    fn set_telnet_enable(&mut self, enabled: bool) -> HalResult;

    /// Whether the SSH server is enabled.
    fn get_ssh_enable(&mut self, enabled: Option<&mut bool>) -> HalResult;

    /// Enable or disable the SSH server.
    fn set_ssh_enable(&mut self, enabled: bool) -> HalResult;

    /// Current SNMP mode, one of [`SNMP_MODES`].
    fn get_snmp_enable(&mut self, mode: Option<&mut InfoString>) -> HalResult;

    /// Select the SNMP mode. Values outside [`SNMP_MODES`] are rejected.
    fn set_snmp_enable(&mut self, mode: Option<&str>) -> HalResult;

    /// Web UI session timeout in seconds.
    fn get_web_ui_timeout(&mut self, secs: Option<&mut u32>) -> HalResult;

    /// Set the web UI session timeout; see [`is_valid_web_ui_timeout`].
    fn set_web_ui_timeout(&mut self, secs: u32) -> HalResult;

    /// Web access level of `user_index` on interface `if_index`.
    fn get_web_access_level(&mut self, user_index: u32, if_index: u32, level: Option<&mut u32>) -> HalResult;

    /// Set the web access level; `level` must not exceed [`WEB_ACCESS_LEVEL_MAX`].
    fn set_web_access_level(&mut self, user_index: u32, if_index: u32, level: u32) -> HalResult;

    /// Enable or disable the SNMP-triggered onboarding reboot.
    fn set_snmp_onboard_reboot_enable(&mut self, value: Option<&str>) -> HalResult;

    /// Seconds the device code image stays valid, `0..=DCI_TIMEOUT_MAX`.
    fn set_device_code_image_timeout(&mut self, secs: i32) -> HalResult;

    /// Mark the device code image valid or invalid.
    fn set_device_code_image_valid(&mut self, valid: bool) -> HalResult;
}
