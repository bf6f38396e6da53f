//! Device identity and provisioning databases

use crate::status::HalResult;
use crate::types::InfoString;

/// Values reported by [`DeviceInfo::get_device_config_status`].
pub const DEVICE_CONFIG_STATUSES: &[&str] = &["Initializing", "In Progress", "Complete"];

/// Values accepted by [`DeviceInfo::set_factory_cm_variant`].
pub const FACTORY_CM_VARIANTS: &[&str] = &["unknown", "pc20", "pc20genband", "pc15sip", "pc15mgcp"];

/// Router regions a device may be provisioned for.
pub const ROUTER_REGIONS: &[&str] = &["GB", "IE", "IT", "DE", "US", "CA", "REGN_UNKNOWN"];

/// Device identity and provisioning.
///
/// Every getter fills a caller-owned [`InfoString`]; passing `None` must fail
/// with [`HalError::NullPointer`](crate::HalError::NullPointer).
pub trait DeviceInfo {
    /// Initialise the PandM (provisioning and management) parameter store.
    fn pandm_db_init(&mut self) -> HalResult;

    /// Initialise the DOCSIS parameter store.
    fn docsis_params_db_init(&mut self) -> HalResult;

    /// Device configuration status, one of [`DEVICE_CONFIG_STATUSES`].
    fn get_device_config_status(&mut self, status: Option<&mut InfoString>) -> HalResult;

    /// Model name.
    fn get_model_name(&mut self, name: Option<&mut InfoString>) -> HalResult;

    /// Serial number.
    fn get_serial_number(&mut self, serial: Option<&mut InfoString>) -> HalResult;

    /// Hardware revision.
    fn get_hardware_version(&mut self, version: Option<&mut InfoString>) -> HalResult;

    /// Running software version.
    fn get_software_version(&mut self, version: Option<&mut InfoString>) -> HalResult;

    /// Bootloader version.
    fn get_bootloader_version(&mut self, version: Option<&mut InfoString>) -> HalResult;

    /// Name of the running firmware image.
    fn get_firmware_name(&mut self, name: Option<&mut InfoString>) -> HalResult;

    /// Base MAC address as `xx:xx:xx:xx:xx:xx`.
    fn get_base_mac_address(&mut self, mac: Option<&mut InfoString>) -> HalResult;

    /// Provisioned region, one of [`ROUTER_REGIONS`].
    fn get_router_region(&mut self, region: Option<&mut InfoString>) -> HalResult;

    /// Factory partner identifier.
    fn get_factory_partner_id(&mut self, partner: Option<&mut InfoString>) -> HalResult;

    /// Factory cable-modem variant, one of [`FACTORY_CM_VARIANTS`].
    fn get_factory_cm_variant(&mut self, variant: Option<&mut InfoString>) -> HalResult;

    /// Store the factory cable-modem variant.
    ///
    /// Values outside [`FACTORY_CM_VARIANTS`] are rejected.
    fn set_factory_cm_variant(&mut self, variant: Option<&str>) -> HalResult;
}
