//! Shipped placeholder HAL
//!
//! Every operation ignores its arguments and reports success; raw-value
//! getters return zero. Nothing is validated and no output is written, so
//! `StubHal` is expected to fail the conformance suite's negative tests and
//! any positive test that inspects an output value. A vendor port replaces
//! it with a hardware-backed type implementing the same traits.

use crate::device::DeviceInfo;
use crate::dhcp::{DhcpOptionList, DhcpOptions};
use crate::dscp::{DscpClientList, DscpControl, TrafficCountCommand, WanInterface};
use crate::firmware::{FirmwareBanks, FwBank, FwBankInfo};
use crate::led::{LedControl, LedParams};
use crate::macsec::Macsec;
use crate::memory::{CpuKind, InterfaceStats, MemoryStats, ProcMemInfo};
use crate::power::{PowerControl, PsmState};
use crate::services::NetworkServices;
use crate::status::HalResult;
use crate::thermal::{FanError, FanSpeed, ThermalControl};
use crate::types::InfoString;

/// Always-succeeding HAL placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubHal;

impl StubHal {
    /// Create the stub.
    pub const fn new() -> Self {
        Self
    }
}

impl DeviceInfo for StubHal {
    fn pandm_db_init(&mut self) -> HalResult {
        Ok(())
    }

    fn docsis_params_db_init(&mut self) -> HalResult {
        Ok(())
    }

    fn get_device_config_status(&mut self, _status: Option<&mut InfoString>) -> HalResult {
        Ok(())
    }

    fn get_model_name(&mut self, _name: Option<&mut InfoString>) -> HalResult {
        Ok(())
    }

    fn get_serial_number(&mut self, _serial: Option<&mut InfoString>) -> HalResult {
        Ok(())
    }

    fn get_hardware_version(&mut self, _version: Option<&mut InfoString>) -> HalResult {
        Ok(())
    }

    fn get_software_version(&mut self, _version: Option<&mut InfoString>) -> HalResult {
        Ok(())
    }

    fn get_bootloader_version(&mut self, _version: Option<&mut InfoString>) -> HalResult {
        Ok(())
    }

    fn get_firmware_name(&mut self, _name: Option<&mut InfoString>) -> HalResult {
        Ok(())
    }

    fn get_base_mac_address(&mut self, _mac: Option<&mut InfoString>) -> HalResult {
        Ok(())
    }

    fn get_router_region(&mut self, _region: Option<&mut InfoString>) -> HalResult {
        Ok(())
    }

    fn get_factory_partner_id(&mut self, _partner: Option<&mut InfoString>) -> HalResult {
        Ok(())
    }

    fn get_factory_cm_variant(&mut self, _variant: Option<&mut InfoString>) -> HalResult {
        Ok(())
    }

    fn set_factory_cm_variant(&mut self, _variant: Option<&str>) -> HalResult {
        Ok(())
    }
}

impl NetworkServices for StubHal {
    fn get_telnet_enable(&mut self, _enabled: Option<&mut bool>) -> HalResult {
        Ok(())
    }

    fn set_telnet_enable(&mut self, _enabled: bool) -> HalResult {
        Ok(())
    }

    fn get_ssh_enable(&mut self, _enabled: Option<&mut bool>) -> HalResult {
        Ok(())
    }

    fn set_ssh_enable(&mut self, _enabled: bool) -> HalResult {
        Ok(())
    }

    fn get_snmp_enable(&mut self, _mode: Option<&mut InfoString>) -> HalResult {
        Ok(())
    }

    fn set_snmp_enable(&mut self, _mode: Option<&str>) -> HalResult {
        Ok(())
    }

    fn get_web_ui_timeout(&mut self, _secs: Option<&mut u32>) -> HalResult {
        Ok(())
    }

    fn set_web_ui_timeout(&mut self, _secs: u32) -> HalResult {
        Ok(())
    }

    fn get_web_access_level(&mut self, _user_index: u32, _if_index: u32, _level: Option<&mut u32>) -> HalResult {
        Ok(())
    }

    fn set_web_access_level(&mut self, _user_index: u32, _if_index: u32, _level: u32) -> HalResult {
        Ok(())
    }

    fn set_snmp_onboard_reboot_enable(&mut self, _value: Option<&str>) -> HalResult {
        Ok(())
    }

    fn set_device_code_image_timeout(&mut self, _secs: i32) -> HalResult {
        Ok(())
    }

    fn set_device_code_image_valid(&mut self, _valid: bool) -> HalResult {
        Ok(())
    }
}

impl MemoryStats for StubHal {
    fn get_total_memory_size(&mut self, _kib: Option<&mut u64>) -> HalResult {
        Ok(())
    }

    fn get_used_memory_size(&mut self, _kib: Option<&mut u64>) -> HalResult {
        Ok(())
    }

    fn get_free_memory_size(&mut self, _kib: Option<&mut u64>) -> HalResult {
        Ok(())
    }

    fn get_flash_size(&mut self, _mib: Option<&mut u64>) -> HalResult {
        Ok(())
    }

    fn get_flash_used(&mut self, _mib: Option<&mut u64>) -> HalResult {
        Ok(())
    }

    fn get_flash_free(&mut self, _mib: Option<&mut u64>) -> HalResult {
        Ok(())
    }

    fn get_factory_reset_count(&mut self, _count: Option<&mut u32>) -> HalResult {
        Ok(())
    }

    fn clear_reset_count(&mut self, _clear: bool) -> HalResult {
        Ok(())
    }

    fn get_time_offset(&mut self, _offset: Option<&mut InfoString>) -> HalResult {
        Ok(())
    }

    fn get_cpu_speed(&mut self, _mhz: Option<&mut InfoString>) -> HalResult {
        Ok(())
    }

    fn get_interface_stats(&mut self, _if_name: Option<&str>, _stats: Option<&mut InterfaceStats>) -> HalResult {
        Ok(())
    }

    fn get_memory_paths(&mut self, _cpu: CpuKind, _info: Option<&mut ProcMemInfo>) -> HalResult {
        Ok(())
    }
}

impl LedControl for StubHal {
    fn init_led(&mut self, _config_file: Option<&str>) -> HalResult {
        Ok(())
    }

    fn set_led(&mut self, _params: Option<&LedParams>) -> HalResult {
        Ok(())
    }

    fn get_led(&mut self, _params: Option<&mut LedParams>) -> HalResult {
        Ok(())
    }
}

impl ThermalControl for StubHal {
    fn get_fan_speed(&mut self, _fan_index: u32) -> u32 {
        0
    }

    fn get_rpm(&mut self, _fan_index: u32) -> u32 {
        0
    }

    fn get_rotor_lock(&mut self, _fan_index: u32) -> i32 {
        0
    }

    fn get_fan_status(&mut self, _fan_index: u32) -> bool {
        false
    }

    fn set_fan_max_override(&mut self, _max_override: bool, _fan_index: u32) -> HalResult {
        Ok(())
    }

    fn set_fan_speed(&mut self, _fan_index: u32, _speed: FanSpeed, _error: Option<&mut FanError>) -> HalResult {
        Ok(())
    }

    fn get_input_current(&mut self, _milliamps: Option<&mut i32>) -> HalResult {
        Ok(())
    }

    fn get_input_power(&mut self, _milliwatts: Option<&mut i32>) -> HalResult {
        Ok(())
    }

    fn get_fan_temperature(&mut self, _celsius: Option<&mut i32>) -> HalResult {
        Ok(())
    }

    fn get_radio_temperature(&mut self, _radio_index: u32, _celsius: Option<&mut i32>) -> HalResult {
        Ok(())
    }
}

impl Macsec for StubHal {
    fn get_macsec_enable(&mut self, _eth_port: u32, _enabled: Option<&mut bool>) -> HalResult {
        Ok(())
    }

    fn set_macsec_enable(&mut self, _eth_port: u32, _enabled: bool) -> HalResult {
        Ok(())
    }

    fn get_macsec_operational_status(&mut self, _eth_port: u32, _up: Option<&mut bool>) -> HalResult {
        Ok(())
    }

    fn start_macsec(&mut self, _eth_port: u32, _timeout_secs: i32) -> HalResult {
        Ok(())
    }

    fn stop_macsec(&mut self, _eth_port: u32) -> HalResult {
        Ok(())
    }
}

impl DhcpOptions for StubHal {
    fn get_dhcpv4_options(
        &mut self,
        _requested: Option<&mut DhcpOptionList>,
        _sent: Option<&mut DhcpOptionList>,
    ) -> HalResult {
        Ok(())
    }

    fn get_dhcpv6_options(
        &mut self,
        _requested: Option<&mut DhcpOptionList>,
        _sent: Option<&mut DhcpOptionList>,
    ) -> HalResult {
        Ok(())
    }
}

impl DscpControl for StubHal {
    fn set_dscp(
        &mut self,
        _interface: WanInterface,
        _command: TrafficCountCommand,
        _dscp_list: Option<&str>,
    ) -> HalResult {
        Ok(())
    }

    fn get_dscp_client_list(&mut self, _interface: WanInterface, _clients: Option<&mut DscpClientList>) -> HalResult {
        Ok(())
    }
}

impl PowerControl for StubHal {
    fn set_low_power_mode_state(&mut self, _state: Option<PsmState>) -> HalResult {
        Ok(())
    }
}

impl FirmwareBanks for StubHal {
    fn get_firmware_bank_info(&mut self, _bank: FwBank, _info: Option<&mut FwBankInfo>) -> HalResult {
        Ok(())
    }
}
