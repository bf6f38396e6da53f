//! Mock implementations for testing
//!
//! [`SimulatedHal`] is an in-memory platform that honours the whole call
//! contract: it validates arguments, rejects missing buffers without touching
//! state, and keeps set values so get/set round trips hold. The conformance
//! harness runs its own suites against it to check the test corpus itself.

#![cfg(any(test, feature = "std"))]

use std::collections::BTreeMap;

use crate::device::{DeviceInfo, FACTORY_CM_VARIANTS};
use crate::dhcp::{DhcpOption, DhcpOptionList, DhcpOptions};
use crate::dscp::{DscpClient, DscpClientList, DscpControl, DscpCount, DscpSet, TrafficCountCommand, WanInterface};
use crate::firmware::{FirmwareBanks, FwBank, FwBankInfo, FwImageState, FwImageType};
use crate::led::{LedControl, LedParams, LED_CONFIG_PATH};
use crate::macsec::Macsec;
use crate::memory::{CpuKind, InterfaceStats, MemoryStats, ProcMemInfo};
use crate::power::{PowerControl, PsmState};
use crate::services::{
    is_valid_web_access_slot, is_valid_web_ui_timeout, NetworkServices, DCI_TIMEOUT_MAX, SNMP_MODES,
    SNMP_ONBOARD_REBOOT_VALUES, WEB_ACCESS_LEVEL_MAX,
};
use crate::status::{required, required_input, HalError, HalResult};
use crate::thermal::{FanError, FanSpeed, RotorLock, ThermalControl, MAX_FANS};
use crate::types::{fill, InfoString, MacAddress};

/// Ethernet ports of a default-constructed [`SimulatedHal`].
pub const DEFAULT_ETH_PORTS: u32 = 4;

/// Interfaces [`SimulatedHal`] keeps counters for.
pub const SIMULATED_INTERFACES: &[&str] = &["erouter0", "brlan0", "eth0"];

const MODEL_NAME: &str = "SIM-RDKB-1";
const SERIAL_NUMBER: &str = "SIM0000000001";
const HARDWARE_VERSION: &str = "1.0";
const SOFTWARE_VERSION: &str = "rdkb-sim-1.0.0";
const BOOTLOADER_VERSION: &str = "1.0.0";
const STANDBY_IMAGE: &str = "rdkb-sim-0.9.0";
const BASE_MAC: &str = "02:10:18:00:00:01";
const ROUTER_REGION: &str = "GB";
const PARTNER_ID: &str = "comcast";
const CONFIG_STATUS: &str = "Complete";
const TIME_OFFSET: &str = "-18000";
const CPU_SPEED: &str = "1500";

const RAM_TOTAL_KIB: u64 = 1_048_576;
const RAM_USED_KIB: u64 = 262_144;
const FLASH_TOTAL_MIB: u64 = 512;
const FLASH_USED_MIB: u64 = 128;

/// Fixed radio temperatures, one per radio.
const RADIO_TEMPERATURES: [i32; 3] = [48, 51, 55];

const DHCPV4_REQUESTED: &[(u16, &str)] = &[(1, ""), (3, ""), (6, ""), (43, ""), (125, "")];
const DHCPV4_SENT: &[(u16, &str)] = &[(60, "dslforum.org"), (61, "01:02:10:18:00:00:01")];
const DHCPV6_REQUESTED: &[(u16, &str)] = &[(17, ""), (23, ""), (24, "")];
const DHCPV6_SENT: &[(u16, &str)] = &[(1, "00:03:00:01:02:10:18:00:00:01"), (16, "dslforum.org")];

#[derive(Debug, Clone, Copy)]
struct Fan {
    speed: FanSpeed,
    max_override: bool,
    locked: bool,
}

impl Fan {
    fn effective_speed(self) -> FanSpeed {
        if self.max_override {
            FanSpeed::Max
        } else {
            self.speed
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct MacsecPort {
    enabled: bool,
    running: bool,
}

/// In-memory platform honouring the full HAL contract.
#[derive(Debug, Clone)]
pub struct SimulatedHal {
    pandm_ready: bool,
    docsis_ready: bool,
    cm_variant: InfoString,
    telnet: bool,
    ssh: bool,
    snmp_mode: InfoString,
    snmp_onboard_reboot: bool,
    web_ui_timeout: u32,
    web_access: BTreeMap<(u32, u32), u32>,
    dci_timeout: i32,
    dci_valid: bool,
    factory_resets: u32,
    interfaces: BTreeMap<String, InterfaceStats>,
    led_ready: bool,
    led: LedParams,
    fans: Vec<Fan>,
    eth_ports: u32,
    // Ports are created on first touch; untouched ports are disabled and stopped.
    macsec: BTreeMap<u32, MacsecPort>,
    dscp_docsis: Option<DscpSet>,
    dscp_ewan: Option<DscpSet>,
    dscp_clients: Vec<MacAddress>,
    psm_state: Option<PsmState>,
}

impl SimulatedHal {
    /// Create a simulated platform with `eth_ports` MACsec-capable ports.
    pub fn new(eth_ports: u32) -> Self {
        let mut web_access = BTreeMap::new();
        web_access.insert((1, 1), WEB_ACCESS_LEVEL_MAX);
        web_access.insert((3, 2), WEB_ACCESS_LEVEL_MAX);

        let interfaces = SIMULATED_INTERFACES
            .iter()
            .zip(1u64..)
            .map(|(name, n)| {
                let packets = n.saturating_mul(1_000);
                let stats = InterfaceStats {
                    rx_bytes: packets.saturating_mul(1_200),
                    tx_bytes: packets.saturating_mul(800),
                    rx_packets: packets,
                    tx_packets: packets,
                };
                ((*name).to_string(), stats)
            })
            .collect();

        Self {
            pandm_ready: false,
            docsis_ready: false,
            cm_variant: text(FACTORY_CM_VARIANTS.first().copied().unwrap_or_default()),
            telnet: false,
            ssh: true,
            snmp_mode: text(SNMP_MODES.first().copied().unwrap_or_default()),
            snmp_onboard_reboot: false,
            web_ui_timeout: 600,
            web_access,
            dci_timeout: 0,
            dci_valid: true,
            factory_resets: 3,
            interfaces,
            led_ready: false,
            led: LedParams::default(),
            fans: (0..MAX_FANS)
                .map(|_| Fan {
                    speed: FanSpeed::Medium,
                    max_override: false,
                    locked: false,
                })
                .collect(),
            eth_ports,
            macsec: BTreeMap::new(),
            dscp_docsis: None,
            dscp_ewan: None,
            dscp_clients: vec![
                MacAddress::new([0x02, 0x00, 0x00, 0x00, 0x10, 0x01]),
                MacAddress::new([0x02, 0x00, 0x00, 0x00, 0x10, 0x02]),
            ],
            psm_state: None,
        }
    }

    /// Number of simulated Ethernet ports.
    pub fn eth_ports(&self) -> u32 {
        self.eth_ports
    }

    /// Whether both parameter stores have been initialised.
    pub fn databases_ready(&self) -> bool {
        self.pandm_ready && self.docsis_ready
    }

    /// Last power state reported through [`PowerControl`].
    pub fn psm_state(&self) -> Option<PsmState> {
        self.psm_state
    }

    /// Code points currently counted on `interface`.
    pub fn dscp_counting(&self, interface: WanInterface) -> Option<&DscpSet> {
        match interface {
            WanInterface::Docsis => self.dscp_docsis.as_ref(),
            WanInterface::Ewan => self.dscp_ewan.as_ref(),
        }
    }

    /// Simulate a seized rotor on `fan_index`.
    pub fn lock_rotor(&mut self, fan_index: u32) -> HalResult {
        self.fan_mut(fan_index)?.locked = true;
        Ok(())
    }

    fn fan(&self, fan_index: u32) -> Option<Fan> {
        usize::try_from(fan_index).ok().and_then(|i| self.fans.get(i)).copied()
    }

    fn fan_mut(&mut self, fan_index: u32) -> HalResult<&mut Fan> {
        usize::try_from(fan_index)
            .ok()
            .and_then(|i| self.fans.get_mut(i))
            .ok_or(HalError::InvalidArgument)
    }

    fn port_mut(&mut self, eth_port: u32) -> HalResult<&mut MacsecPort> {
        if eth_port >= self.eth_ports {
            return Err(HalError::InvalidArgument);
        }
        Ok(self.macsec.entry(eth_port).or_default())
    }

    fn dscp_slot(&mut self, interface: WanInterface) -> &mut Option<DscpSet> {
        match interface {
            WanInterface::Docsis => &mut self.dscp_docsis,
            WanInterface::Ewan => &mut self.dscp_ewan,
        }
    }
}

impl Default for SimulatedHal {
    fn default() -> Self {
        Self::new(DEFAULT_ETH_PORTS)
    }
}

fn text(value: &str) -> InfoString {
    let mut s = InfoString::new();
    // Only called with compile-time constants shorter than the buffer.
    let _ = fill(&mut s, value);
    s
}

fn fill_list(dst: &mut DhcpOptionList, entries: &[(u16, &str)]) -> HalResult {
    dst.clear();
    for (tag, value) in entries {
        let option = DhcpOption::new(*tag, value).ok_or(HalError::Failure)?;
        dst.push(option).map_err(|_| HalError::Failure)?;
    }
    Ok(())
}

impl DeviceInfo for SimulatedHal {
    fn pandm_db_init(&mut self) -> HalResult {
        self.pandm_ready = true;
        Ok(())
    }

    fn docsis_params_db_init(&mut self) -> HalResult {
        self.docsis_ready = true;
        Ok(())
    }

    fn get_device_config_status(&mut self, status: Option<&mut InfoString>) -> HalResult {
        fill(required(status)?, CONFIG_STATUS)
    }

    fn get_model_name(&mut self, name: Option<&mut InfoString>) -> HalResult {
        fill(required(name)?, MODEL_NAME)
    }

    fn get_serial_number(&mut self, serial: Option<&mut InfoString>) -> HalResult {
        fill(required(serial)?, SERIAL_NUMBER)
    }

    fn get_hardware_version(&mut self, version: Option<&mut InfoString>) -> HalResult {
        fill(required(version)?, HARDWARE_VERSION)
    }

    fn get_software_version(&mut self, version: Option<&mut InfoString>) -> HalResult {
        fill(required(version)?, SOFTWARE_VERSION)
    }

    fn get_bootloader_version(&mut self, version: Option<&mut InfoString>) -> HalResult {
        fill(required(version)?, BOOTLOADER_VERSION)
    }

    fn get_firmware_name(&mut self, name: Option<&mut InfoString>) -> HalResult {
        fill(required(name)?, SOFTWARE_VERSION)
    }

    fn get_base_mac_address(&mut self, mac: Option<&mut InfoString>) -> HalResult {
        fill(required(mac)?, BASE_MAC)
    }

    fn get_router_region(&mut self, region: Option<&mut InfoString>) -> HalResult {
        fill(required(region)?, ROUTER_REGION)
    }

    fn get_factory_partner_id(&mut self, partner: Option<&mut InfoString>) -> HalResult {
        fill(required(partner)?, PARTNER_ID)
    }

    fn get_factory_cm_variant(&mut self, variant: Option<&mut InfoString>) -> HalResult {
        let out = required(variant)?;
        *out = self.cm_variant.clone();
        Ok(())
    }

    fn set_factory_cm_variant(&mut self, variant: Option<&str>) -> HalResult {
        let variant = required_input(variant)?;
        if !FACTORY_CM_VARIANTS.contains(&variant) {
            return Err(HalError::InvalidArgument);
        }
        fill(&mut self.cm_variant, variant)
    }
}

impl NetworkServices for SimulatedHal {
    fn get_telnet_enable(&mut self, enabled: Option<&mut bool>) -> HalResult {
        *required(enabled)? = self.telnet;
        Ok(())
    }

    fn set_telnet_enable(&mut self, enabled: bool) -> HalResult {
        self.telnet = enabled;
        Ok(())
    }

    fn get_ssh_enable(&mut self, enabled: Option<&mut bool>) -> HalResult {
        *required(enabled)? = self.ssh;
        Ok(())
    }

    fn set_ssh_enable(&mut self, enabled: bool) -> HalResult {
        self.ssh = enabled;
        Ok(())
    }

    fn get_snmp_enable(&mut self, mode: Option<&mut InfoString>) -> HalResult {
        *required(mode)? = self.snmp_mode.clone();
        Ok(())
    }

    fn set_snmp_enable(&mut self, mode: Option<&str>) -> HalResult {
        let mode = required_input(mode)?;
        if !SNMP_MODES.contains(&mode) {
            return Err(HalError::InvalidArgument);
        }
        fill(&mut self.snmp_mode, mode)
    }

    fn get_web_ui_timeout(&mut self, secs: Option<&mut u32>) -> HalResult {
        *required(secs)? = self.web_ui_timeout;
        Ok(())
    }

    fn set_web_ui_timeout(&mut self, secs: u32) -> HalResult {
        if !is_valid_web_ui_timeout(secs) {
            return Err(HalError::InvalidArgument);
        }
        self.web_ui_timeout = secs;
        Ok(())
    }

    fn get_web_access_level(&mut self, user_index: u32, if_index: u32, level: Option<&mut u32>) -> HalResult {
        let level = required(level)?;
        if !is_valid_web_access_slot(user_index, if_index) {
            return Err(HalError::InvalidArgument);
        }
        *level = self.web_access.get(&(user_index, if_index)).copied().unwrap_or(0);
        Ok(())
    }

    fn set_web_access_level(&mut self, user_index: u32, if_index: u32, level: u32) -> HalResult {
        if !is_valid_web_access_slot(user_index, if_index) || level > WEB_ACCESS_LEVEL_MAX {
            return Err(HalError::InvalidArgument);
        }
        self.web_access.insert((user_index, if_index), level);
        Ok(())
    }

    fn set_snmp_onboard_reboot_enable(&mut self, value: Option<&str>) -> HalResult {
        let value = required_input(value)?;
        if !SNMP_ONBOARD_REBOOT_VALUES.contains(&value) {
            return Err(HalError::InvalidArgument);
        }
        self.snmp_onboard_reboot = value == "enable";
        Ok(())
    }

    fn set_device_code_image_timeout(&mut self, secs: i32) -> HalResult {
        if !(0..=DCI_TIMEOUT_MAX).contains(&secs) {
            return Err(HalError::InvalidArgument);
        }
        self.dci_timeout = secs;
        Ok(())
    }

    fn set_device_code_image_valid(&mut self, valid: bool) -> HalResult {
        self.dci_valid = valid;
        Ok(())
    }
}

impl MemoryStats for SimulatedHal {
    fn get_total_memory_size(&mut self, kib: Option<&mut u64>) -> HalResult {
        *required(kib)? = RAM_TOTAL_KIB;
        Ok(())
    }

    fn get_used_memory_size(&mut self, kib: Option<&mut u64>) -> HalResult {
        *required(kib)? = RAM_USED_KIB;
        Ok(())
    }

    fn get_free_memory_size(&mut self, kib: Option<&mut u64>) -> HalResult {
        *required(kib)? = RAM_TOTAL_KIB.saturating_sub(RAM_USED_KIB);
        Ok(())
    }

    fn get_flash_size(&mut self, mib: Option<&mut u64>) -> HalResult {
        *required(mib)? = FLASH_TOTAL_MIB;
        Ok(())
    }

    fn get_flash_used(&mut self, mib: Option<&mut u64>) -> HalResult {
        *required(mib)? = FLASH_USED_MIB;
        Ok(())
    }

    fn get_flash_free(&mut self, mib: Option<&mut u64>) -> HalResult {
        *required(mib)? = FLASH_TOTAL_MIB.saturating_sub(FLASH_USED_MIB);
        Ok(())
    }

    fn get_factory_reset_count(&mut self, count: Option<&mut u32>) -> HalResult {
        *required(count)? = self.factory_resets;
        Ok(())
    }

    fn clear_reset_count(&mut self, clear: bool) -> HalResult {
        if clear {
            self.factory_resets = 0;
        }
        Ok(())
    }

    fn get_time_offset(&mut self, offset: Option<&mut InfoString>) -> HalResult {
        fill(required(offset)?, TIME_OFFSET)
    }

    fn get_cpu_speed(&mut self, mhz: Option<&mut InfoString>) -> HalResult {
        fill(required(mhz)?, CPU_SPEED)
    }

    fn get_interface_stats(&mut self, if_name: Option<&str>, stats: Option<&mut InterfaceStats>) -> HalResult {
        let stats = required(stats)?;
        let if_name = required_input(if_name)?;
        *stats = *self.interfaces.get(if_name).ok_or(HalError::InvalidArgument)?;
        Ok(())
    }

    fn get_memory_paths(&mut self, cpu: CpuKind, info: Option<&mut ProcMemInfo>) -> HalResult {
        let info = required(info)?;
        match cpu {
            CpuKind::Host => {
                fill(&mut info.dram_path, "/tmp")?;
                fill(&mut info.emmc_path, "/nvram")
            }
            CpuKind::Peer => Err(HalError::Unsupported),
            CpuKind::NotSupported => Err(HalError::InvalidArgument),
        }
    }
}

impl LedControl for SimulatedHal {
    fn init_led(&mut self, config_file: Option<&str>) -> HalResult {
        let config_file = required_input(config_file)?;
        if config_file != LED_CONFIG_PATH {
            return Err(HalError::InvalidArgument);
        }
        self.led_ready = true;
        self.led = LedParams::default();
        Ok(())
    }

    fn set_led(&mut self, params: Option<&LedParams>) -> HalResult {
        let params = required_input(params)?;
        if !params.is_valid() {
            return Err(HalError::InvalidArgument);
        }
        if !self.led_ready {
            return Err(HalError::Failure);
        }
        self.led = *params;
        Ok(())
    }

    fn get_led(&mut self, params: Option<&mut LedParams>) -> HalResult {
        let params = required(params)?;
        if !self.led_ready {
            return Err(HalError::Failure);
        }
        *params = self.led;
        Ok(())
    }
}

impl ThermalControl for SimulatedHal {
    fn get_fan_speed(&mut self, fan_index: u32) -> u32 {
        self.fan(fan_index)
            .map_or(0, |fan| fan.effective_speed().duty_percent())
    }

    fn get_rpm(&mut self, fan_index: u32) -> u32 {
        self.fan(fan_index)
            .filter(|fan| !fan.locked)
            .map_or(0, |fan| fan.effective_speed().duty_percent().saturating_mul(60))
    }

    fn get_rotor_lock(&mut self, fan_index: u32) -> i32 {
        let lock = match self.fan(fan_index) {
            Some(fan) if fan.locked => RotorLock::Locked,
            Some(_) => RotorLock::Unlocked,
            None => RotorLock::NotApplicable,
        };
        lock.code()
    }

    fn get_fan_status(&mut self, fan_index: u32) -> bool {
        self.fan(fan_index)
            .is_some_and(|fan| !fan.locked && fan.effective_speed() != FanSpeed::Off)
    }

    fn set_fan_max_override(&mut self, max_override: bool, fan_index: u32) -> HalResult {
        self.fan_mut(fan_index)?.max_override = max_override;
        Ok(())
    }

    fn set_fan_speed(&mut self, fan_index: u32, speed: FanSpeed, error: Option<&mut FanError>) -> HalResult {
        let error = required(error)?;
        let fan = self.fan_mut(fan_index)?;
        if fan.locked {
            *error = FanError::Hardware;
            return Err(HalError::Failure);
        }
        if fan.max_override && speed != FanSpeed::Max {
            *error = FanError::MaxOverrideSet;
            return Err(HalError::Failure);
        }
        fan.speed = speed;
        *error = FanError::None;
        Ok(())
    }

    fn get_input_current(&mut self, milliamps: Option<&mut i32>) -> HalResult {
        *required(milliamps)? = 1_500;
        Ok(())
    }

    fn get_input_power(&mut self, milliwatts: Option<&mut i32>) -> HalResult {
        *required(milliwatts)? = 12_000;
        Ok(())
    }

    fn get_fan_temperature(&mut self, celsius: Option<&mut i32>) -> HalResult {
        *required(celsius)? = 42;
        Ok(())
    }

    fn get_radio_temperature(&mut self, radio_index: u32, celsius: Option<&mut i32>) -> HalResult {
        let celsius = required(celsius)?;
        *celsius = usize::try_from(radio_index)
            .ok()
            .and_then(|i| RADIO_TEMPERATURES.get(i))
            .copied()
            .ok_or(HalError::InvalidArgument)?;
        Ok(())
    }
}

impl Macsec for SimulatedHal {
    fn get_macsec_enable(&mut self, eth_port: u32, enabled: Option<&mut bool>) -> HalResult {
        let enabled = required(enabled)?;
        *enabled = self.port_mut(eth_port)?.enabled;
        Ok(())
    }

    fn set_macsec_enable(&mut self, eth_port: u32, enabled: bool) -> HalResult {
        let port = self.port_mut(eth_port)?;
        port.enabled = enabled;
        if !enabled {
            port.running = false;
        }
        Ok(())
    }

    fn get_macsec_operational_status(&mut self, eth_port: u32, up: Option<&mut bool>) -> HalResult {
        let up = required(up)?;
        let port = self.port_mut(eth_port)?;
        *up = port.enabled && port.running;
        Ok(())
    }

    fn start_macsec(&mut self, eth_port: u32, timeout_secs: i32) -> HalResult {
        if timeout_secs < 0 {
            return Err(HalError::InvalidArgument);
        }
        let port = self.port_mut(eth_port)?;
        if !port.enabled {
            return Err(HalError::Failure);
        }
        port.running = true;
        Ok(())
    }

    fn stop_macsec(&mut self, eth_port: u32) -> HalResult {
        self.port_mut(eth_port)?.running = false;
        Ok(())
    }
}

impl DhcpOptions for SimulatedHal {
    fn get_dhcpv4_options(
        &mut self,
        requested: Option<&mut DhcpOptionList>,
        sent: Option<&mut DhcpOptionList>,
    ) -> HalResult {
        let (requested, sent) = (required(requested)?, required(sent)?);
        fill_list(requested, DHCPV4_REQUESTED)?;
        fill_list(sent, DHCPV4_SENT)
    }

    fn get_dhcpv6_options(
        &mut self,
        requested: Option<&mut DhcpOptionList>,
        sent: Option<&mut DhcpOptionList>,
    ) -> HalResult {
        let (requested, sent) = (required(requested)?, required(sent)?);
        fill_list(requested, DHCPV6_REQUESTED)?;
        fill_list(sent, DHCPV6_SENT)
    }
}

impl DscpControl for SimulatedHal {
    fn set_dscp(
        &mut self,
        interface: WanInterface,
        command: TrafficCountCommand,
        dscp_list: Option<&str>,
    ) -> HalResult {
        match command {
            TrafficCountCommand::Start => {
                let set = DscpSet::parse(required_input(dscp_list)?)?;
                *self.dscp_slot(interface) = Some(set);
            }
            TrafficCountCommand::Stop => *self.dscp_slot(interface) = None,
        }
        Ok(())
    }

    fn get_dscp_client_list(&mut self, interface: WanInterface, clients: Option<&mut DscpClientList>) -> HalResult {
        let clients = required(clients)?;
        clients.clear();
        let Some(set) = self.dscp_counting(interface) else {
            return Ok(());
        };
        for mac in &self.dscp_clients {
            let mut client = DscpClient {
                mac: *mac,
                counts: heapless::Vec::new(),
            };
            for dscp in set.values() {
                let scale = u64::from(*dscp).saturating_add(1);
                let count = DscpCount {
                    dscp: *dscp,
                    rx_bytes: scale.saturating_mul(1_000),
                    tx_bytes: scale.saturating_mul(400),
                };
                if client.counts.push(count).is_err() {
                    break;
                }
            }
            clients.push(client).map_err(|_| HalError::Failure)?;
        }
        Ok(())
    }
}

impl PowerControl for SimulatedHal {
    fn set_low_power_mode_state(&mut self, state: Option<PsmState>) -> HalResult {
        self.psm_state = Some(state.ok_or(HalError::NullPointer)?);
        Ok(())
    }
}

impl FirmwareBanks for SimulatedHal {
    fn get_firmware_bank_info(&mut self, bank: FwBank, info: Option<&mut FwBankInfo>) -> HalResult {
        let info = required(info)?;
        let (name, state) = match bank {
            FwBank::Active => (SOFTWARE_VERSION, FwImageState::Active),
            FwBank::Inactive => (STANDBY_IMAGE, FwImageState::Inactive),
        };
        fill(&mut info.image_name, name)?;
        info.image_type = FwImageType::Pci;
        info.state = state;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::status::{status_code, RETURN_ERR, RETURN_OK};

    #[test]
    fn test_simulated_identity() {
        let mut hal = SimulatedHal::default();
        let mut mac = InfoString::new();
        hal.get_base_mac_address(Some(&mut mac)).unwrap();
        let parsed = MacAddress::parse(&mac).unwrap();
        assert!(!parsed.is_zero());
        assert!(!parsed.is_multicast());
    }

    #[test]
    fn test_null_output_leaves_state() {
        let mut hal = SimulatedHal::default();
        hal.set_telnet_enable(true).unwrap();
        assert_eq!(hal.get_telnet_enable(None), Err(HalError::NullPointer));
        let mut enabled = false;
        hal.get_telnet_enable(Some(&mut enabled)).unwrap();
        assert!(enabled);
    }

    #[test]
    fn test_fan_override_blocks_speed_change() {
        let mut hal = SimulatedHal::default();
        let mut err = FanError::None;
        hal.set_fan_max_override(true, 0).unwrap();
        assert_eq!(hal.get_fan_speed(0), 100);
        let result = hal.set_fan_speed(0, FanSpeed::Slow, Some(&mut err));
        assert_eq!(status_code(&result), RETURN_ERR);
        assert_eq!(err, FanError::MaxOverrideSet);

        hal.set_fan_max_override(false, 0).unwrap();
        hal.set_fan_speed(0, FanSpeed::Slow, Some(&mut err)).unwrap();
        assert_eq!(err, FanError::None);
        assert_eq!(hal.get_fan_speed(0), 25);
    }

    #[test]
    fn test_locked_rotor_reports_fault() {
        let mut hal = SimulatedHal::default();
        hal.lock_rotor(1).unwrap();
        assert_eq!(hal.get_rotor_lock(1), RotorLock::Locked.code());
        assert_eq!(hal.get_rpm(1), 0);
        assert!(!hal.get_fan_status(1));
        assert_eq!(hal.get_rotor_lock(MAX_FANS), RotorLock::NotApplicable.code());
    }

    #[test]
    fn test_macsec_port_bounds() {
        let mut hal = SimulatedHal::new(2);
        let mut up = true;
        assert_eq!(hal.start_macsec(0, 10), Err(HalError::Failure));
        hal.set_macsec_enable(0, true).unwrap();
        hal.start_macsec(0, 10).unwrap();
        hal.get_macsec_operational_status(0, Some(&mut up)).unwrap();
        assert!(up);
        assert_eq!(hal.set_macsec_enable(2, true), Err(HalError::InvalidArgument));
        assert_eq!(hal.start_macsec(0, -1), Err(HalError::InvalidArgument));
    }

    #[test]
    fn test_macsec_ports_are_created_on_use() {
        let mut hal = SimulatedHal::new(u32::MAX);
        assert_eq!(hal.eth_ports(), u32::MAX);
        assert!(hal.macsec.is_empty());

        let last = u32::MAX - 1;
        let mut enabled = true;
        hal.get_macsec_enable(last, Some(&mut enabled)).unwrap();
        assert!(!enabled);
        hal.set_macsec_enable(last, true).unwrap();
        hal.start_macsec(last, 10).unwrap();
        assert_eq!(hal.macsec.len(), 1);
        assert_eq!(hal.stop_macsec(u32::MAX), Err(HalError::InvalidArgument));
    }

    #[test]
    fn test_dscp_counting_lifecycle() {
        let mut hal = SimulatedHal::default();
        let mut clients = DscpClientList::new();
        hal.set_dscp(WanInterface::Docsis, TrafficCountCommand::Start, Some("10,46"))
            .unwrap();
        hal.get_dscp_client_list(WanInterface::Docsis, Some(&mut clients))
            .unwrap();
        assert_eq!(clients.len(), 2);
        assert!(clients.iter().all(|c| c.counts.len() == 2));

        hal.get_dscp_client_list(WanInterface::Ewan, Some(&mut clients)).unwrap();
        assert!(clients.is_empty());

        hal.set_dscp(WanInterface::Docsis, TrafficCountCommand::Stop, None).unwrap();
        assert!(hal.dscp_counting(WanInterface::Docsis).is_none());
    }

    #[test]
    fn test_led_requires_init() {
        let mut hal = SimulatedHal::default();
        let params = LedParams::solid(crate::led::LedColor::Green);
        assert_eq!(hal.set_led(Some(&params)), Err(HalError::Failure));
        hal.init_led(Some(LED_CONFIG_PATH)).unwrap();
        assert_eq!(status_code(&hal.set_led(Some(&params))), RETURN_OK);
        let mut read = LedParams::default();
        hal.get_led(Some(&mut read)).unwrap();
        assert_eq!(read, params);
    }
}
