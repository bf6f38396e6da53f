//! Per-run state handed to every test body

use platform_hal::PlatformHal;

use crate::config::PlatformConfig;

/// What a test body can reach: the HAL under test and the platform facts.
pub struct TestContext<'a> {
    hal: &'a mut dyn PlatformHal,
    config: &'a PlatformConfig,
}

impl<'a> TestContext<'a> {
    /// Bind a HAL implementation and configuration for one run.
    pub fn new(hal: &'a mut dyn PlatformHal, config: &'a PlatformConfig) -> Self {
        Self { hal, config }
    }

    /// HAL under test.
    pub fn hal(&mut self) -> &mut (dyn PlatformHal + 'a) {
        &mut *self.hal
    }

    /// Platform configuration loaded at startup.
    pub fn config(&self) -> &PlatformConfig {
        self.config
    }

    /// Shorthand for `config().max_eth_port`.
    pub fn max_eth_port(&self) -> u32 {
        self.config.max_eth_port
    }
}
