//! Memory, flash and system counters

use platform_hal::memory::{parse_cpu_mhz, parse_time_offset};
use platform_hal::{CpuKind, InfoString, InterfaceStats, ProcMemInfo};

use crate::registry::TableEntry;
use crate::{check, check_eq, check_err, check_ok, TestContext, TestResult};

/// WAN-side interface every RDK-B image brings up.
pub(crate) const WAN_INTERFACE: &str = "erouter0";

pub(super) const TESTS: &[TableEntry] = crate::test_table![
    get_total_memory_size_positive,
    get_total_memory_size_null,
    get_used_memory_size_positive,
    get_used_memory_size_null,
    get_free_memory_size_positive,
    get_free_memory_size_null,
    get_flash_size_positive,
    get_flash_size_null,
    get_flash_used_positive,
    get_flash_used_null,
    get_flash_free_positive,
    get_flash_free_null,
    get_factory_reset_count_positive,
    get_factory_reset_count_null,
    clear_reset_count_positive,
    get_time_offset_positive,
    get_time_offset_null,
    get_cpu_speed_positive,
    get_cpu_speed_null,
    get_interface_stats_positive,
    get_interface_stats_negative,
    get_memory_paths_positive,
    get_memory_paths_negative,
];

fn get_total_memory_size_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut kib = 0;
    check_ok!(ctx.hal().get_total_memory_size(Some(&mut kib)));
    check!(kib > 0, "total memory is zero");
    Ok(())
}

fn get_total_memory_size_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_total_memory_size(None));
    Ok(())
}

fn get_used_memory_size_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let (mut total, mut used) = (0, u64::MAX);
    check_ok!(ctx.hal().get_total_memory_size(Some(&mut total)));
    check_ok!(ctx.hal().get_used_memory_size(Some(&mut used)));
    check!(used <= total, "used memory {used} KiB exceeds total {total} KiB");
    Ok(())
}

fn get_used_memory_size_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_used_memory_size(None));
    Ok(())
}

fn get_free_memory_size_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let (mut total, mut used, mut free) = (0, u64::MAX, u64::MAX);
    check_ok!(ctx.hal().get_total_memory_size(Some(&mut total)));
    check_ok!(ctx.hal().get_used_memory_size(Some(&mut used)));
    check_ok!(ctx.hal().get_free_memory_size(Some(&mut free)));
    check_eq!(used.checked_add(free), Some(total));
    Ok(())
}

fn get_free_memory_size_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_free_memory_size(None));
    Ok(())
}

fn get_flash_size_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut mib = 0;
    check_ok!(ctx.hal().get_flash_size(Some(&mut mib)));
    check!(mib > 0, "flash size is zero");
    Ok(())
}

fn get_flash_size_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_flash_size(None));
    Ok(())
}

fn get_flash_used_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let (mut total, mut used) = (0, u64::MAX);
    check_ok!(ctx.hal().get_flash_size(Some(&mut total)));
    check_ok!(ctx.hal().get_flash_used(Some(&mut used)));
    check!(used <= total, "used flash {used} MiB exceeds total {total} MiB");
    Ok(())
}

fn get_flash_used_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_flash_used(None));
    Ok(())
}

fn get_flash_free_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let (mut total, mut used, mut free) = (0, u64::MAX, u64::MAX);
    check_ok!(ctx.hal().get_flash_size(Some(&mut total)));
    check_ok!(ctx.hal().get_flash_used(Some(&mut used)));
    check_ok!(ctx.hal().get_flash_free(Some(&mut free)));
    check_eq!(used.checked_add(free), Some(total));
    Ok(())
}

fn get_flash_free_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_flash_free(None));
    Ok(())
}

fn get_factory_reset_count_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut count = 0;
    check_ok!(ctx.hal().get_factory_reset_count(Some(&mut count)));
    Ok(())
}

fn get_factory_reset_count_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_factory_reset_count(None));
    Ok(())
}

fn clear_reset_count_positive(ctx: &mut TestContext<'_>) -> TestResult {
    check_ok!(ctx.hal().clear_reset_count(true));
    let mut count = u32::MAX;
    check_ok!(ctx.hal().get_factory_reset_count(Some(&mut count)));
    check_eq!(count, 0);

    check_ok!(ctx.hal().clear_reset_count(false));
    check_ok!(ctx.hal().get_factory_reset_count(Some(&mut count)));
    check_eq!(count, 0);
    Ok(())
}

fn get_time_offset_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut offset = InfoString::new();
    check_ok!(ctx.hal().get_time_offset(Some(&mut offset)));
    check!(
        parse_time_offset(&offset).is_some(),
        "time offset {offset:?} is not a whole number of seconds within a day"
    );
    Ok(())
}

fn get_time_offset_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_time_offset(None));
    Ok(())
}

fn get_cpu_speed_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut speed = InfoString::new();
    check_ok!(ctx.hal().get_cpu_speed(Some(&mut speed)));
    check!(parse_cpu_mhz(&speed).is_some(), "CPU speed {speed:?} has no MHz value");
    Ok(())
}

fn get_cpu_speed_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_cpu_speed(None));
    Ok(())
}

fn get_interface_stats_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut stats = InterfaceStats::default();
    check_ok!(ctx.hal().get_interface_stats(Some(WAN_INTERFACE), Some(&mut stats)));
    check!(
        stats.rx_bytes >= stats.rx_packets && stats.tx_bytes >= stats.tx_packets,
        "{WAN_INTERFACE}: byte counters below packet counters: {stats:?}"
    );
    Ok(())
}

fn get_interface_stats_negative(ctx: &mut TestContext<'_>) -> TestResult {
    let mut stats = InterfaceStats::default();
    check_err!(ctx.hal().get_interface_stats(Some(WAN_INTERFACE), None));
    check_err!(ctx.hal().get_interface_stats(None, Some(&mut stats)));
    check_err!(ctx.hal().get_interface_stats(Some("nosuch0"), Some(&mut stats)));
    Ok(())
}

fn get_memory_paths_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut info = ProcMemInfo::default();
    check_ok!(ctx.hal().get_memory_paths(CpuKind::Host, Some(&mut info)));
    check!(info.dram_path.starts_with('/'), "DRAM path {:?} is not absolute", info.dram_path);
    check!(info.emmc_path.starts_with('/'), "eMMC path {:?} is not absolute", info.emmc_path);
    Ok(())
}

fn get_memory_paths_negative(ctx: &mut TestContext<'_>) -> TestResult {
    let mut info = ProcMemInfo::default();
    check_err!(ctx.hal().get_memory_paths(CpuKind::Host, None));
    check_err!(ctx.hal().get_memory_paths(CpuKind::NotSupported, Some(&mut info)));
    Ok(())
}
