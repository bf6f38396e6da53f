//! Fans and thermal sensors (thermal manager platforms only)
//!
//! The raw-value getters have no error channel; an out-of-range fan index
//! shows up as [`RotorLock::NotApplicable`] from `get_rotor_lock`.

use platform_hal::thermal::{FAN_RPM_MAX, MAX_FANS, MAX_RADIOS, TEMPERATURE_RANGE};
use platform_hal::{FanError, FanSpeed, RotorLock};

use crate::registry::TableEntry;
use crate::{check, check_eq, check_err, check_ok, TestContext, TestResult};

pub(super) const TESTS: &[TableEntry] = crate::test_table![ThermalManager =>
    get_fan_speed_positive,
    get_rpm_positive,
    get_rotor_lock_positive,
    get_rotor_lock_invalid_fan,
    get_fan_status_positive,
    set_fan_max_override_positive,
    set_fan_max_override_invalid_fan,
    set_fan_speed_positive,
    set_fan_speed_negative,
    set_fan_speed_blocked_by_override,
    get_input_current_positive,
    get_input_current_null,
    get_input_power_positive,
    get_input_power_null,
    get_fan_temperature_positive,
    get_fan_temperature_null,
    get_radio_temperature_positive,
    get_radio_temperature_negative,
];

fn get_fan_speed_positive(ctx: &mut TestContext<'_>) -> TestResult {
    for fan in 0..MAX_FANS {
        let duty = ctx.hal().get_fan_speed(fan);
        check!(
            FanSpeed::ALL.iter().any(|s| s.duty_percent() == duty),
            "fan {fan}: speed {duty}% is not a fan setting"
        );
    }
    Ok(())
}

fn get_rpm_positive(ctx: &mut TestContext<'_>) -> TestResult {
    for fan in 0..MAX_FANS {
        let rpm = ctx.hal().get_rpm(fan);
        check!(rpm <= FAN_RPM_MAX, "fan {fan}: {rpm} rpm above {FAN_RPM_MAX}");
    }
    Ok(())
}

fn get_rotor_lock_positive(ctx: &mut TestContext<'_>) -> TestResult {
    for fan in 0..MAX_FANS {
        let code = ctx.hal().get_rotor_lock(fan);
        check!(
            matches!(RotorLock::from_code(code), Some(RotorLock::Locked | RotorLock::Unlocked)),
            "fan {fan}: rotor lock code {code}"
        );
    }
    Ok(())
}

fn get_rotor_lock_invalid_fan(ctx: &mut TestContext<'_>) -> TestResult {
    check_eq!(ctx.hal().get_rotor_lock(MAX_FANS), RotorLock::NotApplicable.code());
    Ok(())
}

fn get_fan_status_positive(ctx: &mut TestContext<'_>) -> TestResult {
    for fan in 0..MAX_FANS {
        let mut error = FanError::None;
        check_ok!(ctx.hal().set_fan_max_override(false, fan));
        check_ok!(ctx.hal().set_fan_speed(fan, FanSpeed::Medium, Some(&mut error)));
        check!(ctx.hal().get_fan_status(fan), "fan {fan} not running at medium speed");
    }
    Ok(())
}

fn set_fan_max_override_positive(ctx: &mut TestContext<'_>) -> TestResult {
    for fan in 0..MAX_FANS {
        check_ok!(ctx.hal().set_fan_max_override(true, fan));
        check_eq!(ctx.hal().get_fan_speed(fan), FanSpeed::Max.duty_percent());
        check_ok!(ctx.hal().set_fan_max_override(false, fan));
    }
    Ok(())
}

fn set_fan_max_override_invalid_fan(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().set_fan_max_override(true, MAX_FANS));
    Ok(())
}

fn set_fan_speed_positive(ctx: &mut TestContext<'_>) -> TestResult {
    for fan in 0..MAX_FANS {
        check_ok!(ctx.hal().set_fan_max_override(false, fan));
        for speed in FanSpeed::ALL {
            let mut error = FanError::Hardware;
            check_ok!(ctx.hal().set_fan_speed(fan, speed, Some(&mut error)));
            check_eq!(error, FanError::None);
            check_eq!(ctx.hal().get_fan_speed(fan), speed.duty_percent());
        }
        let mut error = FanError::None;
        check_ok!(ctx.hal().set_fan_speed(fan, FanSpeed::Medium, Some(&mut error)));
    }
    Ok(())
}

fn set_fan_speed_negative(ctx: &mut TestContext<'_>) -> TestResult {
    let mut error = FanError::None;
    check_err!(ctx.hal().set_fan_speed(0, FanSpeed::Slow, None));
    check_err!(ctx.hal().set_fan_speed(MAX_FANS, FanSpeed::Slow, Some(&mut error)));
    Ok(())
}

fn set_fan_speed_blocked_by_override(ctx: &mut TestContext<'_>) -> TestResult {
    let mut error = FanError::None;
    check_ok!(ctx.hal().set_fan_max_override(true, 0));
    let refused = ctx.hal().set_fan_speed(0, FanSpeed::Slow, Some(&mut error));
    check_ok!(ctx.hal().set_fan_max_override(false, 0));

    check_err!(refused);
    check_eq!(error, FanError::MaxOverrideSet);
    Ok(())
}

fn get_input_current_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut milliamps = -1;
    check_ok!(ctx.hal().get_input_current(Some(&mut milliamps)));
    check!(milliamps >= 0, "negative input current {milliamps} mA");
    Ok(())
}

fn get_input_current_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_input_current(None));
    Ok(())
}

fn get_input_power_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut milliwatts = -1;
    check_ok!(ctx.hal().get_input_power(Some(&mut milliwatts)));
    check!(milliwatts >= 0, "negative input power {milliwatts} mW");
    Ok(())
}

fn get_input_power_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_input_power(None));
    Ok(())
}

fn get_fan_temperature_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut celsius = i32::MIN;
    check_ok!(ctx.hal().get_fan_temperature(Some(&mut celsius)));
    check!(TEMPERATURE_RANGE.contains(&celsius), "fan temperature {celsius}°C out of range");
    Ok(())
}

fn get_fan_temperature_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_fan_temperature(None));
    Ok(())
}

fn get_radio_temperature_positive(ctx: &mut TestContext<'_>) -> TestResult {
    for radio in 0..MAX_RADIOS {
        let mut celsius = i32::MIN;
        check_ok!(ctx.hal().get_radio_temperature(radio, Some(&mut celsius)));
        check!(
            TEMPERATURE_RANGE.contains(&celsius),
            "radio {radio}: temperature {celsius}°C out of range"
        );
    }
    Ok(())
}

fn get_radio_temperature_negative(ctx: &mut TestContext<'_>) -> TestResult {
    let mut celsius = 0;
    check_err!(ctx.hal().get_radio_temperature(0, None));
    check_err!(ctx.hal().get_radio_temperature(MAX_RADIOS, Some(&mut celsius)));
    Ok(())
}
