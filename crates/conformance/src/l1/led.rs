//! Front panel LED (LED manager platforms only)

use platform_hal::led::{LED_BLINK_INTERVAL_MAX, LED_CONFIG_PATH};
use platform_hal::{LedColor, LedParams, LedState};

use crate::registry::TableEntry;
use crate::{check, check_eq, check_err, check_ok, TestContext, TestResult};

const COLORS: [LedColor; 6] = [
    LedColor::White,
    LedColor::Yellow,
    LedColor::Green,
    LedColor::Red,
    LedColor::Blue,
    LedColor::Purple,
];

pub(super) const TESTS: &[TableEntry] = crate::test_table![LedManager =>
    init_led_positive,
    init_led_negative,
    set_led_positive,
    set_led_negative,
    get_led_positive,
    get_led_null,
];

fn init_led_positive(ctx: &mut TestContext<'_>) -> TestResult {
    check_ok!(ctx.hal().init_led(Some(LED_CONFIG_PATH)));
    Ok(())
}

fn init_led_negative(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().init_led(None));
    check_err!(ctx.hal().init_led(Some("")));
    check_err!(ctx.hal().init_led(Some("/nonexistent/led_config.json")));
    Ok(())
}

fn set_led_positive(ctx: &mut TestContext<'_>) -> TestResult {
    check_ok!(ctx.hal().init_led(Some(LED_CONFIG_PATH)));

    for color in COLORS {
        for params in [
            LedParams::solid(color),
            LedParams::blink(color, 1),
            LedParams::blink(color, LED_BLINK_INTERVAL_MAX),
        ] {
            check_ok!(ctx.hal().set_led(Some(&params)));
            let mut read = LedParams::default();
            check_ok!(ctx.hal().get_led(Some(&mut read)));
            check_eq!(read, params);
        }
    }
    Ok(())
}

fn set_led_negative(ctx: &mut TestContext<'_>) -> TestResult {
    check_ok!(ctx.hal().init_led(Some(LED_CONFIG_PATH)));

    check_err!(ctx.hal().set_led(None));
    check_err!(ctx.hal().set_led(Some(&LedParams::solid(LedColor::NotSupported))));
    check_err!(ctx.hal().set_led(Some(&LedParams::blink(LedColor::Red, 0))));
    check_err!(ctx
        .hal()
        .set_led(Some(&LedParams::blink(LedColor::Red, LED_BLINK_INTERVAL_MAX.saturating_add(1)))));
    check_err!(ctx.hal().set_led(Some(&LedParams {
        color: LedColor::Green,
        state: LedState::Solid,
        interval_secs: 5,
    })));
    Ok(())
}

fn get_led_positive(ctx: &mut TestContext<'_>) -> TestResult {
    check_ok!(ctx.hal().init_led(Some(LED_CONFIG_PATH)));
    let mut params = LedParams::solid(LedColor::NotSupported);
    check_ok!(ctx.hal().get_led(Some(&mut params)));
    check!(params.is_valid(), "LED reports invalid settings {params:?}");
    Ok(())
}

fn get_led_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_ok!(ctx.hal().init_led(Some(LED_CONFIG_PATH)));
    check_err!(ctx.hal().get_led(None));
    Ok(())
}
