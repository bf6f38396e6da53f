//! Power state manager

use platform_hal::PsmState;

use crate::registry::TableEntry;
use crate::{check_err, check_ok, TestContext, TestResult};

pub(super) const TESTS: &[TableEntry] = crate::test_table![
    set_low_power_mode_state_positive,
    set_low_power_mode_state_null,
];

// Every state once, ending back on mains power.
fn set_low_power_mode_state_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let states = PsmState::ALL.into_iter().filter(|s| *s != PsmState::Ac);
    for state in states.chain([PsmState::Ac]) {
        check_ok!(ctx.hal().set_low_power_mode_state(Some(state)));
    }
    Ok(())
}

fn set_low_power_mode_state_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().set_low_power_mode_state(None));
    Ok(())
}
