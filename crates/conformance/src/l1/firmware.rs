//! Firmware image banks

use platform_hal::{FwBank, FwBankInfo, FwImageState};

use crate::registry::TableEntry;
use crate::{check, check_eq, check_err, check_ok, TestContext, TestResult};

pub(super) const TESTS: &[TableEntry] = crate::test_table![
    get_firmware_bank_info_positive,
    get_firmware_bank_info_null,
];

fn get_firmware_bank_info_positive(ctx: &mut TestContext<'_>) -> TestResult {
    for bank in FwBank::ALL {
        let mut info = FwBankInfo::default();
        check_ok!(ctx.hal().get_firmware_bank_info(bank, Some(&mut info)));
        check!(!info.image_name.is_empty(), "{bank:?} bank has no image name");
        if bank == FwBank::Active {
            check_eq!(info.state, FwImageState::Active);
        }
    }
    Ok(())
}

fn get_firmware_bank_info_null(ctx: &mut TestContext<'_>) -> TestResult {
    for bank in FwBank::ALL {
        check_err!(ctx.hal().get_firmware_bank_info(bank, None));
    }
    Ok(())
}
