//! Test outcomes and check macros
//!
//! A test body returns [`TestResult`]. The check macros return early with a
//! [`Failure`] carrying the source location, so the first failed check ends
//! that test only; the runner carries on with the next one.

/// Outcome of one test body or suite setup.
pub type TestResult = Result<(), Failure>;

/// A failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// What went wrong
    pub message: String,
    /// Source file of the failed check
    pub file: &'static str,
    /// Source line of the failed check
    pub line: u32,
}

impl Failure {
    /// Create a failure at `file:line`.
    pub fn new(message: impl Into<String>, file: &'static str, line: u32) -> Self {
        Self {
            message: message.into(),
            file,
            line,
        }
    }
}

impl core::fmt::Display for Failure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({}:{})", self.message, self.file, self.line)
    }
}

impl std::error::Error for Failure {}

/// Fail the current test with a formatted message.
#[macro_export]
macro_rules! fail {
    ($($arg:tt)+) => {
        return Err($crate::Failure::new(format!($($arg)+), file!(), line!()))
    };
}

/// Fail the current test unless `cond` holds.
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        $crate::check!($cond, "check failed: {}", stringify!($cond))
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::fail!($($arg)+);
        }
    };
}

/// Fail the current test unless both values are equal.
#[macro_export]
macro_rules! check_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if *left != *right {
                    return Err($crate::Failure::new(
                        format!(
                            "{} == {}: left `{:?}`, right `{:?}`",
                            stringify!($left),
                            stringify!($right),
                            left,
                            right
                        ),
                        file!(),
                        line!(),
                    ));
                }
            }
        }
    };
}

/// Expect `RETURN_OK` from a HAL call; evaluates to the call's value.
#[macro_export]
macro_rules! check_ok {
    ($call:expr $(,)?) => {
        match $call {
            Ok(value) => value,
            Err(err) => {
                return Err($crate::Failure::new(
                    format!(
                        "{}: expected RETURN_OK, got RETURN_ERR ({})",
                        stringify!($call),
                        err
                    ),
                    file!(),
                    line!(),
                ));
            }
        }
    };
}

/// Expect `RETURN_ERR` from a HAL call.
#[macro_export]
macro_rules! check_err {
    ($call:expr $(,)?) => {
        if $call.is_ok() {
            return Err($crate::Failure::new(
                format!("{}: expected RETURN_ERR, got RETURN_OK", stringify!($call)),
                file!(),
                line!(),
            ));
        }
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use platform_hal::{HalError, HalResult};

    fn passes() -> TestResult {
        check!(1 + 1 == 2);
        check_eq!(3u32, 3u32);
        let value = check_ok!(HalResult::Ok(5u32));
        check_eq!(value, 5);
        check_err!(HalResult::<()>::Err(HalError::InvalidArgument));
        Ok(())
    }

    fn fails_on_eq() -> TestResult {
        check_eq!(1u8, 2u8);
        Ok(())
    }

    fn fails_on_ok() -> TestResult {
        check_ok!(HalResult::<()>::Err(HalError::NullPointer));
        Ok(())
    }

    fn fails_on_err() -> TestResult {
        check_err!(HalResult::Ok(()));
        Ok(())
    }

    #[test]
    fn test_checks_pass() {
        assert_eq!(passes(), Ok(()));
    }

    #[test]
    fn test_failures_carry_message_and_location() {
        let failure = fails_on_eq().unwrap_err();
        assert!(failure.message.contains("left `1`, right `2`"));
        assert!(failure.file.ends_with("check.rs"));

        let failure = fails_on_ok().unwrap_err();
        assert!(failure.message.contains("expected RETURN_OK"));
        assert!(failure.message.contains("null pointer"));

        let failure = fails_on_err().unwrap_err();
        assert!(failure.message.contains("expected RETURN_ERR"));
    }
}
