//! Return-code convention shared by every HAL operation
//!
//! The C contract reports status as `INT`: `RETURN_OK` (0) or `RETURN_ERR`
//! (-1). In Rust an operation returns [`HalResult`]; [`status_code`] recovers
//! the wire value for reporting.

/// Generic success code of the C contract.
pub const RETURN_OK: i32 = 0;

/// Generic error code of the C contract.
pub const RETURN_ERR: i32 = -1;

/// Why a HAL operation failed.
///
/// All variants collapse to [`RETURN_ERR`] on the wire; the distinction only
/// exists to make test reports readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalError {
    /// A required output (or input) buffer was not supplied.
    NullPointer,
    /// An argument was outside its documented domain.
    InvalidArgument,
    /// The platform does not provide this operation.
    Unsupported,
    /// The device rejected or failed the operation.
    Failure,
}

impl HalError {
    /// Wire status code for this error.
    pub const fn code(self) -> i32 {
        RETURN_ERR
    }
}

impl core::fmt::Display for HalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NullPointer => write!(f, "null pointer argument"),
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::Unsupported => write!(f, "operation not supported"),
            Self::Failure => write!(f, "operation failed"),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for HalError {}

/// Result of a status-returning HAL operation.
pub type HalResult<T = ()> = Result<T, HalError>;

/// Map a HAL result onto the C status code.
pub fn status_code<T>(result: &HalResult<T>) -> i32 {
    match result {
        Ok(_) => RETURN_OK,
        Err(err) => err.code(),
    }
}

/// Resolve an output parameter, failing with [`HalError::NullPointer`] when absent.
///
/// Implementations call this first so a `None` output leaves all state untouched.
pub fn required<T: ?Sized>(slot: Option<&mut T>) -> HalResult<&mut T> {
    slot.ok_or(HalError::NullPointer)
}

/// Resolve an input reference, failing with [`HalError::NullPointer`] when absent.
pub fn required_input<T: ?Sized>(value: Option<&T>) -> HalResult<&T> {
    value.ok_or(HalError::NullPointer)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(status_code(&Ok::<(), HalError>(())), RETURN_OK);
        assert_eq!(status_code::<()>(&Err(HalError::NullPointer)), RETURN_ERR);
        assert_eq!(status_code::<u32>(&Err(HalError::Unsupported)), RETURN_ERR);
    }

    #[test]
    fn test_required_rejects_none() {
        let mut value = 7u32;
        assert_eq!(required(Some(&mut value)).map(|v| *v), Ok(7));
        assert_eq!(required::<u32>(None), Err(HalError::NullPointer));
        assert_eq!(required_input::<str>(None), Err(HalError::NullPointer));
    }
}
