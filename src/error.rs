use core::fmt::{Debug, Display, Formatter};

/// Short version of `Err(error("..."))`.
pub(crate) fn err<T>(msg: &'static str) -> Result<T, Error> {
    Err(error(msg))
}

/// Creates an error with a message that might be displayed.
pub(crate) fn error(_msg: &'static str) -> Error {
    #[cfg(debug_assertions)]
    return Error(_msg);
    #[cfg(not(debug_assertions))]
    Error(())
}

#[cfg(debug_assertions)]
type ErrorImpl = &'static str;
#[cfg(not(debug_assertions))]
type ErrorImpl = ();

/// A field was out of range for a real calendar instant, or a host date-time type couldn't
/// represent the value.
///
/// Only the validating constructors and the host date-time conversions return this. Plain
/// construction never fails.
/// # Debug mode
/// In debug mode, the error contains a reason.
/// # Release mode
/// In release mode, the error is a zero-sized type for efficiency.
#[derive(Clone, PartialEq, Eq)]
pub struct Error(ErrorImpl);
impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        #[cfg(debug_assertions)]
        return write!(f, "Error({:?})", self.0);
        #[cfg(not(debug_assertions))]
        f.write_str("Error(\"smalltime error\")")
    }
}
impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        #[cfg(debug_assertions)]
        return f.write_str(self.0);
        #[cfg(not(debug_assertions))]
        f.write_str("smalltime error")
    }
}
#[cfg(feature = "std")]
impl std::error::Error for Error {}
