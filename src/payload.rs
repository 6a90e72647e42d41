use std::error::Error;
use std::fmt::Display;

use crate::error::{InvalidStateError, WrappedFailure};

/// Capability required of failure payloads handed to the raising extractors.
///
/// Every payload has to render as human-readable text (the `Display`
/// supertrait), because failure values end up interpolated into diagnostics
/// and wrapped errors. Payloads that are real errors additionally expose
/// themselves through [`as_error`](FailurePayload::as_error), which lets the
/// raising extractors re-raise them unchanged instead of wrapping them.
pub trait FailurePayload: Display {
    /// Returns the payload as a standard error when it is one.
    ///
    /// The default is `None`: plain text payloads are not error-shaped and
    /// get wrapped into a `WrappedFailure` when raised.
    fn as_error(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl FailurePayload for String {}

impl FailurePayload for &str {}

/// Macro for faster FailurePayload implementations for error types.
macro_rules! error_payload {
    ($type:ty) => {
        impl FailurePayload for $type {
            fn as_error(&self) -> Option<&(dyn Error + 'static)> {
                Some(self)
            }
        }
    };
}

error_payload!(std::io::Error);
error_payload!(std::fmt::Error);
error_payload!(std::num::ParseIntError);
error_payload!(std::num::ParseFloatError);
error_payload!(std::str::Utf8Error);
error_payload!(std::string::FromUtf8Error);

error_payload!(WrappedFailure);
error_payload!(InvalidStateError);

/// `anyhow::Error` is not `std::error::Error` itself, so it cannot go
/// through the macro; it exposes its inner error instead.
impl FailurePayload for anyhow::Error {
    fn as_error(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.as_ref())
    }
}
