//! Success-or-failure outcome type with a small composition algebra.
//!
//! An [`Outcome`] holds either the expected value of an operation or a
//! failure payload describing what went wrong, never both. Chains are built
//! from the consuming combinators and torn down by the extractors; the
//! [`FailurePayload`] capability decides how the raising extractors panic.
//!
//! ```
//! use outcome::Outcome;
//!
//! let outcome: Outcome<i32, String> = Outcome::Success(21);
//! let doubled = outcome.map(|value| value * 2);
//! assert_eq!(doubled.unwrap(), 42);
//! ```

pub mod error;
pub mod outcome;
pub mod payload;

pub use crate::error::{InvalidStateError, WrappedFailure};
pub use crate::outcome::{Outcome, Tag};
pub use crate::payload::FailurePayload;
pub use macros::FailurePayload;
