use std::fmt::{self, Debug, Display};
use std::panic;

use log::error;

use crate::error::{InvalidStateError, WrappedFailure};
use crate::payload::FailurePayload;

/// Discriminant of an [`Outcome`], exposed as a value so raw construction,
/// decomposition and diagnostics can name the active slot without a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Success,
    Failure,
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Tag::Success => "Success",
            Tag::Failure => "Failure",
        })
    }
}

/// Holds either the expected value of an operation or a failure payload
/// describing what went wrong, never both.
///
/// Values flow through chains of consuming combinators (`map`, `map_err`,
/// `and_then`, `or_else`) and leave through the extractors (`unwrap`,
/// `unwrap_or`, the `panic_on_failure` family) or through decomposition
/// (`into_parts`). The pure algebra puts no bounds on the payloads; only the
/// raising extractors require `U` to be a [`FailurePayload`].
#[must_use = "this `Outcome` may hold a failure, which should be handled"]
#[derive(Clone, PartialEq, Eq)]
pub enum Outcome<T, U> {
    /// The operation produced its expected value.
    Success(T),
    /// The operation failed with a payload describing the failure.
    Failure(U),
}

impl<T, U> Outcome<T, U> {
    /// Assembles an outcome from decomposed parts.
    ///
    /// Exactly one slot must be populated and the tag must point at it.
    /// Every other combination (both populated, both absent, disagreeing
    /// tag) is a contract breach and is rejected with an
    /// [`InvalidStateError`] rendering both slots and the tag.
    pub fn from_parts(exp: Option<T>, err: Option<U>, tag: Tag) -> Result<Self, InvalidStateError>
    where
        T: Debug,
        U: Debug,
    {
        match (exp, err, tag) {
            (Some(value), None, Tag::Success) => Ok(Self::Success(value)),
            (None, Some(error), Tag::Failure) => Ok(Self::Failure(error)),
            (exp, err, tag) => Err(InvalidStateError::new(
                render_part(&exp),
                render_part(&err),
                tag,
            )),
        }
    }

    /// Decomposes the outcome into its slots and tag. The returned triple is
    /// always accepted back by `from_parts`.
    pub fn into_parts(self) -> (Option<T>, Option<U>, Tag) {
        match self {
            Self::Success(value) => (Some(value), None, Tag::Success),
            Self::Failure(error) => (None, Some(error), Tag::Failure),
        }
    }

    /// Whether the success slot is populated.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether the failure slot is populated.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Tag naming the populated slot.
    #[inline]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Success(_) => Tag::Success,
            Self::Failure(_) => Tag::Failure,
        }
    }

    /// Applies a mapping to the success value, passing failures through.
    #[inline]
    #[must_use = "map returns a new outcome instead of modifying in place"]
    pub fn map<T2, F>(self, op: F) -> Outcome<T2, U>
    where
        F: FnOnce(T) -> T2,
    {
        match self {
            Self::Success(value) => Outcome::Success(op(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a mapping to the failure payload, passing successes through.
    #[inline]
    #[must_use = "map_err returns a new outcome instead of modifying in place"]
    pub fn map_err<U2, F>(self, op: F) -> Outcome<T, U2>
    where
        F: FnOnce(U) -> U2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(op(error)),
        }
    }

    /// Chains an operation that itself may fail. The first failure in a
    /// chain short-circuits everything behind it.
    #[inline]
    #[must_use = "and_then returns the chained outcome, which may hold a failure"]
    pub fn and_then<T2, F>(self, op: F) -> Outcome<T2, U>
    where
        F: FnOnce(T) -> Outcome<T2, U>,
    {
        match self {
            Self::Success(value) => op(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Attempts to recover from a failure with an operation that itself may
    /// fail; successes pass through untouched.
    #[inline]
    #[must_use = "or_else returns the recovered outcome, which may hold a failure"]
    pub fn or_else<U2, F>(self, op: F) -> Outcome<T, U2>
    where
        F: FnOnce(U) -> Outcome<T, U2>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => op(error),
        }
    }

    /// Mutates the success value in place, passing failures through.
    ///
    /// This is the one sanctioned mutating operation. The closure receives
    /// the held value by `&mut` reference, so it can only touch what the
    /// success slot already owns and the active slot cannot change.
    #[inline]
    pub fn map_member<F>(mut self, op: F) -> Self
    where
        F: FnOnce(&mut T),
    {
        if let Self::Success(value) = &mut self {
            op(value);
        }
        self
    }

    /// Returns the success value, or the default when the outcome failed.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes one from the failure payload.
    #[inline]
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(U) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => op(error),
        }
    }

    /// Success value, discarding any failure payload.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Failure payload, discarding any success value.
    #[inline]
    pub fn err(self) -> Option<U> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into the standard `Result`, keeping the active slot.
    #[inline]
    pub fn into_result(self) -> Result<T, U> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, U> Outcome<T, U>
where
    U: FailurePayload + Send + 'static,
{
    /// Returns the success value or raises the failure as a panic.
    ///
    /// Error-shaped payloads are raised as-is, so a catching caller can
    /// downcast back to the concrete type. Plain payloads are raised as a
    /// [`WrappedFailure`] carrying their rendered text.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                if error.as_error().is_some() {
                    raise_direct(error)
                } else {
                    raise_wrapped(error)
                }
            }
        }
    }

    /// Returns the success value or raises a [`WrappedFailure`] whose text
    /// is `message` followed by the rendered payload.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => raise_wrapped(format!("{}: {}", message, error)),
        }
    }

    /// Raises the failure as a panic, picking the raising mode by payload
    /// shape like `unwrap`; successes are handed back for further chaining.
    #[track_caller]
    pub fn panic_on_failure(self) -> Self {
        match self {
            Self::Failure(error) => {
                if error.as_error().is_some() {
                    raise_direct(error)
                } else {
                    raise_wrapped(error)
                }
            }
            success => success,
        }
    }

    /// Raises the failure wrapped in a [`WrappedFailure`] regardless of the
    /// payload's shape; successes are handed back for further chaining.
    #[track_caller]
    pub fn panic_on_failure_wrapped(self) -> Self {
        match self {
            Self::Failure(error) => raise_wrapped(error),
            success => success,
        }
    }

    /// Raises error-shaped failures as their raw payload. Plain payloads
    /// and successes are handed back untouched.
    #[track_caller]
    pub fn panic_on_failure_direct(self) -> Self {
        match self {
            Self::Failure(error) if error.as_error().is_some() => raise_direct(error),
            other => other,
        }
    }
}

impl<T, U> From<Result<T, U>> for Outcome<T, U> {
    fn from(result: Result<T, U>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, U> From<Outcome<T, U>> for Result<T, U> {
    fn from(outcome: Outcome<T, U>) -> Self {
        outcome.into_result()
    }
}

impl<T: Display, U: Display> Display for Outcome<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({})", value),
            Self::Failure(error) => write!(f, "Failure({})", error),
        }
    }
}

/// Structurally complete form: both slots plus the tag, so a log line shows
/// the empty slot explicitly instead of hiding it behind the variant name.
impl<T: Debug, U: Debug> Debug for Outcome<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (exp, err) = match self {
            Self::Success(value) => (Some(value), None),
            Self::Failure(error) => (None, Some(error)),
        };
        f.debug_struct("Outcome")
            .field("exp", &exp)
            .field("err", &err)
            .field("tag", &self.tag())
            .finish()
    }
}

fn render_part<V: Debug>(part: &Option<V>) -> String {
    match part {
        Some(value) => format!("{:?}", value),
        None => String::from("None"),
    }
}

#[cold]
#[inline(never)]
fn raise_direct<U>(error: U) -> !
where
    U: FailurePayload + Send + 'static,
{
    error!("raise_direct - raising failure payload: {}", error);
    panic::panic_any(error)
}

#[cold]
#[inline(never)]
fn raise_wrapped(message: impl Display) -> ! {
    let wrapped = WrappedFailure::new(message);
    error!("raise_wrapped - raising wrapped failure: {}", wrapped);
    panic::panic_any(wrapped)
}

#[cfg(test)]
mod tests {
    use std::panic::catch_unwind;

    use super::{Outcome, Tag};
    use crate::error::WrappedFailure;

    #[test]
    fn construction_keeps_one_slot_populated() {
        let success = Outcome::<i32, String>::Success(5);
        assert!(success.is_ok());
        assert!(!success.is_err());
        assert_eq!(success.tag(), Tag::Success);

        let failure = Outcome::<i32, String>::Failure("broken".into());
        assert!(failure.is_err());
        assert!(!failure.is_ok());
        assert_eq!(failure.tag(), Tag::Failure);
    }

    #[test]
    fn display_names_the_active_variant() {
        assert_eq!(Outcome::<i32, String>::Success(5).to_string(), "Success(5)");
        assert_eq!(
            Outcome::<i32, String>::Failure("broken".into()).to_string(),
            "Failure(broken)"
        );
    }

    #[test]
    fn debug_exposes_both_slots_and_the_tag() {
        assert_eq!(
            format!("{:?}", Outcome::<i32, String>::Success(5)),
            "Outcome { exp: Some(5), err: None, tag: Success }"
        );
        assert_eq!(
            format!("{:?}", Outcome::<i32, String>::Failure("broken".into())),
            "Outcome { exp: None, err: Some(\"broken\"), tag: Failure }"
        );
    }

    #[test]
    fn from_parts_accepts_only_agreeing_parts() {
        let success = Outcome::<i32, String>::from_parts(Some(5), None, Tag::Success).unwrap();
        assert_eq!(success, Outcome::Success(5));

        let failure =
            Outcome::<i32, String>::from_parts(None, Some("broken".into()), Tag::Failure).unwrap();
        assert_eq!(failure, Outcome::Failure("broken".to_string()));

        let both = Outcome::<i32, i32>::from_parts(Some(5), Some(5), Tag::Failure).unwrap_err();
        assert_eq!(
            both.to_string(),
            "invalid outcome state: exp=5, err=5, tag=Failure"
        );

        let neither = Outcome::<i32, String>::from_parts(None, None, Tag::Success).unwrap_err();
        assert_eq!(
            neither.to_string(),
            "invalid outcome state: exp=None, err=None, tag=Success"
        );

        let disagreeing =
            Outcome::<i32, String>::from_parts(Some(5), None, Tag::Failure).unwrap_err();
        assert_eq!(disagreeing.tag(), Tag::Failure);
    }

    #[test]
    fn parts_round_trip() {
        let (exp, err, tag) = Outcome::<i32, String>::Success(5).into_parts();
        assert_eq!((exp, err.clone(), tag), (Some(5), None, Tag::Success));

        let rebuilt = Outcome::from_parts(exp, err, tag).unwrap();
        assert_eq!(rebuilt, Outcome::<i32, String>::Success(5));
    }

    #[test]
    fn map_applies_only_to_success() {
        let doubled = Outcome::<i32, String>::Success(5).map(|v| v * 2);
        assert_eq!(doubled, Outcome::Success(10));

        let failure = Outcome::<i32, String>::Failure("broken".into()).map(|v| v * 2);
        assert_eq!(failure, Outcome::Failure("broken".to_string()));
    }

    #[test]
    fn map_calls_compose() {
        fn add_one(v: i32) -> i32 {
            v + 1
        }
        fn double(v: i32) -> i32 {
            v * 2
        }

        let stepwise = Outcome::<i32, String>::Success(5).map(add_one).map(double);
        let composed = Outcome::<i32, String>::Success(5).map(|v| double(add_one(v)));
        assert_eq!(stepwise, composed);
    }

    #[test]
    fn map_err_applies_only_to_failure() {
        let prefixed =
            Outcome::<i32, String>::Failure("x".into()).map_err(|e| format!("err:{}", e));
        assert_eq!(prefixed, Outcome::Failure("err:x".to_string()));

        let success = Outcome::<i32, String>::Success(5).map_err(|e| format!("err:{}", e));
        assert_eq!(success, Outcome::Success(5));
    }

    #[test]
    fn and_then_chains_and_short_circuits() {
        fn checked_halve(v: i32) -> Outcome<i32, String> {
            if v % 2 == 0 {
                Outcome::Success(v / 2)
            } else {
                Outcome::Failure(format!("{} is odd", v))
            }
        }

        assert_eq!(
            Outcome::<i32, String>::Success(8).and_then(checked_halve),
            Outcome::Success(4)
        );
        assert_eq!(
            Outcome::<i32, String>::Success(3).and_then(checked_halve),
            Outcome::Failure("3 is odd".to_string())
        );
        assert_eq!(
            Outcome::<i32, String>::Failure("early".into())
                .and_then(checked_halve)
                .and_then(checked_halve),
            Outcome::Failure("early".to_string())
        );
    }

    #[test]
    fn or_else_recovers_only_from_failure() {
        let recovered = Outcome::<i32, String>::Failure("broken".into())
            .or_else(|e| Outcome::<i32, String>::Success(e.len() as i32));
        assert_eq!(recovered, Outcome::Success(6));

        let untouched = Outcome::<i32, String>::Success(1)
            .or_else(|_| Outcome::<i32, String>::Failure("never".into()));
        assert_eq!(untouched, Outcome::Success(1));
    }

    #[test]
    fn map_member_mutates_success_in_place() {
        let grown = Outcome::<Vec<i32>, String>::Success(vec![1, 2]).map_member(|v| v.push(3));
        assert_eq!(grown, Outcome::Success(vec![1, 2, 3]));

        let failure =
            Outcome::<Vec<i32>, String>::Failure("broken".into()).map_member(|v| v.push(3));
        assert_eq!(failure, Outcome::Failure("broken".to_string()));
    }

    #[test]
    fn unwrap_or_falls_back_only_on_failure() {
        assert_eq!(Outcome::<i32, String>::Success(5).unwrap_or(0), 5);
        assert_eq!(Outcome::<i32, String>::Failure("broken".into()).unwrap_or(0), 0);
    }

    #[test]
    fn unwrap_or_else_sees_the_failure_payload() {
        let fallback =
            Outcome::<i32, String>::Failure("xy".into()).unwrap_or_else(|e| e.len() as i32);
        assert_eq!(fallback, 2);
    }

    #[test]
    fn ok_and_err_extract_the_matching_slot() {
        assert_eq!(Outcome::<i32, String>::Success(5).ok(), Some(5));
        assert_eq!(Outcome::<i32, String>::Success(5).err(), None);
        assert_eq!(Outcome::<i32, String>::Failure("broken".into()).ok(), None);
        assert_eq!(
            Outcome::<i32, String>::Failure("broken".into()).err(),
            Some("broken".to_string())
        );
    }

    #[test]
    fn conversions_round_trip_through_std_result() {
        let outcome: Outcome<i32, String> = Ok(5).into();
        assert_eq!(outcome, Outcome::Success(5));

        let result: Result<i32, String> = Outcome::<i32, String>::Failure("broken".into()).into();
        assert_eq!(result, Err("broken".to_string()));

        assert_eq!(Outcome::<i32, String>::Success(5).into_result(), Ok(5));
    }

    #[test]
    fn unwrap_returns_the_success_value() {
        assert_eq!(Outcome::<i32, String>::Success(5).unwrap(), 5);
    }

    #[test]
    #[should_panic]
    fn unwrap_panics_on_failure() {
        Outcome::<i32, String>::Failure("broken".into()).unwrap();
    }

    #[test]
    fn unwrap_reraises_error_shaped_payloads() {
        let caught = catch_unwind(|| {
            Outcome::<i32, std::io::Error>::Failure(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk gone",
            ))
            .unwrap()
        })
        .unwrap_err();

        let original = caught.downcast::<std::io::Error>().unwrap();
        assert_eq!(original.to_string(), "disk gone");
    }

    #[test]
    fn panic_on_failure_hands_back_success_for_chaining() {
        let chained = Outcome::<i32, String>::Success(5)
            .panic_on_failure()
            .map(|v| v + 1);
        assert_eq!(chained, Outcome::Success(6));
    }

    #[test]
    fn panic_on_failure_wraps_plain_payloads() {
        let caught =
            catch_unwind(|| {
                let _ = Outcome::<i32, String>::Failure("boom".into()).panic_on_failure();
            })
            .unwrap_err();

        let wrapped = caught.downcast::<WrappedFailure>().unwrap();
        assert_eq!(wrapped.message(), "boom");
    }

    #[test]
    fn panic_on_failure_reraises_error_shaped_payloads() {
        let caught = catch_unwind(|| {
            let _ = Outcome::<i32, std::io::Error>::Failure(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk gone",
            ))
            .panic_on_failure();
        })
        .unwrap_err();

        let original = caught.downcast::<std::io::Error>().unwrap();
        assert_eq!(original.to_string(), "disk gone");
    }

    #[test]
    fn expect_returns_the_success_value() {
        assert_eq!(Outcome::<i32, String>::Success(5).expect("should hold"), 5);
    }

    #[test]
    fn expect_prefixes_the_wrapped_message() {
        let caught = catch_unwind(|| {
            Outcome::<i32, String>::Failure("boom".into()).expect("reading config")
        })
        .unwrap_err();

        let wrapped = caught.downcast::<WrappedFailure>().unwrap();
        assert_eq!(wrapped.message(), "reading config: boom");
    }
}
