use std::fmt::Display;

use thiserror::Error;

use crate::outcome::Tag;

/// Wrapper raised when a failure payload that is not itself an error has to
/// surface as a panic. Carries the stringified payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct WrappedFailure(String);

impl WrappedFailure {
    /// Stringifies the payload right away, so the wrapper stays independent
    /// of the payload's type.
    pub fn new(message: impl Display) -> Self {
        Self(message.to_string())
    }

    /// The stringified failure payload.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Raised by `Outcome::from_parts` when the handed parts disagree: both
/// slots populated, both absent, or a tag pointing at an empty slot.
///
/// Reaching this is a programming error in the caller, not a domain
/// failure; it is never produced past construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid outcome state: exp={exp}, err={err}, tag={tag}")]
pub struct InvalidStateError {
    exp: String,
    err: String,
    tag: Tag,
}

impl InvalidStateError {
    pub(crate) fn new(exp: String, err: String, tag: Tag) -> Self {
        Self { exp, err, tag }
    }

    /// Rendered success slot as handed to the constructor.
    pub fn exp(&self) -> &str {
        &self.exp
    }

    /// Rendered failure slot as handed to the constructor.
    pub fn err(&self) -> &str {
        &self.err
    }

    /// Tag the rejected parts claimed to carry.
    pub fn tag(&self) -> Tag {
        self.tag
    }
}
