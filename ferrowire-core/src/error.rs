/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Error types for the ferrowire Fedwire engine.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across all ferrowire operations. Parsing is
//! deliberately permissive and only fails structurally ([`ParseError`]);
//! content problems are reported by validation ([`FieldError`]) so that
//! malformed-but-well-sized records can still be inspected after reading.

use crate::tag::Tag;
use std::fmt;
use thiserror::Error;

/// Result type alias using [`WireError`] as the error type.
pub type Result<T> = std::result::Result<T, WireError>;

/// Top-level error type for all ferrowire operations.
#[derive(Debug, Error)]
pub enum WireError {
    /// Structural error while parsing a record.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Content error found by segment validation.
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// Message-level error (duplicate slots, broken mandatory set).
    #[error("message error: {0}")]
    Message(#[from] MessageError),

    /// Error while reading a wire-format stream.
    #[error("read error: {0}")]
    Read(#[from] ReadError),

    /// Error in file repository operations.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Structural errors raised while parsing a single fixed-width record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Record length does not match the registered length for its tag.
    #[error("must be {expected} characters and found {actual}")]
    TagWrongLength {
        /// Registered total record length in characters.
        expected: usize,
        /// Length in characters actually found.
        actual: usize,
    },
}

/// Content error on a single field, found by validation.
///
/// Carries the field name as serialized in JSON, the offending value, and the
/// failure kind. The value is omitted from the display when it is empty, which
/// is always the case for [`FieldErrorKind::FieldRequired`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: &'static str,
    /// The offending value.
    pub value: String,
    /// What kind of failure this is.
    pub kind: FieldErrorKind,
}

impl FieldError {
    /// Creates a field error for a named field and value.
    #[must_use]
    pub fn new(field: &'static str, kind: FieldErrorKind, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            kind,
        }
    }

    /// Creates a missing-required-field error.
    #[must_use]
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            value: String::new(),
            kind: FieldErrorKind::FieldRequired,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.kind)?;
        if !self.value.is_empty() {
            write!(f, ": {:?}", self.value)?;
        }
        Ok(())
    }
}

/// The closed set of field validation failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Stored tag does not match the canonical tag for the segment type.
    #[error("is not a valid tag for this segment type")]
    ValidTagForType,

    /// Value contains characters outside the printable ASCII range.
    #[error("has non alphanumeric characters")]
    NonAlphanumeric,

    /// Required field is empty.
    #[error("is a required field")]
    FieldRequired,

    /// Field is populated where the segment forbids it, or breaks an
    /// inclusion rule.
    #[error("is an invalid property")]
    InvalidProperty,

    /// Value is not a member of the identification code set.
    #[error("is not a valid identification code")]
    IdentificationCode,

    /// Value is not a member of the advice code set.
    #[error("is not a valid advice code")]
    AdviceCode,

    /// Value is not a member of the business function code set.
    #[error("is not a valid business function code")]
    BusinessFunctionCode,

    /// Value is not a member of the local instrument code set.
    #[error("is not a valid local instrument code")]
    LocalInstrumentCode,

    /// Value is not a member of the payment method set.
    #[error("is not a valid payment method")]
    PaymentMethod,

    /// Value is not a member of the charge details set.
    #[error("is not a valid charge details code")]
    ChargeDetails,
}

/// Message-level errors from assembling or validating a full message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// A segment kind was assigned to an already occupied slot.
    #[error("{tag} duplicates an existing segment")]
    DuplicateSegment {
        /// Tag of the duplicated segment.
        tag: Tag,
    },

    /// A segment failed validation; the tag names the owning segment.
    #[error("{tag} {source}")]
    Validation {
        /// Tag of the segment that failed.
        tag: Tag,
        /// The underlying field error.
        source: FieldError,
    },
}

impl MessageError {
    /// Wraps a field error with the tag of the segment it belongs to.
    #[must_use]
    pub fn validation(tag: Tag, source: FieldError) -> Self {
        Self::Validation { tag, source }
    }
}

/// Errors raised while reading a wire-format stream, with line context.
///
/// Line numbers are 1-based. Reading fails fast: the first structural error
/// stops the reader.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// A record's first six characters matched no registered tag.
    #[error("line {line}: {code:?} is not a recognized tag")]
    UnknownTag {
        /// Line where the record starts.
        line: usize,
        /// The unrecognized tag code.
        code: String,
    },

    /// A record failed structural parsing.
    #[error("line {line}: {tag} {source}")]
    Record {
        /// Line where the record starts.
        line: usize,
        /// Tag of the failed record.
        tag: Tag,
        /// The underlying parse error.
        source: ParseError,
    },

    /// A record duplicated a segment already present in the open message.
    #[error("line {line}: {source}")]
    Message {
        /// Line where the record starts.
        line: usize,
        /// The underlying message error.
        source: MessageError,
    },
}

impl ReadError {
    /// Returns the 1-based line number the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownTag { line, .. }
            | Self::Record { line, .. }
            | Self::Message { line, .. } => *line,
        }
    }
}

/// Errors in file repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No file with the given id exists.
    #[error("file not found: {id}")]
    NotFound {
        /// The missing file id.
        id: String,
    },
}
