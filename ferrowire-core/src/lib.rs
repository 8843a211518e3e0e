/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! # Ferrowire Core
//!
//! Core types, code sets, and error definitions for the ferrowire Fedwire engine.
//!
//! This crate provides the fundamental building blocks used across all ferrowire crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Tags**: The closed [`Tag`] enumeration of supported record prefixes
//! - **Field formatting**: Trim-on-parse and pad-on-write primitives for fixed-width fields
//! - **Code sets**: Closed enumerations for identification, advice, and business function codes
//!
//! ## Round-Trip Design
//!
//! Parsing trims padding and keeps values as plain strings; serialization re-pads to the
//! registered width. A record that parses cleanly always re-serializes to the same bytes.

pub mod codes;
pub mod error;
pub mod format;
pub mod tag;

pub use codes::{
    AdviceCode, BusinessFunctionCode, ChargeDetails, IdentificationCode, LocalInstrumentCode,
    PaymentMethod,
};
pub use error::{
    FieldError, FieldErrorKind, MessageError, ParseError, ReadError, Result, StoreError, WireError,
};
pub use format::{alpha_field, is_alphanumeric, is_numeric, parse_string_field};
pub use tag::{TAG_LEN, Tag};
