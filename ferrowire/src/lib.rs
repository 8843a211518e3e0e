/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! # Ferrowire
//!
//! A Fedwire funds-transfer message engine for Rust.
//!
//! Ferrowire reads, validates, and writes the fixed-width tagged records of
//! the Fedwire funds service, and models a transfer as a typed message with
//! one slot per record kind.
//!
//! ## Features
//!
//! - **Byte-exact round trips**: Files written back match what was read
//! - **Table-driven layouts**: One static registry describes every record
//! - **Typed segments**: Each record kind is its own struct with named fields
//! - **Separated concerns**: Parsing never validates; validation never parses
//! - **Async storage**: Files persist behind a `tokio`-friendly repository trait
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ferrowire::prelude::*;
//!
//! let file = read_file(wire_text)?;
//! file.create()?;
//!
//! let mut writer = Writer::new();
//! writer.write_file(&file);
//! assert_eq!(writer.finish(), wire_text);
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Tags, character-set helpers, code sets, and error definitions
//! - [`registry`]: Static field-layout tables for every record kind
//! - [`message`]: Typed segments, messages, and files
//! - [`codec`]: Wire-format reader and writer
//! - [`store`]: File persistence and storage

pub mod core {
    //! Tags, character-set helpers, code sets, and error definitions.
    pub use ferrowire_core::*;
}

pub mod registry {
    //! Static field-layout tables for every record kind.
    pub use ferrowire_registry::*;
}

pub mod message {
    //! Typed segments, messages, and files.
    pub use ferrowire_message::*;
}

pub mod codec {
    //! Wire-format reader and writer.
    pub use ferrowire_codec::*;
}

pub mod store {
    //! File persistence and storage.
    pub use ferrowire_store::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use ferrowire_core::{
        AdviceCode, BusinessFunctionCode, ChargeDetails, FieldError, FieldErrorKind,
        IdentificationCode, LocalInstrumentCode, MessageError, ParseError, PaymentMethod,
        ReadError, Result, StoreError, Tag, WireError,
    };

    // Layout registry
    pub use ferrowire_registry::{SegmentLayout, canonical, layout_for, layout_for_code};

    // Messages and files
    pub use ferrowire_message::{FedwireMessage, Segment, WireFile, WireSegment};

    // Wire format
    pub use ferrowire_codec::{Reader, Writer, read_file};

    // Store
    pub use ferrowire_store::{FileRepository, MemoryRepository};
}
