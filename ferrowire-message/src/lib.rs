/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! # Ferrowire Message
//!
//! Segment types, the fixed-width record engine, and message aggregates for
//! the ferrowire Fedwire engine.
//!
//! Every supported record kind is a struct implementing [`WireSegment`]; the
//! trait's provided methods do all parsing, validation, and serialization,
//! driven by the layout tables in `ferrowire-registry`. The [`Segment`] enum
//! dispatches over all kinds, [`FedwireMessage`] holds one optional slot per
//! kind, and [`WireFile`] is the ordered collection of messages the store
//! and server work with.
//!
//! ## Module map
//!
//! - [`record`]: the [`WireSegment`] engine
//! - [`types`]: shared substructures (addresses, cover payment lines, advice)
//! - [`envelope`]: `{1500}`..`{3600}`, the mandatory message envelope
//! - [`transfer`]: `{3320}`..`{3720}`, transfer references and amounts
//! - [`beneficiary`]: `{4000}`..`{4400}`, the beneficiary side
//! - [`originator`]: `{5000}`..`{6000}`, the originator side
//! - [`fi_info`]: `{6100}`..`{6500}`, FI-to-FI information and advices
//! - [`cover`]: `{7033}`..`{7072}`, cover payment segments
//! - [`service`]: `{9000}` and the `{11xx}` service appendix
//! - [`segment`], [`message`], [`file`]: the aggregates

pub mod beneficiary;
pub mod cover;
pub mod envelope;
pub mod file;
pub mod fi_info;
pub mod message;
pub mod originator;
pub mod record;
pub mod segment;
pub mod service;
pub mod transfer;
pub mod types;

pub use file::WireFile;
pub use message::FedwireMessage;
pub use record::{FieldRefs, FieldSlots, WireSegment};
pub use segment::Segment;
