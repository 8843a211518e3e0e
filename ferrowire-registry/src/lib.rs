/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! # Ferrowire Registry
//!
//! Fixed-width field layouts for every supported Fedwire segment.
//!
//! Each tag maps to a [`SegmentLayout`]: an ordered table of [`FieldSpec`]
//! entries giving field name, width in characters, charset class, and whether
//! the field is required. The record engine in `ferrowire-message` is driven
//! entirely by these tables; adding a segment kind means adding a layout here
//! and a struct there, never new parsing code.
//!
//! Record lengths are not stored, they are derived: six characters of tag plus
//! the sum of the field widths.

pub mod layout;
pub mod registry;

pub use layout::{Charset, FieldSpec, SegmentLayout};
pub use registry::{LAYOUTS, canonical, layout_for, layout_for_code};
