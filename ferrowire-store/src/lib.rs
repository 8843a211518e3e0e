/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! # Ferrowire Store
//!
//! File persistence for the ferrowire Fedwire engine.
//!
//! The [`FileRepository`] trait abstracts over where wire files live; the
//! bundled [`MemoryRepository`] keeps them in process memory. Saving a file
//! with an empty id assigns a generated uuid, so callers never invent
//! identifiers themselves.

pub mod memory;
pub mod traits;

pub use memory::MemoryRepository;
pub use traits::FileRepository;
