/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! # Ferrowire Server
//!
//! HTTP API over the ferrowire Fedwire engine.
//!
//! The server exposes wire files as REST resources: create them from JSON or
//! raw wire text, list and fetch them, render them back to wire text, and
//! validate them on demand. Storage goes through the
//! [`FileRepository`](ferrowire_store::FileRepository) trait, so the bundled
//! in-memory repository can be swapped for a durable one without touching
//! the handlers.
//!
//! ## Module Structure
//!
//! - [`config`] - Server configuration read from the environment
//! - [`handlers`] - Request handlers and response types
//! - [`routes`] - Router assembly and middleware

pub mod config;
pub mod handlers;
pub mod routes;

pub use config::ServerConfig;
pub use handlers::AppState;
pub use routes::create_router;
