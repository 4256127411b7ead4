//! CISL site server library.
//!
//! Serves a static site directory and fills in the content sections of the
//! recognized pages on the way out. Exposes config, state, error handling
//! and the router so integration tests and the binary share them.

pub mod config;
pub mod error;
pub mod router;
pub mod routes;
pub mod state;
