//! Record types, pure markup rendering, and page routing for the CISL
//! public pages.
//!
//! Nothing in this crate performs I/O. The loader crate fetches resources
//! and writes the fragments produced here into a page.

pub mod error;
pub mod markup;
pub mod models;
pub mod routes;
