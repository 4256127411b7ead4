//! Content loader for the CISL public pages.
//!
//! Fetches JSON resources from a [`source::ResourceSource`], renders them
//! with [`cisl_core::markup`], and writes the result into a [`page::Page`].
//! [`dispatch::dispatch`] picks the operation for a page path.

pub mod dispatch;
pub mod error;
pub mod html;
pub mod loader;
pub mod page;
pub mod source;

#[cfg(test)]
mod testing;

pub use dispatch::dispatch;
pub use error::LoadError;
pub use html::HtmlDocument;
pub use loader::{ContentLoader, ContentOps};
pub use page::Page;
pub use source::{DirSource, HttpSource, ResourceSource};
