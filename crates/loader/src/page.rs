//! The page boundary a loader writes into.

/// A page whose containers are addressed by element id.
///
/// Writes to a missing container are silent no-ops, never errors.
pub trait Page {
    /// Whether a container with this id exists and can hold content.
    fn has_container(&self, id: &str) -> bool;

    /// Replace the container's content with `html`.
    fn set_content(&mut self, id: &str, html: &str);

    /// Make the container's parent element visible.
    fn reveal_parent(&mut self, id: &str);
}
