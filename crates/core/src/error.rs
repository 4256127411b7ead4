#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Unrecognized page: {0}")]
    UnrecognizedPage(String),
}
