/// Why a resource could not be loaded.
///
/// Every variant means the same thing to a caller: the resource is
/// unavailable or malformed, so there is nothing to render.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("Failed to load {resource}: HTTP {status}")]
    Status { resource: String, status: u16 },

    /// Reading the resource from disk failed.
    #[error("Failed to read {resource}: {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// The body was not valid JSON, or not the expected shape.
    #[error("Malformed {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}
