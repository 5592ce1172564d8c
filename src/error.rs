//! Error Taxonomy
//!
//! Failure shapes surfaced by the record store client. Validation errors
//! are plain strings local to the open form and never reach the network.

use thiserror::Error;

/// Failure reported by a record store operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The store rejected the request; the message is shown verbatim
    #[error("{0}")]
    Api(String),
    /// No response was obtained from the API server
    #[error("cannot reach the API server")]
    Transport,
}
