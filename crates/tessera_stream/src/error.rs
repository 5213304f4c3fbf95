//! Stream errors.

use tessera_carton::CompactString;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// No live entry carries this DOM id.
    #[error("stream has no entry with dom id {0:?}")]
    UnknownId(CompactString),

    /// Items of a counter-keyed stream cannot be mapped back to their ids.
    #[error("stream {0:?} has no id function; delete by dom id instead")]
    Unkeyed(CompactString),
}

pub type StreamResult<T> = Result<T, StreamError>;
