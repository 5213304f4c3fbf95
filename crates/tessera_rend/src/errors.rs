//! Render and client-side patch errors.

/// Error raised while rendering or serializing a node tree.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The text buffer rejected a write.
    #[error("failed to write rendered output: {0}")]
    Write(#[from] std::fmt::Error),

    /// Serializing a render result to its wire form failed.
    #[error("failed to serialize rendered output: {0}")]
    Json(#[from] serde_json::Error),

    /// A stream patch and its rendered additions disagree in length.
    #[error("stream patch has {inserts} inserts for {items} rendered items")]
    StreamMismatch { inserts: usize, items: usize },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Error raised while applying a wire diff on the client side.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The diff does not have the documented wire shape.
    #[error("malformed diff: {0}")]
    Malformed(String),

    /// A back-reference names a component whose statics were never sent.
    #[error("unknown component id {0}")]
    UnknownComponent(i64),

    /// A rendered tree or patch is missing the value for a slot.
    #[error("no rendered value for slot {0}")]
    MissingSlot(usize),
}

impl ClientError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

/// Result type for client-side patch operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RenderError::from(std::fmt::Error);
        assert!(err.to_string().starts_with("failed to write"));
        assert_eq!(
            RenderError::StreamMismatch { inserts: 2, items: 1 }.to_string(),
            "stream patch has 2 inserts for 1 rendered items"
        );
        assert_eq!(
            ClientError::UnknownComponent(3).to_string(),
            "unknown component id 3"
        );
        assert_eq!(ClientError::MissingSlot(1).to_string(), "no rendered value for slot 1");
    }
}
