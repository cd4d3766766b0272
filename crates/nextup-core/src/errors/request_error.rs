/// Invalid-argument errors raised at the request boundary.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("anchor item is required")]
    MissingAnchor,

    #[error("pool must be a sequence of items")]
    PoolNotSequence,

    #[error("transitions must be a sequence of transitions")]
    TransitionsNotSequence,

    #[error("malformed {field}: {reason}")]
    MalformedField { field: String, reason: String },
}
