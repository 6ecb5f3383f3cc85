use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationConfigError {
    #[error("Failed to parse react-query codegen config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error(
        "The `fetcher.func` option must name a fetcher function, but an \
        empty string was given."
    )]
    EmptyCustomMapper,
}
