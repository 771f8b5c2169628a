//! Error types for Inclusive Jobs.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown flow kind: {0} (expected disability, profile or employer)")]
    UnknownFlowKind(String),
}

/// Problems in a flow definition, detected when the flow is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("Flow {flow} has no steps")]
    Empty { flow: String },

    #[error("Step {index} of flow {flow} has an empty id")]
    EmptyStepId { flow: String, index: usize },

    #[error("Step {id} appears more than once in flow {flow}")]
    DuplicateStep { flow: String, id: String },

    #[error("Choice step {id} in flow {flow} has no choices")]
    MissingChoices { flow: String, id: String },
}

/// Channel-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Failed to send response on channel {name}: {reason}")]
    SendFailed { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
