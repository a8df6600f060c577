//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// A channel to a worker thread is closed
    #[error("The {0} channel is closed")]
    ChannelClosed(&'static str),
}
