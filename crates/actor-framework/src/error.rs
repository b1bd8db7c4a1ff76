//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor framework.
//! By centralizing error definitions, every client sees the same failure modes
//! regardless of the entity type it talks to.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
