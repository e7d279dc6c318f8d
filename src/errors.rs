// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for publishing and service registration

use thiserror::Error;

/// Errors that can occur while resolving services or publishing domain events
///
/// Entity and notification operations are total and never produce these.
#[derive(Debug, Error)]
pub enum FoundationError {
    /// No singleton was registered for the requested service
    #[error("Service not registered: {service}")]
    ServiceNotRegistered { service: &'static str },

    /// A registered factory produced a value of the wrong type
    #[error("Service type mismatch for {service}")]
    ServiceTypeMismatch { service: &'static str },

    /// A factory needed its own service while creating it
    #[error("Circular dependency while resolving {service}")]
    CircularDependency { service: &'static str },

    /// A domain event handler failed
    #[error("Handler '{handler}' failed for {event_type}: {source}")]
    Handler {
        handler: String,
        event_type: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for publishing and registration operations
pub type FoundationResult<T> = Result<T, FoundationError>;
