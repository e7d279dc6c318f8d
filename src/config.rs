// Copyright (c) 2025 - Cowboy AI, Inc.
//! Publisher configuration

use serde::{Deserialize, Serialize};

use crate::errors::{FoundationError, FoundationResult};

/// Environment variable read by [`PublisherConfig::from_env`]
pub const CONTINUE_ON_ERROR_ENV: &str = "DOMAIN_EVENTS_CONTINUE_ON_ERROR";

/// Configuration for the in-process domain event publisher
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherConfig {
    /// Keep delivering after a handler fails: to the remaining handlers of
    /// the event and, in `publish_all`, to the remaining events of the batch.
    /// The first failure is still returned once everything has run.
    #[serde(default)]
    pub continue_on_handler_error: bool,
}

impl PublisherConfig {
    /// Create the default configuration (stop on first handler error)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether handler errors stop delivery
    pub fn with_continue_on_handler_error(mut self, value: bool) -> Self {
        self.continue_on_handler_error = value;
        self
    }

    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> FoundationResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> FoundationResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(CONTINUE_ON_ERROR_ENV) {
            config.continue_on_handler_error = parse_flag(&raw).ok_or_else(|| {
                FoundationError::Configuration(format!(
                    "{CONTINUE_ON_ERROR_ENV} must be true, false, 1 or 0, got '{raw}'"
                ))
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
