// Copyright (c) 2025 - Cowboy AI, Inc.
//! Domain Notification Messages
//!
//! A notification message is an immutable fact: "something happened", carried
//! with a human readable message. Concrete domain events embed a
//! [`NotificationMessage`] and implement [`DomainNotification`] to expose it.
//!
//! ```rust
//! use domain_foundations::{DomainNotification, NotificationMessage};
//!
//! #[derive(Debug)]
//! struct OrderPlaced {
//!     notification: NotificationMessage,
//!     order_id: i32,
//! }
//!
//! impl OrderPlaced {
//!     fn new(order_id: i32) -> Self {
//!         Self {
//!             notification: NotificationMessage::with_message(format!("Order {order_id} placed")),
//!             order_id,
//!         }
//!     }
//! }
//!
//! impl DomainNotification for OrderPlaced {
//!     fn notification(&self) -> &NotificationMessage {
//!         &self.notification
//!     }
//! }
//!
//! let event = OrderPlaced::new(7);
//! assert_eq!(event.message(), Some("Order 7 placed"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Message used when a concrete event does not supply its own
pub const DEFAULT_MESSAGE: &str = "Default message.";

/// The payload shared by every domain event
///
/// There are no setters: the message is fixed when the owning event is
/// constructed and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    message: Option<String>,
    event_id: Uuid,
    occurred_at: DateTime<Utc>,
}

impl NotificationMessage {
    /// Create a notification carrying `message`
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Create a notification with no message text at all
    pub fn silent() -> Self {
        Self {
            message: None,
            ..Self::default()
        }
    }

    /// Human readable message, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Unique identifier for this notification
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    /// When the notification was created
    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl Default for NotificationMessage {
    fn default() -> Self {
        Self {
            message: Some(DEFAULT_MESSAGE.to_string()),
            event_id: Uuid::now_v7(),
            occurred_at: Utc::now(),
        }
    }
}

impl fmt::Display for NotificationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{message}"),
            None => write!(f, "<no message>"),
        }
    }
}

/// A domain event that can be accumulated on an entity and published
///
/// Implementors only provide [`notification`](Self::notification); the
/// remaining accessors read through it.
pub trait DomainNotification: fmt::Debug + Send + Sync {
    /// The embedded notification payload
    fn notification(&self) -> &NotificationMessage;

    /// Human readable message, if any
    fn message(&self) -> Option<&str> {
        self.notification().message()
    }

    /// Unique identifier for this event
    fn event_id(&self) -> Uuid {
        self.notification().event_id()
    }

    /// When the event occurred
    fn occurred_at(&self) -> DateTime<Utc> {
        self.notification().occurred_at()
    }

    /// Type of event, for logging
    ///
    /// Defaults to the last path segment of [`std::any::type_name`], whose
    /// format the standard library does not guarantee. Override it when the
    /// name is used for routing or persisted.
    fn event_type(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        let path = full.split('<').next().unwrap_or(full);
        path.rsplit("::").next().unwrap_or(path)
    }
}

impl DomainNotification for NotificationMessage {
    fn notification(&self) -> &NotificationMessage {
        self
    }
}
