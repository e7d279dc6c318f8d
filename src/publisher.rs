// Copyright (c) 2025 - Cowboy AI, Inc.
//! Domain Event Publishing
//!
//! [`DomainEventPublisher`] is the port a unit of work hands accumulated
//! events to. [`InProcessDomainEventPublisher`] is the implementation bound by
//! [`add_domain_event_publisher`](crate::registration::DomainEventPublisherExt::add_domain_event_publisher):
//! it delivers each event to every subscribed [`DomainEventHandler`] in
//! subscription order.
//!
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use domain_foundations::{
//!     DomainEventHandler, DomainEventPublisher, DomainNotification,
//!     InProcessDomainEventPublisher, NotificationMessage,
//! };
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl DomainEventHandler for Audit {
//!     fn name(&self) -> &str {
//!         "audit"
//!     }
//!
//!     async fn handle(&self, event: &dyn DomainNotification) -> anyhow::Result<()> {
//!         println!("{:?}", event.message());
//!         Ok(())
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let publisher = InProcessDomainEventPublisher::default();
//! publisher.subscribe(Arc::new(Audit)).await;
//! publisher.publish(&NotificationMessage::default()).await.unwrap();
//! # });
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::config::PublisherConfig;
use crate::errors::{FoundationError, FoundationResult};
use crate::notification::DomainNotification;

/// Port for publishing domain events
#[async_trait]
pub trait DomainEventPublisher: Send + Sync {
    /// Publish a single domain event
    async fn publish(&self, event: &dyn DomainNotification) -> FoundationResult<()>;

    /// Publish events in order
    ///
    /// The provided body stops at the first error. Implementations may keep
    /// going and report the first failure at the end.
    async fn publish_all(&self, events: &[Box<dyn DomainNotification>]) -> FoundationResult<()> {
        for event in events {
            self.publish(event.as_ref()).await?;
        }
        Ok(())
    }
}

/// Subscriber invoked for every published domain event
#[async_trait]
pub trait DomainEventHandler: Send + Sync {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    /// React to an event
    async fn handle(&self, event: &dyn DomainNotification) -> anyhow::Result<()>;
}

/// Publisher that dispatches to handlers inside the current process
pub struct InProcessDomainEventPublisher {
    config: PublisherConfig,
    handlers: RwLock<Vec<Arc<dyn DomainEventHandler>>>,
}

impl InProcessDomainEventPublisher {
    /// Create a publisher with no handlers
    pub fn new(config: PublisherConfig) -> Self {
        Self {
            config,
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Create a publisher with an initial set of handlers
    pub fn with_handlers(config: PublisherConfig, handlers: Vec<Arc<dyn DomainEventHandler>>) -> Self {
        Self {
            config,
            handlers: RwLock::new(handlers),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    /// Add a handler; handlers run in the order they subscribed
    pub async fn subscribe(&self, handler: Arc<dyn DomainEventHandler>) {
        let mut handlers = self.handlers.write().await;
        info!(handler = handler.name(), position = handlers.len(), "Domain event handler subscribed");
        handlers.push(handler);
    }

    /// Number of subscribed handlers
    pub async fn handler_count(&self) -> usize {
        self.handlers.read().await.len()
    }
}

impl Default for InProcessDomainEventPublisher {
    fn default() -> Self {
        Self::new(PublisherConfig::default())
    }
}

#[async_trait]
impl DomainEventPublisher for InProcessDomainEventPublisher {
    async fn publish(&self, event: &dyn DomainNotification) -> FoundationResult<()> {
        // Snapshot so handlers may subscribe while an event is in flight.
        let handlers: Vec<_> = self.handlers.read().await.clone();

        if handlers.is_empty() {
            debug!(
                event_id = %event.event_id(),
                event_type = event.event_type(),
                "No handlers subscribed; event dropped"
            );
            return Ok(());
        }

        let mut first_error = None;

        for handler in handlers.iter() {
            debug!(
                event_id = %event.event_id(),
                event_type = event.event_type(),
                handler = handler.name(),
                "Dispatching domain event"
            );

            if let Err(source) = handler.handle(event).await {
                let err = FoundationError::Handler {
                    handler: handler.name().to_string(),
                    event_type: event.event_type().to_string(),
                    source,
                };

                if !self.config.continue_on_handler_error {
                    return Err(err);
                }

                warn!(
                    event_id = %event.event_id(),
                    error = %err,
                    "Domain event handler failed; continuing"
                );
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// In continue mode every event of the batch is delivered even after a
    /// failure, since the caller has usually drained them off the entity.
    async fn publish_all(&self, events: &[Box<dyn DomainNotification>]) -> FoundationResult<()> {
        if !self.config.continue_on_handler_error {
            for event in events {
                self.publish(event.as_ref()).await?;
            }
            return Ok(());
        }

        let mut first_error = None;
        for event in events {
            if let Err(err) = self.publish(event.as_ref()).await {
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
