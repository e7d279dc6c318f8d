// Copyright (c) 2025 - Cowboy AI, Inc.
//! Domain Foundations
//!
//! Building blocks for domain models that raise domain events:
//!
//! - [`notification`] - the [`NotificationMessage`] payload and the
//!   [`DomainNotification`] trait every domain event implements
//! - [`entity`] - [`EntityBase`], composed by concrete entities to record
//!   events during business logic and expose them read-only
//! - [`publisher`] - the [`DomainEventPublisher`] port and an in-process
//!   implementation
//! - [`registration`] - service collection and the
//!   [`DomainEventPublisherExt::add_domain_event_publisher`] helper
//!
//! # Unit of Work
//!
//! ```text
//! Entity method → add_domain_event
//!        ↓
//! save entity (caller's persistence)
//!        ↓
//! take_domain_events → DomainEventPublisher::publish_all → handlers
//! ```
//!
//! The crate does not decide when events are taken or cleared; that belongs
//! to the consuming application's unit of work.

pub mod config;
pub mod entity;
pub mod errors;
pub mod notification;
pub mod publisher;
pub mod registration;

// Re-export commonly used types
pub use config::PublisherConfig;
pub use entity::{Entity, EntityBase, PendingEvents};
pub use errors::{FoundationError, FoundationResult};
pub use notification::{DomainNotification, NotificationMessage, DEFAULT_MESSAGE};
pub use publisher::{DomainEventHandler, DomainEventPublisher, InProcessDomainEventPublisher};
pub use registration::{DomainEventPublisherExt, ServiceCollection, ServiceProvider};
