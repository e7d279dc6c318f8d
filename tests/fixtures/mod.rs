// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for domain-foundations
//!
//! A dummy notification and a dummy entity that raises it from a business
//! method, plus a recording handler for publisher tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use domain_foundations::{
    DomainEventHandler, DomainNotification, Entity, EntityBase, NotificationMessage, PendingEvents,
};

pub const DUMMY_MESSAGE: &str = "Testing notification message";

/// Install a test-writer subscriber once; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Notification with a fixed message
#[derive(Debug, Clone)]
pub struct DummyDomainNotificationEvent {
    notification: NotificationMessage,
}

impl DummyDomainNotificationEvent {
    pub fn new() -> Self {
        Self {
            notification: NotificationMessage::with_message(DUMMY_MESSAGE),
        }
    }
}

impl DomainNotification for DummyDomainNotificationEvent {
    fn notification(&self) -> &NotificationMessage {
        &self.notification
    }
}

/// Notification that keeps the default message
#[derive(Debug, Clone, Default)]
pub struct PlainEvent {
    notification: NotificationMessage,
}

impl DomainNotification for PlainEvent {
    fn notification(&self) -> &NotificationMessage {
        &self.notification
    }
}

/// Notification carrying caller supplied text
#[derive(Debug, Clone)]
pub struct Labelled {
    notification: NotificationMessage,
}

impl Labelled {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            notification: NotificationMessage::with_message(label),
        }
    }
}

impl DomainNotification for Labelled {
    fn notification(&self) -> &NotificationMessage {
        &self.notification
    }
}

/// Entity whose business methods raise domain events
#[derive(Debug, Default)]
pub struct DummyEntity {
    base: EntityBase,
    triggered: u32,
}

impl DummyEntity {
    pub fn with_id(id: i32) -> Self {
        Self {
            base: EntityBase::with_id(id),
            triggered: 0,
        }
    }

    pub fn do_something_to_trigger_adding_event(&mut self) {
        self.triggered += 1;
        self.base.add_domain_event(DummyDomainNotificationEvent::new());
    }

    pub fn assign_id(&mut self, id: i32) {
        self.base.set_id(id);
    }

    pub fn label(&mut self, label: &str) {
        self.base.add_domain_event(Labelled::new(label));
    }

    pub fn triggered(&self) -> u32 {
        self.triggered
    }
}

impl Entity for DummyEntity {
    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn pending_events(&mut self) -> PendingEvents<'_> {
        self.base.pending_events()
    }
}

/// Handler that records "name:message" for every event it sees
pub struct RecordingHandler {
    name: String,
    seen: Arc<Mutex<Vec<String>>>,
}

impl RecordingHandler {
    pub fn new(name: &str) -> (Arc<Self>, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let handler = Arc::new(Self {
            name: name.to_string(),
            seen: Arc::clone(&seen),
        });
        (handler, seen)
    }
}

#[async_trait]
impl DomainEventHandler for RecordingHandler {
    fn name(&self) -> &str {
        &self.name
    }

    async fn handle(&self, event: &dyn DomainNotification) -> anyhow::Result<()> {
        let message = event.message().unwrap_or("<none>");
        self.seen
            .lock()
            .map_err(|_| anyhow::anyhow!("recorder poisoned"))?
            .push(format!("{}:{}", self.name, message));
        Ok(())
    }
}
