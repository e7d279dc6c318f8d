// Copyright (c) 2025 - Cowboy AI, Inc.
//! Entity Base with Domain Event Accumulation
//!
//! Concrete entities compose an [`EntityBase`] in a private field and
//! implement [`Entity`] to expose it read-only. Business methods on the
//! concrete entity record what happened through
//! [`EntityBase::add_domain_event`]; nothing outside the entity can reach the
//! base mutably, so the event list can only grow from within.
//!
//! # Event Flow
//!
//! ```text
//! Business method → add_domain_event → domain_events()
//!                                          ↓
//!                        Unit of work → take_domain_events() → Publisher
//! ```
//!
//! # Example
//!
//! ```rust
//! use domain_foundations::{
//!     DomainNotification, Entity, EntityBase, NotificationMessage, PendingEvents,
//! };
//!
//! #[derive(Debug)]
//! struct Renamed {
//!     notification: NotificationMessage,
//! }
//!
//! impl DomainNotification for Renamed {
//!     fn notification(&self) -> &NotificationMessage {
//!         &self.notification
//!     }
//! }
//!
//! #[derive(Debug, Default)]
//! struct Customer {
//!     base: EntityBase,
//!     name: String,
//! }
//!
//! impl Customer {
//!     fn rename(&mut self, name: &str) {
//!         self.name = name.to_string();
//!         self.base.add_domain_event(Renamed {
//!             notification: NotificationMessage::with_message(format!("Renamed to {name}")),
//!         });
//!     }
//! }
//!
//! impl Entity for Customer {
//!     fn base(&self) -> &EntityBase {
//!         &self.base
//!     }
//!
//!     fn pending_events(&mut self) -> PendingEvents<'_> {
//!         self.base.pending_events()
//!     }
//! }
//!
//! let mut customer = Customer::default();
//! customer.rename("Ada");
//!
//! assert_eq!(customer.id(), 0);
//! assert_eq!(customer.domain_events().len(), 1);
//! assert_eq!(customer.domain_events()[0].message(), Some("Renamed to Ada"));
//! ```

use tracing::debug;

use crate::notification::DomainNotification;

/// Identity plus the ordered list of domain events raised by an entity
///
/// # Invariants
/// - Events keep insertion order; duplicates are allowed
/// - The list is only ever handed out as a shared slice
/// - Both constructors start with no events
#[derive(Debug, Default)]
pub struct EntityBase {
    id: i32,
    domain_events: Vec<Box<dyn DomainNotification>>,
}

impl EntityBase {
    /// Create a base with `id == 0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a base with the given identifier
    pub fn with_id(id: i32) -> Self {
        Self {
            id,
            domain_events: Vec::new(),
        }
    }

    /// Current identifier
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Replace the identifier
    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    /// Events recorded so far, oldest first
    pub fn domain_events(&self) -> &[Box<dyn DomainNotification>] {
        &self.domain_events
    }

    /// Record a domain event
    pub fn add_domain_event<E>(&mut self, event: E)
    where
        E: DomainNotification + 'static,
    {
        self.push_boxed(Box::new(event));
    }

    /// Record an already boxed domain event
    pub fn push_boxed(&mut self, event: Box<dyn DomainNotification>) {
        debug!(
            entity_id = self.id,
            event_id = %event.event_id(),
            event_type = event.event_type(),
            pending = self.domain_events.len() + 1,
            "Domain event recorded"
        );
        self.domain_events.push(event);
    }

    /// Drain handle for the owning entity's [`Entity::pending_events`]
    pub fn pending_events(&mut self) -> PendingEvents<'_> {
        PendingEvents {
            entity_id: self.id,
            events: &mut self.domain_events,
        }
    }
}

/// Drain-only access to an entity's recorded events
///
/// Handed to the unit of work that owns the entity. It can take or discard
/// events but never add them.
#[derive(Debug)]
pub struct PendingEvents<'a> {
    entity_id: i32,
    events: &'a mut Vec<Box<dyn DomainNotification>>,
}

impl PendingEvents<'_> {
    /// Number of events waiting
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing is waiting
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove and return every event, oldest first
    pub fn take(self) -> Vec<Box<dyn DomainNotification>> {
        std::mem::take(self.events)
    }

    /// Discard every event
    pub fn clear(self) {
        debug!(entity_id = self.entity_id, dropped = self.events.len(), "Domain events cleared");
        self.events.clear();
    }
}

/// A domain entity that owns an [`EntityBase`]
///
/// Keep the base in a private field. The trait only exposes it by shared
/// reference plus a [`PendingEvents`] handle, so `add_domain_event` stays
/// reachable from the entity's own methods alone.
///
/// Reading and draining through the trait works:
///
/// ```rust
/// # use domain_foundations::{Entity, EntityBase, NotificationMessage, PendingEvents};
/// # #[derive(Debug, Default)]
/// # struct Account {
/// #     base: EntityBase,
/// # }
/// # impl Entity for Account {
/// #     fn base(&self) -> &EntityBase {
/// #         &self.base
/// #     }
/// #     fn pending_events(&mut self) -> PendingEvents<'_> {
/// #         self.base.pending_events()
/// #     }
/// # }
/// # let mut account = Account::default();
/// assert!(account.domain_events().is_empty());
/// assert!(account.base().domain_events().is_empty());
/// assert!(account.take_domain_events().is_empty());
/// ```
///
/// The exposed view is a shared slice and cannot grow:
///
/// ```compile_fail
/// # use domain_foundations::{Entity, EntityBase, NotificationMessage, PendingEvents};
/// # #[derive(Debug, Default)]
/// # struct Account {
/// #     base: EntityBase,
/// # }
/// # impl Entity for Account {
/// #     fn base(&self) -> &EntityBase {
/// #         &self.base
/// #     }
/// #     fn pending_events(&mut self) -> PendingEvents<'_> {
/// #         self.base.pending_events()
/// #     }
/// # }
/// # let mut account = Account::default();
/// account.domain_events().push(Box::new(NotificationMessage::default()));
/// ```
///
/// The shared base cannot record events:
///
/// ```compile_fail
/// # use domain_foundations::{Entity, EntityBase, NotificationMessage, PendingEvents};
/// # #[derive(Debug, Default)]
/// # struct Account {
/// #     base: EntityBase,
/// # }
/// # impl Entity for Account {
/// #     fn base(&self) -> &EntityBase {
/// #         &self.base
/// #     }
/// #     fn pending_events(&mut self) -> PendingEvents<'_> {
/// #         self.base.pending_events()
/// #     }
/// # }
/// # let mut account = Account::default();
/// account.base().add_domain_event(NotificationMessage::default());
/// ```
///
/// The drain handle has no way to append:
///
/// ```compile_fail
/// # use domain_foundations::{Entity, EntityBase, NotificationMessage, PendingEvents};
/// # #[derive(Debug, Default)]
/// # struct Account {
/// #     base: EntityBase,
/// # }
/// # impl Entity for Account {
/// #     fn base(&self) -> &EntityBase {
/// #         &self.base
/// #     }
/// #     fn pending_events(&mut self) -> PendingEvents<'_> {
/// #         self.base.pending_events()
/// #     }
/// # }
/// # let mut account = Account::default();
/// account.pending_events().push_boxed(Box::new(NotificationMessage::default()));
/// ```
pub trait Entity {
    /// The composed base
    fn base(&self) -> &EntityBase;

    /// Drain handle over the recorded events, usually `self.base.pending_events()`
    fn pending_events(&mut self) -> PendingEvents<'_>;

    /// Current identifier
    fn id(&self) -> i32 {
        self.base().id()
    }

    /// Read-only, insertion-ordered view of the recorded events
    fn domain_events(&self) -> &[Box<dyn DomainNotification>] {
        self.base().domain_events()
    }

    /// Whether any events are waiting to be published
    fn has_domain_events(&self) -> bool {
        !self.domain_events().is_empty()
    }

    /// Remove and return every recorded event, oldest first
    fn take_domain_events(&mut self) -> Vec<Box<dyn DomainNotification>> {
        self.pending_events().take()
    }

    /// Discard every recorded event
    fn clear_domain_events(&mut self) {
        self.pending_events().clear();
    }
}
