// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Registration
//!
//! A small service collection for binding capabilities to singleton
//! implementations, and the [`DomainEventPublisherExt`] helper that binds
//! [`DomainEventPublisher`] to [`InProcessDomainEventPublisher`].
//!
//! Registration and resolution are split: a [`ServiceCollection`] is built up
//! with `&mut` fluent calls, then frozen into a [`ServiceProvider`] that
//! creates each singleton on first resolve.
//!
//! ```rust
//! use domain_foundations::{DomainEventPublisher, DomainEventPublisherExt, ServiceCollection};
//! use std::sync::Arc;
//!
//! let mut services = ServiceCollection::new();
//! services.add_domain_event_publisher();
//!
//! let provider = services.build();
//! let first = provider.resolve::<dyn DomainEventPublisher>().unwrap();
//! let second = provider.resolve::<dyn DomainEventPublisher>().unwrap();
//! assert!(Arc::ptr_eq(&first, &second));
//! ```

use std::any::{type_name, Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

use crate::config::PublisherConfig;
use crate::errors::{FoundationError, FoundationResult};
use crate::publisher::{DomainEventHandler, DomainEventPublisher, InProcessDomainEventPublisher};

type Instance = Box<dyn Any + Send + Sync>;
type Factory = Box<dyn Fn(&ServiceProvider) -> FoundationResult<Instance> + Send + Sync>;

struct ServiceDescriptor {
    service: &'static str,
    factory: Factory,
}

/// Registrations waiting to be built into a [`ServiceProvider`]
#[derive(Default)]
pub struct ServiceCollection {
    descriptors: HashMap<TypeId, ServiceDescriptor>,
}

impl ServiceCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind service `S` to a singleton produced by `factory`
    ///
    /// `S` may be a trait object such as `dyn DomainEventPublisher`.
    /// Registering the same service again replaces the earlier binding.
    pub fn add_singleton<S, F>(&mut self, factory: F) -> &mut Self
    where
        S: ?Sized + Send + Sync + 'static,
        F: Fn(&ServiceProvider) -> FoundationResult<Arc<S>> + Send + Sync + 'static,
    {
        let service = type_name::<S>();
        let factory: Factory = Box::new(move |provider| {
            let instance = factory(provider)?;
            Ok(Box::new(instance) as Instance)
        });

        let replaced = self
            .descriptors
            .insert(TypeId::of::<S>(), ServiceDescriptor { service, factory })
            .is_some();

        debug!(service, replaced, "Registered singleton service");
        self
    }

    /// Whether service `S` has a binding
    pub fn contains<S>(&self) -> bool
    where
        S: ?Sized + 'static,
    {
        self.descriptors.contains_key(&TypeId::of::<S>())
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the collection has no bindings
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Freeze the registrations into a provider
    pub fn build(self) -> ServiceProvider {
        info!(services = self.descriptors.len(), "Service provider built");

        let slots = self
            .descriptors
            .into_iter()
            .map(|(type_id, descriptor)| {
                let slot = SingletonSlot {
                    service: descriptor.service,
                    factory: descriptor.factory,
                    instance: OnceLock::new(),
                };
                (type_id, slot)
            })
            .collect();

        ServiceProvider { slots }
    }
}

impl fmt::Debug for ServiceCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let services: Vec<_> = self.descriptors.values().map(|d| d.service).collect();
        f.debug_struct("ServiceCollection")
            .field("services", &services)
            .finish()
    }
}

struct SingletonSlot {
    service: &'static str,
    factory: Factory,
    instance: OnceLock<Instance>,
}

thread_local! {
    // (provider address, service) pairs whose factories are running on this thread
    static RESOLVING: RefCell<Vec<(usize, TypeId)>> = const { RefCell::new(Vec::new()) };
}

/// Marks a service as being created on the current thread until dropped
struct ResolveGuard {
    key: (usize, TypeId),
}

impl ResolveGuard {
    fn enter(key: (usize, TypeId), service: &'static str) -> FoundationResult<Self> {
        RESOLVING.with(|resolving| {
            let mut resolving = resolving.borrow_mut();
            if resolving.contains(&key) {
                return Err(FoundationError::CircularDependency { service });
            }
            resolving.push(key);
            Ok(Self { key })
        })
    }
}

impl Drop for ResolveGuard {
    fn drop(&mut self) {
        RESOLVING.with(|resolving| {
            let mut resolving = resolving.borrow_mut();
            if let Some(pos) = resolving.iter().rposition(|key| *key == self.key) {
                resolving.remove(pos);
            }
        });
    }
}

/// Resolves singletons registered in a [`ServiceCollection`]
pub struct ServiceProvider {
    slots: HashMap<TypeId, SingletonSlot>,
}

impl ServiceProvider {
    /// Resolve service `S`, creating it on first use
    ///
    /// Every call within the same provider returns the same `Arc`. Two threads
    /// resolving a service for the first time may both run its factory; only
    /// the first stored instance is kept and handed out. A factory that
    /// resolves its own service, directly or through other factories, gets
    /// [`FoundationError::CircularDependency`].
    pub fn resolve<S>(&self) -> FoundationResult<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        let slot = self
            .slots
            .get(&TypeId::of::<S>())
            .ok_or(FoundationError::ServiceNotRegistered {
                service: type_name::<S>(),
            })?;

        let instance = match slot.instance.get() {
            Some(instance) => instance,
            None => {
                let key = (self as *const Self as usize, TypeId::of::<S>());
                let guard = ResolveGuard::enter(key, slot.service)?;
                let created = (slot.factory)(self)?;
                drop(guard);
                debug!(service = slot.service, "Singleton service created");
                // A concurrent resolve may have won; keep whichever was stored first.
                let _ = slot.instance.set(created);
                slot.instance
                    .get()
                    .ok_or(FoundationError::ServiceTypeMismatch { service: slot.service })?
            }
        };

        (**instance)
            .downcast_ref::<Arc<S>>()
            .cloned()
            .ok_or(FoundationError::ServiceTypeMismatch { service: slot.service })
    }

    /// Whether service `S` has a binding
    pub fn contains<S>(&self) -> bool
    where
        S: ?Sized + 'static,
    {
        self.slots.contains_key(&TypeId::of::<S>())
    }
}

impl fmt::Debug for ServiceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let services: Vec<_> = self.slots.values().map(|s| s.service).collect();
        f.debug_struct("ServiceProvider")
            .field("services", &services)
            .finish()
    }
}

/// Registration helpers for the domain event publisher
pub trait DomainEventPublisherExt {
    /// Bind `dyn DomainEventPublisher` to a default [`InProcessDomainEventPublisher`]
    fn add_domain_event_publisher(&mut self) -> &mut Self;

    /// Bind `dyn DomainEventPublisher` with explicit config and initial handlers
    fn add_domain_event_publisher_with(
        &mut self,
        config: PublisherConfig,
        handlers: Vec<Arc<dyn DomainEventHandler>>,
    ) -> &mut Self;
}

impl DomainEventPublisherExt for ServiceCollection {
    fn add_domain_event_publisher(&mut self) -> &mut Self {
        self.add_domain_event_publisher_with(PublisherConfig::default(), Vec::new())
    }

    fn add_domain_event_publisher_with(
        &mut self,
        config: PublisherConfig,
        handlers: Vec<Arc<dyn DomainEventHandler>>,
    ) -> &mut Self {
        self.add_singleton::<dyn DomainEventPublisher, _>(move |_| {
            let publisher = InProcessDomainEventPublisher::with_handlers(config.clone(), handlers.clone());
            Ok(Arc::new(publisher) as Arc<dyn DomainEventPublisher>)
        })
    }
}
