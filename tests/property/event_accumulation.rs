// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Event Accumulation
//!
//! For any sequence of labels fed to an entity's business method, the
//! exposed events are exactly that sequence, in call order.

use proptest::prelude::*;

use crate::fixtures::DummyEntity;
use domain_foundations::{DomainNotification, Entity};

fn label_sequences() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{0,8}", 0..32)
}

fn recorded(entity: &DummyEntity) -> Vec<String> {
    entity
        .domain_events()
        .iter()
        .map(|e| e.message().unwrap_or_default().to_string())
        .collect()
}

proptest! {
    /// Property: domain_events == [m1, m2, ..., mn]
    #[test]
    fn prop_events_match_call_sequence(id in any::<i32>(), labels in label_sequences()) {
        let mut entity = DummyEntity::with_id(id);
        for label in &labels {
            entity.label(label);
        }

        prop_assert_eq!(entity.id(), id);
        prop_assert_eq!(recorded(&entity), labels);
    }

    /// Property: the event count never decreases while recording
    #[test]
    fn prop_event_count_is_monotonic(labels in label_sequences()) {
        let mut entity = DummyEntity::default();
        let mut previous = 0;

        for label in &labels {
            entity.label(label);
            let current = entity.domain_events().len();
            prop_assert_eq!(current, previous + 1);
            previous = current;
        }
    }

    /// Property: taking returns the full sequence and leaves nothing behind
    #[test]
    fn prop_take_returns_everything_in_order(labels in label_sequences()) {
        let mut entity = DummyEntity::default();
        for label in &labels {
            entity.label(label);
        }

        let taken: Vec<String> = entity
            .take_domain_events()
            .iter()
            .map(|e| e.message().unwrap_or_default().to_string())
            .collect();

        prop_assert_eq!(taken, labels);
        prop_assert!(entity.domain_events().is_empty());
    }
}
