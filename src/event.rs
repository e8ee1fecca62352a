//! The event notification boundary: the engine emits an [`Event`] on
//! `create`/`replace`/`delete`; how it is serialized is an external
//! collaborator's concern, not this crate's.

use crate::rdf::NamedNode;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// A single state-transition notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub identifier: NamedNode,
    pub agents: HashSet<NamedNode>,
    pub target: NamedNode,
    pub target_types: HashSet<NamedNode>,
    pub activity_types: HashSet<NamedNode>,
    pub inbox: Option<NamedNode>,
    pub created: DateTime<Utc>,
}

/// Serializes an [`Event`] into whatever wire format the embedding
/// application wants. A serializer that cannot represent the event yields
/// `None` rather than failing the operation that produced it: the operation
/// succeeds even if its event fails to serialize.
pub trait EventSerializer: Send + Sync {
    fn serialize(&self, event: &Event) -> Option<String>;
}

/// A serializer that never produces output, for callers with no notification
/// sink wired up yet.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventSerializer;

impl EventSerializer for NoopEventSerializer {
    fn serialize(&self, _event: &Event) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_serializer_always_yields_none() {
        let event = Event {
            identifier: NamedNode::new("http://example.org/s1").unwrap(),
            agents: HashSet::new(),
            target: NamedNode::new("http://example.org/s1").unwrap(),
            target_types: HashSet::new(),
            activity_types: HashSet::new(),
            inbox: None,
            created: Utc::now(),
        };
        assert_eq!(NoopEventSerializer.serialize(&event), None);
    }
}
