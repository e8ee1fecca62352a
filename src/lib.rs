//! A Linked Data Platform (LDP) resource engine backed by a named-graph RDF
//! quad store.
//!
//! Resources are derived, immutable projections of quads scattered across a
//! fixed set of named graphs (user-managed content, server-managed metadata,
//! an append-only audit trail, an ACL graph, and two graphs computed on
//! demand — containment and membership). [`service`] owns the resource
//! lifecycle (`create`/`replace`/`delete`/`add`/`touch`); [`projection`]
//! derives a [`resource::Resource`] view by running a fixed set of graph
//! patterns against a [`rdf::QuadStore`].
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use trellis_ldp::{
//!     config::ServiceConfig,
//!     metadata::InteractionModel,
//!     rdf::{Dataset, InMemoryQuadStore, NamedNode},
//!     service::{InMemoryResourceService, ResourceService, Session},
//! };
//!
//! # async fn run() {
//! let store = Arc::new(InMemoryQuadStore::new());
//! let service = InMemoryResourceService::new(store, ServiceConfig::default());
//!
//! let id = NamedNode::new("http://example.org/s1").unwrap();
//! let agent = NamedNode::new("http://example.org/agents/alice").unwrap();
//! let session = Session::new(agent, chrono::Utc::now());
//!
//! service
//!     .create(&id, &session, InteractionModel::rdf_source(), Dataset::new(), None, None)
//!     .await
//!     .unwrap();
//!
//! let resource = service.get(&id).await.unwrap();
//! assert!(resource.is_live());
//! # }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod event;
pub mod graphs;
pub mod metadata;
pub mod projection;
pub mod rdf;
pub mod resource;
pub mod service;
pub mod vocab;

// Re-export main types for convenience
pub use error::{EngineError, EngineResult, ProjectionError, ProjectionResult};

pub use event::{Event, EventSerializer, NoopEventSerializer};

pub use metadata::InteractionModel;

pub use rdf::{
    BlankNode, Dataset, InMemoryQuadStore, Literal, Mutation, NamedNode, Quad, QuadPattern,
    QuadStore, QuadStoreError, QuadStoreResult, RdfObject, RdfPredicate, RdfSubject, RdfTerm,
    Triple, TriplePattern,
};

pub use resource::{BinaryMetadata, MembershipConfig, ProjectionGraph, Resource, ResourceView};

pub use service::{BinaryDescription, InMemoryResourceService, ResourceService, Session};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
    }
}
