//! RDF primitives and the named-graph quad store backing the resource engine.
//!
//! - [`types`] — IRI/literal/blank-node/quad primitives (`oxrdf` wrappers) plus
//!   the `Dataset` container callers use to hand content to the service layer.
//! - [`quadstore`] — the `QuadStore` capability and its in-memory reference
//!   implementation.

mod quadstore;
mod types;

pub use types::{
    BlankNode, Dataset, Literal, NamedNode, Quad, QuadPattern, RdfObject, RdfPredicate,
    RdfSubject, RdfTerm, Triple, TriplePattern,
};

pub use quadstore::{InMemoryQuadStore, Mutation, QuadStore, QuadStoreError, QuadStoreResult};
