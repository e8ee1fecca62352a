//! Named-graph quad store.
//!
//! Generalizes the single triple-store-with-bolted-on-graphs shape into the
//! capability the resource engine actually needs: every quad lives in
//! exactly one named graph, and queries are conjunctive patterns over
//! (graph, subject, predicate, object) with any component left as a
//! variable. The projection layer never reaches past this trait into
//! query-engine vocabulary.

use super::types::{NamedNode, Quad, QuadPattern, RdfPredicate, RdfSubject};
use indexmap::IndexSet;
use std::sync::RwLock;
use thiserror::Error;

/// Quad store errors.
#[derive(Error, Debug)]
pub enum QuadStoreError {
    /// The backend (in-memory or external) failed to complete the operation.
    #[error("quad store backend failure: {0}")]
    BackendFailure(String),
}

pub type QuadStoreResult<T> = Result<T, QuadStoreError>;

/// A single write against the store, used by [`QuadStore::apply`] to batch
/// the multi-graph writes `create`/`replace`/`delete` need into one
/// identifier-scoped unit.
#[derive(Debug, Clone)]
pub enum Mutation {
    Insert(Quad),
    RemoveGraph(NamedNode),
    RemoveSubject(NamedNode, RdfSubject),
    /// Remove every quad in `graph` matching both `subject` and `predicate` —
    /// a more surgical cousin of `RemoveSubject`, used to replace a single
    /// server-managed field (e.g. `dc:modified`) without disturbing the rest
    /// of that subject's row.
    RemoveSubjectPredicate(NamedNode, RdfSubject, RdfPredicate),
}

/// Minimal capability every backend (in-memory or an external triplestore
/// speaking a remote query/update protocol) must provide. Callers above this
/// trait never see whether a given instance is in-memory or remote.
pub trait QuadStore: Send + Sync {
    /// Insert a quad. Inserting an already-present quad is a no-op.
    fn insert(&self, quad: Quad) -> QuadStoreResult<()>;

    /// Remove a single quad. Removing an absent quad is a no-op.
    fn remove(&self, quad: &Quad) -> QuadStoreResult<()>;

    /// Remove every quad in the given named graph.
    fn remove_graph(&self, graph: &NamedNode) -> QuadStoreResult<()>;

    /// Remove every quad in `graph` with the given subject. Used by
    /// `replace`/`delete` to clear one resource's server-managed metadata
    /// out of the shared `PreferServerManaged` graph without disturbing
    /// other resources' rows in that same graph.
    fn remove_subject(&self, graph: &NamedNode, subject: &super::types::RdfSubject) -> QuadStoreResult<()>;

    /// Evaluate a conjunctive pattern, returning every matching quad.
    ///
    /// Iteration order is deterministic for a fixed store state (insertion
    /// order within each named graph).
    fn query(&self, pattern: &QuadPattern) -> QuadStoreResult<Vec<Quad>>;

    /// Whether any quad matches the pattern, without materializing results.
    fn exists(&self, pattern: &QuadPattern) -> QuadStoreResult<bool> {
        Ok(!self.query(pattern)?.is_empty())
    }

    /// Apply a batch of mutations as a single identifier-scoped unit: readers
    /// observe either the pre-state or the post-state, never a mix. The
    /// default implementation applies mutations one at a time and does not
    /// provide that guarantee on its own — backends for which cross-call
    /// atomicity matters (this crate's in-memory backend among them) should
    /// override it.
    fn apply(&self, mutations: Vec<Mutation>) -> QuadStoreResult<()> {
        for m in mutations {
            match m {
                Mutation::Insert(q) => self.insert(q)?,
                Mutation::RemoveGraph(g) => self.remove_graph(&g)?,
                Mutation::RemoveSubject(g, s) => self.remove_subject(&g, &s)?,
                Mutation::RemoveSubjectPredicate(g, s, p) => {
                    let rows = self.query(&QuadPattern {
                        subject: Some(s),
                        predicate: Some(p),
                        object: None,
                        graph: Some(Some(g)),
                    })?;
                    for row in rows {
                        self.remove(&row)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// In-memory backend: one ordered triple set per named graph.
///
/// `IndexSet` (rather than `HashSet`) buys the deterministic-iteration
/// requirement for free — insertion order is preserved, so repeated queries
/// against the same store state return quads in the same order.
#[derive(Default)]
pub struct InMemoryQuadStore {
    graphs: RwLock<indexmap::IndexMap<NamedNode, IndexSet<super::types::Triple>>>,
}

impl InMemoryQuadStore {
    /// A fresh, empty store.
    pub fn new() -> Self {
        Self {
            graphs: RwLock::new(indexmap::IndexMap::new()),
        }
    }

    /// Total number of quads across every graph. Test/debugging helper.
    pub fn len(&self) -> usize {
        self.graphs
            .read()
            .expect("quad store lock poisoned")
            .values()
            .map(|triples| triples.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QuadStore for InMemoryQuadStore {
    fn insert(&self, quad: Quad) -> QuadStoreResult<()> {
        let graph = quad
            .graph
            .clone()
            .ok_or_else(|| QuadStoreError::BackendFailure("quad has no named graph".into()))?;
        let mut graphs = self.graphs.write().expect("quad store lock poisoned");
        graphs.entry(graph).or_default().insert(quad.as_triple());
        Ok(())
    }

    fn remove(&self, quad: &Quad) -> QuadStoreResult<()> {
        let Some(graph) = quad.graph.as_ref() else {
            return Ok(());
        };
        let mut graphs = self.graphs.write().expect("quad store lock poisoned");
        if let Some(triples) = graphs.get_mut(graph) {
            triples.shift_remove(&quad.as_triple());
        }
        Ok(())
    }

    fn remove_graph(&self, graph: &NamedNode) -> QuadStoreResult<()> {
        let mut graphs = self.graphs.write().expect("quad store lock poisoned");
        graphs.shift_remove(graph);
        Ok(())
    }

    fn remove_subject(&self, graph: &NamedNode, subject: &super::types::RdfSubject) -> QuadStoreResult<()> {
        let mut graphs = self.graphs.write().expect("quad store lock poisoned");
        if let Some(triples) = graphs.get_mut(graph) {
            triples.retain(|t| &t.subject != subject);
        }
        Ok(())
    }

    fn apply(&self, mutations: Vec<Mutation>) -> QuadStoreResult<()> {
        let mut graphs = self.graphs.write().expect("quad store lock poisoned");
        for m in mutations {
            match m {
                Mutation::Insert(q) => {
                    let graph = q
                        .graph
                        .clone()
                        .ok_or_else(|| QuadStoreError::BackendFailure("quad has no named graph".into()))?;
                    graphs.entry(graph).or_default().insert(q.as_triple());
                }
                Mutation::RemoveGraph(g) => {
                    graphs.shift_remove(&g);
                }
                Mutation::RemoveSubject(g, s) => {
                    if let Some(triples) = graphs.get_mut(&g) {
                        triples.retain(|t| t.subject != s);
                    }
                }
                Mutation::RemoveSubjectPredicate(g, s, p) => {
                    if let Some(triples) = graphs.get_mut(&g) {
                        triples.retain(|t| !(t.subject == s && t.predicate == p));
                    }
                }
            }
        }
        Ok(())
    }

    fn query(&self, pattern: &QuadPattern) -> QuadStoreResult<Vec<Quad>> {
        let graphs = self.graphs.read().expect("quad store lock poisoned");

        let mut results = Vec::new();
        match &pattern.graph {
            // Graph pinned to a specific named graph (Some(Some(g))) or the
            // default graph (Some(None), never populated by this engine).
            Some(Some(g)) => {
                if let Some(triples) = graphs.get(g) {
                    for t in triples {
                        let quad = Quad::new(
                            t.subject.clone(),
                            t.predicate.clone(),
                            t.object.clone(),
                            Some(g.clone()),
                        );
                        if pattern.matches(&quad) {
                            results.push(quad);
                        }
                    }
                }
            }
            Some(None) => {
                // Default graph is never used by this engine; nothing to match.
            }
            None => {
                for (g, triples) in graphs.iter() {
                    for t in triples {
                        let quad = Quad::new(
                            t.subject.clone(),
                            t.predicate.clone(),
                            t.object.clone(),
                            Some(g.clone()),
                        );
                        if pattern.matches(&quad) {
                            results.push(quad);
                        }
                    }
                }
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::types::{Literal, RdfPredicate, RdfSubject, Triple};

    fn quad(s: &str, p: &str, o: &str, g: &str) -> Quad {
        let subject: RdfSubject = NamedNode::new(s).unwrap().into();
        let predicate = RdfPredicate::new(p).unwrap();
        let object = Literal::new_simple_literal(o).into();
        let graph = NamedNode::new(g).unwrap();
        Quad::new(subject, predicate, object, Some(graph))
    }

    #[test]
    fn insert_and_query_by_graph() {
        let store = InMemoryQuadStore::new();
        store.insert(quad("http://ex/s1", "http://ex/p", "v1", "http://ex/s1")).unwrap();
        store.insert(quad("http://ex/s1", "http://ex/p", "v2", "http://ex/s1?ext=audit")).unwrap();

        let pattern = QuadPattern {
            subject: None,
            predicate: None,
            object: None,
            graph: Some(Some(NamedNode::new("http://ex/s1").unwrap())),
        };
        let results = store.query(&pattern).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn remove_subject_scopes_to_graph_and_subject() {
        let store = InMemoryQuadStore::new();
        let g = NamedNode::new("http://ex/server-managed").unwrap();
        store
            .insert(quad("http://ex/r1", "http://ex/p", "v1", "http://ex/server-managed"))
            .unwrap();
        store
            .insert(quad("http://ex/r2", "http://ex/p", "v2", "http://ex/server-managed"))
            .unwrap();

        let subject: RdfSubject = NamedNode::new("http://ex/r1").unwrap().into();
        store.remove_subject(&g, &subject).unwrap();

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_insert_is_a_no_op_not_an_error() {
        let store = InMemoryQuadStore::new();
        let q = quad("http://ex/s1", "http://ex/p", "v1", "http://ex/s1");
        store.insert(q.clone()).unwrap();
        store.insert(q).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn deterministic_iteration_preserves_insertion_order() {
        let store = InMemoryQuadStore::new();
        let graph = "http://ex/s1";
        for i in 0..5 {
            store
                .insert(quad("http://ex/s1", "http://ex/p", &format!("v{i}"), graph))
                .unwrap();
        }
        let pattern = QuadPattern {
            subject: None,
            predicate: None,
            object: None,
            graph: Some(Some(NamedNode::new(graph).unwrap())),
        };
        let first = store.query(&pattern).unwrap();
        let second = store.query(&pattern).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn remove_graph_clears_only_that_graph() {
        let store = InMemoryQuadStore::new();
        store.insert(quad("http://ex/s1", "http://ex/p", "v1", "http://ex/g1")).unwrap();
        store.insert(quad("http://ex/s1", "http://ex/p", "v1", "http://ex/g2")).unwrap();

        store.remove_graph(&NamedNode::new("http://ex/g1").unwrap()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn exists_short_circuits_without_error() {
        let store = InMemoryQuadStore::new();
        store.insert(quad("http://ex/s1", "http://ex/p", "v1", "http://ex/s1")).unwrap();
        let pattern = QuadPattern {
            subject: Some(NamedNode::new("http://ex/s1").unwrap().into()),
            predicate: None,
            object: None,
            graph: None,
        };
        assert!(store.exists(&pattern).unwrap());
    }

    #[test]
    fn apply_batches_removal_and_insertion() {
        let store = InMemoryQuadStore::new();
        let g = NamedNode::new("http://ex/server-managed").unwrap();
        store.insert(quad("http://ex/r1", "http://ex/p", "old", "http://ex/server-managed")).unwrap();

        let subject: RdfSubject = NamedNode::new("http://ex/r1").unwrap().into();
        let new_quad = quad("http://ex/r1", "http://ex/p", "new", "http://ex/server-managed");
        store
            .apply(vec![
                Mutation::RemoveSubject(g.clone(), subject),
                Mutation::Insert(new_quad.clone()),
            ])
            .unwrap();

        let pattern = QuadPattern {
            subject: None,
            predicate: None,
            object: None,
            graph: Some(Some(g)),
        };
        let rows = store.query(&pattern).unwrap();
        assert_eq!(rows, vec![new_quad]);
    }
}
