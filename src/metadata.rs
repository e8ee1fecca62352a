//! Interaction-model classification and the `MISSING`/`DELETED` sentinels.

use crate::rdf::{NamedNode, Quad, RdfObject, RdfPredicate};
use crate::vocab;
use std::collections::HashSet;
use std::fmt;

/// An LDP interaction model, compared by IRI equality only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InteractionModel(NamedNode);

impl InteractionModel {
    /// Wrap an arbitrary IRI as an interaction model without checking it
    /// against the known six — used when reading whatever IRI a backend
    /// happens to have stored.
    pub fn from_iri(iri: NamedNode) -> Self {
        Self(iri)
    }

    pub fn rdf_source() -> Self {
        Self(NamedNode::new(vocab::ldp::RDF_SOURCE).expect("static IRI"))
    }

    pub fn non_rdf_source() -> Self {
        Self(NamedNode::new(vocab::ldp::NON_RDF_SOURCE).expect("static IRI"))
    }

    pub fn container() -> Self {
        Self(NamedNode::new(vocab::ldp::CONTAINER).expect("static IRI"))
    }

    pub fn basic_container() -> Self {
        Self(NamedNode::new(vocab::ldp::BASIC_CONTAINER).expect("static IRI"))
    }

    pub fn direct_container() -> Self {
        Self(NamedNode::new(vocab::ldp::DIRECT_CONTAINER).expect("static IRI"))
    }

    pub fn indirect_container() -> Self {
        Self(NamedNode::new(vocab::ldp::INDIRECT_CONTAINER).expect("static IRI"))
    }

    pub fn as_named_node(&self) -> &NamedNode {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// True iff the IRI's lexical form ends with `Container`.
    pub fn is_container(&self) -> bool {
        self.0.as_str().ends_with(vocab::CONTAINER_SUFFIX)
    }

    /// Only `DirectContainer` and `IndirectContainer` carry membership
    /// predicates.
    pub fn supports_membership(&self) -> bool {
        self.0.as_str() == vocab::ldp::DIRECT_CONTAINER
            || self.0.as_str() == vocab::ldp::INDIRECT_CONTAINER
    }

    pub fn is_non_rdf_source(&self) -> bool {
        self.0.as_str() == vocab::ldp::NON_RDF_SOURCE
    }

    pub fn is_direct_container(&self) -> bool {
        self.0.as_str() == vocab::ldp::DIRECT_CONTAINER
    }

    pub fn is_indirect_container(&self) -> bool {
        self.0.as_str() == vocab::ldp::INDIRECT_CONTAINER
    }

    /// The set of all six interaction models the specification names.
    pub fn all() -> HashSet<InteractionModel> {
        vocab::ALL_INTERACTION_MODELS
            .iter()
            .map(|iri| InteractionModel(NamedNode::new(iri).expect("static IRI")))
            .collect()
    }
}

impl fmt::Display for InteractionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NamedNode> for InteractionModel {
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

impl From<InteractionModel> for NamedNode {
    fn from(model: InteractionModel) -> Self {
        model.0
    }
}

/// Whether a `PreferServerManaged` row for a resource represents a tombstone:
/// `(id, dc:type, trellis:DeletedResource)` present among its metadata quads.
pub fn row_is_deleted(row: &[Quad]) -> bool {
    let dc_type = RdfPredicate::new(vocab::dc::TYPE).expect("static IRI");
    row.iter().any(|q| {
        q.predicate == dc_type
            && matches!(&q.object, RdfObject::NamedNode(n) if n.as_str() == vocab::trellis::DELETED_RESOURCE)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_suffix_classification() {
        assert!(InteractionModel::basic_container().is_container());
        assert!(InteractionModel::direct_container().is_container());
        assert!(InteractionModel::indirect_container().is_container());
        assert!(!InteractionModel::rdf_source().is_container());
        assert!(!InteractionModel::non_rdf_source().is_container());
    }

    #[test]
    fn only_direct_and_indirect_support_membership() {
        assert!(InteractionModel::direct_container().supports_membership());
        assert!(InteractionModel::indirect_container().supports_membership());
        assert!(!InteractionModel::basic_container().supports_membership());
        assert!(!InteractionModel::container().supports_membership());
    }

    #[test]
    fn equality_is_by_iri_only() {
        let a = InteractionModel::rdf_source();
        let b = InteractionModel::from_iri(NamedNode::new(vocab::ldp::RDF_SOURCE).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn all_returns_six_models() {
        assert_eq!(InteractionModel::all().len(), 6);
    }

    #[test]
    fn deleted_row_detection() {
        use crate::rdf::{Quad, RdfPredicate};

        let id: crate::rdf::RdfSubject = NamedNode::new("http://example.org/s1").unwrap().into();
        let tombstone = Quad::new(
            id.clone(),
            RdfPredicate::new(vocab::dc::TYPE).unwrap(),
            NamedNode::new(vocab::trellis::DELETED_RESOURCE).unwrap().into(),
            Some(NamedNode::new(vocab::trellis::PREFER_SERVER_MANAGED).unwrap()),
        );
        assert!(row_is_deleted(&[tombstone]));

        let live = Quad::new(
            id,
            RdfPredicate::new(vocab::rdf::TYPE).unwrap(),
            NamedNode::new(vocab::ldp::RDF_SOURCE).unwrap().into(),
            Some(NamedNode::new(vocab::trellis::PREFER_SERVER_MANAGED).unwrap()),
        );
        assert!(!row_is_deleted(&[live]));
    }
}
