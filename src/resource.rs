//! The `Resource` view and the `MISSING`/`DELETED` tagged variant.
//!
//! `ResourceView` is a closed tagged variant: `Live`, `Missing`, or
//! `Deleted`, and only the `Live` arm carries metadata and a projection
//! accessor.

use crate::metadata::InteractionModel;
use crate::rdf::{NamedNode, Quad, QuadStore};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Binary descriptor for a `NonRDFSource`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMetadata {
    pub location: NamedNode,
    pub modified: DateTime<Utc>,
    pub mime_type: Option<String>,
    pub size: Option<u64>,
}

/// Container membership configuration, present only on `DirectContainer`/
/// `IndirectContainer` resources.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MembershipConfig {
    pub membership_resource: Option<NamedNode>,
    pub has_member_relation: Option<NamedNode>,
    pub is_member_of_relation: Option<NamedNode>,
    pub inserted_content_relation: Option<NamedNode>,
}

/// The fixed set of projection graphs a live resource exposes. Implemented
/// as a closed enum dispatched by `match` in [`crate::projection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionGraph {
    UserManaged,
    ServerManaged,
    Audit,
    AccessControl,
    Containment,
    Membership,
}

impl ProjectionGraph {
    /// The `trellis:Prefer*` IRI naming this projection graph, used only for
    /// display/diagnostics — the actual storage location for each graph is
    /// resolved by [`crate::projection`], not by this IRI.
    pub fn prefer_iri(self) -> &'static str {
        use crate::vocab::trellis::*;
        match self {
            ProjectionGraph::UserManaged => PREFER_USER_MANAGED,
            ProjectionGraph::ServerManaged => PREFER_SERVER_MANAGED,
            ProjectionGraph::Audit => PREFER_AUDIT,
            ProjectionGraph::AccessControl => PREFER_ACCESS_CONTROL,
            ProjectionGraph::Containment => PREFER_CONTAINMENT,
            ProjectionGraph::Membership => PREFER_MEMBERSHIP,
        }
    }
}

/// A live resource snapshot: metadata plus a handle back to the store for
/// lazy, on-demand projection streams. Immutable once returned.
#[derive(Clone)]
pub struct Resource {
    pub id: NamedNode,
    pub interaction_model: InteractionModel,
    pub modified: DateTime<Utc>,
    pub parent: Option<NamedNode>,
    pub binary: Option<BinaryMetadata>,
    pub membership: MembershipConfig,
    pub(crate) store: Arc<dyn QuadStore>,
}

impl Resource {
    /// Quads in the given projection graph, computed on demand.
    ///
    /// `include_type_triple` only affects [`ProjectionGraph::UserManaged`]:
    /// when true, `(id, rdf:type, interactionModel)` is prepended.
    pub fn stream(
        &self,
        graph: ProjectionGraph,
        include_type_triple: bool,
    ) -> crate::error::EngineResult<Vec<Quad>> {
        crate::projection::project_graph(self, graph, include_type_triple).map_err(Into::into)
    }
}

impl std::fmt::Debug for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource")
            .field("id", &self.id)
            .field("interaction_model", &self.interaction_model)
            .field("modified", &self.modified)
            .field("parent", &self.parent)
            .field("binary", &self.binary)
            .field("membership", &self.membership)
            .finish()
    }
}

/// `ResourceView = Live(Resource) | Missing | Deleted`.
#[derive(Clone)]
pub enum ResourceView {
    Live(Resource),
    Missing,
    Deleted,
}

impl ResourceView {
    pub fn is_live(&self) -> bool {
        matches!(self, ResourceView::Live(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ResourceView::Missing)
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, ResourceView::Deleted)
    }

    /// The live resource, if this view is `Live`.
    pub fn as_live(&self) -> Option<&Resource> {
        match self {
            ResourceView::Live(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_live(self) -> Option<Resource> {
        match self {
            ResourceView::Live(r) => Some(r),
            _ => None,
        }
    }
}

impl std::fmt::Debug for ResourceView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceView::Live(r) => f.debug_tuple("Live").field(r).finish(),
            ResourceView::Missing => write!(f, "Missing"),
            ResourceView::Deleted => write!(f, "Deleted"),
        }
    }
}
