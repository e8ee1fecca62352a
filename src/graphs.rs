//! Named-graph IRI scheme.
//!
//! - `<id>` — user-managed triples for resource `id`.
//! - `<id>?ext=audit` — append-only audit triples.
//! - `<id>?ext=acl` — ACL triples.
//! - `trellis:PreferServerManaged` — server-managed metadata for *every*
//!   resource, keyed by subject = id (and, for `NonRDFSource`, a secondary
//!   subject = binary descriptor).

use crate::rdf::NamedNode;
use crate::vocab;

/// The user-managed graph for `id`: the identifier itself.
pub fn user_managed(id: &NamedNode) -> NamedNode {
    id.clone()
}

/// The append-only audit graph for `id`.
pub fn audit(id: &NamedNode) -> NamedNode {
    NamedNode::new(format!("{}?ext=audit", id.as_str())).expect("well-formed id plus suffix")
}

/// The ACL graph for `id`.
pub fn acl(id: &NamedNode) -> NamedNode {
    NamedNode::new(format!("{}?ext=acl", id.as_str())).expect("well-formed id plus suffix")
}

/// The single shared graph holding server-managed metadata for every
/// resource in the store.
pub fn server_managed() -> NamedNode {
    NamedNode::new(vocab::trellis::PREFER_SERVER_MANAGED).expect("static IRI")
}
