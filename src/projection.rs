//! Resource projection: derives a [`ResourceView`] from the quad store by
//! running a fixed set of graph patterns against it.

use crate::error::{ProjectionError, ProjectionResult};
use crate::graphs;
use crate::metadata::{row_is_deleted, InteractionModel};
use crate::rdf::{NamedNode, Quad, QuadPattern, QuadStore, RdfObject, RdfPredicate, RdfSubject};
use crate::resource::{BinaryMetadata, MembershipConfig, ProjectionGraph, Resource, ResourceView};
use crate::vocab;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

fn pred(iri: &str) -> RdfPredicate {
    RdfPredicate::new(iri).expect("static vocabulary IRI")
}

/// Pattern matching every quad in `graph` with the given subject.
fn subject_pattern(graph: NamedNode, subject: NamedNode) -> QuadPattern {
    QuadPattern {
        subject: Some(RdfSubject::NamedNode(subject)),
        predicate: None,
        object: None,
        graph: Some(Some(graph)),
    }
}

/// Pattern matching every quad in `graph`, any subject/predicate/object.
fn whole_graph_pattern(graph: NamedNode) -> QuadPattern {
    QuadPattern {
        subject: None,
        predicate: None,
        object: None,
        graph: Some(Some(graph)),
    }
}

fn object_named_node(q: &Quad) -> Option<NamedNode> {
    match &q.object {
        RdfObject::NamedNode(n) => Some(n.clone()),
        _ => None,
    }
}

fn subject_named_node(q: &Quad) -> Option<NamedNode> {
    match &q.subject {
        RdfSubject::NamedNode(n) => Some(n.clone()),
        _ => None,
    }
}

fn object_literal_value(q: &Quad) -> Option<String> {
    match &q.object {
        RdfObject::Literal(l) => Some(l.value().to_string()),
        _ => None,
    }
}

fn first_object<'a>(rows: &'a [Quad], predicate: &str) -> Option<&'a Quad> {
    let p = pred(predicate);
    rows.iter().find(|q| q.predicate == p)
}

fn parse_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc.timestamp_opt(0, 0).single().expect("valid epoch"))
}

/// Read the `PreferServerManaged` row for `id`; `Ok(None)` means `MISSING`.
fn fetch_metadata_row(store: &dyn QuadStore, id: &NamedNode) -> ProjectionResult<Option<Vec<Quad>>> {
    let rows = store.query(&subject_pattern(graphs::server_managed(), id.clone()))?;
    if rows.is_empty() {
        Ok(None)
    } else {
        Ok(Some(rows))
    }
}

/// Fetch metadata, classify as `Missing`/`Deleted`/`Live`, and for `Live`
/// assemble the metadata fields (everything except the projection-graph
/// streams, which stay lazy).
pub fn find_resource(
    store: Arc<dyn QuadStore>,
    id: &NamedNode,
    _include_type_triple: bool,
) -> ProjectionResult<ResourceView> {
    let Some(rows) = fetch_metadata_row(store.as_ref(), id)? else {
        return Ok(ResourceView::Missing);
    };

    if row_is_deleted(&rows) {
        return Ok(ResourceView::Deleted);
    }

    let interaction_model = first_object(&rows, vocab::rdf::TYPE)
        .and_then(object_named_node)
        .map(InteractionModel::from_iri)
        .ok_or_else(|| {
            ProjectionError::MalformedContainerConfig(
                id.as_str().to_string(),
                "live resource missing rdf:type triple".to_string(),
            )
        })?;

    let modified = first_object(&rows, vocab::dc::MODIFIED)
        .and_then(object_literal_value)
        .map(|v| parse_timestamp(&v))
        .ok_or_else(|| {
            ProjectionError::MalformedContainerConfig(
                id.as_str().to_string(),
                "live resource missing dc:modified triple".to_string(),
            )
        })?;

    let parent = first_object(&rows, vocab::dc::IS_PART_OF).and_then(object_named_node);

    let binary = if interaction_model.is_non_rdf_source() {
        let location = first_object(&rows, vocab::dc::HAS_PART)
            .and_then(object_named_node)
            .ok_or_else(|| {
                ProjectionError::MalformedContainerConfig(
                    id.as_str().to_string(),
                    "NonRDFSource missing dc:hasPart triple".to_string(),
                )
            })?;

        let binary_rows = store.query(&subject_pattern(graphs::server_managed(), location.clone()))?;
        let binary_modified = first_object(&binary_rows, vocab::dc::MODIFIED)
            .and_then(object_literal_value)
            .map(|v| parse_timestamp(&v))
            .ok_or_else(|| {
                ProjectionError::MalformedContainerConfig(
                    id.as_str().to_string(),
                    "binary descriptor missing dc:modified triple".to_string(),
                )
            })?;
        let mime_type = first_object(&binary_rows, vocab::dc::FORMAT).and_then(object_literal_value);
        let size = first_object(&binary_rows, vocab::dc::EXTENT)
            .and_then(object_literal_value)
            .and_then(|v| v.parse::<u64>().ok());

        Some(BinaryMetadata {
            location,
            modified: binary_modified,
            mime_type,
            size,
        })
    } else {
        None
    };

    let membership = if interaction_model.supports_membership() {
        MembershipConfig {
            membership_resource: first_object(&rows, vocab::ldp::MEMBERSHIP_RESOURCE).and_then(object_named_node),
            has_member_relation: first_object(&rows, vocab::ldp::HAS_MEMBER_RELATION).and_then(object_named_node),
            is_member_of_relation: first_object(&rows, vocab::ldp::IS_MEMBER_OF_RELATION)
                .and_then(object_named_node),
            inserted_content_relation: first_object(&rows, vocab::ldp::INSERTED_CONTENT_RELATION)
                .and_then(object_named_node),
        }
    } else {
        MembershipConfig::default()
    };

    Ok(ResourceView::Live(Resource {
        id: id.clone(),
        interaction_model,
        modified,
        parent,
        binary,
        membership,
        store,
    }))
}

/// Per-graph dispatch table, implemented as a closed `match` over
/// [`ProjectionGraph`].
pub fn project_graph(
    resource: &Resource,
    graph: ProjectionGraph,
    include_type_triple: bool,
) -> ProjectionResult<Vec<Quad>> {
    match graph {
        ProjectionGraph::UserManaged => project_user_managed(resource, include_type_triple),
        ProjectionGraph::ServerManaged => {
            Ok(resource
                .store
                .query(&subject_pattern(graphs::server_managed(), resource.id.clone()))?)
        }
        ProjectionGraph::Audit => Ok(resource
            .store
            .query(&whole_graph_pattern(graphs::audit(&resource.id)))?),
        ProjectionGraph::AccessControl => Ok(resource
            .store
            .query(&whole_graph_pattern(graphs::acl(&resource.id)))?),
        ProjectionGraph::Containment => project_containment(resource),
        ProjectionGraph::Membership => project_membership(resource),
    }
}

fn project_user_managed(resource: &Resource, include_type_triple: bool) -> ProjectionResult<Vec<Quad>> {
    let graph = graphs::user_managed(&resource.id);
    let mut quads = resource.store.query(&whole_graph_pattern(graph.clone()))?;

    if include_type_triple {
        let type_quad = Quad::new(
            RdfSubject::NamedNode(resource.id.clone()),
            pred(vocab::rdf::TYPE),
            resource.interaction_model.as_named_node().clone().into(),
            Some(graph),
        );
        quads.insert(0, type_quad);
    }
    Ok(quads)
}

/// Containment (container models only): `(id, ldp:contains, ?child)` for
/// every `?child` with `?child dc:isPartOf id` in the server-managed graph.
fn project_containment(resource: &Resource) -> ProjectionResult<Vec<Quad>> {
    if !resource.interaction_model.is_container() {
        return Ok(Vec::new());
    }

    let is_part_of = pred(vocab::dc::IS_PART_OF);
    let pattern = QuadPattern {
        subject: None,
        predicate: Some(is_part_of),
        object: Some(RdfObject::NamedNode(resource.id.clone())),
        graph: Some(Some(graphs::server_managed())),
    };
    let rows = resource.store.query(&pattern)?;

    let ldp_contains = pred(vocab::ldp::CONTAINS);
    let containment_graph = NamedNode::new(vocab::trellis::PREFER_CONTAINMENT).expect("static IRI");
    Ok(rows
        .into_iter()
        .filter_map(|row| subject_named_node(&row))
        .map(|child| {
            Quad::new(
                RdfSubject::NamedNode(resource.id.clone()),
                ldp_contains.clone(),
                RdfObject::NamedNode(child),
                Some(containment_graph.clone()),
            )
        })
        .collect())
}

/// Membership: union of the indirect, direct-forward, and direct-inverse
/// sub-queries, all projected into `PreferMembership`.
fn project_membership(resource: &Resource) -> ProjectionResult<Vec<Quad>> {
    let mut out = Vec::new();
    out.extend(project_indirect_membership(resource)?);
    out.extend(project_direct_forward_membership(resource)?);
    out.extend(project_direct_inverse_membership(resource)?);
    Ok(out)
}

fn membership_graph() -> NamedNode {
    NamedNode::new(vocab::trellis::PREFER_MEMBERSHIP).expect("static IRI")
}

/// For every `s` with `s ldp:member id`, `s rdf:type ldp:IndirectContainer`,
/// `s ldp:membershipResource ?subj`, `s ldp:hasMemberRelation ?pred`,
/// `s ldp:insertedContentRelation ?o`, and every `res` with
/// `res dc:isPartOf s` and `res ?o ?obj`, emit `(?subj, ?pred, ?obj)`.
fn project_indirect_membership(resource: &Resource) -> ProjectionResult<Vec<Quad>> {
    let server_managed = graphs::server_managed();
    let ldp_member = pred(vocab::ldp::MEMBER);

    let member_pattern = QuadPattern {
        subject: None,
        predicate: Some(ldp_member),
        object: Some(RdfObject::NamedNode(resource.id.clone())),
        graph: Some(Some(server_managed.clone())),
    };
    let member_edges = resource.store.query(&member_pattern)?;

    let rdf_type = pred(vocab::rdf::TYPE);
    let is_part_of_pred = pred(vocab::dc::IS_PART_OF);
    let indirect_container = NamedNode::new(vocab::ldp::INDIRECT_CONTAINER).expect("static IRI");

    let mut out = Vec::new();
    for edge in member_edges {
        let Some(s) = subject_named_node(&edge) else {
            continue;
        };
        let s_rows = resource.store.query(&subject_pattern(server_managed.clone(), s.clone()))?;

        let is_indirect = s_rows
            .iter()
            .any(|q| q.predicate == rdf_type && object_named_node(q).as_ref() == Some(&indirect_container));
        if !is_indirect {
            continue;
        }

        let Some(subj) = first_object(&s_rows, vocab::ldp::MEMBERSHIP_RESOURCE).and_then(object_named_node) else {
            continue;
        };
        let Some(relation) = first_object(&s_rows, vocab::ldp::HAS_MEMBER_RELATION).and_then(object_named_node)
        else {
            continue;
        };
        let Some(inserted_content_relation) =
            first_object(&s_rows, vocab::ldp::INSERTED_CONTENT_RELATION).and_then(object_named_node)
        else {
            continue;
        };

        let children_pattern = QuadPattern {
            subject: None,
            predicate: Some(is_part_of_pred.clone()),
            object: Some(RdfObject::NamedNode(s.clone())),
            graph: Some(Some(server_managed.clone())),
        };
        let children = resource.store.query(&children_pattern)?;

        for child_edge in children {
            let Some(res) = subject_named_node(&child_edge) else {
                continue;
            };
            let predicate = RdfPredicate::new(inserted_content_relation.as_str()).map_err(|e| {
                ProjectionError::MalformedContainerConfig(res.as_str().to_string(), e.to_string())
            })?;
            let value_pattern = QuadPattern {
                subject: Some(RdfSubject::NamedNode(res.clone())),
                predicate: Some(predicate),
                object: None,
                graph: Some(Some(graphs::user_managed(&res))),
            };
            let values = resource.store.query(&value_pattern)?;
            for v in values {
                out.push(Quad::new(
                    RdfSubject::NamedNode(subj.clone()),
                    RdfPredicate::new(relation.as_str()).expect("well-formed relation IRI"),
                    v.object,
                    Some(membership_graph()),
                ));
            }
        }
    }
    Ok(out)
}

/// For every `s` with `s ldp:member id`, `s ldp:membershipResource ?subj`,
/// `s ldp:hasMemberRelation ?pred`, `s ldp:insertedContentRelation
/// ldp:MemberSubject`, and every `?obj` with `?obj dc:isPartOf s`, emit
/// `(?subj, ?pred, ?obj)`.
fn project_direct_forward_membership(resource: &Resource) -> ProjectionResult<Vec<Quad>> {
    let server_managed = graphs::server_managed();
    let ldp_member = pred(vocab::ldp::MEMBER);
    let member_subject = NamedNode::new(vocab::ldp::MEMBER_SUBJECT).expect("static IRI");

    let member_pattern = QuadPattern {
        subject: None,
        predicate: Some(ldp_member),
        object: Some(RdfObject::NamedNode(resource.id.clone())),
        graph: Some(Some(server_managed.clone())),
    };
    let member_edges = resource.store.query(&member_pattern)?;

    let is_part_of_pred = pred(vocab::dc::IS_PART_OF);
    let mut out = Vec::new();
    for edge in member_edges {
        let Some(s) = subject_named_node(&edge) else { continue };
        let s_rows = resource.store.query(&subject_pattern(server_managed.clone(), s.clone()))?;

        let inserted_content_relation =
            first_object(&s_rows, vocab::ldp::INSERTED_CONTENT_RELATION).and_then(object_named_node);
        if inserted_content_relation.as_ref() != Some(&member_subject) {
            continue;
        }
        let Some(subj) = first_object(&s_rows, vocab::ldp::MEMBERSHIP_RESOURCE).and_then(object_named_node) else {
            continue;
        };
        let Some(relation) = first_object(&s_rows, vocab::ldp::HAS_MEMBER_RELATION).and_then(object_named_node)
        else {
            continue;
        };

        let children_pattern = QuadPattern {
            subject: None,
            predicate: Some(is_part_of_pred.clone()),
            object: Some(RdfObject::NamedNode(s.clone())),
            graph: Some(Some(server_managed.clone())),
        };
        let children = resource.store.query(&children_pattern)?;
        for child_edge in children {
            let Some(child) = subject_named_node(&child_edge) else { continue };
            out.push(Quad::new(
                RdfSubject::NamedNode(subj.clone()),
                RdfPredicate::new(relation.as_str()).expect("well-formed relation IRI"),
                RdfObject::NamedNode(child),
                Some(membership_graph()),
            ));
        }
    }
    Ok(out)
}

/// For every `?s` with `id dc:isPartOf ?s`, `?s ldp:isMemberOfRelation
/// ?pred`, `?s ldp:membershipResource ?obj`, `?s ldp:insertedContentRelation
/// ldp:MemberSubject`, emit `(id, ?pred, ?obj)`.
fn project_direct_inverse_membership(resource: &Resource) -> ProjectionResult<Vec<Quad>> {
    let Some(parent) = resource.parent.clone() else {
        return Ok(Vec::new());
    };
    let server_managed = graphs::server_managed();
    let parent_rows = resource
        .store
        .query(&subject_pattern(server_managed.clone(), parent.clone()))?;

    let member_subject = NamedNode::new(vocab::ldp::MEMBER_SUBJECT).expect("static IRI");
    let inserted_content_relation =
        first_object(&parent_rows, vocab::ldp::INSERTED_CONTENT_RELATION).and_then(object_named_node);
    if inserted_content_relation.as_ref() != Some(&member_subject) {
        return Ok(Vec::new());
    }

    let Some(relation) = first_object(&parent_rows, vocab::ldp::IS_MEMBER_OF_RELATION).and_then(object_named_node)
    else {
        return Ok(Vec::new());
    };
    let Some(obj) = first_object(&parent_rows, vocab::ldp::MEMBERSHIP_RESOURCE).and_then(object_named_node) else {
        return Ok(Vec::new());
    };

    Ok(vec![Quad::new(
        RdfSubject::NamedNode(resource.id.clone()),
        RdfPredicate::new(relation.as_str()).expect("well-formed relation IRI"),
        RdfObject::NamedNode(obj),
        Some(membership_graph()),
    )])
}
