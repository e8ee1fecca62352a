//! The resource lifecycle service: `create`/`replace`/`delete`/`add`/`touch`/
//! `get`, plus identifier generation and the supported-model advertisement.

use crate::error::{EngineError, EngineResult};
use crate::event::{Event, EventSerializer, NoopEventSerializer};
use crate::graphs;
use crate::metadata::InteractionModel;
use crate::projection;
use crate::rdf::{Dataset, Mutation, NamedNode, QuadStore, RdfObject, RdfPredicate, RdfSubject};
use crate::resource::ResourceView;
use crate::vocab;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// The acting agent and timestamp behind a mutating operation.
#[derive(Debug, Clone)]
pub struct Session {
    pub agent: NamedNode,
    pub created: DateTime<Utc>,
}

impl Session {
    pub fn new(agent: NamedNode, created: DateTime<Utc>) -> Self {
        Self { agent, created }
    }
}

/// Binary descriptor supplied to `create`/`replace` for a `NonRDFSource`.
#[derive(Debug, Clone)]
pub struct BinaryDescription {
    pub location: NamedNode,
    pub modified: DateTime<Utc>,
    pub mime_type: Option<String>,
    pub size: Option<u64>,
}

/// Public lifecycle operations. Asynchronous so a backend can hand back a
/// task, channel, or promise; the in-memory implementation below executes
/// synchronously under the store's own locking and returns an
/// already-resolved future.
#[async_trait]
pub trait ResourceService: Send + Sync {
    async fn get(&self, id: &NamedNode) -> EngineResult<ResourceView>;

    #[allow(clippy::too_many_arguments)]
    async fn create(
        &self,
        id: &NamedNode,
        session: &Session,
        interaction_model: InteractionModel,
        dataset: Dataset,
        parent: Option<NamedNode>,
        binary: Option<BinaryDescription>,
    ) -> EngineResult<()>;

    #[allow(clippy::too_many_arguments)]
    async fn replace(
        &self,
        id: &NamedNode,
        session: &Session,
        interaction_model: InteractionModel,
        dataset: Dataset,
        parent: Option<NamedNode>,
        binary: Option<BinaryDescription>,
    ) -> EngineResult<()>;

    async fn delete(&self, id: &NamedNode, session: &Session, dataset: Dataset) -> EngineResult<()>;

    async fn add(&self, id: &NamedNode, session: &Session, dataset: Dataset) -> EngineResult<()>;

    async fn touch(&self, id: &NamedNode) -> EngineResult<()>;

    fn supported_interaction_models(&self) -> HashSet<InteractionModel>;

    fn generate_identifier(&self) -> String;
}

/// Reference implementation backed by any [`QuadStore`]; swapping the
/// backend is transparent to callers above this type.
pub struct InMemoryResourceService {
    store: Arc<dyn QuadStore>,
    supported_interaction_models: HashSet<InteractionModel>,
    event_serializer: Arc<dyn EventSerializer>,
    instance_prefix: String,
    counter: AtomicU64,
}

impl InMemoryResourceService {
    /// Build a service over `store`, accepting every interaction model the
    /// config names, with no event serializer wired up.
    pub fn new(store: Arc<dyn QuadStore>, config: crate::config::ServiceConfig) -> Self {
        Self::with_event_serializer(store, config, Arc::new(NoopEventSerializer))
    }

    pub fn with_event_serializer(
        store: Arc<dyn QuadStore>,
        config: crate::config::ServiceConfig,
        event_serializer: Arc<dyn EventSerializer>,
    ) -> Self {
        Self {
            store,
            supported_interaction_models: config.supported_interaction_models,
            event_serializer,
            instance_prefix: generate_instance_prefix(),
            counter: AtomicU64::new(0),
        }
    }

    fn require_supported(&self, model: &InteractionModel) -> EngineResult<()> {
        if self.supported_interaction_models.contains(model) {
            Ok(())
        } else {
            Err(EngineError::ConstraintViolation(format!(
                "interaction model {model} is not supported by this service instance"
            )))
        }
    }

    /// Invariants 5–6: validate the container membership config carried in
    /// `dataset` for `id`.
    fn validate_container_config(
        &self,
        id: &NamedNode,
        model: &InteractionModel,
        dataset: &Dataset,
    ) -> EngineResult<()> {
        if !model.supports_membership() {
            return Ok(());
        }
        let subject: RdfSubject = id.clone().into();
        let membership_resource = dataset.object_for(&subject, &pred(vocab::ldp::MEMBERSHIP_RESOURCE));
        let has_member_relation = dataset.object_for(&subject, &pred(vocab::ldp::HAS_MEMBER_RELATION));
        let is_member_of_relation = dataset.object_for(&subject, &pred(vocab::ldp::IS_MEMBER_OF_RELATION));
        let inserted_content_relation =
            dataset.object_for(&subject, &pred(vocab::ldp::INSERTED_CONTENT_RELATION));

        if membership_resource.is_none() {
            return Err(EngineError::ConstraintViolation(format!(
                "{id}: container missing ldp:membershipResource"
            )));
        }

        if model.is_direct_container() {
            if has_member_relation.is_none() && is_member_of_relation.is_none() {
                return Err(EngineError::ConstraintViolation(format!(
                    "{id}: DirectContainer requires hasMemberRelation or isMemberOfRelation"
                )));
            }
        } else if model.is_indirect_container() {
            if has_member_relation.is_none() {
                return Err(EngineError::ConstraintViolation(format!(
                    "{id}: IndirectContainer requires ldp:hasMemberRelation"
                )));
            }
            let member_subject: RdfObject = NamedNode::new(vocab::ldp::MEMBER_SUBJECT).expect("static IRI").into();
            if inserted_content_relation.is_none() || inserted_content_relation == Some(&member_subject) {
                return Err(EngineError::ConstraintViolation(format!(
                    "{id}: IndirectContainer requires insertedContentRelation != ldp:MemberSubject"
                )));
            }
        }
        Ok(())
    }

    fn validate_binary(&self, id: &NamedNode, model: &InteractionModel, binary: &Option<BinaryDescription>) -> EngineResult<()> {
        if model.is_non_rdf_source() && binary.is_none() {
            return Err(EngineError::ConstraintViolation(format!(
                "{id}: NonRDFSource requires binary metadata"
            )));
        }
        Ok(())
    }

    /// Shared body of `create`/`replace`. `is_replace` controls whether the
    /// user-managed and server-managed graphs are cleared first.
    #[allow(clippy::too_many_arguments)]
    fn write_resource(
        &self,
        id: &NamedNode,
        session: &Session,
        interaction_model: InteractionModel,
        dataset: Dataset,
        parent: Option<NamedNode>,
        binary: Option<BinaryDescription>,
        is_replace: bool,
    ) -> EngineResult<()> {
        self.require_supported(&interaction_model)?;
        self.validate_container_config(id, &interaction_model, &dataset)?;
        self.validate_binary(id, &interaction_model, &binary)?;

        let server_managed = graphs::server_managed();
        let user_managed = graphs::user_managed(id);
        let now = Utc::now();

        let mut mutations = Vec::new();
        if is_replace {
            mutations.push(Mutation::RemoveGraph(user_managed.clone()));
            mutations.push(Mutation::RemoveSubject(server_managed.clone(), id.clone().into()));
        }

        for q in dataset.into_quads(user_managed.clone()) {
            mutations.push(Mutation::Insert(q));
        }

        mutations.push(Mutation::Insert(metadata_quad(
            id,
            &pred(vocab::rdf::TYPE),
            interaction_model.as_named_node().clone().into(),
            &server_managed,
        )));
        mutations.push(Mutation::Insert(metadata_quad(
            id,
            &pred(vocab::dc::MODIFIED),
            literal_timestamp(now),
            &server_managed,
        )));
        if let Some(parent) = &parent {
            mutations.push(Mutation::Insert(metadata_quad(
                id,
                &pred(vocab::dc::IS_PART_OF),
                parent.clone().into(),
                &server_managed,
            )));
        }
        if let Some(binary) = &binary {
            mutations.push(Mutation::Insert(metadata_quad(
                id,
                &pred(vocab::dc::HAS_PART),
                binary.location.clone().into(),
                &server_managed,
            )));
            if is_replace {
                mutations.push(Mutation::RemoveSubject(server_managed.clone(), binary.location.clone().into()));
            }
            mutations.push(Mutation::Insert(metadata_quad(
                &binary.location,
                &pred(vocab::dc::MODIFIED),
                literal_timestamp(binary.modified),
                &server_managed,
            )));
            if let Some(mime_type) = &binary.mime_type {
                mutations.push(Mutation::Insert(metadata_quad(
                    &binary.location,
                    &pred(vocab::dc::FORMAT),
                    crate::rdf::Literal::new_simple_literal(mime_type.clone()).into(),
                    &server_managed,
                )));
            }
            if let Some(size) = binary.size {
                mutations.push(Mutation::Insert(metadata_quad(
                    &binary.location,
                    &pred(vocab::dc::EXTENT),
                    crate::rdf::Literal::new_simple_literal(size.to_string()).into(),
                    &server_managed,
                )));
            }
        }

        if interaction_model.supports_membership() {
            let subject: RdfSubject = id.clone().into();
            let inserted_content_relation = dataset.object_for(&subject, &pred(vocab::ldp::INSERTED_CONTENT_RELATION));
            for (iri, object) in [
                (vocab::ldp::MEMBERSHIP_RESOURCE, dataset.object_for(&subject, &pred(vocab::ldp::MEMBERSHIP_RESOURCE))),
                (vocab::ldp::HAS_MEMBER_RELATION, dataset.object_for(&subject, &pred(vocab::ldp::HAS_MEMBER_RELATION))),
                (vocab::ldp::IS_MEMBER_OF_RELATION, dataset.object_for(&subject, &pred(vocab::ldp::IS_MEMBER_OF_RELATION))),
                (vocab::ldp::INSERTED_CONTENT_RELATION, inserted_content_relation),
            ] {
                if let Some(object) = object {
                    mutations.push(Mutation::Insert(metadata_quad(id, &pred(iri), object.clone(), &server_managed)));
                }
            }
            // A DirectContainer with no explicit insertedContentRelation
            // defaults to ldp:MemberSubject; materialize it so the membership
            // projection's equality check against ldp:MemberSubject sees it.
            if interaction_model.is_direct_container() && inserted_content_relation.is_none() {
                mutations.push(Mutation::Insert(metadata_quad(
                    id,
                    &pred(vocab::ldp::INSERTED_CONTENT_RELATION),
                    NamedNode::new(vocab::ldp::MEMBER_SUBJECT).expect("static IRI").into(),
                    &server_managed,
                )));
            }
            // Indexes the container by its membership resource so
            // `project_membership` can find it from the membership
            // resource's own id via a single `ldp:member` lookup.
            if let Some(membership_resource) =
                dataset.object_for(&subject, &pred(vocab::ldp::MEMBERSHIP_RESOURCE)).cloned()
            {
                mutations.push(Mutation::Insert(metadata_quad(
                    id,
                    &pred(vocab::ldp::MEMBER),
                    membership_resource,
                    &server_managed,
                )));
            }
        }

        self.store.apply(mutations).map_err(EngineError::BackendFailure)?;
        self.emit_event(id, session, if is_replace { vocab::activitystreams::UPDATE } else { vocab::activitystreams::CREATE });
        Ok(())
    }

    fn emit_event(&self, id: &NamedNode, session: &Session, activity_type: &str) {
        let event = Event {
            identifier: id.clone(),
            agents: [session.agent.clone()].into_iter().collect(),
            target: id.clone(),
            target_types: HashSet::new(),
            activity_types: [NamedNode::new(activity_type).expect("static IRI")].into_iter().collect(),
            inbox: None,
            created: session.created,
        };
        // A serializer that declines to produce output never fails the
        // operation: the return value is only for a notification sink this
        // crate does not own.
        let _ = self.event_serializer.serialize(&event);
    }
}

fn pred(iri: &str) -> RdfPredicate {
    RdfPredicate::new(iri).expect("static vocabulary IRI")
}

fn metadata_quad(subject: &NamedNode, predicate: &RdfPredicate, object: RdfObject, graph: &NamedNode) -> crate::rdf::Quad {
    crate::rdf::Quad::new(subject.clone().into(), predicate.clone(), object, Some(graph.clone()))
}

fn literal_timestamp(ts: DateTime<Utc>) -> RdfObject {
    crate::rdf::Literal::new_simple_literal(ts.to_rfc3339()).into()
}

fn generate_instance_prefix() -> String {
    static INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(0);
    format!("i{}", INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
}

#[async_trait]
impl ResourceService for InMemoryResourceService {
    async fn get(&self, id: &NamedNode) -> EngineResult<ResourceView> {
        debug!(id = %id, "resource service: get");
        projection::find_resource(self.store.clone(), id, false).map_err(Into::into)
    }

    async fn create(
        &self,
        id: &NamedNode,
        session: &Session,
        interaction_model: InteractionModel,
        dataset: Dataset,
        parent: Option<NamedNode>,
        binary: Option<BinaryDescription>,
    ) -> EngineResult<()> {
        debug!(id = %id, "resource service: create");
        match self.get(id).await? {
            ResourceView::Missing => {}
            _ => {
                return Err(EngineError::ConstraintViolation(format!(
                    "{id}: create requires current state to be MISSING"
                )))
            }
        }
        self.write_resource(id, session, interaction_model, dataset, parent, binary, false)
    }

    async fn replace(
        &self,
        id: &NamedNode,
        session: &Session,
        interaction_model: InteractionModel,
        dataset: Dataset,
        parent: Option<NamedNode>,
        binary: Option<BinaryDescription>,
    ) -> EngineResult<()> {
        debug!(id = %id, "resource service: replace");
        self.write_resource(id, session, interaction_model, dataset, parent, binary, true)
    }

    async fn delete(&self, id: &NamedNode, session: &Session, dataset: Dataset) -> EngineResult<()> {
        debug!(id = %id, "resource service: delete");
        let server_managed = graphs::server_managed();
        let tombstone = metadata_quad(
            id,
            &pred(vocab::dc::TYPE),
            NamedNode::new(vocab::trellis::DELETED_RESOURCE).expect("static IRI").into(),
            &server_managed,
        );
        let mut mutations = vec![Mutation::Insert(tombstone)];
        let audit_graph = graphs::audit(id);
        for q in dataset.into_quads(audit_graph) {
            mutations.push(Mutation::Insert(q));
        }
        self.store.apply(mutations).map_err(EngineError::BackendFailure)?;
        self.emit_event(id, session, vocab::activitystreams::DELETE);
        Ok(())
    }

    async fn add(&self, id: &NamedNode, _session: &Session, dataset: Dataset) -> EngineResult<()> {
        debug!(id = %id, "resource service: add");
        let audit_graph = graphs::audit(id);
        for q in dataset.into_quads(audit_graph) {
            self.store.insert(q).map_err(EngineError::BackendFailure)?;
        }
        Ok(())
    }

    async fn touch(&self, id: &NamedNode) -> EngineResult<()> {
        debug!(id = %id, "resource service: touch");
        let server_managed = graphs::server_managed();
        match self.get(id).await? {
            ResourceView::Live(_) => {}
            _ => return Err(EngineError::NotFound(id.as_str().to_string())),
        }
        let now = metadata_quad(id, &pred(vocab::dc::MODIFIED), literal_timestamp(Utc::now()), &server_managed);
        self.store
            .apply(vec![
                Mutation::RemoveSubjectPredicate(server_managed.clone(), id.clone().into(), pred(vocab::dc::MODIFIED)),
                Mutation::Insert(now),
            ])
            .map_err(EngineError::BackendFailure)?;
        Ok(())
    }

    fn supported_interaction_models(&self) -> HashSet<InteractionModel> {
        self.supported_interaction_models.clone()
    }

    fn generate_identifier(&self) -> String {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.instance_prefix, seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use crate::rdf::{InMemoryQuadStore, Literal, Triple};
    use crate::resource::ProjectionGraph;

    fn session() -> Session {
        Session::new(NamedNode::new("http://example.org/agents/alice").unwrap(), Utc::now())
    }

    fn service() -> InMemoryResourceService {
        InMemoryResourceService::new(Arc::new(InMemoryQuadStore::new()), ServiceConfig::default())
    }

    #[tokio::test]
    async fn missing_before_any_operation() {
        let svc = service();
        let id = NamedNode::new("http://example.org/s1").unwrap();
        assert!(matches!(svc.get(&id).await.unwrap(), ResourceView::Missing));
    }

    #[tokio::test]
    async fn create_then_get_is_live_with_matching_model() {
        let svc = service();
        let id = NamedNode::new("http://example.org/s1").unwrap();
        svc.create(
            &id,
            &session(),
            InteractionModel::rdf_source(),
            Dataset::new(),
            None,
            None,
        )
        .await
        .unwrap();

        let view = svc.get(&id).await.unwrap();
        let resource = view.into_live().expect("expected live resource");
        assert_eq!(resource.interaction_model, InteractionModel::rdf_source());
    }

    #[tokio::test]
    async fn create_twice_is_rejected() {
        let svc = service();
        let id = NamedNode::new("http://example.org/s1").unwrap();
        svc.create(&id, &session(), InteractionModel::rdf_source(), Dataset::new(), None, None)
            .await
            .unwrap();
        let err = svc
            .create(&id, &session(), InteractionModel::rdf_source(), Dataset::new(), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn user_managed_graph_matches_dataset_exactly() {
        let svc = service();
        let id = NamedNode::new("http://example.org/s1").unwrap();
        let subject: RdfSubject = id.clone().into();
        let title_pred = RdfPredicate::new("http://purl.org/dc/terms/title").unwrap();
        let dataset = Dataset::new().with_triple(Triple::new(
            subject.clone(),
            title_pred,
            Literal::new_simple_literal("Creation Test").into(),
        ));

        svc.create(&id, &session(), InteractionModel::rdf_source(), dataset, None, None)
            .await
            .unwrap();

        let resource = svc.get(&id).await.unwrap().into_live().unwrap();
        let quads = resource.stream(ProjectionGraph::UserManaged, false).unwrap();
        assert_eq!(quads.len(), 1);
    }

    #[tokio::test]
    async fn replace_is_total_not_additive() {
        let svc = service();
        let id = NamedNode::new("http://example.org/s1").unwrap();
        let subject: RdfSubject = id.clone().into();
        let title_pred = RdfPredicate::new("http://purl.org/dc/terms/title").unwrap();

        svc.create(
            &id,
            &session(),
            InteractionModel::rdf_source(),
            Dataset::new().with_triple(Triple::new(subject.clone(), title_pred.clone(), Literal::new_simple_literal("v1").into())),
            None,
            None,
        )
        .await
        .unwrap();

        let label_pred = RdfPredicate::new("http://www.w3.org/2004/02/skos/core#prefLabel").unwrap();
        svc.replace(
            &id,
            &session(),
            InteractionModel::rdf_source(),
            Dataset::new().with_triple(Triple::new(subject, label_pred, Literal::new_simple_literal("v2").into())),
            None,
            None,
        )
        .await
        .unwrap();

        let resource = svc.get(&id).await.unwrap().into_live().unwrap();
        let quads = resource.stream(ProjectionGraph::UserManaged, false).unwrap();
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].predicate.as_named_node().as_str(), "http://www.w3.org/2004/02/skos/core#prefLabel");
    }

    #[tokio::test]
    async fn delete_yields_deleted_view() {
        let svc = service();
        let id = NamedNode::new("http://example.org/s1").unwrap();
        svc.create(&id, &session(), InteractionModel::rdf_source(), Dataset::new(), None, None)
            .await
            .unwrap();
        svc.delete(&id, &session(), Dataset::new()).await.unwrap();
        assert!(matches!(svc.get(&id).await.unwrap(), ResourceView::Deleted));
    }

    #[tokio::test]
    async fn add_appends_to_audit_graph_cumulatively() {
        let svc = service();
        let id = NamedNode::new("http://example.org/s1").unwrap();
        svc.create(&id, &session(), InteractionModel::rdf_source(), Dataset::new(), None, None)
            .await
            .unwrap();

        let subject: RdfSubject = id.clone().into();
        let pred1 = RdfPredicate::new("http://www.w3.org/ns/prov#wasGeneratedBy").unwrap();
        svc.add(
            &id,
            &session(),
            Dataset::new().with_triple(Triple::new(subject.clone(), pred1.clone(), Literal::new_simple_literal("a1").into())),
        )
        .await
        .unwrap();
        svc.add(
            &id,
            &session(),
            Dataset::new().with_triple(Triple::new(subject, pred1, Literal::new_simple_literal("a2").into())),
        )
        .await
        .unwrap();

        let resource = svc.get(&id).await.unwrap().into_live().unwrap();
        let quads = resource.stream(ProjectionGraph::Audit, false).unwrap();
        assert_eq!(quads.len(), 2);
    }

    #[tokio::test]
    async fn touch_requires_existing_resource() {
        let svc = service();
        let id = NamedNode::new("http://example.org/s1").unwrap();
        let err = svc.touch(&id).await.unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[tokio::test]
    async fn non_rdf_source_requires_binary() {
        let svc = service();
        let id = NamedNode::new("http://example.org/bin1").unwrap();
        let err = svc
            .create(&id, &session(), InteractionModel::non_rdf_source(), Dataset::new(), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn generate_identifier_is_collision_free() {
        let svc = service();
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            assert!(seen.insert(svc.generate_identifier()));
        }
    }

    #[tokio::test]
    async fn unsupported_interaction_model_is_rejected() {
        let store = Arc::new(InMemoryQuadStore::new());
        let config = ServiceConfig {
            supported_interaction_models: [InteractionModel::rdf_source()].into_iter().collect(),
        };
        let svc = InMemoryResourceService::new(store, config);
        let id = NamedNode::new("http://example.org/c1").unwrap();
        let err = svc
            .create(&id, &session(), InteractionModel::basic_container(), Dataset::new(), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn basic_container_containment_lists_children() {
        let svc = service();
        let container = NamedNode::new("http://example.org/c").unwrap();
        svc.create(&container, &session(), InteractionModel::basic_container(), Dataset::new(), None, None)
            .await
            .unwrap();

        for child in ["http://example.org/c/child1", "http://example.org/c/child2"] {
            let child_id = NamedNode::new(child).unwrap();
            svc.create(
                &child_id,
                &session(),
                InteractionModel::rdf_source(),
                Dataset::new(),
                Some(container.clone()),
                None,
            )
            .await
            .unwrap();
        }

        let resource = svc.get(&container).await.unwrap().into_live().unwrap();
        let quads = resource.stream(ProjectionGraph::Containment, false).unwrap();
        assert_eq!(quads.len(), 2);
        for q in &quads {
            assert_eq!(q.predicate.as_named_node().as_str(), "http://www.w3.org/ns/ldp#contains");
        }
    }

    #[tokio::test]
    async fn indirect_container_membership_derives_from_children() {
        let svc = service();
        let membership_resource = NamedNode::new("http://example.org/m").unwrap();
        svc.create(
            &membership_resource,
            &session(),
            InteractionModel::rdf_source(),
            Dataset::new(),
            None,
            None,
        )
        .await
        .unwrap();

        let container = NamedNode::new("http://example.org/c").unwrap();
        let subject: RdfSubject = container.clone().into();
        let config = Dataset::new()
            .with_triple(Triple::new(
                subject.clone(),
                RdfPredicate::new(vocab::ldp::MEMBERSHIP_RESOURCE).unwrap(),
                membership_resource.clone().into(),
            ))
            .with_triple(Triple::new(
                subject.clone(),
                RdfPredicate::new(vocab::ldp::HAS_MEMBER_RELATION).unwrap(),
                NamedNode::new("http://purl.org/dc/terms/relation").unwrap().into(),
            ))
            .with_triple(Triple::new(
                subject,
                RdfPredicate::new(vocab::ldp::INSERTED_CONTENT_RELATION).unwrap(),
                NamedNode::new(vocab::foaf::PRIMARY_TOPIC).unwrap().into(),
            ));
        svc.create(&container, &session(), InteractionModel::indirect_container(), config, None, None)
            .await
            .unwrap();

        for (child, value) in [
            ("http://example.org/c/child1", "http://example.org/v1"),
            ("http://example.org/c/child2", "http://example.org/v2"),
        ] {
            let child_id = NamedNode::new(child).unwrap();
            let child_subject: RdfSubject = child_id.clone().into();
            let content = Dataset::new().with_triple(Triple::new(
                child_subject,
                RdfPredicate::new(vocab::foaf::PRIMARY_TOPIC).unwrap(),
                NamedNode::new(value).unwrap().into(),
            ));
            svc.create(&child_id, &session(), InteractionModel::rdf_source(), content, Some(container.clone()), None)
                .await
                .unwrap();
        }

        let resource = svc.get(&membership_resource).await.unwrap().into_live().unwrap();
        let quads = resource.stream(ProjectionGraph::Membership, false).unwrap();
        assert_eq!(quads.len(), 2);
        for q in &quads {
            assert_eq!(q.subject, RdfSubject::NamedNode(membership_resource.clone()));
            assert_eq!(q.predicate.as_named_node().as_str(), "http://purl.org/dc/terms/relation");
        }
    }
}
