//! Fixed vocabulary used by the resource engine.
//!
//! Unlike a general-purpose namespace manager with user-registrable prefixes,
//! the set of predicates and classes the engine reasons about is closed: it is
//! exactly the terms named in the LDP, Dublin Core, and Trellis vocabularies
//! below, plus the audit-trail vocabularies used in the test scenarios
//! (PROV-O, Activity Streams, SKOS, FOAF). Exposing these as plain `&'static
//! str` constants (rather than a runtime prefix table) keeps the dispatch in
//! `resource`/`projection` a closed match rather than an open registration.

/// `rdf:` — http://www.w3.org/1999/02/22-rdf-syntax-ns#
pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// `dc:`/`dcterms:` — http://purl.org/dc/terms/
pub mod dc {
    pub const MODIFIED: &str = "http://purl.org/dc/terms/modified";
    pub const IS_PART_OF: &str = "http://purl.org/dc/terms/isPartOf";
    pub const HAS_PART: &str = "http://purl.org/dc/terms/hasPart";
    pub const FORMAT: &str = "http://purl.org/dc/terms/format";
    pub const EXTENT: &str = "http://purl.org/dc/terms/extent";
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    pub const SUBJECT: &str = "http://purl.org/dc/terms/subject";
    /// `dc:type`, distinct from `rdf:type`; carries the `trellis:DeletedResource` tombstone.
    pub const TYPE: &str = "http://purl.org/dc/terms/type";
}

/// `ldp:` — http://www.w3.org/ns/ldp#
pub mod ldp {
    pub const CONTAINS: &str = "http://www.w3.org/ns/ldp#contains";
    pub const MEMBER: &str = "http://www.w3.org/ns/ldp#member";
    pub const MEMBERSHIP_RESOURCE: &str = "http://www.w3.org/ns/ldp#membershipResource";
    pub const HAS_MEMBER_RELATION: &str = "http://www.w3.org/ns/ldp#hasMemberRelation";
    pub const IS_MEMBER_OF_RELATION: &str = "http://www.w3.org/ns/ldp#isMemberOfRelation";
    pub const INSERTED_CONTENT_RELATION: &str = "http://www.w3.org/ns/ldp#insertedContentRelation";
    pub const MEMBER_SUBJECT: &str = "http://www.w3.org/ns/ldp#MemberSubject";

    pub const RDF_SOURCE: &str = "http://www.w3.org/ns/ldp#RDFSource";
    pub const NON_RDF_SOURCE: &str = "http://www.w3.org/ns/ldp#NonRDFSource";
    pub const CONTAINER: &str = "http://www.w3.org/ns/ldp#Container";
    pub const BASIC_CONTAINER: &str = "http://www.w3.org/ns/ldp#BasicContainer";
    pub const DIRECT_CONTAINER: &str = "http://www.w3.org/ns/ldp#DirectContainer";
    pub const INDIRECT_CONTAINER: &str = "http://www.w3.org/ns/ldp#IndirectContainer";
}

/// `trellis:` — http://www.trellisldp.org/ns/trellis#
pub mod trellis {
    pub const DELETED_RESOURCE: &str = "http://www.trellisldp.org/ns/trellis#DeletedResource";

    pub const PREFER_USER_MANAGED: &str = "http://www.trellisldp.org/ns/trellis#PreferUserManaged";
    pub const PREFER_SERVER_MANAGED: &str =
        "http://www.trellisldp.org/ns/trellis#PreferServerManaged";
    pub const PREFER_AUDIT: &str = "http://www.trellisldp.org/ns/trellis#PreferAudit";
    pub const PREFER_ACCESS_CONTROL: &str =
        "http://www.trellisldp.org/ns/trellis#PreferAccessControl";
    pub const PREFER_CONTAINMENT: &str = "http://www.trellisldp.org/ns/trellis#PreferContainment";
    pub const PREFER_MEMBERSHIP: &str = "http://www.trellisldp.org/ns/trellis#PreferMembership";
}

/// `prov:` — http://www.w3.org/ns/prov#
pub mod prov {
    pub const WAS_GENERATED_BY: &str = "http://www.w3.org/ns/prov#wasGeneratedBy";
    pub const ACTIVITY: &str = "http://www.w3.org/ns/prov#Activity";
    pub const AT_TIME: &str = "http://www.w3.org/ns/prov#atTime";
}

/// `as:` — https://www.w3.org/ns/activitystreams#
pub mod activitystreams {
    pub const CREATE: &str = "https://www.w3.org/ns/activitystreams#Create";
    pub const UPDATE: &str = "https://www.w3.org/ns/activitystreams#Update";
    pub const DELETE: &str = "https://www.w3.org/ns/activitystreams#Delete";
}

/// `skos:` — http://www.w3.org/2004/02/skos/core#
pub mod skos {
    pub const CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";
    pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
    pub const ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";
}

/// `foaf:` — http://xmlns.com/foaf/0.1/
pub mod foaf {
    pub const PRIMARY_TOPIC: &str = "http://xmlns.com/foaf/0.1/primaryTopic";
}

/// Suffix that marks every container-flavored interaction model IRI: "is
/// container" is true iff the IRI's lexical form ends with `Container`.
pub const CONTAINER_SUFFIX: &str = "Container";

/// All six interaction model IRIs the engine knows about.
pub const ALL_INTERACTION_MODELS: [&str; 6] = [
    ldp::RDF_SOURCE,
    ldp::NON_RDF_SOURCE,
    ldp::CONTAINER,
    ldp::BASIC_CONTAINER,
    ldp::DIRECT_CONTAINER,
    ldp::INDIRECT_CONTAINER,
];
