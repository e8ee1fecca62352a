//! Crate-wide error taxonomy.
//!
//! One enum per failure surface, converging into [`EngineError`] via
//! `#[from]` so `?` composes across the store/projection/service boundary —
//! the same shape the reference crate uses for `RdfStoreError` /
//! `MappingError` feeding into higher-level errors.

use crate::rdf::QuadStoreError;
use thiserror::Error;

/// Errors raised while deriving a [`crate::resource::Resource`] projection.
#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("malformed container configuration for {0}: {1}")]
    MalformedContainerConfig(String, String),

    #[error(transparent)]
    Backend(#[from] QuadStoreError),
}

pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors the resource service surfaces to callers.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Operation targets an id whose current state is `MISSING` or `DELETED`
    /// when a live resource is required.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Interaction model unsupported, or container configuration missing a
    /// required predicate, or a `NonRDFSource` without binary metadata.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// The underlying quad store signalled an I/O or protocol error.
    #[error("backend failure: {0}")]
    BackendFailure(#[from] QuadStoreError),

    /// The caller cancelled the completion; effect unknown.
    #[error("operation cancelled")]
    Cancelled,
}

pub type EngineResult<T> = Result<T, EngineError>;

impl From<ProjectionError> for EngineError {
    fn from(err: ProjectionError) -> Self {
        match err {
            ProjectionError::MalformedContainerConfig(id, reason) => {
                EngineError::ConstraintViolation(format!("{id}: {reason}"))
            }
            ProjectionError::Backend(e) => EngineError::BackendFailure(e),
        }
    }
}
