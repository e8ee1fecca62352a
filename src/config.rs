//! Service instance configuration.

use crate::metadata::InteractionModel;
use std::collections::HashSet;

/// Configuration a [`crate::service::InMemoryResourceService`] is constructed
/// with. No file or environment parsing lives at this layer — callers build
/// one in code.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Interaction models this instance accepts in `create`/`replace`.
    pub supported_interaction_models: HashSet<InteractionModel>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            supported_interaction_models: InteractionModel::all(),
        }
    }
}
