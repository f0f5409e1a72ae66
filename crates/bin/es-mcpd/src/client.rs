use es_core::backend::{BackendError, ElasticsearchClient};
use es_core::control::EsControlPlane;

use crate::config::EsConfig;

/// Builds the single backend handle shared by every request.
pub fn build_control_plane(config: &EsConfig) -> Result<EsControlPlane, BackendError> {
    let client = ElasticsearchClient::new(config.es_url.clone(), config.api_key.clone())?;
    Ok(EsControlPlane::new(client))
}
