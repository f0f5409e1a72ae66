use serde_json::Value;

use crate::models::IndexDetail;

use super::{EsControlPlane, Operation, OperationError, backend_failure};

impl EsControlPlane {
    /// Lists the index catalog as reported by the backend.
    ///
    /// # Errors
    /// Returns `OperationError::EmptyResult` when the catalog is empty, or a
    /// backend failure.
    pub async fn list_indices(&self) -> Result<Vec<Value>, OperationError> {
        let indices = self
            .backend
            .cat_indices()
            .await
            .map_err(backend_failure(Operation::ListIndices))?;

        if indices.is_empty() {
            return Err(OperationError::EmptyResult);
        }
        Ok(indices)
    }

    /// Lists the names of user-visible indices, skipping dot-prefixed ones.
    ///
    /// # Errors
    /// Returns `OperationError::EmptyResult` when no visible index remains, or
    /// a backend failure.
    pub async fn list_index_names(&self) -> Result<Vec<String>, OperationError> {
        let indices = self.list_indices().await?;
        let names: Vec<String> = indices
            .iter()
            .filter_map(|record| record.get("index").and_then(Value::as_str))
            .filter(|name| !name.starts_with('.'))
            .map(str::to_string)
            .collect();

        if names.is_empty() {
            return Err(OperationError::EmptyResult);
        }
        Ok(names)
    }

    /// Fetches statistics for an index after checking that it exists.
    ///
    /// # Errors
    /// Returns `OperationError::NotFound` for a missing index, or a backend
    /// failure.
    pub async fn get_index_detail(&self, index_name: &str) -> Result<IndexDetail, OperationError> {
        let exists = self
            .backend
            .index_exists(index_name)
            .await
            .map_err(backend_failure(Operation::IndexDetail))?;
        if !exists {
            return Err(OperationError::NotFound(index_name.to_string()));
        }

        let stats = self
            .backend
            .index_stats(index_name)
            .await
            .map_err(backend_failure(Operation::IndexDetail))?;

        Ok(IndexDetail {
            name: index_name.to_string(),
            stats,
        })
    }
}
