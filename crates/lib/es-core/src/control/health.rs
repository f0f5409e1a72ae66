use serde_json::Value;

use super::{EsControlPlane, Operation, OperationError, backend_failure};

/// Status reported when the health report carries none.
pub const UNKNOWN_STATUS: &str = "unknown";

impl EsControlPlane {
    /// Fetches the cluster status token (`green`, `yellow`, `red`, ...).
    ///
    /// # Errors
    /// Returns a backend failure labelled `Error`.
    pub async fn health_status(&self) -> Result<String, OperationError> {
        let report = self
            .backend
            .health_report()
            .await
            .map_err(backend_failure(Operation::Health))?;

        Ok(report
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_STATUS)
            .to_string())
    }

    /// Reports whether the backend is reachable as a single string.
    ///
    /// Returns the status token on success and `"Error: <message>"` otherwise.
    pub async fn is_configured(&self) -> String {
        match self.health_status().await {
            Ok(status) => status,
            Err(err) => err.to_string(),
        }
    }
}

/// Whether an [`EsControlPlane::is_configured`] result reports a failure.
#[must_use]
pub fn is_error_status(status: &str) -> bool {
    status.starts_with("Error")
}
