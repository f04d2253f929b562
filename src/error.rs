use thiserror::Error;

/// Errors surfaced by the property store seam.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("illegal {entity} status transition: {from} -> {to}")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        to: String,
    },

    #[error("backend request failed: {0}")]
    Backend(#[from] reqwest::Error),

    #[error("backend returned {status} for {endpoint}")]
    Status {
        status: reqwest::StatusCode,
        endpoint: String,
    },
}

impl StoreError {
    /// Whether the failure is a backend/transport problem worth falling back
    /// over. Validation failures are returned to the caller as-is; serving
    /// them from the mock would mask the real answer.
    pub fn is_transient(&self) -> bool {
        match self {
            StoreError::Backend(_) => true,
            StoreError::Status { status, .. } => status.is_server_error(),
            StoreError::NotFound { .. } | StoreError::InvalidTransition { .. } => false,
        }
    }
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
