use entity_store::StoreError;

/// Outcome of a failed call to a sibling service.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The sibling answered 404.
    #[error("{resource} not found at {path}")]
    NotFound { resource: &'static str, path: String },

    /// The sibling answered with any other non-2xx status.
    #[error("non-2xx response: status={status} body={body}")]
    Transport { status: u16, body: String },

    /// The request never produced a usable response (connect failure, bad JSON, ...).
    #[error("gateway request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl GatewayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound { .. })
    }
}

/// Lets a remote resource stand in wherever a local [`Lookup`](entity_store::Lookup) is
/// expected. A remote 404 stays a not-found.
impl From<GatewayError> for StoreError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::NotFound { resource, path } => StoreError::NotFound {
                entity: resource,
                key: format!("path={path}"),
            },
            other => StoreError::Remote(Box::new(other)),
        }
    }
}
