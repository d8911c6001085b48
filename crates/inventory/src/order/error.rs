use crate::model::ProductId;
use entity_store::StoreError;

/// Errors returned by the order controller.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// Bad input rejected before the store is touched.
    #[error("validation error: {0}")]
    Validation(String),

    /// The product's settled orders add up to more than an `i64` can hold.
    #[error("stock of product {0} is out of range")]
    StockOutOfRange(ProductId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl OrderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, OrderError::Store(e) if e.is_not_found())
    }
}
