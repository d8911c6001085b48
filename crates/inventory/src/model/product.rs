use crate::model::{SubCategoryDetails, SubCategoryId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored shape of a product: it keeps only the ID of its sub-category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub manufacturer: String,
    pub list_cost: i64,
    #[serde(rename = "subCategoryID")]
    pub sub_category_id: SubCategoryId,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        list_cost: i64,
        sub_category_id: SubCategoryId,
    ) -> Self {
        Self {
            id: ProductId::default(),
            name: name.into(),
            description: String::new(),
            manufacturer: manufacturer.into(),
            list_cost,
            sub_category_id,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Read view of a product joined with its sub-category, which is itself joined with its
/// category. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInformation {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub manufacturer: String,
    pub list_cost: i64,
    pub sub_category: SubCategoryDetails,
}
