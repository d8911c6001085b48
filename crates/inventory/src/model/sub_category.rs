use crate::model::{Category, CategoryId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for SubCategories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubCategoryId(pub u32);

impl From<u32> for SubCategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SubCategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored shape of a sub-category: it keeps only the ID of its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    #[serde(default)]
    pub id: SubCategoryId,
    pub name: String,
    #[serde(rename = "categoryID")]
    pub category_id: CategoryId,
}

impl SubCategory {
    pub fn new(name: impl Into<String>, category_id: CategoryId) -> Self {
        Self {
            id: SubCategoryId::default(),
            name: name.into(),
            category_id,
        }
    }
}

/// Read view of a sub-category joined with its category. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategoryDetails {
    pub id: SubCategoryId,
    pub name: String,
    pub category: Category,
}
