//! # Catalog Controllers
//!
//! `CategoryController` passes every call straight to its repository. Sub-categories and products
//! reference a parent, so their controllers are the generic [`EnrichingController`] instantiated
//! for each record type.

use crate::model::{Category, CategoryId, Product, SubCategory};
use async_trait::async_trait;
use entity_store::{EnrichingController, Lookup, Repository, StoreError};
use std::sync::Arc;
use tracing::instrument;

/// Reads of sub-categories return [`SubCategoryDetails`](crate::model::SubCategoryDetails).
pub type SubCategoryController = EnrichingController<SubCategory>;

/// Reads of products return [`ProductInformation`](crate::model::ProductInformation).
pub type ProductController = EnrichingController<Product>;

#[derive(Clone)]
pub struct CategoryController {
    repo: Arc<dyn Repository<Category>>,
}

impl CategoryController {
    pub fn new(repo: Arc<dyn Repository<Category>>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, category: Category) -> Result<Category, StoreError> {
        self.repo.create(category).await
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: CategoryId, category: Category) -> Result<(), StoreError> {
        self.repo.update(id, category).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: CategoryId) -> Result<Category, StoreError> {
        self.repo.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Category>, StoreError> {
        self.repo.get_all().await
    }

    /// Deleting a category does not touch the sub-categories that reference it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: CategoryId) -> Result<Category, StoreError> {
        self.repo.delete(id).await
    }
}

#[async_trait]
impl Lookup<CategoryId, Category> for CategoryController {
    async fn get(&self, id: CategoryId) -> Result<Category, StoreError> {
        CategoryController::get(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_store::mock::MockRepository;

    fn stored(id: u32, name: &str) -> Category {
        Category {
            id: CategoryId(id),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_category_controller_delegates_to_repository() {
        let mock = MockRepository::<Category>::new();
        mock.expect_create().return_ok(stored(1, "Tools"));
        mock.expect_get(CategoryId(1)).return_ok(stored(1, "Tools"));
        mock.expect_delete(CategoryId(1)).return_ok(stored(1, "Tools"));

        let controller = CategoryController::new(Arc::new(mock.clone()));

        let created = controller.create(Category::new("Tools")).await.unwrap();
        assert_eq!(created.id, CategoryId(1));
        assert_eq!(controller.get(CategoryId(1)).await.unwrap().name, "Tools");
        assert_eq!(controller.delete(CategoryId(1)).await.unwrap().name, "Tools");

        mock.verify();
    }

    #[tokio::test]
    async fn test_lookup_surfaces_repository_not_found() {
        let mock = MockRepository::<Category>::new();
        mock.expect_get(CategoryId(3))
            .return_err(StoreError::not_found::<Category>(CategoryId(3)));

        let controller = CategoryController::new(Arc::new(mock.clone()));
        let lookup: &dyn Lookup<CategoryId, Category> = &controller;

        let err = lookup.get(CategoryId(3)).await.unwrap_err();
        assert_eq!(err.to_string(), "Category not found: id=3");
        mock.verify();
    }
}
