use crate::catalog::{CategoryController, ProductController, SubCategoryController};
use crate::model::{Category, Product, SubCategory};
use entity_store::EntityStore;
use std::sync::Arc;
use tracing::info;

/// Composition root of the catalog service.
///
/// Owns one store per record type and wires the enrichment chain:
/// - **categories** read straight from their store
/// - **sub-categories** resolve their category through `categories`
/// - **products** resolve their sub-category (already joined with its category) through
///   `sub_categories`
///
/// # Example
///
/// ```rust
/// use inventory::lifecycle::CatalogSystem;
/// use inventory::model::{Category, Product, SubCategory};
///
/// #[tokio::main]
/// async fn main() {
///     let system = CatalogSystem::new();
///
///     let tools = system.categories.create(Category::new("Tools")).await.unwrap();
///     let drills = system
///         .sub_categories
///         .create(SubCategory::new("Drills", tools.id))
///         .await
///         .unwrap();
///     let drill = system
///         .products
///         .create(Product::new("Cordless Drill", "Acme", 120, drills.id))
///         .await
///         .unwrap();
///
///     let info = system.products.get(drill.id).await.unwrap();
///     assert_eq!(info.sub_category.category.name, "Tools");
/// }
/// ```
pub struct CatalogSystem {
    pub categories: CategoryController,
    pub sub_categories: SubCategoryController,
    pub products: ProductController,
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSystem {
    pub fn new() -> Self {
        // 1. Leaf: categories have no parent
        let categories = CategoryController::new(Arc::new(EntityStore::<Category>::new()));

        // 2. Each controller becomes the parent lookup of the next level down
        let sub_categories = SubCategoryController::new(
            Arc::new(EntityStore::<SubCategory>::new()),
            Arc::new(categories.clone()),
        );
        let products = ProductController::new(
            Arc::new(EntityStore::<Product>::new()),
            Arc::new(sub_categories.clone()),
        );

        info!("Catalog system ready");
        Self {
            categories,
            sub_categories,
            products,
        }
    }
}
