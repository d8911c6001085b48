use entity_store::mock::{MockLookup, MockRepository};
use entity_store::StoreError;
use inventory::catalog::ProductController;
use inventory::lifecycle::CatalogSystem;
use inventory::model::{
    Category, CategoryId, Product, ProductId, SubCategory, SubCategoryDetails, SubCategoryId,
};
use std::collections::HashSet;
use std::sync::Arc;

/// Seeds one category, one sub-category and one product.
async fn seeded() -> (CatalogSystem, Category, SubCategory, Product) {
    let system = CatalogSystem::new();
    let category = system
        .categories
        .create(Category::new("Electronics"))
        .await
        .expect("Failed to create category");
    let sub_category = system
        .sub_categories
        .create(SubCategory::new("Phones", category.id))
        .await
        .expect("Failed to create sub-category");
    let product = system
        .products
        .create(
            Product::new("Pixel", "Google", 699, sub_category.id).with_description("Android phone"),
        )
        .await
        .expect("Failed to create product");
    (system, category, sub_category, product)
}

#[tokio::test]
async fn test_sub_category_read_carries_its_category() {
    let (system, category, sub_category, _) = seeded().await;

    let details = system.sub_categories.get(sub_category.id).await.unwrap();

    assert_eq!(details.id, sub_category.id);
    assert_eq!(details.category, category);
}

#[tokio::test]
async fn test_product_read_is_enriched_two_levels_deep() {
    let (system, category, sub_category, product) = seeded().await;

    let info = system.products.get(product.id).await.unwrap();

    assert_eq!(info.name, "Pixel");
    assert_eq!(info.description, "Android phone");
    assert_eq!(info.sub_category.id, sub_category.id);
    assert_eq!(info.sub_category.category.name, category.name);
}

#[tokio::test]
async fn test_dangling_product_fails_single_read_but_is_skipped_in_bulk() {
    let (system, _, _, good) = seeded().await;
    let dangling = system
        .products
        .create(Product::new("Ghost", "Nobody", 1, SubCategoryId(404)))
        .await
        .unwrap();

    let err = system.products.get(dangling.id).await.unwrap_err();
    match err {
        StoreError::Enrichment { entity, id, source } => {
            assert_eq!(entity, "Product");
            assert_eq!(id, dangling.id.to_string());
            assert!(source.is_not_found());
        }
        other => panic!("expected enrichment failure, got {other:?}"),
    }

    let all = system.products.get_all().await.unwrap();
    let ids: Vec<ProductId> = all.iter().map(|info| info.id).collect();
    assert_eq!(ids, vec![good.id]);
}

#[tokio::test]
async fn test_deleting_a_category_does_not_cascade() {
    let (system, category, sub_category, product) = seeded().await;

    system.categories.delete(category.id).await.unwrap();

    // The children stay stored but can no longer be enriched.
    assert!(matches!(
        system.sub_categories.get(sub_category.id).await,
        Err(StoreError::Enrichment { .. })
    ));
    match system.products.get(product.id).await.unwrap_err() {
        StoreError::Enrichment { source, .. } => {
            assert!(matches!(*source, StoreError::Enrichment { entity: "SubCategory", .. }));
        }
        other => panic!("expected enrichment failure, got {other:?}"),
    }
    assert!(system.products.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_category_then_get_is_not_found() {
    let system = CatalogSystem::new();

    let delete = system.categories.delete(CategoryId(7)).await.unwrap_err();
    assert!(matches!(delete, StoreError::NotFound { entity: "Category", .. }));

    let get = system.categories.get(CategoryId(7)).await.unwrap_err();
    assert!(get.is_not_found());
}

#[tokio::test]
async fn test_empty_catalog_reports_not_found_on_list() {
    let system = CatalogSystem::new();
    assert!(system.categories.get_all().await.unwrap_err().is_not_found());
    assert!(system.sub_categories.get_all().await.unwrap_err().is_not_found());
    assert!(system.products.get_all().await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_update_overwrites_fields_and_keeps_id() {
    let (system, category, sub_category, _) = seeded().await;
    let other = system
        .categories
        .create(Category::new("Audio"))
        .await
        .unwrap();

    system
        .sub_categories
        .update(sub_category.id, SubCategory::new("Headphones", other.id))
        .await
        .unwrap();

    let details = system.sub_categories.get(sub_category.id).await.unwrap();
    assert_eq!(details.id, sub_category.id);
    assert_eq!(details.name, "Headphones");
    assert_eq!(details.category.id, other.id);
    assert_ne!(details.category.id, category.id);
}

#[tokio::test]
async fn test_concurrent_category_creates_get_dense_ids() {
    let system = Arc::new(CatalogSystem::new());
    let mut handles = Vec::new();

    for i in 0..32 {
        let system = system.clone();
        handles.push(tokio::spawn(async move {
            system
                .categories
                .create(Category::new(format!("category-{i}")))
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    let expected: HashSet<CategoryId> = (1..=32).map(CategoryId).collect();
    assert_eq!(ids, expected);
}

/// Product enrichment in isolation: the sub-category side is scripted.
#[tokio::test]
async fn test_product_controller_with_mocked_dependencies() {
    let products = MockRepository::<Product>::new();
    let sub_categories = MockLookup::<SubCategoryId, SubCategoryDetails>::new();

    let mut stored = Product::new("Kettle", "Acme", 30, SubCategoryId(2));
    stored.id = ProductId(1);
    products.expect_get(ProductId(1)).return_ok(stored);
    sub_categories
        .expect_get(SubCategoryId(2))
        .return_ok(SubCategoryDetails {
            id: SubCategoryId(2),
            name: "Kitchen".into(),
            category: Category {
                id: CategoryId(1),
                name: "Home".into(),
            },
        });

    let controller =
        ProductController::new(Arc::new(products.clone()), Arc::new(sub_categories.clone()));
    let info = controller.get(ProductId(1)).await.unwrap();

    assert_eq!(info.sub_category.name, "Kitchen");
    assert_eq!(info.sub_category.category.name, "Home");
    products.verify();
    sub_categories.verify();
}
