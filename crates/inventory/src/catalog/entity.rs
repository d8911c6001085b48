//! Store and enrichment behavior of the catalog records.

use crate::model::{
    Category, CategoryId, Product, ProductId, ProductInformation, SubCategory, SubCategoryDetails,
    SubCategoryId,
};
use entity_store::{Enrichable, StoreEntity};

impl StoreEntity for Category {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }

    fn assign_id(&mut self, id: CategoryId) {
        self.id = id;
    }

    fn apply_update(&mut self, update: Category) {
        self.name = update.name;
    }
}

impl StoreEntity for SubCategory {
    type Id = SubCategoryId;

    fn id(&self) -> SubCategoryId {
        self.id
    }

    fn assign_id(&mut self, id: SubCategoryId) {
        self.id = id;
    }

    fn apply_update(&mut self, update: SubCategory) {
        self.name = update.name;
        self.category_id = update.category_id;
    }
}

impl Enrichable for SubCategory {
    type ParentId = CategoryId;
    type Parent = Category;
    type View = SubCategoryDetails;

    fn parent_id(&self) -> CategoryId {
        self.category_id
    }

    fn enrich(self, category: Category) -> SubCategoryDetails {
        SubCategoryDetails {
            id: self.id,
            name: self.name,
            category,
        }
    }
}

impl StoreEntity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }

    fn assign_id(&mut self, id: ProductId) {
        self.id = id;
    }

    fn apply_update(&mut self, update: Product) {
        self.name = update.name;
        self.description = update.description;
        self.manufacturer = update.manufacturer;
        self.list_cost = update.list_cost;
        self.sub_category_id = update.sub_category_id;
    }
}

/// The parent of a product is the already-joined sub-category view, which makes the product
/// view two levels deep.
impl Enrichable for Product {
    type ParentId = SubCategoryId;
    type Parent = SubCategoryDetails;
    type View = ProductInformation;

    fn parent_id(&self) -> SubCategoryId {
        self.sub_category_id
    }

    fn enrich(self, sub_category: SubCategoryDetails) -> ProductInformation {
        ProductInformation {
            id: self.id,
            name: self.name,
            description: self.description,
            manufacturer: self.manufacturer,
            list_cost: self.list_cost,
            sub_category,
        }
    }
}
