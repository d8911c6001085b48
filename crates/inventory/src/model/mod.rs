//! Domain records shared by the catalog, order and gateway services.
//!
//! Stored records (`Category`, `SubCategory`, `Product`, `Order`) carry parent references as IDs
//! only. The joined read views (`SubCategoryDetails`, `ProductInformation`) are built on demand
//! and never stored.

pub mod category;
pub mod order;
pub mod product;
pub mod sub_category;

pub use category::*;
pub use order::*;
pub use product::*;
pub use sub_category::*;
