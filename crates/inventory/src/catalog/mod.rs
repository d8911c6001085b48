//! Catalog service core: categories, sub-categories and products.
//!
//! ```text
//! ProductController ──Lookup──▶ SubCategoryController ──Lookup──▶ CategoryController
//!        │                              │                               │
//! EntityStore<Product>        EntityStore<SubCategory>        EntityStore<Category>
//! ```

pub mod controller;
pub mod entity;

pub use controller::{CategoryController, ProductController, SubCategoryController};
