//! # Screens
//!
//! List/form screens built on [`list::ListScreen`].

pub mod blog;
pub mod categories;
pub mod list;
pub mod orders;
pub mod sellers;
pub mod shop_by_category;
pub mod shop_by_name;

pub use blog::{BlogDraft, BlogScreen, Blogs};
pub use categories::{Categories, CategoriesScreen};
pub use list::{CrudResource, ListResource, ListScreen, ListState, LockPolicy, RowKey, Searchable};
pub use orders::{Orders, OrdersScreen};
pub use sellers::{Sellers, SellersScreen};
pub use shop_by_category::{ShopByCategoryEntries, ShopByCategoryScreen};
pub use shop_by_name::{CatalogEntryFields, ShopByNameEntries, ShopByNameScreen};
