//! # Screen Renderers
//!
//! One renderer per console screen. Each takes the screen's data and returns
//! the text to print.

pub mod catalog;
pub mod orders;
pub mod payment;
pub mod sellers;

pub use catalog::{render_blog, render_blogs, render_categories, render_shop_by_category, render_shop_by_name};
pub use orders::{render_order_detail, render_orders};
pub use payment::render_payment;
pub use sellers::render_sellers;
