//! Catalog list renderers: categories, shop-by-name, shop-by-category and blogs.

use shared::{truncate_text, Blog, ProductCategory, ShopByCategory, ShopByName};

use crate::ui::widgets::{render_empty_state, Table};

pub fn render_categories(items: &[ProductCategory]) -> String {
    if items.is_empty() {
        return render_empty_state("No categories found.", Some("Add one with `categories add <name>`."));
    }
    let mut table = Table::new(&["ID", "Name"]);
    for category in items {
        table.row([category.id.to_string(), category.name.clone()]);
    }
    table.render()
}

pub fn render_shop_by_name(items: &[ShopByName]) -> String {
    if items.is_empty() {
        return render_empty_state("No shop-by-name entries found.", None);
    }
    let mut table = Table::new(&["ID", "Name", "Image"]);
    for entry in items {
        table.row([
            entry.id.to_string(),
            entry.name.clone(),
            entry.image.clone().unwrap_or_else(|| "—".to_string()),
        ]);
    }
    table.render()
}

pub fn render_shop_by_category(items: &[ShopByCategory]) -> String {
    if items.is_empty() {
        return render_empty_state("No shop-by-category entries found.", None);
    }
    let mut table = Table::new(&["ID", "Name", "Image"]);
    for entry in items {
        table.row([
            entry.id.to_string(),
            entry.name.clone(),
            entry.image_source().unwrap_or("—").to_string(),
        ]);
    }
    table.render()
}

pub fn render_blogs(items: &[Blog]) -> String {
    if items.is_empty() {
        return render_empty_state("No blogs yet.", None);
    }
    let mut table = Table::new(&["ID", "Title", "Description"]);
    for blog in items {
        table.row([blog.id.to_string(), blog.title.clone(), truncate_text(&blog.description, 60)]);
    }
    table.render()
}

/// Full blog post view
pub fn render_blog(blog: &Blog) -> String {
    let mut out = format!("{}\n{}\n", blog.title, "=".repeat(blog.title.chars().count()));
    if let Some(url) = &blog.image_url {
        out.push_str(&format!("Image: {}\n", url));
    }
    out.push('\n');
    out.push_str(&blog.description);
    out.push('\n');
    out
}
