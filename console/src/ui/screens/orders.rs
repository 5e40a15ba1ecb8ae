//! Order list and detail renderers.

use shared::{format_rupees, SellerOrder};

use crate::app::screens::orders::order_lines;
use crate::ui::widgets::{render_empty_state, Table};

pub fn render_orders(items: &[SellerOrder]) -> String {
    if items.is_empty() {
        return render_empty_state("No orders match.", None);
    }
    let mut table = Table::new(&["ID", "Order", "Customer", "Seller", "Amount", "Status", "Placed"]);
    for entry in items {
        let order = &entry.order;
        table.row([
            entry.id.to_string(),
            order.order_id.clone(),
            order.user.name.clone(),
            entry.seller.name.clone(),
            format_rupees(order.price),
            order.status().label().to_string(),
            order.created_display(),
        ]);
    }
    table.render()
}

/// Order detail: customer, delivery, payment and product lines.
pub fn render_order_detail(entry: &SellerOrder) -> String {
    let order = &entry.order;
    let mut out = String::new();
    out.push_str(&format!("Order {}\n", order.order_id));
    out.push_str(&format!("Customer: {} <{}>\n", order.user.name, order.user.email));
    out.push_str(&format!("Seller:   {}\n", entry.seller.name));
    out.push_str(&format!("Address:  {}\n", order.address));
    out.push_str(&format!("Status:   {}\n", order.status().label()));
    out.push_str(&format!("Amount:   {}\n", format_rupees(order.price)));
    out.push_str(&format!(
        "Payment:  {}\n",
        order.payment_method.as_deref().unwrap_or("—")
    ));
    out.push_str(&format!("Placed:   {}\n\n", order.created_display()));

    let mut table = Table::new(&["Product", "Qty"]);
    for (product, quantity) in order_lines(entry) {
        table.row([product, quantity.to_string()]);
    }
    out.push_str(&table.render());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mock::seller_order;

    #[test]
    fn test_order_row_shows_status_label_and_amount() {
        let rendered = render_orders(&[seller_order(1, "Anita Sharma", "Meera Textiles", "2024-03-05T10:15:00")]);
        assert!(rendered.contains("Processing"));
        assert!(rendered.contains("₹799.00"));
        assert!(rendered.contains("Anita Sharma"));
    }

    #[test]
    fn test_detail_lists_products() {
        let rendered = render_order_detail(&seller_order(1, "Anita", "Meera", "2024-03-05T10:15:00"));
        assert!(rendered.lines().any(|line| line.starts_with("P-1") && line.ends_with('2')));
        assert!(rendered.contains("Payment:  UPI"));
    }
}
