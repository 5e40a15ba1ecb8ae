//! Seller directory renderer.

use shared::Seller;

use crate::ui::widgets::{render_empty_state, Table};

pub fn render_sellers(items: &[Seller]) -> String {
    if items.is_empty() {
        return render_empty_state("No sellers match.", None);
    }
    let mut table = Table::new(&["ID", "Name", "Email", "Phone", "Address", "Pincode"]);
    for seller in items {
        table.row([
            seller.id.clone(),
            seller.name.clone(),
            seller.email.clone(),
            seller.phone.clone(),
            seller.full_address().unwrap_or_else(|| "—".to_string()),
            seller.pincode.clone().unwrap_or_else(|| "—".to_string()),
        ]);
    }
    table.render()
}
