//! `orders` and `sellers`.

use super::{require, settle};
use crate::app::screens::orders::parse_date_filter;
use crate::app::{App, Route};
use crate::cli::args::OrderAction;
use crate::core::error::{AppError, Result};
use crate::ui::screens::{render_order_detail, render_orders, render_sellers};
use crate::ui::widgets::render_stats_summary;

pub async fn orders(app: &App, action: Option<OrderAction>) -> Result<()> {
    require(app, Route::Orders)?;
    let screen = app.orders_screen();
    let action = action.unwrap_or(OrderAction::List {
        search: None,
        date: None,
    });

    let result = async {
        match action {
            OrderAction::List { search, date } => {
                let date = match date {
                    Some(raw) => Some(parse_date_filter(&raw).ok_or_else(|| {
                        AppError::Validation(format!("Date must be YYYY-MM-DD, got '{}'", raw))
                    })?),
                    None => None,
                };
                screen.refresh().await?;
                screen.set_query(search.unwrap_or_default());
                screen.set_date(date);

                let visible = screen.visible();
                print!("{}", render_orders(&visible));
                println!(
                    "{}",
                    render_stats_summary(&[("Total", screen.items().len()), ("Shown", visible.len())])
                );
            }
            OrderAction::Show { id } => {
                screen.refresh().await?;
                let order = screen
                    .items()
                    .into_iter()
                    .find(|order| order.id == id)
                    .ok_or_else(|| AppError::Validation(format!("No order with id {}", id)))?;
                print!("{}", render_order_detail(&order));
            }
        }
        Ok::<(), AppError>(())
    }
    .await;

    settle(app, screen.drain_notices(), result)
}

pub async fn sellers(app: &App, search: Option<String>) -> Result<()> {
    require(app, Route::Sellers)?;
    let screen = app.sellers_screen();

    let result = async {
        screen.refresh().await?;
        screen.set_query(search.unwrap_or_default());
        print!("{}", render_sellers(&screen.visible()));
        println!("Open a seller's payments with `shreeaura-admin payments show <seller-id>`.");
        Ok::<(), AppError>(())
    }
    .await;

    settle(app, screen.drain_notices(), result)
}
