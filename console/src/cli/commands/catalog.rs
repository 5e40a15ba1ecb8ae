//! `categories`, `shop-by-name` and `shop-by-category`.

use tokio::io::AsyncBufRead;

use super::{require, settle};
use crate::app::screens::{CatalogEntryFields, CategoriesScreen, CrudResource, ListScreen, Searchable};
use crate::app::{App, Route};
use crate::cli::args::{CatalogAction, CategoryAction};
use crate::cli::prompt::Prompt;
use crate::core::error::{AppError, Result};
use crate::services::upload::ImageUpload;
use crate::ui::screens::render_categories;

/// Ask before deleting unless `--yes` was given.
pub(crate) async fn confirm_delete<R: AsyncBufRead + Unpin>(
    prompt: &mut Prompt<R>,
    skip: bool,
    what: &str,
) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    let confirmed = prompt.confirm(&format!("Delete {}?", what)).await?;
    if !confirmed {
        println!("Cancelled.");
    }
    Ok(confirmed)
}

pub(crate) fn not_found(noun: &str, id: i64) -> AppError {
    AppError::Validation(format!("No {} with id {}", noun.to_lowercase(), id))
}

pub async fn categories<R: AsyncBufRead + Unpin>(
    app: &App,
    prompt: &mut Prompt<R>,
    action: Option<CategoryAction>,
) -> Result<()> {
    require(app, Route::Categories)?;
    let screen: CategoriesScreen = app.categories_screen();
    let action = action.unwrap_or(CategoryAction::List { search: None });

    let result = async {
        match action {
            CategoryAction::List { search } => {
                screen.refresh().await?;
                if let Some(search) = search {
                    screen.set_query(search);
                }
            }
            CategoryAction::Add { name } => screen.create(name).await?,
            CategoryAction::Edit { id, name } => {
                screen.update(id, name).await?;
            }
            CategoryAction::Delete { id, confirm } => {
                screen.refresh().await?;
                let category = screen.find(id).ok_or_else(|| not_found("category", id))?;
                let what = format!("category {} ({})", id, category.name);
                if !confirm_delete(prompt, confirm.yes, &what).await? {
                    return Ok(());
                }
                screen.delete(id).await?;
            }
        }
        print!("{}", render_categories(&screen.visible()));
        Ok::<(), AppError>(())
    }
    .await;

    settle(app, screen.drain_notices(), result)
}

/// Shared runner for the two image-backed catalog screens.
pub async fn image_catalog<C, R>(
    app: &App,
    prompt: &mut Prompt<R>,
    route: Route,
    screen: ListScreen<C>,
    action: Option<CatalogAction>,
    render: fn(&[C::Entity]) -> String,
    label: fn(&C::Entity) -> String,
) -> Result<()>
where
    C: CrudResource<Fields = CatalogEntryFields>,
    C::Entity: Searchable,
    R: AsyncBufRead + Unpin,
{
    require(app, route)?;
    let action = action.unwrap_or(CatalogAction::List { search: None });
    let noun = screen.resource().noun();

    let result = async {
        match action {
            CatalogAction::List { search } => {
                screen.refresh().await?;
                if let Some(search) = search {
                    screen.set_query(search);
                }
            }
            CatalogAction::Add { name, image } => {
                let image = ImageUpload::from_path(&image).await?;
                screen.create(CatalogEntryFields::new(name, Some(image))).await?;
            }
            CatalogAction::Edit { id, name, image } => {
                let image = match image {
                    Some(path) => Some(ImageUpload::from_path(&path).await?),
                    None => None,
                };
                screen.update(id, CatalogEntryFields::new(name, image)).await?;
            }
            CatalogAction::Delete { id, confirm } => {
                screen.refresh().await?;
                let entry = screen.find(id).ok_or_else(|| not_found(noun, id))?;
                let what = format!("{} {} ({})", noun.to_lowercase(), id, label(&entry));
                if !confirm_delete(prompt, confirm.yes, &what).await? {
                    return Ok(());
                }
                screen.delete(id).await?;
            }
        }
        print!("{}", render(&screen.visible()));
        Ok::<(), AppError>(())
    }
    .await;

    settle(app, screen.drain_notices(), result)
}
