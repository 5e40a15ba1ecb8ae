//! `blogs`.

use tokio::io::AsyncBufRead;

use super::catalog::{confirm_delete, not_found};
use super::{require, settle};
use crate::app::screens::BlogDraft;
use crate::app::{App, Route};
use crate::cli::args::{BlogAction, DescriptionArgs};
use crate::cli::prompt::Prompt;
use crate::core::error::{AppError, Result};
use crate::services::upload::ImageUpload;
use crate::ui::screens::{render_blog, render_blogs};

/// Resolve `--description` / `--description-file`.
async fn read_description(args: DescriptionArgs) -> Result<Option<String>> {
    match (args.description, args.description_file) {
        (Some(text), _) => Ok(Some(text)),
        (None, Some(path)) => Ok(Some(tokio::fs::read_to_string(&path).await?)),
        (None, None) => Ok(None),
    }
}

async fn read_image(path: Option<std::path::PathBuf>) -> Result<Option<ImageUpload>> {
    match path {
        Some(path) => Ok(Some(ImageUpload::from_path(&path).await?)),
        None => Ok(None),
    }
}

pub async fn blogs<R: AsyncBufRead + Unpin>(
    app: &App,
    prompt: &mut Prompt<R>,
    action: Option<BlogAction>,
) -> Result<()> {
    require(app, Route::Blogs)?;
    let screen = app.blog_screen();
    let action = action.unwrap_or(BlogAction::List { search: None });

    let result = async {
        match action {
            BlogAction::List { search } => {
                screen.refresh().await?;
                if let Some(search) = search {
                    screen.set_query(search);
                }
            }
            BlogAction::Show { id } => {
                screen.refresh().await?;
                let blog = screen.find(id).ok_or_else(|| not_found("blog", id))?;
                print!("{}", render_blog(&blog));
                return Ok(());
            }
            BlogAction::Add {
                title,
                description,
                image,
            } => {
                let description = read_description(description).await?.unwrap_or_default();
                let image = read_image(Some(image)).await?;
                screen.create(BlogDraft::new(title, description, image)).await?;
            }
            BlogAction::Edit {
                id,
                title,
                description,
                image,
            } => {
                screen.refresh().await?;
                let current = screen.find(id).ok_or_else(|| not_found("blog", id))?;
                let description = read_description(description).await?.unwrap_or(current.description);
                let draft = BlogDraft::new(title.unwrap_or(current.title), description, read_image(image).await?);
                screen.update(id, draft).await?;
            }
            BlogAction::Delete { id, confirm } => {
                screen.refresh().await?;
                let blog = screen.find(id).ok_or_else(|| not_found("blog", id))?;
                let what = format!("blog {} ({})", id, blog.title);
                if !confirm_delete(prompt, confirm.yes, &what).await? {
                    return Ok(());
                }
                screen.delete(id).await?;
            }
        }
        print!("{}", render_blogs(&screen.visible()));
        Ok::<(), AppError>(())
    }
    .await;

    settle(app, screen.drain_notices(), result)
}
