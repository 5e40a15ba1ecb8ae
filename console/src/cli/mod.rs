//! # Command-Line Front End
//!
//! Maps each console screen to a subcommand:
//!
//! ```text
//! shreeaura-admin login --email admin@shreeaura.in
//! shreeaura-admin categories add "Handloom"
//! shreeaura-admin shop-by-name add "Banarasi" --image banarasi.png
//! shreeaura-admin blogs edit 4 --title "Winter weaves"
//! shreeaura-admin orders list --search meera --date 2024-03-06
//! shreeaura-admin payments pay 42 --amount 500
//! ```
//!
//! Every protected subcommand passes the session guard first.

pub mod args;
pub mod commands;
pub mod prompt;

use std::sync::Arc;

use tracing::Instrument;

pub use args::{Cli, Command};

use crate::app::App;
use crate::config::ConsoleConfig;
use crate::core::error::Result;
use crate::core::session::{FileSession, SessionStore};
use crate::debug::command_span;
use crate::services::ApiClient;
use crate::ui::screens::{render_shop_by_category, render_shop_by_name};
use prompt::Prompt;

/// Apply command-line overrides on top of the environment configuration.
pub fn resolve_config(cli: &Cli, base: ConsoleConfig) -> Result<ConsoleConfig> {
    let mut config = base;
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url.clone());
    }
    if let Some(path) = &cli.session_file {
        config = config.with_session_file(path.clone());
    }
    config.validate()?;
    Ok(config)
}

/// Build the app from `config` and run one command.
pub async fn run(command: Command, config: &ConsoleConfig) -> Result<()> {
    let session: Arc<dyn SessionStore> = Arc::new(FileSession::open(&config.session_file)?);
    let api = Arc::new(ApiClient::new(config, session.clone())?);
    let app = App::new(api, session);
    let mut prompt = Prompt::stdin();

    let span = command_span(command.name());
    dispatch(&app, &mut prompt, command, config).instrument(span).await
}

async fn dispatch<R>(app: &App, prompt: &mut Prompt<R>, command: Command, config: &ConsoleConfig) -> Result<()>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    tracing::info!(command = command.name(), "Running command");

    match command {
        Command::Login { email, password } => commands::auth::login(app, prompt, email, password).await,
        Command::Logout => commands::auth::logout(app),
        Command::Status => commands::auth::status(app, config),
        Command::Categories { action } => commands::catalog::categories(app, prompt, action).await,
        Command::ShopByName { action } => {
            commands::catalog::image_catalog(
                app,
                prompt,
                crate::app::Route::ShopByName,
                app.shop_by_name_screen(),
                action,
                render_shop_by_name,
                |entry| entry.name.clone(),
            )
            .await
        }
        Command::ShopByCategory { action } => {
            commands::catalog::image_catalog(
                app,
                prompt,
                crate::app::Route::ShopByCategory,
                app.shop_by_category_screen(),
                action,
                render_shop_by_category,
                |entry| entry.name.clone(),
            )
            .await
        }
        Command::Blogs { action } => commands::blogs::blogs(app, prompt, action).await,
        Command::Orders { action } => commands::orders::orders(app, action).await,
        Command::Sellers { search } => commands::orders::sellers(app, search).await,
        Command::Payments { action } => commands::payments::payments(app, prompt, action).await,
    }
}
