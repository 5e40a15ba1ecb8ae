//! `login`, `logout` and `status`.

use std::env;

use tokio::io::AsyncBufRead;

use crate::app::{App, Route};
use crate::cli::prompt::Prompt;
use crate::config::ConsoleConfig;
use crate::core::error::{AppError, Result};
use crate::ui;

/// Environment variable consulted before prompting for the password
pub const PASSWORD_ENV: &str = "SHREEAURA_ADMIN_PASSWORD";

pub async fn login<R: AsyncBufRead + Unpin>(
    app: &App,
    prompt: &mut Prompt<R>,
    email: String,
    password: Option<String>,
) -> Result<()> {
    if !app.navigate(Route::Login).is_allowed() {
        println!("Already logged in. Run `shreeaura-admin logout` to switch accounts.");
        return Ok(());
    }

    let password = match password.or_else(|| env::var(PASSWORD_ENV).ok()) {
        Some(password) => password,
        None => prompt.ask("Password:").await?,
    };

    app.handle_login_click(email, password);
    if app.state.read().login.loading {
        app.next_event().await;
    }

    let error = app.state.read().login.error.clone();
    ui::show_notices(&app.drain_notices());
    match error {
        Some(message) => Err(AppError::Auth(message)),
        None => Ok(()),
    }
}

pub fn logout(app: &App) -> Result<()> {
    let was_authenticated = app.is_authenticated();
    app.handle_logout()?;
    ui::show_notices(&app.drain_notices());
    if !was_authenticated {
        println!("No session stored.");
    }
    Ok(())
}

pub fn status(app: &App, config: &ConsoleConfig) -> Result<()> {
    println!("API:      {}", config.api_base_url);
    println!("Session:  {}", config.session_file.display());
    println!("Logs:     {}", config.log_dir.display());
    println!(
        "Status:   {}",
        if app.is_authenticated() { "logged in" } else { "logged out" }
    );
    Ok(())
}
