// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Main entry point for the catalog-admin client
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing::info;

use catalog_admin::api::client::HttpApiClient;
use catalog_admin::app::{App, Screen};
use catalog_admin::config::Config;
use catalog_admin::core::errors::AdminError;
use catalog_admin::core::messages::Locale;
use catalog_admin::core::models::ProductId;
use catalog_admin::core::routes::Route;
use catalog_admin::core::session::{FileSessionStore, SessionStore};
use catalog_admin::core::types::SessionToken;

/// Exit status when the flow ended on the login route.
const EXIT_LOGIN_REQUIRED: u8 = 2;

#[derive(Parser, Debug)]
#[command(version, about = "Product catalog admin client", long_about = None)]
struct Cli {
    /// Base URL of the catalog API (e.g. "http://localhost:80")
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// File holding the session token
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    /// Display language: "ja" or "en"
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the signed-in user's dashboard
    Dashboard,
    /// List all products
    Products,
    /// Show a single product
    Product { id: ProductId },
    /// Delete a product from the product list
    Delete {
        id: ProductId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Delete a product from its detail page
    DeleteDetail {
        id: ProductId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Sign out remotely and drop the local session
    Logout,
    /// Store a session token obtained from the login flow
    SetToken { token: String },
    /// Remove the stored session token
    ClearToken,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    install_panic_hook();

    // Config layers: defaults, YAML file, environment, then flags
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config.api_url = url.clone();
    }
    if let Some(path) = &cli.session_file {
        config.session_file = path.clone();
    }
    if let Some(locale) = &cli.locale {
        config.locale = Locale::parse_safe(locale);
    }
    config.validate()?;

    if let Err(e) = init_tracing(&config) {
        eprintln!("Failed to init tracing: {}", e);
    }

    let session = Arc::new(FileSessionStore::new(config.session_file.clone()));
    let locale = config.locale;
    let localized = |e: AdminError| anyhow!(e.user_message(locale));

    match &cli.command {
        Command::SetToken { token } => {
            let token = SessionToken::new(token.as_str())
                .context("Session token must not be empty")?;
            session.set(&token).map_err(localized)?;
            info!(path = %session.path().display(), "Session token stored");
            return Ok(ExitCode::SUCCESS);
        }
        Command::ClearToken => {
            session.clear().map_err(localized)?;
            info!(path = %session.path().display(), "Session token cleared");
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    let api = Arc::new(HttpApiClient::new(&config.api_url).map_err(localized)?);
    info!(api_url = %api.base_url(), locale = %config.locale, "Starting catalog-admin");
    let app = App::new(api, session, config.locale);
    let explicit_logout = matches!(cli.command, Command::Logout);

    let screen = match cli.command {
        Command::Dashboard => app.visit(Route::Dashboard).await,
        Command::Products => app.visit(Route::ProductList).await,
        Command::Product { id } => app.visit(Route::ProductDetail(id)).await,
        Command::Delete { id, yes } => {
            app.delete_from_list(id, |page| yes || prompt(page)).await
        }
        Command::DeleteDetail { id, yes } => {
            app.delete_from_detail(id, |page| yes || prompt(page)).await
        }
        Command::Logout => app.logout().await,
        Command::SetToken { .. } | Command::ClearToken => return Ok(ExitCode::SUCCESS),
    };

    Ok(finish(&screen, explicit_logout))
}

/// Landing on login is the goal of `logout`, so only other flows report it.
fn finish(screen: &Screen, explicit_logout: bool) -> ExitCode {
    print!("{}", screen.body);
    let _ = io::stdout().flush();

    if screen.is_login() && !explicit_logout {
        ExitCode::from(EXIT_LOGIN_REQUIRED)
    } else if screen.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Show the page with its dialog open and read a yes/no answer from stdin.
fn prompt(page: &str) -> bool {
    print!("{}[y/N] ", page);
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info.payload();
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "no message".to_string());

        match info.location() {
            Some(at) => eprintln!(
                "catalog-admin panicked at {}:{}: {}",
                at.file(),
                at.line(),
                message
            ),
            None => eprintln!("catalog-admin panicked: {}", message),
        }
    }));
}

fn init_tracing(config: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("catalog_admin=info,warn"));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        subscriber.json().try_init()?;
    } else {
        subscriber.try_init()?;
    }

    Ok(())
}
