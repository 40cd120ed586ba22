use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, Clock, LessonService, LessonSessionLoader, UserService, VocabularyService,
};
use storage::demo::seed_demo;
use storage::remote::{DEFAULT_API_URL, RemoteConfig};
use storage::repository::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_ADMIN_EMAIL: &str = "admin@kotoba.local";

#[derive(Parser, Debug)]
#[command(name = "kotoba", about = "Japanese vocabulary lessons on the desktop")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    backend: BackendArgs,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Open the desktop window (default).
    Ui,
    /// Upload the demo lessons to the configured API.
    Seed,
}

#[derive(Args, Debug, Clone)]
struct BackendArgs {
    /// Base URL of the lesson API.
    #[arg(long, env = "KOTOBA_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Bearer token for dashboard writes.
    #[arg(long, env = "KOTOBA_API_TOKEN", global = true)]
    token: Option<String>,

    /// Use bundled demo lessons held in memory instead of the API.
    #[arg(long, global = true)]
    offline: bool,

    /// Author recorded on vocabulary added from the dashboard.
    #[arg(long, env = "KOTOBA_ADMIN_EMAIL", default_value = DEFAULT_ADMIN_EMAIL, global = true)]
    admin_email: String,
}

impl BackendArgs {
    fn remote_config(&self) -> Result<RemoteConfig> {
        let config = RemoteConfig::new(&self.api_url)
            .with_context(|| format!("invalid --api-url {:?}", self.api_url))?;
        Ok(config.with_token(self.token.clone()))
    }
}

struct DesktopApp {
    services: AppServices,
    admin_email: String,
}

impl UiApp for DesktopApp {
    fn admin_email(&self) -> String {
        self.admin_email.clone()
    }

    fn lessons(&self) -> Arc<LessonService> {
        self.services.lessons()
    }

    fn vocabulary(&self) -> Arc<VocabularyService> {
        self.services.vocabulary()
    }

    fn users(&self) -> Arc<UserService> {
        self.services.users()
    }

    fn session_loader(&self) -> Arc<LessonSessionLoader> {
        self.services.session_loader()
    }
}

async fn build_services(backend: &BackendArgs, clock: Clock) -> Result<AppServices> {
    if backend.offline {
        return AppServices::new_offline_demo(clock)
            .await
            .context("failed to prepare demo lessons");
    }
    AppServices::new_remote(backend.remote_config()?, clock)
        .context("failed to set up the lesson API client")
}

async fn run_ui(backend: BackendArgs) -> Result<()> {
    let clock = Clock::system();
    let services = build_services(&backend, clock).await?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        admin_email: backend.admin_email,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Kotoba")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

async fn run_seed(backend: BackendArgs) -> Result<()> {
    if backend.offline {
        anyhow::bail!("seed writes to the API and cannot run with --offline");
    }
    let config = backend.remote_config()?;
    if !config.has_token() {
        anyhow::bail!("seed needs --token or KOTOBA_API_TOKEN");
    }
    let storage = Storage::remote(config).context("failed to set up the lesson API client")?;
    seed_demo(&storage, Clock::system().now())
        .await
        .context("failed to upload demo lessons")?;
    info!(api_url = %backend.api_url, "demo lessons uploaded");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => run_ui(cli.backend).await,
        Command::Seed => run_seed(cli.backend).await,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_to_ui_against_hosted_api() {
        let cli = Cli::try_parse_from(["kotoba"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.backend.offline);
        assert_eq!(cli.backend.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn parses_seed_with_backend_flags() {
        let cli = Cli::try_parse_from([
            "kotoba",
            "seed",
            "--api-url",
            "http://localhost:3000",
            "--token",
            "secret",
            "--admin-email",
            "me@example.com",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Command::Seed));
        assert_eq!(cli.backend.api_url, "http://localhost:3000");
        assert_eq!(cli.backend.token.as_deref(), Some("secret"));
        assert_eq!(cli.backend.admin_email, "me@example.com");
    }

    #[test]
    fn rejects_non_http_api_url() {
        let cli = Cli::try_parse_from(["kotoba", "--api-url", "ftp://example.com"]).unwrap();
        assert!(cli.backend.remote_config().is_err());
    }
}
