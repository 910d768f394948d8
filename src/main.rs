use anyhow::Context;
use clap::Parser;

use moviebase::catalog::TmdbClient;
use moviebase::cli::Cli;
use moviebase::config::{resolve_token, Config, PreferenceStore};
use moviebase::logging::init_tracing;
use moviebase::store::CatalogStore;
use moviebase::ui::{self, App};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(log_path) = init_tracing() {
        tracing::info!(path = %log_path.display(), version = env!("CARGO_PKG_VERSION"), "Logging started");
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;
    tracing::info!(path = %config_path.display(), "Configuration loaded");

    let token = resolve_token(&config.api.token_env_var);
    let client = TmdbClient::new(&config.api, token).context("Failed to build HTTP client")?;
    let preferences = PreferenceStore::from_override(config.preferences.path.clone());
    let store = CatalogStore::new(client, preferences);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let mut app = App::new(
        store,
        runtime.handle().clone(),
        config.catalog.per_page,
        config.api.image_base_url.clone(),
    );
    app.navigate(cli.initial_route(), cli.page);

    ui::run(app, runtime.handle().clone())?;
    Ok(())
}
