use anyhow::Context;
use cart_service::{
    configure_tracing, construct_app_state,
    domain::cart::clear_abandoned_carts,
    infra::{Cli, get_config_settings},
    start_server,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = get_config_settings().context("Could not read application configuration.")?;

    // _worker_guard is pulled back into the scope of main() to ensure all tracing events get
    // written to the log file when the program terminates, which is done when _worker_guard is
    // dropped.
    let _worker_guard = configure_tracing(&settings);

    let app_state = construct_app_state(settings).await?;

    if cli.clear_abandoned_carts {
        let removed = clear_abandoned_carts(&app_state.pool).await?;
        tracing::info!("Cleared {removed} line item(s) from abandoned carts.");
    }

    start_server(app_state).await
}
