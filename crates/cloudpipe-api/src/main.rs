use cloudpipe_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    cloudpipe_api::telemetry::init_tracing();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (staging directory, provider client, routes)
    let (_state, router) = cloudpipe_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    cloudpipe_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
