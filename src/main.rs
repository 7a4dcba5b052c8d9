use scenario_shortener::{config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    telemetry::init(&config);
    config.print_summary();

    server::run(config).await
}
