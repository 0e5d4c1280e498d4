use blog_demo::{BlogApiClient, DemoConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blog_demo=info")),
        )
        .with_target(false)
        .init();

    let client = BlogApiClient::new(&config.client);
    info!(base_url = client.base_url(), "blog API demo starting");
    let report = blog_demo::run(&client, &config);

    info!(
        seeded = report.seeded.len(),
        final_count = report.final_listing.as_ref().map(Vec::len),
        "demo complete"
    );
    Ok(())
}
