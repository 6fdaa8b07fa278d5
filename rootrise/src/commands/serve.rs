use rootrise_client::scheduling::SchedulingCta;
use rootrise_config::Config;
use tracing::{info, warn};

use crate::environment::Provider;

pub async fn serve(config: &Config, provider: &Provider) -> anyhow::Result<()> {
    let static_dir = &config.site.static_dir;
    if !static_dir.join("index.html").is_file() {
        warn!(
            "No index.html found in {}, page requests will fail until the client bundle is built",
            static_dir.display()
        );
    }

    match &provider.site_settings().scheduling {
        SchedulingCta::Link(url) => info!("Scheduling link: {url}"),
        SchedulingCta::SetupPrompt => {
            info!("No scheduling link configured, the contact page shows a setup prompt")
        }
    }

    let server = provider.rest_server();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
