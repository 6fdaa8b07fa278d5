use std::{net::IpAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use axum::Router;
use rootrise_core_contact_contracts::ContactFeatureService;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact> {
    contact: Contact,
    config: Arc<RestServerConfig>,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    /// Directory of the compiled client bundle, containing the entry document
    /// `index.html`.
    pub static_dir: PathBuf,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactFeatureService,
{
    pub fn new(contact: Contact, config: RestServerConfig) -> Self {
        Self {
            contact,
            config: config.into(),
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        self.serve_on(listener).await
    }

    /// Serves on an already bound listener until a shutdown signal arrives.
    pub async fn serve_on(self, listener: TcpListener) -> anyhow::Result<()> {
        let router = self.router();
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Failed to start HTTP server")
    }

    fn router(self) -> Router<()> {
        let site = routes::site::router(&self.config);
        let router = Router::new()
            .merge(routes::contact::router(self.contact.into(), site.clone()))
            .merge(site);

        // The last layer added runs first; trace spans need the request id.
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(err) => {
                error!("Failed to install Ctrl+C handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                error!("Failed to install signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
