use std::{net::SocketAddr, path::Path};

use rootrise_api_rest::{RestServer, RestServerConfig};
use rootrise_core_contact_contracts::ContactFeatureService;
use tokio::net::TcpListener;

pub const INDEX_HTML: &str = "<!doctype html><html><body><div id=\"root\"></div></body></html>";

pub async fn start_server(contact: impl ContactFeatureService, static_dir: &Path) -> SocketAddr {
    let server = RestServer::new(
        contact,
        RestServerConfig {
            static_dir: static_dir.to_owned(),
        },
    );

    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { server.serve_on(listener).await.unwrap() });
    addr
}

/// Writes a minimal client bundle and returns its directory.
pub fn bundle() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets/app.js"), "console.log(\"root to rise\");").unwrap();
    dir
}
