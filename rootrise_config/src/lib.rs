use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of config files that replaces [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "ROOTRISE_CONFIG";

const ENV_PREFIX: &str = "ROOTRISE";
const ENV_SEPARATOR: &str = "__";

/// Loads the config files listed in `ROOTRISE_CONFIG`, or the default config
/// file if the variable is not set.
pub fn load_from_env() -> anyhow::Result<Config> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(paths) => load(&paths.split(':').collect::<Vec<_>>()),
        Err(_) => load(&[Path::new(DEFAULT_CONFIG_PATH)]),
    }
}

/// Loads the given config files in order, later files overriding earlier
/// ones, then applies `ROOTRISE__SECTION__KEY` environment variables on top.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_environment(paths, Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
}

fn load_with_environment(
    paths: &[impl AsRef<Path>],
    environment: Environment,
) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(environment.try_parsing(true))
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    pub static_dir: PathBuf,
    #[serde(default)]
    scheduling_url: Option<String>,
}

impl SiteConfig {
    /// Returns the configured scheduling link, treating an empty value as
    /// absent.
    pub fn scheduling_url(&self) -> anyhow::Result<Option<Url>> {
        self.scheduling_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| {
                url.parse()
                    .with_context(|| format!("Invalid scheduling url: {url:?}"))
            })
            .transpose()
    }
}
