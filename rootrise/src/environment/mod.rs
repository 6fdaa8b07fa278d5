use rootrise_api_rest::RestServerConfig;
use rootrise_client::{scheduling::SchedulingCta, SiteSettings};
use rootrise_config::Config;
use rootrise_extern_impl::contact::ContactApiServiceConfig;
use types::{ContactApi, ContactFeature, ContactForm, RestServer};
use url::Url;

pub mod types;

/// Everything derived from the configuration that the commands need.
#[derive(Debug, Clone)]
pub struct Provider {
    rest_server_config: RestServerConfig,
    site_settings: SiteSettings,
}

impl Provider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            static_dir: config.site.static_dir.clone(),
        };

        // Client
        let site_settings = SiteSettings {
            scheduling: SchedulingCta::new(config.site.scheduling_url()?),
        };

        Ok(Self {
            rest_server_config,
            site_settings,
        })
    }

    pub fn rest_server(&self) -> RestServer {
        RestServer::new(ContactFeature::default(), self.rest_server_config.clone())
    }

    pub fn site_settings(&self) -> &SiteSettings {
        &self.site_settings
    }

    /// Contact form talking to the site served at `base_url`.
    pub fn contact_form(&self, base_url: &Url) -> anyhow::Result<ContactForm> {
        let config = ContactApiServiceConfig::new(base_url)?;
        Ok(ContactForm::new(ContactApi::new(config)?))
    }
}
