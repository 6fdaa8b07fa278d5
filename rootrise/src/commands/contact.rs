use clap::Args;
use rootrise_client::contact_form::FormStatus;
use url::Url;

use crate::environment::Provider;

#[derive(Debug, Args)]
pub struct ContactCommand {
    /// URL the website is served at
    #[arg(long, default_value = "http://localhost:3000")]
    base_url: Url,
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    message: String,
}

impl ContactCommand {
    pub async fn invoke(self, provider: &Provider) -> anyhow::Result<()> {
        let mut form = provider.contact_form(&self.base_url)?;
        form.set_name(self.name);
        form.set_email(self.email);
        form.set_message(self.message);

        form.submit().await;

        match form.status() {
            FormStatus::Success => {
                println!("{}", rootrise_client::contact_form::THANK_YOU_MESSAGE);
                Ok(())
            }
            FormStatus::Error(error) => anyhow::bail!("{error}"),
            status => anyhow::bail!("Unexpected form status after submit: {status:?}"),
        }
    }
}
