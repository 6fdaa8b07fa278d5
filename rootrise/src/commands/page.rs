use rootrise_client::routes::Route;

use crate::environment::Provider;

pub fn page(provider: &Provider, path: &str) -> anyhow::Result<()> {
    let view = Route::resolve(path).view(provider.site_settings());
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
