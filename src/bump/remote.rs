use crate::error::BumpError;
use crate::types::remote::RemoteVersions;
use crate::utils::api::Endpoints;
use crate::utils::spinner::with_spinner;
use crate::utils::version::get_version;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Body of the core version-check endpoint; the first offer is the latest release.
#[derive(Debug, Deserialize)]
struct CoreVersionCheck {
    offers: Vec<CoreOffer>,
}

#[derive(Debug, Deserialize)]
struct CoreOffer {
    version: String,
}

/// Body of the plugin-information endpoint.
#[derive(Debug, Deserialize)]
struct PluginInformation {
    version: String,
}

fn build_client() -> Result<reqwest::Client, BumpError> {
    let client = reqwest::Client::builder()
        .user_agent(format!("wpbump/{}", get_version()))
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(client)
}

async fn get_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, BumpError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(BumpError::InvalidResponse(format!(
            "Unexpected status {} from {}",
            status, url
        )));
    }

    response.json::<T>().await.map_err(|e| {
        BumpError::InvalidResponse(format!("Failed to parse response from {}: {}", url, e))
    })
}

async fn fetch_wordpress_version(
    client: &reqwest::Client,
    url: &str,
) -> Result<String, BumpError> {
    let check: CoreVersionCheck = get_json(client, url).await?;
    check
        .offers
        .into_iter()
        .next()
        .map(|offer| offer.version)
        .ok_or_else(|| BumpError::InvalidResponse(format!("No offers in response from {}", url)))
}

async fn fetch_woocommerce_version(
    client: &reqwest::Client,
    url: &str,
) -> Result<String, BumpError> {
    let info: PluginInformation = get_json(client, url).await?;
    Ok(info.version)
}

/// Queries both endpoints concurrently. Either one failing fails the pair.
pub async fn fetch_remote_versions(endpoints: &Endpoints) -> Result<RemoteVersions, BumpError> {
    let client = build_client()?;

    let (wordpress, woocommerce) = tokio::join!(
        fetch_wordpress_version(&client, &endpoints.wordpress),
        fetch_woocommerce_version(&client, &endpoints.woocommerce)
    );

    Ok(RemoteVersions::from_upstream(&wordpress?, &woocommerce?))
}

/// Fetches the compatibility targets behind a spinner. On any failure both
/// values are asked for through `ask`, and used exactly as entered.
pub async fn resolve_remote_versions<F>(
    endpoints: &Endpoints,
    mut ask: F,
) -> Result<RemoteVersions, BumpError>
where
    F: FnMut(&str) -> Result<String, BumpError>,
{
    let spinner = with_spinner("Fetching latest WordPress and WooCommerce versions...");

    match fetch_remote_versions(endpoints).await {
        Ok(remote) => {
            spinner.succeed(format!(
                "Latest WordPress: {} / WooCommerce: {}",
                remote.wordpress, remote.woocommerce
            ));
            Ok(remote)
        }
        Err(e) => {
            spinner.warn(format!("Could not fetch remote versions ({}), enter them manually", e));
            let wordpress = ask("WordPress version (Tested up to):")?;
            let woocommerce = ask("WooCommerce version (WC tested up to):")?;
            Ok(RemoteVersions {
                wordpress,
                woocommerce,
            })
        }
    }
}

pub fn prompt_manual_version(message: &str) -> Result<String, BumpError> {
    Ok(inquire::Text::new(message).prompt()?)
}
