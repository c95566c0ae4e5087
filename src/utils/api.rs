pub const WORDPRESS_VERSION_CHECK_URL: &str = "https://api.wordpress.org/core/version-check/1.7/";
pub const WOOCOMMERCE_PLUGIN_INFO_URL: &str =
    "https://api.wordpress.org/plugins/info/1.2/?action=plugin_information&request[slug]=woocommerce";

/// The two read-only endpoints queried for compatibility targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub wordpress: String,
    pub woocommerce: String,
}

impl Endpoints {
    pub fn from_env() -> Self {
        Endpoints {
            wordpress: env_or("WPBUMP_WORDPRESS_API_URL", WORDPRESS_VERSION_CHECK_URL),
            woocommerce: env_or("WPBUMP_WOOCOMMERCE_API_URL", WOOCOMMERCE_PLUGIN_INFO_URL),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
