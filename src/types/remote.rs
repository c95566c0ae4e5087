/// Compatibility targets written to the "Tested up to" headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteVersions {
    pub wordpress: String,
    pub woocommerce: String,
}

impl RemoteVersions {
    /// Builds the pair from upstream values. WordPress is cut down to `major.minor`,
    /// WooCommerce is kept as published.
    pub fn from_upstream(wordpress: &str, woocommerce: &str) -> Self {
        RemoteVersions {
            wordpress: truncate_to_minor(wordpress),
            woocommerce: woocommerce.trim().to_string(),
        }
    }
}

pub fn truncate_to_minor(version: &str) -> String {
    version
        .trim()
        .split('.')
        .take(2)
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("6.5.3", "6.5")]
    #[case("6.5", "6.5")]
    #[case("7", "7")]
    #[case("6.4.10.1", "6.4")]
    fn truncates_wordpress_version(#[case] upstream: &str, #[case] expected: &str) {
        assert_eq!(truncate_to_minor(upstream), expected);
    }

    #[test]
    fn keeps_woocommerce_version_whole() {
        let remote = RemoteVersions::from_upstream("6.5.3", "9.0.2");
        assert_eq!(remote.wordpress, "6.5");
        assert_eq!(remote.woocommerce, "9.0.2");
    }
}
