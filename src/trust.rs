use crate::hostname::extract_hostname;

/// High-traffic domains the caller may short-circuit past the statistical
/// classifier. The homograph verdict always takes precedence over this
/// list: a flagged URL stays flagged even if its skeleton looks trusted.
#[derive(Debug, Clone)]
pub struct TrustedDomains {
    domains: Vec<String>,
}

impl TrustedDomains {
    pub fn new(domains: Vec<String>) -> Self {
        Self { domains }
    }

    /// True if the URL's hostname, with any www prefix removed, is a
    /// trusted domain or a dot-subdomain of one.
    pub fn is_trusted(&self, url: &str) -> bool {
        let hostname = extract_hostname(url).to_lowercase();
        if hostname.is_empty() {
            return false;
        }
        let hostname = hostname.strip_prefix("www.").unwrap_or(&hostname);

        self.domains.iter().any(|domain| {
            hostname == domain.as_str() || hostname.ends_with(&format!(".{domain}"))
        })
    }
}

impl Default for TrustedDomains {
    fn default() -> Self {
        let domains = [
            "google.com",
            "github.com",
            "stackoverflow.com",
            "microsoft.com",
            "apple.com",
            "amazon.com",
            "youtube.com",
            "linkedin.com",
            "twitter.com",
            "x.com",
            "facebook.com",
            "instagram.com",
            "wikipedia.org",
        ];

        Self::new(domains.iter().map(|d| d.to_string()).collect())
    }
}
