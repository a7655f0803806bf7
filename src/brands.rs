use anyhow::Context;
use serde::{Deserialize, Serialize};

/// One protected brand and the domains it legitimately operates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub domains: Vec<String>,
}

impl Brand {
    /// True if the hostname is one of this brand's official domains or a
    /// dot-subdomain of one. The hostname must already be lower-cased.
    pub fn is_official_domain(&self, hostname: &str) -> bool {
        self.domains.iter().any(|domain| {
            let domain = domain.to_lowercase();
            hostname == domain || hostname.ends_with(&format!(".{domain}"))
        })
    }
}

/// Reference list of brands to recognize in skeleton matches. This is not
/// an allowlist: it only names the targets worth protecting. Iteration
/// order is insertion order, so first-match-wins is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandRegistry {
    pub brands: Vec<Brand>,
}

impl BrandRegistry {
    /// Load a registry from a YAML file.
    pub fn load_from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read brand registry {path}"))?;
        let registry: BrandRegistry = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse brand registry {path}"))?;
        Ok(registry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brand> {
        self.brands.iter()
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }
}

impl Default for BrandRegistry {
    fn default() -> Self {
        let entries = [
            ("paypal", "paypal.com"),
            ("google", "google.com"),
            ("microsoft", "microsoft.com"),
            ("apple", "apple.com"),
            ("amazon", "amazon.com"),
            ("leetcode", "leetcode.com"),
        ];

        BrandRegistry {
            brands: entries
                .iter()
                .map(|(name, domain)| Brand {
                    name: name.to_string(),
                    domains: vec![domain.to_string()],
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contents() {
        let registry = BrandRegistry::default();
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.iter().next().map(|b| b.name.as_str()), Some("paypal"));
    }

    #[test]
    fn test_official_domain_exact_and_subdomain() {
        let brand = Brand {
            name: "paypal".to_string(),
            domains: vec!["paypal.com".to_string()],
        };

        assert!(brand.is_official_domain("paypal.com"));
        assert!(brand.is_official_domain("accounts.paypal.com"));
        assert!(!brand.is_official_domain("paypal.com.evil.net"));
        assert!(!brand.is_official_domain("notpaypal.com"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = "
brands:
  - name: paypal
    domains: [paypal.com, paypal.me]
  - name: google
    domains: [google.com]
";
        let registry: BrandRegistry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.brands[0].is_official_domain("www.paypal.me"));
    }
}
