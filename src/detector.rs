use crate::brands::BrandRegistry;
use crate::hostname::extract_hostname;
use crate::normalization::normalize_hostname;
use crate::script::ScriptClassifier;
use crate::skeleton::{hostname_skeleton, label_skeleton};
use serde::Serialize;

/// Verdict for one URL. `matched_brand` is set only when `is_attack` is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionResult {
    pub is_attack: bool,
    pub matched_brand: Option<String>,
}

impl DetectionResult {
    pub fn no_detection() -> Self {
        Self {
            is_attack: false,
            matched_brand: None,
        }
    }

    pub fn attack(brand: &str) -> Self {
        Self {
            is_attack: true,
            matched_brand: Some(brand.to_string()),
        }
    }
}

/// Diagnostic view of the normalization pipeline for one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostnameAnalysis {
    pub original: String,
    pub normalized: String,
    pub skeleton: String,
}

/// Deterministic homograph detector. Pure and synchronous: every call is
/// independent, so one instance can be shared across threads freely.
pub struct HomographDetector {
    registry: BrandRegistry,
}

impl HomographDetector {
    pub fn new(registry: BrandRegistry) -> Self {
        Self { registry }
    }

    /// Decide whether `url` hosts a homograph impersonation of a registered
    /// brand. Never fails: malformed URLs, bad punycode, and anything else
    /// unexpected all degrade to "no detection" so the caller's pipeline
    /// keeps going.
    pub fn detect(&self, url: &str) -> DetectionResult {
        let hostname = extract_hostname(url);
        if hostname.is_empty() {
            return DetectionResult::no_detection();
        }

        let normalized = normalize_hostname(&hostname);
        if normalized.is_empty() {
            return DetectionResult::no_detection();
        }

        // Only Latin mixed with Cyrillic or Greek proceeds to matching
        let scripts = ScriptClassifier::classify(&normalized.replace('.', ""));
        if !scripts.is_suspicious_mix() {
            log::debug!("script gate not met for {normalized:?}, skipping");
            return DetectionResult::no_detection();
        }

        let normalized_lower = normalized.to_lowercase();
        for label in normalized.split('.') {
            let skeleton = label_skeleton(label);
            for brand in self.registry.iter() {
                if skeleton == brand.name {
                    if brand.is_official_domain(&normalized_lower) {
                        // Legitimate visit to the real brand
                        return DetectionResult::no_detection();
                    }
                    log::info!(
                        "homograph attack: {} has label {:?} matching brand {}",
                        normalized,
                        label,
                        brand.name
                    );
                    return DetectionResult::attack(&brand.name);
                }
            }
        }

        DetectionResult::no_detection()
    }

    /// Report the extraction/normalization/skeleton stages for `url`
    /// without a verdict. The skeleton here is dot-joined across labels,
    /// for reporting only; matching always works per label.
    pub fn analyze(&self, url: &str) -> HostnameAnalysis {
        let original = extract_hostname(url);
        let normalized = normalize_hostname(&original);
        let skeleton = if normalized.is_empty() {
            String::new()
        } else {
            hostname_skeleton(&normalized)
        };

        HostnameAnalysis {
            original,
            normalized,
            skeleton,
        }
    }
}

impl Default for HomographDetector {
    fn default() -> Self {
        Self::new(BrandRegistry::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyrillic_google_flagged() {
        let detector = HomographDetector::default();
        let result = detector.detect("https://g\u{43e}\u{43e}gle.com");
        assert!(result.is_attack);
        assert_eq!(result.matched_brand.as_deref(), Some("google"));
    }

    #[test]
    fn test_official_domain_never_flagged() {
        let detector = HomographDetector::default();
        assert_eq!(
            detector.detect("https://paypal.com"),
            DetectionResult::no_detection()
        );
        assert_eq!(
            detector.detect("https://accounts.paypal.com"),
            DetectionResult::no_detection()
        );
    }

    #[test]
    fn test_ascii_only_never_flagged() {
        let detector = HomographDetector::default();
        // Brand substrings don't matter without the script mix
        assert_eq!(
            detector.detect("https://paypal-secure-login.example"),
            DetectionResult::no_detection()
        );
    }

    #[test]
    fn test_accented_latin_fails_gate() {
        let detector = HomographDetector::default();
        assert_eq!(
            detector.detect("https://görgle.example"),
            DetectionResult::no_detection()
        );
    }

    #[test]
    fn test_malformed_input_is_no_detection() {
        let detector = HomographDetector::default();
        assert_eq!(detector.detect(""), DetectionResult::no_detection());
        assert_eq!(
            detector.detect("http://xn--invalid!!/"),
            DetectionResult::no_detection()
        );
    }

    #[test]
    fn test_lookalike_label_under_official_domain_is_exempt() {
        // A confusable label inside the brand's own domain tree is still a
        // visit to the real brand.
        let detector = HomographDetector::default();
        let result = detector.detect("https://g\u{43e}\u{43e}gle.google.com");
        assert_eq!(result, DetectionResult::no_detection());
    }

    #[test]
    fn test_near_miss_skeleton_not_matched() {
        // Exact equality only: "googl" and "googlee" stay quiet.
        let detector = HomographDetector::default();
        assert!(!detector.detect("https://g\u{43e}\u{43e}gl.com").is_attack);
        assert!(!detector.detect("https://g\u{43e}\u{43e}glee.com").is_attack);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let detector = HomographDetector::default();
        let url = "https://g\u{43e}\u{43e}gle.com";
        let first = detector.analyze(url);
        let second = detector.analyze(url);
        assert_eq!(first, second);
        assert_eq!(first.skeleton, "google.com");
    }

    #[test]
    fn test_skeleton_match_without_script_mix_stays_quiet() {
        // Full-width ASCII skeletonizes to a brand name, but NFKC already
        // folds it to plain Latin, so the gate rejects it.
        let detector = HomographDetector::default();
        let result =
            detector.detect("https://\u{ff47}\u{ff4f}\u{ff4f}\u{ff47}\u{ff4c}\u{ff45}.evil.net");
        assert!(!result.is_attack);
    }
}
