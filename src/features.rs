use crate::hostname::extract_hostname;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref IP_REGEX: Regex = Regex::new(
        r"(([01]?\d\d?|2[0-4]\d|25[0-5])\.([01]?\d\d?|2[0-4]\d|25[0-5])\.([01]?\d\d?|2[0-4]\d|25[0-5])\.([01]?\d\d?|2[0-4]\d|25[0-5]))"
    )
    .unwrap();
}

/// Lexical features of a URL, in the shape the downstream statistical
/// classifier was trained on. Counts are taken over the URL with scheme
/// and www prefix stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlFeatures {
    pub url_length: usize,
    pub dot_count: usize,
    pub hyphen_count: usize,
    pub slash_count: usize,
    pub question_count: usize,
    pub equal_count: usize,
    pub at_count: usize,
    pub has_ip: bool,
    pub hostname_length: usize,
    pub digit_count_hostname: usize,
}

impl UrlFeatures {
    pub fn extract(url: &str) -> Self {
        let clean = url
            .replace("https://", "")
            .replace("http://", "")
            .replace("www.", "");

        let hostname = extract_hostname(&clean);

        UrlFeatures {
            url_length: clean.chars().count(),
            dot_count: clean.matches('.').count(),
            hyphen_count: clean.matches('-').count(),
            slash_count: clean.matches('/').count(),
            question_count: clean.matches('?').count(),
            equal_count: clean.matches('=').count(),
            at_count: clean.matches('@').count(),
            has_ip: IP_REGEX.is_match(&clean),
            hostname_length: hostname.chars().count(),
            digit_count_hostname: hostname.chars().filter(|c| c.is_ascii_digit()).count(),
        }
    }
}
