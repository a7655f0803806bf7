use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    static ref SCHEME_REGEX: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://").unwrap();
}

/// Extract the hostname from a URL. Bare hostnames work too: a default
/// scheme is prepended so structural parsing succeeds.
///
/// Any parse failure yields an empty string, never an error. Note that the
/// url crate serializes non-ASCII hosts in their punycode (xn--) form;
/// normalization recovers the Unicode labels downstream.
pub fn extract_hostname(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    let to_parse = if SCHEME_REGEX.is_match(raw) {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };

    match Url::parse(&to_parse) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or("");
            // Strip potential trailing dot
            host.strip_suffix('.').unwrap_or(host).to_string()
        }
        Err(e) => {
            log::debug!("hostname extraction failed for {raw:?}: {e}");
            String::new()
        }
    }
}
