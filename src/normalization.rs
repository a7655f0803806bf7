use unicode_normalization::UnicodeNormalization;

/// ASCII-compatible-encoding marker for IDN labels.
const ACE_PREFIX: &str = "xn--";

/// Decode a single punycode label if it carries the xn-- marker.
/// Malformed punycode is left unchanged so detection degrades instead of
/// aborting.
fn decode_punycode_label(label: &str) -> String {
    if label.is_ascii()
        && label.len() > ACE_PREFIX.len()
        && label[..ACE_PREFIX.len()].eq_ignore_ascii_case(ACE_PREFIX)
    {
        match idna::punycode::decode_to_string(&label[ACE_PREFIX.len()..]) {
            Some(decoded) => return decoded,
            None => {
                log::debug!("ignoring malformed punycode label {label:?}");
            }
        }
    }
    label.to_string()
}

/// Decode punycode per label and apply NFKC normalization to every label,
/// decoded or not. Labels stay dot-joined.
pub fn normalize_hostname(hostname: &str) -> String {
    if hostname.is_empty() {
        return String::new();
    }

    hostname
        .split('.')
        .map(|label| decode_punycode_label(label).nfkc().collect::<String>())
        .collect::<Vec<_>>()
        .join(".")
}
