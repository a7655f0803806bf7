/// Presence of the scripts relevant to homograph gating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptPresence {
    pub latin: bool,
    pub cyrillic: bool,
    pub greek: bool,
}

impl ScriptPresence {
    /// Latin mixed with Cyrillic or Greek is the only combination worth
    /// skeleton matching. Pure single-script hostnames, including
    /// legitimate non-Latin IDNs, must never be flagged.
    pub fn is_suspicious_mix(&self) -> bool {
        self.latin && (self.cyrillic || self.greek)
    }
}

pub struct ScriptClassifier;

impl ScriptClassifier {
    /// Detect presence of Latin, Cyrillic, and Greek characters using fixed
    /// Unicode block checks.
    pub fn classify(text: &str) -> ScriptPresence {
        let mut presence = ScriptPresence::default();

        for c in text.chars() {
            presence.latin |= matches!(c,
                '\u{0041}'..='\u{007A}' |  // Basic Latin letters
                '\u{00C0}'..='\u{024F}'    // Latin-1 Supplement + Extended-A/B
            );
            presence.cyrillic |= matches!(c,
                '\u{0400}'..='\u{04FF}' |  // Cyrillic
                '\u{0500}'..='\u{052F}' |  // Cyrillic Supplement
                '\u{2DE0}'..='\u{2DFF}'    // Cyrillic Extended-A
            );
            presence.greek |= matches!(c,
                '\u{0370}'..='\u{03FF}' |  // Greek and Coptic
                '\u{1F00}'..='\u{1FFF}'    // Greek Extended
            );
        }

        presence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_latin() {
        let p = ScriptClassifier::classify("paypalcom");
        assert!(p.latin && !p.cyrillic && !p.greek);
        assert!(!p.is_suspicious_mix());
    }

    #[test]
    fn test_accented_latin_is_still_latin() {
        let p = ScriptClassifier::classify("görgle");
        assert!(p.latin && !p.cyrillic && !p.greek);
        assert!(!p.is_suspicious_mix());
    }

    #[test]
    fn test_latin_cyrillic_mix() {
        // Cyrillic о inside a Latin name
        let p = ScriptClassifier::classify("g\u{43e}\u{43e}gle");
        assert!(p.latin && p.cyrillic);
        assert!(p.is_suspicious_mix());
    }

    #[test]
    fn test_latin_greek_mix() {
        // Greek alpha inside a Latin name
        let p = ScriptClassifier::classify("p\u{3b1}yp\u{3b1}l");
        assert!(p.latin && p.greek);
        assert!(p.is_suspicious_mix());
    }

    #[test]
    fn test_pure_cyrillic_not_suspicious() {
        let p = ScriptClassifier::classify("почта");
        assert!(!p.latin && p.cyrillic);
        assert!(!p.is_suspicious_mix());
    }

    #[test]
    fn test_non_targeted_scripts_ignored() {
        let p = ScriptClassifier::classify("東京");
        assert_eq!(p, ScriptPresence::default());
    }
}
