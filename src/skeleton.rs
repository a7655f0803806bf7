use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Confusable mappings toward Latin. Kept deliberately small: every
    /// entry is individually vetted against false-positive risk, which
    /// rules out generating it from the full Unicode confusables data.
    static ref CONFUSABLE_MAP: HashMap<char, char> = {
        let mut m = HashMap::new();

        // Cyrillic -> Latin
        m.insert('а', 'a');
        m.insert('А', 'a');
        m.insert('е', 'e');
        m.insert('Е', 'e');
        m.insert('о', 'o');
        m.insert('О', 'o');
        m.insert('р', 'p');
        m.insert('Р', 'p');
        m.insert('с', 'c');
        m.insert('С', 'c');
        m.insert('х', 'x');
        m.insert('Х', 'x');
        m.insert('у', 'y');
        m.insert('У', 'y');
        m.insert('к', 'k');
        m.insert('К', 'k');
        m.insert('м', 'm');
        m.insert('М', 'm');
        m.insert('т', 't');
        m.insert('Т', 't');
        // Cyrillic 'н' -> 'h' omitted: too many legitimate hits.

        // Greek -> Latin
        m.insert('α', 'a');
        m.insert('Α', 'a');
        m.insert('β', 'b');
        m.insert('Β', 'b');
        m.insert('ο', 'o');
        m.insert('Ο', 'o');
        m.insert('ρ', 'p');
        m.insert('Ρ', 'p');
        m.insert('ι', 'i');
        m.insert('Ι', 'i');
        m.insert('τ', 't');
        m.insert('Τ', 't');
        m.insert('ν', 'v');
        m.insert('Ν', 'v');
        m.insert('σ', 's');
        m.insert('Σ', 's');

        m
    };
}

/// Map full-width ASCII (FF01-FF5E) down to ordinary ASCII by fixed offset.
fn map_fullwidth(c: char) -> char {
    let code = c as u32;
    if (0xFF01..=0xFF5E).contains(&code) {
        char::from_u32(code - 0xFEE0).unwrap_or(c)
    } else {
        c
    }
}

/// Map one character to its visual-skeleton equivalent.
fn char_skeleton(c: char) -> char {
    let c = map_fullwidth(c);

    if let Some(&mapped) = CONFUSABLE_MAP.get(&c) {
        return mapped;
    }

    // Basic Latin letters and digits pass through, lower-cased
    if c.is_ascii_alphanumeric() {
        return c.to_ascii_lowercase();
    }

    // Everything else is left alone rather than aggressively mapped
    c
}

/// Visual skeleton of a single domain label.
pub fn label_skeleton(label: &str) -> String {
    label.chars().map(char_skeleton).collect()
}

/// Dot-joined skeleton of every label in a hostname. Used for reporting;
/// matching works per label.
pub fn hostname_skeleton(hostname: &str) -> String {
    hostname
        .split('.')
        .map(label_skeleton)
        .collect::<Vec<_>>()
        .join(".")
}
