//! Keyphrase generation.
//!
//! A keyphrase is a coarse grouping label, not a secret: collisions between
//! unrelated shares are acceptable because the passcode carries the actual
//! access control. No uniqueness check is performed.

use rand::Rng;

const WORDS: &[&str] = &[
    "apple", "amber", "birch", "brook", "candle", "cedar", "cloud", "coral",
    "delta", "drift", "ember", "fable", "fern", "flint", "garnet", "grove",
    "harbor", "hazel", "island", "ivory", "juniper", "lantern", "linen",
    "maple", "meadow", "noble", "ocean", "olive", "pebble", "pine", "quartz",
    "raven", "river", "saffron", "shadow", "slate", "spruce", "stone", "sun",
    "thistle", "timber", "tulip", "violet", "walnut", "willow", "winter",
];

const WORD_COUNT: usize = 3;

/// Picks three words independently and uniformly at random, with
/// replacement, joined by hyphens.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    let words: Vec<&str> = (0..WORD_COUNT)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect();
    words.join("-")
}

/// Uses a supplied keyphrase verbatim (after trimming) when it is
/// non-empty; otherwise generates one.
pub fn resolve(supplied: Option<&str>) -> String {
    match supplied.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => generate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_three_list_words() {
        for _ in 0..50 {
            let phrase = generate();
            let parts: Vec<&str> = phrase.split('-').collect();
            assert_eq!(parts.len(), WORD_COUNT);
            for part in parts {
                assert!(WORDS.contains(&part), "unexpected word: {}", part);
            }
        }
    }

    #[test]
    fn test_resolve_uses_supplied_verbatim() {
        assert_eq!(resolve(Some("my-own-phrase")), "my-own-phrase");
        // Trimmed, but otherwise untouched: case is preserved.
        assert_eq!(resolve(Some("  Shared-Link-Demo  ")), "Shared-Link-Demo");
    }

    #[test]
    fn test_resolve_generates_when_absent_or_blank() {
        for supplied in [None, Some(""), Some("   ")] {
            let phrase = resolve(supplied);
            assert_eq!(phrase.split('-').count(), WORD_COUNT);
        }
    }
}
