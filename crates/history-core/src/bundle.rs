// File: crates/history-core/src/bundle.rs
// Summary: Classify ammunition-like item names and assign per-item bundle multipliers.

use std::collections::HashMap;

use tracing::info;

/// Rounds per priced bundle when an item is classified as ammunition.
pub const DEFAULT_BUNDLE_SIZE: i64 = 60;

const QUALIFIER_WORDS: [&str; 10] = ["acp", "ae", "magnum", "sp", "hp", "fmj", "jhp", "ap", "bt", "rip"];
const SHOTGUN_WORDS: [&str; 3] = ["buckshot", "slug", "flechette"];

/// Ordered, case-insensitive classification; any rule matching classifies.
///
/// 1. caliber token `<n>x<n>` followed by `mm`, `m` or `r` (`9x19mm`, `7.62x39mm`)
/// 2. contains `gauge`
/// 3. starts with `.<digit>` and has a qualifier word (`.45 ACP`)
/// 4. contains `buckshot`, `slug` or `flechette`
pub fn is_bundled(name: &str) -> bool {
    let lowered = name.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();

    if (0..chars.len()).any(|i| caliber_at(&chars, i)) {
        return true;
    }
    if lowered.contains("gauge") {
        return true;
    }
    if starts_with_dot_digit(&chars) && has_qualifier_word(&lowered) {
        return true;
    }
    SHOTGUN_WORDS.iter().any(|w| lowered.contains(w))
}

/// Digits with an optional `.digits` fraction; returns the index after it.
fn number_end(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i == start {
        return None;
    }
    if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }
    Some(i)
}

fn caliber_at(chars: &[char], start: usize) -> bool {
    let Some(i) = number_end(chars, start) else { return false };
    if chars.get(i) != Some(&'x') {
        return false;
    }
    let Some(j) = number_end(chars, i + 1) else { return false };
    // `mm` starts with `m`, so one suffix char decides.
    matches!(chars.get(j), Some('m') | Some('r'))
}

fn starts_with_dot_digit(chars: &[char]) -> bool {
    chars.first() == Some(&'.') && chars.get(1).is_some_and(|c| c.is_ascii_digit())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whole-word match: the qualifier must be an entire run of word characters.
fn has_qualifier_word(lowered: &str) -> bool {
    lowered
        .split(|c: char| !is_word_char(c))
        .any(|word| QUALIFIER_WORDS.contains(&word))
}

/// Multiplier per target item, fixed for the whole run.
#[derive(Clone, Debug, Default)]
pub struct BundleMultipliers {
    by_item: HashMap<String, u64>,
}

impl BundleMultipliers {
    /// Classify every target. `bundle_size` below 1 is floored to 1.
    pub fn classify<S: AsRef<str>>(targets: &[S], bundle_size: i64) -> Self {
        let size = bundle_size.max(1) as u64;
        let mut by_item = HashMap::with_capacity(targets.len());
        for target in targets {
            let name = target.as_ref();
            let multiplier = if is_bundled(name) { size } else { 1 };
            if multiplier > 1 {
                info!(item = name, multiplier, "pricing per bundle");
            }
            by_item.insert(name.to_string(), multiplier);
        }
        Self { by_item }
    }

    /// Multiplier for `item`; unknown items are unscaled.
    pub fn get(&self, item: &str) -> u64 {
        self.by_item.get(item).copied().unwrap_or(1)
    }

    pub fn scale(&self, item: &str, raw_price: u64) -> u64 {
        raw_price.saturating_mul(self.get(item))
    }
}
