//! Key occupancy per timestamp, and the collision renaming rule.
//!
//! A key collides when a point already sits at the same timestamp under
//! it. The rewrite rule: `base[n]` becomes `base[n+1]`, anything else gets
//! `[1]` appended. Applied iteratively until a free key is found. `n` is a
//! decimal digit run of any length; past `u64` it is incremented as text.
//!
//! Per (stem, timestamp) a cursor records the lowest suffix that may still
//! be free: every canonical `stem[j]` with `1 <= j < cursor` is known to be
//! taken. Rewrites jump straight to `max(n + 1, cursor)`, so a long run of
//! identical names costs one lookup per point instead of a rescan.

use chrono::{DateTime, Utc};

use benchgraph_core::types::{FxHashMap, FxHashSet};

/// Split `base[n]` into `("base", Some("n"))`. Anything else is its own stem.
/// The digit run may be longer than any integer type holds.
pub fn split_suffix(key: &str) -> (&str, Option<&str>) {
    let parsed = key.strip_suffix(']').and_then(|rest| {
        let (stem, digits) = rest.rsplit_once('[')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some((stem, digits))
    });
    match parsed {
        Some((stem, digits)) => (stem, Some(digits)),
        None => (key, None),
    }
}

/// Add one to a decimal digit string, dropping leading zeros.
fn increment_digits(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let mut out: Vec<u8> = trimmed.bytes().collect();
    for b in out.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&out).into_owned();
        }
    }
    out.insert(0, b'1');
    String::from_utf8_lossy(&out).into_owned()
}

/// Result of claiming a key at a timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub key: String,
    pub renamed: bool,
}

/// Which keys are taken at which timestamps within one assembly pass.
#[derive(Debug, Default)]
pub struct Occupancy {
    taken: FxHashMap<DateTime<Utc>, FxHashSet<String>>,
    cursors: FxHashMap<DateTime<Utc>, FxHashMap<String, u64>>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `key` already holds a point at `at`.
    pub fn is_taken(&self, key: &str, at: DateTime<Utc>) -> bool {
        self.taken.get(&at).is_some_and(|keys| keys.contains(key))
    }

    /// Find the key `name` resolves to at `at` and mark it taken.
    /// The first claimant keeps the bare name.
    pub fn claim(&mut self, name: &str, at: DateTime<Utc>) -> Claim {
        let mut key = name.to_string();
        let mut renamed = false;

        while self.is_taken(&key, at) {
            self.note_taken(&key, at);
            let (stem, suffix) = split_suffix(&key);
            let cursor = self.cursor(stem, at);
            let next = match suffix.map(|d| (d, d.parse::<u64>())) {
                None => cursor.to_string(),
                Some((_, Ok(n))) if n < u64::MAX => (n + 1).max(cursor).to_string(),
                // past u64: every step still strictly grows the suffix
                Some((digits, _)) => increment_digits(digits),
            };
            key = format!("{stem}[{next}]");
            renamed = true;
        }

        self.note_taken(&key, at);
        self.taken.entry(at).or_default().insert(key.clone());
        Claim { key, renamed }
    }

    fn cursor(&self, stem: &str, at: DateTime<Utc>) -> u64 {
        self.cursors
            .get(&at)
            .and_then(|stems| stems.get(stem))
            .copied()
            .unwrap_or(1)
    }

    /// Advance the cursor when `key` is exactly the canonical `stem[cursor]`.
    fn note_taken(&mut self, key: &str, at: DateTime<Utc>) {
        let (stem, Some(digits)) = split_suffix(key) else {
            return;
        };
        let Ok(n) = digits.parse::<u64>() else {
            return;
        };
        if digits.len() != n.to_string().len() {
            // `stem[007]` and friends are not the canonical `stem[7]`
            return;
        }
        let cursor = self
            .cursors
            .entry(at)
            .or_default()
            .entry(stem.to_string())
            .or_insert(1);
        if *cursor == n {
            *cursor = n.saturating_add(1);
        }
    }
}
