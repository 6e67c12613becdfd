mod words;
pub use words::WORDS;

use rand::{seq::SliceRandom, Rng};
use serde::Serialize;

/// One entry of the compiled-in word database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    pub word: &'static str,
    pub definition: &'static str,
    pub example: &'static str,
    pub category: &'static str,
}

/// Distinct category values, in order of first appearance in the database.
pub fn categories() -> Vec<&'static str> {
    let mut categories = Vec::new();
    for record in WORDS {
        if !categories.contains(&record.category) {
            categories.push(record.category);
        }
    }
    categories
}

/// Records whose category matches exactly (case-sensitive).
pub fn in_category(category: &str) -> Vec<&'static WordRecord> {
    WORDS.iter().filter(|r| r.category == category).collect()
}

/// Picks one record uniformly. Returns `None` on an empty set.
pub fn pick_random<'a>(records: &[&'a WordRecord], rng: &mut impl Rng) -> Option<&'a WordRecord> {
    records.choose(rng).copied()
}

/// Picks one record uniformly over the whole database.
pub fn pick_any(rng: &mut impl Rng) -> &'static WordRecord {
    WORDS.choose(rng).expect("Word database is empty")
}
