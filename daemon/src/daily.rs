use crate::prelude::*;
use rand::Rng;

struct Inner {
    current: &'static WordRecord,
    last_updated: DateTime<Utc>,
}

/// The word of the day, shared between the API and the refresh task.
///
/// Both fields are swapped under a single write lock so that readers never
/// observe a word paired with a stale timestamp.
pub struct DailyWord {
    inner: RwLock<Inner>,
}

impl DailyWord {
    pub fn new(rng: &mut impl Rng) -> DailyWord {
        DailyWord {
            inner: RwLock::new(Inner {
                current: pick_any(rng),
                last_updated: Utc::now(),
            }),
        }
    }

    /// Replaces the current word with a fresh pick over the whole database.
    /// The daily word is always drawn from all categories.
    pub async fn refresh(&self, rng: &mut impl Rng) -> &'static WordRecord {
        let word = pick_any(rng);
        let mut inner = self.inner.write().await;
        inner.current = word;
        inner.last_updated = Utc::now();
        word
    }

    pub async fn snapshot(&self) -> (&'static WordRecord, DateTime<Utc>) {
        let inner = self.inner.read().await;
        (inner.current, inner.last_updated)
    }
}

/// First local midnight strictly after `after`.
pub fn next_midnight(after: DateTime<Local>) -> DateTime<Local> {
    let date = after.date_naive() + Days::new(1);
    let midnight = date.and_hms_opt(0, 0, 0).expect("Invalid time of day");
    match midnight.and_local_timezone(Local) {
        LocalResult::Single(boundary) => boundary,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // A DST transition can skip midnight entirely
        LocalResult::None => Local.from_utc_datetime(&midnight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn next_midnight_rolls_to_the_next_day() {
        let afternoon = Local.with_ymd_and_hms(2024, 6, 15, 13, 45, 12).unwrap();
        let boundary = next_midnight(afternoon);
        assert_eq!(boundary, Local.with_ymd_and_hms(2024, 6, 16, 0, 0, 0).unwrap());
        assert!(boundary > afternoon);
    }

    #[test]
    fn next_midnight_is_strictly_after_midnight_itself() {
        let midnight = Local.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        assert_eq!(next_midnight(midnight), Local.with_ymd_and_hms(2024, 6, 16, 0, 0, 0).unwrap());
    }

    #[test]
    fn next_midnight_crosses_year_boundaries() {
        let new_years_eve = Local.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(next_midnight(new_years_eve), Local.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn refresh_advances_the_timestamp() {
        let mut rng = StdRng::seed_from_u64(42);
        let daily = DailyWord::new(&mut rng);
        let (word1, updated1) = daily.snapshot().await;
        assert!(WORDS.iter().any(|r| r == word1));

        sleep(Duration::from_millis(5)).await;
        let word2 = daily.refresh(&mut rng).await;
        let (word3, updated2) = daily.snapshot().await;
        assert_eq!(word2, word3);
        assert!(WORDS.iter().any(|r| r == word2));
        assert!(updated2 > updated1);
    }

    #[tokio::test]
    async fn snapshot_is_stable_between_refreshes() {
        let mut rng = StdRng::seed_from_u64(7);
        let daily = DailyWord::new(&mut rng);
        let first = daily.snapshot().await;
        for _ in 0..10 {
            assert_eq!(daily.snapshot().await, first);
        }
    }
}
