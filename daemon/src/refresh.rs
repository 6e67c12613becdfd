use crate::prelude::*;

/// Replaces the word of the day at every local midnight.
pub async fn refresh_task(daily: Arc<DailyWord>) {
    loop {
        let now = Local::now();
        let boundary = next_midnight(now);
        let wait = (boundary - now).to_std().unwrap_or(Duration::ZERO);
        debug!("Next word refresh scheduled at {boundary}");
        sleep(wait).await;

        let word = daily.refresh(&mut rand::thread_rng()).await;
        info!("Word of the day updated: {}", word.word);
    }
}
