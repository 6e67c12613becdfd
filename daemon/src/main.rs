mod api;
mod clap;
mod daily;
mod prelude;
mod refresh;

use crate::prelude::*;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Arc::new(Args::parse());
    if let Ok(port) = std::env::var("PORT") {
        if port.parse::<u16>().is_err() {
            warn!("Ignoring unparseable PORT value: {port}");
        }
    }
    assert!(!WORDS.is_empty(), "The word database is empty");

    let daily = Arc::new(DailyWord::new(&mut rand::thread_rng()));
    let (word, _) = daily.snapshot().await;
    info!("Word of the day: {}", word.word);

    let f1 = serve_api(Arc::clone(&args), Arc::clone(&daily));
    let f2 = refresh_task(daily);
    tokio::join!(f1, f2);
}
