use super::*;

pub(super) async fn api_info() -> Result<impl warp::Reply, Infallible> {
    let info = ApiInfoResponse {
        name: "Daily Word API",
        description: "A free API that provides useful words daily",
        endpoints: vec![
            ApiEndpoint { path: "/word", description: "Get the current word of the day" },
            ApiEndpoint { path: "/word/random", description: "Get a random word from the database" },
            ApiEndpoint { path: "/word/category/:category", description: "Get a random word from a specific category" },
        ],
        author: env!("CARGO_PKG_AUTHORS"),
        version: env!("CARGO_PKG_VERSION"),
    };
    Ok(Response::builder()
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&info).unwrap())
        .unwrap())
}

pub(super) async fn word_of_the_day(daily: Arc<DailyWord>) -> Result<impl warp::Reply, Infallible> {
    let (record, last_updated) = daily.snapshot().await;
    let resp = WordOfTheDayResponse {
        data: record,
        last_updated: iso8601(last_updated),
        next_update: iso8601(next_midnight(Local::now()).with_timezone(&Utc)),
    };
    Ok(Response::builder()
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&resp).unwrap())
        .unwrap())
}

pub(super) async fn random_word() -> Result<impl warp::Reply, Infallible> {
    let record = pick_any(&mut rand::thread_rng());
    let resp = RandomWordResponse {
        data: record,
        timestamp: iso8601(Utc::now()),
    };
    Ok(Response::builder()
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&resp).unwrap())
        .unwrap())
}

pub(super) async fn category_word(category: String) -> Result<impl warp::Reply, Infallible> {
    let matching = in_category(&category);
    let Some(record) = pick_random(&matching, &mut rand::thread_rng()) else {
        let resp = CategoryNotFoundResponse {
            error: "Category not found",
            available_categories: categories(),
        };
        return Ok(Response::builder()
            .status(404)
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(&resp).unwrap())
            .unwrap());
    };
    let resp = RandomWordResponse {
        data: record,
        timestamp: iso8601(Utc::now()),
    };
    Ok(Response::builder()
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&resp).unwrap())
        .unwrap())
}
