use crate::prelude::*;
use warp::{Filter, http::Response};

mod bodies;
mod endpoints;
use {
    bodies::*,
    endpoints::*,
};

fn iso8601(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn routes(daily: Arc<DailyWord>) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let api_info = warp::get()
        .and(warp::path::end())
        .and_then(api_info);

    let word = warp::get()
        .and(warp::path!("word"))
        .map(move || Arc::clone(&daily))
        .and_then(word_of_the_day);

    let random = warp::get()
        .and(warp::path!("word" / "random"))
        .and_then(random_word);

    let category = warp::get()
        .and(warp::path!("word" / "category" / String))
        .and_then(category_word);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET"]);

    warp::any().and(
        api_info
            .or(word)
            .or(random)
            .or(category)
    ).with(cors)
}

pub async fn serve_api(args: Arc<Args>, daily: Arc<DailyWord>) {
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port()));
    info!("Daily Word API listening on {addr}");
    warp::serve(routes(daily)).run(addr).await;
}
