use super::*;

#[derive(Serialize)]
pub(super) struct ApiInfoResponse {
    pub name: &'static str,
    pub description: &'static str,
    pub endpoints: Vec<ApiEndpoint>,
    pub author: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub(super) struct ApiEndpoint {
    pub path: &'static str,
    pub description: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct WordOfTheDayResponse {
    pub data: &'static WordRecord,
    pub last_updated: String,
    pub next_update: String,
}

#[derive(Serialize)]
pub(super) struct RandomWordResponse {
    pub data: &'static WordRecord,
    pub timestamp: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CategoryNotFoundResponse {
    pub error: &'static str,
    pub available_categories: Vec<&'static str>,
}
