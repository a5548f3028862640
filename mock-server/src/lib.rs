use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

pub type Params = Query<Vec<(String, String)>>;

/// A healthy wiki under `/api/v1/`, plus two faulty hosts: `/broken/api/v1/*`
/// answers every call with 500, `/garbled/api/v1/*` answers 200 with HTML.
pub fn app() -> Router {
    Router::new()
        .nest("/api/v1", api())
        .route("/broken/api/v1/{*path}", get(broken))
        .route("/garbled/api/v1/{*path}", get(garbled))
}

fn api() -> Router {
    Router::new()
        .route("/Activity/LatestActivity", get(activity))
        .route("/Activity/RecentlyChangedArticles", get(activity))
        .route("/Navigation/Data", get(navigation))
        .route("/Recommendations/ForArticle", get(recommendations))
        .route("/RelatedPages/List", get(related_pages))
        .route("/SearchSuggestions/List", get(search_suggestions))
        .route("/User/Details", get(user_details))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// The received query, echoed back so callers can see what reached the wire.
fn echo(params: &[(String, String)]) -> Value {
    let map: Map<String, Value> = params
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    Value::Object(map)
}

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

fn ids(params: &[(String, String)]) -> Option<Vec<i64>> {
    param(params, "ids")?
        .split(',')
        .map(|id| id.trim().parse().ok())
        .collect()
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn activity(Query(params): Params) -> Json<Value> {
    Json(json!({
        "items": [{ "article": 1, "user": 7, "revisionId": 100, "timestamp": 1_400_000_000 }],
        "basepath": "http://mock.wikia.com",
        "query": echo(&params),
    }))
}

async fn navigation(Query(params): Params) -> Json<Value> {
    Json(json!({
        "navigation": { "wiki": [{ "text": "Home", "href": "/wiki/Home", "children": [] }] },
        "query": echo(&params),
    }))
}

async fn recommendations(Query(params): Params) -> Response {
    match param(&params, "id") {
        Some("0") => error(StatusCode::NOT_FOUND, "not found"),
        _ => Json(json!({ "items": [], "query": echo(&params) })).into_response(),
    }
}

async fn related_pages(Query(params): Params) -> Response {
    match ids(&params) {
        Some(ids) => {
            let items: Map<String, Value> = ids.iter().map(|id| (id.to_string(), json!([]))).collect();
            Json(json!({ "items": items, "query": echo(&params) })).into_response()
        }
        None => error(StatusCode::BAD_REQUEST, "ids is required"),
    }
}

async fn search_suggestions(Query(params): Params) -> Response {
    match param(&params, "query") {
        None | Some("") => error(StatusCode::BAD_REQUEST, "query is required"),
        Some("nothing") => error(StatusCode::NOT_FOUND, "not found"),
        Some(query) => Json(json!({ "items": [{ "title": query }], "query": echo(&params) })).into_response(),
    }
}

async fn user_details(Query(params): Params) -> Response {
    match ids(&params) {
        Some(ids) => {
            let items: Vec<Value> = ids
                .iter()
                .map(|id| json!({ "user_id": id, "name": format!("User{id}") }))
                .collect();
            Json(json!({ "items": items, "basepath": "http://mock.wikia.com", "query": echo(&params) }))
                .into_response()
        }
        None => error(StatusCode::BAD_REQUEST, "ids is required"),
    }
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
}

async fn garbled() -> (StatusCode, &'static str) {
    (StatusCode::OK, "<html>not json</html>")
}
