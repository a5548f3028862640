//! Verify request building and reply mapping against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Option bags are deserialized straight from the file text, never through
//! `serde_json::Value`, so key order in the vector is the key order on the
//! wire.

use serde::Deserialize;
use serde_json::Value;
use wikia_core::{
    ApiError, Failure, HttpMethod, HttpRequest, HttpResponse, Options, Outcome, TransportError,
    TransportReply, UsageError, WikiaClient,
};

fn build(
    client: &WikiaClient,
    endpoint: &str,
    options: Option<&Options>,
) -> Result<HttpRequest, UsageError> {
    match endpoint {
        "latest_activity" => client.build_latest_activity(options),
        "recently_changed_articles" => client.build_recently_changed_articles(options),
        "recommendations_for_article" => client.build_recommendations_for_article(options),
        "related_pages" => client.build_related_pages(options),
        "user_details" => client.build_user_details(options),
        other => panic!("unknown endpoint: {other}"),
    }
}

fn error_kind(err: &UsageError) -> &'static str {
    match err {
        UsageError::InvalidType { .. } => "InvalidType",
        UsageError::MissingRequired { .. } => "MissingRequired",
        UsageError::OutOfRange { .. } => "OutOfRange",
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct NormalizeVectors {
    base_url: String,
    cases: Vec<NormalizeCase>,
}

#[derive(Deserialize)]
struct NormalizeCase {
    name: String,
    endpoint: String,
    options: Option<Options>,
    expected_url: Option<String>,
    expected_error: Option<ExpectedError>,
}

#[derive(Deserialize)]
struct ExpectedError {
    kind: String,
    option: String,
}

#[test]
fn normalize_test_vectors() {
    let raw = include_str!("../../test-vectors/normalize.json");
    let vectors: NormalizeVectors = serde_json::from_str(raw).unwrap();

    let client = WikiaClient::with_base_url(&vectors.base_url);
    for case in &vectors.cases {
        let name = &case.name;
        let result = build(&client, &case.endpoint, case.options.as_ref());

        match (&case.expected_error, &case.expected_url) {
            (Some(expected), _) => {
                let err = result.unwrap_err();
                assert_eq!(error_kind(&err), expected.kind, "{name}: kind");
                assert_eq!(err.option(), expected.option, "{name}: option");
            }
            (None, Some(path)) => {
                let req = result.unwrap();
                assert_eq!(req.method, HttpMethod::Get, "{name}: method");
                assert_eq!(req.url, format!("{}{path}", vectors.base_url), "{name}: url");
            }
            (None, None) => panic!("{name}: vector has no expectation"),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome mapping
// ---------------------------------------------------------------------------

fn reply_from(sim: &Value) -> TransportReply {
    TransportReply {
        error: sim["error"].as_str().map(TransportError::new),
        response: sim["status"].as_u64().map(|status| HttpResponse {
            status: status as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap_or_default().to_string(),
        }),
    }
}

#[test]
fn outcome_test_vectors() {
    let raw = include_str!("../../test-vectors/outcome.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let client = WikiaClient::new("starwars");
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected"];
        let result = client.parse_reply(reply_from(&case["reply"]));

        match (expected["kind"].as_str().unwrap(), result) {
            ("Success", Ok(Outcome::Success(body))) => {
                assert_eq!(body, expected["body"], "{name}: body");
            }
            ("Payload", Ok(Outcome::Failure(Failure::Payload { status, body }))) => {
                assert_eq!(u64::from(status), expected["status"].as_u64().unwrap(), "{name}: status");
                assert_eq!(body, expected["body"], "{name}: body");
            }
            ("Response", Ok(Outcome::Failure(Failure::Response(raw)))) => {
                assert_eq!(u64::from(raw.status), expected["status"].as_u64().unwrap(), "{name}: status");
            }
            ("Transport", Ok(Outcome::Failure(Failure::Transport(err)))) => {
                assert_eq!(err.message(), case["reply"]["error"].as_str().unwrap(), "{name}: message");
            }
            ("Decode", Err(ApiError::Decode { status, .. })) => {
                assert_eq!(u64::from(status), expected["status"].as_u64().unwrap(), "{name}: status");
            }
            ("Unsettled", Err(ApiError::Unsettled)) => {}
            (kind, other) => panic!("{name}: expected {kind}, got {other:?}"),
        }
    }
}
