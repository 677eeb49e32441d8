//! Router tests, driving the service in process.

use crate::{ENDPOINT, SEED, build_schema, router};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{
        Method, Request, StatusCode,
        header::{ALLOW, CONTENT_TYPE},
    },
    response::Response,
};
use serde_json::{Value, json};
use tower::ServiceExt as _;

/// The router over the seed catalog.
fn app() -> Router {
    router(build_schema(&SEED))
}

/// A JSON `POST` to the endpoint.
fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(ENDPOINT)
        .header(CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("Failed to build request")
}

/// Read a response body as text.
async fn text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

/// Read a response body as JSON.
async fn json_body(response: Response) -> Value {
    serde_json::from_str(&text(response).await).expect("Body is not JSON")
}

/// # Panics
/// Panics if the explorer is not served.
#[tokio::test]
async fn get_serves_explorer() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri(ENDPOINT)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/html"), "{content_type}");

    let page = text(response).await;
    assert!(!page.is_empty());
    assert!(page.contains(ENDPOINT));
}

/// # Panics
/// Panics if the query does not return the expected authors.
#[tokio::test]
async fn post_executes_query() {
    let body = json!({
        "query": r#"{ authorsByLastname(lastname: "Brown") { id fullname books { title } } }"#,
    });
    let response = app()
        .oneshot(post_json(body.to_string()))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body.get("errors").is_none(), "{body}");

    let authors = body["data"]["authorsByLastname"]
        .as_array()
        .expect("Expected a list of authors");
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0]["fullname"], "Dan Brown");
    assert_eq!(authors[1]["fullname"], "Marc Brown");
    assert_eq!(authors[1]["books"].as_array().map(Vec::len), Some(6));
}

/// # Panics
/// Panics if variables are not applied.
#[tokio::test]
async fn post_with_variables() {
    let body = json!({
        "query": "query Book($id: Int!) { booksByID(id: $id) { title author { lastname } } }",
        "operationName": "Book",
        "variables": { "id": 14 },
    });
    let response = app()
        .oneshot(post_json(body.to_string()))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await["data"],
        json!({ "booksByID": { "title": "The Hobbit", "author": { "lastname": "Tolkein" } } })
    );
}

/// # Panics
/// Panics if a batch is not answered with one result per operation.
#[tokio::test]
async fn post_batch() {
    let body = json!([
        { "query": "{ booksByID(id: 8) { title } }" },
        { "query": "{ booksByID(id: 0) { title } }" },
    ]);
    let response = app()
        .oneshot(post_json(body.to_string()))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!([
            { "data": { "booksByID": { "title": "Jurassic Park" } } },
            { "data": { "booksByID": null } },
        ])
    );
}

/// # Panics
/// Panics if a garbled body is not answered with a GraphQL error.
#[tokio::test]
async fn post_garbled_body() {
    for body in ["", "{ books { id } }", "{\"query\": "] {
        let response = app()
            .oneshot(post_json(body))
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body:?}");
        let body = json_body(response).await;
        let errors = body["errors"].as_array().expect("Expected errors");
        assert!(!errors.is_empty());
        assert!(errors[0]["message"].is_string());
    }
}

/// # Panics
/// Panics if an invalid document does not produce a GraphQL error.
#[tokio::test]
async fn post_invalid_document() {
    for query in ["", "{ books {", "{ publishers { id } }"] {
        let response = app()
            .oneshot(post_json(json!({ "query": query }).to_string()))
            .await
            .expect("Failed to execute request");

        let body = json_body(response).await;
        let errors = body["errors"].as_array().expect("Expected errors");
        assert!(!errors.is_empty(), "{query:?}");
    }
}

/// # Panics
/// Panics if other methods are not rejected explicitly.
#[tokio::test]
async fn other_methods_not_allowed() {
    for method in [Method::PUT, Method::DELETE, Method::PATCH] {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(method.clone())
                    .uri(ENDPOINT)
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(
            response.headers().get(ALLOW).and_then(|v| v.to_str().ok()),
            Some("GET, POST")
        );
        assert!(text(response).await.contains(method.as_str()));
    }
}

/// # Panics
/// Panics if unknown paths are served.
#[tokio::test]
async fn unknown_path() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/Other")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
