//! The HTTP entry point: query execution on POST, the GraphiQL explorer on GET.

use crate::{
    catalog::SEED,
    config::Config,
    errors::ServeError,
    schema::{BookListSchema, build_schema},
};
use async_graphql::{Response as GraphQLResult, ServerError, http::GraphiQLSource};
use async_graphql_axum::{GraphQLBatchRequest, GraphQLResponse, rejection::GraphQLRejection};
use axum::{
    Router,
    extract::State,
    http::{Method, StatusCode, header::ALLOW},
    response::{Html, IntoResponse, Response},
    routing::post,
    serve,
};
use std::future::pending;
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// The path both queries and the explorer are served on.
pub const ENDPOINT: &str = "/api/BookListGQL";

/// Build the router serving `schema` on [`ENDPOINT`].
///
/// - `POST` executes a GraphQL request, or a batch of them.
/// - `GET` returns the GraphiQL explorer, wired to send queries back to [`ENDPOINT`].
/// - Any other method is answered with `405 Method Not Allowed`.
#[inline]
pub fn router(schema: BookListSchema) -> Router {
    Router::new()
        .route(
            ENDPOINT,
            post(execute).get(explorer).fallback(unsupported_method),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

/// Serve the seed catalog until interrupted.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
#[inline]
pub async fn run(config: Config) -> Result<(), ServeError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    let app = router(build_schema(&SEED));
    info!(%addr, endpoint = ENDPOINT, "Serving book list");

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| ServeError::Serve { addr, source })
}

/// The query handler.
///
/// A body that cannot be read as a GraphQL request still gets a GraphQL-shaped answer, with the
/// reason in `errors` and status `400 Bad Request`.
async fn execute(
    State(schema): State<BookListSchema>,
    request: Result<GraphQLBatchRequest, GraphQLRejection>,
) -> Response {
    match request {
        Ok(request) => GraphQLResponse::from(schema.execute_batch(request.into_inner()).await)
            .into_response(),
        Err(GraphQLRejection(err)) => {
            warn!(error = %err, "Rejected malformed GraphQL request");
            let result = GraphQLResult::from_errors(vec![ServerError::new(err.to_string(), None)]);
            (StatusCode::BAD_REQUEST, GraphQLResponse::from(result)).into_response()
        },
    }
}

/// The explorer handler.
async fn explorer() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}

/// Fallback for methods other than `GET` and `POST`.
async fn unsupported_method(method: Method) -> impl IntoResponse {
    warn!(%method, "Unsupported method");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(ALLOW, "GET, POST")],
        format!("{method} is not supported. POST a query, or GET the explorer."),
    )
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    match ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        // Without a signal handler the server just runs until killed.
        Err(err) => {
            error!(error = %err, "Failed to listen for shutdown signal");
            pending::<()>().await;
        },
    }
}
