use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use thiserror::Error;

use super::{GraphQLRequest, GraphQLResponse};

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint answered {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("query returned errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("response carried no data")]
    MissingData,
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Runs a GraphQL document and hands back the `data` member of the response.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, request: &GraphQLRequest) -> Result<serde_json::Value, QueryError>;
}

/// Executes queries against a GraphQL endpoint over HTTP with a bearer token.
pub struct HttpQueryExecutor {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpQueryExecutor {
    pub fn new(endpoint: impl Into<String>, token: &str, timeout: Duration) -> Result<Self, QueryError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("bearer {token}"))
            .map_err(|_| QueryError::Config("token contains invalid header characters".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl QueryExecutor for HttpQueryExecutor {
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn execute(&self, request: &GraphQLRequest) -> Result<serde_json::Value, QueryError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QueryError::Status { status, body });
        }

        let body = response.bytes().await?;
        let envelope: GraphQLResponse<serde_json::Value> = serde_json::from_slice(&body)?;
        into_data(envelope)
    }
}

/// Any reported error fails the whole query, even alongside partial data.
pub fn into_data(envelope: GraphQLResponse<serde_json::Value>) -> Result<serde_json::Value, QueryError> {
    if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
        return Err(QueryError::GraphQl(errors.into_iter().map(|e| e.message).collect()));
    }
    match envelope.data {
        Some(serde_json::Value::Null) | None => Err(QueryError::MissingData),
        Some(data) => Ok(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::VIEWER_REPOSITORIES_QUERY;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn executor_for(server: &MockServer) -> HttpQueryExecutor {
        HttpQueryExecutor::new(format!("{}/graphql", server.uri()), "tok", Duration::from_secs(5)).unwrap()
    }

    fn envelope(value: serde_json::Value) -> GraphQLResponse<serde_json::Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn data_without_errors_passes_through() {
        let data = into_data(envelope(serde_json::json!({ "data": { "viewer": null } }))).unwrap();
        assert_eq!(data, serde_json::json!({ "viewer": null }));
    }

    #[test]
    fn errors_win_over_partial_data() {
        let err = into_data(envelope(serde_json::json!({
            "data": { "viewer": { "repositories": null } },
            "errors": [{ "message": "rate limited" }, { "message": "timeout" }]
        })))
        .unwrap_err();
        match err {
            QueryError::GraphQl(messages) => assert_eq!(messages, vec!["rate limited", "timeout"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_error_list_is_not_an_error() {
        let data = into_data(envelope(serde_json::json!({ "data": { "a": 1 }, "errors": [] }))).unwrap();
        assert_eq!(data, serde_json::json!({ "a": 1 }));
    }

    #[test]
    fn null_or_absent_data_is_missing() {
        assert!(matches!(
            into_data(envelope(serde_json::json!({ "data": null }))),
            Err(QueryError::MissingData)
        ));
        assert!(matches!(
            into_data(envelope(serde_json::json!({}))),
            Err(QueryError::MissingData)
        ));
    }

    #[test]
    fn executor_rejects_token_with_newline() {
        let result = HttpQueryExecutor::new("http://localhost/graphql", "bad\ntoken", Duration::from_secs(1));
        assert!(matches!(result, Err(QueryError::Config(_))));
    }

    #[tokio::test]
    async fn posts_query_with_bearer_token_and_returns_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("authorization", "bearer tok"))
            .and(body_json(serde_json::json!({
                "query": VIEWER_REPOSITORIES_QUERY,
                "variables": {}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "viewer": { "repositories": { "nodes": [] } } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let data = executor_for(&server)
            .execute(&GraphQLRequest::viewer_repositories())
            .await
            .unwrap();
        assert_eq!(data, serde_json::json!({ "viewer": { "repositories": { "nodes": [] } } }));
    }

    #[tokio::test]
    async fn non_success_status_keeps_code_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let err = executor_for(&server)
            .execute(&GraphQLRequest::viewer_repositories())
            .await
            .unwrap_err();
        match err {
            QueryError::Status { status, body } => {
                assert_eq!(status.as_u16(), 502);
                assert_eq!(body, "bad gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn html_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>login</body></html>"))
            .mount(&server)
            .await;

        let result = executor_for(&server)
            .execute(&GraphQLRequest::viewer_repositories())
            .await;
        assert!(matches!(result, Err(QueryError::Decode(_))));
    }

    #[tokio::test]
    async fn errors_in_ok_response_fail_the_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": null,
                "errors": [{ "message": "Bad credentials" }]
            })))
            .mount(&server)
            .await;

        let err = executor_for(&server)
            .execute(&GraphQLRequest::viewer_repositories())
            .await
            .unwrap_err();
        match err {
            QueryError::GraphQl(messages) => assert_eq!(messages, vec!["Bad credentials"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
