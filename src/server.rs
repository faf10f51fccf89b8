use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use crate::graphql::executor::{HttpQueryExecutor, QueryError, QueryExecutor};

#[derive(Debug, Parser)]
pub struct ServerConfig {
    /// Token used to authenticate the viewer against the GraphQL API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,
    /// GraphQL endpoint queried for the viewer's repositories
    #[arg(long, env = "GRAPHQL_ENDPOINT", default_value = "https://api.github.com/graphql")]
    pub graphql_endpoint: String,
    /// Per-request timeout for the GraphQL endpoint, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
    /// Address to bind the HTTP server to, overriding the Leptos site address
    #[arg(long, env = "BIND_ADDRESS")]
    pub bind: Option<SocketAddr>,
    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl ServerConfig {
    pub fn build_executor(&self) -> Result<HttpQueryExecutor, QueryError> {
        HttpQueryExecutor::new(
            self.graphql_endpoint.clone(),
            &self.github_token,
            Duration::from_secs(self.request_timeout_secs),
        )
    }
}

#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<dyn QueryExecutor>,
}

pub type GlobalAppState = Arc<AppState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_token_is_given() {
        let config = ServerConfig::try_parse_from(["repo-showcase", "--github-token", "t0ken"]).unwrap();
        assert_eq!(config.github_token, "t0ken");
        assert_eq!(config.graphql_endpoint, "https://api.github.com/graphql");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.bind, None);
        assert!(!config.log_json);
    }

    #[test]
    fn bind_address_is_parsed() {
        let config = ServerConfig::try_parse_from([
            "repo-showcase",
            "--github-token",
            "t0ken",
            "--bind",
            "127.0.0.1:8080",
            "--log-json",
        ])
        .unwrap();
        assert_eq!(config.bind, Some("127.0.0.1:8080".parse().unwrap()));
        assert!(config.log_json);
    }

    #[test]
    fn executor_builds_from_config() {
        let config = ServerConfig::try_parse_from(["repo-showcase", "--github-token", "t0ken"]).unwrap();
        assert!(config.build_executor().is_ok());
    }
}
