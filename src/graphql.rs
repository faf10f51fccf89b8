use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Owner, RepositoryRecord, Topic};

#[cfg(feature = "ssr")]
pub mod executor;

/// Repositories of the authenticated viewer, as listed on the projects page.
pub const VIEWER_REPOSITORIES_QUERY: &str = r#"
{
    viewer {
        repositories(first: 100) {
            nodes {
                id
                owner {
                    login
                    avatarUrl
                    url
                }
                name
                url
                description
                forks(first: 5) {
                    totalCount
                }
                repositoryTopics(first: 10) {
                    nodes {
                        topic {
                            id
                            name
                        }
                        url
                    }
                }
                primaryLanguage {
                    name
                }
                updatedAt
                stargazers {
                    totalCount
                }
                pullRequests {
                    totalCount
                }
                issues {
                    totalCount
                }
            }
        }
    }
}
"#;

/// GraphQL request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphQLRequest {
    pub query: String,
    pub variables: serde_json::Value,
}

impl GraphQLRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: serde_json::Value::Object(Default::default()),
        }
    }

    pub fn viewer_repositories() -> Self {
        Self::new(VIEWER_REPOSITORIES_QUERY)
    }
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

/// Reduces a document to its token stream so two documents that differ only
/// in whitespace, commas or comments compare equal.
#[cfg(test)]
pub(crate) fn normalize_document(document: &str) -> String {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut chars = document.chars().peekable();

    let flush = |current: &mut String, tokens: &mut Vec<String>| {
        if !current.is_empty() {
            tokens.push(std::mem::take(current));
        }
    };

    while let Some(c) = chars.next() {
        match c {
            '#' => {
                flush(&mut current, &mut tokens);
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '"' => {
                flush(&mut current, &mut tokens);
                let mut literal = String::from('"');
                while let Some(next) = chars.next() {
                    literal.push(next);
                    if next == '\\' {
                        if let Some(escaped) = chars.next() {
                            literal.push(escaped);
                        }
                    } else if next == '"' {
                        break;
                    }
                }
                tokens.push(literal);
            }
            c if c.is_whitespace() || c == ',' => flush(&mut current, &mut tokens),
            '{' | '}' | '(' | ')' | '[' | ']' | ':' | '!' | '$' | '@' | '=' | '|' => {
                flush(&mut current, &mut tokens);
                tokens.push(c.to_string());
            }
            c => current.push(c),
        }
    }
    flush(&mut current, &mut tokens);

    tokens.join(" ")
}

// Wire shapes of the viewer repositories response. Nullable levels stay
// `Option` so a partial response can be told apart from a decode failure.

#[derive(Debug, Deserialize)]
pub struct ViewerRepositoriesData {
    pub viewer: Option<Viewer>,
}

#[derive(Debug, Deserialize)]
pub struct Viewer {
    pub repositories: Option<RepositoryConnection>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryConnection {
    #[serde(default)]
    pub nodes: Vec<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    id: String,
    owner: OwnerNode,
    name: String,
    url: String,
    description: Option<String>,
    forks: Count,
    repository_topics: TopicConnection,
    primary_language: Option<LanguageNode>,
    updated_at: DateTime<Utc>,
    stargazers: Count,
    pull_requests: Count,
    issues: Count,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OwnerNode {
    login: String,
    avatar_url: String,
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Count {
    total_count: u32,
}

#[derive(Debug, Deserialize)]
struct TopicConnection {
    #[serde(default)]
    nodes: Vec<RepositoryTopicNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryTopicNode {
    topic: TopicNode,
    url: String,
}

#[derive(Debug, Deserialize)]
struct TopicNode {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct LanguageNode {
    name: String,
}

impl From<RepositoryNode> for RepositoryRecord {
    fn from(node: RepositoryNode) -> Self {
        Self {
            id: node.id,
            owner: Owner {
                login: node.owner.login,
                avatar_url: node.owner.avatar_url,
                url: node.owner.url,
            },
            name: node.name,
            url: node.url,
            description: node.description,
            fork_count: node.forks.total_count,
            topics: node
                .repository_topics
                .nodes
                .into_iter()
                .map(|t| Topic {
                    id: t.topic.id,
                    name: t.topic.name,
                    url: t.url,
                })
                .collect(),
            primary_language_name: node.primary_language.map(|l| l.name),
            updated_at: node.updated_at,
            star_count: node.stargazers.total_count,
            pull_request_count: node.pull_requests.total_count,
            issue_count: node.issues.total_count,
        }
    }
}

impl ViewerRepositoriesData {
    /// `viewer.repositories.nodes`, or `None` when a level of the path is null.
    pub fn into_records(self) -> Option<Vec<RepositoryRecord>> {
        let nodes = self.viewer?.repositories?.nodes;
        Some(nodes.into_iter().map(RepositoryRecord::from).collect())
    }
}
