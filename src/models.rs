use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One repository as shown on the projects page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepositoryRecord {
    pub id: String,
    pub owner: Owner,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub fork_count: u32,
    pub topics: Vec<Topic>,
    pub primary_language_name: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub star_count: u32,
    pub pull_request_count: u32,
    pub issue_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    pub login: String,
    pub avatar_url: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// The viewer's repositories together with the server time they were fetched
/// at, so relative timestamps render the same on the server and in the browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerProjects {
    pub fetched_at: DateTime<Utc>,
    pub repositories: Vec<RepositoryRecord>,
}

impl RepositoryRecord {
    /// `owner/name`, as GitHub displays it.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}
