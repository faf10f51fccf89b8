use crate::models::ViewerProjects;
use leptos::prelude::*;

#[cfg(feature = "ssr")]
use crate::models::RepositoryRecord;
#[cfg(feature = "ssr")]
use crate::graphql::{
    GraphQLRequest, ViewerRepositoriesData,
    executor::{QueryError, QueryExecutor},
};

/// Runs the viewer repositories query through `executor` and flattens the
/// nodes. A null `viewer` or `repositories` is reported as missing data.
#[cfg(feature = "ssr")]
pub async fn fetch_viewer_repositories(
    executor: &dyn QueryExecutor,
) -> Result<Vec<RepositoryRecord>, QueryError> {
    let data = executor.execute(&GraphQLRequest::viewer_repositories()).await?;
    let data: ViewerRepositoriesData = serde_json::from_value(data)?;
    data.into_records().ok_or(QueryError::MissingData)
}

#[server]
pub async fn get_viewer_repositories() -> Result<ViewerProjects, ServerFnError> {
    let state = use_context::<crate::server::GlobalAppState>()
        .ok_or_else(|| ServerFnError::new("application state is not available"))?;

    match fetch_viewer_repositories(state.executor.as_ref()).await {
        Ok(repositories) => {
            tracing::debug!(count = repositories.len(), "fetched viewer repositories");
            Ok(ViewerProjects {
                fetched_at: chrono::Utc::now(),
                repositories,
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "viewer repositories query failed");
            Err(ServerFnError::new(e.to_string()))
        }
    }
}
