use crate::components::ProjectList;
use crate::layouts::{MainLayout, PageMeta};
use crate::models::{RepositoryRecord, ViewerProjects};
use chrono::{DateTime, Utc};
use crate::services::project_service::get_viewer_repositories;
use leptos::either::EitherOf3;
use leptos::prelude::*;

pub mod error;
pub mod loading;

pub use error::ErrorPage;
pub use loading::LoadingPage;

pub const PROJECTS_PAGE: PageMeta = PageMeta {
    title: "Projects",
    description: "Sample Open Source projects, because we love open source.",
};

/// Where a viewer repositories fetch currently stands. Exactly one state holds
/// at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState {
    Loading,
    Error(String),
    Success(Vec<RepositoryRecord>),
}

impl QueryState {
    /// Folds a `{loading, error, data}` snapshot into a single state. Loading
    /// wins over everything, then any error. A finished fetch with neither an
    /// error nor data counts as an error.
    pub fn from_snapshot<E: std::fmt::Display>(
        loading: bool,
        error: Option<E>,
        data: Option<Vec<RepositoryRecord>>,
    ) -> Self {
        if loading {
            return Self::Loading;
        }
        if let Some(error) = error {
            return Self::Error(error.to_string());
        }
        match data {
            Some(repos) => Self::Success(repos),
            None => Self::Error("query finished without data".to_string()),
        }
    }

    /// Reads a resource value, where `None` means the fetch is still pending.
    pub fn from_resource<E: std::fmt::Display>(value: Option<Result<Vec<RepositoryRecord>, E>>) -> Self {
        match value {
            None => Self::from_snapshot::<E>(true, None, None),
            Some(Ok(repos)) => Self::from_snapshot::<E>(false, None, Some(repos)),
            Some(Err(e)) => Self::from_snapshot(false, Some(e), None),
        }
    }
}

/// The child view the projects page shows for a given state.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectsView {
    Loading,
    Error,
    List(Vec<RepositoryRecord>),
}

pub fn select_view(state: &QueryState) -> ProjectsView {
    match state {
        QueryState::Loading => ProjectsView::Loading,
        QueryState::Error(_) => ProjectsView::Error,
        QueryState::Success(repos) => ProjectsView::List(repos.clone()),
    }
}

#[component]
pub fn ProjectsContent(state: QueryState, as_of: DateTime<Utc>) -> impl IntoView {
    if let QueryState::Error(message) = &state {
        tracing::warn!(%message, "rendering projects error page");
    }

    match select_view(&state) {
        ProjectsView::Loading => EitherOf3::A(view! { <LoadingPage /> }),
        ProjectsView::Error => EitherOf3::B(view! { <ErrorPage /> }),
        ProjectsView::List(repositories) => EitherOf3::C(view! { <ProjectList repositories=repositories as_of=as_of /> }),
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let repos_resource = Resource::new(|| (), |_| get_viewer_repositories());

    view! {
        <MainLayout page=PROJECTS_PAGE>
            <Suspense fallback=move || view! { <LoadingPage /> }>
                {move || {
                    let fetched = repos_resource.get();
                    let as_of = fetched
                        .as_ref()
                        .and_then(|res| res.as_ref().ok())
                        .map(|projects: &ViewerProjects| projects.fetched_at)
                        .unwrap_or_default();
                    let state = QueryState::from_resource(fetched.map(|res| res.map(|p| p.repositories)));
                    view! { <ProjectsContent state=state as_of=as_of /> }
                }}
            </Suspense>
        </MainLayout>
    }
}
