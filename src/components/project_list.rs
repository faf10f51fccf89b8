use crate::models::RepositoryRecord;
use crate::utils::time::relative_time;
use chrono::{DateTime, Utc};
use leptos::{either::Either, prelude::*};

/// Grid of repository cards. `as_of` is the time update ages are measured
/// against.
#[component]
pub fn ProjectList(repositories: Vec<RepositoryRecord>, as_of: DateTime<Utc>) -> impl IntoView {
    if repositories.is_empty() {
        return Either::Left(view! {
            <div class="text-center py-8 text-gray-600 dark:text-gray-400">"No projects to show yet."</div>
        });
    }

    Either::Right(view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
            <For
                each=move || repositories.clone()
                key=|repo| repo.id.clone()
                children=move |repo| view! { <ProjectCard repo=repo as_of=as_of /> }
            />
        </div>
    })
}

#[component]
pub fn ProjectCard(repo: RepositoryRecord, as_of: DateTime<Utc>) -> impl IntoView {
    let full_name = repo.full_name();
    let avatar_alt = format!("{} avatar", repo.owner.login);
    let updated = format!("Updated {}", relative_time(repo.updated_at, as_of));

    view! {
        <article class="flex flex-col bg-white dark:bg-gray-800 rounded-lg shadow p-4 border border-gray-200 dark:border-gray-700 hover:shadow-md transition-shadow duration-200">
            <header class="flex items-center gap-3">
                <a href=repo.owner.url.clone() target="_blank" rel="noopener noreferrer">
                    <img class="w-8 h-8 rounded-full" src=repo.owner.avatar_url.clone() alt=avatar_alt />
                </a>
                <a
                    href=repo.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="font-semibold text-lg text-gray-900 dark:text-gray-100 hover:underline break-all"
                >
                    {full_name}
                </a>
            </header>
            {repo
                .description
                .clone()
                .filter(|description| !description.trim().is_empty())
                .map(|description| {
                    view! { <p class="mt-2 text-gray-600 dark:text-gray-400 text-sm">{description}</p> }
                })}
            <ul class="mt-3 flex flex-wrap gap-2">
                {repo
                    .topics
                    .iter()
                    .map(|topic| {
                        view! {
                            <li>
                                <a
                                    href=topic.url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-2 py-0.5 rounded-full text-xs bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200 hover:underline"
                                >
                                    {topic.name.clone()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <footer class="mt-auto pt-4 flex flex-wrap gap-x-4 gap-y-1 text-xs text-gray-600 dark:text-gray-400">
                {repo.primary_language_name.clone().map(|language| view! { <span>{language}</span> })}
                <span title="Stars">{format!("★ {}", repo.star_count)}</span>
                <span title="Forks">{format!("{} forks", repo.fork_count)}</span>
                <span title="Pull requests">{format!("{} pull requests", repo.pull_request_count)}</span>
                <span title="Issues">{format!("{} issues", repo.issue_count)}</span>
                <span>{updated}</span>
            </footer>
        </article>
    }
}
