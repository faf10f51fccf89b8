use leptos::prelude::*;

pub mod projects;
pub use projects::ProjectsPage;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="flex-grow flex flex-col items-center justify-start pt-8 p-4">
            <div class="max-w-4xl w-full bg-white dark:bg-gray-800 rounded-lg shadow p-8 border border-gray-200 dark:border-gray-700 text-center">
                <p class="text-xl text-gray-600 dark:text-gray-400">"Page not found"</p>
            </div>
        </main>
    }
}
