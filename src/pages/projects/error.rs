use leptos::prelude::*;

#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-8 border border-gray-200 dark:border-gray-700 text-center">
            <h3 class="font-semibold text-lg text-gray-900 dark:text-gray-100">
                "Something went wrong"
            </h3>
            <p class="mt-2 text-gray-600 dark:text-gray-400 text-sm">
                "We couldn't load the projects right now. Please try again later."
            </p>
        </div>
    }
}
