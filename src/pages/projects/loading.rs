use leptos::prelude::*;

#[component]
pub fn LoadingPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16 text-gray-600 dark:text-gray-400">
            <div class="w-10 h-10 border-4 border-gray-300 border-t-blue-500 rounded-full animate-spin"></div>
            <p class="mt-4">"Loading projects..."</p>
        </div>
    }
}
