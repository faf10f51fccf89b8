use crate::components::Header;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

/// Title and description of a page, used for both the document head and the
/// page heading.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

#[component]
pub fn MainLayout(page: PageMeta, children: Children) -> impl IntoView {
    view! {
        <Title text=page.title />
        <Meta name="description" content=page.description />
        <div class="flex flex-col min-h-screen">
            <Header />
            <main class="flex-grow flex flex-col items-center justify-start pt-8 px-4">
                <div class="w-full max-w-6xl">
                    <h1 class="text-3xl font-bold text-gray-800 dark:text-gray-200">{page.title}</h1>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">{page.description}</p>
                    <section class="mt-8">{children()}</section>
                </div>
            </main>
            <footer class="w-full py-6 text-center text-sm text-gray-500 dark:text-gray-500">
                "Built with Leptos"
            </footer>
        </div>
    }
}
