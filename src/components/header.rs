use leptos::prelude::*;
use leptos::tachys::dom::event_target_checked;
use leptos_darkmode::Darkmode;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    let mut darkmode = use_context::<Darkmode>();

    view! {
        <header class="navbar flex justify-between items-center w-full px-4 py-3 shadow-md border-b border-slate-200/70 dark:border-slate-800/70 bg-white/90 dark:bg-slate-950/80 text-slate-900 dark:text-white backdrop-blur">
            <A href="/" attr:class="text-xl font-semibold whitespace-nowrap">
                "Showcase"
            </A>
            <nav class="flex items-center gap-6 text-slate-600 dark:text-slate-300">
                <A href="/projects" attr:class="hover:underline">
                    "Projects"
                </A>
                <label class="flex items-center gap-2 cursor-pointer text-sm">
                    <span>"Dark Mode"</span>
                    <input
                        type="checkbox"
                        class="toggle"
                        prop:checked={
                            let darkmode = darkmode.clone();
                            move || darkmode.clone().map(|v| v.get()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let val = event_target_checked(&ev);
                            if let Some(darkmode) = darkmode.as_mut() {
                                darkmode.set(val);
                            }
                        }
                    />
                </label>
            </nav>
        </header>
    }
}
