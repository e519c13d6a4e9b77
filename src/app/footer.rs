use leptos::prelude::*;

use crate::content::social_links;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let scroll_to_top = move |_| {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    // BUILD_TIME is RFC 3339, year first.
    let year = &BUILD_TIME[..4];

    view! {
        <footer class="py-10 bg-white dark:bg-gray-900 border-t border-gray-200 dark:border-gray-800">
            <div class="container mx-auto px-4 md:px-6 flex flex-col items-center space-y-6">
                <button
                    on:click=scroll_to_top
                    class="p-3 bg-gray-100 dark:bg-gray-800 rounded-full text-gray-700 dark:text-gray-300 hover:bg-primary-100 dark:hover:bg-primary-800 hover:text-primary-600 dark:hover:text-primary-400 transition-all duration-300"
                    aria-label="Back to top"
                >
                    "↑"
                </button>

                <div class="flex space-x-5">
                    {social_links()
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noreferrer"
                                    class="text-gray-500 dark:text-gray-400 hover:text-primary-600 dark:hover:text-primary-400 transition-colors duration-200 text-xl"
                                    aria-label=link.label
                                >
                                    <i class=link.icon_class></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "© " {year} " Paweł Bachta. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
