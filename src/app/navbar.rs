use leptos::prelude::*;

use super::theme_toggle::ThemeToggle;

const SECTIONS: [(&str, &str); 7] = [
    ("About", "#about"),
    ("Experience", "#experience"),
    ("Education", "#education"),
    ("Certificates", "#certificates"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Contact", "#contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="fixed top-0 inset-x-0 z-40 bg-white/80 dark:bg-gray-900/80 backdrop-blur shadow-sm">
            <div class="container mx-auto px-4 md:px-6 py-3 flex items-center justify-between">
                <a
                    href="#home"
                    class="text-xl font-bold bg-gradient-to-r from-primary-600 to-secondary-600 dark:from-primary-400 dark:to-secondary-400 text-transparent bg-clip-text"
                >
                    "Paweł Bachta"
                </a>
                <nav class="hidden md:flex items-center gap-6">
                    {SECTIONS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="text-sm text-gray-700 dark:text-gray-300 hover:text-primary-600 dark:hover:text-primary-400 transition-colors duration-200"
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <ThemeToggle />
            </div>
        </header>
    }
}
