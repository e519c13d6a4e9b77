use leptos::prelude::*;

use crate::content::{cv_downloads, social_links};

#[component]
pub fn Hero() -> impl IntoView {
    // Staggered fade-in on first paint: a single mount signal plus
    // per-block transition delays, no timers.
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));

    let fade = move |base: &'static str| {
        let shown = if mounted.get() {
            "opacity-100"
        } else {
            "opacity-0"
        };
        format!("{base} transition-opacity duration-1000 {shown}")
    };

    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center justify-center overflow-hidden pt-16"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-900 dark:to-gray-800 z-0"></div>

            <div class="absolute inset-0 z-0">
                <div class="absolute top-20 left-10 w-64 h-64 bg-primary-300/20 dark:bg-primary-600/10 rounded-full blur-3xl"></div>
                <div class="absolute bottom-20 right-10 w-80 h-80 bg-secondary-300/20 dark:bg-secondary-600/10 rounded-full blur-3xl"></div>
            </div>

            <div class="container mx-auto px-4 z-10 text-center">
                <h1 class=move || {
                    fade("text-4xl md:text-6xl lg:text-7xl font-bold mb-6 tracking-tight text-gray-900 dark:text-white")
                }>
                    <span class="inline-block">"Hi, I'm"</span>
                    " "
                    <span class="inline-block bg-gradient-to-r from-primary-600 to-secondary-600 dark:from-primary-400 dark:to-secondary-400 text-transparent bg-clip-text">
                        "Paweł Bachta"
                    </span>
                </h1>

                <p
                    class=move || {
                        fade("text-xl md:text-2xl mb-8 max-w-2xl mx-auto text-gray-700 dark:text-gray-300")
                    }
                    style:transition-delay="300ms"
                >
                    "Experienced software developer with expertise in Java and Spring Boot, passionate about building innovative software solutions and learning new technologies."
                </p>

                <div
                    class=move || fade("flex flex-col items-center space-y-6 mb-12")
                    style:transition-delay="600ms"
                >
                    <div class="flex justify-center space-x-6">
                        {social_links()
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noreferrer"
                                        class="p-3 bg-gray-200 dark:bg-gray-800 rounded-full text-gray-700 dark:text-gray-300 hover:bg-primary-100 dark:hover:bg-primary-800 hover:text-primary-600 dark:hover:text-primary-400 transition-all duration-300 text-2xl"
                                        aria-label=link.label
                                    >
                                        <i class=link.icon_class></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex flex-wrap justify-center gap-4">
                        {cv_downloads()
                            .into_iter()
                            .map(|(label, path)| {
                                view! {
                                    <a
                                        href=path
                                        download=""
                                        class="flex items-center px-6 py-3 bg-gradient-to-r from-primary-600 to-secondary-600 hover:from-primary-700 hover:to-secondary-700 text-white font-medium rounded-lg shadow-md hover:shadow-lg transition-all duration-300"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <span class="flex items-center px-6 py-3 bg-white dark:bg-gray-800 text-gray-800 dark:text-white font-medium rounded-lg shadow-md border border-gray-200 dark:border-gray-700">
                            "Visit Blog" <span class="ml-2 text-gray-400">"coming soon"</span>
                        </span>
                    </div>
                </div>

                <a
                    href="#about"
                    class="inline-block animate-bounce mt-8 p-3 bg-gray-200 dark:bg-gray-800 rounded-full text-gray-700 dark:text-gray-300 hover:bg-primary-100 dark:hover:bg-primary-800 hover:text-primary-600 dark:hover:text-primary-400 transition-all duration-300"
                    aria-label="Scroll down"
                >
                    "↓"
                </a>
            </div>
        </section>
    }
}
