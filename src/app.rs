mod about;
mod certificates;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod hooks;
mod modal;
mod navbar;
mod projects;
mod skills;
mod theme_toggle;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use certificates::Certificates;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                // Applies the stored/OS theme before first paint
                <script inner_html=crate::theme::Theme::EARLY_APPLY_SCRIPT></script>
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-50 text-gray-900 dark:bg-gray-900 dark:text-gray-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Paweł Bachta - {title}") />

        <Router>
            <Navbar />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// Renders the single portfolio page.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Experience />
        <Education />
        <Certificates />
        <Skills />
        <Projects />
        <Contact />
    }
}

/// Centered gradient heading shared by the content sections.
#[component]
pub(crate) fn SectionHeading(icon: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center mb-12">
            <span class="text-primary-500 mr-3 text-2xl" aria-hidden="true">
                {icon}
            </span>
            <h2 class="text-3xl md:text-4xl font-bold text-center">
                <span class="bg-gradient-to-r from-primary-600 to-secondary-600 dark:from-primary-400 dark:to-secondary-400 text-transparent bg-clip-text">
                    {title}
                </span>
            </h2>
        </div>
    }
}
