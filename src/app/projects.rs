use leptos::{html, prelude::*};

use super::hooks::{reveal_class, stagger_delay, use_in_view};
use super::modal::PreviewOverlay;
use super::SectionHeading;
use crate::content::{newest_first, projects, Project};
use crate::reveal::RevealOptions;

#[component]
pub fn Projects() -> impl IntoView {
    let (selected, set_selected) = signal(None::<Project>);
    let close = Callback::new(move |()| set_selected.set(None));
    let open = Callback::new(move |project: Project| set_selected.set(Some(project)));

    view! {
        <section id="projects" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading icon="🚀" title="Projects" />

                <div class="max-w-5xl mx-auto grid md:grid-cols-2 gap-8">
                    {newest_first(projects())
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! { <ProjectCard project index on_preview=open /> }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .map(|project| {
                        view! {
                            <PreviewOverlay on_close=close>
                                <img
                                    src=project.image
                                    alt=project.title
                                    class="w-full h-auto max-h-[80vh] object-contain rounded-lg"
                                />
                            </PreviewOverlay>
                        }
                    })
            }}
        </section>
    }
}

/// Animated GIFs only play while the card is hovered; otherwise a static
/// first frame with the same name and a `.png` extension is shown.
fn static_frame(image: &'static str) -> String {
    match image.strip_suffix(".gif") {
        Some(stem) => format!("{stem}.png"),
        None => image.to_string(),
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, on_preview: Callback<Project>) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(card_ref, RevealOptions::with_threshold(0.1));
    let (hovered, set_hovered) = signal(false);

    let animated = project.image;
    let still = static_frame(project.image);
    let image_src = move || {
        if hovered.get() {
            animated.to_string()
        } else {
            still.clone()
        }
    };

    let project_for_preview = project.clone();

    view! {
        <div
            node_ref=card_ref
            class=move || {
                reveal_class(
                    "bg-white dark:bg-gray-900 rounded-xl overflow-hidden shadow-sm hover:shadow-lg transition-all duration-700 transform",
                    in_view.get(),
                )
            }
            style:transition-delay=stagger_delay(index)
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <button
                class="block w-full cursor-zoom-in"
                aria-label="Preview project"
                on:click=move |_| on_preview.run(project_for_preview.clone())
            >
                <img src=image_src alt=project.title class="w-full h-56 object-cover object-top" />
            </button>

            <div class="p-6">
                <h3 class="text-xl font-semibold text-gray-900 dark:text-white">{project.title}</h3>
                <p class="text-gray-600 dark:text-gray-400 mt-2">{project.description}</p>

                <div class="flex flex-wrap gap-2 mt-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 text-xs bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-gray-300 rounded-full">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex flex-wrap items-center gap-4 mt-6">
                    {project
                        .github_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noreferrer"
                                    class="text-sm font-medium text-primary-600 dark:text-primary-400 hover:underline"
                                >
                                    "GitHub"
                                </a>
                            }
                        })}
                    {project
                        .live_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noreferrer"
                                    class="text-sm font-medium text-primary-600 dark:text-primary-400 hover:underline"
                                >
                                    "Live Demo"
                                </a>
                            }
                        })}
                    {match project.blog_url {
                        Some(url) => {
                            view! {
                                <a
                                    href=url
                                    class="text-sm font-medium text-primary-600 dark:text-primary-400 hover:underline"
                                >
                                    "Read More"
                                </a>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <span class="text-sm text-gray-400 dark:text-gray-500 cursor-not-allowed">
                                    "Read More (coming soon)"
                                </span>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
