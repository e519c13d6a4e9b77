use leptos::{html, prelude::*};

use super::hooks::{reveal_class, stagger_delay, use_in_view};
use super::SectionHeading;
use crate::content::{
    highlight_keywords, it_experience, it_scope_of_duties, marine_experience, newest_first,
    ExperienceEntry, HIGHLIGHT_KEYWORDS,
};
use crate::reveal::RevealOptions;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading icon="💼" title="IT Experience" />

                <div class="max-w-3xl mx-auto border border-gray-200 dark:border-gray-700 rounded-xl p-6 md:p-8 bg-white dark:bg-gray-900">
                    <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-1">"Intive"</h3>
                    <p class="text-gray-500 dark:text-gray-400 mb-8">"2018 - Present"</p>

                    <Timeline entries=newest_first(it_experience()) />

                    <ScopeOfDuties />
                </div>

                <div class="mt-20">
                    <SectionHeading icon="⚓" title="Marine Experience" />
                    <div class="max-w-3xl mx-auto">
                        <Timeline entries=newest_first(marine_experience()) />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Timeline(entries: Vec<ExperienceEntry>) -> impl IntoView {
    let count = entries.len();
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            view! { <TimelineCard entry index is_last=index + 1 == count /> }
        })
        .collect_view()
}

#[component]
fn TimelineCard(entry: ExperienceEntry, index: usize, is_last: bool) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(card_ref, RevealOptions::with_threshold(0.1));

    view! {
        <div
            node_ref=card_ref
            class=move || {
                reveal_class("relative pl-10 pb-10 transition-all duration-700 transform", in_view.get())
            }
            style:transition-delay=stagger_delay(index)
        >
            <div class="absolute left-0 top-1 w-4 h-4 rounded-full bg-gradient-to-r from-primary-500 to-secondary-500"></div>
            {(!is_last)
                .then(|| {
                    view! {
                        <div class="absolute left-[7px] top-5 bottom-0 w-0.5 bg-gray-200 dark:bg-gray-700"></div>
                    }
                })}

            <h4 class="text-xl font-semibold text-gray-900 dark:text-white">{entry.role}</h4>
            <p class="text-sm text-gray-500 dark:text-gray-400">{entry.company}</p>
            <p class="text-sm text-primary-600 dark:text-primary-400 mb-2">{entry.period}</p>
            <p class="text-gray-600 dark:text-gray-400 mb-3">{entry.description}</p>
            <ul class="space-y-1">
                {entry
                    .achievements
                    .iter()
                    .map(|achievement| {
                        view! {
                            <li class="flex items-start text-sm text-gray-600 dark:text-gray-400">
                                <span class="mr-2 text-primary-500">"•"</span>
                                <span>{*achievement}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ScopeOfDuties() -> impl IntoView {
    let block_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(block_ref, RevealOptions::with_threshold(0.1));

    view! {
        <div
            node_ref=block_ref
            class=move || {
                reveal_class(
                    "mt-8 pt-8 border-t border-gray-200 dark:border-gray-700 transition-all duration-700 transform",
                    in_view.get(),
                )
            }
        >
            <h4 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                "Scope of duties"
            </h4>
            <ul class="space-y-3">
                {it_scope_of_duties()
                    .iter()
                    .map(|duty| {
                        view! {
                            <li class="flex items-start text-gray-600 dark:text-gray-400">
                                <span class="mr-3 text-primary-500">"▸"</span>
                                <span inner_html=highlight_keywords(duty, HIGHLIGHT_KEYWORDS)></span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
