use leptos::{html, prelude::*};

use super::hooks::{reveal_class, stagger_delay, use_in_view};
use super::SectionHeading;
use crate::content::{education, EducationEntry};
use crate::reveal::RevealOptions;

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="py-20 bg-white dark:bg-gray-900">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading icon="🎓" title="Education" />

                <div class="max-w-3xl mx-auto space-y-6">
                    {education()
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <EducationCard entry index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn EducationCard(entry: EducationEntry, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(card_ref, RevealOptions::with_threshold(0.1));

    view! {
        <div
            node_ref=card_ref
            class=move || {
                reveal_class(
                    "bg-gray-50 dark:bg-gray-800 rounded-xl p-6 shadow-sm hover:shadow-md transition-all duration-700 transform",
                    in_view.get(),
                )
            }
            style:transition-delay=stagger_delay(index)
        >
            <h3 class="text-xl font-semibold text-gray-900 dark:text-white">{entry.degree}</h3>
            <p class="text-primary-600 dark:text-primary-400">{entry.institution}</p>
            <p class="text-sm text-gray-500 dark:text-gray-400 mt-1">{entry.period}</p>
            <p class="text-gray-600 dark:text-gray-400 mt-2">{entry.description}</p>
        </div>
    }
}
