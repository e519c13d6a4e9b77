use leptos::{html, prelude::*};

use super::hooks::{reveal_class, stagger_delay, use_in_view};
use super::SectionHeading;
use crate::content::{contact_entries, ContactEntry};
use crate::reveal::RevealOptions;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading icon="✉️" title="Get In Touch" />

                <div class="max-w-2xl mx-auto grid sm:grid-cols-2 gap-6">
                    {contact_entries()
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <ContactCard entry index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(entry: ContactEntry, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(card_ref, RevealOptions::with_threshold(0.1));

    let target = entry.external.then_some("_blank");
    let rel = entry.external.then_some("noreferrer");

    view! {
        <div
            node_ref=card_ref
            class=move || {
                reveal_class(
                    "transition-all duration-700 transform",
                    in_view.get(),
                )
            }
            style:transition-delay=stagger_delay(index)
        >
            <a
                href=entry.link
                target=target
                rel=rel
                class="block bg-white dark:bg-gray-900 rounded-xl p-6 shadow-sm hover:shadow-md text-center transition-shadow duration-300"
            >
                <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{entry.title}</h3>
                <p class="text-primary-600 dark:text-primary-400 mt-2">{entry.content}</p>
            </a>
        </div>
    }
}
