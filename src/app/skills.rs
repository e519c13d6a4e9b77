use leptos::{html, prelude::*};

use super::hooks::{reveal_class, stagger_delay, use_in_view};
use super::SectionHeading;
use crate::content::{grouped_skills, Skill, SkillCategory};
use crate::reveal::RevealOptions;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 bg-white dark:bg-gray-900">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading icon="🛠️" title="Skills" />

                <div class="max-w-4xl mx-auto space-y-8">
                    {grouped_skills()
                        .into_iter()
                        .enumerate()
                        .map(|(index, (category, group))| {
                            view! { <SkillGroup category group index /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillGroup(category: SkillCategory, group: Vec<Skill>, index: usize) -> impl IntoView {
    let group_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(group_ref, RevealOptions::with_threshold(0.1));

    view! {
        <div
            node_ref=group_ref
            class=move || {
                reveal_class(
                    "bg-gray-50 dark:bg-gray-800 rounded-xl p-6 transition-all duration-700 transform",
                    in_view.get(),
                )
            }
            style:transition-delay=stagger_delay(index)
        >
            <h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                {category.title()}
            </h3>
            <div class="flex flex-wrap gap-2">
                {group
                    .into_iter()
                    .map(|skill| {
                        view! {
                            <span class="px-4 py-2 bg-white dark:bg-gray-900 text-gray-700 dark:text-gray-300 rounded-full shadow-sm text-sm">
                                {skill.name}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
