use leptos::{html, prelude::*};

use super::hooks::{reveal_class, use_in_view};
use super::SectionHeading;
use crate::reveal::RevealOptions;

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section_ref, RevealOptions::with_threshold(0.1));

    view! {
        <section id="about" node_ref=section_ref class="py-20 bg-white dark:bg-gray-900">
            <div class="container mx-auto px-4 md:px-6">
                <div class=move || {
                    reveal_class("transition-all duration-1000 transform", in_view.get())
                }>
                    <SectionHeading icon="👋" title="About Me" />

                    <div class="max-w-4xl mx-auto grid md:grid-cols-5 gap-10 items-center">
                        <div class="md:col-span-2">
                            <div class="relative">
                                <div class="absolute inset-0 bg-gradient-to-tr from-primary-500 to-secondary-500 rounded-lg transform rotate-3 scale-105"></div>
                                <img
                                    src="/pBachta_dev_profile.jpg"
                                    alt="Professional headshot"
                                    class="relative z-10 rounded-lg shadow-xl w-full object-cover aspect-square"
                                />
                            </div>
                        </div>

                        <div class="md:col-span-3 space-y-6">
                            <p class="text-lg text-gray-700 dark:text-gray-300 leading-relaxed">
                                "I'm a " <strong>"Senior Software Developer"</strong>
                                " with over 6 years of experience in software development in "
                                <strong>"Java and Spring Boot"</strong> "."
                            </p>

                            <p class="text-lg text-gray-700 dark:text-gray-300 leading-relaxed">
                                "My journey with programming started with a hobbyist writing projects on Arduino, then creating a desktop Java application, next I participated in the Patronage project where in a group of people forming a full-fledged project team we explored working in a web development project, and after that I received a full-time job proposal as a Java developer. I gained experience in Java and Spring Boot application development and climbed the career ladder, and I am currently a Senior Java Developer. I enjoy constantly learning new technologies and expanding my knowledge."
                            </p>

                            <p class="text-lg text-gray-700 dark:text-gray-300 leading-relaxed">
                                "Lately, as a hobby - thanks to AI - I've started to enter new paths I probably wouldn't have had time for, such as creating UIs and complete fullstack applications"
                            </p>

                            <p class="text-lg text-gray-700 dark:text-gray-300 leading-relaxed">
                                "When I'm not coding, I'm spending time with my family, and if there's any time left I'm exploring AI, playing around with Home Assistant home automation and currently planning to blog from time to time."
                            </p>

                            <div class="pt-4">
                                <a
                                    href="#contact"
                                    class="inline-block px-6 py-3 bg-gradient-to-r from-primary-600 to-secondary-600 hover:from-primary-700 hover:to-secondary-700 text-white font-medium rounded-lg shadow-md hover:shadow-lg transition-all duration-300"
                                >
                                    "Get In Touch"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
