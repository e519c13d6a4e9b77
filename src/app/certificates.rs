use leptos::{html, prelude::*};

use super::hooks::{reveal_class, stagger_delay, use_in_view};
use super::modal::PreviewOverlay;
use super::SectionHeading;
use crate::content::{certificates, newest_first, Certificate};
use crate::reveal::RevealOptions;

#[component]
pub fn Certificates() -> impl IntoView {
    let (selected, set_selected) = signal(None::<Certificate>);
    let close = Callback::new(move |()| set_selected.set(None));
    let open = Callback::new(move |cert: Certificate| set_selected.set(Some(cert)));

    view! {
        <section id="certificates" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading icon="🏅" title="Certificates" />

                <div class="max-w-4xl mx-auto grid md:grid-cols-2 gap-6">
                    {newest_first(certificates())
                        .into_iter()
                        .enumerate()
                        .map(|(index, cert)| view! { <CertificateCard cert index on_preview=open /> })
                        .collect_view()}
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .and_then(|cert| {
                        cert.preview
                            .map(|preview| {
                                view! {
                                    <PreviewOverlay on_close=close>
                                        <img
                                            src=preview
                                            alt=cert.name
                                            class="w-full h-auto max-h-[80vh] object-contain rounded-lg"
                                        />
                                    </PreviewOverlay>
                                }
                            })
                    })
            }}
        </section>
    }
}

#[component]
fn CertificateCard(
    cert: Certificate,
    index: usize,
    on_preview: Callback<Certificate>,
) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(card_ref, RevealOptions::with_threshold(0.1));

    let preview_button = cert.preview.map(|_| {
        let cert_for_preview = cert.clone();
        view! {
            <button
                class="mt-4 px-4 py-2 text-sm bg-primary-100 dark:bg-primary-900 text-primary-700 dark:text-primary-300 rounded-lg hover:bg-primary-200 dark:hover:bg-primary-800 transition-colors duration-200"
                on:click=move |_| on_preview.run(cert_for_preview.clone())
            >
                "View Certificate"
            </button>
        }
    });

    view! {
        <div
            node_ref=card_ref
            class=move || {
                reveal_class(
                    "bg-white dark:bg-gray-900 rounded-xl p-6 shadow-sm hover:shadow-md transition-all duration-700 transform",
                    in_view.get(),
                )
            }
            style:transition-delay=stagger_delay(index)
        >
            <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{cert.name}</h3>
            <p class="text-primary-600 dark:text-primary-400 mt-1">{cert.issuer}</p>
            <p class="text-sm text-gray-500 dark:text-gray-400 mt-1">{cert.date}</p>
            {preview_button}
        </div>
    }
}
