use leptos::prelude::*;

/// Full-screen overlay for previewing a selected gallery item.
///
/// The backdrop and the close button dismiss the preview; clicks inside the
/// content region are contained and do not.
#[component]
pub fn PreviewOverlay(on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 bg-black/60 flex items-center justify-center z-50 p-4"
            on:click=move |_| on_close.run(())
        >
            <div
                class="relative bg-white dark:bg-gray-800 rounded-xl max-w-4xl w-full max-h-[90vh] overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="absolute top-4 right-4 p-2 bg-gray-100 dark:bg-gray-700 rounded-full hover:bg-gray-200 dark:hover:bg-gray-600 transition-colors duration-200 z-10"
                    aria-label="Close preview"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
                <div class="p-4">{children()}</div>
            </div>
        </div>
    }
}
