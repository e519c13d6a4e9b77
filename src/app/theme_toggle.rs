use leptos::prelude::*;
use leptos_use::use_preferred_dark;

use crate::theme::Theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let prefers_dark = use_preferred_dark();
    let (theme, set_theme) = signal(Theme::Light);

    // Resolve the effective preference on the client; a stored choice wins
    // over the OS preference.
    Effect::new(move |_| {
        let stored = read_stored_theme();
        let resolved = Theme::resolve(stored.as_deref(), prefers_dark.get());
        apply_document_theme(resolved);
        set_theme.set(resolved);
    });

    let toggle = move |_| {
        let next = theme.get_untracked().toggled();
        apply_document_theme(next);
        write_stored_theme(next);
        set_theme.set(next);
    };

    view! {
        <button
            on:click=toggle
            class="p-2 rounded-full bg-gray-100 dark:bg-gray-800 text-gray-800 dark:text-gray-200 transition-all duration-300 hover:bg-gray-200 dark:hover:bg-gray-700"
            aria-label="Toggle dark mode"
        >
            {move || if theme.get().is_dark() { "☀" } else { "🌙" }}
        </button>
    }
}

/// Raw stored preference, if readable.
fn read_stored_theme() -> Option<String> {
    let storage = window().local_storage().ok().flatten()?;
    storage.get_item(Theme::STORAGE_KEY).ok().flatten()
}

/// Best-effort persistence; the in-memory and document state stand on their
/// own for the session when storage is unavailable.
fn write_stored_theme(theme: Theme) {
    match window().local_storage() {
        Ok(Some(storage)) => {
            if storage.set_item(Theme::STORAGE_KEY, theme.as_str()).is_err() {
                log::warn!("theme preference not persisted: storage write failed");
            }
        }
        _ => log::warn!("theme preference not persisted: storage unavailable"),
    }
}

/// Reflect the theme onto the document root as a single `dark` class.
fn apply_document_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let result = if theme.is_dark() {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if result.is_err() {
        log::warn!("unable to update document theme class");
    }
}
