use leptos::prelude::*;
use leptos_use::core::IntoElementsMaybeSignal;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::{RevealOptions, RevealState};

/// Report whether `target` currently meets the visibility threshold.
///
/// Observation starts once the element reference resolves and stops when the
/// owning scope is cleaned up or the target changes identity; both are
/// handled by the observer binding. The state machine is additionally
/// detached on cleanup so a straggling callback can never flip the signal
/// after teardown. If the platform has no intersection primitive the signal
/// simply stays `false`.
pub fn use_in_view<El, M>(target: El, options: RevealOptions) -> Signal<bool>
where
    El: IntoElementsMaybeSignal<web_sys::Element, M>,
{
    let state = StoredValue::new(RevealState::new());
    let (is_visible, set_visible) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            // Nothing but a state write happens here; rendering reacts to
            // the signal on the next tick.
            if let Some(entry) = entries.first() {
                state.update_value(|s| s.notify(entry.is_intersecting()));
                set_visible.set(state.with_value(RevealState::is_visible));
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![options.threshold])
            .root_margin(options.root_margin),
    );

    on_cleanup(move || state.update_value(|s| s.detach()));

    is_visible.into()
}

/// Tailwind classes switching an element between its hidden and revealed
/// transition states.
pub fn reveal_class(base: &'static str, in_view: bool) -> String {
    let state = if in_view {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    };
    format!("{base} {state}")
}

/// Transition delay for the nth card of a gallery, so cards cascade in.
pub fn stagger_delay(index: usize) -> String {
    format!("{}ms", index * 150)
}
