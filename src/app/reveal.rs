//! Scroll-triggered reveal wrapper.

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

/// Wraps its children in a block that starts hidden and fades/slides in the
/// first time it scrolls into view. Observation is one-shot: after the first
/// hit the observer is stopped, so scrolling away never re-hides content.
/// The subscription itself is torn down with the component's scope.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let (shown, set_shown) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        el,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_shown.set(true);
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![0.1])
            .root_margin("0px 0px -50px 0px"),
    );
    Effect::new(move |_| {
        if shown.get() {
            stop();
        }
    });

    view! {
        <div node_ref=el class="scroll-reveal" class:visible=move || shown.get()>
            {children()}
        </div>
    }
}
