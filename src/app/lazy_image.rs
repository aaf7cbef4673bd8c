//! Image component that defers the network fetch until it nears the
//! viewport.

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

/// Load lifecycle of a single image instance. `Error` is terminal: the
/// fallback stays up and nothing retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    /// Not yet near the viewport; no request has been made.
    Waiting,
    /// The `<img>` is mounted and the browser is fetching.
    Loading,
    Loaded,
    Error,
}

/// Renders nothing network-wise until the container is within 50px of the
/// viewport, then mounts the `<img>` and fades it in once decoded. A spinner
/// placeholder covers the waiting/loading states; a static fallback covers
/// failure. The viewport observer fires at most once per instance and is
/// unsubscribed both on first hit and on unmount.
#[component]
pub fn LazyImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    /// Extra classes for the container (sizing, rounding).
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let (state, set_state) = signal(LoadState::Waiting);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        container,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_state.update(|s| {
                    if *s == LoadState::Waiting {
                        *s = LoadState::Loading;
                    }
                });
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![0.1])
            .root_margin("50px"),
    );
    Effect::new(move |_| {
        if state.get() != LoadState::Waiting {
            stop();
        }
    });

    let img = {
        let src = src.clone();
        let alt = alt.clone();
        move || {
            matches!(state.get(), LoadState::Loading | LoadState::Loaded).then(|| {
                view! {
                    <img
                        src=src.clone()
                        alt=alt.clone()
                        on:load=move |_| set_state.set(LoadState::Loaded)
                        on:error=move |_| set_state.set(LoadState::Error)
                        class=move || {
                            format!(
                                "w-full h-full object-cover transition-opacity duration-300 {}",
                                if state.get() == LoadState::Loaded {
                                    "opacity-100"
                                } else {
                                    "opacity-0"
                                },
                            )
                        }
                        loading="lazy"
                    />
                }
            })
        }
    };

    view! {
        <div node_ref=container class=format!("relative overflow-hidden {class}")>
            {move || {
                matches!(state.get(), LoadState::Waiting | LoadState::Loading)
                    .then(|| {
                        view! {
                            <div class="absolute inset-0 flex items-center justify-center bg-gray-200 dark:bg-gray-700 animate-pulse rounded">
                                <div class="w-6 h-6 rounded-full border-2 border-gray-400 border-t-transparent animate-spin"></div>
                            </div>
                        }
                    })
            }} {img}
            {move || {
                (state.get() == LoadState::Error)
                    .then(|| {
                        view! {
                            <div class="absolute inset-0 flex items-center justify-center bg-gray-200 dark:bg-gray-700 rounded">
                                <p class="text-sm text-gray-500">"Failed to load image"</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
