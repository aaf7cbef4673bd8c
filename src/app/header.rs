use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::site;
use super::theme::use_theme;

static NAV_ITEMS: [(&str, &str); 5] = [
    ("About", "about"),
    ("Experience", "experience"),
    ("Projects", "projects"),
    ("Skills", "skills"),
    ("Contact", "contact"),
];

/// Smooth-scroll the viewport to the section with the given id. Missing
/// elements are ignored; a dead nav button is better than a panic.
pub(super) fn scroll_to_section(id: &str) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme();

    let initials = site::OWNER_NAME
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>();

    view! {
        <header class=move || {
            format!(
                "fixed top-0 w-full z-50 backdrop-blur-md border-b transition-all duration-300 {}",
                if theme.is_dark() {
                    "bg-gray-900/80 border-gray-800"
                } else {
                    "bg-white/80 border-gray-200"
                },
            )
        }>
            <div class="container mx-auto px-4 py-4">
                <div class="flex justify-between items-center">
                    <div class="text-xl font-bold bg-gradient-to-r from-teal-400 to-indigo-600 bg-clip-text text-transparent">
                        {initials}
                    </div>

                    <nav class="hidden md:flex space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|(label, id)| {
                                view! {
                                    <button
                                        on:click=move |_| scroll_to_section(id)
                                        class=move || {
                                            format!(
                                                "text-sm font-medium transition-colors {}",
                                                if theme.is_dark() {
                                                    "text-gray-300 hover:text-white"
                                                } else {
                                                    "text-gray-600 hover:text-gray-900"
                                                },
                                            )
                                        }
                                    >
                                        {*label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <button
                        on:click=move |_| theme.toggle()
                        aria-label="Toggle color theme"
                        class=move || {
                            format!(
                                "p-2 rounded-full transition-colors {}",
                                if theme.is_dark() {
                                    "bg-gray-800 text-yellow-400"
                                } else {
                                    "bg-gray-100 text-gray-600"
                                },
                            )
                        }
                    >
                        {move || if theme.is_dark() { "☀" } else { "☾" }}
                    </button>
                </div>
            </div>
        </header>
    }
}
