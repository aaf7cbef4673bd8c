//! Dark/light theme context.
//!
//! One context object provided at the app root; `toggle` is the only
//! mutation entry point. The preference survives reloads via localStorage.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.mode.get() == ThemeMode::Dark
    }

    pub fn toggle(&self) {
        self.mode.update(|mode| {
            *mode = match mode {
                ThemeMode::Dark => ThemeMode::Light,
                ThemeMode::Light => ThemeMode::Dark,
            }
        });
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let mode = RwSignal::new(ThemeMode::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) = use_local_storage::<ThemeMode, JsonSerdeWasmCodec>("theme");
        // pick up the persisted preference once, after hydration
        Effect::watch(
            || (),
            move |_, _, _| {
                mode.set(stored.get_untracked());
            },
            true,
        );
        Effect::watch(
            move || mode.get(),
            move |current, _, _| {
                set_stored.set(*current);
            },
            false,
        );
    }

    provide_context(ThemeContext { mode });
    children()
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
