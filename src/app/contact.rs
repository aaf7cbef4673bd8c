use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::form::{validate, FormData, FormErrors};
use crate::submit::{SubmitPhase, Submitter};

use super::reveal::Reveal;
use super::site;
use super::theme::use_theme;

// How long an outcome banner stays up before clearing itself.
const BANNER_DISMISS_MS: f64 = 5000.0;

#[component]
pub fn ContactSection() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section
            id="contact"
            class=move || {
                format!(
                    "py-20 backdrop-blur-sm {}",
                    if theme.is_dark() { "bg-gray-900/30" } else { "bg-white/30" },
                )
            }
            aria-labelledby="contact-heading"
        >
            <div class="container mx-auto px-4">
                <Reveal>
                    <div class="max-w-2xl mx-auto">
                        <h2
                            id="contact-heading"
                            class=move || {
                                format!(
                                    "text-4xl md:text-5xl font-bold text-center mb-12 {}",
                                    if theme.is_dark() { "text-white" } else { "text-gray-900" },
                                )
                            }
                        >
                            "Let's Connect"
                        </h2>

                        <ContactForm submitter=Submitter::mailto(site::CONTACT_EMAIL) />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

/// The contact form proper. The submission strategy is fixed at
/// construction; everything else about the form is identical across
/// strategies.
#[component]
pub fn ContactForm(submitter: Submitter) -> impl IntoView {
    let theme = use_theme();
    let form = RwSignal::new(FormData::default());
    let errors = RwSignal::new(FormErrors::default());
    let phase = RwSignal::new(SubmitPhase::Idle);

    let action_label = submitter.action_label();
    let busy_label = submitter.busy_label();
    let hint = submitter.hint();
    let success_notice = submitter.success_notice();

    let UseTimeoutFnReturn {
        start: start_dismiss,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            phase.update(|p| p.dismiss());
        },
        BANNER_DISMISS_MS,
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let checked = validate(&form.get_untracked());
        if !checked.is_empty() {
            errors.set(checked);
            return;
        }
        errors.set(FormErrors::default());

        // one submission at a time per form instance
        if !phase.try_update(|p| p.begin()).unwrap_or(false) {
            return;
        }

        let submitter = submitter.clone();
        let data = form.get_untracked();
        let start_dismiss = start_dismiss.clone();
        spawn_local(async move {
            let result = submitter.submit(&data).await;
            let succeeded = result.is_ok();
            if let Err(e) = &result {
                log::error!("contact form submission failed: {e}");
            }
            // try_update: the component may have been unmounted while the
            // request was in flight; a dead signal is simply skipped
            phase.try_update(|p| p.finish(result));
            if succeeded {
                form.try_update(|f| *f = FormData::default());
            }
            start_dismiss(());
        });
    };

    let is_submitting = Signal::derive(move || phase.with(|p| p.is_submitting()));

    view! {
        <div
            class=move || {
                format!(
                    "p-8 rounded-2xl backdrop-blur-md border shadow-xl {}",
                    if theme.is_dark() {
                        "bg-gray-800/40 border-gray-700/50"
                    } else {
                        "bg-white/40 border-gray-200/50"
                    },
                )
            }
            aria-labelledby="contact-form-heading"
        >
            <h3 id="contact-form-heading" class="sr-only">
                "Contact Form"
            </h3>

            <StatusBanner phase=phase success_notice=success_notice />

            <form on:submit=on_submit class="space-y-6" novalidate=true>
                <ContactField
                    id="name"
                    label="Name"
                    required=true
                    placeholder="Your name"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    error=Signal::derive(move || errors.with(|e| e.name.clone()))
                    disabled=is_submitting
                    on_input=move |v| {
                        form.update(|f| f.name = v);
                        errors.update(|e| e.name = None);
                    }
                />

                <ContactField
                    id="company"
                    label="Company"
                    placeholder="Your company (optional)"
                    value=Signal::derive(move || form.with(|f| f.company.clone()))
                    error=Signal::derive(|| None)
                    disabled=is_submitting
                    on_input=move |v| form.update(|f| f.company = v)
                />

                <ContactField
                    id="email"
                    label="Email"
                    required=true
                    input_type="email"
                    placeholder="your.email@example.com"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    error=Signal::derive(move || errors.with(|e| e.email.clone()))
                    disabled=is_submitting
                    on_input=move |v| {
                        form.update(|f| f.email = v);
                        errors.update(|e| e.email = None);
                    }
                />

                <ContactTextarea
                    id="message"
                    label="Message"
                    required=true
                    placeholder="Tell me about your project or idea..."
                    rows=5
                    max_length=1000
                    value=Signal::derive(move || form.with(|f| f.message.clone()))
                    error=Signal::derive(move || errors.with(|e| e.message.clone()))
                    disabled=is_submitting
                    on_input=move |v| {
                        form.update(|f| f.message = v);
                        errors.update(|e| e.message = None);
                    }
                />

                {hint
                    .map(|hint| {
                        view! {
                            <div class=move || {
                                format!(
                                    "text-sm {}",
                                    if theme.is_dark() { "text-gray-300" } else { "text-gray-600" },
                                )
                            }>{hint}</div>
                        }
                    })}

                <button
                    type="submit"
                    disabled=move || is_submitting.get()
                    class="w-full bg-gradient-to-r from-indigo-600 to-purple-600 text-white py-4 px-6 rounded-lg font-semibold flex items-center justify-center space-x-2 hover:from-indigo-700 hover:to-purple-700 transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:ring-offset-2"
                >
                    {move || {
                        if is_submitting.get() {
                            view! {
                                <div class="w-4 h-4 rounded-full border-2 border-white border-t-transparent animate-spin"></div>
                                <span>{busy_label}</span>
                            }
                                .into_any()
                        } else {
                            view! { <span>{action_label}</span> }.into_any()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}

/// Outcome banner: green for success, red for failure, dismissible either
/// way and auto-dismissed by the caller's timeout.
#[component]
fn StatusBanner(phase: RwSignal<SubmitPhase>, success_notice: &'static str) -> impl IntoView {
    move || match phase.get() {
        SubmitPhase::Sent => Some(
            view! {
                <div
                    role="status"
                    class="mb-6 p-4 rounded-lg bg-green-100 text-green-800 dark:bg-green-900/40 dark:text-green-200 flex justify-between items-start gap-4"
                >
                    <p class="text-sm">{success_notice}</p>
                    <button
                        on:click=move |_| phase.update(|p| p.dismiss())
                        aria-label="Dismiss"
                        class="font-bold"
                    >
                        "✕"
                    </button>
                </div>
            }
            .into_any(),
        ),
        SubmitPhase::Failed(reason) => Some(
            view! {
                <div
                    role="alert"
                    class="mb-6 p-4 rounded-lg bg-red-100 text-red-800 dark:bg-red-900/40 dark:text-red-200 flex justify-between items-start gap-4"
                >
                    <p class="text-sm">
                        {format!(
                            "{reason}. Please email me directly at {} or try again.",
                            site::CONTACT_EMAIL,
                        )}
                    </p>
                    <button
                        on:click=move |_| phase.update(|p| p.dismiss())
                        aria-label="Dismiss"
                        class="font-bold"
                    >
                        "✕"
                    </button>
                </div>
            }
            .into_any(),
        ),
        _ => None,
    }
}

#[component]
fn ContactField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] required: bool,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    error: Signal<Option<String>>,
    disabled: Signal<bool>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div>
            <label
                for=id
                class=move || {
                    format!(
                        "block text-sm font-medium mb-2 {}",
                        if theme.is_dark() { "text-gray-300" } else { "text-gray-700" },
                    )
                }
            >
                {label}
                {required.then(|| view! { <span aria-label="required">" *"</span> })}
            </label>
            <input
                type=input_type
                id=id
                name=id
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
                placeholder=placeholder
                aria-invalid=move || error.with(Option::is_some).to_string()
                class=move || field_classes(error.with(Option::is_some), theme.is_dark())
            />
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <p id=format!("{id}-error") role="alert" class="mt-1 text-sm text-red-500">
                                {message}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ContactTextarea(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] required: bool,
    placeholder: &'static str,
    rows: u32,
    max_length: u32,
    value: Signal<String>,
    error: Signal<Option<String>>,
    disabled: Signal<bool>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div>
            <label
                for=id
                class=move || {
                    format!(
                        "block text-sm font-medium mb-2 {}",
                        if theme.is_dark() { "text-gray-300" } else { "text-gray-700" },
                    )
                }
            >
                {label}
                {required.then(|| view! { <span aria-label="required">" *"</span> })}
            </label>
            <textarea
                id=id
                name=id
                rows=rows
                maxlength=max_length
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
                placeholder=placeholder
                aria-invalid=move || error.with(Option::is_some).to_string()
                class=move || format!("{} resize-y", field_classes(error.with(Option::is_some), theme.is_dark()))
            ></textarea>
            <div class=move || {
                format!(
                    "text-xs mt-1 text-right {}",
                    if theme.is_dark() { "text-gray-400" } else { "text-gray-500" },
                )
            }>{move || format!("{}/{max_length}", value.with(|v| v.chars().count()))}</div>
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <p id=format!("{id}-error") role="alert" class="mt-1 text-sm text-red-500">
                                {message}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

fn field_classes(has_error: bool, dark: bool) -> String {
    format!(
        "w-full px-4 py-3 rounded-lg border transition-colors focus:outline-none focus:ring-2 disabled:opacity-50 disabled:cursor-not-allowed {}",
        if has_error {
            "border-red-500 focus:ring-red-500"
        } else if dark {
            "bg-gray-800 border-gray-700 text-white focus:ring-indigo-500"
        } else {
            "bg-white border-gray-300 text-gray-900 focus:ring-indigo-500"
        },
    )
}
