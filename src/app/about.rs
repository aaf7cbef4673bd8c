use leptos::{html, prelude::*};
use leptos_use::utils::Pausable;
use leptos_use::{
    use_intersection_observer_with_options, use_interval_fn_with_options,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn, UseIntervalFnOptions,
};

use super::theme::use_theme;

static STATS: [(&str, u32); 3] = [
    ("Years Writing Software", 9),
    ("Projects Shipped", 30),
    ("Technologies", 14),
];

// ~2s of count-up at one tick every 33ms
const COUNT_STEPS: u32 = 60;
const COUNT_TICK_MS: u64 = 33;

#[component]
pub fn AboutSection() -> impl IntoView {
    let theme = use_theme();
    let section = NodeRef::<html::Section>::new();
    let (in_view, set_in_view) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        section,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_in_view.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![0.1]),
    );

    // The stat numbers count up from zero once the section first becomes
    // visible. The interval starts paused and stops again at the target.
    let (step, set_step) = signal(0u32);
    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || set_step.update(|s| *s += 1),
        COUNT_TICK_MS,
        UseIntervalFnOptions {
            immediate: false,
            ..Default::default()
        },
    );
    Effect::new(move |_| {
        if in_view.get() {
            stop();
            resume();
        }
    });
    Effect::new(move |_| {
        if step.get() >= COUNT_STEPS {
            pause();
        }
    });
    let counted = move |target: u32| (target * step.get().min(COUNT_STEPS)) / COUNT_STEPS;

    view! {
        <section id="about" class="py-20" node_ref=section>
            <div class="container mx-auto px-4">
                <div
                    class="max-w-4xl mx-auto text-center scroll-reveal"
                    class:visible=move || in_view.get()
                >
                    <h2 class=move || {
                        format!(
                            "text-4xl md:text-5xl font-bold mb-8 {}",
                            if theme.is_dark() { "text-white" } else { "text-gray-900" },
                        )
                    }>"About Me"</h2>

                    <p class=move || {
                        format!(
                            "text-lg md:text-xl mb-12 leading-relaxed {}",
                            if theme.is_dark() { "text-gray-300" } else { "text-gray-600" },
                        )
                    }>
                        "Portland-based software engineer who likes the whole stack but is \
                        happiest close to the wire. I spend my days building web services and \
                        interfaces that stay fast under load, and my evenings tinkering with \
                        compilers, keyboards, and the occasional espresso machine. I care about \
                        software that respects its users: quick to load, honest about errors, \
                        and boring to operate."
                    </p>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-12">
                        {STATS
                            .iter()
                            .enumerate()
                            .map(|(i, (label, target))| {
                                let target = *target;
                                view! {
                                    <div
                                        class=move || {
                                            format!(
                                                "p-6 rounded-lg shadow-lg scroll-reveal {}",
                                                if theme.is_dark() { "bg-gray-800" } else { "bg-white" },
                                            )
                                        }
                                        class:visible=move || in_view.get()
                                        style=format!("transition-delay: {}ms;", i * 100)
                                    >
                                        <div class="text-3xl md:text-4xl font-bold text-indigo-600 mb-2">
                                            {move || format!("{}+", counted(target))}
                                        </div>
                                        <div class=move || {
                                            format!(
                                                "text-sm font-medium {}",
                                                if theme.is_dark() { "text-gray-300" } else { "text-gray-600" },
                                            )
                                        }>{*label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class=move || {
                        format!(
                            "text-sm {}",
                            if theme.is_dark() { "text-gray-400" } else { "text-gray-500" },
                        )
                    }>
                        <p>"Based in Portland, OR · Remote-friendly · English, Swedish"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
