use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use super::theme::use_theme;

struct SkillGroup {
    title: &'static str,
    skills: &'static [(&'static str, u32)],
}

static GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        title: "Languages",
        skills: &[
            ("Rust", 95),
            ("TypeScript/JavaScript", 90),
            ("Python", 80),
            ("Go", 75),
            ("SQL", 85),
        ],
    },
    SkillGroup {
        title: "Frameworks & Libraries",
        skills: &[
            ("Leptos/Axum", 90),
            ("Tokio", 90),
            ("React", 85),
            ("PostgreSQL", 85),
            ("Kafka", 75),
        ],
    },
    SkillGroup {
        title: "Tools & Platforms",
        skills: &[
            ("Linux", 90),
            ("Docker/Kubernetes", 85),
            ("GitHub Actions", 90),
            ("Terraform", 70),
            ("AWS", 80),
        ],
    },
    SkillGroup {
        title: "Practices",
        skills: &[
            ("System Design", 90),
            ("Incident Response", 85),
            ("Mentoring", 90),
            ("Technical Writing", 85),
            ("Performance Profiling", 90),
        ],
    },
];

#[component]
pub fn SkillsSection() -> impl IntoView {
    let theme = use_theme();
    let section = NodeRef::<html::Section>::new();
    let (in_view, set_in_view) = signal(false);

    // One observer for the whole section: it both reveals the cards and
    // triggers the bar-width animation.
    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        section,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_in_view.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![0.1]),
    );
    Effect::new(move |_| {
        if in_view.get() {
            stop();
        }
    });

    view! {
        <section
            id="skills"
            node_ref=section
            class=move || {
                format!(
                    "py-20 backdrop-blur-sm {}",
                    if theme.is_dark() { "bg-gray-800/20" } else { "bg-gray-100/20" },
                )
            }
        >
            <div class="container mx-auto px-4">
                <div class="max-w-6xl mx-auto scroll-reveal" class:visible=move || in_view.get()>
                    <h2 class=move || {
                        format!(
                            "text-4xl md:text-5xl font-bold text-center mb-16 {}",
                            if theme.is_dark() { "text-white" } else { "text-gray-900" },
                        )
                    }>"Skills & Expertise"</h2>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        {GROUPS
                            .iter()
                            .map(|group| {
                                view! {
                                    <div class=move || {
                                        format!(
                                            "p-6 rounded-lg backdrop-blur-md border shadow-lg {}",
                                            if theme.is_dark() {
                                                "bg-gray-800/40 border-gray-700/50"
                                            } else {
                                                "bg-white/40 border-gray-200/50"
                                            },
                                        )
                                    }>
                                        <h3 class=move || {
                                            format!(
                                                "text-xl font-bold mb-6 {}",
                                                if theme.is_dark() { "text-white" } else { "text-gray-900" },
                                            )
                                        }>{group.title}</h3>

                                        <div class="space-y-4">
                                            {group
                                                .skills
                                                .iter()
                                                .map(|(name, level)| {
                                                    let level = *level;
                                                    view! {
                                                        <div>
                                                            <div class="flex justify-between mb-2">
                                                                <span class=move || {
                                                                    format!(
                                                                        "text-sm font-medium {}",
                                                                        if theme.is_dark() { "text-gray-300" } else { "text-gray-700" },
                                                                    )
                                                                }>{*name}</span>
                                                                <span class=move || {
                                                                    format!(
                                                                        "text-sm font-medium {}",
                                                                        if theme.is_dark() { "text-gray-400" } else { "text-gray-500" },
                                                                    )
                                                                }>{format!("{level}%")}</span>
                                                            </div>

                                                            <div class=move || {
                                                                format!(
                                                                    "h-2 rounded-full {}",
                                                                    if theme.is_dark() { "bg-gray-700" } else { "bg-gray-200" },
                                                                )
                                                            }>
                                                                <div
                                                                    class="h-full bg-gradient-to-r from-teal-400 to-indigo-600 rounded-full transition-all duration-1000 ease-out"
                                                                    style:width=move || {
                                                                        if in_view.get() {
                                                                            format!("{level}%")
                                                                        } else {
                                                                            "0%".to_string()
                                                                        }
                                                                    }
                                                                ></div>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
