use leptos::prelude::*;

use super::reveal::Reveal;
use super::theme::use_theme;

struct Role {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    period: &'static str,
    summary: &'static str,
    details: &'static [&'static str],
    tech: &'static [&'static str],
}

static ROLES: [Role; 3] = [
    Role {
        title: "Staff Software Engineer",
        company: "Fernwood Systems",
        location: "Portland, OR",
        period: "Mar 2022 – Present",
        summary: "Own the ingestion path of a telemetry platform handling two million events per second.",
        details: &[
            "Rebuilt the ingestion tier in Rust, cutting p99 latency from 180ms to 11ms",
            "Designed the backpressure protocol between collectors and the storage fleet",
            "Led a four-person team through a zero-downtime migration off a legacy queue",
            "On-call rotation lead; drove incident reviews that halved repeat pages",
        ],
        tech: &["Rust", "Tokio", "Kafka", "PostgreSQL", "Kubernetes"],
    },
    Role {
        title: "Senior Full-Stack Engineer",
        company: "Brightline Labs",
        location: "Seattle, WA",
        period: "Jun 2019 – Mar 2022",
        summary: "Built the scheduling product from prototype to 40k daily users.",
        details: &[
            "Shipped the calendar engine and its conflict-resolution model",
            "Introduced end-to-end typed APIs between the TypeScript client and the Rust backend",
            "Cut cold page loads by 60% with asset splitting and lazy media loading",
            "Mentored three junior engineers; two promoted within eighteen months",
        ],
        tech: &["TypeScript", "React", "Rust", "Axum", "Redis"],
    },
    Role {
        title: "Software Engineer",
        company: "Cascade Digital",
        location: "Portland, OR",
        period: "Aug 2016 – Jun 2019",
        summary: "Agency work across a dozen client products, frontend to infrastructure.",
        details: &[
            "Delivered e-commerce, publishing, and booking platforms on tight timelines",
            "Standardised the agency's deployment pipeline around containers and CI",
            "Built an internal component library reused across nine client projects",
        ],
        tech: &["JavaScript", "Node.js", "Python", "Docker", "AWS"],
    },
];

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let theme = use_theme();
    let (expanded, set_expanded) = signal(None::<usize>);

    view! {
        <section
            id="experience"
            class=move || {
                format!(
                    "py-20 backdrop-blur-sm {}",
                    if theme.is_dark() { "bg-gray-800/20" } else { "bg-gray-100/20" },
                )
            }
        >
            <div class="container mx-auto px-4">
                <Reveal>
                    <div class="max-w-4xl mx-auto">
                        <h2 class=move || {
                            format!(
                                "text-4xl md:text-5xl font-bold text-center mb-16 {}",
                                if theme.is_dark() { "text-white" } else { "text-gray-900" },
                            )
                        }>"Work Experience"</h2>

                        <div class="space-y-6">
                            {ROLES
                                .iter()
                                .enumerate()
                                .map(|(i, role)| {
                                    let is_open = move || expanded.get() == Some(i);
                                    view! {
                                        <div
                                            class=move || {
                                                format!(
                                                    "p-6 rounded-lg border backdrop-blur-md transition-all duration-300 cursor-pointer {} {}",
                                                    if theme.is_dark() {
                                                        "bg-gray-800/40 border-gray-700/50 hover:bg-gray-700/50"
                                                    } else {
                                                        "bg-white/40 border-gray-200/50 hover:bg-white/60"
                                                    },
                                                    if is_open() { "shadow-xl" } else { "shadow-lg" },
                                                )
                                            }
                                            on:click=move |_| {
                                                set_expanded
                                                    .update(|e| {
                                                        *e = if *e == Some(i) { None } else { Some(i) };
                                                    })
                                            }
                                        >
                                            <div class="flex justify-between items-start mb-4">
                                                <div>
                                                    <h3 class=move || {
                                                        format!(
                                                            "text-xl font-bold mb-1 {}",
                                                            if theme.is_dark() { "text-white" } else { "text-gray-900" },
                                                        )
                                                    }>{role.title}</h3>
                                                    <p class="text-indigo-600 font-semibold">{role.company}</p>
                                                    <p class=move || {
                                                        format!(
                                                            "text-sm {}",
                                                            if theme.is_dark() { "text-gray-400" } else { "text-gray-500" },
                                                        )
                                                    }>{format!("{} · {}", role.location, role.period)}</p>
                                                </div>
                                                <div
                                                    class="transition-transform duration-300 text-gray-400"
                                                    class=("rotate-180", is_open)
                                                >
                                                    "▾"
                                                </div>
                                            </div>

                                            <p class=move || {
                                                format!(
                                                    "mb-4 {}",
                                                    if theme.is_dark() { "text-gray-300" } else { "text-gray-600" },
                                                )
                                            }>{role.summary}</p>

                                            <div
                                                class="overflow-hidden transition-all duration-300"
                                                class:max-h-0=move || !is_open()
                                                class:max-h-96=is_open
                                            >
                                                <div class="pt-4 border-t border-gray-200 dark:border-gray-700">
                                                    <ul class=move || {
                                                        format!(
                                                            "mb-4 space-y-2 {}",
                                                            if theme.is_dark() { "text-gray-300" } else { "text-gray-600" },
                                                        )
                                                    }>
                                                        {role
                                                            .details
                                                            .iter()
                                                            .map(|detail| {
                                                                view! {
                                                                    <li class="flex items-start">
                                                                        <span class="text-indigo-600 mr-2">"•"</span>
                                                                        {*detail}
                                                                    </li>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </ul>

                                                    <div class="flex flex-wrap gap-2">
                                                        {role
                                                            .tech
                                                            .iter()
                                                            .map(|tech| {
                                                                view! {
                                                                    <span class="px-3 py-1 text-xs font-medium bg-indigo-100 text-indigo-800 rounded-full dark:bg-indigo-900 dark:text-indigo-200">
                                                                        {*tech}
                                                                    </span>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
