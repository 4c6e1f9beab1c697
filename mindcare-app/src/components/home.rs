use leptos::prelude::*;

use mindcare_core::routes;

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "💬",
        "Share Your Story",
        "Openly share your experiences and challenges in a safe, supportive community.",
    ),
    (
        "📖",
        "Curated Resources",
        "Access uplifting music and insightful reading materials reviewed by experts.",
    ),
    (
        "👨‍⚕️",
        "Professional Help",
        "Find qualified psychiatrists for personalized advice and treatment.",
    ),
    (
        "👥",
        "Support Sessions",
        "Join live support sessions designed to foster healing and connection.",
    ),
];

#[component]
pub(crate) fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Mental Health Support"</h1>
            <p class="hero-subtitle">
                "Connect, share, and find support for your mental health journey. Together, we heal and grow stronger."
            </p>
            <div class="hero-actions">
                <a class="button" href=routes::LOGIN>"Login"</a>
                <a class="button secondary" href=routes::REGISTER>"Register"</a>
            </div>
        </section>

        <section class="features">
            {FEATURES
                .into_iter()
                .map(|(icon, title, text)| {
                    view! {
                        <div class="feature-card">
                            <span class="feature-icon">{icon}</span>
                            <h3>{title}</h3>
                            <p>{text}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
