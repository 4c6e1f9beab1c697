use std::future::Future;

use js_sys::{Date, Math};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use mindcare_core::dashboard::{greeting_line, pick_motivation, preview};
use mindcare_core::models::{Material, Post, Profile, Psychiatrist, SupportSession};
use mindcare_core::{ApiResult, routes};

use crate::api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::guard::RequireSession;
use crate::components::sidebar::Sidebar;
use crate::state::SessionStore;

const INSPIRATION_URL: &str = "https://bbrfoundation.org/blog/everyday-mental-health-tips";

/// Переход на внешний сайт делается полной перезагрузкой, код wasm
/// при этом выгружается вместе с сессией.
fn open_inspirations() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_href(INSPIRATION_URL).is_err() {
        leptos::logging::warn!("failed to open external inspirations page");
    }
}

/// Загружает один из списков кабинета. Просроченная авторизация
/// завершает сессию, остальные ошибки остаются баннером на экране.
fn load_list<T, F>(
    target: RwSignal<Vec<T>>,
    error: RwSignal<Option<String>>,
    store: SessionStore,
    navigate: impl Fn(&str, NavigateOptions) + 'static,
    request: F,
) where
    T: Send + Sync + 'static,
    F: Future<Output = ApiResult<Vec<T>>> + 'static,
{
    spawn_local(async move {
        match request.await {
            Ok(items) => target.set(items),
            Err(err) if err.is_unauthorized() => {
                store.clear();
                navigate(routes::LOGIN, NavigateOptions::default());
            }
            Err(err) => error.set(Some(err.user_message("Failed to fetch data"))),
        }
    });
}

#[component]
pub(crate) fn DashboardPage() -> impl IntoView {
    view! {
        <RequireSession>
            <DashboardContent />
        </RequireSession>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    icon: &'static str,
    href: &'static str,
    #[prop(into)] count: Signal<usize>,
) -> impl IntoView {
    view! {
        <a class="stat-card" href=href>
            <span class="stat-icon">{icon}</span>
            <div class="stat-value">{move || count.get()}</div>
            <div class="stat-label">{label}</div>
            <span class="stat-view">"View"</span>
        </a>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let profile = RwSignal::new(None::<Profile>);
    let posts = RwSignal::new(Vec::<Post>::new());
    let materials = RwSignal::new(Vec::<Material>::new());
    let sessions = RwSignal::new(Vec::<SupportSession>::new());
    let psychiatrists = RwSignal::new(Vec::<Psychiatrist>::new());
    let error = RwSignal::new(None::<String>);
    let show_external_dialog = RwSignal::new(false);

    let greeting_hour = Date::new_0().get_hours();
    let motivation = pick_motivation(Math::random());

    if let Some(token) = store.token() {
        // Без профиля кабинет не показывается, эта ошибка завершает сессию.
        {
            let token = token.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::fetch_profile(&token).await {
                    Ok(loaded) => profile.set(Some(loaded)),
                    Err(_) => {
                        store.clear();
                        navigate(routes::LOGIN, NavigateOptions::default());
                    }
                }
            });
        }

        let token2 = token.clone();
        load_list(posts, error, store, navigate.clone(), async move {
            api::fetch_posts(&token2).await
        });
        let token3 = token.clone();
        load_list(materials, error, store, navigate.clone(), async move {
            api::fetch_materials(&token3).await
        });
        let token4 = token.clone();
        load_list(sessions, error, store, navigate.clone(), async move {
            api::fetch_sessions(&token4).await
        });
        let token5 = token;
        load_list(psychiatrists, error, store, navigate.clone(), async move {
            api::fetch_psychiatrists(&token5).await
        });
    }

    let full_name = Signal::derive(move || {
        profile.get().map(|p| p.full_name).unwrap_or_default()
    });
    let viewer_is_psychiatrist =
        Signal::derive(move || profile.get().map(|p| p.is_psychiatrist).unwrap_or(false));

    let on_logout = Callback::new({
        let navigate = navigate.clone();
        move |_| {
            store.clear();
            navigate(routes::LOGIN, NavigateOptions::default());
        }
    });

    view! {
        <div class="dashboard-layout">
            <Sidebar full_name=full_name is_psychiatrist=viewer_is_psychiatrist on_logout=on_logout />

            <main class="dashboard-main">
                <Show when=move || error.get().is_some()>
                    <div class="error-banner">
                        "⚠️ "
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <header class="dashboard-header">
                    <h1>{move || greeting_line(greeting_hour, &full_name.get())}</h1>
                    <p>"Here's what's happening with your mental health journey today."</p>
                </header>

                <section class="stat-grid">
                    <StatCard
                        label="Active Posts"
                        icon="✍️"
                        href=routes::POSTS
                        count=Signal::derive(move || posts.with(Vec::len))
                    />
                    <StatCard
                        label="Materials"
                        icon="📖"
                        href=routes::MATERIALS
                        count=Signal::derive(move || materials.with(Vec::len))
                    />
                    <StatCard
                        label="Sessions"
                        icon="🕒"
                        href=routes::SESSIONS
                        count=Signal::derive(move || sessions.with(Vec::len))
                    />
                    <StatCard
                        label="Connections"
                        icon="👥"
                        href=routes::PSYCHIATRISTS
                        count=Signal::derive(move || psychiatrists.with(Vec::len))
                    />
                </section>

                <section class="recent-section">
                    <div class="section-head">
                        <h2>"Recent Posts"</h2>
                        <a href=routes::POSTS>"View All →"</a>
                    </div>
                    <Show
                        when=move || !posts.with(Vec::is_empty)
                        fallback=|| {
                            view! {
                                <div class="empty-state">
                                    <span class="empty-icon">"✍️"</span>
                                    <p>"No recent posts yet"</p>
                                    <small>"Share your thoughts with the community"</small>
                                </div>
                            }
                        }
                    >
                        <For
                            each=move || posts.get().into_iter().take(3).collect::<Vec<_>>()
                            key=|post| post.id.clone()
                            children=|post| {
                                view! {
                                    <article class="recent-card">
                                        <p>{preview(&post.content, 80)}</p>
                                        <small>{format!("Posted by: {}", post.author_name())}</small>
                                        <small>{post.created_label()}</small>
                                    </article>
                                }
                            }
                        />
                    </Show>
                </section>

                <section class="recent-section">
                    <div class="section-head">
                        <h2>"Recent Materials"</h2>
                        <a href=routes::MATERIALS>"View All →"</a>
                    </div>
                    <Show
                        when=move || !materials.with(Vec::is_empty)
                        fallback=|| {
                            view! {
                                <div class="empty-state">
                                    <span class="empty-icon">"📚"</span>
                                    <p>"No materials added yet"</p>
                                    <small>"Explore our resource library"</small>
                                </div>
                            }
                        }
                    >
                        <For
                            each=move || materials.get().into_iter().take(3).collect::<Vec<_>>()
                            key=|material| material.id.clone()
                            children=|material| {
                                view! {
                                    <article class="recent-card">
                                        <p>{preview(&material.title, 50)}</p>
                                        <span class="kind-badge">{material.kind.label()}</span>
                                        <small>{format!("Added by: {}", material.submitter_name())}</small>
                                    </article>
                                }
                            }
                        />
                    </Show>
                </section>

                <section class="motivation-card">
                    <h2>"Daily Motivation"</h2>
                    <blockquote>{motivation}</blockquote>
                    <button on:click=move |_| show_external_dialog.set(true)>
                        "Read More Inspirations"
                    </button>
                </section>
            </main>

            <Show when=move || show_external_dialog.get()>
                <ConfirmDialog
                    title="External Link Warning"
                    message="You are being redirected to an external site. You will be logged out of the application. Proceed?"
                    confirm_label="OK"
                    cancel_label="Cancel"
                    on_confirm=Callback::new(move |_| {
                        show_external_dialog.set(false);
                        store.clear();
                        open_inspirations();
                    })
                    on_cancel=Callback::new(move |_| show_external_dialog.set(false))
                />
            </Show>
        </div>
    }
}
