use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use mindcare_core::ListScreen;
use mindcare_core::models::{CreateSessionRequest, SupportSession};

use crate::api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::guard::RequireSession;
use crate::state::SessionStore;

/// Сколько держать уведомление о присоединении.
const NOTICE_RESET_MS: u32 = 3_000;

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.open_with_url_and_target(url, "_blank").is_err() {
        leptos::logging::warn!("failed to open meeting link");
    }
}

#[component]
pub(crate) fn SessionsPage() -> impl IntoView {
    view! {
        <RequireSession>
            <SessionsContent />
        </RequireSession>
    }
}

#[component]
fn SessionsContent() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let screen = RwSignal::new(ListScreen::<SupportSession>::new());
    let pending_link = RwSignal::new(None::<String>);

    let title = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let meeting_link = RwSignal::new(String::new());

    if let Some(token) = store.token() {
        screen.update(|s| s.begin());
        spawn_local(async move {
            match api::fetch_sessions(&token).await {
                Ok(sessions) => screen.update(|s| s.loaded(sessions)),
                Err(err) => {
                    screen.update(|s| s.failed(err.user_message("Failed to fetch sessions")))
                }
            }
        });
    }

    // Форма создания видна только психиатру, поэтому обработчик в Callback.
    let on_create = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(token) = store.token() else {
            return;
        };
        let payload = CreateSessionRequest {
            title: title.get(),
            date: date.get(),
            description: description.get(),
            meeting_link: meeting_link.get(),
        };
        screen.update(|s| s.begin());
        spawn_local(async move {
            match api::create_session(&token, &payload).await {
                Ok(created) => {
                    screen.update(|s| s.created(created));
                    title.set(String::new());
                    date.set(String::new());
                    description.set(String::new());
                    meeting_link.set(String::new());
                }
                Err(err) => {
                    screen.update(|s| s.failed(err.user_message("Failed to create session")))
                }
            }
        });
    });

    view! {
        <section class="page-panel">
            <h2>"Support Sessions & Campaigns"</h2>

            <Show when=move || screen.with(|s| s.error.is_some())>
                <div class="error-banner">
                    {move || screen.with(|s| s.error.clone().unwrap_or_default())}
                </div>
            </Show>
            <Show when=move || screen.with(|s| s.notice.is_some())>
                <div class="notice-banner">
                    {move || screen.with(|s| s.notice.clone().unwrap_or_default())}
                </div>
            </Show>

            <Show when=move || store.is_psychiatrist()>
                <form class="session-form" on:submit=move |ev| on_create.run(ev)>
                    <input
                        type="text"
                        placeholder="Session Title"
                        required=true
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <input
                        type="datetime-local"
                        required=true
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Description"
                        required=true
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <input
                        type="url"
                        placeholder="Meeting Link"
                        prop:value=move || meeting_link.get()
                        on:input=move |ev| meeting_link.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || screen.with(|s| s.loading)>
                        "Create Session"
                    </button>
                </form>
            </Show>

            <div class="session-list">
                <For
                    each=move || screen.with(|s| s.items.clone())
                    key=|session| (session.id.clone(), session.feedback.len())
                    children=move |session| {
                        view! { <SessionCard session=session screen=screen pending_link=pending_link /> }
                    }
                />
            </div>

            <Show when=move || pending_link.get().is_some()>
                <ConfirmDialog
                    title="External Link"
                    message="You are about to open the meeting link in a new tab. Continue?"
                    confirm_label="Open"
                    cancel_label="Cancel"
                    on_confirm=Callback::new(move |_| {
                        if let Some(link) = pending_link.get() {
                            open_in_new_tab(&link);
                        }
                        pending_link.set(None);
                    })
                    on_cancel=Callback::new(move |_| pending_link.set(None))
                />
            </Show>
        </section>
    }
}

#[component]
fn SessionCard(
    session: SupportSession,
    screen: RwSignal<ListScreen<SupportSession>>,
    pending_link: RwSignal<Option<String>>,
) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let feedback_draft = RwSignal::new(String::new());
    let session_id = session.id.clone();

    let on_join = Callback::new({
        let session_id = session_id.clone();
        move |_: ()| {
            let Some(token) = store.token() else {
                return;
            };
            let session_id = session_id.clone();
            spawn_local(async move {
                match api::join_session(&token, &session_id).await {
                    Ok(updated) => {
                        let id = updated.id.clone();
                        screen.update(|s| {
                            s.replaced(|item| item.id == id, updated);
                            s.notify("Joined session successfully!");
                        });
                        TimeoutFuture::new(NOTICE_RESET_MS).await;
                        screen.update(|s| s.clear_notice());
                    }
                    Err(err) => {
                        screen.update(|s| s.failed(err.user_message("Failed to join session")))
                    }
                }
            });
        }
    });

    let on_feedback = move |_| {
        let Some(token) = store.token() else {
            return;
        };
        let session_id = session_id.clone();
        let content = feedback_draft.get();
        spawn_local(async move {
            match api::add_feedback(&token, &session_id, &content).await {
                Ok(updated) => {
                    let id = updated.id.clone();
                    screen.update(|s| {
                        s.replaced(|item| item.id == id, updated);
                    });
                }
                Err(err) => {
                    screen.update(|s| s.failed(err.user_message("Failed to submit feedback")))
                }
            }
        });
    };

    let meeting_link = session.meeting_link.clone().filter(|link| !link.is_empty());

    view! {
        <article class="session-card">
            <p><strong>{session.title.clone()}</strong></p>
            <small>{format!("Date: {}", session.scheduled_label())}</small>
            <p>{session.description.clone()}</p>
            <small>{format!("Hosted by: {}", session.host_name())}</small>

            {meeting_link
                .map(|link| {
                    view! {
                        <button class="link-button" on:click=move |_| pending_link.set(Some(link.clone()))>
                            "Open meeting link"
                        </button>
                    }
                })}

            <Show when=move || !store.is_psychiatrist()>
                <button
                    on:click=move |_| on_join.run(())
                    disabled=move || screen.with(|s| s.loading)
                >
                    "Join Session"
                </button>
            </Show>

            <div class="feedback-list">
                {session
                    .feedback
                    .iter()
                    .map(|entry| {
                        view! {
                            <p class="feedback">
                                <strong>{entry.author_name().to_string()}</strong>
                                ": "
                                {entry.content.clone()}
                            </p>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="feedback-box">
                <input
                    placeholder="Add feedback..."
                    prop:value=move || feedback_draft.get()
                    on:input=move |ev| feedback_draft.set(event_target_value(&ev))
                />
                <button on:click=on_feedback disabled=move || screen.with(|s| s.loading)>
                    "Submit Feedback"
                </button>
            </div>
        </article>
    }
}
