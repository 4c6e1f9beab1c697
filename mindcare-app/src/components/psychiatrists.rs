use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use mindcare_core::consultation::{
    ConsultationDraft, ConsultationTarget, SENT_RESET_MS, success_message,
};
use mindcare_core::models::{Psychiatrist, PublicUser};
use mindcare_core::{ListScreen, directory, routes};

use crate::api;
use crate::components::guard::RequireSession;
use crate::state::SessionStore;

const FETCH_USERS_ERROR: &str = "Failed to fetch users. Please try again later.";

/// Все подписи экрана зависят от того, кого видит пользователь:
/// психиатру показывают пациентов, пациенту психиатров.
struct DirectoryText {
    header: &'static str,
    lead: &'static str,
    list_title: &'static str,
    search_placeholder: &'static str,
    empty_text: &'static str,
    reach_title: &'static str,
    reach_lead: &'static str,
}

fn directory_text(viewer_is_psychiatrist: bool) -> DirectoryText {
    if viewer_is_psychiatrist {
        DirectoryText {
            header: "Connect with Patients",
            lead: "Reach out to a patient to schedule a consultation and provide support.",
            list_title: "Our Patients",
            search_placeholder: "Search patients...",
            empty_text: "No patients found.",
            reach_title: "Reach Out to Patients",
            reach_lead: "Select a patient to schedule a consultation and provide support.",
        }
    } else {
        DirectoryText {
            header: "Connect with Psychiatrists",
            lead: "Reach out to a psychiatrist to schedule a consultation and provide support.",
            list_title: "Our Psychiatrists",
            search_placeholder: "Search psychiatrists...",
            empty_text: "No psychiatrists found.",
            reach_title: "Reach Out to Psychiatrists",
            reach_lead: "Select a psychiatrist to schedule a consultation and provide support.",
        }
    }
}

#[component]
pub(crate) fn PsychiatristsPage() -> impl IntoView {
    view! {
        <RequireSession>
            <PsychiatristsContent />
        </RequireSession>
    }
}

#[component]
fn PsychiatristsContent() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    // Роль берётся из токена один раз: смена роли возможна только
    // новым входом, а вход пересобирает страницу.
    let viewer_is_psychiatrist = store.is_psychiatrist_untracked();
    let text = directory_text(viewer_is_psychiatrist);

    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<ConsultationTarget>);
    let doctors = RwSignal::new(ListScreen::<Psychiatrist>::new());
    let patients = RwSignal::new(ListScreen::<PublicUser>::new());

    if let Some(token) = store.token() {
        if viewer_is_psychiatrist {
            patients.update(|s| s.begin());
            spawn_local(async move {
                match api::fetch_public_users(&token).await {
                    Ok(users) => {
                        patients.update(|s| s.loaded(directory::visible_to(true, &users)))
                    }
                    Err(err) => {
                        patients.update(|s| s.failed(err.user_message(FETCH_USERS_ERROR)))
                    }
                }
            });
        } else {
            doctors.update(|s| s.begin());
            spawn_local(async move {
                match api::fetch_psychiatrists(&token).await {
                    Ok(list) => doctors.update(|s| s.loaded(list)),
                    Err(err) => doctors.update(|s| s.failed(err.user_message(FETCH_USERS_ERROR))),
                }
            });
        }
    }

    let on_select = Callback::new(move |target: ConsultationTarget| selected.set(Some(target)));

    view! {
        <section class="directory-page">
            <a class="back-link" href=routes::DASHBOARD>"Back to Dashboard"</a>

            <header class="directory-header">
                <h2>{text.header}</h2>
                <p>{text.lead}</p>
            </header>

            <div class="directory-layout">
                <div class="directory-list">
                    <h3>{text.list_title}</h3>
                    <input
                        type="search"
                        placeholder=text.search_placeholder
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />

                    <Show when=move || viewer_is_psychiatrist>
                        <PatientList
                            screen=patients
                            search=search
                            on_select=on_select
                            empty_text=text.empty_text
                        />
                    </Show>
                    <Show when=move || !viewer_is_psychiatrist>
                        <DoctorList
                            screen=doctors
                            search=search
                            on_select=on_select
                            empty_text=text.empty_text
                        />
                    </Show>
                </div>

                <ConsultationPanel
                    selected=selected
                    reach_title=text.reach_title
                    reach_lead=text.reach_lead
                />
            </div>
        </section>
    }
}

#[component]
fn DoctorList(
    screen: RwSignal<ListScreen<Psychiatrist>>,
    search: RwSignal<String>,
    on_select: Callback<ConsultationTarget>,
    empty_text: &'static str,
) -> impl IntoView {
    let filtered = move || {
        let query = search.get();
        screen.with(|s| {
            s.items
                .iter()
                .filter(|doctor| directory::matches_search(&doctor.full_name, &query))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show when=move || screen.with(|s| s.error.is_some())>
            <div class="error-banner">
                {move || screen.with(|s| s.error.clone().unwrap_or_default())}
            </div>
        </Show>
        <Show when=move || screen.with(|s| s.loading)>
            <p class="loading">"Loading users..."</p>
        </Show>
        <Show when=move || !screen.with(|s| s.loading) && filtered().is_empty()>
            <p class="empty">{empty_text}</p>
        </Show>
        <For
            each=filtered
            key=|doctor| (doctor.id.clone(), doctor.connections.len())
            children=move |doctor| view! { <DoctorCard doctor=doctor screen=screen on_select=on_select /> }
        />
    }
}

#[component]
fn DoctorCard(
    doctor: Psychiatrist,
    screen: RwSignal<ListScreen<Psychiatrist>>,
    on_select: Callback<ConsultationTarget>,
) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let connected = store
        .user_id()
        .map(|id| doctor.is_connected(&id))
        .unwrap_or(false);
    let doctor_id = doctor.id.clone();
    let target = ConsultationTarget::from(&doctor);
    let select_label = format!("Connect with {}", doctor.full_name);

    let on_connect = move |_| {
        let Some(token) = store.token() else {
            return;
        };
        let doctor_id = doctor_id.clone();
        spawn_local(async move {
            match api::connect_psychiatrist(&token, &doctor_id).await {
                Ok(updated) => {
                    let id = updated.id.clone();
                    screen.update(|s| {
                        s.replaced(|d| d.id == id, updated);
                    });
                }
                Err(err) => screen.update(|s| {
                    s.failed(err.user_message("Failed to connect. Please try again."))
                }),
            }
        });
    };

    view! {
        <article class="person-card">
            <p class="person-name">{doctor.full_name.clone()}</p>
            <small class="person-role">"Psychiatrist"</small>
            <small>{doctor.email.clone()}</small>
            {(!doctor.specialization.is_empty())
                .then(|| view! { <small>{doctor.specialization.clone()}</small> })}
            <div class="person-actions">
                <button
                    on:click=on_connect
                    disabled=move || connected || screen.with(|s| s.loading)
                >
                    {if connected { "Connected" } else { "Connect" }}
                </button>
                <button class="secondary" on:click=move |_| on_select.run(target.clone())>
                    {select_label}
                </button>
            </div>
        </article>
    }
}

#[component]
fn PatientList(
    screen: RwSignal<ListScreen<PublicUser>>,
    search: RwSignal<String>,
    on_select: Callback<ConsultationTarget>,
    empty_text: &'static str,
) -> impl IntoView {
    let filtered = move || {
        let query = search.get();
        screen.with(|s| {
            s.items
                .iter()
                .filter(|user| directory::matches_search(&user.full_name, &query))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show when=move || screen.with(|s| s.error.is_some())>
            <div class="error-banner">
                {move || screen.with(|s| s.error.clone().unwrap_or_default())}
            </div>
        </Show>
        <Show when=move || screen.with(|s| s.loading)>
            <p class="loading">"Loading users..."</p>
        </Show>
        <Show when=move || !screen.with(|s| s.loading) && filtered().is_empty()>
            <p class="empty">{empty_text}</p>
        </Show>
        <For
            each=filtered
            key=|user| user.id.clone()
            children=move |user| view! { <PatientCard user=user on_select=on_select /> }
        />
    }
}

#[component]
fn PatientCard(user: PublicUser, on_select: Callback<ConsultationTarget>) -> impl IntoView {
    let target = ConsultationTarget::from(&user);
    let select_label = format!("Connect with {}", user.full_name);

    view! {
        <article class="person-card">
            <p class="person-name">{user.full_name.clone()}</p>
            <small class="person-role">"Patient"</small>
            <small>{user.email.clone()}</small>
            <div class="person-actions">
                <button on:click=move |_| on_select.run(target.clone())>{select_label}</button>
            </div>
        </article>
    }
}

#[component]
fn ConsultationPanel(
    selected: RwSignal<Option<ConsultationTarget>>,
    reach_title: &'static str,
    reach_lead: &'static str,
) -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let name = RwSignal::new(String::new());
    let contact = RwSignal::new(String::new());
    let sender_email = RwSignal::new(String::new());
    let concern = RwSignal::new(String::new());
    let timing = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let sending = RwSignal::new(false);

    let on_cancel = Callback::new(move |_: ()| {
        selected.set(None);
        error.set(None);
    });

    let on_send = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(target) = selected.get() else {
            return;
        };
        let draft = ConsultationDraft {
            name: name.get(),
            contact: contact.get(),
            sender_email: sender_email.get(),
            concern: concern.get(),
            timing: timing.get(),
        };
        if let Err(message) = draft.validate() {
            error.set(Some(message.to_string()));
            return;
        }
        let Some(token) = store.token() else {
            return;
        };
        error.set(None);
        sending.set(true);
        spawn_local(async move {
            match api::send_consultation(&token, &draft.to_request(&target)).await {
                Ok(_) => {
                    sending.set(false);
                    notice.set(Some(success_message(&target.name)));
                    TimeoutFuture::new(SENT_RESET_MS).await;
                    notice.set(None);
                    selected.set(None);
                    name.set(String::new());
                    contact.set(String::new());
                    sender_email.set(String::new());
                    concern.set(String::new());
                    timing.set(String::new());
                }
                Err(err) => {
                    sending.set(false);
                    error.set(Some(
                        err.user_message("Failed to send email. Please try again."),
                    ));
                }
            }
        });
    });

    view! {
        <aside class="consultation-panel">
            <Show
                when=move || selected.get().is_some()
                fallback=move || {
                    view! {
                        <h3>{reach_title}</h3>
                        <p>{reach_lead}</p>
                    }
                }
            >
                <h3>
                    {move || {
                        format!(
                            "Connect with {}",
                            selected.get().map(|target| target.name).unwrap_or_default(),
                        )
                    }}
                </h3>

                <Show
                    when=move || notice.get().is_none()
                    fallback=move || {
                        view! {
                            <div class="success-message">
                                "✅ "
                                {move || notice.get().unwrap_or_default()}
                            </div>
                        }
                    }
                >
                    <Show when=move || error.get().is_some()>
                        <div class="error-banner">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <form on:submit=move |ev| on_send.run(ev)>
                        <label>"Your Name"</label>
                        <input
                            type="text"
                            placeholder="Enter your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <label>"Contact Number"</label>
                        <input
                            type="text"
                            placeholder="Enter your contact number"
                            prop:value=move || contact.get()
                            on:input=move |ev| contact.set(event_target_value(&ev))
                        />
                        <label>"Your Email"</label>
                        <input
                            type="text"
                            placeholder="Enter your email"
                            prop:value=move || sender_email.get()
                            on:input=move |ev| sender_email.set(event_target_value(&ev))
                        />
                        <label>"Proposed Timing"</label>
                        <input
                            type="text"
                            placeholder="E.g., Weekdays 2-4 PM"
                            prop:value=move || timing.get()
                            on:input=move |ev| timing.set(event_target_value(&ev))
                        />
                        <label>"Consultation Details"</label>
                        <textarea
                            placeholder="Describe the consultation purpose"
                            prop:value=move || concern.get()
                            on:input=move |ev| concern.set(event_target_value(&ev))
                        ></textarea>

                        <div class="form-actions">
                            <button type="submit" disabled=move || sending.get()>"Send"</button>
                            <button type="button" class="secondary" on:click=move |_| on_cancel.run(())>
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </Show>
            </Show>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn psychiatrist_sees_patient_wording() {
        let text = directory_text(true);
        assert_eq!(text.header, "Connect with Patients");
        assert_eq!(text.search_placeholder, "Search patients...");
        assert_eq!(text.empty_text, "No patients found.");
    }

    #[test]
    fn patient_sees_psychiatrist_wording() {
        let text = directory_text(false);
        assert_eq!(text.header, "Connect with Psychiatrists");
        assert_eq!(text.list_title, "Our Psychiatrists");
        assert_eq!(text.reach_title, "Reach Out to Psychiatrists");
    }
}
