use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use mindcare_core::ListScreen;
use mindcare_core::gating::{MATERIAL_RESTRICTED_MESSAGE, MaterialAccess, material_access};
use mindcare_core::models::{CreateMaterialRequest, Material, MaterialKind};

use crate::api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::guard::RequireSession;
use crate::state::SessionStore;

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.open_with_url_and_target(url, "_blank").is_err() {
        leptos::logging::warn!("failed to open material link");
    }
}

#[component]
pub(crate) fn MaterialsPage() -> impl IntoView {
    view! {
        <RequireSession>
            <MaterialsContent />
        </RequireSession>
    }
}

#[component]
fn MaterialsContent() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let screen = RwSignal::new(ListScreen::<Material>::new());
    let pending_link = RwSignal::new(None::<String>);

    let title = RwSignal::new(String::new());
    let kind = RwSignal::new(MaterialKind::default());
    let url = RwSignal::new(String::new());

    if let Some(token) = store.token() {
        screen.update(|s| s.begin());
        spawn_local(async move {
            match api::fetch_materials(&token).await {
                Ok(materials) => screen.update(|s| s.loaded(materials)),
                Err(err) => {
                    screen.update(|s| s.failed(err.user_message("Failed to fetch materials")))
                }
            }
        });
    }

    let on_create = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(token) = store.token() else {
            return;
        };
        let payload = CreateMaterialRequest {
            title: title.get(),
            kind: kind.get(),
            url: url.get(),
        };
        screen.update(|s| s.begin());
        spawn_local(async move {
            match api::create_material(&token, &payload).await {
                Ok(created) => {
                    screen.update(|s| s.created(created));
                    title.set(String::new());
                    kind.set(MaterialKind::default());
                    url.set(String::new());
                }
                Err(err) => {
                    screen.update(|s| s.failed(err.user_message("Failed to add material")))
                }
            }
        });
    };

    view! {
        <section class="page-panel">
            <h2>"Material Management"</h2>

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

            <form class="material-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Title"
                    required=true
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || kind.get().as_str()
                    on:change=move |ev| {
                        if let Some(parsed) = MaterialKind::parse(&event_target_value(&ev)) {
                            kind.set(parsed);
                        }
                    }
                >
                    {MaterialKind::ALL
                        .into_iter()
                        .map(|option| {
                            view! { <option value=option.as_str()>{option.label()}</option> }
                        })
                        .collect_view()}
                </select>
                <input
                    type="url"
                    placeholder="URL"
                    required=true
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || screen.with(|s| s.loading)>
                    "Add Material"
                </button>
            </form>

            <div class="material-list">
                <For
                    each=move || screen.with(|s| s.items.clone())
                    key=|material| (material.id.clone(), material.is_approved)
                    children=move |material| {
                        view! { <MaterialCard material=material screen=screen pending_link=pending_link /> }
                    }
                />
            </div>

            <Show when=move || pending_link.get().is_some()>
                <ConfirmDialog
                    title="External Link"
                    message="You are about to open an external resource in a new tab. Continue?"
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
fn MaterialCard(
    material: Material,
    screen: RwSignal<ListScreen<Material>>,
    pending_link: RwSignal<Option<String>>,
) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let is_approved = material.is_approved;
    let material_id = material.id.clone();
    let link = material.url.clone();

    let on_open = move |_| match material_access(store.is_psychiatrist(), is_approved) {
        MaterialAccess::Restricted => {
            screen.update(|s| s.notify(MATERIAL_RESTRICTED_MESSAGE));
        }
        MaterialAccess::ConfirmRedirect => pending_link.set(Some(link.clone())),
    };

    let on_approve = Callback::new(move |_: ()| {
        let Some(token) = store.token() else {
            return;
        };
        let material_id = material_id.clone();
        spawn_local(async move {
            match api::approve_material(&token, &material_id).await {
                Ok(updated) => {
                    let id = updated.id.clone();
                    screen.update(|s| {
                        s.replaced(|m| m.id == id, updated);
                    });
                }
                Err(err) => {
                    screen.update(|s| s.failed(err.user_message("Failed to approve material")))
                }
            }
        });
    });

    view! {
        <article class="material-card">
            <p>
                <strong>{material.title.clone()}</strong>
                {format!(" ({})", material.kind.as_str())}
            </p>
            <button class="link-button" on:click=on_open>"Open resource"</button>
            <small>{format!("Submitted by: {}", material.submitter_name())}</small>
            <small>{format!("Status: {}", if is_approved { "Approved" } else { "Pending" })}</small>

            <Show when=move || store.is_psychiatrist() && !is_approved>
                <button
                    class="approve-button"
                    on:click=move |_| on_approve.run(())
                    disabled=move || screen.with(|s| s.loading)
                >
                    "Approve"
                </button>
            </Show>
        </article>
    }
}
